use owo_colors::OwoColorize;

use crate::scan_monitoring::domain::{DashboardMetrics, Issue, Repository, Scan, Severity};
use crate::scan_monitoring::services::{DashboardAggregator, SeverityBucket};

/// Stdout rendering for list and detail views.
///
/// Every function returns the finished string; callers decide where it
/// goes. Colors are applied per value so plain fields stay grep-friendly.

fn colored_severity(severity: Severity) -> String {
    match severity {
        Severity::Critical | Severity::High => severity.as_str().red().to_string(),
        Severity::Medium => severity.as_str().yellow().to_string(),
        Severity::Low => severity.as_str().green().to_string(),
        Severity::Other => severity.as_str().to_string(),
    }
}

fn colored_status(scan: &Scan) -> String {
    use crate::scan_monitoring::domain::ScanStatus;
    match scan.status {
        ScanStatus::Completed => scan.status.as_str().green().to_string(),
        ScanStatus::Failed => scan.status.as_str().red().to_string(),
        ScanStatus::InProgress => scan.status.as_str().yellow().to_string(),
        ScanStatus::Pending | ScanStatus::Unknown => scan.status.as_str().to_string(),
    }
}

pub fn render_repositories(repositories: &[Repository]) -> String {
    if repositories.is_empty() {
        return "No repositories registered.\n".to_string();
    }
    let mut out = format!(
        "{:<6} {:<30} {:<16} {:<12} {:<12} {:>6}  {}\n",
        "ID", "NAME", "ORIGIN", "BRANCH", "LANGUAGE", "STARS", "STATUS"
    );
    for repo in repositories {
        out.push_str(&format!(
            "{:<6} {:<30} {:<16} {:<12} {:<12} {:>6}  {}\n",
            repo.id,
            repo.repo_name,
            repo.origin(),
            repo.default_branch,
            repo.language.as_deref().unwrap_or("-"),
            repo.stars,
            repo.status
        ));
    }
    out
}

pub fn render_scans(scans: &[Scan]) -> String {
    if scans.is_empty() {
        return "No scans found.\n".to_string();
    }
    let mut out = format!(
        "{:<6} {:<30} {:<8} {:<12} {:<20} {:>7}\n",
        "ID", "REPOSITORY", "TYPE", "STATUS", "STARTED", "ISSUES"
    );
    for scan in scans {
        out.push_str(&format!(
            "{:<6} {:<30} {:<8} {:<12} {:<20} {:>7}\n",
            scan.id,
            scan.repository_name,
            scan.scan_type,
            colored_status(scan),
            scan.started_at.format("%Y-%m-%d %H:%M:%S"),
            scan.total_issues
        ));
    }
    out
}

pub fn render_scan_detail(scan: &Scan) -> String {
    let mut out = String::new();
    out.push_str(&format!("Scan #{}\n", scan.id));
    out.push_str(&format!(
        "  Repository: {} (#{})\n",
        scan.repository_name, scan.repository_id
    ));
    out.push_str(&format!("  Type:       {}\n", scan.scan_type));
    out.push_str(&format!("  Status:     {}\n", colored_status(scan)));
    out.push_str(&format!(
        "  Started:    {}\n",
        scan.started_at.format("%Y-%m-%d %H:%M:%S")
    ));
    if let Some(completed_at) = scan.completed_at {
        out.push_str(&format!(
            "  Completed:  {}\n",
            completed_at.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    if let Some(duration_ms) = scan.scan_duration_ms {
        out.push_str(&format!(
            "  Duration:   {:.1}s\n",
            duration_ms as f64 / 1000.0
        ));
    }
    out.push_str(&format!("  Files:      {}\n", scan.total_files));
    out.push_str(&format!(
        "  Issues:     {} ({} critical, {} high, {} medium, {} low)\n",
        scan.total_issues,
        scan.critical_count,
        scan.high_count,
        scan.medium_count,
        scan.low_count
    ));
    out
}

pub fn render_issue_buckets(buckets: &[SeverityBucket]) -> String {
    if buckets.is_empty() {
        return "No issues found.\n".to_string();
    }
    let mut out = String::new();
    for bucket in buckets {
        out.push_str(&format!(
            "{} ({})\n",
            colored_severity(bucket.severity),
            bucket.issues.len()
        ));
        for issue in &bucket.issues {
            let marker = if issue.false_positive { " [FP]" } else { "" };
            out.push_str(&format!(
                "  #{:<6} {:<50} {} ({}){}\n",
                issue.id,
                issue.location(),
                issue.rule_name,
                issue.analyzer_source,
                marker
            ));
        }
        out.push('\n');
    }
    out
}

pub fn render_issue_detail(issue: &Issue) -> String {
    let mut out = String::new();
    out.push_str(&format!("Issue #{}\n", issue.id));
    out.push_str(&format!("  Severity:   {}\n", colored_severity(issue.severity)));
    out.push_str(&format!("  Type:       {}\n", issue.issue_type));
    out.push_str(&format!("  Location:   {}", issue.location()));
    if issue.column_number > 0 {
        out.push_str(&format!(":{}", issue.column_number));
    }
    out.push('\n');
    out.push_str(&format!(
        "  Rule:       {} ({})\n",
        issue.rule_name, issue.rule_id
    ));
    out.push_str(&format!("  Analyzer:   {}\n", issue.analyzer_source));
    out.push_str(&format!(
        "  False pos:  {}\n",
        if issue.false_positive { "yes" } else { "no" }
    ));
    out.push_str(&format!("  Description: {}\n", issue.description));
    if let Some(snippet) = &issue.code_snippet {
        out.push_str("\n  Code:\n");
        for line in snippet.lines() {
            out.push_str(&format!("    {}\n", line));
        }
    }
    if let Some(fix) = &issue.suggested_fix {
        out.push_str(&format!("\n  Suggested fix: {}\n", fix));
    }
    out
}

pub fn render_dashboard(metrics: &DashboardMetrics) -> String {
    let mut out = String::new();
    out.push_str("Overview\n");
    out.push_str(&format!(
        "  Repositories: {}\n",
        metrics.total_repositories
    ));
    out.push_str(&format!(
        "  Scans:        {} total, {} completed, {} failed, {} in progress\n",
        metrics.total_scans,
        metrics.completed_scans,
        metrics.failed_scans,
        metrics.in_progress_scans
    ));
    out.push_str(&format!("  Issues:       {}\n", metrics.total_issues));
    if metrics.total_vulnerable_dependencies > 0 {
        out.push_str(&format!(
            "  Vulnerable dependencies: {}\n",
            metrics.total_vulnerable_dependencies
        ));
    }

    out.push_str("\nIssues by severity\n");
    for slice in DashboardAggregator::severity_series(metrics) {
        out.push_str(&format!("  {:<10} {:>6}\n", slice.label, slice.count));
    }

    let analyzers = DashboardAggregator::analyzer_series(metrics);
    if !analyzers.is_empty() {
        out.push_str("\nIssues by analyzer\n");
        for entry in analyzers {
            out.push_str(&format!("  {:<16} {:>6}\n", entry.analyzer, entry.issues));
        }
    }
    out
}
