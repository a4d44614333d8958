/// Integration tests driving the watch, triage, and aggregation flows
/// through the public library API with scripted backends.
mod test_utilities;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use scanwatch::prelude::*;
use test_utilities::mocks::{MockProgressReporter, MockScanBackend};

fn scan_record(status: ScanStatus) -> Scan {
    Scan {
        id: 42,
        repository_id: 3,
        repository_name: "hello-world".to_string(),
        scan_type: "FULL".to_string(),
        status,
        started_at: Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap(),
        completed_at: None,
        total_files: 120,
        total_issues: 0,
        critical_count: 0,
        high_count: 0,
        medium_count: 0,
        low_count: 0,
        scan_duration_ms: None,
    }
}

fn completed_scan(total_issues: u32) -> Scan {
    Scan {
        status: ScanStatus::Completed,
        completed_at: Some(Utc.with_ymd_and_hms(2026, 1, 10, 12, 3, 30).unwrap()),
        total_issues,
        scan_duration_ms: Some(210_000),
        ..scan_record(ScanStatus::Completed)
    }
}

fn issue_with_severity(id: i64, severity: Severity, analyzer: &str) -> Issue {
    Issue {
        id,
        scan_id: 42,
        file_id: id * 10,
        file_path: format!("src/handlers/file_{}.py", id),
        line_number: 14,
        column_number: 4,
        issue_type: "HARDCODED_SECRET".to_string(),
        severity,
        rule_id: "B105".to_string(),
        rule_name: "hardcoded_password_string".to_string(),
        description: "Possible hardcoded password".to_string(),
        code_snippet: None,
        suggested_fix: None,
        analyzer_source: analyzer.to_string(),
        false_positive: false,
    }
}

fn progress_update(pct: u8) -> ScanProgress {
    ScanProgress {
        progress: pct,
        current_step: format!("Analyzing ({}%)", pct),
    }
}

mod watch_lifecycle_tests {
    use super::*;

    #[tokio::test]
    async fn test_attach_provides_snapshot_and_arms_running_scan() {
        let backend = Arc::new(
            MockScanBackend::new()
                .with_scan_record(scan_record(ScanStatus::InProgress))
                .with_issue_list(vec![issue_with_severity(1, Severity::High, "bandit")]),
        );
        let monitor = ScanMonitor::new(backend, 42);

        monitor.attach().await.unwrap();

        assert!(monitor.is_armed());
        let snapshot = monitor.snapshot().unwrap();
        assert_eq!(snapshot.scan.status, ScanStatus::InProgress);
        assert_eq!(snapshot.issues.len(), 1);
        assert_eq!(snapshot.progress, None);
    }

    #[tokio::test]
    async fn test_attach_leaves_completed_scan_disarmed() {
        let backend = Arc::new(
            MockScanBackend::new()
                .with_scan_record(completed_scan(1))
                .with_issue_list(vec![issue_with_severity(1, Severity::Low, "semgrep")]),
        );
        let monitor = ScanMonitor::new(backend, 42);

        monitor.attach().await.unwrap();

        assert!(!monitor.is_armed());
        assert!(monitor.snapshot().is_some());
    }

    #[tokio::test]
    async fn test_attach_against_unreachable_backend_fails_the_watch() {
        let backend = Arc::new(MockScanBackend::unreachable());
        let monitor = ScanMonitor::new(backend, 42);

        let result = monitor.attach().await;

        assert!(result.is_err());
        assert!(!monitor.is_armed());
        assert!(matches!(monitor.state(), MonitorState::LoadFailed(_)));
        assert!(monitor.snapshot().is_none());
    }

    /// Full watch lifecycle at the production poll interval: one poll at
    /// 100%, a confirming record fetch, and the final issue refresh.
    #[tokio::test]
    async fn test_watch_runs_to_completion() {
        let backend = Arc::new(
            MockScanBackend::new()
                .with_scan_record(scan_record(ScanStatus::InProgress))
                .with_scan_record(completed_scan(2))
                .with_issue_list(vec![issue_with_severity(1, Severity::High, "bandit")])
                .with_issue_list(vec![
                    issue_with_severity(1, Severity::High, "bandit"),
                    issue_with_severity(2, Severity::Low, "semgrep"),
                ])
                .with_progress_update(progress_update(100)),
        );
        let monitor = ScanMonitor::new(backend, 42);
        let reporter = MockProgressReporter::new();

        monitor.attach().await.unwrap();
        monitor.run(&reporter).await;

        assert!(!monitor.is_armed());
        let snapshot = monitor.snapshot().unwrap();
        assert_eq!(snapshot.scan.status, ScanStatus::Completed);
        assert_eq!(snapshot.issues.len(), 2);

        let messages = reporter.get_messages();
        assert!(messages.iter().any(|m| m.contains("Progress: 100%")));
        assert!(messages
            .iter()
            .any(|m| m.contains("Completed: Scan #42 finished: COMPLETED (2 issues)")));
    }

    #[tokio::test]
    async fn test_detach_disarms_but_keeps_the_snapshot() {
        let backend = Arc::new(
            MockScanBackend::new()
                .with_scan_record(scan_record(ScanStatus::InProgress))
                .with_issue_list(vec![]),
        );
        let monitor = ScanMonitor::new(backend, 42);

        monitor.attach().await.unwrap();
        monitor.detach();

        assert!(!monitor.is_armed());
        assert!(monitor.snapshot().is_some());
    }
}

mod triage_tests {
    use super::*;

    #[tokio::test]
    async fn test_mark_false_positive_updates_list_in_place() {
        let mut confirmed = issue_with_severity(2, Severity::Medium, "bandit");
        confirmed.false_positive = true;
        let backend = Arc::new(MockScanBackend::new().with_triage_result(confirmed));
        let use_case = TriageIssueUseCase::new(backend);
        let mut issues = vec![
            issue_with_severity(1, Severity::High, "bandit"),
            issue_with_severity(2, Severity::Medium, "bandit"),
            issue_with_severity(3, Severity::Low, "semgrep"),
        ];

        let updated = use_case.mark_false_positive(&mut issues, 2).await.unwrap();

        assert!(updated.false_positive);
        let ids: Vec<i64> = issues.iter().map(|issue| issue.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(issues[1].false_positive);
        assert!(!issues[0].false_positive);
    }

    #[tokio::test]
    async fn test_triage_failure_leaves_list_untouched() {
        let backend = Arc::new(MockScanBackend::unreachable());
        let use_case = TriageIssueUseCase::new(backend);
        let mut issues = vec![issue_with_severity(5, Severity::Critical, "trivy")];

        let result = use_case.mark_false_positive(&mut issues, 5).await;

        assert!(result.is_err());
        assert!(!issues[0].false_positive);
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("mark issue #5"));
    }
}

mod aggregation_tests {
    use super::*;

    #[test]
    fn test_buckets_ordered_by_severity_rank() {
        let issues = vec![
            issue_with_severity(1, Severity::Low, "bandit"),
            issue_with_severity(2, Severity::Critical, "trivy"),
            issue_with_severity(3, Severity::Low, "bandit"),
            issue_with_severity(4, Severity::High, "semgrep"),
        ];

        let buckets = IssueAggregator::bucket_by_severity(&issues);

        let severities: Vec<Severity> = buckets.iter().map(|b| b.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Critical, Severity::High, Severity::Low]
        );
    }

    #[test]
    fn test_bucket_rows_preserve_backend_order() {
        let issues = vec![
            issue_with_severity(9, Severity::Low, "bandit"),
            issue_with_severity(4, Severity::Low, "bandit"),
            issue_with_severity(7, Severity::Low, "semgrep"),
        ];

        let buckets = IssueAggregator::bucket_by_severity(&issues);

        assert_eq!(buckets.len(), 1);
        let ids: Vec<i64> = buckets[0].issues.iter().map(|issue| issue.id).collect();
        assert_eq!(ids, vec![9, 4, 7]);
    }

    #[test]
    fn test_analyzer_counts() {
        let issues = vec![
            issue_with_severity(1, Severity::High, "bandit"),
            issue_with_severity(2, Severity::Low, "bandit"),
            issue_with_severity(3, Severity::Low, "semgrep"),
        ];

        let counts = IssueAggregator::count_by_analyzer(&issues);

        assert_eq!(counts.get("bandit"), Some(&2));
        assert_eq!(counts.get("semgrep"), Some(&1));
    }
}

mod dashboard_tests {
    use super::*;

    fn overview_from_wire() -> DashboardMetrics {
        serde_json::from_str(
            r#"{
                "totalRepositories": 2,
                "totalScans": 9,
                "completedScans": 7,
                "failedScans": 1,
                "inProgressScans": 1,
                "totalIssues": 40,
                "criticalIssues": 2,
                "highIssues": 8,
                "mediumIssues": 12,
                "lowIssues": 18,
                "totalVulnerableDependencies": 3,
                "issuesByType": {"HARDCODED_SECRET": 5},
                "issuesBySeverity": {"CRITICAL": 2, "HIGH": 8, "MEDIUM": 12, "LOW": 18},
                "issuesByAnalyzer": {"semgrep": 15, "bandit": 15, "trivy": 10}
            }"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_overview_round_trip_through_backend() {
        let backend = MockScanBackend::new().with_dashboard(overview_from_wire());

        let metrics = backend.dashboard_overview().await.unwrap();

        assert_eq!(metrics.total_issues, 40);
        assert_eq!(metrics.total_vulnerable_dependencies, 3);
    }

    #[test]
    fn test_severity_series_covers_four_levels() {
        let series = DashboardAggregator::severity_series(&overview_from_wire());

        assert_eq!(series.len(), 4);
        assert_eq!(series[0].label, "Critical");
        assert_eq!(series[0].count, 2);
        assert_eq!(series[0].color, "#dc2626");
        assert_eq!(series[3].label, "Low");
        assert_eq!(series[3].count, 18);
    }

    #[test]
    fn test_analyzer_series_sorted_by_count_then_name() {
        let series = DashboardAggregator::analyzer_series(&overview_from_wire());

        let names: Vec<&str> = series.iter().map(|e| e.analyzer.as_str()).collect();
        assert_eq!(names, vec!["bandit", "semgrep", "trivy"]);
        assert_eq!(series[0].issues, 15);
        assert_eq!(series[2].issues, 10);
    }
}

mod report_naming_tests {
    use super::*;

    #[test]
    fn test_report_url_for_every_format() {
        for format in ReportFormat::ALL {
            let url = ReportLocator::report_url("http://localhost:8080/api", 42, format);
            assert_eq!(
                url,
                format!(
                    "http://localhost:8080/api/reports/scan/42/{}",
                    format.as_path_segment()
                )
            );
        }
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(
            ReportLocator::default_file_name(42, ReportFormat::Pdf),
            "scan-42-report.pdf"
        );
        assert_eq!(
            ReportLocator::default_file_name(42, ReportFormat::Text),
            "scan-42-report.txt"
        );
    }
}
