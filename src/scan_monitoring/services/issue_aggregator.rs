use std::collections::HashMap;

use crate::scan_monitoring::domain::{Issue, Severity};

/// Issues of one severity, in the order the backend returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityBucket {
    pub severity: Severity,
    pub issues: Vec<Issue>,
}

/// Pure grouping and selection over a scan's issue list.
///
/// Operates on whatever slice the caller holds; it never fetches and never
/// mutates its input, so stale views are the caller's concern.
pub struct IssueAggregator;

impl IssueAggregator {
    /// Groups issues into severity buckets.
    ///
    /// Buckets appear in fixed severity order (critical first, unrecognized
    /// last) and only for severities actually present. Within a bucket the
    /// input order is preserved.
    pub fn bucket_by_severity(issues: &[Issue]) -> Vec<SeverityBucket> {
        let mut grouped: HashMap<Severity, Vec<Issue>> = HashMap::new();
        for issue in issues {
            grouped
                .entry(issue.severity)
                .or_default()
                .push(issue.clone());
        }
        Severity::BUCKET_ORDER
            .iter()
            .filter_map(|severity| {
                grouped.remove(severity).map(|issues| SeverityBucket {
                    severity: *severity,
                    issues,
                })
            })
            .collect()
    }

    /// Counts issues per analyzer source.
    pub fn count_by_analyzer(issues: &[Issue]) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for issue in issues {
            *counts.entry(issue.analyzer_source.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Finds an issue by id within the caller's slice.
    pub fn find_issue(issues: &[Issue], issue_id: i64) -> Option<&Issue> {
        issues.iter().find(|issue| issue.id == issue_id)
    }
}
