use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Aggregate counters the backend computes across all repositories and
/// scans.
///
/// Produced in a single response and never mutated on the client; a fresh
/// fetch replaces the whole value. Per-severity counters cover live issues
/// only, so they can be lower than `total_issues` after triage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    #[serde(default)]
    pub total_repositories: u64,
    #[serde(default)]
    pub total_scans: u64,
    #[serde(default)]
    pub completed_scans: u64,
    #[serde(default)]
    pub failed_scans: u64,
    #[serde(default)]
    pub in_progress_scans: u64,
    #[serde(default)]
    pub total_issues: u64,
    #[serde(default)]
    pub critical_issues: u64,
    #[serde(default)]
    pub high_issues: u64,
    #[serde(default)]
    pub medium_issues: u64,
    #[serde(default)]
    pub low_issues: u64,
    #[serde(default)]
    pub total_vulnerable_dependencies: u64,
    #[serde(default)]
    pub issues_by_type: HashMap<String, u64>,
    #[serde(default)]
    pub issues_by_severity: HashMap<String, u64>,
    #[serde(default)]
    pub issues_by_analyzer: HashMap<String, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_metrics() {
        let json = r#"{
            "totalRepositories": 5,
            "totalScans": 12,
            "completedScans": 9,
            "failedScans": 1,
            "inProgressScans": 2,
            "totalIssues": 140,
            "criticalIssues": 4,
            "highIssues": 20,
            "mediumIssues": 66,
            "lowIssues": 50,
            "totalVulnerableDependencies": 7,
            "issuesByType": {"SQL_INJECTION": 3},
            "issuesBySeverity": {"CRITICAL": 4, "HIGH": 20},
            "issuesByAnalyzer": {"bandit": 90, "semgrep": 50}
        }"#;
        let metrics: DashboardMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.total_repositories, 5);
        assert_eq!(metrics.issues_by_analyzer.get("bandit"), Some(&90));
    }

    #[test]
    fn test_deserialize_metrics_with_missing_maps() {
        let metrics: DashboardMetrics =
            serde_json::from_str(r#"{"totalRepositories": 1}"#).unwrap();
        assert_eq!(metrics.total_repositories, 1);
        assert!(metrics.issues_by_type.is_empty());
        assert_eq!(metrics.critical_issues, 0);
    }
}
