use async_trait::async_trait;
use serde::Serialize;

use crate::scan_monitoring::domain::{
    DashboardMetrics, Issue, Repository, Scan, ScanProgress, Severity,
};
use crate::scan_monitoring::services::ReportFormat;
use crate::shared::Result;

/// Request body for importing repositories from a GitHub account.
///
/// Exactly one of `github_username` / `github_org` should be set; the
/// backend rejects requests carrying both or neither.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_org: Option<String>,
    #[serde(rename = "type")]
    pub account_type: String,
}

impl ImportRequest {
    pub fn for_user(username: impl Into<String>) -> Self {
        Self {
            github_username: Some(username.into()),
            github_org: None,
            account_type: "user".to_string(),
        }
    }

    pub fn for_org(org: impl Into<String>) -> Self {
        Self {
            github_username: None,
            github_org: Some(org.into()),
            account_type: "org".to_string(),
        }
    }
}

/// Request body for starting a scan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScanRequest {
    pub repository_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// ScanBackend port for talking to the scan service
///
/// This port abstracts the remote backend that owns repositories, scans,
/// issues, and reports. All calls are single round-trips; none of them
/// retries or caches.
///
/// # Async Support
/// All methods are async. Implementations must be `Send + Sync` so the
/// watch loop can poll while other commands run.
#[async_trait]
pub trait ScanBackend: Send + Sync {
    /// Lists all registered repositories.
    async fn repositories(&self) -> Result<Vec<Repository>>;

    /// Imports repositories from a GitHub user or organization.
    async fn import_repositories(&self, request: &ImportRequest) -> Result<()>;

    /// Deletes a repository and everything derived from it.
    async fn delete_repository(&self, repository_id: i64) -> Result<()>;

    /// Starts a scan and returns the newly created record.
    async fn create_scan(&self, request: &CreateScanRequest) -> Result<Scan>;

    /// Lists all scans across repositories.
    async fn scans(&self) -> Result<Vec<Scan>>;

    /// Lists the scans of one repository.
    async fn scans_for_repository(&self, repository_id: i64) -> Result<Vec<Scan>>;

    /// Fetches a single scan record.
    async fn scan(&self, scan_id: i64) -> Result<Scan>;

    /// Deletes a scan and its issues.
    async fn delete_scan(&self, scan_id: i64) -> Result<()>;

    /// Fetches the current progress of a running scan.
    async fn scan_progress(&self, scan_id: i64) -> Result<ScanProgress>;

    /// Lists every issue found by a scan.
    async fn issues_for_scan(&self, scan_id: i64) -> Result<Vec<Issue>>;

    /// Lists a scan's issues of one severity.
    async fn issues_by_severity(&self, scan_id: i64, severity: Severity) -> Result<Vec<Issue>>;

    /// Fetches a single issue.
    async fn issue(&self, issue_id: i64) -> Result<Issue>;

    /// Marks an issue as a false positive and returns the updated record.
    async fn mark_false_positive(&self, issue_id: i64) -> Result<Issue>;

    /// Fetches the aggregate dashboard counters.
    async fn dashboard_overview(&self) -> Result<DashboardMetrics>;

    /// Downloads a scan report in the given format as raw bytes.
    async fn download_report(&self, scan_id: i64, format: ReportFormat) -> Result<Vec<u8>>;
}
