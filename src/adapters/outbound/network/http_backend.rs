use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ports::outbound::{CreateScanRequest, ImportRequest, ScanBackend};
use crate::scan_monitoring::domain::{
    DashboardMetrics, Issue, Repository, Scan, ScanProgress, Severity,
};
use crate::scan_monitoring::services::{ReportFormat, ReportLocator};
use crate::shared::error::ScanWatchError;
use crate::shared::Result;

/// HTTP client for the scan service REST API
///
/// Implements the ScanBackend port against the backend's JSON endpoints.
/// Every method is a single request; there is no retry and no caching,
/// callers decide how failures propagate.
pub struct HttpScanBackend {
    client: Client,
    base_url: String,
}

impl HttpScanBackend {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for the given base URL (e.g., `http://localhost:8080/api`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("scanwatch/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn ensure_success(method: &'static str, url: &str, status: StatusCode) -> Result<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(ScanWatchError::UnexpectedStatus {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into())
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self.client.get(&url).send().await?;
        Self::ensure_success("GET", &url, response.status())?;
        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.url(path);
        let response = self.client.post(&url).json(body).send().await?;
        Self::ensure_success("POST", &url, response.status())?;
        Ok(response)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        let response = self.client.delete(&url).send().await?;
        Self::ensure_success("DELETE", &url, response.status())
    }
}

#[async_trait]
impl ScanBackend for HttpScanBackend {
    async fn repositories(&self) -> Result<Vec<Repository>> {
        self.get_json("/repositories").await
    }

    async fn import_repositories(&self, request: &ImportRequest) -> Result<()> {
        self.post_json("/repositories/import", request).await?;
        Ok(())
    }

    async fn delete_repository(&self, repository_id: i64) -> Result<()> {
        self.delete(&format!("/repositories/{}", repository_id)).await
    }

    async fn create_scan(&self, request: &CreateScanRequest) -> Result<Scan> {
        let response = self.post_json("/scans", request).await?;
        Ok(response.json().await?)
    }

    async fn scans(&self) -> Result<Vec<Scan>> {
        self.get_json("/scans").await
    }

    async fn scans_for_repository(&self, repository_id: i64) -> Result<Vec<Scan>> {
        self.get_json(&format!("/scans/repository/{}", repository_id))
            .await
    }

    async fn scan(&self, scan_id: i64) -> Result<Scan> {
        self.get_json(&format!("/scans/{}", scan_id)).await
    }

    async fn delete_scan(&self, scan_id: i64) -> Result<()> {
        self.delete(&format!("/scans/{}", scan_id)).await
    }

    async fn scan_progress(&self, scan_id: i64) -> Result<ScanProgress> {
        self.get_json(&format!("/scans/{}/progress", scan_id)).await
    }

    async fn issues_for_scan(&self, scan_id: i64) -> Result<Vec<Issue>> {
        self.get_json(&format!("/issues/scan/{}", scan_id)).await
    }

    async fn issues_by_severity(&self, scan_id: i64, severity: Severity) -> Result<Vec<Issue>> {
        self.get_json(&format!(
            "/issues/scan/{}/severity/{}",
            scan_id,
            severity.as_str()
        ))
        .await
    }

    async fn issue(&self, issue_id: i64) -> Result<Issue> {
        self.get_json(&format!("/issues/{}", issue_id)).await
    }

    async fn mark_false_positive(&self, issue_id: i64) -> Result<Issue> {
        let url = self.url(&format!("/issues/{}/mark-false-positive", issue_id));
        let response = self.client.put(&url).send().await?;
        Self::ensure_success("PUT", &url, response.status())?;
        Ok(response.json().await?)
    }

    async fn dashboard_overview(&self) -> Result<DashboardMetrics> {
        self.get_json("/dashboard/overview").await
    }

    async fn download_report(&self, scan_id: i64, format: ReportFormat) -> Result<Vec<u8>> {
        let url = ReportLocator::report_url(&self.base_url, scan_id, format);
        let response = self.client.get(&url).send().await?;
        Self::ensure_success("GET", &url, response.status())?;
        Ok(response.bytes().await?.to_vec())
    }
}
