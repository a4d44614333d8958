use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use scanwatch::prelude::*;

/// Scripted ScanBackend for exercising use cases without a server.
///
/// Responses are queued per endpoint. Each call pops the next queued
/// response and the final one repeats, so a short script can cover an
/// arbitrarily long poll loop. Endpoints with nothing scripted fail with
/// a connection error, which doubles as the unreachable-backend case.
#[derive(Default)]
pub struct MockScanBackend {
    scan_records: Mutex<VecDeque<Scan>>,
    issue_lists: Mutex<VecDeque<Vec<Issue>>>,
    progress_updates: Mutex<VecDeque<ScanProgress>>,
    issue_detail: Mutex<Option<Issue>>,
    triage_result: Mutex<Option<Issue>>,
    dashboard: Mutex<Option<DashboardMetrics>>,
}

impl MockScanBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend where every call fails, as if the server were down.
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Queues a response for scan record fetches (and scan creation).
    pub fn with_scan_record(self, scan: Scan) -> Self {
        self.scan_records.lock().unwrap().push_back(scan);
        self
    }

    /// Queues a response for issue list fetches.
    pub fn with_issue_list(self, issues: Vec<Issue>) -> Self {
        self.issue_lists.lock().unwrap().push_back(issues);
        self
    }

    /// Queues a response for progress polls.
    pub fn with_progress_update(self, progress: ScanProgress) -> Self {
        self.progress_updates.lock().unwrap().push_back(progress);
        self
    }

    pub fn with_issue_detail(self, issue: Issue) -> Self {
        *self.issue_detail.lock().unwrap() = Some(issue);
        self
    }

    pub fn with_triage_result(self, issue: Issue) -> Self {
        *self.triage_result.lock().unwrap() = Some(issue);
        self
    }

    pub fn with_dashboard(self, metrics: DashboardMetrics) -> Self {
        *self.dashboard.lock().unwrap() = Some(metrics);
        self
    }

    fn next_or_last<T: Clone>(queue: &Mutex<VecDeque<T>>) -> Option<T> {
        let mut queue = queue.lock().unwrap();
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }

    fn refused<T>() -> Result<T> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

#[async_trait]
impl ScanBackend for MockScanBackend {
    async fn repositories(&self) -> Result<Vec<Repository>> {
        Self::refused()
    }

    async fn import_repositories(&self, _request: &ImportRequest) -> Result<()> {
        Self::refused()
    }

    async fn delete_repository(&self, _repository_id: i64) -> Result<()> {
        Self::refused()
    }

    async fn create_scan(&self, _request: &CreateScanRequest) -> Result<Scan> {
        Self::next_or_last(&self.scan_records).ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    async fn scans(&self) -> Result<Vec<Scan>> {
        let records = self.scan_records.lock().unwrap();
        if records.is_empty() {
            return Self::refused();
        }
        Ok(records.iter().cloned().collect())
    }

    async fn scans_for_repository(&self, repository_id: i64) -> Result<Vec<Scan>> {
        let scans = self.scans().await?;
        Ok(scans
            .into_iter()
            .filter(|scan| scan.repository_id == repository_id)
            .collect())
    }

    async fn scan(&self, _scan_id: i64) -> Result<Scan> {
        Self::next_or_last(&self.scan_records).ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    async fn delete_scan(&self, _scan_id: i64) -> Result<()> {
        Self::refused()
    }

    async fn scan_progress(&self, _scan_id: i64) -> Result<ScanProgress> {
        Self::next_or_last(&self.progress_updates)
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    async fn issues_for_scan(&self, _scan_id: i64) -> Result<Vec<Issue>> {
        Self::next_or_last(&self.issue_lists).ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    async fn issues_by_severity(&self, scan_id: i64, severity: Severity) -> Result<Vec<Issue>> {
        let issues = self.issues_for_scan(scan_id).await?;
        Ok(issues
            .into_iter()
            .filter(|issue| issue.severity == severity)
            .collect())
    }

    async fn issue(&self, _issue_id: i64) -> Result<Issue> {
        self.issue_detail
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    async fn mark_false_positive(&self, _issue_id: i64) -> Result<Issue> {
        self.triage_result
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    async fn dashboard_overview(&self) -> Result<DashboardMetrics> {
        self.dashboard
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }

    async fn download_report(&self, _scan_id: i64, _format: ReportFormat) -> Result<Vec<u8>> {
        Self::refused()
    }
}
