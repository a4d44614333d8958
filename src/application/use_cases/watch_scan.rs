use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::ports::outbound::{ProgressReporter, ScanBackend};
use crate::scan_monitoring::domain::{Issue, Scan, ScanProgress};
use crate::shared::error::ScanWatchError;
use crate::shared::Result;

/// Everything the monitor knows about the watched scan at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSnapshot {
    pub scan: Scan,
    pub issues: Vec<Issue>,
    /// Latest poll result; `None` until the first poll lands.
    pub progress: Option<ScanProgress>,
}

/// Lifecycle of one watch.
///
/// `LoadFailed` is terminal for the watch: the monitor never retries the
/// initial load, the caller has to start a new watch.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorState {
    Initializing,
    Ready(ScanSnapshot),
    LoadFailed(String),
}

/// ScanMonitor - Use case for following one scan to completion
///
/// Owns the watch lifecycle: one initial load (scan record and issue list
/// fetched concurrently), then a fixed-interval progress poll that stays
/// armed only while the scan is non-terminal. The scan record's `status`
/// is the authoritative terminal signal; a poll reporting 100% merely
/// triggers a confirming fetch of the record.
///
/// Polls are serialized: each response is awaited and applied before the
/// next tick fires, so updates can never arrive out of order. Teardown
/// disarms the poll synchronously; a response already in flight is
/// discarded when it lands.
///
/// # Type Parameters
/// * `B` - ScanBackend implementation
pub struct ScanMonitor<B: ScanBackend> {
    backend: Arc<B>,
    scan_id: i64,
    poll_interval: Duration,
    state: Mutex<MonitorState>,
    armed: AtomicBool,
}

impl<B: ScanBackend> ScanMonitor<B> {
    /// Fixed delay between progress polls.
    pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

    pub fn new(backend: Arc<B>, scan_id: i64) -> Self {
        Self::with_poll_interval(backend, scan_id, Self::POLL_INTERVAL)
    }

    pub(crate) fn with_poll_interval(
        backend: Arc<B>,
        scan_id: i64,
        poll_interval: Duration,
    ) -> Self {
        Self {
            backend,
            scan_id,
            poll_interval,
            state: Mutex::new(MonitorState::Initializing),
            armed: AtomicBool::new(false),
        }
    }

    pub fn scan_id(&self) -> i64 {
        self.scan_id
    }

    /// Current state of the watch.
    pub fn state(&self) -> MonitorState {
        self.state.lock().unwrap().clone()
    }

    /// Latest snapshot, if the initial load has succeeded.
    pub fn snapshot(&self) -> Option<ScanSnapshot> {
        match &*self.state.lock().unwrap() {
            MonitorState::Ready(snapshot) => Some(snapshot.clone()),
            _ => None,
        }
    }

    /// Whether the progress poll is currently armed.
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    /// Performs the initial load: scan record and issue list, concurrently.
    ///
    /// On success the monitor becomes `Ready` and the poll is armed unless
    /// the scan is already terminal. On failure the monitor becomes
    /// `LoadFailed` and the error propagates; partial data is never kept.
    pub async fn attach(&self) -> Result<()> {
        let loaded = futures::future::try_join(
            self.backend.scan(self.scan_id),
            self.backend.issues_for_scan(self.scan_id),
        )
        .await;
        match loaded {
            Ok((scan, issues)) => {
                let terminal = scan.is_terminal();
                *self.state.lock().unwrap() = MonitorState::Ready(ScanSnapshot {
                    scan,
                    issues,
                    progress: None,
                });
                self.armed.store(!terminal, Ordering::SeqCst);
                Ok(())
            }
            Err(e) => {
                let details = e.to_string();
                *self.state.lock().unwrap() = MonitorState::LoadFailed(details.clone());
                Err(ScanWatchError::LoadFailed {
                    scan_id: self.scan_id,
                    details,
                }
                .into())
            }
        }
    }

    /// Runs the poll loop until the scan turns terminal or the watch is
    /// detached.
    ///
    /// A failed poll is reported as a warning and the loop keeps going;
    /// only `detach` or a terminal status ends it.
    pub async fn run(&self, reporter: &dyn ProgressReporter) {
        loop {
            tokio::time::sleep(self.poll_interval).await;
            if !self.is_armed() {
                break;
            }

            let progress = match self.backend.scan_progress(self.scan_id).await {
                Ok(progress) => progress,
                Err(e) => {
                    reporter.report_warning(&format!("Progress poll failed: {}", e));
                    continue;
                }
            };

            // The watch may have been torn down while the request was in
            // flight; a late response must not resurrect it.
            if !self.is_armed() {
                break;
            }

            self.apply_progress(progress.clone());
            reporter.report_poll(&progress);

            if progress.indicates_completion() {
                match self.backend.scan(self.scan_id).await {
                    Ok(scan) if scan.is_terminal() => {
                        self.finish(scan, reporter).await;
                        break;
                    }
                    Ok(_) => {
                        // Backend still finalizing; keep polling until the
                        // record itself says terminal.
                    }
                    Err(e) => {
                        reporter.report_warning(&format!("Status check failed: {}", e));
                    }
                }
            }
        }
    }

    /// Tears the watch down. Safe to call from another task; the poll loop
    /// observes the flag on its next step and any in-flight response is
    /// dropped.
    pub fn detach(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }

    fn apply_progress(&self, progress: ScanProgress) {
        if let MonitorState::Ready(snapshot) = &mut *self.state.lock().unwrap() {
            snapshot.progress = Some(progress);
        }
    }

    /// Final refresh once the record reports terminal: re-fetch the issue
    /// list so the view shows the complete result set, then disarm.
    async fn finish(&self, scan: Scan, reporter: &dyn ProgressReporter) {
        let issues = match self.backend.issues_for_scan(self.scan_id).await {
            Ok(issues) => Some(issues),
            Err(e) => {
                reporter.report_warning(&format!("Final issue refresh failed: {}", e));
                None
            }
        };

        if self.is_armed() {
            if let MonitorState::Ready(snapshot) = &mut *self.state.lock().unwrap() {
                let status = scan.status;
                let total = scan.total_issues;
                snapshot.scan = scan;
                if let Some(issues) = issues {
                    snapshot.issues = issues;
                }
                reporter.report_completion(&format!(
                    "Scan #{} finished: {} ({} issues)",
                    self.scan_id, status, total
                ));
            }
        }
        self.detach();
    }
}
