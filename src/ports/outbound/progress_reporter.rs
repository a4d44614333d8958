use crate::scan_monitoring::domain::ScanProgress;

/// ProgressReporter port for surfacing watch activity
///
/// This port abstracts progress reporting (e.g., to stderr) so the watch
/// loop can run headless in tests. Implementations must be `Send + Sync`
/// because the loop holds the reporter across await points.
pub trait ProgressReporter: Send + Sync {
    /// Reports a plain status message
    fn report(&self, message: &str);

    /// Reports one poll result with percentage and current step
    fn report_poll(&self, progress: &ScanProgress);

    /// Reports a non-fatal problem (e.g., one failed poll)
    fn report_warning(&self, message: &str);

    /// Reports that the watched scan reached a terminal state
    fn report_completion(&self, message: &str);
}
