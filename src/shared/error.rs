use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems and shell scripts to distinguish between
/// the outcome of a watched scan and failures of the tool itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the command completed, and a watched scan (if any) did not fail
    Success = 0,
    /// The watched scan reached the FAILED terminal state
    ScanFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ScanFailed => write!(f, "Scan Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failure taxonomy for scan watching and triage.
///
/// Every failure is caught at the component boundary that issued the
/// request; none escape as process-level faults. Poll failures are not
/// represented here - they are reported on the watch channel and swallowed
/// so a single flaky poll does not end an otherwise healthy watch.
#[derive(Debug, Error)]
pub enum ScanWatchError {
    #[error("Failed to load scan #{scan_id}: {details}\n\n💡 Hint: Check that the backend is reachable and the scan id exists")]
    LoadFailed { scan_id: i64, details: String },

    #[error("The backend rejected the request to {action}: {details}\n\n💡 Hint: The action was not applied; the backend state is unchanged")]
    ActionFailed { action: String, details: String },

    #[error("The {format} report for scan #{scan_id} is unavailable: {details}\n\n💡 Hint: Reports are only produced for COMPLETED scans")]
    ReportUnavailable {
        scan_id: i64,
        format: String,
        details: String,
    },

    #[error("Backend returned status {status} for {method} {url}")]
    UnexpectedStatus {
        method: &'static str,
        url: String,
        status: u16,
    },

    #[error("Failed to write report to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}
