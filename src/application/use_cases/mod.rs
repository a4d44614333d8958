/// Use cases module containing application business logic orchestration
mod triage_issue;
mod watch_scan;

pub use triage_issue::TriageIssueUseCase;
pub use watch_scan::{MonitorState, ScanMonitor, ScanSnapshot};
