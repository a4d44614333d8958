use serde::{Deserialize, Serialize};

/// Lifecycle status of a scan.
///
/// COMPLETED and FAILED are terminal: once observed, no further progress
/// updates will arrive for the scan. An unrecognized status deserializes
/// to `Unknown`, which is treated as non-terminal so a live scan keeps
/// being polled rather than silently abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl ScanStatus {
    /// Whether this status is terminal (no further progress will occur).
    pub fn is_terminal(&self) -> bool {
        matches!(self, ScanStatus::Completed | ScanStatus::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Pending => "PENDING",
            ScanStatus::InProgress => "IN_PROGRESS",
            ScanStatus::Completed => "COMPLETED",
            ScanStatus::Failed => "FAILED",
            ScanStatus::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
