use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::ScanStatus;

/// One execution of security analysis against a repository snapshot.
///
/// Scan fields are mutated only by the backend; the client holds them as a
/// read-only record. The per-severity counters may be partial while the
/// scan is IN_PROGRESS and must not be presented as final until the scan
/// reaches a terminal status, at which point
/// `total_issues == critical + high + medium + low`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scan {
    pub id: i64,
    pub repository_id: i64,
    pub repository_name: String,
    pub scan_type: String,
    pub status: ScanStatus,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_files: u32,
    #[serde(default)]
    pub total_issues: u32,
    #[serde(default)]
    pub critical_count: u32,
    #[serde(default)]
    pub high_count: u32,
    #[serde(default)]
    pub medium_count: u32,
    #[serde(default)]
    pub low_count: u32,
    /// Only meaningful once the scan is terminal.
    #[serde(default)]
    pub scan_duration_ms: Option<u64>,
}

impl Scan {
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Sum of the per-severity counters. Equals `total_issues` once the
    /// scan is COMPLETED; may lag behind while IN_PROGRESS.
    pub fn severity_count_sum(&self) -> u32 {
        self.critical_count + self.high_count + self.medium_count + self.low_count
    }
}
