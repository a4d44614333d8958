use serde::{Deserialize, Serialize};

/// Ephemeral progress of a running scan.
///
/// Has no identity beyond "latest known value for a given scan": each new
/// poll result supersedes the previous one, and nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanProgress {
    /// Percentage in 0..=100.
    pub progress: u8,
    /// Free-text label of the step the backend is currently executing.
    pub current_step: String,
}

impl ScanProgress {
    /// Whether the backend reports the work as fully progressed.
    ///
    /// This alone does not end a watch: the scan record's `status` is the
    /// authoritative terminal signal and is re-checked when this returns
    /// true.
    pub fn indicates_completion(&self) -> bool {
        self.progress >= 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_progress() {
        let progress: ScanProgress =
            serde_json::from_str(r#"{"progress": 40, "currentStep": "Running SAST"}"#).unwrap();
        assert_eq!(progress.progress, 40);
        assert_eq!(progress.current_step, "Running SAST");
        assert!(!progress.indicates_completion());
    }

    #[test]
    fn test_completion_at_one_hundred() {
        let progress = ScanProgress {
            progress: 100,
            current_step: "Done".to_string(),
        };
        assert!(progress.indicates_completion());
    }
}
