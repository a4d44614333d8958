use std::sync::Arc;

use crate::ports::outbound::ScanBackend;
use crate::scan_monitoring::domain::Issue;
use crate::shared::error::ScanWatchError;
use crate::shared::Result;

/// TriageIssueUseCase - Use case for marking findings as false positives
///
/// The only client-initiated mutation of scan data. The backend is the
/// source of truth: the local list is only updated with the record the
/// backend returns, and only after the call succeeded. The updated issue
/// replaces the old one in place, so list ordering is stable across
/// triage.
///
/// # Type Parameters
/// * `B` - ScanBackend implementation
pub struct TriageIssueUseCase<B: ScanBackend> {
    backend: Arc<B>,
}

impl<B: ScanBackend> TriageIssueUseCase<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Marks an issue as a false positive and patches the caller's list.
    ///
    /// On failure the list is untouched and the error propagates; there is
    /// no optimistic update to roll back.
    pub async fn mark_false_positive(&self, issues: &mut [Issue], issue_id: i64) -> Result<Issue> {
        let updated = self
            .backend
            .mark_false_positive(issue_id)
            .await
            .map_err(|e| ScanWatchError::ActionFailed {
                action: format!("mark issue #{} as false positive", issue_id),
                details: e.to_string(),
            })?;

        if let Some(slot) = issues.iter_mut().find(|issue| issue.id == issue_id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }
}
