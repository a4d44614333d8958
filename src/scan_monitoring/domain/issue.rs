use serde::{Deserialize, Serialize};

use super::severity::Severity;

/// One finding produced by an analyzer during a scan.
///
/// Immutable except for `false_positive`, which is flipped through the
/// triage use case - the only client-initiated mutation of scan data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: i64,
    pub scan_id: i64,
    pub file_id: i64,
    pub file_path: String,
    pub line_number: u32,
    #[serde(default)]
    pub column_number: u32,
    pub issue_type: String,
    pub severity: Severity,
    pub rule_id: String,
    pub rule_name: String,
    pub description: String,
    #[serde(default)]
    pub code_snippet: Option<String>,
    #[serde(default)]
    pub suggested_fix: Option<String>,
    /// Free-text id of the analyzer that produced the finding.
    pub analyzer_source: String,
    #[serde(default)]
    pub false_positive: bool,
}

impl Issue {
    /// `path:line` location string as shown in issue listings.
    pub fn location(&self) -> String {
        format!("{}:{}", self.file_path, self.line_number)
    }
}
