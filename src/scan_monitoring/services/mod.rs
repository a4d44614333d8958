pub mod dashboard_aggregator;
pub mod issue_aggregator;
pub mod report_locator;

pub use dashboard_aggregator::{AnalyzerEntry, DashboardAggregator, SeveritySlice};
pub use issue_aggregator::{IssueAggregator, SeverityBucket};
pub use report_locator::{ReportFormat, ReportLocator};
