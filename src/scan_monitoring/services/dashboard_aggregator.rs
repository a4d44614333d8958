use crate::scan_monitoring::domain::DashboardMetrics;

/// One slot of the fixed severity distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct SeveritySlice {
    pub label: &'static str,
    pub count: u64,
    /// Hex color used when the slice is rendered.
    pub color: &'static str,
}

/// One analyzer with its issue count.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerEntry {
    pub analyzer: String,
    pub issues: u64,
}

/// Derives chart-ready series from a metrics snapshot.
///
/// Pure projection: every call recomputes from the snapshot it is given.
pub struct DashboardAggregator;

impl DashboardAggregator {
    /// The severity distribution as exactly four slices, critical first.
    ///
    /// Slices with a zero count are kept so the rendered distribution always
    /// has the same shape.
    pub fn severity_series(metrics: &DashboardMetrics) -> Vec<SeveritySlice> {
        vec![
            SeveritySlice {
                label: "Critical",
                count: metrics.critical_issues,
                color: "#dc2626",
            },
            SeveritySlice {
                label: "High",
                count: metrics.high_issues,
                color: "#ea580c",
            },
            SeveritySlice {
                label: "Medium",
                count: metrics.medium_issues,
                color: "#ca8a04",
            },
            SeveritySlice {
                label: "Low",
                count: metrics.low_issues,
                color: "#65a30d",
            },
        ]
    }

    /// Per-analyzer issue counts, largest first, name as tiebreak.
    ///
    /// Only analyzers present in the snapshot appear; an empty map yields an
    /// empty series.
    pub fn analyzer_series(metrics: &DashboardMetrics) -> Vec<AnalyzerEntry> {
        let mut entries: Vec<AnalyzerEntry> = metrics
            .issues_by_analyzer
            .iter()
            .map(|(analyzer, issues)| AnalyzerEntry {
                analyzer: analyzer.clone(),
                issues: *issues,
            })
            .collect();
        entries.sort_by(|a, b| {
            b.issues
                .cmp(&a.issues)
                .then_with(|| a.analyzer.cmp(&b.analyzer))
        });
        entries
    }
}
