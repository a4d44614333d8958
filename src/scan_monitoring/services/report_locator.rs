use std::fmt;
use std::str::FromStr;

/// Export format of a scan report.
///
/// The backend exposes exactly these four; requesting anything else is a
/// client-side argument error, not a request that gets sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    Json,
    Csv,
    Text,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 4] = [
        ReportFormat::Pdf,
        ReportFormat::Json,
        ReportFormat::Csv,
        ReportFormat::Text,
    ];

    /// Path segment used in the download URL.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
            ReportFormat::Text => "text",
        }
    }

    /// File extension for a saved report.
    pub fn file_extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
            ReportFormat::Text => "txt",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path_segment())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ReportFormat::Pdf),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            "text" | "txt" => Ok(ReportFormat::Text),
            other => Err(format!(
                "unknown report format '{}', expected one of: pdf, json, csv, text",
                other
            )),
        }
    }
}

/// Builds report download locations and file names.
pub struct ReportLocator;

impl ReportLocator {
    /// Download URL for a scan's report in the given format.
    pub fn report_url(base_url: &str, scan_id: i64, format: ReportFormat) -> String {
        format!(
            "{}/reports/scan/{}/{}",
            base_url.trim_end_matches('/'),
            scan_id,
            format.as_path_segment()
        )
    }

    /// Default file name for a downloaded report.
    pub fn default_file_name(scan_id: i64, format: ReportFormat) -> String {
        format!("scan-{}-report.{}", scan_id, format.file_extension())
    }
}
