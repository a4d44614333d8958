use serde::{Deserialize, Serialize};

/// Issue severity, ordered most-severe first.
///
/// The backend reports severity as an upper-case string. The set is closed
/// on our side, with `Other` absorbing any value a future analyzer might
/// emit so that aggregation stays total over arbitrary backend output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    /// Fallback bucket for unrecognized severity strings
    #[serde(other)]
    Other,
}

impl Severity {
    /// Bucket iteration order for the detail view: most-severe first,
    /// with the fallback bucket last.
    pub const BUCKET_ORDER: [Severity; 5] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Other,
    ];

    /// The four closed severities, as used by the dashboard series.
    pub const KNOWN: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Wire representation, as the backend spells it in URLs and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Other => "OTHER",
        }
    }

    /// Human-facing label (title case, as shown on the dashboard).
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Other => "Other",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CRITICAL" => Ok(Severity::Critical),
            "HIGH" => Ok(Severity::High),
            "MEDIUM" => Ok(Severity::Medium),
            "LOW" => Ok(Severity::Low),
            _ => Err(format!(
                "Invalid severity: {}. Please specify 'critical', 'high', 'medium' or 'low'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_known_values() {
        let sev: Severity = serde_json::from_str("\"CRITICAL\"").unwrap();
        assert_eq!(sev, Severity::Critical);
        let sev: Severity = serde_json::from_str("\"LOW\"").unwrap();
        assert_eq!(sev, Severity::Low);
    }

    #[test]
    fn test_deserialize_unknown_value_falls_back_to_other() {
        let sev: Severity = serde_json::from_str("\"BLOCKER\"").unwrap();
        assert_eq!(sev, Severity::Other);
    }

    #[test]
    fn test_bucket_order_is_most_severe_first() {
        assert_eq!(
            Severity::BUCKET_ORDER,
            [
                Severity::Critical,
                Severity::High,
                Severity::Medium,
                Severity::Low,
                Severity::Other,
            ]
        );
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(Severity::from_str("critical").unwrap(), Severity::Critical);
        assert_eq!(Severity::from_str("High").unwrap(), Severity::High);
        assert_eq!(Severity::from_str("MEDIUM").unwrap(), Severity::Medium);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = Severity::from_str("blocker").unwrap_err();
        assert!(err.contains("Invalid severity"));
        assert!(err.contains("blocker"));
    }

    #[test]
    fn test_display_matches_wire_format() {
        assert_eq!(format!("{}", Severity::Critical), "CRITICAL");
        assert_eq!(format!("{}", Severity::Medium), "MEDIUM");
    }
}
