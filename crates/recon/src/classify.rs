use gtci_catalog::Indicator;
use serde::Serialize;

/// Year-over-year direction of a single indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improved,
    Declined,
    Unchanged,
    /// At least one edition has no measurement.
    Incomparable,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Improved => write!(f, "improved"),
            Self::Declined => write!(f, "declined"),
            Self::Unchanged => write!(f, "unchanged"),
            Self::Incomparable => write!(f, "incomparable"),
        }
    }
}

/// `score_2025 - score_2023`, or `None` when either edition is unmeasured.
/// A measured zero in both editions yields `Some(0.0)`.
pub fn delta(indicator: &Indicator) -> Option<f64> {
    match (indicator.score_2023, indicator.score_2025) {
        (Some(before), Some(after)) => Some(after - before),
        _ => None,
    }
}

pub fn classify(indicator: &Indicator) -> Trend {
    match delta(indicator) {
        None => Trend::Incomparable,
        Some(d) if d > 0.0 => Trend::Improved,
        Some(d) if d < 0.0 => Trend::Declined,
        Some(_) => Trend::Unchanged,
    }
}

/// No 2025 measurement. A measured 0 is a score, not missing data.
pub fn is_missing_2025(indicator: &Indicator) -> bool {
    indicator.score_2025.is_none()
}
