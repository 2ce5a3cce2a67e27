use gtci_catalog::Indicator;
use serde::Serialize;

use crate::aggregate::IndicatorStats;
use crate::classify::{classify, delta, Trend};
use crate::query::{SortDirection, SortKey, StatusFilter};
use crate::universe::UniverseSelector;

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// A catalog row with its derived comparison fields attached.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorView<'a> {
    #[serde(flatten)]
    pub indicator: &'a Indicator,
    pub delta: Option<f64>,
    pub trend: Trend,
}

impl<'a> IndicatorView<'a> {
    pub fn new(indicator: &'a Indicator) -> Self {
        Self {
            indicator,
            delta: delta(indicator),
            trend: classify(indicator),
        }
    }
}

pub fn views<'a, I>(indicators: I) -> Vec<IndicatorView<'a>>
where
    I: IntoIterator<Item = &'a Indicator>,
{
    indicators.into_iter().map(IndicatorView::new).collect()
}

// ---------------------------------------------------------------------------
// View result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ViewMeta {
    pub view_name: String,
    pub universe: UniverseSelector,
    pub status: StatusFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pillar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub sort_key: SortKey,
    pub direction: SortDirection,
    pub engine_version: String,
    pub run_at: String,
}

/// Output of a configured view: the summary counts for the selected universe
/// and the filtered, sorted rows.
#[derive(Debug, Clone, Serialize)]
pub struct ViewResult<'a> {
    pub meta: ViewMeta,
    pub stats: IndicatorStats,
    pub row_count: usize,
    pub rows: Vec<IndicatorView<'a>>,
}
