use std::cmp::Ordering;
use std::str::FromStr;

use gtci_catalog::{Catalog, Indicator};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::classify::{classify, delta, is_missing_2025, Trend};
use crate::error::ReconError;
use crate::universe::{classify_universe, in_comparison_universe, UniverseSelector};

// ---------------------------------------------------------------------------
// Filter + sort options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    All,
    Improved,
    Declined,
    Missing,
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Improved => write!(f, "improved"),
            Self::Declined => write!(f, "declined"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ReconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "improved" => Ok(Self::Improved),
            "declined" => Ok(Self::Declined),
            "missing" => Ok(Self::Missing),
            other => Err(ReconError::ConfigValidation(format!(
                "unknown status filter '{other}' (expected all, improved, declined or missing)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "code")]
    Code,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "score2023", alias = "score_2023")]
    Score2023,
    #[serde(rename = "score2025", alias = "score_2025")]
    Score2025,
    #[serde(rename = "delta")]
    Delta,
    #[serde(rename = "data_owner", alias = "owner")]
    DataOwner,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::Code
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code => write!(f, "code"),
            Self::Name => write!(f, "name"),
            Self::Score2023 => write!(f, "score2023"),
            Self::Score2025 => write!(f, "score2025"),
            Self::Delta => write!(f, "delta"),
            Self::DataOwner => write!(f, "data_owner"),
        }
    }
}

impl FromStr for SortKey {
    type Err = ReconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code" => Ok(Self::Code),
            "name" => Ok(Self::Name),
            "score2023" | "score_2023" => Ok(Self::Score2023),
            "score2025" | "score_2025" => Ok(Self::Score2025),
            "delta" => Ok(Self::Delta),
            "data_owner" | "owner" => Ok(Self::DataOwner),
            other => Err(ReconError::ConfigValidation(format!("unknown sort key '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Asc
    }
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A listing request. Filters apply in order: universe, status, pillar,
/// search; the survivors are then stably sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorQuery {
    pub universe: UniverseSelector,
    pub status: StatusFilter,
    /// Exact pillar name; `None` keeps every pillar.
    pub pillar: Option<String>,
    /// Case-insensitive substring on code or name; empty keeps every row.
    pub search: Option<String>,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl IndicatorQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn universe(mut self, universe: UniverseSelector) -> Self {
        self.universe = universe;
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn pillar(mut self, pillar: impl Into<String>) -> Self {
        self.pillar = Some(pillar.into());
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.direction = direction;
        self
    }

    pub fn run<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Indicator> {
        let mut rows = classify_universe(catalog, self.universe);
        rows.retain(|i| matches_status(i, self.status));

        if let Some(ref pillar) = self.pillar {
            rows.retain(|i| &i.pillar == pillar);
        }

        if let Some(ref text) = self.search {
            if !text.is_empty() {
                let needle = text.to_lowercase();
                rows.retain(|i| {
                    i.code.to_lowercase().contains(&needle) || i.name.to_lowercase().contains(&needle)
                });
            }
        }

        sort_indicators(&mut rows, self.sort_key, self.direction);

        log::debug!(
            "query universe={} status={} -> {} rows",
            self.universe,
            self.status,
            rows.len()
        );
        rows
    }
}

/// Status predicate using the same definitions as [`crate::aggregate::aggregate`].
pub fn matches_status(indicator: &Indicator, status: StatusFilter) -> bool {
    match status {
        StatusFilter::All => true,
        StatusFilter::Improved => classify(indicator) == Trend::Improved,
        StatusFilter::Declined => classify(indicator) == Trend::Declined,
        StatusFilter::Missing => in_comparison_universe(indicator) && is_missing_2025(indicator),
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

enum SortValue<'a> {
    Text(&'a str),
    Number(Option<OrderedFloat<f64>>),
}

fn sort_value(indicator: &Indicator, key: SortKey) -> SortValue<'_> {
    match key {
        SortKey::Code => SortValue::Text(&indicator.code),
        SortKey::Name => SortValue::Text(&indicator.name),
        SortKey::DataOwner => SortValue::Text(&indicator.data_owner),
        SortKey::Score2023 => SortValue::Number(indicator.score_2023.map(OrderedFloat)),
        SortKey::Score2025 => SortValue::Number(indicator.score_2025.map(OrderedFloat)),
        SortKey::Delta => SortValue::Number(delta(indicator).map(OrderedFloat)),
    }
}

fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Text(x), SortValue::Text(y)) => x.cmp(y),
        // Absent ranks as +infinity.
        (SortValue::Number(x), SortValue::Number(y)) => match (x, y) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => x.cmp(y),
        },
        _ => Ordering::Equal,
    }
}

/// Stable sort: rows with equal keys keep their incoming (catalog) order in
/// either direction. Absent numbers land last ascending and first descending.
pub fn sort_indicators(rows: &mut [&Indicator], key: SortKey, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = compare_values(&sort_value(a, key), &sort_value(b, key));
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtci_catalog::{IndicatorRecord, Lineage};

    fn rec(code: &str, name: &str, pillar: &str, s23: Option<f64>, s25: Option<f64>) -> IndicatorRecord {
        IndicatorRecord::new(code, name, pillar, "1.1 Regulatory Landscape", s23, s25)
    }

    fn sample() -> Catalog {
        Catalog::new(
            vec![
                rec("1.1.2", "Rule of law", "Enable", Some(68.96), Some(73.77)),
                rec("1.1.1", "Government effectiveness", "Enable", Some(79.14), Some(80.06)),
                rec("3.1.3", "Tertiary education expenditure", "Grow", Some(86.29), Some(50.31)),
                rec("1.1.5", "Corruption", "Enable", None, None),
                rec("6.2.6", "New business density", "Global Knowledge Skills", Some(5.33), Some(0.0)),
                rec("1.2.6", "Urbanisation", "Enable", Some(74.28), None)
                    .with_lineage(Lineage::Replaced { replaced_by: None }),
                rec("3.2.1", "Business masters education", "Grow", Some(0.0), Some(0.0)),
            ],
            vec![],
            None,
        )
        .unwrap()
    }

    fn codes(rows: &[&Indicator]) -> Vec<String> {
        rows.iter().map(|i| i.code.clone()).collect()
    }

    #[test]
    fn default_query_is_comparison_universe_by_code() {
        let catalog = sample();
        let rows = IndicatorQuery::new().run(&catalog);
        assert_eq!(codes(&rows), vec!["1.1.1", "1.1.2", "1.1.5", "3.1.3", "3.2.1", "6.2.6"]);
    }

    #[test]
    fn status_filters_share_aggregate_definitions() {
        let catalog = sample();
        let improved = IndicatorQuery::new().status(StatusFilter::Improved).run(&catalog);
        assert_eq!(codes(&improved), vec!["1.1.1", "1.1.2"]);

        let declined = IndicatorQuery::new().status(StatusFilter::Declined).run(&catalog);
        assert_eq!(codes(&declined), vec!["3.1.3", "6.2.6"]);

        // The replaced Urbanisation row has no 2025 score but is not missing.
        let missing = IndicatorQuery::new()
            .universe(UniverseSelector::All)
            .status(StatusFilter::Missing)
            .run(&catalog);
        assert_eq!(codes(&missing), vec!["1.1.5"]);
    }

    #[test]
    fn search_is_case_insensitive_on_code_or_name() {
        let catalog = sample();
        let rows = IndicatorQuery::new().search("EDUCATION").run(&catalog);
        assert_eq!(codes(&rows), vec!["3.1.3", "3.2.1"]);

        let rows = IndicatorQuery::new().search("1.1.").run(&catalog);
        assert_eq!(codes(&rows), vec!["1.1.1", "1.1.2", "1.1.5"]);

        let rows = IndicatorQuery::new().search("").run(&catalog);
        assert_eq!(rows.len(), 6);
    }

    #[test]
    fn pillar_is_exact_match() {
        let catalog = sample();
        let rows = IndicatorQuery::new().pillar("Grow").run(&catalog);
        assert_eq!(codes(&rows), vec!["3.1.3", "3.2.1"]);
        assert!(IndicatorQuery::new().pillar("grow").run(&catalog).is_empty());
    }

    #[test]
    fn absent_scores_sort_last_ascending() {
        let catalog = sample();
        let rows = IndicatorQuery::new()
            .universe(UniverseSelector::All)
            .sort(SortKey::Score2025, SortDirection::Asc)
            .run(&catalog);
        assert_eq!(codes(&rows), vec!["6.2.6", "3.2.1", "3.1.3", "1.1.2", "1.1.1", "1.1.5", "1.2.6"]);
    }

    #[test]
    fn absent_scores_sort_first_descending() {
        let catalog = sample();
        let rows = IndicatorQuery::new()
            .universe(UniverseSelector::All)
            .sort(SortKey::Score2025, SortDirection::Desc)
            .run(&catalog);
        // Ties (both absent, both 0.0) keep catalog order.
        assert_eq!(codes(&rows), vec!["1.1.5", "1.2.6", "1.1.1", "1.1.2", "3.1.3", "6.2.6", "3.2.1"]);
    }

    #[test]
    fn delta_sort_treats_incomparable_as_absent() {
        let catalog = sample();
        let rows = IndicatorQuery::new().sort(SortKey::Delta, SortDirection::Asc).run(&catalog);
        assert_eq!(codes(&rows), vec!["3.1.3", "6.2.6", "3.2.1", "1.1.1", "1.1.2", "1.1.5"]);
    }

    #[test]
    fn equal_keys_keep_catalog_order() {
        let catalog = sample();
        let rows = IndicatorQuery::new()
            .universe(UniverseSelector::All)
            .sort(SortKey::DataOwner, SortDirection::Asc)
            .run(&catalog);
        // Every data owner is empty, so the order is untouched.
        let all: Vec<String> = catalog.iter().map(|i| i.code.clone()).collect();
        assert_eq!(codes(&rows), all);

        let rows = IndicatorQuery::new()
            .universe(UniverseSelector::All)
            .sort(SortKey::DataOwner, SortDirection::Desc)
            .run(&catalog);
        assert_eq!(codes(&rows), all);
    }

    #[test]
    fn text_sort_descending() {
        let catalog = sample();
        let rows = IndicatorQuery::new().pillar("Grow").sort(SortKey::Name, SortDirection::Desc).run(&catalog);
        assert_eq!(codes(&rows), vec!["3.1.3", "3.2.1"]);
    }

    #[test]
    fn parse_options() {
        assert_eq!("Missing".parse::<StatusFilter>().unwrap(), StatusFilter::Missing);
        assert_eq!("score_2025".parse::<SortKey>().unwrap(), SortKey::Score2025);
        assert_eq!("owner".parse::<SortKey>().unwrap(), SortKey::DataOwner);
        assert!("rank".parse::<SortKey>().is_err());
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
    }
}
