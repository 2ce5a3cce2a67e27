use std::str::FromStr;

use gtci_catalog::{Indicator, LineageTag};
use serde::{Deserialize, Serialize};

use crate::error::ReconError;

/// Which slice of the catalog a view or aggregate runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UniverseSelector {
    /// Every catalog row, superseded predecessors and successors side by side.
    #[serde(rename = "all")]
    All,
    /// Edition-scoped 2023 listing.
    #[serde(rename = "2023")]
    Edition2023,
    /// The comparison universe all statistics are computed over.
    #[serde(rename = "2025")]
    Edition2025,
}

impl Default for UniverseSelector {
    fn default() -> Self {
        Self::Edition2025
    }
}

impl std::fmt::Display for UniverseSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Edition2023 => write!(f, "2023"),
            Self::Edition2025 => write!(f, "2025"),
        }
    }
}

impl FromStr for UniverseSelector {
    type Err = ReconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "2023" => Ok(Self::Edition2023),
            "2025" => Ok(Self::Edition2025),
            other => Err(ReconError::ConfigValidation(format!(
                "unknown universe '{other}' (expected all, 2023 or 2025)"
            ))),
        }
    }
}

/// Membership test for the comparison universe: everything except 2023-only
/// history rows and rows tagged `replaced` or `removed`.
pub fn in_comparison_universe(indicator: &Indicator) -> bool {
    !indicator.is_2023_only
        && !matches!(indicator.tag(), LineageTag::Replaced | LineageTag::Removed)
}

/// Select the rows of `indicators` that belong to `selector`, keeping input order.
pub fn classify_universe<'a, I>(indicators: I, selector: UniverseSelector) -> Vec<&'a Indicator>
where
    I: IntoIterator<Item = &'a Indicator>,
{
    let rows = indicators.into_iter();
    match selector {
        UniverseSelector::All => rows.collect(),
        // Two independent exclusions, applied in sequence. The resulting row
        // count is what the 2023 listing displays.
        UniverseSelector::Edition2023 => rows
            .filter(|i| !matches!(i.tag(), LineageTag::New | LineageTag::CodeChanged))
            .filter(|i| !matches!(i.tag(), LineageTag::Replaced | LineageTag::Removed))
            .collect(),
        UniverseSelector::Edition2025 => rows.filter(|i| in_comparison_universe(i)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtci_catalog::{Catalog, IndicatorRecord, Lineage};

    fn rec(code: &str, name: &str, lineage: Lineage, s23: Option<f64>, s25: Option<f64>) -> IndicatorRecord {
        IndicatorRecord::new(code, name, "Enable", "1.2 Market Landscape", s23, s25).with_lineage(lineage)
    }

    fn mixed_catalog() -> Catalog {
        Catalog::new(
            vec![
                rec("1.2.1", "Tracked", Lineage::Unchanged, Some(30.71), Some(39.42)),
                rec("1.2.5", "ICT Infrastructure", Lineage::Replaced { replaced_by: None }, Some(0.0), None),
                rec("1.2.5", "3G coverage", Lineage::Added { predecessor: None }, None, Some(93.09)),
                rec("1.2.7", "Urbanisation", Lineage::CodeChanged { predecessor: None }, None, Some(75.76)),
                rec("6.1.2", "Tertiary population", Lineage::Removed { note: None }, None, None),
                rec("6.2.1", "Innovation output", Lineage::Replaced { replaced_by: None }, None, None),
            ],
            vec![],
            None,
        )
        .unwrap()
    }

    fn names(rows: &[&Indicator]) -> Vec<String> {
        rows.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn all_is_unfiltered() {
        let catalog = mixed_catalog();
        assert_eq!(classify_universe(&catalog, UniverseSelector::All).len(), 6);
    }

    #[test]
    fn edition_2023_drops_2025_identities_and_superseded_rows() {
        let catalog = mixed_catalog();
        let rows = classify_universe(&catalog, UniverseSelector::Edition2023);
        assert_eq!(names(&rows), vec!["Tracked"]);
    }

    #[test]
    fn edition_2025_keeps_successors_only() {
        let catalog = mixed_catalog();
        let rows = classify_universe(&catalog, UniverseSelector::Edition2025);
        assert_eq!(names(&rows), vec!["Tracked", "3G coverage", "Urbanisation"]);
    }

    #[test]
    fn replaced_2023_only_row_is_listed_but_not_compared() {
        let catalog = mixed_catalog();
        let ict = &catalog.indicators()[1];
        assert!(ict.is_2023_only);
        assert!(!in_comparison_universe(ict));
        assert!(classify_universe(&catalog, UniverseSelector::All).contains(&ict));
    }

    #[test]
    fn default_is_comparison_universe() {
        assert_eq!(UniverseSelector::default(), UniverseSelector::Edition2025);
    }

    #[test]
    fn parse_selector() {
        assert_eq!("ALL".parse::<UniverseSelector>().unwrap(), UniverseSelector::All);
        assert_eq!("2023".parse::<UniverseSelector>().unwrap(), UniverseSelector::Edition2023);
        assert!("2024".parse::<UniverseSelector>().is_err());
    }
}
