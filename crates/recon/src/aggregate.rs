use gtci_catalog::{Catalog, Indicator};
use serde::Serialize;

use crate::classify::{classify, is_missing_2025, Trend};
use crate::universe::in_comparison_universe;

/// Summary counts over the comparison universe.
///
/// `improved + declined + unchanged + incomparable == total`. `missing` is a
/// separate tally of rows with no 2025 score and overlaps `incomparable`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndicatorStats {
    pub improved: usize,
    pub declined: usize,
    pub missing: usize,
    pub total: usize,
    pub unchanged: usize,
    pub incomparable: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarStats {
    pub pillar: String,
    pub stats: IndicatorStats,
}

/// Count trends over `indicators` after restricting them to the comparison
/// universe. Superseded and removed rows passed in are ignored.
pub fn aggregate<'a, I>(indicators: I) -> IndicatorStats
where
    I: IntoIterator<Item = &'a Indicator>,
{
    let mut stats = IndicatorStats::default();

    for ind in indicators.into_iter().filter(|i| in_comparison_universe(i)) {
        stats.total += 1;
        match classify(ind) {
            Trend::Improved => stats.improved += 1,
            Trend::Declined => stats.declined += 1,
            Trend::Unchanged => stats.unchanged += 1,
            Trend::Incomparable => stats.incomparable += 1,
        }
        if is_missing_2025(ind) {
            stats.missing += 1;
        }
    }

    stats
}

/// Per-pillar stats in first-seen pillar order.
pub fn aggregate_by_pillar(catalog: &Catalog) -> Vec<PillarStats> {
    catalog
        .pillar_names()
        .into_iter()
        .map(|pillar| PillarStats {
            pillar: pillar.to_string(),
            stats: aggregate(catalog.iter().filter(|i| i.pillar == pillar)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtci_catalog::{IndicatorRecord, Lineage};

    fn rec(pillar: &str, s23: Option<f64>, s25: Option<f64>) -> IndicatorRecord {
        IndicatorRecord::new("1.1.1", "Indicator", pillar, "1.1 Regulatory Landscape", s23, s25)
    }

    #[test]
    fn three_row_example() {
        let catalog = Catalog::new(
            vec![
                rec("Enable", Some(10.0), Some(15.0)),
                rec("Enable", Some(20.0), Some(18.0)),
                rec("Enable", Some(30.0), None),
            ],
            vec![],
            None,
        )
        .unwrap();
        let stats = aggregate(&catalog);
        assert_eq!(stats.improved, 1);
        assert_eq!(stats.declined, 1);
        assert_eq!(stats.missing, 1);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.incomparable, 1);
    }

    #[test]
    fn zero_2025_score_is_declined_not_missing() {
        let catalog = Catalog::new(vec![rec("Enable", Some(5.33), Some(0.0))], vec![], None).unwrap();
        let stats = aggregate(&catalog);
        assert_eq!(stats.declined, 1);
        assert_eq!(stats.missing, 0);
    }

    #[test]
    fn superseded_rows_are_excluded_before_counting() {
        let catalog = Catalog::new(
            vec![
                rec("Enable", Some(74.28), None).with_lineage(Lineage::Replaced { replaced_by: None }),
                rec("Enable", None, Some(93.09)).with_lineage(Lineage::Added { predecessor: None }),
                rec("Enable", Some(3.0), None).with_lineage(Lineage::Removed { note: None }),
            ],
            vec![],
            None,
        )
        .unwrap();
        let stats = aggregate(&catalog);
        assert_eq!(stats.total, 1);
        // The replaced row has no 2025 score but is outside the universe.
        assert_eq!(stats.missing, 0);
        assert_eq!(stats.incomparable, 1);
        assert_eq!(stats.improved + stats.declined, 0);
    }

    #[test]
    fn partition_sums_to_total() {
        let catalog = Catalog::new(
            vec![
                rec("Enable", Some(1.0), Some(2.0)),
                rec("Enable", Some(2.0), Some(2.0)),
                rec("Enable", Some(3.0), Some(2.0)),
                rec("Enable", None, None),
                rec("Enable", None, Some(0.0)),
            ],
            vec![],
            None,
        )
        .unwrap();
        let s = aggregate(&catalog);
        assert_eq!(s.improved + s.declined + s.unchanged + s.incomparable, s.total);
        assert_eq!(s.missing, 1);
    }

    #[test]
    fn by_pillar_follows_catalog_order() {
        let catalog = Catalog::new(
            vec![
                rec("Grow", Some(1.0), Some(2.0)),
                rec("Enable", Some(2.0), Some(1.0)),
                rec("Grow", Some(1.0), None),
            ],
            vec![],
            None,
        )
        .unwrap();
        let by_pillar = aggregate_by_pillar(&catalog);
        assert_eq!(by_pillar.len(), 2);
        assert_eq!(by_pillar[0].pillar, "Grow");
        assert_eq!(by_pillar[0].stats.total, 2);
        assert_eq!(by_pillar[0].stats.improved, 1);
        assert_eq!(by_pillar[0].stats.missing, 1);
        assert_eq!(by_pillar[1].stats.declined, 1);
    }
}
