use gtci_catalog::{Catalog, Indicator, LineageTag, PillarRollup, SubpillarRollup};
use serde::Serialize;

use crate::aggregate::{aggregate, IndicatorStats};
use crate::model::{views, IndicatorView};

#[derive(Debug, Clone, Serialize)]
pub struct SubpillarBreakdown<'a> {
    pub rollup: &'a SubpillarRollup,
    pub score_change: f64,
    /// Positive when the 2025 rank is better.
    pub rank_change: i64,
    pub stats: IndicatorStats,
    pub indicators: Vec<IndicatorView<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PillarBreakdown<'a> {
    pub rollup: &'a PillarRollup,
    pub score_change: f64,
    pub rank_change: i64,
    pub stats: IndicatorStats,
    pub subpillars: Vec<SubpillarBreakdown<'a>>,
}

fn rank_change(rank_2023: u32, rank_2025: u32) -> i64 {
    i64::from(rank_2023) - i64::from(rank_2025)
}

/// Per-pillar drill-down in rollup order. Superseded rows are left out of the
/// sub-pillar listings; stats use the comparison universe.
pub fn pillar_breakdown(catalog: &Catalog) -> Vec<PillarBreakdown<'_>> {
    catalog
        .pillars()
        .iter()
        .map(|pillar| {
            let subpillars = pillar
                .subpillars
                .iter()
                .map(|sub| {
                    let rows: Vec<&Indicator> = catalog
                        .iter()
                        .filter(|i| i.pillar == pillar.name && i.subpillar_id() == sub.id)
                        .filter(|i| i.tag() != LineageTag::Replaced)
                        .collect();
                    SubpillarBreakdown {
                        rollup: sub,
                        score_change: sub.score_2025 - sub.score_2023,
                        rank_change: rank_change(sub.rank_2023, sub.rank_2025),
                        stats: aggregate(rows.iter().copied()),
                        indicators: views(rows),
                    }
                })
                .collect();

            PillarBreakdown {
                rollup: pillar,
                score_change: pillar.score_2025 - pillar.score_2023,
                rank_change: rank_change(pillar.rank_2023, pillar.rank_2025),
                stats: aggregate(catalog.iter().filter(|i| i.pillar == pillar.name)),
                subpillars,
            }
        })
        .collect()
}
