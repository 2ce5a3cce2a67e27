use crate::error::CatalogError;
use crate::model::{IndexHeadline, Indicator, IndicatorRecord, LineageTag, PillarRollup};

/// Immutable indicator list plus the published rollups.
///
/// Built once; every accessor is read-only. Construction is the only place a
/// malformed row can surface, so queries over a `Catalog` never fail.
#[derive(Debug, Clone)]
pub struct Catalog {
    indicators: Vec<Indicator>,
    pillars: Vec<PillarRollup>,
    headline: Option<IndexHeadline>,
}

impl Catalog {
    pub fn new(
        records: Vec<IndicatorRecord>,
        pillars: Vec<PillarRollup>,
        headline: Option<IndexHeadline>,
    ) -> Result<Self, CatalogError> {
        let mut indicators = Vec::with_capacity(records.len());

        for (i, rec) in records.into_iter().enumerate() {
            let row = i + 1;
            check_field(row, "code", &rec.code)?;
            check_field(row, "name", &rec.name)?;
            check_field(row, "pillar", &rec.pillar)?;
            check_field(row, "subpillar", &rec.subpillar)?;
            check_score(row, "score_2023", rec.score_2023)?;
            check_score(row, "score_2025", rec.score_2025)?;

            // A replaced row that still carries a 2023 figure exists only to
            // preserve 2023 history.
            let is_2023_only =
                rec.lineage.tag() == LineageTag::Replaced && rec.score_2023.is_some();

            indicators.push(Indicator {
                id: format!("ind_{row}"),
                code: rec.code,
                name: rec.name,
                pillar: rec.pillar,
                subpillar: rec.subpillar,
                score_2023: rec.score_2023,
                score_2025: rec.score_2025,
                lineage: rec.lineage,
                is_2023_only,
                source: rec.source,
                website: rec.website,
                data_owner: rec.data_owner,
            });
        }

        for (i, ind) in indicators.iter().enumerate() {
            let Some(pred) = ind.lineage.predecessor() else {
                continue;
            };
            let matches = indicators
                .iter()
                .filter(|other| {
                    other.code == pred.code
                        && other.name == pred.name
                        && matches!(other.tag(), LineageTag::Replaced | LineageTag::Removed)
                })
                .count();
            match matches {
                1 => {}
                0 => {
                    return Err(CatalogError::UnresolvedPredecessor {
                        row: i + 1,
                        code: pred.code.clone(),
                        name: pred.name.clone(),
                    })
                }
                _ => {
                    return Err(CatalogError::AmbiguousPredecessor {
                        row: i + 1,
                        code: pred.code.clone(),
                        name: pred.name.clone(),
                    })
                }
            }
        }

        log::debug!(
            "catalog built: {} indicators, {} pillar rollups",
            indicators.len(),
            pillars.len()
        );

        Ok(Self { indicators, pillars, headline })
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Indicator> {
        self.indicators.iter()
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    pub fn pillars(&self) -> &[PillarRollup] {
        &self.pillars
    }

    pub fn headline(&self) -> Option<&IndexHeadline> {
        self.headline.as_ref()
    }

    pub fn get(&self, id: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.id == id)
    }

    /// Distinct pillar names in first-seen order.
    pub fn pillar_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for ind in &self.indicators {
            if !names.contains(&ind.pillar.as_str()) {
                names.push(&ind.pillar);
            }
        }
        names
    }

    /// The superseded row a successor points at. Resolution was validated at
    /// construction so at most one row matches.
    pub fn predecessor_of(&self, indicator: &Indicator) -> Option<&Indicator> {
        let pred = indicator.lineage.predecessor()?;
        self.indicators.iter().find(|other| {
            other.code == pred.code
                && other.name == pred.name
                && matches!(other.tag(), LineageTag::Replaced | LineageTag::Removed)
        })
    }

    /// Every (predecessor, successor) pair linked by an explicit reference,
    /// in successor catalog order.
    pub fn recoded_pairs(&self) -> Vec<(&Indicator, &Indicator)> {
        self.indicators
            .iter()
            .filter_map(|succ| self.predecessor_of(succ).map(|pred| (pred, succ)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Indicator;
    type IntoIter = std::slice::Iter<'a, Indicator>;

    fn into_iter(self) -> Self::IntoIter {
        self.indicators.iter()
    }
}

fn check_field(row: usize, field: &'static str, value: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::MissingField { row, field });
    }
    Ok(())
}

fn check_score(row: usize, field: &'static str, value: Option<f64>) -> Result<(), CatalogError> {
    match value {
        Some(v) if !v.is_finite() => Err(CatalogError::InvalidScore { row, field }),
        _ => Ok(()),
    }
}
