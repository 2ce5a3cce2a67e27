use std::path::Path;

use gtci_catalog::{builtin, load, Catalog, Indicator};

use crate::aggregate::{aggregate, aggregate_by_pillar, IndicatorStats, PillarStats};
use crate::config::{CatalogSource, ViewConfig};
use crate::error::ReconError;
use crate::lookup::CodeLookup;
use crate::model::{views, ViewMeta, ViewResult};
use crate::pillar::{pillar_breakdown, PillarBreakdown};
use crate::query::IndicatorQuery;
use crate::report::{build_report, route_question, Report, ReportKind};
use crate::universe::{classify_universe, UniverseSelector};

/// Read-only operations over one catalog. Cheap to construct; holds the
/// code lookup built at construction.
pub struct Engine<'a> {
    catalog: &'a Catalog,
    lookup: CodeLookup,
}

impl<'a> Engine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            lookup: CodeLookup::from_catalog(catalog),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn universe(&self, selector: UniverseSelector) -> Vec<&'a Indicator> {
        classify_universe(self.catalog, selector)
    }

    pub fn query(&self, query: &IndicatorQuery) -> Vec<&'a Indicator> {
        query.run(self.catalog)
    }

    /// Stats over `selector`, always restricted to the comparison universe.
    pub fn stats(&self, selector: UniverseSelector) -> IndicatorStats {
        aggregate(self.universe(selector))
    }

    pub fn stats_by_pillar(&self) -> Vec<PillarStats> {
        aggregate_by_pillar(self.catalog)
    }

    pub fn lookup(&self) -> &CodeLookup {
        &self.lookup
    }

    pub fn report(&self, kind: &ReportKind) -> Report<'a> {
        build_report(self.catalog, kind)
    }

    pub fn ask(&self, question: &str) -> Report<'a> {
        self.report(&route_question(question))
    }

    pub fn pillar_breakdown(&self) -> Vec<PillarBreakdown<'a>> {
        pillar_breakdown(self.catalog)
    }

    /// Run a configured view against this engine's catalog.
    pub fn run(&self, config: &ViewConfig) -> ViewResult<'a> {
        let query = config.query();
        let rows = self.query(&query);
        let stats = self.stats(query.universe);

        ViewResult {
            meta: ViewMeta {
                view_name: config.name.clone(),
                universe: query.universe,
                status: query.status,
                pillar: query.pillar.clone(),
                search: query.search.clone(),
                sort_key: query.sort_key,
                direction: query.direction,
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                run_at: chrono::Utc::now().to_rfc3339(),
            },
            stats,
            row_count: rows.len(),
            rows: views(rows),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog sources
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ReconError> {
    std::fs::read_to_string(path)
        .map_err(|e| ReconError::Io(format!("{}: {e}", path.display())))
}

/// Build a catalog from an indicator CSV and an optional pillar rollup TOML.
pub fn load_catalog_files(indicators: &Path, pillars: Option<&Path>) -> Result<Catalog, ReconError> {
    let records = load::indicators_from_csv(&read_file(indicators)?)?;
    log::info!("loaded {} indicator rows from {}", records.len(), indicators.display());

    let (rollups, headline) = match pillars {
        Some(path) => {
            let parsed = load::pillars_from_toml(&read_file(path)?)?;
            log::info!("loaded {} pillar rollups from {}", parsed.0.len(), path.display());
            parsed
        }
        None => (Vec::new(), None),
    };

    Ok(Catalog::new(records, rollups, headline)?)
}

/// Resolve a `[catalog]` section relative to `base_dir` and load it.
pub fn load_catalog(source: &CatalogSource, base_dir: &Path) -> Result<Catalog, ReconError> {
    let indicators = base_dir.join(&source.indicators);
    let pillars = source.pillars.as_ref().map(|p| base_dir.join(p));
    load_catalog_files(&indicators, pillars.as_deref())
}

/// The catalog a view runs over: its `[catalog]` files, or the builtin
/// dataset when the section is absent.
pub fn view_catalog(config: &ViewConfig, base_dir: &Path) -> Result<Catalog, ReconError> {
    match config.catalog {
        Some(ref source) => load_catalog(source, base_dir),
        None => Ok(builtin::gtci_2023_2025()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Trend;
    use crate::query::{SortDirection, SortKey, StatusFilter};

    #[test]
    fn stats_ignore_selector_rows_outside_comparison_universe() {
        let catalog = builtin::gtci_2023_2025().unwrap();
        let engine = Engine::new(&catalog);
        // The unfiltered listing still aggregates over the comparison universe.
        assert_eq!(engine.stats(UniverseSelector::All), engine.stats(UniverseSelector::Edition2025));
    }

    #[test]
    fn run_declines_view() {
        let catalog = builtin::gtci_2023_2025().unwrap();
        let engine = Engine::new(&catalog);
        let config = ViewConfig::from_toml(
            r#"
name = "Declines"
[view]
status = "declined"
[sort]
key = "delta"
"#,
        )
        .unwrap();

        let result = engine.run(&config);
        assert_eq!(result.meta.view_name, "Declines");
        assert_eq!(result.meta.status, StatusFilter::Declined);
        assert_eq!(result.meta.sort_key, SortKey::Delta);
        assert_eq!(result.meta.direction, SortDirection::Asc);
        assert_eq!(result.row_count, result.stats.declined);
        assert!(result.rows.iter().all(|r| r.trend == Trend::Declined));
        // Largest drop first.
        let deltas: Vec<f64> = result.rows.iter().filter_map(|r| r.delta).collect();
        assert!(deltas.windows(2).all(|w| w[0] <= w[1]));
        assert!(chrono::DateTime::parse_from_rfc3339(&result.meta.run_at).is_ok());
    }

    #[test]
    fn ask_routes_question() {
        let catalog = builtin::gtci_2023_2025().unwrap();
        let engine = Engine::new(&catalog);
        let report = engine.ask("Which indicators improved?");
        assert_eq!(report.kind, ReportKind::Improved);
        assert_eq!(report.total, engine.stats(UniverseSelector::Edition2025).improved);
    }

    #[test]
    fn missing_catalog_file_is_io_error() {
        let source = CatalogSource {
            indicators: "does-not-exist.csv".into(),
            pillars: None,
        };
        let err = load_catalog(&source, Path::new("/nonexistent-dir"));
        assert!(matches!(err, Err(ReconError::Io(_))));
    }
}
