use std::path::PathBuf;

use gtci_catalog::builtin;
use gtci_catalog::{Catalog, LineageTag};
use gtci_recon::config::ViewConfig;
use gtci_recon::engine::{load_catalog_files, view_catalog, Engine};
use gtci_recon::query::{IndicatorQuery, SortDirection, SortKey, StatusFilter};
use gtci_recon::sheet::SourceSheet;
use gtci_recon::{in_comparison_universe, ReportKind, Trend, UniverseSelector};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn builtin_catalog() -> Catalog {
    builtin::gtci_2023_2025().unwrap()
}

fn run_view(file: &str) -> (ViewConfig, Catalog) {
    let path = fixtures_dir().join(file);
    let toml = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    let config = ViewConfig::from_toml(&toml).unwrap();
    let catalog = view_catalog(&config, path.parent().unwrap()).unwrap();
    (config, catalog)
}

// -------------------------------------------------------------------------
// Builtin dataset
// -------------------------------------------------------------------------

#[test]
fn universe_sizes() {
    let catalog = builtin_catalog();
    let engine = Engine::new(&catalog);
    assert_eq!(engine.universe(UniverseSelector::All).len(), 81);
    assert_eq!(engine.universe(UniverseSelector::Edition2023).len(), 61);
    assert_eq!(engine.universe(UniverseSelector::Edition2025).len(), 77);
}

#[test]
fn default_universe_stats() {
    let catalog = builtin_catalog();
    let stats = Engine::new(&catalog).stats(UniverseSelector::Edition2025);
    assert_eq!(stats.total, 77);
    assert_eq!(stats.improved, 26);
    assert_eq!(stats.declined, 24);
    assert_eq!(stats.unchanged, 4);
    assert_eq!(stats.incomparable, 23);
    assert_eq!(stats.missing, 13);
}

#[test]
fn default_total_excludes_history_and_superseded_rows() {
    let catalog = builtin_catalog();
    let excluded = catalog
        .iter()
        .filter(|i| {
            i.is_2023_only || matches!(i.tag(), LineageTag::Replaced | LineageTag::Removed)
        })
        .count();
    let stats = Engine::new(&catalog).stats(UniverseSelector::Edition2025);
    assert_eq!(stats.total, catalog.len() - excluded);
}

#[test]
fn pillar_stats_sum_to_overall() {
    let catalog = builtin_catalog();
    let engine = Engine::new(&catalog);
    let by_pillar = engine.stats_by_pillar();
    assert_eq!(by_pillar.len(), 6);
    assert_eq!(by_pillar[0].pillar, "Enable");
    assert_eq!(by_pillar[0].stats.total, 19);
    assert_eq!(by_pillar[0].stats.improved, 8);

    let overall = engine.stats(UniverseSelector::Edition2025);
    let total: usize = by_pillar.iter().map(|p| p.stats.total).sum();
    let improved: usize = by_pillar.iter().map(|p| p.stats.improved).sum();
    assert_eq!(total, overall.total);
    assert_eq!(improved, overall.improved);
}

#[test]
fn urbanisation_history_row_is_listed_but_not_compared() {
    let catalog = builtin_catalog();
    let old = catalog
        .iter()
        .find(|i| i.code == "1.2.6" && i.name == "Urbanisation")
        .unwrap();
    assert_eq!(old.score_2023, Some(74.28));
    assert_eq!(old.score_2025, None);
    assert!(old.is_2023_only);
    assert!(!in_comparison_universe(old));
    assert_eq!(gtci_recon::delta(old), None);

    let engine = Engine::new(&catalog);
    assert!(engine.universe(UniverseSelector::All).iter().any(|i| i.id == old.id));
    let missing = engine.query(&IndicatorQuery::new().status(StatusFilter::Missing));
    assert!(missing.iter().all(|i| i.id != old.id));

    let moved = catalog
        .iter()
        .find(|i| i.code == "1.2.7" && i.name == "Urbanisation")
        .unwrap();
    assert_eq!(moved.tag(), LineageTag::CodeChanged);
    assert_eq!(catalog.predecessor_of(moved).map(|p| p.id.as_str()), Some(old.id.as_str()));
}

#[test]
fn new_3g_row_is_compared_but_incomparable() {
    let catalog = builtin_catalog();
    let row = catalog
        .iter()
        .find(|i| i.name == "Population covered by at least a 3G mobile network")
        .unwrap();
    assert_eq!(row.score_2025, Some(93.09));
    assert!(in_comparison_universe(row));
    assert_eq!(gtci_recon::classify(row), Trend::Incomparable);
    assert!(!gtci_recon::is_missing_2025(row));
}

#[test]
fn lookup_prefers_2025_successor() {
    let catalog = builtin_catalog();
    let engine = Engine::new(&catalog);
    assert_eq!(
        engine.lookup().name("1.2.5"),
        Some("Population covered by at least a 3G mobile network")
    );
    assert_eq!(engine.lookup().name("1.2.6"), Some("Internet access in schools"));
    assert_eq!(engine.lookup().name("9.9.9"), None);
}

#[test]
fn score_sort_keeps_absent_scores_last_ascending_first_descending() {
    let catalog = builtin_catalog();
    let engine = Engine::new(&catalog);

    let asc = engine.query(&IndicatorQuery::new().sort(SortKey::Score2025, SortDirection::Asc));
    let first_absent = asc.iter().position(|i| i.score_2025.is_none()).unwrap();
    assert!(asc[first_absent..].iter().all(|i| i.score_2025.is_none()));

    let desc = engine.query(&IndicatorQuery::new().sort(SortKey::Score2025, SortDirection::Desc));
    assert_eq!(desc.iter().take_while(|i| i.score_2025.is_none()).count(), 13);
}

#[test]
fn reports_agree_with_stats() {
    let catalog = builtin_catalog();
    let engine = Engine::new(&catalog);
    let stats = engine.stats(UniverseSelector::Edition2025);

    assert_eq!(engine.report(&ReportKind::Improved).total, stats.improved);
    assert_eq!(engine.report(&ReportKind::Declined).total, stats.declined);
    assert_eq!(engine.report(&ReportKind::Missing).total, stats.missing);

    let sources = engine.ask("which sources are used?");
    assert_eq!(sources.kind, ReportKind::Sources);
    assert_eq!(sources.total, 44);
    assert_eq!(sources.tallies.len(), 8);
    assert_eq!(sources.tallies[0].count, 11);

    let owners = engine.ask("which ministry owns the most?");
    assert_eq!(owners.total, 56);
    assert_eq!(owners.tallies.len(), 10);
    assert_eq!(owners.tallies[0].label, "AITI");
    assert_eq!(owners.tallies[0].count, 11);
}

#[test]
fn pillar_breakdown_covers_every_rollup() {
    let catalog = builtin_catalog();
    let breakdown = Engine::new(&catalog).pillar_breakdown();
    assert_eq!(breakdown.len(), 6);

    let listed: usize = breakdown
        .iter()
        .flat_map(|p| p.subpillars.iter())
        .map(|s| s.indicators.len())
        .sum();
    let not_replaced = catalog.iter().filter(|i| i.tag() != LineageTag::Replaced).count();
    assert_eq!(listed, not_replaced);
}

// -------------------------------------------------------------------------
// View configs
// -------------------------------------------------------------------------

#[test]
fn view_with_external_catalog() {
    let (config, catalog) = run_view("grow-declines.view.toml");
    assert_eq!(catalog.len(), 81);
    assert_eq!(catalog.pillars().len(), 6);

    let result = Engine::new(&catalog).run(&config);
    assert_eq!(result.meta.view_name, "Declines in Grow");
    assert_eq!(result.meta.pillar.as_deref(), Some("Grow"));
    let codes: Vec<&str> = result.rows.iter().map(|r| r.indicator.code.as_str()).collect();
    assert_eq!(codes, vec!["3.1.3", "3.3.3", "3.1.5"]);
    // Stats describe the whole selected universe, not just the listed rows.
    assert_eq!(result.stats.total, 77);
}

#[test]
fn view_without_catalog_uses_builtin() {
    let (config, catalog) = run_view("missing-builtin.view.toml");
    let result = Engine::new(&catalog).run(&config);
    let codes: Vec<&str> = result.rows.iter().map(|r| r.indicator.code.as_str()).collect();
    assert_eq!(
        codes,
        vec![
            "1.1.5", "1.2.6", "1.3.7", "2.1.6", "2.2.2", "3.2.2", "4.1.6", "4.1.7", "4.2.1",
            "4.2.2", "4.2.5", "5.1.4", "6.1.7"
        ]
    );

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["meta"]["status"], "missing");
    assert_eq!(json["meta"]["universe"], "2025");
    assert_eq!(json["row_count"], 13);
    assert_eq!(json["rows"][0]["status"], "none");
    assert_eq!(json["rows"][1]["status"], "new");
    assert_eq!(json["rows"][0]["trend"], "incomparable");
    assert!(json["rows"][0]["score_2025"].is_null());
}

#[test]
fn view_in_tempdir_resolves_relative_paths() {
    let dir = tempfile::tempdir().unwrap();
    let csv = std::fs::read_to_string(
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../catalog/tests/fixtures/gtci-indicators.csv"),
    )
    .unwrap();
    std::fs::write(dir.path().join("rows.csv"), csv).unwrap();
    std::fs::write(
        dir.path().join("view.toml"),
        "name = \"Tmp\"\n[catalog]\nindicators = \"rows.csv\"\n",
    )
    .unwrap();

    let config =
        ViewConfig::from_toml(&std::fs::read_to_string(dir.path().join("view.toml")).unwrap()).unwrap();
    let catalog = view_catalog(&config, dir.path()).unwrap();
    assert_eq!(catalog.len(), 81);
    assert!(catalog.pillars().is_empty());
    assert!(catalog.headline().is_none());

    let direct = load_catalog_files(&dir.path().join("rows.csv"), None).unwrap();
    assert_eq!(direct.len(), catalog.len());
}

// -------------------------------------------------------------------------
// Secondary sheet
// -------------------------------------------------------------------------

#[test]
fn annotate_source_sheet_with_builtin_names() {
    let catalog = builtin_catalog();
    let engine = Engine::new(&catalog);
    let text = std::fs::read_to_string(fixtures_dir().join("source-sheet.csv")).unwrap();
    let sheet = SourceSheet::from_csv(&text)
        .unwrap()
        .sorted("indicator code", SortDirection::Asc)
        .unwrap()
        .annotate(engine.lookup(), "Indicator Code")
        .unwrap();

    let pairs: Vec<(&str, &str)> = sheet
        .rows
        .iter()
        .map(|r| (r[0].as_str(), r.last().map(String::as_str).unwrap_or("")))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("1.1.1", "Government effectiveness"),
            ("1.2.5", "Population covered by at least a 3G mobile network"),
            ("1.2.6", "Internet access in schools"),
            ("1.2.10", ""),
            ("9.9.9", ""),
        ]
    );
}
