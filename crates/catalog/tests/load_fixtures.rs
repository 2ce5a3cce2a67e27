use std::path::PathBuf;

use gtci_catalog::builtin::{self, HEADLINE};
use gtci_catalog::load::{indicators_from_csv, pillars_from_toml};
use gtci_catalog::{Catalog, CatalogError, IndicatorRecord};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

#[test]
fn csv_fixture_matches_builtin_records() {
    let loaded = indicators_from_csv(&read_fixture("gtci-indicators.csv")).unwrap();
    let builtin = builtin::indicator_records();

    assert_eq!(loaded.len(), builtin.len());
    for (i, (a, b)) in loaded.iter().zip(builtin.iter()).enumerate() {
        assert_eq!(a, b, "row {} differs", i + 1);
    }
}

#[test]
fn toml_fixture_matches_builtin_rollups() {
    let (pillars, headline) = pillars_from_toml(&read_fixture("gtci-pillars.toml")).unwrap();
    assert_eq!(pillars, builtin::pillar_rollups());
    assert_eq!(headline, Some(HEADLINE));
}

#[test]
fn loaded_catalog_matches_builtin_catalog() {
    let records = indicators_from_csv(&read_fixture("gtci-indicators.csv")).unwrap();
    let (pillars, headline) = pillars_from_toml(&read_fixture("gtci-pillars.toml")).unwrap();
    let loaded = Catalog::new(records, pillars, headline).unwrap();
    let builtin = builtin::gtci_2023_2025().unwrap();

    assert_eq!(loaded.indicators(), builtin.indicators());
    assert_eq!(loaded.recoded_pairs().len(), 3);
}

#[test]
fn malformed_row_aborts_construction() {
    let mut csv = read_fixture("gtci-indicators.csv");
    csv.push_str(",Orphan indicator,Grow,3.1 Formal Education,1,2,,,,,,,\n");

    let records: Vec<IndicatorRecord> = indicators_from_csv(&csv).unwrap();
    let err = Catalog::new(records, vec![], None).unwrap_err();
    match err {
        CatalogError::MissingField { row, field } => {
            assert_eq!(row, 82);
            assert_eq!(field, "code");
        }
        other => panic!("unexpected error: {other}"),
    }
}
