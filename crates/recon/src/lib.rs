//! `gtci-recon`: cross-edition comparison engine for the GTCI catalog.
//!
//! Pure functions of a borrowed [`gtci_catalog::Catalog`] plus parameters:
//! universe selection, trend classification, aggregates, listings, reports.
//! File access is limited to loading catalog sources named by a view config.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod lookup;
pub mod model;
pub mod pillar;
pub mod query;
pub mod report;
pub mod sheet;
pub mod universe;

pub use aggregate::{aggregate, aggregate_by_pillar, IndicatorStats, PillarStats};
pub use classify::{classify, delta, is_missing_2025, Trend};
pub use config::ViewConfig;
pub use engine::{load_catalog, load_catalog_files, view_catalog, Engine};
pub use error::ReconError;
pub use lookup::CodeLookup;
pub use model::{IndicatorView, ViewMeta, ViewResult};
pub use pillar::{pillar_breakdown, PillarBreakdown, SubpillarBreakdown};
pub use query::{IndicatorQuery, SortDirection, SortKey, StatusFilter};
pub use report::{build_report, route_question, Report, ReportKind, Tally};
pub use sheet::SourceSheet;
pub use universe::{classify_universe, in_comparison_universe, UniverseSelector};
