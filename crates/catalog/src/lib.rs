//! `gtci-catalog`: indicator catalog for the GTCI 2023/2025 comparison.
//!
//! Holds the immutable indicator rows and published pillar rollups. Rows are
//! validated once at construction; nothing here changes after that.

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod load;
pub mod model;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use model::{
    IndexHeadline, Indicator, IndicatorRecord, IndicatorRef, Lineage, LineageTag, PillarRollup,
    SubpillarRollup,
};
