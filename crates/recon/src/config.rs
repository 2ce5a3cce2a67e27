use serde::Deserialize;

use crate::error::ReconError;
use crate::query::{IndicatorQuery, SortDirection, SortKey, StatusFilter};
use crate::universe::UniverseSelector;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// A saved listing: which rows to show, in which order, over which catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    pub name: String,
    #[serde(default)]
    pub view: ViewSection,
    #[serde(default)]
    pub sort: SortSection,
    /// External catalog files. The builtin dataset is used when absent.
    #[serde(default)]
    pub catalog: Option<CatalogSource>,
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewSection {
    #[serde(default)]
    pub universe: UniverseSelector,
    #[serde(default)]
    pub status: StatusFilter,
    /// Pillar name; empty or `"all"` keeps every pillar.
    #[serde(default)]
    pub pillar: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortSection {
    #[serde(default)]
    pub key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

/// Paths are relative to the config file's directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSource {
    pub indicators: String,
    #[serde(default)]
    pub pillars: Option<String>,
}

// ---------------------------------------------------------------------------
// Parsing + validation
// ---------------------------------------------------------------------------

impl ViewConfig {
    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        let config: ViewConfig =
            toml::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReconError> {
        if self.name.trim().is_empty() {
            return Err(ReconError::ConfigValidation("name must not be empty".into()));
        }

        if let Some(ref source) = self.catalog {
            if source.indicators.trim().is_empty() {
                return Err(ReconError::ConfigValidation(
                    "catalog.indicators must name a CSV file".into(),
                ));
            }
            if source.pillars.as_deref().is_some_and(|p| p.trim().is_empty()) {
                return Err(ReconError::ConfigValidation(
                    "catalog.pillars must not be empty when given".into(),
                ));
            }
        }

        Ok(())
    }

    /// The listing request this view describes.
    pub fn query(&self) -> IndicatorQuery {
        let pillar = self
            .view
            .pillar
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty() && !p.eq_ignore_ascii_case("all"))
            .map(str::to_string);
        let search = self
            .view
            .search
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string);

        IndicatorQuery {
            universe: self.view.universe,
            status: self.view.status,
            pillar,
            search,
            sort_key: self.sort.key,
            direction: self.sort.direction,
        }
    }
}
