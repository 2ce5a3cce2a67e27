use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// Lineage
// ---------------------------------------------------------------------------

/// Flat five-valued lineage tag. Every universe and status filter keys off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineageTag {
    #[serde(rename = "none")]
    Unchanged,
    New,
    Replaced,
    CodeChanged,
    Removed,
}

impl std::fmt::Display for LineageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unchanged => write!(f, "none"),
            Self::New => write!(f, "new"),
            Self::Replaced => write!(f, "replaced"),
            Self::CodeChanged => write!(f, "code-changed"),
            Self::Removed => write!(f, "removed"),
        }
    }
}

impl FromStr for LineageTag {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::Unchanged),
            "new" => Ok(Self::New),
            "replaced" => Ok(Self::Replaced),
            "code-changed" | "code_changed" => Ok(Self::CodeChanged),
            "removed" => Ok(Self::Removed),
            other => Err(CatalogError::UnknownStatus(other.to_string())),
        }
    }
}

/// Structured pointer from a successor row to the row it supersedes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IndicatorRef {
    pub code: String,
    pub name: String,
}

impl IndicatorRef {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into() }
    }
}

/// How an indicator's identity relates across the two editions.
///
/// `replaced_by` and `note` are free-form prose carried for display only.
/// The successor -> predecessor relationship is expressed through
/// `predecessor`, which catalog construction resolves and validates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status")]
pub enum Lineage {
    #[serde(rename = "none")]
    Unchanged,
    #[serde(rename = "new")]
    Added {
        #[serde(skip_serializing_if = "Option::is_none")]
        predecessor: Option<IndicatorRef>,
    },
    #[serde(rename = "code-changed")]
    CodeChanged {
        #[serde(skip_serializing_if = "Option::is_none")]
        predecessor: Option<IndicatorRef>,
    },
    #[serde(rename = "replaced")]
    Replaced {
        #[serde(skip_serializing_if = "Option::is_none")]
        replaced_by: Option<String>,
    },
    #[serde(rename = "removed")]
    Removed {
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

impl Lineage {
    pub fn tag(&self) -> LineageTag {
        match self {
            Self::Unchanged => LineageTag::Unchanged,
            Self::Added { .. } => LineageTag::New,
            Self::CodeChanged { .. } => LineageTag::CodeChanged,
            Self::Replaced { .. } => LineageTag::Replaced,
            Self::Removed { .. } => LineageTag::Removed,
        }
    }

    pub fn predecessor(&self) -> Option<&IndicatorRef> {
        match self {
            Self::Added { predecessor } | Self::CodeChanged { predecessor } => predecessor.as_ref(),
            _ => None,
        }
    }

    /// Display annotation for superseded rows ("Replaced by 1.2.7 Urbanisation").
    pub fn annotation(&self) -> Option<&str> {
        match self {
            Self::Replaced { replaced_by } => replaced_by.as_deref(),
            Self::Removed { note } => note.as_deref(),
            _ => None,
        }
    }

    /// Build a lineage from its flat tag plus the optional text and reference
    /// columns found in tabular sources. Text is attached to `replaced` and
    /// `removed`; the reference to `new` and `code-changed`.
    pub fn from_parts(
        tag: LineageTag,
        annotation: Option<String>,
        predecessor: Option<IndicatorRef>,
    ) -> Self {
        match tag {
            LineageTag::Unchanged => Self::Unchanged,
            LineageTag::New => Self::Added { predecessor },
            LineageTag::CodeChanged => Self::CodeChanged { predecessor },
            LineageTag::Replaced => Self::Replaced { replaced_by: annotation },
            LineageTag::Removed => Self::Removed { note: annotation },
        }
    }
}

impl Default for Lineage {
    fn default() -> Self {
        Self::Unchanged
    }
}

// ---------------------------------------------------------------------------
// Indicator
// ---------------------------------------------------------------------------

/// Input shape handed to [`crate::Catalog::new`]. Loaders and the builtin
/// dataset produce these; the catalog assigns ids and derived flags.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRecord {
    pub code: String,
    pub name: String,
    pub pillar: String,
    pub subpillar: String,
    pub score_2023: Option<f64>,
    pub score_2025: Option<f64>,
    pub lineage: Lineage,
    pub source: String,
    pub website: String,
    pub data_owner: String,
}

impl IndicatorRecord {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        pillar: impl Into<String>,
        subpillar: impl Into<String>,
        score_2023: Option<f64>,
        score_2025: Option<f64>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            pillar: pillar.into(),
            subpillar: subpillar.into(),
            score_2023,
            score_2025,
            lineage: Lineage::Unchanged,
            source: String::new(),
            website: String::new(),
            data_owner: String::new(),
        }
    }

    pub fn with_lineage(mut self, lineage: Lineage) -> Self {
        self.lineage = lineage;
        self
    }

    pub fn with_metadata(
        mut self,
        source: impl Into<String>,
        website: impl Into<String>,
        data_owner: impl Into<String>,
    ) -> Self {
        self.source = source.into();
        self.website = website.into();
        self.data_owner = data_owner.into();
        self
    }
}

/// One validated catalog row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    pub id: String,
    pub code: String,
    pub name: String,
    pub pillar: String,
    pub subpillar: String,
    pub score_2023: Option<f64>,
    pub score_2025: Option<f64>,
    #[serde(flatten)]
    pub lineage: Lineage,
    pub is_2023_only: bool,
    pub source: String,
    pub website: String,
    pub data_owner: String,
}

impl Indicator {
    pub fn tag(&self) -> LineageTag {
        self.lineage.tag()
    }

    /// Leading token of the sub-pillar label: "1.2 Market Landscape" -> "1.2".
    pub fn subpillar_id(&self) -> &str {
        self.subpillar.split_whitespace().next().unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// Rollups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubpillarRollup {
    pub id: String,
    pub name: String,
    pub score_2023: f64,
    pub rank_2023: u32,
    pub score_2025: f64,
    pub rank_2025: u32,
}

/// Published pillar-level score and rank per edition. Display only; the
/// reconciliation rules never read these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarRollup {
    pub id: String,
    pub name: String,
    pub score_2023: f64,
    pub rank_2023: u32,
    pub score_2025: f64,
    pub rank_2025: u32,
    #[serde(default, alias = "subpillar")]
    pub subpillars: Vec<SubpillarRollup>,
}

/// Overall index score and global rank per edition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexHeadline {
    pub score_2023: f64,
    pub rank_2023: u32,
    pub score_2025: f64,
    pub rank_2025: u32,
}

impl IndexHeadline {
    pub fn score_change(&self) -> f64 {
        self.score_2025 - self.score_2023
    }

    /// Positive when the 2025 rank is better (numerically lower).
    pub fn rank_change(&self) -> i64 {
        i64::from(self.rank_2023) - i64::from(self.rank_2025)
    }
}
