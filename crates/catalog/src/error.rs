use std::fmt;

#[derive(Debug)]
pub enum CatalogError {
    /// A record is missing one of code / name / pillar / subpillar.
    MissingField { row: usize, field: &'static str },
    /// A score is NaN or infinite.
    InvalidScore { row: usize, field: &'static str },
    /// A score cell could not be parsed as a number.
    ScoreParse { row: usize, column: String, value: String },
    /// Unrecognised lineage status string.
    UnknownStatus(String),
    /// A successor names a predecessor that no superseded row matches.
    UnresolvedPredecessor { row: usize, code: String, name: String },
    /// A successor's predecessor reference matches more than one row.
    AmbiguousPredecessor { row: usize, code: String, name: String },
    /// Required column absent from a tabular source.
    MissingColumn(String),
    /// CSV read error.
    Csv(String),
    /// TOML parse / deserialization error for rollup files.
    RollupParse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { row, field } => {
                write!(f, "row {row}: required field '{field}' is empty")
            }
            Self::InvalidScore { row, field } => {
                write!(f, "row {row}: '{field}' is not a finite number")
            }
            Self::ScoreParse { row, column, value } => {
                write!(f, "row {row}, column '{column}': cannot parse score '{value}'")
            }
            Self::UnknownStatus(status) => write!(f, "unknown indicator status: '{status}'"),
            Self::UnresolvedPredecessor { row, code, name } => {
                write!(f, "row {row}: predecessor {code} '{name}' not found among replaced/removed rows")
            }
            Self::AmbiguousPredecessor { row, code, name } => {
                write!(f, "row {row}: predecessor {code} '{name}' matches more than one row")
            }
            Self::MissingColumn(column) => write!(f, "missing column '{column}'"),
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::RollupParse(msg) => write!(f, "rollup parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}
