use std::fmt;

use gtci_catalog::CatalogError;

#[derive(Debug)]
pub enum ReconError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty name, empty catalog path, etc.).
    ConfigValidation(String),
    /// The catalog could not be built.
    Catalog(CatalogError),
    /// A secondary sheet could not be read.
    SheetParse(String),
    /// IO error (file read, etc.).
    Io(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::Catalog(err) => write!(f, "catalog error: {err}"),
            Self::SheetParse(msg) => write!(f, "sheet parse error: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CatalogError> for ReconError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}
