//! CLI Exit Code Registry
//!
//! Single source of truth for `gtci` exit codes. Scripts rely on these.
//!
//! | Code | Meaning                                             |
//! |------|-----------------------------------------------------|
//! | 0    | Success                                             |
//! | 1    | General error (nothing found, serialization failed) |
//! | 2    | Usage error (bad arguments, unknown sheet column)   |
//! | 3    | Catalog malformed                                   |
//! | 4    | View config invalid                                 |
//! | 5    | IO failure (read or write)                          |
//!
//! Clap reports argument parse failures with code 2 on its own, which lines
//! up with [`EXIT_USAGE`].

use gtci_recon::ReconError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error. `lookup` of an unknown code, JSON serialization failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing sheet column, `--pillars` without
/// `--catalog`.
pub const EXIT_USAGE: u8 = 2;

/// Catalog CSV/TOML is malformed or fails lineage validation.
pub const EXIT_CATALOG: u8 = 3;

/// View config failed to parse or validate.
pub const EXIT_CONFIG: u8 = 4;

/// File could not be read or written.
pub const EXIT_IO: u8 = 5;

/// Exit code for an engine error.
pub fn recon_exit_code(err: &ReconError) -> u8 {
    match err {
        ReconError::Catalog(_) => EXIT_CATALOG,
        ReconError::ConfigParse(_) | ReconError::ConfigValidation(_) => EXIT_CONFIG,
        ReconError::SheetParse(_) => EXIT_USAGE,
        ReconError::Io(_) => EXIT_IO,
    }
}
