use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gtci_catalog::{builtin, Catalog};
use gtci_recon::{ReconError, SortKey, StatusFilter, UniverseSelector};
use tracing_subscriber::EnvFilter;

mod exit_codes;
mod listing;
mod render;
mod sheet;
mod view;

use exit_codes::*;

#[derive(Parser)]
#[command(name = "gtci")]
#[command(about = "Compare GTCI 2023 and 2025 indicator editions")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    /// Indicator CSV to use instead of the builtin dataset
    #[arg(long, global = true, value_name = "CSV")]
    catalog: Option<PathBuf>,

    /// Pillar rollup TOML to pair with --catalog
    #[arg(long, global = true, value_name = "TOML")]
    pillars: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List indicators with filters and sorting
    #[command(after_help = "\
Examples:
  gtci list
  gtci list --status declined --sort delta
  gtci list --universe all --pillar Enable --search urban
  gtci list --sort score2025 --desc --json")]
    List {
        /// Row universe: all, 2023 or 2025
        #[arg(long, default_value = "2025")]
        universe: UniverseSelector,

        /// Trend filter: all, improved, declined or missing
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// Exact pillar name
        #[arg(long)]
        pillar: Option<String>,

        /// Case-insensitive substring of code or name
        #[arg(long)]
        search: Option<String>,

        /// Sort key: code, name, score2023, score2025, delta or data_owner
        #[arg(long, default_value = "code")]
        sort: SortKey,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Output JSON to stdout instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summary counts over the comparison universe
    #[command(after_help = "\
Examples:
  gtci stats
  gtci stats --by-pillar
  gtci stats --json")]
    Stats {
        /// One line per pillar
        #[arg(long)]
        by_pillar: bool,

        #[arg(long)]
        json: bool,
    },

    /// Resolve an indicator code to its current name
    #[command(after_help = "\
Examples:
  gtci lookup 1.2.5")]
    Lookup {
        code: String,
    },

    /// Answer a canned question about the comparison
    #[command(after_help = "\
Examples:
  gtci report which indicators improved
  gtci report where is data missing
  gtci report which ministry owns the most data --json")]
    Report {
        /// Free-text question, routed by keyword
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Pillar and sub-pillar score and rank changes
    #[command(after_help = "\
Examples:
  gtci pillars
  gtci pillars --json")]
    Pillars {
        #[arg(long)]
        json: bool,
    },

    /// Annotate an external sheet with indicator names
    #[command(after_help = "\
Examples:
  gtci sheet sources.csv
  gtci sheet sources.csv --code-column \"Indicator Code\" --sort-column Code
  gtci sheet sources.csv --search \"world bank\" --json")]
    Sheet {
        /// CSV export with a header row
        file: PathBuf,

        /// Column holding indicator codes
        #[arg(long, default_value = "Code")]
        code_column: String,

        /// Keep rows where any cell contains this text
        #[arg(long)]
        search: Option<String>,

        /// Sort by this column: numbers, then text, then blanks
        #[arg(long)]
        sort_column: Option<String>,

        #[arg(long)]
        desc: bool,

        #[arg(long)]
        json: bool,
    },

    /// Run a saved view from a TOML config file
    #[command(after_help = "\
Examples:
  gtci run declines.view.toml
  gtci run declines.view.toml --json
  gtci run declines.view.toml --output result.json")]
    Run {
        /// Path to the .view.toml config file
        config: PathBuf,

        /// Output JSON to stdout instead of a table
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Check an indicator CSV (and optional pillar TOML) without running
    #[command(after_help = "\
Examples:
  gtci validate indicators.csv
  gtci validate indicators.csv --pillars pillars.toml")]
    Validate {
        /// Indicator CSV
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    let catalog_flags = CatalogFlags {
        catalog: cli.catalog,
        pillars: cli.pillars,
    };

    let result = match cli.command {
        None => {
            eprintln!("Usage: gtci <command> [options]");
            eprintln!("       gtci --help for more information");
            Ok(())
        }
        Some(Commands::List { universe, status, pillar, search, sort, desc, json }) => {
            listing::cmd_list(&catalog_flags, universe, status, pillar, search, sort, desc, json)
        }
        Some(Commands::Stats { by_pillar, json }) => listing::cmd_stats(&catalog_flags, by_pillar, json),
        Some(Commands::Lookup { code }) => listing::cmd_lookup(&catalog_flags, &code),
        Some(Commands::Report { question, json }) => {
            listing::cmd_report(&catalog_flags, &question.join(" "), json)
        }
        Some(Commands::Pillars { json }) => listing::cmd_pillars(&catalog_flags, json),
        Some(Commands::Sheet { file, code_column, search, sort_column, desc, json }) => {
            sheet::cmd_sheet(&catalog_flags, &file, &code_column, search, sort_column, desc, json)
        }
        Some(Commands::Run { config, json, output }) => view::cmd_run(&catalog_flags, &config, json, output),
        Some(Commands::Validate { file }) => view::cmd_validate(&file, catalog_flags.pillars.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

/// Diagnostics go to stderr so `--json` stdout stays a single value.
/// `GTCI_LOG` takes precedence over `RUST_LOG`; default is `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("GTCI_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    pub fn general(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<ReconError> for CliError {
    fn from(err: ReconError) -> Self {
        let code = recon_exit_code(&err);
        let hint = match err {
            ReconError::Catalog(_) => Some("run `gtci validate <CSV>` for the full check".to_string()),
            _ => None,
        };
        Self { code, message: err.to_string(), hint }
    }
}

impl From<gtci_catalog::CatalogError> for CliError {
    fn from(err: gtci_catalog::CatalogError) -> Self {
        ReconError::from(err).into()
    }
}

// ============================================================================
// Catalog selection
// ============================================================================

/// Global `--catalog` / `--pillars` flags.
pub struct CatalogFlags {
    pub catalog: Option<PathBuf>,
    pub pillars: Option<PathBuf>,
}

impl CatalogFlags {
    pub fn is_external(&self) -> bool {
        self.catalog.is_some()
    }

    /// The catalog named on the command line, or the builtin dataset.
    pub fn load(&self) -> Result<Catalog, CliError> {
        match (&self.catalog, &self.pillars) {
            (Some(csv), pillars) => Ok(gtci_recon::load_catalog_files(csv, pillars.as_deref())?),
            (None, Some(_)) => Err(CliError::usage("--pillars requires --catalog")
                .with_hint("pass the indicator CSV the rollups belong to")),
            (None, None) => Ok(builtin::gtci_2023_2025()?),
        }
    }
}

pub fn write_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::general(format!("JSON serialization error: {e}")))
}

pub fn read_input(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))
}
