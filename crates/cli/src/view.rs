//! `gtci run` and `gtci validate`: file-driven commands.

use std::path::{Path, PathBuf};

use gtci_catalog::{load, Catalog, LineageTag};
use gtci_recon::{view_catalog, Engine, ViewConfig};

use crate::render::{indicator_table, stats_line};
use crate::{read_input, write_json, CatalogFlags, CliError};

pub fn cmd_run(
    flags: &CatalogFlags,
    config_path: &Path,
    json_output: bool,
    output_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let config_str = read_input(config_path)?;
    let config = ViewConfig::from_toml(&config_str)?;

    // Resolve catalog paths relative to the config file's directory
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let catalog: Catalog = if flags.is_external() {
        if config.catalog.is_some() {
            log::warn!("--catalog overrides the [catalog] section of {}", config_path.display());
        }
        flags.load()?
    } else {
        view_catalog(&config, base_dir)?
    };

    let result = Engine::new(&catalog).run(&config);

    let json_str = write_json(&result)?;
    if let Some(ref path) = output_file {
        std::fs::write(path, &json_str)
            .map_err(|e| CliError::io(format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if json_output {
        println!("{json_str}");
    } else if output_file.is_none() {
        indicator_table(&result.rows)?;
    }

    // Human summary to stderr
    eprintln!("view '{}': {} rows", result.meta.view_name, result.row_count);
    eprintln!("{}", stats_line(&format!("universe {}", result.meta.universe), &result.stats));
    Ok(())
}

pub fn cmd_validate(file: &Path, pillars: Option<&Path>) -> Result<(), CliError> {
    let records = load::indicators_from_csv(&read_input(file)?)?;
    let (rollups, headline) = match pillars {
        Some(path) => load::pillars_from_toml(&read_input(path)?)?,
        None => (Vec::new(), None),
    };
    let catalog = Catalog::new(records, rollups, headline)?;

    let count = |tag: LineageTag| catalog.iter().filter(|i| i.tag() == tag).count();
    println!(
        "ok: {} indicators ({} unchanged, {} new, {} code-changed, {} replaced, {} removed)",
        catalog.len(),
        count(LineageTag::Unchanged),
        count(LineageTag::New),
        count(LineageTag::CodeChanged),
        count(LineageTag::Replaced),
        count(LineageTag::Removed)
    );
    println!("    {} recoded pairs, {} pillar rollups", catalog.recoded_pairs().len(), catalog.pillars().len());

    // Rollups are display-only; a sub-pillar without one is a warning.
    if !catalog.pillars().is_empty() {
        let orphans = catalog
            .iter()
            .filter(|i| {
                !catalog.pillars().iter().any(|p| {
                    p.name == i.pillar && p.subpillars.iter().any(|s| s.id == i.subpillar_id())
                })
            })
            .count();
        if orphans > 0 {
            log::warn!("{orphans} rows have no matching sub-pillar rollup");
        }
    }
    Ok(())
}

