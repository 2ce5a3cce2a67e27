//! `gtci sheet`: annotate an external spreadsheet export with indicator names.

use std::path::{Path, PathBuf};

use gtci_recon::{Engine, SortDirection, SourceSheet};
use serde_json::{Map, Value};

use crate::{read_input, write_json, CatalogFlags, CliError};

pub fn cmd_sheet(
    flags: &CatalogFlags,
    file: &Path,
    code_column: &str,
    search: Option<String>,
    sort_column: Option<String>,
    desc: bool,
    json: bool,
) -> Result<(), CliError> {
    let catalog = flags.load()?;
    let engine = Engine::new(&catalog);

    let mut sheet = SourceSheet::from_csv(&read_input(file)?)?;
    if sheet.column_index(code_column).is_none() {
        return Err(CliError::usage(format!("no column '{code_column}' in {}", file.display()))
            .with_hint(format!("columns: {}", sheet.headers.join(", "))));
    }
    if let Some(ref text) = search {
        sheet = sheet.search(text);
    }
    if let Some(ref column) = sort_column {
        let direction = if desc { SortDirection::Desc } else { SortDirection::Asc };
        sheet = sheet.sorted(column, direction)?;
    }
    let sheet = sheet.annotate(engine.lookup(), code_column)?;

    if json {
        println!("{}", write_json(&rows_as_objects(&sheet))?);
    } else {
        write_csv(&sheet)?;
    }
    eprintln!("{} rows from {}", sheet.rows.len(), display_name(file));
    Ok(())
}

/// One JSON object per row, keyed by header, columns in sheet order.
fn rows_as_objects(sheet: &SourceSheet) -> Vec<Value> {
    sheet
        .rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            for (header, cell) in sheet.headers.iter().zip(row) {
                obj.insert(header.clone(), Value::String(cell.clone()));
            }
            Value::Object(obj)
        })
        .collect()
}

fn write_csv(sheet: &SourceSheet) -> Result<(), CliError> {
    let csv_err = |e: csv::Error| CliError::io(e.to_string());
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(std::io::stdout());
    writer.write_record(&sheet.headers).map_err(csv_err)?;
    for row in &sheet.rows {
        writer.write_record(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| CliError::io(e.to_string()))
}

fn display_name(file: &Path) -> String {
    file.file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| file.to_path_buf())
        .display()
        .to_string()
}
