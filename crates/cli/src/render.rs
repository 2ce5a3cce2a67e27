//! Plain-text rendering for human output.

use std::io::{self, Write};

use gtci_recon::{IndicatorStats, IndicatorView};

use crate::CliError;

const NAME_WIDTH: usize = 48;

pub fn score(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}

pub fn signed(value: Option<f64>) -> String {
    match value {
        Some(v) if v > 0.0 => format!("+{v:.2}"),
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

pub fn stats_line(label: &str, s: &IndicatorStats) -> String {
    format!(
        "{label}: {} indicators, {} improved, {} declined, {} unchanged, {} incomparable, {} missing 2025 data",
        s.total, s.improved, s.declined, s.unchanged, s.incomparable, s.missing
    )
}

pub fn indicator_table(rows: &[IndicatorView<'_>]) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let io_err = |e: io::Error| CliError::io(e.to_string());

    writeln!(
        out,
        "{:<7} {:<width$} {:>7} {:>7} {:>8}  {}",
        "CODE",
        "NAME",
        "2023",
        "2025",
        "DELTA",
        "LINEAGE",
        width = NAME_WIDTH
    )
    .map_err(io_err)?;

    for row in rows {
        let ind = row.indicator;
        writeln!(
            out,
            "{:<7} {:<width$} {:>7} {:>7} {:>8}  {}",
            ind.code,
            truncate(&ind.name, NAME_WIDTH),
            score(ind.score_2023),
            score(ind.score_2025),
            signed(row.delta),
            ind.tag(),
            width = NAME_WIDTH
        )
        .map_err(io_err)?;
    }
    Ok(())
}
