//! Secondary spreadsheet exports: free-form tables that reference indicators
//! by code. The engine can search and sort them and append the resolved
//! indicator name next to each row.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::error::ReconError;
use crate::lookup::CodeLookup;
use crate::query::SortDirection;

pub const NAME_COLUMN: &str = "Indicator name";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SourceSheet {
    /// Parse CSV text with a header row. Every row is sized to the header:
    /// short rows are padded with empty cells, extra cells are dropped.
    pub fn from_csv(text: &str) -> Result<Self, ReconError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ReconError::SheetParse(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.is_empty() || headers.iter().all(String::is_empty) {
            return Err(ReconError::SheetParse("sheet has no header row".into()));
        }

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result.map_err(|e| ReconError::SheetParse(format!("row {}: {e}", idx + 1)))?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            if row.len() != headers.len() {
                let action = if row.len() < headers.len() { "padding" } else { "dropping extra cells" };
                log::warn!(
                    "sheet row {} has {} cells, header has {}; {action}",
                    idx + 1,
                    row.len(),
                    headers.len()
                );
                row.resize(headers.len(), String::new());
            }
            rows.push(row);
        }

        log::debug!("sheet parsed: {} columns, {} rows", headers.len(), rows.len());
        Ok(Self { headers, rows })
    }

    /// Case-insensitive header lookup.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.headers.iter().position(|h| h.to_lowercase() == wanted)
    }

    fn require_column(&self, name: &str) -> Result<usize, ReconError> {
        self.column_index(name).ok_or_else(|| {
            ReconError::SheetParse(format!(
                "no column '{name}' (available: {})",
                self.headers.join(", ")
            ))
        })
    }

    /// Rows where any cell contains `text`, case-insensitive. Empty text keeps
    /// every row.
    pub fn search(&self, text: &str) -> SourceSheet {
        let needle = text.trim().to_lowercase();
        let rows = if needle.is_empty() {
            self.rows.clone()
        } else {
            self.rows
                .iter()
                .filter(|row| row.iter().any(|cell| cell.to_lowercase().contains(&needle)))
                .cloned()
                .collect()
        };
        SourceSheet { headers: self.headers.clone(), rows }
    }

    /// Stable sort by one column. Numbers come before text and blanks come
    /// last in either direction; `direction` orders values within each rank.
    pub fn sorted(&self, column: &str, direction: SortDirection) -> Result<SourceSheet, ReconError> {
        let idx = self.require_column(column)?;
        let mut keyed: Vec<(CellKey, &Vec<String>)> =
            self.rows.iter().map(|row| (CellKey::parse(cell(row, idx)), row)).collect();
        keyed.sort_by(|(a, _), (b, _)| {
            a.rank().cmp(&b.rank()).then_with(|| {
                let ord = a.cmp(b);
                match direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            })
        });
        let rows = keyed.into_iter().map(|(_, row)| row.clone()).collect();
        Ok(SourceSheet { headers: self.headers.clone(), rows })
    }

    /// Append an `Indicator name` column resolved from `code_column` through
    /// the lookup. Unknown codes get an empty cell.
    pub fn annotate(&self, lookup: &CodeLookup, code_column: &str) -> Result<SourceSheet, ReconError> {
        let idx = self.require_column(code_column)?;
        let mut headers = self.headers.clone();
        headers.push(NAME_COLUMN.to_string());

        let mut unresolved = 0usize;
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let name = lookup.name(cell(row, idx)).unwrap_or_else(|| {
                    unresolved += 1;
                    ""
                });
                let mut out = row.clone();
                out.push(name.to_string());
                out
            })
            .collect();

        if unresolved > 0 {
            log::debug!("annotate: {unresolved} rows with unknown code in '{code_column}'");
        }
        Ok(SourceSheet { headers, rows })
    }
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

// ============================================================================
// Cell sort keys
// ============================================================================

/// Typed value of a sheet cell for sorting. Rank order: Number < Text < Blank.
#[derive(Debug, Clone)]
pub enum CellKey {
    Number(OrderedFloat<f64>),
    Text(String),
    Blank,
}

impl CellKey {
    pub fn parse(cell: &str) -> Self {
        let cell = cell.trim();
        if cell.is_empty() {
            CellKey::Blank
        } else if let Some(n) = parse_decimal(cell) {
            CellKey::Number(OrderedFloat(n))
        } else {
            CellKey::Text(cell.to_string())
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            CellKey::Number(_) => 0,
            CellKey::Text(_) => 1,
            CellKey::Blank => 2,
        }
    }
}

impl Ord for CellKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellKey::Number(a), CellKey::Number(b)) => a.cmp(b),
            (CellKey::Text(a), CellKey::Text(b)) => natural_cmp(a, b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for CellKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CellKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellKey {}

/// Plain decimal only: optional sign, digits, optional fraction. Exponents,
/// `inf` and `NaN` stay text.
fn parse_decimal(s: &str) -> Option<f64> {
    let unsigned = s.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(s);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let valid = digits(int)
        && frac.map_or(!int.is_empty(), |f| digits(f) && !(int.is_empty() && f.is_empty()));
    if valid {
        s.parse().ok()
    } else {
        None
    }
}

/// Ascending order of two cells under [`CellKey`].
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    CellKey::parse(a).cmp(&CellKey::parse(b))
}

/// Case-insensitive comparison with embedded digit runs compared by value,
/// so "1.2.10" sorts after "1.2.9".
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let mut xs = a.chars().peekable();
    let mut ys = b.chars().peekable();

    loop {
        match (xs.peek().copied(), ys.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let left = take_digits(&mut xs);
                let right = take_digits(&mut ys);
                let ord = compare_digit_runs(&left, &right);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                xs.next();
                ys.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
        .then_with(|| a.len().cmp(&b.len()))
}
