use serde::Deserialize;

use crate::error::CatalogError;
use crate::model::{IndexHeadline, IndicatorRecord, IndicatorRef, Lineage, LineageTag, PillarRollup};

/// Score cells that mean "not measured this edition".
const ABSENT_MARKERS: &[&str] = &["", "n/a", "na", "null", "-"];

/// Load indicator records from CSV text.
///
/// Columns are located by header name. `code`, `name`, `pillar`, `subpillar`,
/// `score_2023` and `score_2025` are required; `status`, `replaced_by`,
/// `predecessor_code`, `predecessor_name`, `source`, `website` and
/// `data_owner` are optional. Validation of field contents is left to
/// [`crate::Catalog::new`].
pub fn indicators_from_csv(csv_data: &str) -> Result<Vec<IndicatorRecord>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| CatalogError::Csv(e.to_string()))?
        .iter()
        .map(|h| h.to_ascii_lowercase())
        .collect();

    let idx = |name: &str| -> Result<usize, CatalogError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| CatalogError::MissingColumn(name.into()))
    };
    let opt_idx = |name: &str| headers.iter().position(|h| h == name);

    let code_idx = idx("code")?;
    let name_idx = idx("name")?;
    let pillar_idx = idx("pillar")?;
    let subpillar_idx = idx("subpillar")?;
    let s23_idx = idx("score_2023")?;
    let s25_idx = idx("score_2025")?;
    let status_idx = opt_idx("status");
    let replaced_by_idx = opt_idx("replaced_by");
    let pred_code_idx = opt_idx("predecessor_code");
    let pred_name_idx = opt_idx("predecessor_name");
    let source_idx = opt_idx("source");
    let website_idx = opt_idx("website");
    let owner_idx = opt_idx("data_owner");

    let mut records = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| CatalogError::Csv(e.to_string()))?;
        let row = i + 1;

        let cell = |idx: usize| record.get(idx).unwrap_or("").to_string();
        let opt_cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("").to_string();
        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };

        let score_2023 = parse_score(row, "score_2023", record.get(s23_idx).unwrap_or(""))?;
        let score_2025 = parse_score(row, "score_2025", record.get(s25_idx).unwrap_or(""))?;

        let tag: LineageTag = opt_cell(status_idx).parse()?;
        let predecessor = match (non_empty(opt_cell(pred_code_idx)), non_empty(opt_cell(pred_name_idx))) {
            (Some(code), Some(name)) => Some(IndicatorRef { code, name }),
            _ => None,
        };
        let lineage = Lineage::from_parts(tag, non_empty(opt_cell(replaced_by_idx)), predecessor);

        records.push(
            IndicatorRecord::new(
                cell(code_idx),
                cell(name_idx),
                cell(pillar_idx),
                cell(subpillar_idx),
                score_2023,
                score_2025,
            )
            .with_lineage(lineage)
            .with_metadata(opt_cell(source_idx), opt_cell(website_idx), opt_cell(owner_idx)),
        );
    }

    log::debug!("parsed {} indicator records from CSV", records.len());
    Ok(records)
}

fn parse_score(row: usize, column: &str, raw: &str) -> Result<Option<f64>, CatalogError> {
    let trimmed = raw.trim();
    if ABSENT_MARKERS.iter().any(|m| trimmed.eq_ignore_ascii_case(m)) {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(CatalogError::ScoreParse {
            row,
            column: column.into(),
            value: raw.into(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Rollups
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RollupFile {
    #[serde(default)]
    headline: Option<IndexHeadline>,
    #[serde(default, rename = "pillar")]
    pillars: Vec<PillarRollup>,
}

/// Load pillar rollups (and the optional overall headline) from TOML:
///
/// ```toml
/// [headline]
/// score_2023 = 51.74
/// rank_2023 = 41
/// score_2025 = 51.48
/// rank_2025 = 43
///
/// [[pillar]]
/// id = "1"
/// name = "Enable"
/// score_2023 = 49.43
/// rank_2023 = 51
/// score_2025 = 56.30
/// rank_2025 = 43
///
/// [[pillar.subpillar]]
/// id = "1.1"
/// name = "Regulatory Landscape"
/// score_2023 = 76.88
/// rank_2023 = 19
/// score_2025 = 80.43
/// rank_2025 = 15
/// ```
pub fn pillars_from_toml(
    input: &str,
) -> Result<(Vec<PillarRollup>, Option<IndexHeadline>), CatalogError> {
    let file: RollupFile =
        toml::from_str(input).map_err(|e| CatalogError::RollupParse(e.to_string()))?;
    Ok((file.pillars, file.headline))
}
