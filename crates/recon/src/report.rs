use std::collections::HashMap;

use gtci_catalog::{Catalog, Indicator};
use serde::Serialize;

use crate::classify::{classify, Trend};
use crate::model::{views, IndicatorView};
use crate::query::{matches_status, StatusFilter};
use crate::universe::{classify_universe, UniverseSelector};

const PREVIEW_ROWS: usize = 5;
const TOP_SOURCES: usize = 8;
const TOP_OWNERS: usize = 10;

/// Canned question a report answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ReportKind {
    Improved,
    Declined,
    Missing,
    Sources,
    DataOwners,
    Search(String),
}

/// Map a free-text question to a report by keyword. First match wins.
pub fn route_question(question: &str) -> ReportKind {
    let q = question.to_lowercase();
    if q.contains("improve") {
        ReportKind::Improved
    } else if q.contains("decline") {
        ReportKind::Declined
    } else if q.contains("miss") || q.contains("no data") {
        ReportKind::Missing
    } else if q.contains("source") || q.contains("database") {
        ReportKind::Sources
    } else if q.contains("ministry") || q.contains("department") || q.contains("owner") {
        ReportKind::DataOwners
    } else {
        ReportKind::Search(question.trim().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    #[serde(flatten)]
    pub kind: ReportKind,
    pub title: String,
    /// Matching rows for row reports, distinct labels for tally reports.
    pub total: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub indicators: Vec<IndicatorView<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tallies: Vec<Tally>,
}

pub fn build_report<'a>(catalog: &'a Catalog, kind: &ReportKind) -> Report<'a> {
    let report = match kind {
        ReportKind::Improved => trend_report(catalog, kind, Trend::Improved, "Improved indicators"),
        ReportKind::Declined => trend_report(catalog, kind, Trend::Declined, "Declined indicators"),
        ReportKind::Missing => {
            let rows: Vec<&Indicator> = classify_universe(catalog, UniverseSelector::Edition2025)
                .into_iter()
                .filter(|i| matches_status(i, StatusFilter::Missing))
                .collect();
            rows_report(kind, "Indicators without 2025 data", rows)
        }
        ReportKind::Sources => {
            let all = tally(catalog.iter().map(|i| i.source.as_str()));
            tally_report(kind, "Data sources", all, TOP_SOURCES)
        }
        ReportKind::DataOwners => {
            let all = tally(catalog.iter().map(|i| i.data_owner.as_str()));
            tally_report(kind, "Data owners", all, TOP_OWNERS)
        }
        ReportKind::Search(text) => {
            let needle = text.trim().to_lowercase();
            // A blank question matches nothing.
            let rows: Vec<&Indicator> = if needle.is_empty() {
                Vec::new()
            } else {
                catalog
                    .iter()
                    .filter(|i| {
                        i.code.to_lowercase().contains(&needle) || i.name.to_lowercase().contains(&needle)
                    })
                    .collect()
            };
            rows_report(kind, &format!("Indicators matching '{text}'"), rows)
        }
    };
    log::debug!("report {:?}: total {}", report.kind, report.total);
    report
}

fn trend_report<'a>(catalog: &'a Catalog, kind: &ReportKind, trend: Trend, title: &str) -> Report<'a> {
    let rows: Vec<&Indicator> = classify_universe(catalog, UniverseSelector::Edition2025)
        .into_iter()
        .filter(|i| classify(i) == trend)
        .collect();
    rows_report(kind, title, rows)
}

fn rows_report<'a>(kind: &ReportKind, title: &str, rows: Vec<&'a Indicator>) -> Report<'a> {
    Report {
        kind: kind.clone(),
        title: title.to_string(),
        total: rows.len(),
        indicators: views(rows.into_iter().take(PREVIEW_ROWS)),
        tallies: Vec::new(),
    }
}

fn tally_report<'a>(kind: &ReportKind, title: &str, mut all: Vec<Tally>, top: usize) -> Report<'a> {
    let total = all.len();
    all.truncate(top);
    Report {
        kind: kind.clone(),
        title: title.to_string(),
        total,
        indicators: Vec::new(),
        tallies: all,
    }
}

/// Count non-empty labels. Ordered by count descending, first-seen on ties.
fn tally<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<Tally> {
    let mut order: Vec<Tally> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for label in labels.map(str::trim).filter(|l| !l.is_empty()) {
        match index.get(label) {
            Some(&pos) => order[pos].count += 1,
            None => {
                index.insert(label, order.len());
                order.push(Tally { label: label.to_string(), count: 1 });
            }
        }
    }
    order.sort_by(|a, b| b.count.cmp(&a.count));
    order
}
