//! `gtci list`, `stats`, `lookup`, `report`, `pillars`: read-only views of
//! the selected catalog.

use gtci_recon::model::views;
use gtci_recon::{
    Engine, IndicatorQuery, IndicatorStats, PillarStats, SortDirection, SortKey, StatusFilter,
    UniverseSelector,
};
use serde::Serialize;

use crate::render::{indicator_table, score, signed, stats_line};
use crate::{write_json, CatalogFlags, CliError};

#[allow(clippy::too_many_arguments)]
pub fn cmd_list(
    flags: &CatalogFlags,
    universe: UniverseSelector,
    status: StatusFilter,
    pillar: Option<String>,
    search: Option<String>,
    sort: SortKey,
    desc: bool,
    json: bool,
) -> Result<(), CliError> {
    let catalog = flags.load()?;
    let engine = Engine::new(&catalog);

    let direction = if desc { SortDirection::Desc } else { SortDirection::Asc };
    let mut query = IndicatorQuery::new().universe(universe).status(status).sort(sort, direction);
    if let Some(pillar) = pillar {
        if !catalog.pillar_names().contains(&pillar.as_str()) {
            log::warn!("no pillar named '{pillar}' (known: {})", catalog.pillar_names().join(", "));
        }
        query = query.pillar(pillar);
    }
    if let Some(search) = search {
        query = query.search(search);
    }

    let rows = views(engine.query(&query));
    if json {
        println!("{}", write_json(&rows)?);
    } else {
        indicator_table(&rows)?;
    }
    eprintln!("{} of {} indicators (universe {universe}, status {status})", rows.len(), catalog.len());
    Ok(())
}

#[derive(Serialize)]
struct StatsOutput {
    universe: UniverseSelector,
    stats: IndicatorStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pillars: Option<Vec<PillarStats>>,
}

pub fn cmd_stats(flags: &CatalogFlags, by_pillar: bool, json: bool) -> Result<(), CliError> {
    let catalog = flags.load()?;
    let engine = Engine::new(&catalog);

    let output = StatsOutput {
        universe: UniverseSelector::Edition2025,
        stats: engine.stats(UniverseSelector::Edition2025),
        pillars: by_pillar.then(|| engine.stats_by_pillar()),
    };

    if json {
        println!("{}", write_json(&output)?);
        return Ok(());
    }

    println!("{}", stats_line("comparison universe", &output.stats));
    if let Some(ref pillars) = output.pillars {
        for p in pillars {
            println!("  {}", stats_line(&p.pillar, &p.stats));
        }
    }
    Ok(())
}

pub fn cmd_lookup(flags: &CatalogFlags, code: &str) -> Result<(), CliError> {
    let catalog = flags.load()?;
    let engine = Engine::new(&catalog);
    match engine.lookup().name(code) {
        Some(name) => {
            println!("{name}");
            Ok(())
        }
        None => Err(CliError::general(format!("no indicator with code '{}'", code.trim()))
            .with_hint("codes look like 1.2.5; run `gtci list --universe all` to browse")),
    }
}

pub fn cmd_report(flags: &CatalogFlags, question: &str, json: bool) -> Result<(), CliError> {
    let catalog = flags.load()?;
    let engine = Engine::new(&catalog);
    let report = engine.ask(question);

    if json {
        println!("{}", write_json(&report)?);
        return Ok(());
    }

    println!("{} ({})", report.title, report.total);
    for view in &report.indicators {
        let ind = view.indicator;
        println!(
            "  {:<7} {}  {} -> {} ({})",
            ind.code,
            ind.name,
            score(ind.score_2023),
            score(ind.score_2025),
            signed(view.delta)
        );
    }
    for tally in &report.tallies {
        println!("  {:>4}  {}", tally.count, tally.label);
    }
    if report.indicators.len() < report.total && report.tallies.is_empty() {
        println!("  ... {} more", report.total - report.indicators.len());
    }
    Ok(())
}

#[derive(Serialize)]
struct PillarsOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    headline: Option<&'a gtci_catalog::IndexHeadline>,
    pillars: Vec<gtci_recon::PillarBreakdown<'a>>,
}

pub fn cmd_pillars(flags: &CatalogFlags, json: bool) -> Result<(), CliError> {
    let catalog = flags.load()?;
    let engine = Engine::new(&catalog);
    let output = PillarsOutput {
        headline: catalog.headline(),
        pillars: engine.pillar_breakdown(),
    };

    if json {
        println!("{}", write_json(&output)?);
        return Ok(());
    }

    if output.pillars.is_empty() {
        eprintln!("no pillar rollups loaded");
        if flags.is_external() {
            eprintln!("hint:  pass --pillars <TOML> alongside --catalog");
        }
    }

    if let Some(h) = output.headline {
        println!(
            "GTCI score {:.2} -> {:.2} ({}), rank {} -> {} ({:+})",
            h.score_2023,
            h.score_2025,
            signed(Some(h.score_change())),
            h.rank_2023,
            h.rank_2025,
            h.rank_change()
        );
    }
    for p in &output.pillars {
        println!(
            "{} {}: {:.2} -> {:.2} ({}), rank {} -> {} ({:+})",
            p.rollup.id,
            p.rollup.name,
            p.rollup.score_2023,
            p.rollup.score_2025,
            signed(Some(p.score_change)),
            p.rollup.rank_2023,
            p.rollup.rank_2025,
            p.rank_change
        );
        for sub in &p.subpillars {
            println!(
                "  {} {}: {} ({:+} ranks), {} indicators, {} improved, {} declined",
                sub.rollup.id,
                sub.rollup.name,
                signed(Some(sub.score_change)),
                sub.rank_change,
                sub.indicators.len(),
                sub.stats.improved,
                sub.stats.declined
            );
        }
    }
    Ok(())
}
