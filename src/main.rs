// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use topmatch::{
    CorpusSource, RankingEngine, ResultSet, ScoredMatch, SearchConfig, SearchFields,
};

mod cli;
use cli::display::{self, Color, BOLD};
use cli::{Cli, Commands, EngineArgs};

/// Exit code for a request the engine never saw (missing keyword).
const EXIT_USAGE: u8 = 2;

/// One result on the wire. `series_name` is the display title.
#[derive(Serialize)]
struct WireMatch<'a> {
    id: &'a str,
    series_name: &'a str,
    score: f64,
    tier: &'static str,
}

impl<'a, 'c: 'a> From<&'a ScoredMatch<'c>> for WireMatch<'a> {
    fn from(m: &'a ScoredMatch<'c>) -> Self {
        WireMatch {
            id: m.record.id.as_str(),
            series_name: &m.record.title,
            score: m.score,
            tier: m.tier.as_str(),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            corpus,
            keyword,
            limit,
            json,
            engine,
        } => run_search(&corpus, keyword.as_deref(), limit, json, &engine),
        Commands::Inspect { corpus, engine } => run_inspect(&corpus, &engine),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn build_config(args: &EngineArgs) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SearchConfig::default(),
    };
    if args.title_only {
        config.fields = SearchFields::title_only();
    }
    Ok(config)
}

fn load_engine(corpus: &Path, args: &EngineArgs) -> Result<RankingEngine> {
    let engine = RankingEngine::new(build_config(args)?);
    engine
        .load(CorpusSource::path(corpus))
        .with_context(|| format!("loading corpus {}", corpus.display()))?;
    Ok(engine)
}

fn run_search(
    corpus: &Path,
    keyword: Option<&str>,
    limit: Option<usize>,
    json: bool,
    args: &EngineArgs,
) -> Result<ExitCode> {
    // A missing keyword is the caller's mistake, not an empty query.
    let Some(keyword) = keyword.filter(|k| !k.trim().is_empty()) else {
        eprintln!("Missing 'keyword' parameter");
        return Ok(ExitCode::from(EXIT_USAGE));
    };

    let engine = load_engine(corpus, args)?;
    let limit = limit.unwrap_or(engine.config().default_limit);

    let start = Instant::now();
    let results = engine.search(keyword, limit)?;
    let elapsed = start.elapsed();

    if json {
        let wire: Vec<WireMatch<'_>> = results.iter().map(WireMatch::from).collect();
        println!("{}", serde_json::to_string_pretty(&wire)?);
    } else {
        print_results(keyword, &results, elapsed.as_secs_f64() * 1_000_000.0);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_results(keyword: &str, results: &ResultSet<'_>, micros: f64) {
    display::section_top(&format!("TOP MATCHES: \"{}\"", display::truncate(keyword, 40)));
    if results.is_empty() {
        display::row(&display::themed(Color::Gray, &[], " no matches"));
    }
    for (rank, m) in results.iter().enumerate() {
        display::row(&format!(
            " {:>2}. {} {} {:<10} {}",
            rank + 1,
            display::tier_label(m.tier),
            display::score_value(m.score, m.tier),
            display::truncate(m.record.id.as_str(), 10),
            display::truncate(&m.record.title, 38),
        ));
    }
    display::section_bot();
    println!(
        "{}",
        display::themed(
            Color::Gray,
            &[],
            &format!("{} result(s) in {:.1}µs", results.len(), micros)
        )
    );
}

fn run_inspect(corpus: &Path, args: &EngineArgs) -> Result<ExitCode> {
    let engine = load_engine(corpus, args)?;
    let corpus = engine.corpus()?;

    display::section_top(&format!("CORPUS: {} record(s)", corpus.len()));
    for (position, record, norm) in corpus.entries() {
        let mut tokens: Vec<&str> = norm.tokens().iter().map(String::as_str).collect();
        tokens.sort_unstable();
        display::row(&format!(
            " {:>4} {} {}",
            position,
            display::themed(Color::Cyan, &[BOLD], &display::truncate(record.id.as_str(), 10)),
            display::truncate(norm.title(), 50),
        ));
        display::row(&display::themed(
            Color::Gray,
            &[],
            &format!("      {}", display::truncate(&tokens.join(" "), 64)),
        ));
    }
    display::section_bot();
    Ok(ExitCode::SUCCESS)
}
