// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the topmatch command-line interface.
//!
//! Two subcommands: `search` to rank a corpus against a keyword, and
//! `inspect` to see how each record was normalized.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "topmatch",
    about = "Rank catalog entries against a keyword",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options that shape how the corpus is loaded and searched.
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// JSON file with a SearchConfig (default_limit, max_limit, fields)
    #[arg(long, env = "TOPMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Match on titles only, ignoring overview and genres
    #[arg(long)]
    pub title_only: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus file and display the top matches
    Search {
        /// Path to the corpus (.json array, or .jsonl/.ndjson lines)
        corpus: PathBuf,

        /// Keyword to match
        keyword: Option<String>,

        /// Maximum number of results to return
        #[arg(short, long, env = "TOPMATCH_LIMIT")]
        limit: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Show every record with its normalized title and tokens
    Inspect {
        /// Path to the corpus (.json array, or .jsonl/.ndjson lines)
        corpus: PathBuf,

        #[command(flatten)]
        engine: EngineArgs,
    },
}
