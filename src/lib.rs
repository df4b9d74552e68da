// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deterministic top-N keyword matching over a fixed in-memory catalog.
//!
//! Load a small catalog of titled records once, then ask "which entries best
//! match this keyword?" as often as you like, from as many threads as you like.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌────────────────┐
//! │  corpus/     │────▶│  scoring/     │────▶│  search/       │
//! │ (load, dedup,│     │ (tiers, score,│     │ (RankingEngine,│
//! │  normalize)  │     │  compare)     │     │  top-N)        │
//! └──────────────┘     └───────────────┘     └────────────────┘
//!        │                     │                     │
//!        ▼                     ▼                     ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │   types.rs (Record, NormalizedRecord, ResultSet)          │
//! │   utils.rs (normalize, tokenize)  contracts.rs (checks)   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Ranking
//!
//! | Tier          | Condition                               | Score            |
//! |---------------|-----------------------------------------|------------------|
//! | Exact         | normalized title == normalized query    | 100.0            |
//! | Substring     | normalized title contains the query     | 10 + q/title len |
//! | Token overlap | some query tokens in title/overview/genres | matched / total |
//!
//! Ties go to the record loaded first, so the same query always returns the
//! same list.
//!
//! # Usage
//!
//! ```
//! use topmatch::{CorpusSource, RankingEngine, SearchConfig};
//!
//! let engine = RankingEngine::new(SearchConfig::default());
//! engine.load(CorpusSource::Json(r#"[
//!     {"id": 1, "title": "The Matrix"},
//!     {"id": 2, "title": "Matrix Reloaded"},
//!     {"id": 3, "title": "Inception"}
//! ]"#.to_string()))?;
//!
//! let results = engine.search("Matrix", 5)?;
//! assert_eq!(results.len(), 2);
//! assert_eq!(results.get(0).unwrap().record.title, "The Matrix");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod contracts;
pub mod corpus;
pub mod error;
pub mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;

pub use config::{SearchConfig, DEFAULT_LIMIT};
pub use corpus::{Corpus, CorpusSource};
pub use error::{EngineError, LoadError};
pub use scoring::ranking::compare_matches;
pub use scoring::{score_record, NormalizedQuery};
pub use search::{RankingEngine, Ready};
pub use types::{
    MatchTier, NormalizedRecord, Record, RecordId, ResultSet, ScoredMatch, SearchFields,
};
pub use utils::{normalize, tokenize};
