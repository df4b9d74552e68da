// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking engine: load once, search many times.

use std::sync::{Arc, OnceLock};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SearchConfig;
use crate::contracts::{check_result_set_bounded, check_result_set_ordered};
use crate::corpus::{Corpus, CorpusSource};
use crate::error::{EngineError, LoadError};
use crate::scoring::ranking::top_n;
use crate::scoring::{score_record, NormalizedQuery};
use crate::types::{ResultSet, ScoredMatch};

/// Below this many records the rayon fan-out costs more than it saves.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 4096;

/// Returned by a successful [`RankingEngine::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ready {
    pub records: usize,
}

/// Scores every record of a corpus against a query and keeps the best few.
///
/// The corpus sits behind a `OnceLock`: it is set exactly once and read
/// without locking afterwards, so the engine can be shared across threads
/// (`Arc<RankingEngine>`) and searched concurrently.
///
/// ```
/// use topmatch::{CorpusSource, RankingEngine, Record, SearchConfig};
///
/// let engine = RankingEngine::new(SearchConfig::default());
/// engine
///     .load(CorpusSource::Records(vec![
///         Record::new(1u64, "The Matrix"),
///         Record::new(2u64, "Matrix Reloaded"),
///         Record::new(3u64, "Inception"),
///     ]))
///     .unwrap();
///
/// let results = engine.top_matches("matrix").unwrap();
/// let ids: Vec<&str> = results.ids().into_iter().map(|id| id.as_str()).collect();
/// assert_eq!(ids, vec!["1", "2"]);
/// ```
#[derive(Debug, Default)]
pub struct RankingEngine {
    corpus: OnceLock<Arc<Corpus>>,
    config: SearchConfig,
}

impl RankingEngine {
    /// An engine with no corpus yet. Searching it fails until [`load`](Self::load) succeeds.
    pub fn new(config: SearchConfig) -> Self {
        RankingEngine {
            corpus: OnceLock::new(),
            config,
        }
    }

    /// A ready engine over an already loaded corpus.
    ///
    /// The searchable fields were fixed when the corpus was normalized, so
    /// they override `config.fields`.
    pub fn with_corpus(corpus: Arc<Corpus>, mut config: SearchConfig) -> Self {
        config.fields = corpus.fields();
        let engine = RankingEngine::new(config);
        // Fresh lock, cannot already be set.
        let _ = engine.corpus.set(corpus);
        engine
    }

    /// Load the corpus. Runs once; later calls fail with [`LoadError::AlreadyLoaded`].
    pub fn load(&self, source: CorpusSource) -> Result<Ready, LoadError> {
        if self.corpus.get().is_some() {
            return Err(LoadError::AlreadyLoaded);
        }
        let corpus = Corpus::load_with(source, self.config.fields)?;
        let records = corpus.len();
        self.corpus
            .set(Arc::new(corpus))
            .map_err(|_| LoadError::AlreadyLoaded)?;
        Ok(Ready { records })
    }

    pub fn is_loaded(&self) -> bool {
        self.corpus.get().is_some()
    }

    pub fn corpus(&self) -> Result<&Arc<Corpus>, EngineError> {
        self.corpus.get().ok_or(EngineError::NotLoaded)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Top matches using the configured default limit.
    pub fn top_matches(&self, query: &str) -> Result<ResultSet<'_>, EngineError> {
        self.search(query, self.config.default_limit)
    }

    /// Rank the corpus against `query` and keep at most `limit` matches.
    ///
    /// Never fails on the query itself: an empty or punctuation-only query
    /// yields an empty result set. A limit of 0 yields an empty result set,
    /// and `limit` is only clamped when the config sets `max_limit`.
    pub fn search(&self, query: &str, limit: usize) -> Result<ResultSet<'_>, EngineError> {
        let corpus = self.corpus()?;
        let limit = self.config.clamp_limit(limit);
        let query = NormalizedQuery::new(query);

        if query.is_empty() || limit == 0 {
            tracing::debug!(query = query.text(), limit, "nothing to match");
            return Ok(ResultSet::empty());
        }

        let candidates = score_corpus(corpus, &query);
        let candidate_count = candidates.len();
        let matches = top_n(candidates, limit);

        check_result_set_bounded(&matches, limit);
        check_result_set_ordered(&matches);

        tracing::debug!(
            query = query.text(),
            tokens = query.tokens().len(),
            candidates = candidate_count,
            returned = matches.len(),
            "search complete"
        );

        Ok(ResultSet::from_sorted(matches))
    }
}

/// Score every record, dropping the ones with no overlap.
fn score_corpus<'c>(corpus: &'c Corpus, query: &NormalizedQuery) -> Vec<ScoredMatch<'c>> {
    let score_one = |position: usize| {
        let norm = &corpus.normalized()[position];
        score_record(query, norm).map(|(tier, score)| ScoredMatch {
            record: &corpus.records()[position],
            score,
            tier,
            position,
        })
    };

    #[cfg(feature = "parallel")]
    {
        if corpus.len() >= PARALLEL_THRESHOLD {
            return (0..corpus.len())
                .into_par_iter()
                .filter_map(score_one)
                .collect();
        }
    }

    (0..corpus.len()).filter_map(score_one).collect()
}
