// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Throws arbitrary byte sequences at the ranking engine to verify it never
//! panics and never returns a malformed result set.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::OnceLock;
use topmatch::{compare_matches, CorpusSource, RankingEngine, SearchConfig, DEFAULT_LIMIT};

fuzz_target!(|query: &[u8]| {
    // Fuzz runs start in fuzz/, so try the fixture from both places.
    static ENGINE: OnceLock<RankingEngine> = OnceLock::new();
    let engine = ENGINE.get_or_init(|| {
        let paths = [
            "data/fixtures/movies.json",
            "../data/fixtures/movies.json",
        ];
        let path = paths
            .iter()
            .find(|p| std::path::Path::new(p).exists())
            .expect("Failed to find movies.json fixture from any path");
        let engine = RankingEngine::new(SearchConfig::default());
        engine
            .load(CorpusSource::path(*path))
            .expect("Failed to load fixture");
        engine
    });

    let query = String::from_utf8_lossy(query);
    // Cap query length to avoid timeout
    let query: String = query.chars().take(200).collect();

    // search() never fails on a loaded engine
    let results = engine.top_matches(&query).expect("engine is loaded");

    assert!(
        results.len() <= DEFAULT_LIMIT,
        "Got {} results, expected at most {}",
        results.len(),
        DEFAULT_LIMIT
    );

    for m in &results {
        assert!(m.score > 0.0, "zero score for {} in results", m.record.id);
        assert!(m.score.is_finite(), "non-finite score {}", m.score);
    }

    for pair in results.as_slice().windows(2) {
        assert_eq!(
            compare_matches(&pair[0], &pair[1]),
            Ordering::Less,
            "Results out of order: ({:?}, {}, {}) before ({:?}, {}, {})",
            pair[0].tier,
            pair[0].score,
            pair[0].position,
            pair[1].tier,
            pair[1].score,
            pair[1].position
        );
    }

    let mut seen = HashSet::new();
    for m in &results {
        assert!(seen.insert(m.position), "Duplicate record {} in results", m.record.id);
    }

    if query.trim().is_empty() {
        assert!(results.is_empty(), "Blank query returned {} results", results.len());
    }
});
