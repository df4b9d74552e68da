//! Result-set properties over random corpora and queries.

use proptest::prelude::*;

use super::common::{assert_ranked, engine_with};
use topmatch::{compare_matches, score_record, NormalizedQuery, RankingEngine, Record, ScoredMatch};

/// Small vocabulary so random titles and queries actually overlap.
const VOCAB: &[&str] = &[
    "the", "matrix", "star", "wars", "night", "day", "dark", "blue", "red", "river", "spider",
    "man", "return", "king", "of",
];

fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(VOCAB).prop_map(str::to_string)
}

fn title_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..5).prop_map(|words| words.join(" "))
}

/// Titles with ids assigned by position, so ids never collide.
fn corpus_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(title_strategy(), 0..30).prop_map(|titles| {
        titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| Record::new(i as u64, title))
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Empty and whitespace queries
        Just("".to_string()),
        Just("   ".to_string()),
        Just("--!".to_string()),
        // One or two vocabulary words, with noisy casing and spacing
        word_strategy(),
        (word_strategy(), word_strategy()).prop_map(|(a, b)| format!("  {}   {} ", a.to_uppercase(), b)),
        // Fragments that only match inside words
        "[a-z]{1,4}",
    ]
}

fn limit_strategy() -> impl Strategy<Value = usize> {
    prop_oneof![Just(1), Just(5), Just(10), 1usize..=40]
}

/// Brute force: score everything, full sort, truncate.
fn reference_positions(engine: &RankingEngine, query: &str, limit: usize) -> Vec<usize> {
    let corpus = engine.corpus().unwrap();
    let q = NormalizedQuery::new(query);
    let mut all: Vec<ScoredMatch<'_>> = corpus
        .entries()
        .filter_map(|(position, record, norm)| {
            score_record(&q, norm).map(|(tier, score)| ScoredMatch {
                record,
                score,
                tier,
                position,
            })
        })
        .collect();
    all.sort_by(compare_matches);
    all.into_iter().take(limit).map(|m| m.position).collect()
}

fn positive_count(engine: &RankingEngine, query: &str) -> usize {
    let corpus = engine.corpus().unwrap();
    let q = NormalizedQuery::new(query);
    corpus
        .entries()
        .filter(|(_, _, norm)| score_record(&q, norm).is_some())
        .count()
}

proptest! {
    /// Property: empty or whitespace-only queries return nothing.
    #[test]
    fn prop_blank_query_is_empty(records in corpus_strategy(), pad in 0usize..6) {
        let engine = engine_with(records);
        let query = " ".repeat(pad);
        prop_assert!(engine.search(&query, 5).unwrap().is_empty());
    }

    /// Property: result count is bounded by the limit and by the number of
    /// records with a positive score.
    #[test]
    fn prop_results_bounded(
        records in corpus_strategy(),
        query in query_strategy(),
        limit in limit_strategy()
    ) {
        let engine = engine_with(records);
        let results = engine.search(&query, limit).unwrap();

        prop_assert!(results.len() <= limit);
        prop_assert!(results.len() <= positive_count(&engine, &query));
        prop_assert!(results.iter().all(|m| m.score > 0.0));
    }

    /// Property: adjacent results are in strict ranking order.
    #[test]
    fn prop_results_sorted(
        records in corpus_strategy(),
        query in query_strategy(),
        limit in limit_strategy()
    ) {
        let engine = engine_with(records);
        let results = engine.search(&query, limit).unwrap();
        assert_ranked(&results);

        for pair in results.as_slice().windows(2) {
            prop_assert!(pair[0].tier <= pair[1].tier);
            if pair[0].tier == pair[1].tier && pair[0].score == pair[1].score {
                prop_assert!(pair[0].position < pair[1].position);
            }
        }
    }

    /// Property: the engine agrees with a full sort of every scored record.
    #[test]
    fn prop_matches_reference_ranking(
        records in corpus_strategy(),
        query in query_strategy(),
        limit in limit_strategy()
    ) {
        let engine = engine_with(records);
        let got: Vec<usize> = engine
            .search(&query, limit)
            .unwrap()
            .iter()
            .map(|m| m.position)
            .collect();
        prop_assert_eq!(got, reference_positions(&engine, &query, limit));
    }

    /// Property: the same query twice gives byte-identical output.
    #[test]
    fn prop_search_idempotent(records in corpus_strategy(), query in query_strategy()) {
        let engine = engine_with(records);
        let first = serde_json::to_string(&engine.search(&query, 5).unwrap()).unwrap();
        let second = serde_json::to_string(&engine.search(&query, 5).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: case and spacing of the query don't change the result.
    #[test]
    fn prop_query_normalization_invariant(
        records in corpus_strategy(),
        words in prop::collection::vec(word_strategy(), 1..3)
    ) {
        let engine = engine_with(records);
        let plain = words.join(" ");
        let noisy = format!("  {}  ", words.join("   ").to_uppercase());

        let a: Vec<usize> = engine.search(&plain, 10).unwrap().iter().map(|m| m.position).collect();
        let b: Vec<usize> = engine.search(&noisy, 10).unwrap().iter().map(|m| m.position).collect();
        prop_assert_eq!(a, b);
    }

    /// Property: a record whose title equals the query is always first.
    #[test]
    fn prop_exact_title_ranks_first(records in corpus_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!records.is_empty());
        let target = pick.index(records.len());
        let query = records[target].title.clone();
        let engine = engine_with(records);

        let results = engine.search(&query, 5).unwrap();
        let top = results.get(0).unwrap();
        prop_assert_eq!(top.tier, topmatch::MatchTier::Exact);
        // The first record (in load order) with that exact title wins.
        prop_assert!(top.position <= target);
    }
}
