//! Inputs that must not error: empty queries, empty corpora, odd scripts.

use topmatch::{CorpusSource, EngineError, RankingEngine, Record, SearchConfig};

use super::common::{engine_with, fixture_engine, ids, make_record, matrix_corpus};

#[test]
fn test_empty_query_returns_empty_set() {
    let engine = fixture_engine();
    assert!(engine.search("", 5).unwrap().is_empty());
}

#[test]
fn test_whitespace_query_returns_empty_set() {
    let engine = engine_with(matrix_corpus());
    assert!(engine.search("   ", 5).unwrap().is_empty());
    assert!(engine.search("\t\n", 5).unwrap().is_empty());
}

#[test]
fn test_punctuation_only_query_returns_empty_set() {
    let engine = fixture_engine();
    assert!(engine.search("?!-...", 5).unwrap().is_empty());
}

#[test]
fn test_query_with_no_matches() {
    let engine = fixture_engine();
    assert!(engine.search("zyzzyva", 5).unwrap().is_empty());
}

#[test]
fn test_query_normalized_like_records() {
    let engine = engine_with(matrix_corpus());
    assert_eq!(
        ids(&engine.search("  THE    matrix  ", 5).unwrap()),
        ids(&engine.search("the matrix", 5).unwrap())
    );
    let results = engine.search("  THE    matrix  ", 5).unwrap();
    assert_eq!(results.get(0).unwrap().record.id.as_str(), "1");
    assert_eq!(results.get(0).unwrap().tier, topmatch::MatchTier::Exact);
}

#[test]
fn test_empty_corpus_returns_empty_sets() {
    let engine = engine_with(vec![]);
    for query in ["matrix", "", "a b c"] {
        assert!(engine.search(query, 5).unwrap().is_empty());
    }
}

#[test]
fn test_search_before_load_is_an_engine_error() {
    let engine = RankingEngine::new(SearchConfig::default());
    assert_eq!(engine.search("", 5).unwrap_err(), EngineError::NotLoaded);
    assert_eq!(engine.top_matches("matrix").unwrap_err(), EngineError::NotLoaded);
}

#[test]
fn test_arabic_titles() {
    let engine = engine_with(vec![
        Record::new(1u64, "آخر الليل"),
        Record::new(2u64, "الليل"),
        make_record(3, "Night Shift"),
    ]);
    let results = engine.search("آخر", 5).unwrap();
    assert_eq!(ids(&results), vec!["1"]);

    let results = engine.search("الليل", 5).unwrap();
    assert_eq!(ids(&results), vec!["2", "1"]);
}

#[test]
fn test_title_only_config_ignores_overview() {
    let engine = RankingEngine::new(SearchConfig {
        fields: topmatch::SearchFields::title_only(),
        ..SearchConfig::default()
    });
    engine
        .load(CorpusSource::path(super::common::fixtures_json()))
        .unwrap();

    assert!(engine.search("replicant", 5).unwrap().is_empty());
    assert_eq!(ids(&engine.search("heat", 5).unwrap()), vec!["4"]);
}

#[test]
fn test_very_long_query() {
    let engine = fixture_engine();
    let query = "matrix ".repeat(10_000);
    let results = engine.search(&query, 5).unwrap();
    // Every token is "matrix", so both Matrix titles fully overlap.
    assert_eq!(ids(&results), vec!["1", "2"]);
    assert!(results.iter().all(|m| m.score == 1.0));
}
