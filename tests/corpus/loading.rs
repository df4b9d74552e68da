//! Loading corpora from files and inline sources.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use topmatch::{Corpus, CorpusSource, LoadError, RankingEngine, SearchConfig};

use super::common::{fixtures_json, fixtures_jsonl};

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write corpus file");
    path
}

#[test]
fn test_load_fixture_json() {
    let corpus = Corpus::load(CorpusSource::path(fixtures_json())).unwrap();
    assert_eq!(corpus.len(), 12);
    assert_eq!(corpus.get(0).unwrap().title, "The Matrix");
}

#[test]
fn test_load_fixture_jsonl_matches_json() {
    let a = Corpus::load(CorpusSource::path(fixtures_json())).unwrap();
    let b = Corpus::load(CorpusSource::path(fixtures_jsonl())).unwrap();
    let a_records: Vec<_> = a.all().collect();
    let b_records: Vec<_> = b.all().collect();
    assert_eq!(a_records, b_records);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Corpus::load(CorpusSource::path(dir.path().join("absent.json"))).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }), "got {:?}", err);
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "movies.csv", "id,title\n1,Heat\n");
    let err = Corpus::load(CorpusSource::path(path)).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedFormat { .. }), "got {:?}", err);
}

#[test]
fn test_malformed_json_document() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "movies.json", "[{\"id\": 1, \"title\": \"Heat\"");
    let err = Corpus::load(CorpusSource::path(path)).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { index: 0, .. }), "got {:?}", err);
}

#[test]
fn test_record_missing_title() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "movies.jsonl",
        "{\"id\": 1, \"title\": \"Heat\"}\n{\"id\": 2, \"year\": 1998}\n",
    );
    let err = Corpus::load(CorpusSource::path(path)).unwrap_err();
    match err {
        LoadError::Malformed { index, message } => {
            assert_eq!(index, 1);
            assert!(message.contains("title"), "message: {}", message);
        }
        other => panic!("expected Malformed, got {:?}", other),
    }
}

#[test]
fn test_record_missing_id() {
    let err = Corpus::load(CorpusSource::Json(r#"[{"title": "Heat"}]"#.to_string())).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { index: 0, .. }), "got {:?}", err);
}

#[test]
fn test_duplicate_ids_in_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "movies.json",
        r#"[{"id": 1, "title": "Heat"}, {"id": 2, "title": "Ronin"}, {"id": 1, "title": "Thief"}]"#,
    );
    let err = Corpus::load(CorpusSource::path(path)).unwrap_err();
    match err {
        LoadError::DuplicateId { id, first, second } => {
            assert_eq!(id.as_str(), "1");
            assert_eq!((first, second), (0, 2));
        }
        other => panic!("expected DuplicateId, got {:?}", other),
    }
}

#[test]
fn test_empty_files_are_valid() {
    let dir = TempDir::new().unwrap();
    let json = write(dir.path(), "empty.json", "[]");
    let jsonl = write(dir.path(), "empty.jsonl", "\n\n");

    for path in [json, jsonl] {
        let engine = RankingEngine::new(SearchConfig::default());
        let ready = engine.load(CorpusSource::path(path)).unwrap();
        assert_eq!(ready.records, 0);
        assert!(engine.search("matrix", 5).unwrap().is_empty());
        assert!(engine.search("", 5).unwrap().is_empty());
    }
}

#[test]
fn test_load_error_messages_name_the_problem() {
    let err = Corpus::load(CorpusSource::Json(
        r#"[{"id": "a", "title": "Heat"}, {"id": "a", "title": "Ronin"}]"#.to_string(),
    ))
    .unwrap_err();
    assert_eq!(err.to_string(), "duplicate id 'a' at records 0 and 1");
}
