// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where a corpus comes from and how its bytes become records.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::LoadError;
use crate::types::Record;

/// A static dataset to load the corpus from.
#[derive(Debug, Clone)]
pub enum CorpusSource {
    /// A file on disk. `.json` holds an array of records, `.jsonl` and
    /// `.ndjson` hold one record per line.
    Path(PathBuf),
    /// An inline JSON array of records.
    Json(String),
    /// Records already in memory (an embedded table).
    Records(Vec<Record>),
}

impl CorpusSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        CorpusSource::Path(path.into())
    }

    /// Short label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            CorpusSource::Path(_) => "file",
            CorpusSource::Json(_) => "json",
            CorpusSource::Records(_) => "records",
        }
    }

    /// Parse the source into raw records, in source order.
    ///
    /// Only structure is checked here. Blank fields and duplicate ids are the
    /// corpus's business.
    pub(crate) fn read_records(self) -> Result<Vec<Record>, LoadError> {
        match self {
            CorpusSource::Records(records) => Ok(records),
            CorpusSource::Json(text) => parse_json_array(&text),
            CorpusSource::Path(path) => read_file(&path),
        }
    }
}

impl fmt::Display for CorpusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusSource::Path(path) => write!(f, "{}", path.display()),
            CorpusSource::Json(text) => write!(f, "<inline json, {} bytes>", text.len()),
            CorpusSource::Records(records) => write!(f, "<{} records>", records.len()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    JsonArray,
    JsonLines,
}

fn detect_format(path: &Path) -> Option<FileFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "json" => Some(FileFormat::JsonArray),
        "jsonl" | "ndjson" => Some(FileFormat::JsonLines),
        _ => None,
    }
}

fn read_file(path: &Path) -> Result<Vec<Record>, LoadError> {
    let format = detect_format(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        FileFormat::JsonArray => parse_json_array(&text),
        FileFormat::JsonLines => parse_json_lines(&text),
    }
}

/// Parse a JSON array, reporting the position of the first bad record.
fn parse_json_array(text: &str) -> Result<Vec<Record>, LoadError> {
    let values: Vec<Value> = serde_json::from_str(text).map_err(|e| LoadError::Malformed {
        index: 0,
        message: format!("expected a JSON array of records: {}", e),
    })?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| LoadError::Malformed {
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Parse one record per non-blank line.
///
/// The reported index counts records, not lines, so it lines up with load
/// positions.
fn parse_json_lines(text: &str) -> Result<Vec<Record>, LoadError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| LoadError::Malformed {
                index,
                message: e.to_string(),
            })
        })
        .collect()
}
