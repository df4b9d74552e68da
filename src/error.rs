// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading a corpus and querying it.
//!
//! A [`LoadError`] means the dataset is bad and the process should not start
//! serving. An [`EngineError`] means the caller queried before loading.
//! Empty queries, queries with no hits and empty corpora are not errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::types::RecordId;

/// The corpus could not be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// The source file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// A record failed to parse or is missing a required field.
    ///
    /// `index` is the zero-based record position (blank JSON lines don't
    /// count), or 0 when the whole document failed to parse.
    Malformed { index: usize, message: String },
    /// A required field is present but blank.
    EmptyField { index: usize, field: &'static str },
    /// Two records share an identifier.
    DuplicateId {
        id: RecordId,
        first: usize,
        second: usize,
    },
    /// The file extension is not a format the loader understands.
    UnsupportedFormat { path: PathBuf },
    /// The engine already holds a corpus; it loads exactly once.
    AlreadyLoaded,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "cannot read corpus {}: {}", path.display(), source)
            }
            LoadError::Malformed { index, message } => {
                write!(f, "malformed record at {}: {}", index, message)
            }
            LoadError::EmptyField { index, field } => {
                write!(f, "record at {} has an empty '{}'", index, field)
            }
            LoadError::DuplicateId { id, first, second } => {
                write!(
                    f,
                    "duplicate id '{}' at records {} and {}",
                    id, first, second
                )
            }
            LoadError::UnsupportedFormat { path } => {
                write!(
                    f,
                    "unsupported corpus format {} (expected .json, .jsonl or .ndjson)",
                    path.display()
                )
            }
            LoadError::AlreadyLoaded => write!(f, "corpus is already loaded"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// The engine was used out of order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// `search` was called before a corpus was loaded.
    NotLoaded,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NotLoaded => write!(f, "search called before the corpus was loaded"),
        }
    }
}

impl std::error::Error for EngineError {}
