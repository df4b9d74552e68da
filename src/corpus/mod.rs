// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus store: the fixed set of records, normalized once.
//!
//! Loading validates every record, rejects duplicate ids, and computes the
//! [`NormalizedRecord`] for each entry. After that the corpus is read-only,
//! so any number of threads can search it without locking.

mod source;

pub use source::CorpusSource;

use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::LoadError;
use crate::types::{NormalizedRecord, Record, RecordId, SearchFields};

/// The loaded, immutable collection of records.
///
/// Records keep their source order; a record's index is its load position.
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<Record>,
    normalized: Vec<NormalizedRecord>,
    fields: SearchFields,
}

impl Corpus {
    /// Load a corpus with every searchable field enabled.
    pub fn load(source: CorpusSource) -> Result<Corpus, LoadError> {
        Corpus::load_with(source, SearchFields::default())
    }

    /// Load a corpus, choosing which fields feed token overlap.
    pub fn load_with(source: CorpusSource, fields: SearchFields) -> Result<Corpus, LoadError> {
        let kind = source.kind();
        let described = source.to_string();

        let records = source.read_records().inspect_err(|e| {
            tracing::warn!(source = %described, error = %e, "corpus rejected");
        })?;
        validate(&records).inspect_err(|e| {
            tracing::warn!(source = %described, error = %e, "corpus rejected");
        })?;

        let normalized = normalize_all(&records, fields);
        tracing::info!(
            source = %described,
            kind,
            records = records.len(),
            "corpus loaded"
        );

        Ok(Corpus {
            records,
            normalized,
            fields,
        })
    }

    /// Fresh traversal over every record in load order.
    pub fn all(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter()
    }

    /// `(position, record, normalized)` triples in load order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Record, &NormalizedRecord)> + '_ {
        self.records
            .iter()
            .zip(self.normalized.iter())
            .enumerate()
            .map(|(position, (record, norm))| (position, record, norm))
    }

    pub(crate) fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn normalized(&self) -> &[NormalizedRecord] {
        &self.normalized
    }

    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    pub fn normalized_at(&self, position: usize) -> Option<&NormalizedRecord> {
        self.normalized.get(position)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn fields(&self) -> SearchFields {
        self.fields
    }
}

/// Reject blank ids, blank titles, and duplicate ids.
fn validate(records: &[Record]) -> Result<(), LoadError> {
    let mut seen: HashMap<&RecordId, usize> = HashMap::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if record.id.as_str().trim().is_empty() {
            return Err(LoadError::EmptyField { index, field: "id" });
        }
        if record.title.trim().is_empty() {
            return Err(LoadError::EmptyField {
                index,
                field: "title",
            });
        }
        if let Some(&first) = seen.get(&record.id) {
            return Err(LoadError::DuplicateId {
                id: record.id.clone(),
                first,
                second: index,
            });
        }
        seen.insert(&record.id, index);
    }

    Ok(())
}

#[cfg(feature = "parallel")]
fn normalize_all(records: &[Record], fields: SearchFields) -> Vec<NormalizedRecord> {
    records
        .par_iter()
        .map(|record| NormalizedRecord::from_record(record, fields))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn normalize_all(records: &[Record], fields: SearchFields) -> Vec<NormalizedRecord> {
    records
        .iter()
        .map(|record| NormalizedRecord::from_record(record, fields))
        .collect()
}
