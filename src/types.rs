// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: records, their normalized form, and ranked results.
//!
//! Records are owned by the [`Corpus`](crate::Corpus) for the life of the
//! process. Results borrow from it, so a [`ResultSet`] can never outlive the
//! corpus it was computed against and nothing gets cloned per query.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::utils::{join_tokens, tokenize};

/// Unique identifier of a record.
///
/// Source data uses both `"id": 1` and `"id": "1"`; they deserialize to the
/// same identifier, so the two spellings count as duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct RecordId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl From<RawId> for RecordId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Unsigned(n) => RecordId(n.to_string()),
            RawId::Signed(n) => RecordId(n.to_string()),
            RawId::Text(s) => RecordId(s),
        }
    }
}

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId(value)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId(value.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One catalog entry, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    /// Display title. Accepts `series_name` and `name` on input.
    #[serde(alias = "series_name", alias = "name")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            title: title.into(),
            overview: None,
            genres: Vec::new(),
        }
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }
}

/// Which optional fields feed the token set of a [`NormalizedRecord`].
///
/// The title is always searchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFields {
    pub overview: bool,
    pub genres: bool,
}

impl Default for SearchFields {
    fn default() -> Self {
        SearchFields {
            overview: true,
            genres: true,
        }
    }
}

impl SearchFields {
    pub fn title_only() -> Self {
        SearchFields {
            overview: false,
            genres: false,
        }
    }
}

/// Match-ready form of a [`Record`], computed once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    title: String,
    title_chars: usize,
    tokens: HashSet<String>,
}

impl NormalizedRecord {
    pub fn from_record(record: &Record, fields: SearchFields) -> Self {
        let title_tokens = tokenize(&record.title);
        let title = join_tokens(&title_tokens);
        let title_chars = title.chars().count();

        let mut tokens: HashSet<String> = title_tokens.into_iter().collect();
        if fields.overview {
            if let Some(overview) = &record.overview {
                tokens.extend(tokenize(overview));
            }
        }
        if fields.genres {
            for genre in &record.genres {
                tokens.extend(tokenize(genre));
            }
        }

        NormalizedRecord {
            title,
            title_chars,
            tokens,
        }
    }

    /// Normalized title string (tokens joined by single spaces).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Length of the normalized title in chars.
    pub fn title_chars(&self) -> usize {
        self.title_chars
    }

    /// Every token of every searchable field.
    pub fn tokens(&self) -> &HashSet<String> {
        &self.tokens
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}

/// Coarse ranking class. Smaller is better: `Exact < Substring < TokenOverlap`.
///
/// The derived `Ord` is the ranking order, so sorting ascending by tier puts
/// the strongest matches first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Normalized title equals the normalized query.
    Exact,
    /// Normalized title contains the normalized query.
    Substring,
    /// Some query tokens appear among the record's tokens.
    TokenOverlap,
}

impl MatchTier {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Substring => "substring",
            MatchTier::TokenOverlap => "token_overlap",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record paired with its relevance for one query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredMatch<'c> {
    pub record: &'c Record,
    /// Always > 0 for entries that make it into a [`ResultSet`].
    pub score: f64,
    pub tier: MatchTier,
    /// Load order of the record, used as the final tie-break.
    pub position: usize,
}

/// Ordered, length-bounded search results.
///
/// Entries are sorted by tier, then score descending, then load position.
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ResultSet<'c> {
    matches: Vec<ScoredMatch<'c>>,
}

impl<'c> ResultSet<'c> {
    pub(crate) fn from_sorted(matches: Vec<ScoredMatch<'c>>) -> Self {
        ResultSet { matches }
    }

    pub fn empty() -> Self {
        ResultSet {
            matches: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredMatch<'c>> {
        self.matches.iter()
    }

    pub fn as_slice(&self) -> &[ScoredMatch<'c>] {
        &self.matches
    }

    pub fn get(&self, index: usize) -> Option<&ScoredMatch<'c>> {
        self.matches.get(index)
    }

    /// Record ids in result order.
    pub fn ids(&self) -> Vec<&'c RecordId> {
        self.matches.iter().map(|m| &m.record.id).collect()
    }

    pub fn into_vec(self) -> Vec<ScoredMatch<'c>> {
        self.matches
    }
}

impl<'a, 'c> IntoIterator for &'a ResultSet<'c> {
    type Item = &'a ScoredMatch<'c>;
    type IntoIter = std::slice::Iter<'a, ScoredMatch<'c>>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
