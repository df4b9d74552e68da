// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind match scores.
//!
//! Every record lands in one tier, and each tier owns a disjoint score band:
//!
//! ```text
//! Exact        100.0
//! Substring    (10.0, 11.0)   10 + len(query) / len(title)
//! TokenOverlap (0.0, 1.0]     matched tokens / query tokens
//! ```
//!
//! Because the bands don't overlap, sorting by score alone would give the
//! same order as sorting by tier. The ranking still compares tiers first so
//! the constants can move without silently reordering results.
//!
//! # Constants
//!
//! | Constant               | Value | Constraint                                  |
//! |------------------------|-------|---------------------------------------------|
//! | `EXACT_SCORE`          | 100.0 | > `SUBSTRING_BASE_SCORE + SUBSTRING_MAX_BONUS` |
//! | `SUBSTRING_BASE_SCORE` | 10.0  | > `TOKEN_OVERLAP_MAX_SCORE`                 |
//! | `SUBSTRING_MAX_BONUS`  | 1.0   | scales the length ratio                     |
//! | `TOKEN_OVERLAP_MAX_SCORE` | 1.0 | all query tokens present                   |
//!
//! The constraints are asserted at compile time in `contracts.rs`.

use crate::types::{MatchTier, NormalizedRecord};

/// Score for a title that equals the query after normalization.
pub const EXACT_SCORE: f64 = 100.0;

/// Floor of the substring band.
pub const SUBSTRING_BASE_SCORE: f64 = 10.0;

/// Added to the substring floor, scaled by `len(query) / len(title)`.
pub const SUBSTRING_MAX_BONUS: f64 = 1.0;

/// Token overlap when every query token is present.
pub const TOKEN_OVERLAP_MAX_SCORE: f64 = 1.0;

/// A query after normalization, ready to score against many records.
///
/// Built once per search so per-record scoring does no allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    text: String,
    chars: usize,
    tokens: Vec<String>,
}

impl NormalizedQuery {
    pub fn new(raw: &str) -> Self {
        let tokens = crate::utils::tokenize(raw);
        let text = crate::utils::join_tokens(&tokens);
        let chars = text.chars().count();
        NormalizedQuery {
            text,
            chars,
            tokens,
        }
    }

    /// True when normalization left nothing to match (empty, whitespace,
    /// or punctuation only).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Score one record against a query.
///
/// Returns `None` when there is no lexical overlap at all (score 0); such
/// records never enter a result set.
pub fn score_record(query: &NormalizedQuery, record: &NormalizedRecord) -> Option<(MatchTier, f64)> {
    if query.is_empty() {
        return None;
    }

    if record.title() == query.text {
        return Some((MatchTier::Exact, EXACT_SCORE));
    }

    if record.title().contains(query.text.as_str()) {
        return Some((
            MatchTier::Substring,
            substring_score(query.chars, record.title_chars()),
        ));
    }

    let matched = query
        .tokens
        .iter()
        .filter(|token| record.contains_token(token))
        .count();
    if matched == 0 {
        return None;
    }

    Some((
        MatchTier::TokenOverlap,
        token_overlap_score(matched, query.tokens.len()),
    ))
}

/// Substring band: shorter titles that the query covers more of score higher.
///
/// `query_chars < title_chars` for a proper substring, so the result stays
/// strictly below `SUBSTRING_BASE_SCORE + SUBSTRING_MAX_BONUS`.
#[inline]
pub fn substring_score(query_chars: usize, title_chars: usize) -> f64 {
    if title_chars == 0 {
        return SUBSTRING_BASE_SCORE;
    }
    let ratio = query_chars as f64 / title_chars as f64;
    SUBSTRING_BASE_SCORE + SUBSTRING_MAX_BONUS * ratio.min(1.0)
}

/// Overlap band: fraction of query tokens found in the record.
#[inline]
pub fn token_overlap_score(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    TOKEN_OVERLAP_MAX_SCORE * matched as f64 / total as f64
}
