// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by the corpus loader and the query path.
//!
//! Records are normalized once at load time and queries on every search, so
//! both sides must go through exactly these functions. If they ever drift
//! apart, "Matrix" stops matching "matrix" and nobody notices until a user does.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Split text into lowercase alphanumeric tokens.
///
/// Any char that is not alphanumeric is a boundary, so punctuation and
/// whitespace behave the same way:
/// - "The Matrix" → ["the", "matrix"]
/// - "Spider-Man: No Way Home" → ["spider", "man", "no", "way", "home"]
/// - "café" → ["cafe"] (with the unicode-normalization feature)
///
/// Returns an empty vector for empty, whitespace-only, or punctuation-only input.
pub fn tokenize(value: &str) -> Vec<String> {
    fold_case(value)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a string for comparison: the tokens joined by single spaces.
///
/// `"  The   MATRIX! "` and `"the matrix"` normalize to the same string, which
/// is what exact and substring matching compare.
pub fn normalize(value: &str) -> String {
    tokenize(value).join(" ")
}

/// Normalized form of an already tokenized value.
pub fn join_tokens(tokens: &[String]) -> String {
    tokens.join(" ")
}

/// Lowercase with Latin diacritics stripped.
///
/// NFD, drop the combining marks, then NFC so marks outside those ranges
/// (Arabic madda, Indic vowel signs) recompose with their base letter.
#[cfg(feature = "unicode-normalization")]
fn fold_case(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase only. Assumes input is ASCII or pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Combining marks (Unicode category Mn) left over after NFD decomposition.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
