// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.

use serde::Deserialize;

pub use crate::types::SearchFields;

/// Number of results returned when the caller does not pass a limit.
pub const DEFAULT_LIMIT: usize = 5;

/// Knobs for the ranking engine.
///
/// Deserializable from JSON; missing keys take their defaults:
///
/// ```
/// let config: topmatch::SearchConfig =
///     serde_json::from_str(r#"{"default_limit": 3}"#).unwrap();
/// assert_eq!(config.default_limit, 3);
/// assert_eq!(config.max_limit, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_limit: usize,
    /// Optional cap on any requested limit. Uncapped by default.
    pub max_limit: Option<usize>,
    /// Fields besides the title that count for token overlap.
    pub fields: SearchFields,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            default_limit: DEFAULT_LIMIT,
            max_limit: None,
            fields: SearchFields::default(),
        }
    }
}

impl SearchConfig {
    /// Clamp a requested limit to `max_limit`, when one is set.
    pub fn clamp_limit(&self, limit: usize) -> usize {
        match self.max_limit {
            Some(max) => limit.min(max),
            None => limit,
        }
    }
}
