// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where a keyword becomes a ranked list.
//!
//! The engine normalizes the query the same way the corpus normalized its
//! records, scores every record, and keeps the best `limit`. The corpus is
//! small enough to scan in full; nothing here depends on that, so an index
//! could replace the scan without changing the signatures.

mod engine;

pub use engine::{RankingEngine, Ready};
