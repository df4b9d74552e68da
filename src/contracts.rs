// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for ranked results.
//!
//! Debug-mode assertions over what every [`ResultSet`](crate::ResultSet) must
//! satisfy before it leaves the engine. They compile to nothing in release
//! builds.
//!
//! | Contract                     | Property                                        |
//! |------------------------------|-------------------------------------------------|
//! | tier band assertions (const) | Exact > any Substring > any TokenOverlap         |
//! | `check_result_set_bounded`   | `len <= limit`, every score > 0                  |
//! | `check_result_set_ordered`   | adjacent entries respect tier, score, position   |

use std::cmp::Ordering;

use crate::scoring::ranking::compare_matches;
use crate::scoring::{
    EXACT_SCORE, SUBSTRING_BASE_SCORE, SUBSTRING_MAX_BONUS, TOKEN_OVERLAP_MAX_SCORE,
};
use crate::types::ScoredMatch;

// Tier bands must stay disjoint. If a constant change breaks this, the crate
// stops building.
const _: () = {
    assert!(EXACT_SCORE > SUBSTRING_BASE_SCORE + SUBSTRING_MAX_BONUS);
    assert!(SUBSTRING_BASE_SCORE > TOKEN_OVERLAP_MAX_SCORE);
    assert!(TOKEN_OVERLAP_MAX_SCORE > 0.0);
};

/// Check size and positivity of a result list.
///
/// # Panics (debug builds only)
/// Panics if there are more than `limit` entries or any score is not > 0.
#[inline]
pub fn check_result_set_bounded(matches: &[ScoredMatch<'_>], limit: usize) {
    debug_assert!(
        matches.len() <= limit,
        "Contract violation: result set has {} entries, limit is {}",
        matches.len(),
        limit
    );
    for (i, m) in matches.iter().enumerate() {
        debug_assert!(
            m.score > 0.0,
            "Contract violation: result[{}] (id {}) has non-positive score {}",
            i,
            m.record.id,
            m.score
        );
    }
}

/// Check that adjacent entries are in strict ranking order.
///
/// # Panics (debug builds only)
/// Panics on the first pair that is out of order or duplicated.
#[inline]
pub fn check_result_set_ordered(matches: &[ScoredMatch<'_>]) {
    for (i, pair) in matches.windows(2).enumerate() {
        debug_assert!(
            compare_matches(&pair[0], &pair[1]) == Ordering::Less,
            "Contract violation: result[{}] ({} {} @{}) does not rank before result[{}] ({} {} @{})",
            i,
            pair[0].tier,
            pair[0].score,
            pair[0].position,
            i + 1,
            pair[1].tier,
            pair[1].score,
            pair[1].position
        );
    }
}
