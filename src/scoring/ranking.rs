// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored matches get sorted.
//!
//! Tiers are impermeable. An exact match beats every substring match, and a
//! substring match beats every token overlap, whatever the numbers say.
//! Within a tier the score decides, and equal scores fall back to load order.
//!
//! Two titles of the same length hit by the same query get bit-identical
//! substring scores, so the load-order tie-break is what keeps repeated
//! queries returning the same list.

use crate::types::ScoredMatch;
use std::cmp::Ordering;

/// Compare two matches for ranking. `Less` means `a` ranks first.
///
/// Sort order:
/// 1. **Tier** - Exact > Substring > TokenOverlap
/// 2. **Score** - descending, within the same tier
/// 3. **Position** - ascending load order
///
/// Positions are unique within a corpus, so this is a total order and
/// unstable sorts are safe.
pub fn compare_matches(a: &ScoredMatch<'_>, b: &ScoredMatch<'_>) -> Ordering {
    a.tier
        .cmp(&b.tier)
        .then_with(|| b.score.total_cmp(&a.score))
        .then_with(|| a.position.cmp(&b.position))
}

/// Keep the best `limit` matches, in ranking order.
///
/// Partitions around the cut first so only the kept head gets fully sorted.
pub fn top_n<'c>(mut matches: Vec<ScoredMatch<'c>>, limit: usize) -> Vec<ScoredMatch<'c>> {
    if limit == 0 {
        return Vec::new();
    }
    if matches.len() > limit {
        matches.select_nth_unstable_by(limit - 1, compare_matches);
        matches.truncate(limit);
    }
    matches.sort_unstable_by(compare_matches);
    matches
}
