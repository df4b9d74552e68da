// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers and their order.
//!
//! The tier a match falls in dominates everything else. An exact title match
//! outranks any substring match, which outranks any partial token overlap.

mod core;
pub mod ranking;

pub use self::core::*;
