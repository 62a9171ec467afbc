// crates/value-engine-core/src/runtime/dedup.rs
// ============================================================================
// Module: Value Engine Pattern Dedup
// Description: Two-pass deduplication of catalogue pattern references.
// Purpose: Keep one representative per pattern and per archetype/department overlap.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! Combining bundles can produce both exact repeats (the same pattern id)
//! and semantic overlaps (different patterns instantiating the same archetype
//! for the same department). Deduplication runs in two passes:
//!
//! 1. Exact: the first occurrence of each pattern id survives.
//! 2. Semantic: within each `(archetype, department)` group, the pattern with
//!    the highest estimated annual value survives; ties keep the earliest.
//!
//! Output groups appear in the order their first member appeared in the
//! input. Running the dedup on its own output is a no-op.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::PatternBundle;
use crate::core::PatternRef;

// ============================================================================
// SECTION: Dedup Result
// ============================================================================

/// Surviving patterns with dedup statistics.
///
/// # Invariants
/// - `total_after == patterns.len()`.
/// - `total_before == total_after + duplicates_removed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DedupResult {
    /// Surviving patterns in group first-appearance order.
    pub patterns: Vec<PatternRef>,
    /// Input length.
    pub total_before: usize,
    /// Patterns removed across both passes.
    pub duplicates_removed: usize,
    /// Output length.
    pub total_after: usize,
}

// ============================================================================
// SECTION: Dedup
// ============================================================================

/// Removes exact and semantic duplicates from `patterns`.
#[must_use]
pub fn deduplicate_patterns(patterns: &[PatternRef]) -> DedupResult {
    let mut seen_ids = BTreeSet::new();
    let unique: Vec<&PatternRef> =
        patterns.iter().filter(|pattern| seen_ids.insert(pattern.pattern_id.as_str())).collect();

    // Group slot per key, in first-appearance order.
    let mut slots: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    let mut winners: Vec<&PatternRef> = Vec::new();
    for pattern in unique {
        let key = (pattern.archetype.as_str(), pattern.pattern_id.department());
        match slots.get(&key) {
            Some(&slot) => {
                if pattern.estimated_annual_value > winners[slot].estimated_annual_value {
                    winners[slot] = pattern;
                }
            }
            None => {
                slots.insert(key, winners.len());
                winners.push(pattern);
            }
        }
    }

    let total_before = patterns.len();
    let total_after = winners.len();
    DedupResult {
        patterns: winners.into_iter().cloned().collect(),
        total_before,
        duplicates_removed: total_before - total_after,
        total_after,
    }
}

/// Flattens bundles in order and deduplicates the result.
#[must_use]
pub fn combine_bundles(bundles: &[PatternBundle]) -> DedupResult {
    let flattened: Vec<PatternRef> =
        bundles.iter().flat_map(|bundle| bundle.patterns.iter().cloned()).collect();
    deduplicate_patterns(&flattened)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
