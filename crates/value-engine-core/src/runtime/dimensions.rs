// crates/value-engine-core/src/runtime/dimensions.rs
// ============================================================================
// Module: Value Engine Dimension Rollups
// Description: Per-dimension and per-confidence subtotals with percentage shares.
// Purpose: Aggregate item values for comparison and visualization.
// Dependencies: crate::core, crate::runtime::{confidence, valuation}, serde
// ============================================================================

//! ## Overview
//! Rollups group items by business [`Dimension`] (and, separately, by
//! aggregated [`ConfidenceTier`]). Every dimension is reported, zero-filled
//! when no item maps to it. Percentages are shares of the grand total and are
//! `0` when the grand total is `0`. The breakdown view drops empty dimensions
//! and sorts by value; it never changes the grand total.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::ConfidenceTier;
use crate::core::Dimension;
use crate::core::ValueItem;
use crate::runtime::confidence::aggregate_confidence;
use crate::runtime::valuation::item_annual_value;

// ============================================================================
// SECTION: Rollup Types
// ============================================================================

/// Subtotal for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionTotal {
    /// Dimension being summarized.
    pub dimension: Dimension,
    /// Human-readable dimension label.
    pub label: String,
    /// Sum of annual values.
    pub total: f64,
    /// Number of items in the dimension.
    pub item_count: usize,
    /// Share of the grand total, in percent.
    pub percentage: f64,
}

/// Subtotal for one aggregated confidence tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceTotal {
    /// Confidence tier being summarized.
    pub confidence: ConfidenceTier,
    /// Sum of annual values.
    pub total: f64,
    /// Number of items whose aggregate confidence is this tier.
    pub item_count: usize,
    /// Share of the grand total, in percent.
    pub percentage: f64,
}

// ============================================================================
// SECTION: Dimension Rollups
// ============================================================================

/// Returns subtotals for all five dimensions in [`Dimension::ALL`] order.
#[must_use]
pub fn dimension_totals(items: &[ValueItem]) -> Vec<DimensionTotal> {
    let mut totals = [0.0_f64; Dimension::ALL.len()];
    let mut counts = [0_usize; Dimension::ALL.len()];
    for item in items {
        let slot = dimension_slot(item.effective_dimension());
        totals[slot] += item_annual_value(item);
        counts[slot] += 1;
    }
    let grand_total: f64 = totals.iter().sum();
    Dimension::ALL
        .into_iter()
        .enumerate()
        .map(|(slot, dimension)| DimensionTotal {
            dimension,
            label: dimension.label().to_string(),
            total: totals[slot],
            item_count: counts[slot],
            percentage: share_of(totals[slot], grand_total),
        })
        .collect()
}

/// Returns non-empty dimensions sorted by descending total.
#[must_use]
pub fn dimension_breakdown(items: &[ValueItem]) -> Vec<DimensionTotal> {
    let mut breakdown: Vec<DimensionTotal> =
        dimension_totals(items).into_iter().filter(|entry| entry.total > 0.0).collect();
    breakdown.sort_by(|left, right| right.total.total_cmp(&left.total));
    breakdown
}

/// Returns the grand total across all items, including zero-valued ones.
#[must_use]
pub fn grand_total(items: &[ValueItem]) -> f64 {
    dimension_totals(items).iter().map(|entry| entry.total).sum()
}

// ============================================================================
// SECTION: Confidence Rollups
// ============================================================================

/// Returns subtotals for all three confidence tiers in [`ConfidenceTier::ALL`] order.
#[must_use]
pub fn confidence_totals(items: &[ValueItem]) -> Vec<ConfidenceTotal> {
    let mut totals = [0.0_f64; ConfidenceTier::ALL.len()];
    let mut counts = [0_usize; ConfidenceTier::ALL.len()];
    for item in items {
        let slot = usize::from(aggregate_confidence(&item.inputs).priority());
        totals[slot] += item_annual_value(item);
        counts[slot] += 1;
    }
    let grand_total: f64 = totals.iter().sum();
    ConfidenceTier::ALL
        .into_iter()
        .enumerate()
        .map(|(slot, confidence)| ConfidenceTotal {
            confidence,
            total: totals[slot],
            item_count: counts[slot],
            percentage: share_of(totals[slot], grand_total),
        })
        .collect()
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns `part / whole * 100`, or `0` when `whole` is zero.
#[must_use]
pub fn share_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 { 0.0 } else { part / whole * 100.0 }
}

/// Maps a dimension to its rollup slot.
const fn dimension_slot(dimension: Dimension) -> usize {
    match dimension {
        Dimension::RevenueImpact => 0,
        Dimension::SpeedCycleTime => 1,
        Dimension::Productivity => 2,
        Dimension::CostAvoidance => 3,
        Dimension::RiskQuality => 4,
    }
}
