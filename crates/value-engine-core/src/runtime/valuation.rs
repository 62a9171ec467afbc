// crates/value-engine-core/src/runtime/valuation.rs
// ============================================================================
// Module: Value Engine Item Valuation
// Description: Resolve value items to annual values, traces, and confidence.
// Purpose: Apply manual overrides, dispatch formulas, and report trust levels.
// Dependencies: crate::core, crate::runtime::{confidence, display, formulas}
// ============================================================================

//! ## Overview
//! Valuation resolves one [`ValueItem`] to an [`ItemValuation`]. A manual
//! annual value short-circuits the formula entirely; otherwise the archetype
//! formula runs over the item's inputs. Confidence is always derived from the
//! inputs, even when the value itself was overridden. Unrecognized archetype
//! tags valuate to zero rather than failing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::ArchetypeTag;
use crate::core::ConfidenceTier;
use crate::core::Dimension;
use crate::core::ValueItem;
use crate::core::ValueItemId;
use crate::core::inputs::finite_or_zero;
use crate::runtime::confidence::aggregate_confidence;
use crate::runtime::display::format_currency;
use crate::runtime::formulas::annual_value;
use crate::runtime::formulas::formula_trace;

// ============================================================================
// SECTION: Valuation Results
// ============================================================================

/// Annual value of one item with its computation trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemValuation {
    /// Annual dollar value.
    pub annual_value: f64,
    /// Human-readable computation trace.
    pub formula: String,
    /// Weakest confidence tier among the item's inputs.
    pub confidence: ConfidenceTier,
}

/// Valuation annotated with the item it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuedItem {
    /// Item identifier.
    pub id: ValueItemId,
    /// Item display name.
    pub name: String,
    /// Archetype tag as stored.
    pub archetype: ArchetypeTag,
    /// Dimension used for rollups.
    pub dimension: Dimension,
    /// True when a manual override produced the value.
    pub manual_override: bool,
    /// Valuation result.
    #[serde(flatten)]
    pub valuation: ItemValuation,
}

// ============================================================================
// SECTION: Valuation
// ============================================================================

/// Resolves `item` to its annual value, trace, and confidence.
#[must_use]
pub fn valuate(item: &ValueItem) -> ItemValuation {
    let confidence = aggregate_confidence(&item.inputs);
    if let Some(manual) = item.manual_annual_value {
        let annual_value = finite_or_zero(manual);
        return ItemValuation {
            annual_value,
            formula: format!("Manual override: {}", format_currency(annual_value)),
            confidence,
        };
    }
    match item.known_archetype() {
        Some(archetype) => {
            let annual_value = annual_value(archetype, &item.inputs);
            ItemValuation {
                annual_value,
                formula: formula_trace(archetype, &item.inputs, annual_value),
                confidence,
            }
        }
        None => ItemValuation {
            annual_value: 0.0,
            formula: format_currency(0.0),
            confidence,
        },
    }
}

/// Returns the annual value of `item` without building a trace.
#[must_use]
pub fn item_annual_value(item: &ValueItem) -> f64 {
    match (item.manual_annual_value, item.known_archetype()) {
        (Some(manual), _) => finite_or_zero(manual),
        (None, Some(archetype)) => annual_value(archetype, &item.inputs),
        (None, None) => 0.0,
    }
}

/// Valuates every item, ordered by `order` then identifier.
#[must_use]
pub fn valuate_items(items: &[ValueItem]) -> Vec<ValuedItem> {
    let mut ordered: Vec<&ValueItem> = items.iter().collect();
    ordered.sort_by(|left, right| left.order.cmp(&right.order).then_with(|| left.id.cmp(&right.id)));
    ordered
        .into_iter()
        .map(|item| ValuedItem {
            id: item.id.clone(),
            name: item.name.clone(),
            archetype: item.archetype.clone(),
            dimension: item.effective_dimension(),
            manual_override: item.manual_annual_value.is_some(),
            valuation: valuate(item),
        })
        .collect()
}

/// Sums the annual value of all items.
#[must_use]
pub fn total_annual_value(items: &[ValueItem]) -> f64 {
    items.iter().map(item_annual_value).sum()
}
