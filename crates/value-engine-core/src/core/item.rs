// crates/value-engine-core/src/core/item.rs
// ============================================================================
// Module: Value Engine Items
// Description: Value item records supplied by the external store.
// Purpose: Describe one automation opportunity as an archetype plus inputs.
// Dependencies: crate::core::{archetype, identifiers, inputs}, serde
// ============================================================================

//! ## Overview
//! A [`ValueItem`] is an immutable snapshot of one opportunity. When
//! `manual_annual_value` is set it replaces formula computation outright;
//! inputs are still kept for confidence reporting.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::archetype::Archetype;
use crate::core::archetype::ArchetypeTag;
use crate::core::archetype::Dimension;
use crate::core::identifiers::UseCaseId;
use crate::core::identifiers::ValueItemId;
use crate::core::inputs::InputMap;

// ============================================================================
// SECTION: Value Items
// ============================================================================

/// Dimension assigned to items whose archetype tag is unrecognized and that
/// carry no explicit dimension.
pub const FALLBACK_DIMENSION: Dimension = Dimension::Productivity;

/// One automation opportunity.
///
/// # Invariants
/// - `manual_annual_value`, when present, fully overrides formula output.
/// - `dimension` defaults from the archetype when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueItem {
    /// Store-assigned identifier.
    pub id: ValueItemId,
    /// Economic pattern tag.
    pub archetype: ArchetypeTag,
    /// Explicit dimension override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<Dimension>,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Named economic parameters.
    #[serde(default)]
    pub inputs: InputMap,
    /// Manual annual value replacing the formula result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_annual_value: Option<f64>,
    /// Display order within the calculation.
    #[serde(default)]
    pub order: i64,
    /// Use case this item contributes to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_case_id: Option<UseCaseId>,
}

impl ValueItem {
    /// Creates an item for a known archetype with no inputs.
    #[must_use]
    pub fn new(id: impl Into<String>, archetype: Archetype, name: impl Into<String>) -> Self {
        Self {
            id: ValueItemId::new(id),
            archetype: ArchetypeTag::Known(archetype),
            dimension: None,
            name: name.into(),
            inputs: InputMap::new(),
            manual_annual_value: None,
            order: 0,
            use_case_id: None,
        }
    }

    /// Replaces the input map.
    #[must_use]
    pub fn with_inputs(mut self, inputs: InputMap) -> Self {
        self.inputs = inputs;
        self
    }

    /// Sets a manual annual value override.
    #[must_use]
    pub const fn with_manual_value(mut self, value: f64) -> Self {
        self.manual_annual_value = Some(value);
        self
    }

    /// Links the item to a use case.
    #[must_use]
    pub fn with_use_case(mut self, use_case_id: impl Into<String>) -> Self {
        self.use_case_id = Some(UseCaseId::new(use_case_id));
        self
    }

    /// Returns the recognized archetype, if any.
    #[must_use]
    pub const fn known_archetype(&self) -> Option<Archetype> {
        self.archetype.archetype()
    }

    /// Returns the dimension used for rollups.
    #[must_use]
    pub fn effective_dimension(&self) -> Dimension {
        self.dimension
            .or_else(|| self.known_archetype().map(Archetype::dimension))
            .unwrap_or(FALLBACK_DIMENSION)
    }

    /// Returns true when the item's archetype has a run-count proxy.
    #[must_use]
    pub fn is_task_based(&self) -> bool {
        self.known_archetype().is_some_and(Archetype::is_task_based)
    }
}
