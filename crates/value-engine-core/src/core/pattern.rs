// crates/value-engine-core/src/core/pattern.rs
// ============================================================================
// Module: Value Engine Pattern References
// Description: Template pattern references and bundles.
// Purpose: Describe pre-packaged archetype configurations prior to dedup.
// Dependencies: crate::core::{archetype, identifiers}, serde
// ============================================================================

//! ## Overview
//! A pattern is a named archetype configuration in the template catalogue.
//! Bundles group patterns for a team or workflow; combining bundles yields a
//! flat list of [`PatternRef`] values that may repeat patterns outright or
//! overlap semantically.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::archetype::ArchetypeTag;
use crate::core::identifiers::PatternId;

// ============================================================================
// SECTION: Pattern Types
// ============================================================================

/// Reference to a catalogue pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRef {
    /// Catalogue identifier (`<department>-<slug>`).
    pub pattern_id: PatternId,
    /// Archetype the pattern instantiates.
    pub archetype: ArchetypeTag,
    /// Estimated annual value of the pattern with default inputs.
    #[serde(default)]
    pub estimated_annual_value: f64,
}

impl PatternRef {
    /// Creates a pattern reference.
    #[must_use]
    pub fn new(
        pattern_id: impl Into<String>,
        archetype: impl Into<ArchetypeTag>,
        estimated_annual_value: f64,
    ) -> Self {
        Self {
            pattern_id: PatternId::new(pattern_id),
            archetype: archetype.into(),
            estimated_annual_value,
        }
    }
}

/// Named group of patterns offered together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternBundle {
    /// Bundle identifier.
    pub bundle_id: String,
    /// Patterns in bundle order.
    #[serde(default)]
    pub patterns: Vec<PatternRef>,
}
