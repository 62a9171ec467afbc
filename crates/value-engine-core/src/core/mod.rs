// crates/value-engine-core/src/core/mod.rs
// ============================================================================
// Module: Value Engine Core Types
// Description: Canonical records consumed and produced by the value engine.
// Purpose: Provide stable, serializable types for items, assumptions, and telemetry.
// Dependencies: serde, thiserror, time
// ============================================================================

//! ## Overview
//! Core types describe value items, their archetypes and inputs, the
//! assumption snapshot, run telemetry, and catalogue patterns. They are
//! immutable snapshots supplied by the external store on each computation.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod archetype;
pub mod assumptions;
pub mod identifiers;
pub mod inputs;
pub mod item;
pub mod pattern;
pub mod telemetry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use archetype::Archetype;
pub use archetype::ArchetypeParseError;
pub use archetype::ArchetypeTag;
pub use archetype::Dimension;
pub use archetype::keys;
pub use assumptions::Assumptions;
pub use assumptions::AssumptionsError;
pub use assumptions::HourlyRates;
pub use assumptions::TaskMinutes;
pub use identifiers::PatternId;
pub use identifiers::UseCaseId;
pub use identifiers::ValueItemId;
pub use identifiers::ZapId;
pub use inputs::ConfidenceTier;
pub use inputs::InputMap;
pub use inputs::ValueInput;
pub use item::ValueItem;
pub use pattern::PatternBundle;
pub use pattern::PatternRef;
pub use telemetry::UseCase;
pub use telemetry::ZapRunCacheEntry;
