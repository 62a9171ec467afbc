// crates/value-engine-config/src/lib.rs
// ============================================================================
// Module: Value Engine Config Library
// Description: Canonical config model, validation, and example generation.
// Purpose: Single source of truth for value-engine.toml semantics.
// Dependencies: value-engine-core, serde, toml
// ============================================================================

//! ## Overview
//! `value-engine-config` defines the configuration model for the value
//! engine: the assumption set and platform spend figures. Loading is strict
//! (size, path, and UTF-8 guards, unknown keys rejected) and every loaded
//! config is validated before it is returned.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
