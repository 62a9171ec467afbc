// crates/value-engine-core/src/lib.rs
// ============================================================================
// Module: Value Engine Core Library
// Description: Public API surface for the value calculation engine.
// Purpose: Expose value records and the pure runtime calculations over them.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! The value engine turns structured business inputs into annual dollar
//! values through sixteen archetype formulas, rolls them up by dimension and
//! confidence, projects them over a multi-year horizon, compares projections
//! against run telemetry, and deduplicates catalogue patterns. It performs no
//! I/O; records are supplied as snapshots by the caller.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use runtime::*;
