// crates/value-engine-core/src/runtime/mod.rs
// ============================================================================
// Module: Value Engine Runtime
// Description: Pure calculation functions over core value records.
// Purpose: Compute item values, rollups, projections, realization, and dedup.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Runtime modules are stateless: every function takes immutable snapshots
//! and returns fresh results. Outer surfaces (CLI, stores) must route through
//! these functions so every caller derives the same numbers from the same
//! inputs.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod confidence;
pub mod dedup;
pub mod dimensions;
pub mod display;
pub mod formulas;
pub mod projection;
pub mod realization;
pub mod valuation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use confidence::aggregate_confidence;
pub use dedup::DedupResult;
pub use dedup::combine_bundles;
pub use dedup::deduplicate_patterns;
pub use dimensions::ConfidenceTotal;
pub use dimensions::DimensionTotal;
pub use dimensions::confidence_totals;
pub use dimensions::dimension_breakdown;
pub use dimensions::dimension_totals;
pub use dimensions::grand_total;
pub use display::format_currency;
pub use display::format_dollars;
pub use display::format_literal;
pub use display::format_number;
pub use formulas::annual_value;
pub use formulas::default_inputs;
pub use formulas::formula_trace;
pub use projection::ProjectionSummary;
pub use projection::YearProjection;
pub use projection::calculate_projection;
pub use projection::roi_multiple;
pub use projection::summarize_projection;
pub use realization::HealthStatus;
pub use realization::RealizationSummary;
pub use realization::RunTrend;
pub use realization::ValueRealized;
pub use realization::compute_realization;
pub use realization::summarize_realization;
pub use realization::unattributed_entries;
pub use valuation::ItemValuation;
pub use valuation::ValuedItem;
pub use valuation::item_annual_value;
pub use valuation::total_annual_value;
pub use valuation::valuate;
pub use valuation::valuate_items;
