// crates/value-engine-core/src/runtime/projection.rs
// ============================================================================
// Module: Value Engine Projection
// Description: Multi-year value schedule with growth, adoption ramp, and ROI.
// Purpose: Expand a steady-state annual value into a year-by-year projection.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! A projection applies compound growth and the adoption ramp to a base
//! annual value for each year of the horizon. Investment is the incremental
//! platform spend (`proposed - current`, floored at zero) and recurs every
//! year. Cumulative columns are running sums in year order.
//!
//! The ROI multiple is undefined without positive incremental spend and is
//! reported as `None` rather than a division by zero.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::Assumptions;
use crate::core::assumptions::MAX_PROJECTION_YEARS;
use crate::core::inputs::finite_or_zero;

// ============================================================================
// SECTION: Projection Types
// ============================================================================

/// One year of a projection.
///
/// # Invariants
/// - `year` is 1-based.
/// - `net_value == value - investment`.
/// - Cumulative fields are running sums over years `1..=year`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearProjection {
    /// 1-based year number.
    pub year: u32,
    /// Compound growth factor `(1 + g)^(year - 1)`.
    pub growth_multiplier: f64,
    /// Adoption ramp fraction for the year.
    pub realization_rate: f64,
    /// Value realized in the year.
    pub value: f64,
    /// Incremental investment for the year.
    pub investment: f64,
    /// Value net of investment.
    pub net_value: f64,
    /// Running value total.
    pub cumulative_value: f64,
    /// Running investment total.
    pub cumulative_investment: f64,
    /// Running net total.
    pub cumulative_net_value: f64,
}

/// Projection with horizon totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    /// Steady-state annual value the projection starts from.
    pub base_annual_value: f64,
    /// Year-by-year schedule.
    pub years: Vec<YearProjection>,
    /// Sum of value over the horizon.
    pub total_value: f64,
    /// Sum of investment over the horizon.
    pub total_investment: f64,
    /// Sum of net value over the horizon.
    pub total_net_value: f64,
    /// Annual value per dollar of incremental spend.
    pub roi_multiple: Option<f64>,
    /// First year whose cumulative net value is non-negative.
    pub payback_year: Option<u32>,
}

// ============================================================================
// SECTION: Projection
// ============================================================================

/// Returns the incremental annual investment, floored at zero.
#[must_use]
pub fn incremental_investment(current_spend: f64, proposed_spend: f64) -> f64 {
    finite_or_zero(proposed_spend - current_spend).max(0.0)
}

/// Expands `base_annual_value` into a schedule of `assumptions.projection_years` years.
///
/// The horizon is clamped to [`MAX_PROJECTION_YEARS`] so unvalidated
/// assumptions cannot request an unbounded schedule.
#[must_use]
pub fn calculate_projection(
    base_annual_value: f64,
    assumptions: &Assumptions,
    current_spend: f64,
    proposed_spend: f64,
) -> Vec<YearProjection> {
    let base = finite_or_zero(base_annual_value);
    let growth = 1.0 + finite_or_zero(assumptions.annual_growth_rate);
    let investment = incremental_investment(current_spend, proposed_spend);
    let mut cumulative_value = 0.0;
    let mut cumulative_investment = 0.0;
    let mut cumulative_net_value = 0.0;
    let horizon = assumptions.projection_years.min(MAX_PROJECTION_YEARS);
    let mut years = Vec::new();
    for year in 1 ..= horizon {
        let index = year - 1;
        let growth_multiplier = growth.powi(i32::try_from(index).unwrap_or(i32::MAX));
        let realization_rate = usize::try_from(index).map_or(1.0, |i| assumptions.ramp_for_year(i));
        let value = finite_or_zero(base * growth_multiplier * realization_rate);
        let net_value = value - investment;
        cumulative_value += value;
        cumulative_investment += investment;
        cumulative_net_value += net_value;
        years.push(YearProjection {
            year,
            growth_multiplier,
            realization_rate,
            value,
            investment,
            net_value,
            cumulative_value,
            cumulative_investment,
            cumulative_net_value,
        });
    }
    years
}

/// Returns `total_annual_value / (proposed - current)`, or `None` when the
/// incremental spend is not positive.
#[must_use]
pub fn roi_multiple(total_annual_value: f64, current_spend: f64, proposed_spend: f64) -> Option<f64> {
    let incremental = proposed_spend - current_spend;
    if !incremental.is_finite() || incremental <= 0.0 {
        return None;
    }
    Some(finite_or_zero(total_annual_value) / incremental)
}

/// Builds a projection together with horizon totals, ROI, and payback year.
#[must_use]
pub fn summarize_projection(
    base_annual_value: f64,
    assumptions: &Assumptions,
    current_spend: f64,
    proposed_spend: f64,
) -> ProjectionSummary {
    let years = calculate_projection(base_annual_value, assumptions, current_spend, proposed_spend);
    let (total_value, total_investment, total_net_value) =
        years.last().map_or((0.0, 0.0, 0.0), |last| {
            (last.cumulative_value, last.cumulative_investment, last.cumulative_net_value)
        });
    let payback_year = if incremental_investment(current_spend, proposed_spend) > 0.0 {
        years.iter().find(|year| year.cumulative_net_value >= 0.0).map(|year| year.year)
    } else {
        None
    };
    ProjectionSummary {
        base_annual_value: finite_or_zero(base_annual_value),
        years,
        total_value,
        total_investment,
        total_net_value,
        roi_multiple: roi_multiple(base_annual_value, current_spend, proposed_spend),
        payback_year,
    }
}
