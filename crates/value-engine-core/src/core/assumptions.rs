// crates/value-engine-core/src/core/assumptions.rs
// ============================================================================
// Module: Value Engine Assumptions
// Description: Calculation-wide assumptions for rates, ramps, and benchmarks.
// Purpose: Carry the immutable assumption snapshot used per computation.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! [`Assumptions`] hold the organization-level defaults a calculation is run
//! under: labor rates, task sizes, the projection horizon, the adoption ramp,
//! and industry benchmarks. Formulas never read assumptions directly; they
//! only seed default inputs and drive multi-year projections.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default projection horizon in years.
pub const DEFAULT_PROJECTION_YEARS: u32 = 3;
/// Longest projection horizon accepted by validation.
pub const MAX_PROJECTION_YEARS: u32 = 100;
/// Default adoption ramp (fraction of steady-state value per year).
pub const DEFAULT_REALIZATION_RAMP: [f64; 3] = [0.5, 0.85, 1.0];
/// Default annual growth rate applied to value.
pub const DEFAULT_ANNUAL_GROWTH_RATE: f64 = 0.05;
/// Default average cost of a data breach.
pub const DEFAULT_AVG_DATA_BREACH_COST: f64 = 4_450_000.0;
/// Default average cost of resolving a support ticket.
pub const DEFAULT_AVG_SUPPORT_TICKET_COST: f64 = 15.0;

// ============================================================================
// SECTION: Assumption Types
// ============================================================================

/// Loaded hourly labor rates by role band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HourlyRates {
    /// Entry-level or administrative work.
    pub basic: f64,
    /// Operations and business staff.
    pub operations: f64,
    /// Engineering staff.
    pub engineering: f64,
    /// Executive time.
    pub executive: f64,
}

impl Default for HourlyRates {
    fn default() -> Self {
        Self {
            basic: 35.0,
            operations: 50.0,
            engineering: 85.0,
            executive: 150.0,
        }
    }
}

/// Typical minutes per task by complexity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskMinutes {
    /// Simple task (copy a field, send a notification).
    pub simple: f64,
    /// Medium task (triage, enrich, route).
    pub medium: f64,
    /// Complex task (reconcile, review, compile).
    pub complex: f64,
}

impl Default for TaskMinutes {
    fn default() -> Self {
        Self {
            simple: 2.0,
            medium: 8.0,
            complex: 20.0,
        }
    }
}

/// Calculation-wide assumptions.
///
/// # Invariants
/// - `realization_ramp[i]` is the fraction of steady-state value realized in year `i + 1`.
/// - Years beyond the ramp realize fully (`1.0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assumptions {
    /// Hourly rates by role band.
    pub hourly_rates: HourlyRates,
    /// Minutes per task by complexity.
    pub task_minutes: TaskMinutes,
    /// Number of projected years (>= 1).
    pub projection_years: u32,
    /// Adoption ramp per year, fractions in `[0, 1]`.
    pub realization_ramp: Vec<f64>,
    /// Compound annual growth applied to value.
    pub annual_growth_rate: f64,
    /// Benchmark cost of a data breach.
    pub avg_data_breach_cost: f64,
    /// Benchmark cost of a support ticket.
    pub avg_support_ticket_cost: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            hourly_rates: HourlyRates::default(),
            task_minutes: TaskMinutes::default(),
            projection_years: DEFAULT_PROJECTION_YEARS,
            realization_ramp: DEFAULT_REALIZATION_RAMP.to_vec(),
            annual_growth_rate: DEFAULT_ANNUAL_GROWTH_RATE,
            avg_data_breach_cost: DEFAULT_AVG_DATA_BREACH_COST,
            avg_support_ticket_cost: DEFAULT_AVG_SUPPORT_TICKET_COST,
        }
    }
}

impl Assumptions {
    /// Returns the realization fraction for a 0-based year index.
    #[must_use]
    pub fn ramp_for_year(&self, index: usize) -> f64 {
        self.realization_ramp.get(index).copied().unwrap_or(1.0)
    }

    /// Validates the assumption set.
    ///
    /// # Errors
    ///
    /// Returns [`AssumptionsError`] when the horizon is empty or longer than
    /// [`MAX_PROJECTION_YEARS`], a ramp entry is outside `[0, 1]`, or a rate
    /// or cost is negative or non-finite.
    pub fn validate(&self) -> Result<(), AssumptionsError> {
        if self.projection_years == 0 {
            return Err(AssumptionsError::EmptyHorizon);
        }
        if self.projection_years > MAX_PROJECTION_YEARS {
            return Err(AssumptionsError::HorizonTooLong(self.projection_years));
        }
        for (index, fraction) in self.realization_ramp.iter().enumerate() {
            if !fraction.is_finite() || !(0.0 ..= 1.0).contains(fraction) {
                return Err(AssumptionsError::RampOutOfRange {
                    year: index + 1,
                    value: *fraction,
                });
            }
        }
        if !self.annual_growth_rate.is_finite() || self.annual_growth_rate <= -1.0 {
            return Err(AssumptionsError::InvalidGrowthRate(self.annual_growth_rate));
        }
        let amounts = [
            ("hourlyRates.basic", self.hourly_rates.basic),
            ("hourlyRates.operations", self.hourly_rates.operations),
            ("hourlyRates.engineering", self.hourly_rates.engineering),
            ("hourlyRates.executive", self.hourly_rates.executive),
            ("taskMinutes.simple", self.task_minutes.simple),
            ("taskMinutes.medium", self.task_minutes.medium),
            ("taskMinutes.complex", self.task_minutes.complex),
            ("avgDataBreachCost", self.avg_data_breach_cost),
            ("avgSupportTicketCost", self.avg_support_ticket_cost),
        ];
        for (field, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(AssumptionsError::InvalidAmount {
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Assumption validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssumptionsError {
    /// Projection horizon is zero years.
    #[error("projectionYears must be at least 1")]
    EmptyHorizon,
    /// Projection horizon exceeds [`MAX_PROJECTION_YEARS`].
    #[error("projectionYears must be at most 100, got {0}")]
    HorizonTooLong(u32),
    /// Ramp entry is not a fraction in `[0, 1]`.
    #[error("realizationRamp year {year} must be within [0, 1], got {value}")]
    RampOutOfRange {
        /// 1-based projection year.
        year: usize,
        /// Offending value.
        value: f64,
    },
    /// Growth rate is non-finite or at or below -100%.
    #[error("annualGrowthRate must be finite and greater than -1, got {0}")]
    InvalidGrowthRate(f64),
    /// Rate or cost is negative or non-finite.
    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidAmount {
        /// Field name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
}

// ============================================================================
// SECTION: Tests
// ============================================================================
