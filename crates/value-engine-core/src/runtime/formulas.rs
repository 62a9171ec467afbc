// crates/value-engine-core/src/runtime/formulas.rs
// ============================================================================
// Module: Value Engine Archetype Formulas
// Description: Closed-form annual value formulas for all sixteen archetypes.
// Purpose: Map an archetype and its inputs to a single annual dollar figure.
// Dependencies: crate::core, crate::runtime::display
// ============================================================================

//! ## Overview
//! Every archetype has one deterministic formula: a product (or, for
//! [`Archetype::ContextSurfacing`], a sum of two products) of its declared
//! inputs, scaled by a fixed annualization constant. Inputs are read only
//! through [`InputMap::resolve`], so missing or non-finite values contribute
//! `0` and a formula can never produce `NaN` from bad data.
//!
//! Dispatch is an exhaustive `match`; adding an archetype without a formula
//! fails to compile.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::Archetype;
use crate::core::Assumptions;
use crate::core::ConfidenceTier;
use crate::core::InputMap;
use crate::core::ValueInput;
use crate::core::inputs::finite_or_zero;
use crate::core::keys;
use crate::runtime::display::format_currency;
use crate::runtime::display::format_dollars;
use crate::runtime::display::format_literal;

// ============================================================================
// SECTION: Annualization Constants
// ============================================================================

/// Months per year for monthly-cadence inputs.
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Quarters per year for quarterly-cadence inputs.
pub const QUARTERS_PER_YEAR: f64 = 4.0;
/// Days per year for daily-rate conversions.
pub const DAYS_PER_YEAR: f64 = 365.0;
/// Minutes per hour for converting hourly rates.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Source label attached to inputs seeded from assumptions.
pub const ASSUMPTIONS_SOURCE: &str = "assumptions";

// ============================================================================
// SECTION: Formula Dispatch
// ============================================================================

/// Computes the annual dollar value of `archetype` for `inputs`.
#[must_use]
pub fn annual_value(archetype: Archetype, inputs: &InputMap) -> f64 {
    let v = |key: &str| inputs.resolve(key);
    let value = match archetype {
        Archetype::RevenueLeakageRecovery => {
            v(keys::ANNUAL_REVENUE_AT_RISK) * v(keys::LEAKAGE_RATE) * v(keys::RECOVERY_RATE)
        }
        Archetype::LeadConversionLift => {
            v(keys::LEADS_PER_MONTH)
                * v(keys::CONVERSION_RATE_LIFT)
                * v(keys::AVG_DEAL_VALUE)
                * MONTHS_PER_YEAR
        }
        Archetype::CustomerRetention => {
            v(keys::CUSTOMERS_AT_RISK_PER_YEAR)
                * v(keys::CHURN_REDUCTION_RATE)
                * v(keys::AVG_CUSTOMER_ANNUAL_VALUE)
        }
        Archetype::ProcessAcceleration => {
            v(keys::PROCESSES_PER_MONTH)
                * v(keys::HOURS_SAVED_PER_PROCESS)
                * v(keys::COST_OF_DELAY_PER_HOUR)
                * MONTHS_PER_YEAR
        }
        Archetype::HandoffElimination => labor_per_year(
            v(keys::HANDOFFS_PER_MONTH),
            v(keys::MINUTES_PER_HANDOFF),
            v(keys::HOURLY_RATE),
        ),
        Archetype::CashAcceleration => {
            v(keys::MONTHLY_RECEIVABLES)
                * v(keys::DAYS_ACCELERATED)
                * (v(keys::COST_OF_CAPITAL) / DAYS_PER_YEAR)
                * MONTHS_PER_YEAR
        }
        Archetype::TaskElimination => labor_per_year(
            v(keys::TASKS_PER_MONTH),
            v(keys::MINUTES_PER_TASK),
            v(keys::HOURLY_RATE),
        ),
        Archetype::TaskSimplification => labor_per_year(
            v(keys::TASKS_PER_MONTH),
            v(keys::MINUTES_SAVED_PER_TASK),
            v(keys::HOURLY_RATE),
        ),
        Archetype::ContextSurfacing => {
            let (meetings, searches) = context_surfacing_terms(inputs);
            meetings + searches
        }
        Archetype::ReportAutomation => {
            v(keys::REPORTS_PER_QUARTER)
                * v(keys::HOURS_PER_REPORT)
                * v(keys::HOURLY_RATE)
                * QUARTERS_PER_YEAR
        }
        Archetype::ToolConsolidation => {
            v(keys::TOOLS_RETIRED) * v(keys::MONTHLY_COST_PER_TOOL) * MONTHS_PER_YEAR
        }
        Archetype::HeadcountAvoidance => v(keys::FTE_AVOIDED) * v(keys::ANNUAL_COST_PER_FTE),
        Archetype::SupportDeflection => {
            v(keys::TICKETS_DEFLECTED_PER_MONTH) * v(keys::COST_PER_TICKET) * MONTHS_PER_YEAR
        }
        Archetype::ComplianceAssurance => {
            v(keys::EXPECTED_VIOLATIONS_PER_YEAR)
                * v(keys::AVG_PENALTY_PER_VIOLATION)
                * v(keys::REDUCTION_RATE)
        }
        Archetype::ErrorReduction => {
            v(keys::TRANSACTIONS_PER_MONTH)
                * v(keys::DEFECT_RATE)
                * v(keys::COST_PER_ERROR)
                * v(keys::REDUCTION_RATE)
                * MONTHS_PER_YEAR
        }
        Archetype::SecurityRiskReduction => {
            v(keys::INCIDENT_PROBABILITY) * v(keys::BREACH_COST) * v(keys::REDUCTION_RATE)
        }
    };
    finite_or_zero(value)
}

/// Annual labor value of `count` monthly occurrences of `minutes` at `hourly_rate`.
fn labor_per_year(count: f64, minutes: f64, hourly_rate: f64) -> f64 {
    count * minutes * (hourly_rate / MINUTES_PER_HOUR) * MONTHS_PER_YEAR
}

/// Returns the meeting-avoidance and search-avoidance terms of context surfacing.
fn context_surfacing_terms(inputs: &InputMap) -> (f64, f64) {
    let hourly_rate = inputs.resolve(keys::HOURLY_RATE);
    let meetings = labor_per_year(
        inputs.resolve(keys::MEETINGS_AVOIDED_PER_MONTH) * inputs.resolve(keys::ATTENDEES_PER_MEETING),
        inputs.resolve(keys::MEETING_MINUTES),
        hourly_rate,
    );
    let searches = labor_per_year(
        inputs.resolve(keys::SEARCHES_AVOIDED_PER_MONTH),
        inputs.resolve(keys::MINUTES_PER_SEARCH),
        hourly_rate,
    );
    (meetings, searches)
}

// ============================================================================
// SECTION: Formula Traces
// ============================================================================

/// Renders a human-readable trace of the formula with literal inputs and the
/// rounded result, for example
/// `3,000 tasks/mo × 8 min × $50/hr ÷ 60 × 12 = $240,000`.
#[must_use]
pub fn formula_trace(archetype: Archetype, inputs: &InputMap, value: f64) -> String {
    let n = |key: &str| format_literal(inputs.resolve(key));
    let d = |key: &str| format_dollars(inputs.resolve(key));
    let expression = match archetype {
        Archetype::RevenueLeakageRecovery => format!(
            "{} revenue at risk × {} leakage × {} recovery",
            d(keys::ANNUAL_REVENUE_AT_RISK),
            n(keys::LEAKAGE_RATE),
            n(keys::RECOVERY_RATE)
        ),
        Archetype::LeadConversionLift => format!(
            "{} leads/mo × {} conversion lift × {}/deal × 12",
            n(keys::LEADS_PER_MONTH),
            n(keys::CONVERSION_RATE_LIFT),
            d(keys::AVG_DEAL_VALUE)
        ),
        Archetype::CustomerRetention => format!(
            "{} customers at risk/yr × {} churn reduction × {}/customer",
            n(keys::CUSTOMERS_AT_RISK_PER_YEAR),
            n(keys::CHURN_REDUCTION_RATE),
            d(keys::AVG_CUSTOMER_ANNUAL_VALUE)
        ),
        Archetype::ProcessAcceleration => format!(
            "{} processes/mo × {} hrs saved × {}/hr delay × 12",
            n(keys::PROCESSES_PER_MONTH),
            n(keys::HOURS_SAVED_PER_PROCESS),
            d(keys::COST_OF_DELAY_PER_HOUR)
        ),
        Archetype::HandoffElimination => format!(
            "{} handoffs/mo × {} min × {}/hr ÷ 60 × 12",
            n(keys::HANDOFFS_PER_MONTH),
            n(keys::MINUTES_PER_HANDOFF),
            d(keys::HOURLY_RATE)
        ),
        Archetype::CashAcceleration => format!(
            "{} receivables/mo × {} days × {} cost of capital ÷ 365 × 12",
            d(keys::MONTHLY_RECEIVABLES),
            n(keys::DAYS_ACCELERATED),
            n(keys::COST_OF_CAPITAL)
        ),
        Archetype::TaskElimination => format!(
            "{} tasks/mo × {} min × {}/hr ÷ 60 × 12",
            n(keys::TASKS_PER_MONTH),
            n(keys::MINUTES_PER_TASK),
            d(keys::HOURLY_RATE)
        ),
        Archetype::TaskSimplification => format!(
            "{} tasks/mo × {} min saved × {}/hr ÷ 60 × 12",
            n(keys::TASKS_PER_MONTH),
            n(keys::MINUTES_SAVED_PER_TASK),
            d(keys::HOURLY_RATE)
        ),
        Archetype::ContextSurfacing => format!(
            "({} meetings/mo × {} min × {} attendees × {}/hr ÷ 60 × 12) + ({} searches/mo × {} \
             min × {}/hr ÷ 60 × 12)",
            n(keys::MEETINGS_AVOIDED_PER_MONTH),
            n(keys::MEETING_MINUTES),
            n(keys::ATTENDEES_PER_MEETING),
            d(keys::HOURLY_RATE),
            n(keys::SEARCHES_AVOIDED_PER_MONTH),
            n(keys::MINUTES_PER_SEARCH),
            d(keys::HOURLY_RATE)
        ),
        Archetype::ReportAutomation => format!(
            "{} reports/qtr × {} hrs × {}/hr × 4",
            n(keys::REPORTS_PER_QUARTER),
            n(keys::HOURS_PER_REPORT),
            d(keys::HOURLY_RATE)
        ),
        Archetype::ToolConsolidation => format!(
            "{} tools × {}/mo × 12",
            n(keys::TOOLS_RETIRED),
            d(keys::MONTHLY_COST_PER_TOOL)
        ),
        Archetype::HeadcountAvoidance => {
            format!("{} FTE × {}/FTE", n(keys::FTE_AVOIDED), d(keys::ANNUAL_COST_PER_FTE))
        }
        Archetype::SupportDeflection => format!(
            "{} tickets/mo × {}/ticket × 12",
            n(keys::TICKETS_DEFLECTED_PER_MONTH),
            d(keys::COST_PER_TICKET)
        ),
        Archetype::ComplianceAssurance => format!(
            "{} violations/yr × {}/violation × {} reduction",
            n(keys::EXPECTED_VIOLATIONS_PER_YEAR),
            d(keys::AVG_PENALTY_PER_VIOLATION),
            n(keys::REDUCTION_RATE)
        ),
        Archetype::ErrorReduction => format!(
            "{} transactions/mo × {} defect rate × {}/error × {} reduction × 12",
            n(keys::TRANSACTIONS_PER_MONTH),
            n(keys::DEFECT_RATE),
            d(keys::COST_PER_ERROR),
            n(keys::REDUCTION_RATE)
        ),
        Archetype::SecurityRiskReduction => format!(
            "{} incident probability × {}/breach × {} reduction",
            n(keys::INCIDENT_PROBABILITY),
            d(keys::BREACH_COST),
            n(keys::REDUCTION_RATE)
        ),
    };
    format!("{expression} = {}", format_currency(value))
}

// ============================================================================
// SECTION: Default Inputs
// ============================================================================

/// Returns the assumption-derived default inputs for `archetype`.
///
/// Seeded inputs carry [`ConfidenceTier::Estimated`] and the
/// [`ASSUMPTIONS_SOURCE`] label. Inputs with no assumption counterpart are
/// left for the user to supply.
#[must_use]
pub fn default_inputs(archetype: Archetype, assumptions: &Assumptions) -> InputMap {
    let estimated = |value: f64| {
        ValueInput::new(value, ConfidenceTier::Estimated).with_source(ASSUMPTIONS_SOURCE)
    };
    let operations_rate = assumptions.hourly_rates.operations;
    let minutes = assumptions.task_minutes;
    let seeded: Vec<(&str, f64)> = match archetype {
        Archetype::TaskElimination => {
            vec![(keys::MINUTES_PER_TASK, minutes.medium), (keys::HOURLY_RATE, operations_rate)]
        }
        Archetype::TaskSimplification => {
            vec![(keys::MINUTES_SAVED_PER_TASK, minutes.simple), (keys::HOURLY_RATE, operations_rate)]
        }
        Archetype::HandoffElimination => {
            vec![(keys::MINUTES_PER_HANDOFF, minutes.simple), (keys::HOURLY_RATE, operations_rate)]
        }
        Archetype::ContextSurfacing | Archetype::ReportAutomation => {
            vec![(keys::HOURLY_RATE, operations_rate)]
        }
        Archetype::SupportDeflection => {
            vec![(keys::COST_PER_TICKET, assumptions.avg_support_ticket_cost)]
        }
        Archetype::SecurityRiskReduction => {
            vec![(keys::BREACH_COST, assumptions.avg_data_breach_cost)]
        }
        Archetype::RevenueLeakageRecovery
        | Archetype::LeadConversionLift
        | Archetype::CustomerRetention
        | Archetype::ProcessAcceleration
        | Archetype::CashAcceleration
        | Archetype::ToolConsolidation
        | Archetype::HeadcountAvoidance
        | Archetype::ComplianceAssurance
        | Archetype::ErrorReduction => Vec::new(),
    };
    seeded.into_iter().map(|(key, value)| (key.to_string(), estimated(value))).collect()
}
