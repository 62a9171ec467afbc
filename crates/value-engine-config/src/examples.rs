// crates/value-engine-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic starting point for value-engine.toml.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The example lists every key with its default value. It is kept in sync
//! with [`crate::AssumptionsConfig::default`] by the config test suite.

/// Returns a canonical example `value-engine.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r"[assumptions]
projection_years = 3
realization_ramp = [0.5, 0.85, 1.0]
annual_growth_rate = 0.05
avg_data_breach_cost = 4450000.0
avg_support_ticket_cost = 15.0

[assumptions.hourly_rates]
basic = 35.0
operations = 50.0
engineering = 85.0
executive = 150.0

[assumptions.task_minutes]
simple = 2.0
medium = 8.0
complex = 20.0

[spend]
current = 0.0
proposed = 0.0
",
    )
}
