//! Projection and ROI tests for the value engine core.
// crates/value-engine-core/tests/projection.rs
// ============================================================================
// Module: Projection Tests
// Description: Growth, ramp, investment, and ROI boundary behavior.
// ============================================================================

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use value_engine_core::Assumptions;
use value_engine_core::calculate_projection;
use value_engine_core::core::assumptions::MAX_PROJECTION_YEARS;
use value_engine_core::roi_multiple;
use value_engine_core::summarize_projection;

fn assumptions(years: u32, ramp: &[f64], growth: f64) -> Assumptions {
    Assumptions {
        projection_years: years,
        realization_ramp: ramp.to_vec(),
        annual_growth_rate: growth,
        ..Assumptions::default()
    }
}

fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs().max(1.0) * 1e-9;
    assert!((actual - expected).abs() <= tolerance, "expected {expected}, got {actual}");
}

#[test]
fn growth_and_ramp_produce_expected_year_values() {
    let years = calculate_projection(100_000.0, &assumptions(3, &[0.5, 1.0, 1.0], 0.1), 0.0, 0.0);
    assert_eq!(years.len(), 3);
    let values: Vec<f64> = years.iter().map(|year| year.value).collect();
    assert_close(values[0], 50_000.0);
    assert_close(values[1], 110_000.0);
    assert_close(values[2], 121_000.0);
    for year in &years {
        assert!(year.investment.abs() < f64::EPSILON);
        assert_close(year.net_value, year.value);
    }
    assert_eq!(years.iter().map(|year| year.year).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn years_beyond_the_ramp_realize_fully() {
    let years = calculate_projection(1_000.0, &assumptions(4, &[0.25], 0.0), 0.0, 0.0);
    let rates: Vec<f64> = years.iter().map(|year| year.realization_rate).collect();
    assert_eq!(rates, vec![0.25, 1.0, 1.0, 1.0]);
}

#[test]
fn oversized_horizon_is_clamped() {
    let years = calculate_projection(1_000.0, &assumptions(4_000_000_000, &[1.0], 0.0), 0.0, 0.0);
    assert_eq!(years.len(), usize::try_from(MAX_PROJECTION_YEARS).unwrap());
    assert_eq!(years.last().unwrap().year, MAX_PROJECTION_YEARS);
}

#[test]
fn investment_recurs_and_cumulative_fields_are_running_sums() {
    let years = calculate_projection(10_000.0, &assumptions(3, &[1.0, 1.0, 1.0], 0.0), 1_000.0, 5_000.0);
    for year in &years {
        assert_close(year.investment, 4_000.0);
        assert_close(year.net_value, 6_000.0);
    }
    let last = years.last().unwrap();
    assert_close(last.cumulative_value, 30_000.0);
    assert_close(last.cumulative_investment, 12_000.0);
    assert_close(last.cumulative_net_value, 18_000.0);
}

#[test]
fn spend_reduction_is_not_negative_investment() {
    let years = calculate_projection(10_000.0, &assumptions(2, &[], 0.0), 5_000.0, 1_000.0);
    assert!(years.iter().all(|year| year.investment.abs() < f64::EPSILON));
}

#[test]
fn roi_is_undefined_without_positive_incremental_spend() {
    assert_eq!(roi_multiple(100.0, 10.0, 10.0), None);
    assert_eq!(roi_multiple(100.0, 20.0, 10.0), None);
    let roi = roi_multiple(240_000.0, 10_000.0, 30_000.0).unwrap();
    assert_close(roi, 12.0);
}

#[test]
fn summary_reports_totals_and_payback_year() {
    let summary =
        summarize_projection(10_000.0, &assumptions(3, &[0.2, 0.6, 1.0], 0.0), 0.0, 4_000.0);
    // Net by year: -2000, 2000, 6000; cumulative: -2000, 0, 6000.
    assert_eq!(summary.payback_year, Some(2));
    assert_close(summary.total_value, 18_000.0);
    assert_close(summary.total_investment, 12_000.0);
    assert_close(summary.total_net_value, 6_000.0);
    assert_close(summary.roi_multiple.unwrap(), 2.5);
}

#[test]
fn summary_without_investment_has_no_payback_or_roi() {
    let summary = summarize_projection(10_000.0, &Assumptions::default(), 0.0, 0.0);
    assert_eq!(summary.payback_year, None);
    assert_eq!(summary.roi_multiple, None);
    assert_eq!(summary.years.len(), 3);
}
