//! Item valuation and rollup tests for the value engine core.
// crates/value-engine-core/tests/valuation.rs
// ============================================================================
// Module: Valuation and Rollup Tests
// Description: Manual overrides, unknown archetypes, and dimension rollups.
// ============================================================================
//! ## Overview
//! Covers the item-level valuation contract and the aggregations built on it:
//! per-dimension totals, the sorted breakdown view, and confidence rollups.

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

use value_engine_core::Archetype;
use value_engine_core::ConfidenceTier;
use value_engine_core::Dimension;
use value_engine_core::InputMap;
use value_engine_core::ValueInput;
use value_engine_core::ValueItem;
use value_engine_core::confidence_totals;
use value_engine_core::dimension_breakdown;
use value_engine_core::dimension_totals;
use value_engine_core::grand_total;
use value_engine_core::keys;
use value_engine_core::total_annual_value;
use value_engine_core::valuate;
use value_engine_core::valuate_items;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

fn task_item(id: &str, tasks: f64) -> ValueItem {
    ValueItem::new(id, Archetype::TaskElimination, id).with_inputs(
        InputMap::new()
            .with(keys::TASKS_PER_MONTH, ValueInput::custom(tasks))
            .with(keys::MINUTES_PER_TASK, ValueInput::new(8.0, ConfidenceTier::Estimated))
            .with(keys::HOURLY_RATE, ValueInput::new(50.0, ConfidenceTier::Benchmarked)),
    )
}

fn tool_item(id: &str, tools: f64) -> ValueItem {
    ValueItem::new(id, Archetype::ToolConsolidation, id).with_inputs(
        InputMap::new()
            .with(keys::TOOLS_RETIRED, ValueInput::new(tools, ConfidenceTier::Benchmarked))
            .with(keys::MONTHLY_COST_PER_TOOL, ValueInput::new(1000.0, ConfidenceTier::Benchmarked)),
    )
}

fn unknown_item(id: &str) -> ValueItem {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "archetype": "quantum_synergy",
        "name": "Mystery",
        "inputs": { "tasksPerMonth": { "value": 10, "confidence": "benchmarked" } }
    }))
    .unwrap()
}

// ============================================================================
// SECTION: Valuation
// ============================================================================

#[test]
fn formula_valuation_reports_trace_and_weakest_confidence() {
    let valuation = valuate(&task_item("a", 3000.0));
    assert!((valuation.annual_value - 240_000.0).abs() < 1e-6);
    assert!(valuation.formula.ends_with("= $240,000"));
    assert_eq!(valuation.confidence, ConfidenceTier::Custom);
}

#[test]
fn manual_override_wins_even_without_inputs() {
    let item = ValueItem::new("m", Archetype::HeadcountAvoidance, "Manual").with_manual_value(12_345.4);
    let valuation = valuate(&item);
    assert!((valuation.annual_value - 12_345.4).abs() < f64::EPSILON);
    assert_eq!(valuation.formula, "Manual override: $12,345");
    assert_eq!(valuation.confidence, ConfidenceTier::Custom);
}

#[test]
fn manual_override_keeps_input_confidence() {
    let item = tool_item("t", 2.0).with_manual_value(5.0);
    let valuation = valuate(&item);
    assert!((valuation.annual_value - 5.0).abs() < f64::EPSILON);
    assert_eq!(valuation.confidence, ConfidenceTier::Benchmarked);
}

#[test]
fn unknown_archetype_degrades_to_zero() {
    let item = unknown_item("u");
    assert!(item.known_archetype().is_none());
    let valuation = valuate(&item);
    assert!(valuation.annual_value.abs() < f64::EPSILON);
    assert_eq!(valuation.formula, "$0");
    assert_eq!(valuation.confidence, ConfidenceTier::Benchmarked);
    assert_eq!(item.effective_dimension(), Dimension::Productivity);
}

#[test]
fn unknown_archetype_tag_round_trips_verbatim() {
    let item = unknown_item("u");
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["archetype"], "quantum_synergy");
}

#[test]
fn null_input_values_resolve_to_zero() {
    let item: ValueItem = serde_json::from_value(serde_json::json!({
        "id": "n",
        "archetype": "tool_consolidation",
        "inputs": {
            "toolsRetired": { "value": null, "confidence": "custom" },
            "monthlyCostPerTool": { "value": 100 }
        }
    }))
    .unwrap();
    assert!(valuate(&item).annual_value.abs() < f64::EPSILON);
}

#[test]
fn valuate_items_orders_by_order_then_id() {
    let mut first = tool_item("z", 1.0);
    first.order = 0;
    let mut second = tool_item("a", 1.0);
    second.order = 1;
    let mut third = tool_item("b", 1.0);
    third.order = 1;
    let valued = valuate_items(&[third, second, first]);
    let ids: Vec<&str> = valued.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, vec!["z", "a", "b"]);
    assert!(valued.iter().all(|entry| !entry.manual_override));
}

// ============================================================================
// SECTION: Dimension Rollups
// ============================================================================

#[test]
fn dimension_totals_are_zero_filled_and_sum_to_hundred() {
    let items = vec![task_item("a", 3000.0), tool_item("b", 5.0)];
    let totals = dimension_totals(&items);
    assert_eq!(totals.len(), Dimension::ALL.len());
    let productivity = totals.iter().find(|t| t.dimension == Dimension::Productivity).unwrap();
    assert_eq!(productivity.item_count, 1);
    let revenue = totals.iter().find(|t| t.dimension == Dimension::RevenueImpact).unwrap();
    assert_eq!(revenue.item_count, 0);
    assert!(revenue.percentage.abs() < f64::EPSILON);
    let percent_sum: f64 = totals.iter().map(|t| t.percentage).sum();
    assert!((percent_sum - 100.0).abs() < 1e-9);
    assert!((grand_total(&items) - total_annual_value(&items)).abs() < 1e-6);
}

#[test]
fn zero_grand_total_yields_zero_percentages() {
    let items = vec![task_item("a", 0.0), unknown_item("u")];
    let totals = dimension_totals(&items);
    assert!(totals.iter().all(|t| t.percentage.abs() < f64::EPSILON));
    assert!(dimension_breakdown(&items).is_empty());
}

#[test]
fn breakdown_drops_empty_dimensions_and_sorts_descending() {
    let items = vec![tool_item("small", 1.0), task_item("large", 3000.0)];
    let breakdown = dimension_breakdown(&items);
    assert_eq!(breakdown.len(), 2);
    assert!(breakdown[0].total >= breakdown[1].total);
    assert_eq!(breakdown[0].dimension, Archetype::TaskElimination.dimension());
}

#[test]
fn explicit_dimension_overrides_archetype_mapping() {
    let mut item = tool_item("t", 1.0);
    item.dimension = Some(Dimension::RiskQuality);
    let totals = dimension_totals(&[item]);
    let risk = totals.iter().find(|t| t.dimension == Dimension::RiskQuality).unwrap();
    assert_eq!(risk.item_count, 1);
}

#[test]
fn confidence_totals_slot_by_aggregate_tier() {
    let items = vec![task_item("a", 3000.0), tool_item("b", 1.0)];
    let totals = confidence_totals(&items);
    assert_eq!(totals.len(), ConfidenceTier::ALL.len());
    let custom = totals.iter().find(|t| t.confidence == ConfidenceTier::Custom).unwrap();
    let benchmarked = totals.iter().find(|t| t.confidence == ConfidenceTier::Benchmarked).unwrap();
    assert_eq!(custom.item_count, 1);
    assert_eq!(benchmarked.item_count, 1);
    assert!((benchmarked.total - 12_000.0).abs() < 1e-6);
}
