// crates/value-engine-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for bounded reads, snapshot parsing, and rendering.
// Purpose: Ensure CLI inputs fail closed and text output stays readable.
// Dependencies: value-engine-cli main helpers
// ============================================================================

//! ## Overview
//! Validates `read_bytes_with_limit` size enforcement, JSON snapshot parsing
//! errors, spend override checks, and the plain-text renderers.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use value_engine_core::Archetype;
use value_engine_core::Assumptions;
use value_engine_core::PatternRef;
use value_engine_core::ValueItem;
use value_engine_core::deduplicate_patterns;
use value_engine_core::default_inputs;
use value_engine_core::summarize_projection;
use value_engine_core::total_annual_value;
use value_engine_core::valuate_items;

use super::ArchetypeInfo;
use super::ReadLimitError;
use super::ValuationReport;
use super::canonical_json_line;
use super::ensure_base_value;
use super::ensure_spend;
use super::parse_json;
use super::read_bytes_with_limit;
use super::read_json;
use super::render;

// ============================================================================
// SECTION: Helpers
// ============================================================================

const ITEMS_JSON: &str = r#"[
  {
    "id": "item-1",
    "archetype": "task_elimination",
    "name": "Invoice triage",
    "inputs": {
      "tasksPerMonth": { "value": 3000, "confidence": "custom" },
      "minutesPerTask": { "value": 8, "confidence": "estimated" },
      "hourlyRate": { "value": 50, "confidence": "benchmarked" }
    }
  },
  {
    "id": "item-2",
    "archetype": "quantum_synergy",
    "name": "Unknown pattern",
    "order": 1
  }
]"#;

fn temp_file(label: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock drift").as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("value-engine-cli-{label}-{nanos}.json"));
    path
}

fn cleanup(path: &PathBuf) {
    let _ = fs::remove_file(path);
}

fn sample_items() -> Vec<ValueItem> {
    parse_json(ITEMS_JSON.as_bytes(), "value items").expect("parse sample items")
}

// ============================================================================
// SECTION: Bounded Reads
// ============================================================================

#[test]
fn read_bytes_with_limit_allows_small_file() {
    let path = temp_file("io-small");
    fs::write(&path, b"[]").expect("write small file");

    let bytes = read_bytes_with_limit(&path, 16).expect("read small file");
    assert_eq!(bytes, b"[]");

    cleanup(&path);
}

#[test]
fn read_bytes_with_limit_rejects_large_file() {
    let path = temp_file("io-large");
    let limit = 8_usize;
    let payload = vec![b' '; limit + 1];
    fs::write(&path, payload).expect("write large file");

    let err = read_bytes_with_limit(&path, limit).expect_err("expected size limit failure");
    match err {
        ReadLimitError::TooLarge {
            size,
            limit: reported,
        } => {
            let limit_u64 = u64::try_from(limit).expect("limit fits");
            assert!(size > limit_u64);
            assert_eq!(reported, limit);
        }
        ReadLimitError::Io(err) => panic!("unexpected io error: {err}"),
    }

    cleanup(&path);
}

#[test]
fn read_json_reports_missing_file() {
    let path = temp_file("missing");
    let err = read_json::<Vec<ValueItem>>(&path, "value items").expect_err("missing file");
    assert!(err.to_string().contains("failed to read value items"));
}

#[test]
fn read_json_parses_items_from_disk() {
    let path = temp_file("items");
    fs::write(&path, ITEMS_JSON).expect("write items");

    let items: Vec<ValueItem> = read_json(&path, "value items").expect("read items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].known_archetype(), Some(Archetype::TaskElimination));
    assert!(items[1].known_archetype().is_none());

    cleanup(&path);
}

// ============================================================================
// SECTION: Parsing and Validation
// ============================================================================

#[test]
fn parse_json_names_the_snapshot_kind() {
    let err = parse_json::<Vec<ValueItem>>(b"{ not json", "value items").expect_err("bad json");
    assert!(err.to_string().starts_with("failed to parse value items"));
}

#[test]
fn ensure_spend_rejects_negative_and_nan() {
    assert!(ensure_spend("current spend", 0.0).is_ok());
    assert!(ensure_spend("current spend", 12_000.0).is_ok());
    let err = ensure_spend("proposed spend", -1.0).expect_err("negative spend");
    assert_eq!(err.to_string(), "proposed spend must be a finite, non-negative number");
    assert!(ensure_spend("proposed spend", f64::NAN).is_err());
}

#[test]
fn ensure_base_value_accepts_signed_totals() {
    assert!(ensure_base_value(250_000.0).is_ok());
    assert!(ensure_base_value(-12_500.0).is_ok());
    let err = ensure_base_value(f64::INFINITY).expect_err("infinite base value");
    assert_eq!(err.to_string(), "base value must be a finite number");
    assert!(ensure_base_value(f64::NAN).is_err());
}

#[test]
fn canonical_json_line_sorts_keys_and_terminates() {
    let items = sample_items();
    let report = ValuationReport {
        items: valuate_items(&items),
        total_annual_value: total_annual_value(&items),
    };
    let bytes = canonical_json_line(&report).expect("serialize report");
    assert_eq!(bytes.last(), Some(&b'\n'));
    let text = String::from_utf8(bytes).expect("utf-8 output");
    let items_at = text.find("\"items\"").expect("items key");
    let total_at = text.find("\"totalAnnualValue\"").expect("total key");
    assert!(items_at < total_at);
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

#[test]
fn render_valuations_lists_items_and_total() {
    let items = sample_items();
    let report = ValuationReport {
        items: valuate_items(&items),
        total_annual_value: total_annual_value(&items),
    };
    let text = render::render_valuations(&report);
    assert!(text.contains("Invoice triage  $240,000  [task_elimination, custom]"));
    assert!(text.contains("Unknown pattern  $0  [quantum_synergy"));
    assert!(text.ends_with("Total annual value: $240,000\n"));
}

#[test]
fn render_projection_reports_missing_roi() {
    let summary = summarize_projection(100_000.0, &Assumptions::default(), 0.0, 0.0);
    let text = render::render_projection(&summary);
    assert!(text.starts_with("Base annual value: $100,000\n"));
    assert!(text.contains("ROI multiple: n/a"));
    assert!(text.contains("Payback: n/a"));
}

#[test]
fn render_dedup_summarizes_counts() {
    let patterns = vec![
        PatternRef::new("hr-onboarding", Archetype::TaskElimination, 10_000.0),
        PatternRef::new("hr-onboarding", Archetype::TaskElimination, 10_000.0),
    ];
    let text = render::render_dedup(&deduplicate_patterns(&patterns));
    assert!(text.ends_with("2 patterns in, 1 removed, 1 kept\n"));
}

#[test]
fn render_archetypes_marks_task_based_entries() {
    let assumptions = Assumptions::default();
    let info = ArchetypeInfo {
        tag: Archetype::TaskElimination.as_str(),
        label: Archetype::TaskElimination.label(),
        dimension: Archetype::TaskElimination.dimension(),
        input_keys: Archetype::TaskElimination.input_keys().to_vec(),
        task_based: true,
        default_inputs: default_inputs(Archetype::TaskElimination, &assumptions),
    };
    let text = render::render_archetypes(&[info]);
    assert!(text.starts_with("task_elimination  Task Elimination  ["));
    assert!(text.contains("(task-based)"));
    assert!(text.contains("inputs: tasksPerMonth, minutesPerTask, hourlyRate"));
}
