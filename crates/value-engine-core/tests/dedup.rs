//! Pattern dedup tests for the value engine core.
// crates/value-engine-core/tests/dedup.rs
// ============================================================================
// Module: Pattern Dedup Tests
// Description: Exact and semantic duplicate removal across bundles.
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

use value_engine_core::Archetype;
use value_engine_core::PatternBundle;
use value_engine_core::PatternRef;
use value_engine_core::combine_bundles;
use value_engine_core::deduplicate_patterns;

fn ids(patterns: &[PatternRef]) -> Vec<&str> {
    patterns.iter().map(|pattern| pattern.pattern_id.as_str()).collect()
}

#[test]
fn semantic_overlap_keeps_highest_value() {
    let patterns = vec![
        PatternRef::new("sales-lead-routing", Archetype::TaskElimination, 10_000.0),
        PatternRef::new("sales-crm-sync", Archetype::TaskElimination, 40_000.0),
        PatternRef::new("sales-deal-desk", Archetype::ProcessAcceleration, 5_000.0),
    ];
    let result = deduplicate_patterns(&patterns);
    assert_eq!(ids(&result.patterns), vec!["sales-crm-sync", "sales-deal-desk"]);
    assert_eq!(result.total_before, 3);
    assert_eq!(result.total_after, 2);
    assert_eq!(result.duplicates_removed, 1);
}

#[test]
fn ties_keep_the_earliest_pattern() {
    let patterns = vec![
        PatternRef::new("ops-a", Archetype::ReportAutomation, 100.0),
        PatternRef::new("ops-b", Archetype::ReportAutomation, 100.0),
    ];
    assert_eq!(ids(&deduplicate_patterns(&patterns).patterns), vec!["ops-a"]);
}

#[test]
fn identifier_without_hyphen_is_its_own_department() {
    let patterns = vec![
        PatternRef::new("finance", Archetype::CashAcceleration, 1.0),
        PatternRef::new("finance-ar", Archetype::CashAcceleration, 2.0),
    ];
    let result = deduplicate_patterns(&patterns);
    assert_eq!(ids(&result.patterns), vec!["finance-ar"]);
}

#[test]
fn unknown_archetype_tags_group_by_raw_tag() {
    let patterns = vec![
        PatternRef::new("hr-a", "mystery", 1.0),
        PatternRef::new("hr-b", "mystery", 3.0),
        PatternRef::new("hr-c", "other_mystery", 2.0),
    ];
    let result = deduplicate_patterns(&patterns);
    assert_eq!(ids(&result.patterns), vec!["hr-b", "hr-c"]);
}

#[test]
fn dedup_is_idempotent() {
    let patterns = vec![
        PatternRef::new("sales-a", Archetype::TaskElimination, 1.0),
        PatternRef::new("sales-a", Archetype::TaskElimination, 1.0),
        PatternRef::new("sales-b", Archetype::TaskElimination, 5.0),
        PatternRef::new("it-a", Archetype::ToolConsolidation, 3.0),
    ];
    let once = deduplicate_patterns(&patterns);
    let twice = deduplicate_patterns(&once.patterns);
    assert_eq!(twice.duplicates_removed, 0);
    assert_eq!(twice.patterns, once.patterns);
}

#[test]
fn combine_bundles_flattens_in_order_before_dedup() {
    let bundles = vec![
        PatternBundle {
            bundle_id: "revops".to_string(),
            patterns: vec![
                PatternRef::new("sales-a", Archetype::LeadConversionLift, 1.0),
                PatternRef::new("support-a", Archetype::SupportDeflection, 2.0),
            ],
        },
        PatternBundle {
            bundle_id: "cx".to_string(),
            patterns: vec![
                PatternRef::new("support-a", Archetype::SupportDeflection, 2.0),
                PatternRef::new("support-b", Archetype::SupportDeflection, 9.0),
            ],
        },
    ];
    let result = combine_bundles(&bundles);
    assert_eq!(result.total_before, 4);
    assert_eq!(ids(&result.patterns), vec!["sales-a", "support-b"]);
    assert_eq!(result.duplicates_removed, 2);
}

#[test]
fn empty_input_is_empty_output() {
    let result = deduplicate_patterns(&[]);
    assert!(result.patterns.is_empty());
    assert_eq!(result.total_before, 0);
    assert_eq!(result.duplicates_removed, 0);
}
