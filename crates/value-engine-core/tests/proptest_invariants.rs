//! Property-based invariant tests for the value engine core.
// crates/value-engine-core/tests/proptest_invariants.rs
// ============================================================================
// Module: Value Engine Property Tests
// Description: Randomized checks for engine-wide numeric invariants.
// Purpose: Ensure sentinel handling holds for arbitrary inputs.
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

use proptest::prelude::*;
use time::macros::datetime;
use value_engine_core::Archetype;
use value_engine_core::ConfidenceTier;
use value_engine_core::InputMap;
use value_engine_core::PatternRef;
use value_engine_core::UseCase;
use value_engine_core::ValueInput;
use value_engine_core::ValueItem;
use value_engine_core::ZapRunCacheEntry;
use value_engine_core::aggregate_confidence;
use value_engine_core::annual_value;
use value_engine_core::compute_realization;
use value_engine_core::deduplicate_patterns;
use value_engine_core::dimension_totals;
use value_engine_core::keys;
use value_engine_core::roi_multiple;
use value_engine_core::valuate;

// ============================================================================
// SECTION: Strategies
// ============================================================================

fn archetype_strategy() -> impl Strategy<Value = Archetype> {
    prop::sample::select(Archetype::ALL.to_vec())
}

fn tier_strategy() -> impl Strategy<Value = ConfidenceTier> {
    prop::sample::select(ConfidenceTier::ALL.to_vec())
}

fn any_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => 0.0 .. 1.0e6_f64,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
    ]
}

fn input_map_strategy(archetype: Archetype) -> impl Strategy<Value = InputMap> {
    let keys = archetype.input_keys();
    prop::collection::vec((any_number(), tier_strategy()), keys.len()).prop_map(move |values| {
        keys.iter()
            .zip(values)
            .map(|(key, (value, tier))| ((*key).to_string(), ValueInput::new(value, tier)))
            .collect()
    })
}

fn item_strategy() -> impl Strategy<Value = ValueItem> {
    archetype_strategy().prop_flat_map(|archetype| {
        (input_map_strategy(archetype), 0 .. 1000_u32).prop_map(move |(inputs, id)| {
            ValueItem::new(format!("item-{id}"), archetype, "generated").with_inputs(inputs)
        })
    })
}

fn pattern_strategy() -> impl Strategy<Value = PatternRef> {
    (
        prop::sample::select(vec!["sales", "ops", "it"]),
        0 .. 6_u8,
        archetype_strategy(),
        0.0 .. 1.0e5_f64,
    )
        .prop_map(|(department, slug, archetype, value)| {
            PatternRef::new(format!("{department}-{slug}"), archetype, value)
        })
}

// ============================================================================
// SECTION: Properties
// ============================================================================

proptest! {
    #[test]
    fn formulas_are_always_finite(archetype in archetype_strategy(), seed in any::<u64>()) {
        let mut inputs = InputMap::new();
        for (index, key) in archetype.input_keys().iter().enumerate() {
            let value = match (seed >> index) % 3 {
                0 => f64::NAN,
                1 => f64::NEG_INFINITY,
                _ => 42.0,
            };
            inputs.insert(*key, ValueInput::custom(value));
        }
        prop_assert!(annual_value(archetype, &inputs).is_finite());
    }

    #[test]
    fn manual_override_ignores_inputs(item in item_strategy(), manual in -1.0e6 .. 1.0e6_f64) {
        let overridden = item.with_manual_value(manual);
        prop_assert_eq!(valuate(&overridden).annual_value, manual);
    }

    #[test]
    fn confidence_is_minimum_tier(tiers in prop::collection::vec(tier_strategy(), 0 .. 8)) {
        let inputs: InputMap = tiers
            .iter()
            .enumerate()
            .map(|(index, tier)| (format!("k{index}"), ValueInput::new(1.0, *tier)))
            .collect();
        let expected = tiers.iter().copied().min().unwrap_or(ConfidenceTier::Custom);
        prop_assert_eq!(aggregate_confidence(&inputs), expected);
    }

    #[test]
    fn dimension_percentages_sum_to_hundred_or_zero(
        items in prop::collection::vec(item_strategy(), 0 .. 12)
    ) {
        let totals = dimension_totals(&items);
        let grand: f64 = totals.iter().map(|total| total.total).sum();
        let percent_sum: f64 = totals.iter().map(|total| total.percentage).sum();
        if grand == 0.0 {
            prop_assert!(totals.iter().all(|total| total.percentage == 0.0));
        } else {
            prop_assert!((percent_sum - 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn roi_is_none_exactly_when_spend_does_not_increase(
        total in 0.0 .. 1.0e7_f64,
        current in 0.0 .. 1.0e5_f64,
        proposed in 0.0 .. 1.0e5_f64,
    ) {
        let roi = roi_multiple(total, current, proposed);
        if proposed <= current {
            prop_assert!(roi.is_none());
        } else {
            let multiple = roi.unwrap();
            prop_assert!(multiple.is_finite() && multiple >= 0.0);
        }
    }

    #[test]
    fn realization_rate_never_exceeds_two(
        tasks in 0.0 .. 1.0e4_f64,
        runs_30 in 0 .. 10_000_000_u64,
        runs_7 in 0 .. 10_000_000_u64,
    ) {
        let use_case = UseCase::new("uc", "generated");
        let item = ValueItem::new("i", Archetype::TaskSimplification, "generated")
            .with_use_case("uc")
            .with_inputs(InputMap::new().with(keys::TASKS_PER_MONTH, ValueInput::custom(tasks)));
        let entry = ZapRunCacheEntry::new("z", "uc", datetime!(2026-01-01 00:00 UTC))
            .with_recent_runs(runs_30, runs_7);
        let result = compute_realization(&use_case, &[item], &[entry]);
        prop_assert!(result.realization_rate <= 2.0);
        prop_assert!(result.realization_rate >= 0.0);
    }

    #[test]
    fn dedup_is_idempotent(patterns in prop::collection::vec(pattern_strategy(), 0 .. 24)) {
        let once = deduplicate_patterns(&patterns);
        prop_assert_eq!(once.total_after, once.patterns.len());
        prop_assert_eq!(once.total_before, once.total_after + once.duplicates_removed);
        let twice = deduplicate_patterns(&once.patterns);
        prop_assert_eq!(twice.duplicates_removed, 0);
        prop_assert_eq!(twice.patterns, once.patterns);
    }
}
