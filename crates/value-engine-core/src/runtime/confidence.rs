// crates/value-engine-core/src/runtime/confidence.rs
// ============================================================================
// Module: Value Engine Confidence Aggregation
// Description: Weakest-link confidence across an item's inputs.
// Purpose: Report how far a computed value can be trusted.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! A computation is only as trustworthy as its least trustworthy input. The
//! aggregate is the minimum tier present; an empty input set reports
//! [`ConfidenceTier::Custom`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ConfidenceTier;
use crate::core::InputMap;

// ============================================================================
// SECTION: Aggregation
// ============================================================================

/// Returns the lowest confidence tier present in `inputs`.
#[must_use]
pub fn aggregate_confidence(inputs: &InputMap) -> ConfidenceTier {
    inputs
        .iter()
        .map(|(_, input)| input.confidence)
        .reduce(ConfidenceTier::weakest)
        .unwrap_or(ConfidenceTier::Custom)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValueInput;

    #[test]
    fn empty_inputs_are_custom() {
        assert_eq!(aggregate_confidence(&InputMap::new()), ConfidenceTier::Custom);
    }

    #[test]
    fn all_benchmarked_stays_benchmarked() {
        let inputs = InputMap::new()
            .with("a", ValueInput::new(1.0, ConfidenceTier::Benchmarked))
            .with("b", ValueInput::new(2.0, ConfidenceTier::Benchmarked));
        assert_eq!(aggregate_confidence(&inputs), ConfidenceTier::Benchmarked);
    }

    #[test]
    fn one_estimated_input_drags_benchmarked_down() {
        let inputs = InputMap::new()
            .with("a", ValueInput::new(1.0, ConfidenceTier::Benchmarked))
            .with("b", ValueInput::new(2.0, ConfidenceTier::Estimated));
        assert_eq!(aggregate_confidence(&inputs), ConfidenceTier::Estimated);
    }
}
