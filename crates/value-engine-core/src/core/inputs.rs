// crates/value-engine-core/src/core/inputs.rs
// ============================================================================
// Module: Value Engine Inputs
// Description: Economic parameters, confidence tiers, and sparse input maps.
// Purpose: Model archetype parameters with an auditable zero-default accessor.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A value item carries a sparse map of named [`ValueInput`] parameters. The
//! map is read exclusively through [`InputMap::resolve`], which turns missing
//! and non-finite values into `0.0` so that formulas never observe `NaN` or
//! an absent key.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

// ============================================================================
// SECTION: Confidence Tiers
// ============================================================================

/// Trust level attached to a single economic input.
///
/// # Invariants
/// - Total order `Custom < Estimated < Benchmarked`, defined by [`ConfidenceTier::priority`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    /// User-typed value with no supporting evidence.
    #[default]
    Custom,
    /// System default within a documented range.
    Estimated,
    /// Derived from observed platform data.
    Benchmarked,
}

impl ConfidenceTier {
    /// All tiers from least to most trustworthy.
    pub const ALL: [Self; 3] = [Self::Custom, Self::Estimated, Self::Benchmarked];

    /// Returns the ordering priority (higher is more trustworthy).
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Custom => 0,
            Self::Estimated => 1,
            Self::Benchmarked => 2,
        }
    }

    /// Returns the stable wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Estimated => "estimated",
            Self::Benchmarked => "benchmarked",
        }
    }

    /// Returns the less trustworthy of two tiers.
    #[must_use]
    pub const fn weakest(self, other: Self) -> Self {
        if other.priority() < self.priority() { other } else { self }
    }
}

impl PartialOrd for ConfidenceTier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ConfidenceTier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

// ============================================================================
// SECTION: Value Inputs
// ============================================================================

/// One economic parameter of an archetype (for example `tasksPerMonth`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueInput {
    /// Raw numeric value as entered or defaulted (`null` or absent reads as `0`).
    #[serde(default, deserialize_with = "deserialize_nullable_number")]
    pub value: f64,
    /// Trust level of the value.
    #[serde(default)]
    pub confidence: ConfidenceTier,
    /// Optional provenance note (benchmark name, assumption key, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ValueInput {
    /// Creates an input with the given confidence and no source.
    #[must_use]
    pub const fn new(value: f64, confidence: ConfidenceTier) -> Self {
        Self {
            value,
            confidence,
            source: None,
        }
    }

    /// Creates a user-typed input.
    #[must_use]
    pub const fn custom(value: f64) -> Self {
        Self::new(value, ConfidenceTier::Custom)
    }

    /// Attaches a provenance note.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

// ============================================================================
// SECTION: Input Map
// ============================================================================

/// Sparse mapping from input key to [`ValueInput`].
///
/// # Invariants
/// - Keys are iterated in lexicographic order.
/// - [`InputMap::resolve`] is the only numeric accessor used by formulas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputMap(BTreeMap<String, ValueInput>);

impl InputMap {
    /// Creates an empty input map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts or replaces an input.
    pub fn insert(&mut self, key: impl Into<String>, input: ValueInput) -> Option<ValueInput> {
        self.0.insert(key.into(), input)
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, input: ValueInput) -> Self {
        self.insert(key, input);
        self
    }

    /// Returns the input for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ValueInput> {
        self.0.get(key)
    }

    /// Resolves `key` to a finite number, defaulting to `0.0` when the key is
    /// missing or its value is `NaN`/infinite.
    #[must_use]
    pub fn resolve(&self, key: &str) -> f64 {
        self.0.get(key).map_or(0.0, |input| finite_or_zero(input.value))
    }

    /// Returns true when no inputs are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of inputs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates inputs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueInput)> {
        self.0.iter().map(|(key, input)| (key.as_str(), input))
    }
}

impl FromIterator<(String, ValueInput)> for InputMap {
    fn from_iter<T: IntoIterator<Item = (String, ValueInput)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Deserializes an optional number, mapping `null` to `0.0`.
fn deserialize_nullable_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Maps non-finite numbers to `0.0`.
#[must_use]
pub const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
