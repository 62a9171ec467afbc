// crates/value-engine-core/src/core/identifiers.rs
// ============================================================================
// Module: Value Engine Identifiers
// Description: Opaque identifiers for value items, use cases, and patterns.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Identifiers are issued by the external record store and are opaque to the
//! engine. They serialize as plain strings on the wire; no normalization or
//! validation is applied here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Declares an opaque string identifier newtype.
macro_rules! string_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        ///
        /// # Invariants
        /// - Opaque UTF-8 string; no normalization or validation is applied by this type.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

string_identifier!(
    /// Value item identifier assigned by the record store.
    ValueItemId
);

string_identifier!(
    /// Use case identifier linking value items and run telemetry.
    UseCaseId
);

string_identifier!(
    /// Automation source identifier for run telemetry rows.
    ZapId
);

string_identifier!(
    /// Pattern template identifier (`<department>-<slug>` by convention).
    PatternId
);

impl PatternId {
    /// Returns the department prefix: the text before the first hyphen, or
    /// the whole identifier when it contains no hyphen.
    #[must_use]
    pub fn department(&self) -> &str {
        self.0.split_once('-').map_or(self.0.as_str(), |(department, _)| department)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit unwraps for clarity."
    )]

    use super::*;

    #[test]
    fn department_is_prefix_before_first_hyphen() {
        assert_eq!(PatternId::new("sales-lead-routing").department(), "sales");
        assert_eq!(PatternId::new("finance").department(), "finance");
        assert_eq!(PatternId::new("-orphan").department(), "");
    }

    #[test]
    fn identifiers_serialize_as_plain_strings() {
        let id = UseCaseId::new("uc-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"uc-1\"");
    }
}
