// crates/value-engine-core/src/core/telemetry.rs
// ============================================================================
// Module: Value Engine Run Telemetry
// Description: Use cases and cached automation run counts.
// Purpose: Model externally fetched usage telemetry consumed by realization.
// Dependencies: crate::core::identifiers, serde, time
// ============================================================================

//! ## Overview
//! Run telemetry is fetched by the caller from the automation platform and
//! cached per automation source. Several [`ZapRunCacheEntry`] rows may belong
//! to the same [`UseCase`]. The engine never refreshes these rows; staleness
//! is the caller's concern.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::core::identifiers::UseCaseId;
use crate::core::identifiers::ZapId;

// ============================================================================
// SECTION: Use Cases
// ============================================================================

/// Named unit of work aggregating value items and run telemetry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCase {
    /// Store-assigned identifier.
    pub id: UseCaseId,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl UseCase {
    /// Creates a use case.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: UseCaseId::new(id),
            name: name.into(),
        }
    }
}

// ============================================================================
// SECTION: Run Telemetry
// ============================================================================

/// Cached run counts for one automation source.
///
/// # Invariants
/// - Counts are taken at `fetched_at`; windows are trailing from that instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZapRunCacheEntry {
    /// Automation source identifier.
    pub zap_id: ZapId,
    /// Use case the source is attributed to.
    pub use_case_id: UseCaseId,
    /// Lifetime run count.
    #[serde(default)]
    pub total_runs: u64,
    /// Runs in the trailing 30 days.
    #[serde(default)]
    pub runs_last_30_days: u64,
    /// Runs in the trailing 7 days.
    #[serde(default)]
    pub runs_last_7_days: u64,
    /// Lifetime successful runs.
    #[serde(default)]
    pub successful_runs: u64,
    /// Lifetime failed runs.
    #[serde(default)]
    pub failed_runs: u64,
    /// Timestamp of the most recent run.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_run_at: Option<OffsetDateTime>,
    /// Timestamp the counts were fetched.
    #[serde(with = "time::serde::rfc3339")]
    pub fetched_at: OffsetDateTime,
}

impl ZapRunCacheEntry {
    /// Creates an entry with zeroed counts.
    #[must_use]
    pub fn new(
        zap_id: impl Into<String>,
        use_case_id: impl Into<String>,
        fetched_at: OffsetDateTime,
    ) -> Self {
        Self {
            zap_id: ZapId::new(zap_id),
            use_case_id: UseCaseId::new(use_case_id),
            total_runs: 0,
            runs_last_30_days: 0,
            runs_last_7_days: 0,
            successful_runs: 0,
            failed_runs: 0,
            last_run_at: None,
            fetched_at,
        }
    }

    /// Sets the trailing-window run counts.
    #[must_use]
    pub const fn with_recent_runs(mut self, last_30_days: u64, last_7_days: u64) -> Self {
        self.runs_last_30_days = last_30_days;
        self.runs_last_7_days = last_7_days;
        self
    }

    /// Sets lifetime outcome counts; `total_runs` becomes their sum.
    #[must_use]
    pub const fn with_outcomes(mut self, successful: u64, failed: u64) -> Self {
        self.successful_runs = successful;
        self.failed_runs = failed;
        self.total_runs = successful.saturating_add(failed);
        self
    }
}
