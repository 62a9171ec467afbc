// crates/value-engine-core/src/runtime/realization.rs
// ============================================================================
// Module: Value Engine Realization Tracking
// Description: Compare projected value against observed automation activity.
// Purpose: Produce per-use-case realization rates, trends, and health status.
// Dependencies: crate::core, crate::runtime::valuation, serde, time
// ============================================================================

//! ## Overview
//! Realization compares run telemetry against what the linked value items
//! projected. Task-based archetypes carry a monthly run-count proxy, so their
//! realization rate is actual 30-day runs over projected runs, capped at
//! [`MAX_REALIZATION_RATE`]. Use cases with no countable proxy realize in
//! full when any run happened in the last 30 days and not at all otherwise.
//!
//! Health is recomputed from the rate on every call. A use case with no
//! telemetry rows is always [`HealthStatus::AtRisk`]: missing data is treated
//! as the worst case, not as neutral.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::core::UseCase;
use crate::core::UseCaseId;
use crate::core::ValueItem;
use crate::core::ZapRunCacheEntry;
use crate::runtime::formulas::MONTHS_PER_YEAR;
use crate::runtime::valuation::item_annual_value;

// ============================================================================
// SECTION: Thresholds
// ============================================================================

/// Upper bound on the realization rate (200%).
pub const MAX_REALIZATION_RATE: f64 = 2.0;
/// Minimum realization rate classified as healthy.
pub const HEALTHY_THRESHOLD: f64 = 0.8;
/// Minimum realization rate classified as warning.
pub const WARNING_THRESHOLD: f64 = 0.5;
/// Weekly-extrapolation ratio above which activity is increasing.
pub const TREND_INCREASING_RATIO: f64 = 1.15;
/// Weekly-extrapolation ratio below which activity is decreasing.
pub const TREND_DECREASING_RATIO: f64 = 0.85;
/// Days in the monthly telemetry window.
const MONTH_WINDOW_DAYS: f64 = 30.0;
/// Days in the weekly telemetry window.
const WEEK_WINDOW_DAYS: f64 = 7.0;

// ============================================================================
// SECTION: Realization Types
// ============================================================================

/// Direction of recent run activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunTrend {
    /// Last week's pace exceeds the 30-day pace by more than 15%.
    Increasing,
    /// Paces are within 15% of each other, or there were no runs.
    Stable,
    /// Last week's pace trails the 30-day pace by more than 15%.
    Decreasing,
}

impl RunTrend {
    /// Returns the stable wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Stable => "stable",
            Self::Decreasing => "decreasing",
        }
    }
}

/// Realization health classification.
///
/// # Invariants
/// - Derived from the realization rate on every computation; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Rate at or above [`HEALTHY_THRESHOLD`].
    Healthy,
    /// Rate at or above [`WARNING_THRESHOLD`] and below healthy.
    Warning,
    /// Rate below [`WARNING_THRESHOLD`], or no run data.
    AtRisk,
}

impl HealthStatus {
    /// Classifies a realization rate.
    #[must_use]
    pub fn from_rate(rate: f64) -> Self {
        if rate >= HEALTHY_THRESHOLD {
            Self::Healthy
        } else if rate >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::AtRisk
        }
    }

    /// Returns the stable wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::AtRisk => "at_risk",
        }
    }
}

/// Realization result for one use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRealized {
    /// Use case identifier.
    pub use_case_id: UseCaseId,
    /// Use case display name.
    pub use_case_name: String,
    /// Number of linked value items.
    pub item_count: usize,
    /// Number of telemetry rows (automation sources).
    pub source_count: usize,
    /// Sum of linked item annual values.
    pub projected_annual_value: f64,
    /// Projected monthly runs from task-based items.
    pub projected_runs_per_month: f64,
    /// Runs over the trailing 30 days across sources.
    pub actual_runs_last_30_days: u64,
    /// Runs over the trailing 7 days across sources.
    pub actual_runs_last_7_days: u64,
    /// True when at least one telemetry row exists.
    pub has_run_data: bool,
    /// Realized fraction of projected activity, in `[0, 2]`.
    pub realization_rate: f64,
    /// Value realized per month.
    pub realized_monthly_value: f64,
    /// Value realized per year.
    pub realized_annual_value: f64,
    /// Recent activity trend.
    pub trend: RunTrend,
    /// Health classification.
    pub health_status: HealthStatus,
    /// Lifetime success ratio, when any outcomes were recorded.
    pub success_rate: Option<f64>,
    /// Most recent run across sources.
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_run_at: Option<OffsetDateTime>,
}

/// Portfolio-level realization summary.
///
/// # Invariants
/// - `use_cases` is sorted by ascending realization rate (worst first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealizationSummary {
    /// Per-use-case results, worst first.
    pub use_cases: Vec<ValueRealized>,
    /// Sum of projected annual value.
    pub projected_annual_value: f64,
    /// Sum of realized annual value.
    pub realized_annual_value: f64,
    /// Sum of 30-day runs.
    pub total_runs_last_30_days: u64,
    /// Realized over projected annual value (0 when nothing is projected).
    pub overall_realization_rate: f64,
    /// Use cases classified healthy.
    pub healthy_count: usize,
    /// Use cases classified warning.
    pub warning_count: usize,
    /// Use cases classified at risk.
    pub at_risk_count: usize,
}

// ============================================================================
// SECTION: Realization
// ============================================================================

/// Computes realization for one use case from its linked items and the
/// telemetry rows attributed to it.
#[must_use]
pub fn compute_realization(
    use_case: &UseCase,
    linked_items: &[ValueItem],
    entries: &[ZapRunCacheEntry],
) -> ValueRealized {
    let projected_annual_value: f64 = linked_items.iter().map(item_annual_value).sum();
    let projected_runs_per_month = projected_runs_per_month(linked_items);
    let any_task_based = linked_items.iter().any(ValueItem::is_task_based);
    let runs_30 = sum_runs(entries, |entry| entry.runs_last_30_days);
    let runs_7 = sum_runs(entries, |entry| entry.runs_last_7_days);
    let has_run_data = !entries.is_empty();
    let projected_monthly_value = projected_annual_value / MONTHS_PER_YEAR;

    let (realization_rate, realized_monthly_value) = if !has_run_data {
        (0.0, 0.0)
    } else if projected_runs_per_month > 0.0 && any_task_based {
        let rate = (count_to_f64(runs_30) / projected_runs_per_month).min(MAX_REALIZATION_RATE);
        (rate, projected_monthly_value * rate)
    } else if runs_30 > 0 {
        (1.0, projected_monthly_value)
    } else {
        (0.0, 0.0)
    };

    let health_status = if has_run_data {
        HealthStatus::from_rate(realization_rate)
    } else {
        HealthStatus::AtRisk
    };

    ValueRealized {
        use_case_id: use_case.id.clone(),
        use_case_name: use_case.name.clone(),
        item_count: linked_items.len(),
        source_count: entries.len(),
        projected_annual_value,
        projected_runs_per_month,
        actual_runs_last_30_days: runs_30,
        actual_runs_last_7_days: runs_7,
        has_run_data,
        realization_rate,
        realized_monthly_value,
        realized_annual_value: realized_monthly_value * MONTHS_PER_YEAR,
        trend: run_trend(entries),
        health_status,
        success_rate: success_rate(entries),
        last_run_at: entries.iter().filter_map(|entry| entry.last_run_at).max(),
    }
}

/// Sums the run-count proxy of every task-based item.
#[must_use]
pub fn projected_runs_per_month(items: &[ValueItem]) -> f64 {
    items
        .iter()
        .filter_map(|item| {
            item.known_archetype()
                .and_then(|archetype| archetype.run_count_key())
                .map(|key| item.inputs.resolve(key))
        })
        .sum()
}

/// Classifies recent activity by extrapolating the 7-day window to 30 days.
#[must_use]
pub fn run_trend(entries: &[ZapRunCacheEntry]) -> RunTrend {
    let runs_30 = sum_runs(entries, |entry| entry.runs_last_30_days);
    if runs_30 == 0 {
        return RunTrend::Stable;
    }
    let runs_7 = sum_runs(entries, |entry| entry.runs_last_7_days);
    let projected_30 = count_to_f64(runs_7) * (MONTH_WINDOW_DAYS / WEEK_WINDOW_DAYS);
    let ratio = projected_30 / count_to_f64(runs_30);
    if ratio > TREND_INCREASING_RATIO {
        RunTrend::Increasing
    } else if ratio < TREND_DECREASING_RATIO {
        RunTrend::Decreasing
    } else {
        RunTrend::Stable
    }
}

/// Returns successful / (successful + failed) across rows, if any outcomes exist.
fn success_rate(entries: &[ZapRunCacheEntry]) -> Option<f64> {
    let successful = sum_runs(entries, |entry| entry.successful_runs);
    let failed = sum_runs(entries, |entry| entry.failed_runs);
    let outcomes = successful.saturating_add(failed);
    (outcomes > 0).then(|| count_to_f64(successful) / count_to_f64(outcomes))
}

// ============================================================================
// SECTION: Portfolio Summary
// ============================================================================

/// Computes realization for every use case and aggregates the portfolio.
///
/// Items and telemetry rows are linked to use cases by `use_case_id`; rows
/// for unknown use cases are ignored.
#[must_use]
pub fn summarize_realization(
    use_cases: &[UseCase],
    items: &[ValueItem],
    entries: &[ZapRunCacheEntry],
) -> RealizationSummary {
    let mut results: Vec<ValueRealized> = use_cases
        .iter()
        .map(|use_case| {
            let linked_items: Vec<ValueItem> = items
                .iter()
                .filter(|item| item.use_case_id.as_ref() == Some(&use_case.id))
                .cloned()
                .collect();
            let linked_entries: Vec<ZapRunCacheEntry> = entries
                .iter()
                .filter(|entry| entry.use_case_id == use_case.id)
                .cloned()
                .collect();
            compute_realization(use_case, &linked_items, &linked_entries)
        })
        .collect();
    results.sort_by(|left, right| left.realization_rate.total_cmp(&right.realization_rate));

    let projected_annual_value: f64 =
        results.iter().map(|result| result.projected_annual_value).sum();
    let realized_annual_value: f64 =
        results.iter().map(|result| result.realized_annual_value).sum();
    let total_runs_last_30_days =
        results.iter().fold(0_u64, |acc, result| acc.saturating_add(result.actual_runs_last_30_days));
    let count_status =
        |status: HealthStatus| results.iter().filter(|result| result.health_status == status).count();
    let healthy_count = count_status(HealthStatus::Healthy);
    let warning_count = count_status(HealthStatus::Warning);
    let at_risk_count = count_status(HealthStatus::AtRisk);

    RealizationSummary {
        projected_annual_value,
        realized_annual_value,
        total_runs_last_30_days,
        overall_realization_rate: if projected_annual_value == 0.0 {
            0.0
        } else {
            realized_annual_value / projected_annual_value
        },
        healthy_count,
        warning_count,
        at_risk_count,
        use_cases: results,
    }
}

/// Returns telemetry rows whose use case is not in `use_cases`.
#[must_use]
pub fn unattributed_entries<'a>(
    use_cases: &[UseCase],
    entries: &'a [ZapRunCacheEntry],
) -> Vec<&'a ZapRunCacheEntry> {
    entries
        .iter()
        .filter(|entry| !use_cases.iter().any(|use_case| use_case.id == entry.use_case_id))
        .collect()
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Sums a run counter across rows without overflowing.
fn sum_runs(entries: &[ZapRunCacheEntry], counter: impl Fn(&ZapRunCacheEntry) -> u64) -> u64 {
    entries.iter().fold(0_u64, |acc, entry| acc.saturating_add(counter(entry)))
}

/// Converts a run count to a float for ratio arithmetic.
#[allow(clippy::cast_precision_loss, reason = "Run counts stay far below 2^53.")]
const fn count_to_f64(count: u64) -> f64 {
    count as f64
}
