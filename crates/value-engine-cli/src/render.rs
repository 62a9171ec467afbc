// crates/value-engine-cli/src/render.rs
// ============================================================================
// Module: Value Engine CLI Text Rendering
// Description: Plain-text renderers for command reports.
// Purpose: Produce human-readable summaries alongside canonical JSON output.
// Dependencies: value-engine-core
// ============================================================================

//! ## Overview
//! Each renderer turns a command report into a newline-terminated block of
//! text. Currency uses whole-dollar formatting and rates are shown as
//! percentages. Renderers are pure so they can be tested without stdout.

// ============================================================================
// SECTION: Imports
// ============================================================================

use value_engine_core::DedupResult;
use value_engine_core::ProjectionSummary;
use value_engine_core::RealizationSummary;
use value_engine_core::format_currency;
use value_engine_core::format_number;

use crate::ArchetypeInfo;
use crate::BreakdownReport;
use crate::ValuationReport;

// ============================================================================
// SECTION: Renderers
// ============================================================================

/// Renders per-item valuations and the portfolio total.
pub(crate) fn render_valuations(report: &ValuationReport) -> String {
    let mut output = String::new();
    for item in &report.items {
        output.push_str(&format!(
            "{}  {}  [{}, {}]\n    {}\n",
            item.name,
            format_currency(item.valuation.annual_value),
            item.archetype,
            item.valuation.confidence.as_str(),
            item.valuation.formula
        ));
    }
    output.push_str(&format!("Total annual value: {}\n", format_currency(report.total_annual_value)));
    output
}

/// Renders the dimension breakdown and confidence mix.
pub(crate) fn render_breakdown(report: &BreakdownReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("Grand total: {}\n", format_currency(report.grand_total)));
    output.push_str("By dimension:\n");
    for entry in &report.breakdown {
        output.push_str(&format!(
            "  {:<20} {:>14}  {:>6}%  ({} items)\n",
            entry.label,
            format_currency(entry.total),
            format_number(entry.percentage),
            entry.item_count
        ));
    }
    output.push_str("By confidence:\n");
    for entry in &report.confidence {
        output.push_str(&format!(
            "  {:<20} {:>14}  {:>6}%  ({} items)\n",
            entry.confidence.as_str(),
            format_currency(entry.total),
            format_number(entry.percentage),
            entry.item_count
        ));
    }
    output
}

/// Renders a projection schedule with totals.
pub(crate) fn render_projection(summary: &ProjectionSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Base annual value: {}\n", format_currency(summary.base_annual_value)));
    for year in &summary.years {
        output.push_str(&format!(
            "  Year {}: value {} (ramp {}%), investment {}, net {}, cumulative net {}\n",
            year.year,
            format_currency(year.value),
            format_number(year.realization_rate * 100.0),
            format_currency(year.investment),
            format_currency(year.net_value),
            format_currency(year.cumulative_net_value)
        ));
    }
    output.push_str(&format!(
        "Total value {}, investment {}, net {}\n",
        format_currency(summary.total_value),
        format_currency(summary.total_investment),
        format_currency(summary.total_net_value)
    ));
    let roi = summary
        .roi_multiple
        .map_or_else(|| "n/a".to_string(), |multiple| format!("{}x", format_number(multiple)));
    let payback = summary
        .payback_year
        .map_or_else(|| "n/a".to_string(), |year| format!("year {year}"));
    output.push_str(&format!("ROI multiple: {roi}\nPayback: {payback}\n"));
    output
}

/// Renders realization per use case, worst first.
pub(crate) fn render_realization(summary: &RealizationSummary) -> String {
    let mut output = String::new();
    for use_case in &summary.use_cases {
        output.push_str(&format!(
            "{}  {}%  {}  {}  realized {} of {}  ({} runs/30d)\n",
            use_case.use_case_name,
            format_number(use_case.realization_rate * 100.0),
            use_case.health_status.as_str(),
            use_case.trend.as_str(),
            format_currency(use_case.realized_annual_value),
            format_currency(use_case.projected_annual_value),
            use_case.actual_runs_last_30_days
        ));
    }
    output.push_str(&format!(
        "Overall: {}% realized ({} of {}), {} healthy, {} warning, {} at risk\n",
        format_number(summary.overall_realization_rate * 100.0),
        format_currency(summary.realized_annual_value),
        format_currency(summary.projected_annual_value),
        summary.healthy_count,
        summary.warning_count,
        summary.at_risk_count
    ));
    output
}

/// Renders surviving patterns and dedup counts.
pub(crate) fn render_dedup(result: &DedupResult) -> String {
    let mut output = String::new();
    for pattern in &result.patterns {
        output.push_str(&format!(
            "{}  {}  {}\n",
            pattern.pattern_id,
            pattern.archetype,
            format_currency(pattern.estimated_annual_value)
        ));
    }
    output.push_str(&format!(
        "{} patterns in, {} removed, {} kept\n",
        result.total_before, result.duplicates_removed, result.total_after
    ));
    output
}

/// Renders the archetype catalogue.
pub(crate) fn render_archetypes(archetypes: &[ArchetypeInfo]) -> String {
    let mut output = String::new();
    for info in archetypes {
        let marker = if info.task_based { " (task-based)" } else { "" };
        output.push_str(&format!(
            "{}  {}  [{}]{}\n    inputs: {}\n",
            info.tag,
            info.label,
            info.dimension.as_str(),
            marker,
            info.input_keys.join(", ")
        ));
    }
    output
}
