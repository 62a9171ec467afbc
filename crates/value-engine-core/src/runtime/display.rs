// crates/value-engine-core/src/runtime/display.rs
// ============================================================================
// Module: Value Engine Display Formatting
// Description: Number and currency rendering for computation traces.
// Purpose: Render literal inputs and rounded results deterministically.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Traces embed literal input values with comma grouping and up to six
//! decimals, and results as whole dollars. Summary figures (percentages,
//! multiples) keep two decimals. Rendering is locale-independent so traces
//! are stable across hosts.

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Decimal places kept when rendering summary figures.
const SUMMARY_DECIMALS: usize = 2;
/// Decimal places kept when rendering literal formula inputs.
const LITERAL_DECIMALS: usize = 6;

/// Formats a number with comma grouping and up to two decimals.
#[must_use]
pub fn format_number(value: f64) -> String {
    format_fixed(value, SUMMARY_DECIMALS)
}

/// Formats a formula input with comma grouping and up to six decimals, so
/// small rates such as `0.004` keep their literal value.
#[must_use]
pub fn format_literal(value: f64) -> String {
    format_fixed(value, LITERAL_DECIMALS)
}

/// Renders `value` with at most `decimals` places, trailing zeros trimmed.
fn format_fixed(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let mut out = String::new();
    if value < 0.0 && fixed.bytes().any(|byte| matches!(byte, b'1'..=b'9')) {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Formats a dollar amount rounded to whole dollars (`$1,234`, `-$50`).
#[must_use]
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let whole = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&whole))
}

/// Formats a dollar amount with literal precision (`$50`, `$12.5`, `$0.0125`).
#[must_use]
pub fn format_dollars(value: f64) -> String {
    let number = format_literal(value);
    number.strip_prefix('-').map_or_else(|| format!("${number}"), |abs| format!("-${abs}"))
}

/// Inserts commas between groups of three digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_group_and_trim() {
        assert_eq!(format_number(3000.0), "3,000");
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(1_234_567.5), "1,234,567.5");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(-0.001), "0");
        assert_eq!(format_number(999.999), "1,000");
    }

    #[test]
    fn currency_rounds_to_whole_dollars() {
        assert_eq!(format_currency(240_000.0), "$240,000");
        assert_eq!(format_currency(1_234.5), "$1,235");
        assert_eq!(format_currency(-50.2), "-$50");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-0.4), "$0");
    }

    #[test]
    fn dollars_keep_literal_precision() {
        assert_eq!(format_dollars(50.0), "$50");
        assert_eq!(format_dollars(12.5), "$12.5");
        assert_eq!(format_dollars(-3.0), "-$3");
        assert_eq!(format_dollars(0.0125), "$0.0125");
    }

    #[test]
    fn literals_keep_small_rates() {
        assert_eq!(format_literal(0.004), "0.004");
        assert_eq!(format_literal(0.000_015), "0.000015");
        assert_eq!(format_literal(0.35), "0.35");
        assert_eq!(format_literal(12_500.0), "12,500");
        assert_eq!(format_literal(-0.000_000_1), "0");
    }
}
