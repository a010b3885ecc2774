#![forbid(unsafe_code)]

//! Display formatting policy and input sanitizers.
//!
//! The rendering rules the calculator's outputs follow:
//!
//! - currency shows 0 decimal digits for whole amounts, else 2, with
//!   thousands separators;
//! - percentages show 0 decimals at 10% and above, else 1 decimal with a
//!   trailing `.0` stripped.
//!
//! The sanitizers are the inverse direction: raw numbers typed into a
//! value prompt, coerced into something the counters and config accept.

/// Format a dollar amount with a fixed number of fraction digits.
///
/// Non-finite values render as zero.
#[must_use]
pub fn currency(value: f64, digits: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.digits$}", value.abs());

    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 2);
    out.push_str(sign);
    out.push('$');
    for (i, ch) in int_part.char_indices() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format a dollar amount: 0 fraction digits when whole, else 2.
#[must_use]
pub fn currency_smart(value: f64) -> String {
    let digits = if value.is_finite() && value.fract() == 0.0 {
        0
    } else {
        2
    };
    currency(value, digits)
}

/// Format a percentage with a fixed number of fraction digits.
#[must_use]
pub fn percent(value: f64, digits: usize) -> String {
    format!("{value:.digits$}%")
}

/// Format an observed conversion percentage.
///
/// 0 decimals at 10% and above; below that, 1 decimal with a trailing
/// `.0` stripped.
#[must_use]
pub fn ratio_percent(value: f64) -> String {
    let rounded = if value >= 10.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    };
    let trimmed = rounded.strip_suffix(".0").unwrap_or(&rounded);
    format!("{trimmed}%")
}

/// Coerce prompt input into a counter value: non-finite becomes 0,
/// fractions floor, negatives clamp to 0.
#[must_use]
pub fn to_count(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.floor().max(0.0) as u32
}

/// Round to a fixed number of decimal places.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(5000.0, 0), "$5,000");
        assert_eq!(currency(1234567.0, 0), "$1,234,567");
        assert_eq!(currency(999.0, 0), "$999");
    }

    #[test]
    fn currency_fixed_digits() {
        assert_eq!(currency(149.0, 2), "$149.00");
        assert_eq!(currency(1490.5, 2), "$1,490.50");
    }

    #[test]
    fn currency_negative() {
        assert_eq!(currency(-75.5, 2), "-$75.50");
    }

    #[test]
    fn currency_non_finite_is_zero() {
        assert_eq!(currency(f64::NAN, 0), "$0");
    }

    #[test]
    fn currency_smart_drops_decimals_for_whole_amounts() {
        assert_eq!(currency_smart(5000.0), "$5,000");
        assert_eq!(currency_smart(74.25), "$74.25");
        assert_eq!(currency_smart(0.0), "$0");
    }

    #[test]
    fn percent_fixed_digits() {
        assert_eq!(percent(25.0, 0), "25%");
        assert_eq!(percent(33.333, 1), "33.3%");
    }

    #[test]
    fn ratio_percent_whole_at_ten_and_above() {
        assert_eq!(ratio_percent(33.33), "33%");
        assert_eq!(ratio_percent(10.0), "10%");
    }

    #[test]
    fn ratio_percent_one_decimal_below_ten() {
        assert_eq!(ratio_percent(7.5), "7.5%");
        assert_eq!(ratio_percent(9.96), "10%"); // rounds to 10.0, .0 stripped
    }

    #[test]
    fn ratio_percent_strips_trailing_zero() {
        assert_eq!(ratio_percent(7.0), "7%");
        assert_eq!(ratio_percent(0.0), "0%");
    }

    #[test]
    fn to_count_sanitizes() {
        assert_eq!(to_count(12.9), 12);
        assert_eq!(to_count(-3.0), 0);
        assert_eq!(to_count(f64::NAN), 0);
        assert_eq!(to_count(f64::INFINITY), 0);
    }

    #[test]
    fn round_to_decimals_rounds_half_away() {
        assert_eq!(round_to_decimals(74.256, 2), 74.26);
        assert_eq!(round_to_decimals(74.254, 2), 74.25);
        assert_eq!(round_to_decimals(74.0, 0), 74.0);
    }
}
