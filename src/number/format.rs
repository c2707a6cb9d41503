//! Label formatting for chart values and axis ticks.

use num_format::{Locale, ToFormattedString};

use super::tag::FormatTag;
use super::utils::significant_decimals;
use super::value::{RawValue, number_to_string};

/// Largest number of decimals rendered by the fixed-point formatters.
const MAX_DECIMALS: usize = 20;

/// SI prefixes from 10^0 to 10^24. Thousands render as `K` and billions as `B`.
const SI_PREFIXES: [&str; 9] = ["", "K", "M", "B", "T", "P", "E", "Z", "Y"];

/// Significant digits kept by the condensed formatter.
const CONDENSED_SIGNIFICANT_DIGITS: usize = 6;

/// Format a value for display according to `format`.
///
/// Missing values render as an empty string. Booleans and values without a
/// numeric reading are shown as-is, whatever the format. Without a format the
/// value is rendered as a grouped number.
#[must_use]
pub fn format_number(value: &RawValue, format: Option<FormatTag>) -> String {
    if value.is_missing() {
        return String::new();
    }

    let format = format.unwrap_or_default();
    if format == FormatTag::None {
        return value.display_string();
    }

    let Some(number) = value.as_number() else {
        return value.display_string();
    };

    match format {
        FormatTag::Ordinal => format_ordinal(number),
        FormatTag::Dollar => format_currency(number),
        FormatTag::Percent => format!("{}%", value.display_string()),
        FormatTag::Annotation | FormatTag::None => value.display_string(),
        FormatTag::Moe => {
            let decimals = significant_decimals(&value.display_string());
            format!("±{}", format_grouped(number, decimals))
        }
        FormatTag::Number => {
            let decimals = significant_decimals(&value.display_string());
            format_grouped(number, decimals)
        }
    }
}

/// Format an axis tick value, abbreviating large magnitudes (`25M`, `1.5K`).
///
/// Values below 1 are rendered as-is so small-scale ticks never pick up a
/// misleading prefix. For plain numbers a non-zero `precision` disables the
/// abbreviation.
#[must_use]
pub fn format_number_condensed(num: f64, format: Option<FormatTag>, precision: u32) -> String {
    let condensed = if num < 1.0 {
        number_to_string(num)
    } else {
        format_si(num)
    };

    match format {
        Some(FormatTag::Number) => {
            if precision == 0 {
                condensed
            } else {
                number_to_string(num)
            }
        }
        Some(FormatTag::Dollar) => format!("${condensed}"),
        _ => format_number(&RawValue::Number(num), format),
    }
}

/// `1` is left blank so the caller's own label reads naturally; everything
/// else gets an English suffix and a trailing hyphen (`2nd-`, `11th-`).
fn format_ordinal(n: f64) -> String {
    if (n - 1.0).abs() < f64::EPSILON {
        return String::new();
    }

    let last_digit = n % 10.0;
    let last_two = n % 100.0;
    let is = |value: f64, target: f64| (value - target).abs() < f64::EPSILON;

    let suffix = if is(last_digit, 1.0) && !is(last_two, 11.0) {
        "st"
    } else if is(last_digit, 2.0) && !is(last_two, 12.0) {
        "nd"
    } else if is(last_digit, 3.0) && !is(last_two, 13.0) {
        "rd"
    } else {
        "th"
    };

    format!("{}{suffix}-", number_to_string(n))
}

/// `$1,234.50`; negatives are wrapped in parentheses.
fn format_currency(n: f64) -> String {
    let grouped = format_grouped(n.abs(), 2);
    if n < 0.0 && grouped.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        format!("(${grouped})")
    } else {
        format!("${grouped}")
    }
}

/// Fixed-point rendering with comma thousands separators.
fn format_grouped(n: f64, decimals: usize) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let fixed = format!("{:.*}", decimals, n.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut output = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    let is_zero = fixed.bytes().all(|b| matches!(b, b'0' | b'.'));
    if n < 0.0 && !is_zero {
        output.push('-');
    }
    output.push_str(&group_integer(integer));
    if !fraction.is_empty() {
        output.push('.');
        output.push_str(fraction);
    }
    output
}

/// `1234567` -> `1,234,567`.
fn group_integer(digits: &str) -> String {
    digits.parse::<u128>().map_or_else(
        |_| group_thousands(digits),
        |n| n.to_formatted_string(&Locale::en),
    )
}

/// Grouping for integer parts wider than `u128` (magnitudes above ~3.4e38).
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// SI abbreviation with six significant digits and trailing zeros trimmed.
fn format_si(num: f64) -> String {
    if !num.is_finite() {
        return number_to_string(num);
    }

    let scientific = format!("{:.*e}", CONDENSED_SIGNIFICANT_DIGITS - 1, num);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return number_to_string(num);
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return number_to_string(num);
    };

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let prefix_index = (exponent.div_euclid(3)).clamp(0, 8) as usize;
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let integer_len = (exponent - prefix_index as i32 * 3 + 1).max(1) as usize;

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let mut rendered = if integer_len >= digits.len() {
        let mut whole = digits.clone();
        whole.extend(std::iter::repeat_n('0', integer_len - digits.len()));
        whole
    } else {
        let (integer, fraction) = digits.split_at(integer_len);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            integer.to_string()
        } else {
            format!("{integer}.{fraction}")
        }
    };

    rendered.push_str(SI_PREFIXES[prefix_index]);
    rendered
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
