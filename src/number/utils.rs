//! Small numeric helpers shared by the formatter, the domain resolver and the
//! increment engine.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Number of values inspected when estimating dataset precision.
const PRECISION_SAMPLE_SIZE: usize = 8;

/// Count the digits after the decimal point in a numeric string.
///
/// `"0.0"` -> 1, `"0.985"` -> 3, `"12"` -> 0. Anything without a `.` yields 0.
#[must_use]
pub fn significant_decimals(number: &str) -> usize {
    let mut parts = number.split('.');
    parts.next();
    parts.last().map_or(0, str::len)
}

/// Round to `precision` decimal places. Halves round toward positive infinity.
#[must_use]
pub fn round_to_precision(number: f64, precision: i32) -> f64 {
    let normalizer = 10f64.powi(precision);
    (number * normalizer + 0.5).floor() / normalizer
}

/// Estimate the number of decimals used across a dataset.
///
/// Datasets of up to eight values are inspected in full. Larger ones are
/// approximated from a uniform random sample of eight values, so the result is
/// not deterministic and may undercount when only a few values carry extra
/// decimals.
#[must_use]
pub fn determine_dataset_decimal_precision(data: &[f64]) -> usize {
    determine_dataset_decimal_precision_with_rng(data, &mut rand::rng())
}

/// [`determine_dataset_decimal_precision`] with a caller-supplied random source.
pub fn determine_dataset_decimal_precision_with_rng<R: Rng + ?Sized>(
    data: &[f64],
    rng: &mut R,
) -> usize {
    let decimals = |num: &f64| significant_decimals(&num.to_string());

    if data.len() <= PRECISION_SAMPLE_SIZE {
        return data.iter().map(decimals).max().unwrap_or(0);
    }

    data.choose_multiple(rng, PRECISION_SAMPLE_SIZE)
        .map(decimals)
        .max()
        .unwrap_or(0)
}

/// Combine independent margins of error (root-sum-of-squares).
#[must_use]
pub fn aggregate_moes(data: &[f64]) -> f64 {
    data.iter().map(|moe| moe * moe).sum::<f64>().sqrt()
}

#[must_use]
pub fn sum(data: &[f64]) -> f64 {
    data.iter().sum()
}

/// Greatest common divisor of two whole numbers.
///
/// Returns `a` unchanged when `b <= 0`.
#[must_use]
pub const fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b > 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
