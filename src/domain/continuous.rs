//! Padded numeric axis domains.

use serde::Serialize;

use crate::error::{ChartError, Result};
use crate::number::FormatTag;

/// Padding ticks are 5% of the raw domain.
const TICK_FRACTION: f64 = 0.05;

/// Minimum headroom on either side, as a fraction of the raw domain.
const CUSHION_FRACTION: f64 = 0.02;

/// Percent domains are anchored on `[0, 10^2]`.
const PERCENT_SCALE_DIGITS: f64 = 2.0;

/// Axis domain with finite bounds and `min < max`.
///
/// Only the resolvers in this module tree build domains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Callers guarantee `min < max`, both finite.
    pub(crate) const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Compute a padded axis domain for `values`.
///
/// Padding is anchored on the order of magnitude of the data (`[0, 100]` for
/// percentages) so that similar datasets get similar headroom. A series that
/// never crosses zero keeps zero as its baseline; with `clamp_at_zero` the
/// baseline is exactly zero.
///
/// # Errors
/// Returns [`ChartError::InvalidInput`] for an empty series or one containing
/// NaN or infinite values.
pub fn resolve_domain(
    values: &[f64],
    format: Option<FormatTag>,
    clamp_at_zero: bool,
) -> Result<Domain> {
    if values.is_empty() {
        return Err(ChartError::InvalidInput(
            "cannot compute a domain for an empty series".to_string(),
        ));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(ChartError::InvalidInput(format!(
            "domain values must be finite, got {bad}"
        )));
    }

    let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let is_percent = format.is_some_and(FormatTag::is_percent);

    if min_value == 0.0 && max_value == 0.0 {
        let max = if is_percent { 100.0 } else { 1.0 };
        return Ok(Domain::new(0.0, max));
    }

    let magnitude = values.iter().map(|v| v.abs()).fold(0.0, f64::max);
    let scale_digits = if is_percent {
        PERCENT_SCALE_DIGITS
    } else {
        // Keeps raw_max finite and the tick non-zero at the f64 extremes.
        magnitude
            .log10()
            .ceil()
            .clamp(f64::from(f64::MIN_10_EXP), f64::from(f64::MAX_10_EXP))
    };
    let raw_max = 10f64.powf(scale_digits);
    let tick = raw_max * TICK_FRACTION;
    let cushion = raw_max * CUSHION_FRACTION;

    let padded_max = saturate(((max_value / tick).ceil() * tick).max(max_value + cushion));
    let padded_min = saturate(((min_value / tick).floor() * tick).min(min_value - cushion));

    let min = if min_value >= 0.0 {
        if clamp_at_zero { 0.0 } else { padded_min.max(0.0) }
    } else {
        padded_min
    };
    let max = if max_value <= 0.0 {
        if clamp_at_zero { 0.0 } else { padded_max.min(0.0) }
    } else {
        padded_max
    };

    let is_valid = min.is_finite() && max.is_finite() && min < max;
    if !is_valid {
        return Err(ChartError::InvalidInput(format!(
            "values cannot be padded into a domain: [{min}, {max}]"
        )));
    }

    log::trace!("domain [{min}, {max}] for {} values (raw max {raw_max})", values.len());
    Ok(Domain::new(min, max))
}

/// Padding past `f64::MAX` lands on the largest finite value.
fn saturate(bound: f64) -> f64 {
    bound.clamp(f64::MIN, f64::MAX)
}

#[cfg(test)]
#[path = "continuous_tests.rs"]
mod tests;
