//! Line chart axes.

use chrono::NaiveDateTime;

use super::continuous::{Domain, resolve_domain};
use crate::date::{epoch_millis, sort_dates};
use crate::error::{ChartError, Result};
use crate::number::FormatTag;

/// Pad used when a series has no gap to derive padding from.
const ONE_DAY_MS: i64 = 86_400_000;

/// Value axis for lines. Lines may float above zero.
///
/// # Errors
/// See [`resolve_domain`].
pub fn y_domain(values: &[f64], format: Option<FormatTag>) -> Result<Domain> {
    resolve_domain(values, format, false)
}

/// Time axis in epoch milliseconds.
///
/// With `add_padding` both ends are widened by half of the smallest gap
/// between consecutive dates, so the outermost points sit half a step in from
/// the edge. A series without a usable gap is widened by one day instead.
///
/// # Errors
/// Returns [`ChartError::InvalidInput`] for an empty series.
pub fn x_domain(dates: &[NaiveDateTime], add_padding: bool) -> Result<Domain> {
    let sorted = sort_dates(dates);
    let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
        return Err(ChartError::InvalidInput(
            "cannot compute a time domain for an empty series".to_string(),
        ));
    };

    let min_gap = sorted
        .windows(2)
        .map(|pair| epoch_millis(pair[1]) - epoch_millis(pair[0]))
        .filter(|&gap| gap > 0)
        .min();

    let padding = match (add_padding, min_gap) {
        (true, Some(gap)) => gap / 2,
        (true, None) => ONE_DAY_MS,
        (false, _) if first == last => ONE_DAY_MS,
        (false, _) => 0,
    };

    #[allow(clippy::cast_precision_loss)]
    let domain = Domain::new(
        (epoch_millis(first) - padding) as f64,
        (epoch_millis(last) + padding) as f64,
    );
    Ok(domain)
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
