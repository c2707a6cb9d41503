use serde::Serialize;

use crate::error::{ChartError, Result};

/// Upper bound on the number of marks produced for a single range.
const MAX_MARKS: f64 = 10_000.0;

/// A reference line `n` standard deviations away from the mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviationMark {
    pub label: String,
    pub value: f64,
}

/// Reference marks every `step` from `mean` toward `bound`.
///
/// Marks are labelled `1σ`, `2σ`, ... (`-1σ`, ... below the mean). The mean
/// itself and `bound` are excluded. Marks below the mean are returned nearest
/// to `bound` first so that both directions read bottom to top.
///
/// # Errors
/// Returns [`ChartError::InvalidInput`] when `step` is not a positive finite
/// number, when `mean` or `bound` is not finite, or when the range would
/// produce an unreasonable number of marks.
pub fn deviations_in_range(mean: f64, bound: f64, step: f64) -> Result<Vec<DeviationMark>> {
    if !(step.is_finite() && step > 0.0) {
        return Err(ChartError::InvalidInput(format!(
            "deviation step must be positive, got {step}"
        )));
    }
    if !mean.is_finite() || !bound.is_finite() {
        return Err(ChartError::InvalidInput(
            "mean and bound must be finite".to_string(),
        ));
    }

    let below = mean > bound;
    let count = ((bound - mean).abs() / step).ceil();
    if count > MAX_MARKS {
        return Err(ChartError::InvalidInput(format!(
            "step {step} yields more than {MAX_MARKS} marks between {mean} and {bound}"
        )));
    }

    let signed_step = if below { -step } else { step };
    let sign = if below { "-" } else { "" };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = count as usize;

    let mut marks: Vec<DeviationMark> = (1..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let offset = signed_step * i as f64;
            DeviationMark {
                label: format!("{sign}{i}σ"),
                value: mean + offset,
            }
        })
        .collect();

    if below {
        marks.reverse();
    }
    Ok(marks)
}
