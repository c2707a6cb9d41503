use serde::Serialize;

/// Basic descriptive statistics for a value series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

/// Summarize `values`. An empty series yields all zeros.
#[must_use]
pub fn summarize(values: &[f64]) -> SummaryStatistics {
    if values.is_empty() {
        return SummaryStatistics::default();
    }

    let count = values.len();
    #[allow(clippy::cast_precision_loss)]
    let n = count as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;

    SummaryStatistics {
        count,
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        mean,
        std_dev: variance.sqrt(),
    }
}
