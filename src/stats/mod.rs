//! Small statistical aggregates for chart annotations.

mod deviation;
mod summary;

pub use deviation::{DeviationMark, deviations_in_range};
pub use summary::{SummaryStatistics, summarize};

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
