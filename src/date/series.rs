//! Whole-series date analysis: ordering, de-duplication, increment inference.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDateTime};

use super::increment::TimeIncrement;
use crate::error::{ChartError, Result};
use crate::number::gcd;

/// Year spacing observed so far in an inference pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearCadence {
    /// No year gap seen yet.
    Unconstrained,
    /// Every observed gap is a multiple of `n` years.
    Every(i64),
    /// Months differ somewhere, so year spacing no longer applies.
    SubAnnual,
}

impl YearCadence {
    fn fold_year_gap(self, gap: i64) -> Self {
        match self {
            Self::Unconstrained | Self::Every(2..) if gap == 1 => Self::Every(1),
            Self::Unconstrained if gap > 0 => Self::Every(gap),
            Self::Every(n) if n > 1 && gap % n != 0 => Self::Every(gcd(n, gap)),
            other => other,
        }
    }
}

/// Stable sort into a new vector.
#[must_use]
pub fn sort_dates(dates: &[NaiveDateTime]) -> Vec<NaiveDateTime> {
    let mut sorted = dates.to_vec();
    sorted.sort();
    sorted
}

/// Drop repeated instants, keeping the first occurrence of each.
#[must_use]
pub fn unique_dates(dates: &[NaiveDateTime]) -> Vec<NaiveDateTime> {
    let mut seen = HashSet::with_capacity(dates.len());
    dates.iter().copied().filter(|date| seen.insert(*date)).collect()
}

/// Infer the time increment of a strictly increasing date series.
///
/// Fewer than two dates yield [`TimeIncrement::Year`].
///
/// # Errors
/// Returns [`ChartError::UnsortedDates`] when any date is not strictly after
/// the one before it.
pub fn compute_time_increment(dates: &[NaiveDateTime]) -> Result<TimeIncrement> {
    if let Some(pair) = dates.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(ChartError::UnsortedDates(format!(
            "{} is not before {}",
            pair[0], pair[1]
        )));
    }

    let mut cadence = YearCadence::Unconstrained;
    let mut increment = TimeIncrement::Year;

    for pair in dates.windows(2) {
        let (now, next) = (pair[0], pair[1]);

        if cadence != YearCadence::SubAnnual {
            cadence = cadence.fold_year_gap(i64::from(next.year() - now.year()));
        }

        if now.month0() != next.month0() {
            cadence = YearCadence::SubAnnual;
            increment = if increment != TimeIncrement::Month && now.month0() % 3 == next.month0() % 3 {
                TimeIncrement::Quarter
            } else {
                TimeIncrement::Month
            };
        }

        if now.day() != next.day() {
            log::debug!("day-level gap between {now} and {next}");
            return Ok(TimeIncrement::Day);
        }
    }

    let inferred = match cadence {
        YearCadence::Every(n) if n > 1 => u32::try_from(n)
            .ok()
            .and_then(TimeIncrement::years)
            .unwrap_or(increment),
        _ => increment,
    };
    log::debug!("inferred {inferred} increment from {} dates", dates.len());
    Ok(inferred)
}

/// Sort and de-duplicate `dates`, then infer their time increment.
#[must_use]
pub fn infer_time_increment(dates: &[NaiveDateTime]) -> TimeIncrement {
    let prepared = unique_dates(&sort_dates(dates));
    if prepared.len() < dates.len() {
        log::warn!(
            "dropped {} duplicate date(s) before increment inference",
            dates.len() - prepared.len()
        );
    }

    compute_time_increment(&prepared).unwrap_or(TimeIncrement::Year)
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;
