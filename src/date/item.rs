//! Calendar math on a single date.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use super::increment::TimeIncrement;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Midnight on `day` of zero-based `month0` in `year`.
///
/// Out-of-range months and days roll over into the following (or preceding)
/// months and years, so `(2023, 12, 1)` is 2024-01-01 and `(2023, 0, 32)` is
/// 2023-02-01. Dates beyond the representable range saturate.
#[must_use]
pub fn calendar_date(year: i64, month0: i64, day: i64) -> NaiveDateTime {
    let year = year + month0.div_euclid(12);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let month = month0.rem_euclid(12) as u32 + 1;

    i32::try_from(year)
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, month, 1))
        .and_then(|first| first.checked_add_signed(TimeDelta::days(day - 1)))
        .map_or(NaiveDateTime::MAX, |date| date.and_time(NaiveTime::MIN))
}

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn epoch_millis(date: NaiveDateTime) -> i64 {
    date.and_utc().timestamp_millis()
}

/// Inverse of [`epoch_millis`]; saturates outside the representable range.
#[must_use]
pub fn from_epoch_millis(millis: i64) -> NaiveDateTime {
    DateTime::from_timestamp_millis(millis).map_or(
        if millis < 0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        },
        |date| date.naive_utc(),
    )
}

/// The date field that changes from one step of `increment` to the next.
///
/// Year for yearly increments, zero-based month for month and quarter, day of
/// month for day. Without an increment the full instant in epoch milliseconds
/// is returned.
#[must_use]
pub fn relevant_date_component(date: NaiveDateTime, increment: Option<TimeIncrement>) -> i64 {
    match increment {
        Some(TimeIncrement::Year | TimeIncrement::MultiYear(_)) => i64::from(date.year()),
        Some(TimeIncrement::Month | TimeIncrement::Quarter) => i64::from(date.month0()),
        Some(TimeIncrement::Day) => i64::from(date.day()),
        None => epoch_millis(date),
    }
}

/// Advance `date` by exactly one step of `increment`.
///
/// Month, quarter and year steps land on the first of the month; a day step
/// lands on midnight of the next day. Without an increment a single
/// millisecond is added.
#[must_use]
pub fn add_increment_to_date(date: NaiveDateTime, increment: Option<TimeIncrement>) -> NaiveDateTime {
    let year = i64::from(date.year());
    let month0 = i64::from(date.month0());

    match increment {
        Some(step @ (TimeIncrement::Year | TimeIncrement::MultiYear(_))) => {
            let years = step.year_step().map_or(1, i64::from);
            calendar_date(year + years, month0, 1)
        }
        Some(TimeIncrement::Month) => calendar_date(year, month0 + 1, 1),
        Some(TimeIncrement::Quarter) => calendar_date(year, month0 + 3, 1),
        Some(TimeIncrement::Day) => calendar_date(year, month0, i64::from(date.day()) + 1),
        None => date
            .checked_add_signed(TimeDelta::milliseconds(1))
            .unwrap_or(NaiveDateTime::MAX),
    }
}

/// Whether `second` is exactly one `increment` after `first`.
#[must_use]
pub fn are_dates_consecutive(
    first: NaiveDateTime,
    second: NaiveDateTime,
    increment: TimeIncrement,
) -> bool {
    second == add_increment_to_date(first, Some(increment))
}

#[must_use]
pub fn are_dates_equal(first: NaiveDateTime, second: NaiveDateTime) -> bool {
    first == second
}

/// Representative point of a date range.
///
/// Ranges spanning whole years collapse to January 1 of the middle year, or
/// July 1 when the span is odd. Shorter ranges use the exact midpoint.
#[must_use]
pub fn midpoint_of_date_range(start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime {
    let start_year = i64::from(start.year());
    let end_year = i64::from(end.year());

    if end_year > start_year {
        let span = end_year - start_year;
        let midpoint_year = (start_year + end_year).div_euclid(2);
        let month0 = if span % 2 == 1 { 6 } else { 0 };
        return calendar_date(midpoint_year, month0, 1);
    }

    let start_ms = epoch_millis(start);
    let end_ms = epoch_millis(end);
    from_epoch_millis(start_ms + (end_ms - start_ms) / 2)
}

/// English month name for a one-based month number.
#[must_use]
pub fn month_name(month: u32, short: bool) -> Option<&'static str> {
    let name = MONTH_NAMES.get(month.checked_sub(1)? as usize)?;
    Some(if short { &name[..3] } else { name })
}

#[must_use]
pub fn month_name_from_date(date: NaiveDateTime, short: bool) -> &'static str {
    let name = MONTH_NAMES[date.month0() as usize];
    if short { &name[..3] } else { name }
}

/// Axis label for `date` at the granularity of `increment`.
///
/// `long` only affects month labels: `July 2023` instead of `Jul '23`.
#[must_use]
pub fn pretty_time_label(date: NaiveDateTime, increment: TimeIncrement, long: bool) -> String {
    match increment {
        TimeIncrement::Year | TimeIncrement::MultiYear(_) => date.year().to_string(),
        TimeIncrement::Quarter => format!("Q{} {}", date.month0() / 3 + 1, date.year()),
        TimeIncrement::Month if long => date.format("%B %Y").to_string(),
        TimeIncrement::Month => date.format("%b '%y").to_string(),
        TimeIncrement::Day => date.format("%b %d, %y").to_string(),
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
