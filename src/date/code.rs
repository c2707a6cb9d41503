//! Dashboard time codes: `2023`, `2020-2024`, `2023-Q3`, `2023-08`, `2023-08-15`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::item::{calendar_date, midpoint_of_date_range, month_name};
use crate::error::{ChartError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeCode {
    Year(i32),
    YearRange(i32, i32),
    Quarter(i32, u32),
    Month(i32, u32),
    Day(NaiveDate),
}

impl TimeCode {
    fn parse(code: &str) -> Result<Self> {
        let unsupported = || ChartError::UnsupportedTimeCode(code.to_string());
        let parts: Vec<&str> = code.trim().split('-').collect();

        match parts.as_slice() {
            [start, end] if is_year(start) && is_year(end) => {
                Ok(Self::YearRange(parse_year(start)?, parse_year(end)?))
            }
            [year] if is_year(year) => Ok(Self::Year(parse_year(year)?)),
            [year, quarter] if is_year(year) && quarter.starts_with(['Q', 'q']) => {
                let q = quarter[1..]
                    .parse::<u32>()
                    .ok()
                    .filter(|q| (1..=4).contains(q))
                    .ok_or_else(unsupported)?;
                Ok(Self::Quarter(parse_year(year)?, q))
            }
            [year, month] if is_year(year) && is_digits(month) => {
                let month = month
                    .parse::<u32>()
                    .ok()
                    .filter(|m| (1..=12).contains(m))
                    .ok_or_else(unsupported)?;
                Ok(Self::Month(parse_year(year)?, month))
            }
            [year, month, day] if is_year(year) && is_digits(month) && is_digits(day) => {
                let month = month.parse::<u32>().map_err(|_| unsupported())?;
                let day = day.parse::<u32>().map_err(|_| unsupported())?;
                NaiveDate::from_ymd_opt(parse_year(year)?, month, day)
                    .map(Self::Day)
                    .ok_or_else(unsupported)
            }
            _ => Err(unsupported()),
        }
    }

    fn to_date(self) -> NaiveDateTime {
        match self {
            Self::Year(year) => calendar_date(i64::from(year), 0, 1),
            Self::YearRange(start, end) => midpoint_of_date_range(
                calendar_date(i64::from(start), 0, 1),
                calendar_date(i64::from(end), 0, 1),
            ),
            Self::Quarter(year, q) => calendar_date(i64::from(year), i64::from((q - 1) * 3), 1),
            Self::Month(year, month) => calendar_date(i64::from(year), i64::from(month) - 1, 1),
            Self::Day(date) => date.and_time(NaiveTime::MIN),
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_year(s: &str) -> bool {
    s.len() == 4 && is_digits(s)
}

fn parse_year(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| ChartError::UnsupportedTimeCode(s.to_string()))
}

/// Parse a time code into the date it stands for.
///
/// Year ranges resolve to their midpoint, quarters to the first month of the
/// quarter, years and months to the first day.
///
/// # Errors
/// Returns [`ChartError::UnsupportedTimeCode`] for any other shape.
pub fn date_from_time_value(code: &str) -> Result<NaiveDateTime> {
    TimeCode::parse(code).map(TimeCode::to_date)
}

/// Human label for a time code. Codes that cannot be parsed are returned as-is.
#[must_use]
pub fn pretty_time_label_from_code(code: &str) -> String {
    match TimeCode::parse(code) {
        Ok(TimeCode::Year(_) | TimeCode::YearRange(..)) | Err(_) => code.to_string(),
        Ok(TimeCode::Quarter(year, q)) => format!("Q{q} {year}"),
        Ok(TimeCode::Month(year, month)) => {
            month_name(month, false).map_or_else(|| code.to_string(), |name| format!("{name} {year}"))
        }
        Ok(TimeCode::Day(date)) => date.format("%b %d, %Y").to_string(),
    }
}

#[cfg(test)]
#[path = "code_tests.rs"]
mod tests;
