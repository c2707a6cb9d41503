use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ChartError;

/// Smallest calendar step consistently observed between consecutive points of
/// a time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeIncrement {
    Day,
    Month,
    Quarter,
    Year,
    /// Every `n` years, `n >= 2`.
    ///
    /// Build it through [`TimeIncrement::years`]. A hand-built `MultiYear(0)`
    /// or `MultiYear(1)` steps and displays as [`TimeIncrement::Year`].
    MultiYear(u32),
}

impl TimeIncrement {
    /// Increment of `n` years: `Year` for 1, `MultiYear(n)` above, `None` for 0.
    #[must_use]
    pub const fn years(n: u32) -> Option<Self> {
        match n {
            0 => None,
            1 => Some(Self::Year),
            n => Some(Self::MultiYear(n)),
        }
    }

    /// Number of years per step for year-based increments, at least 1.
    #[must_use]
    pub const fn year_step(self) -> Option<u32> {
        match self {
            Self::Year | Self::MultiYear(0 | 1) => Some(1),
            Self::MultiYear(n) => Some(n),
            Self::Day | Self::Month | Self::Quarter => None,
        }
    }
}

impl fmt::Display for TimeIncrement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => f.write_str("day"),
            Self::Month => f.write_str("month"),
            Self::Quarter => f.write_str("quarter"),
            Self::Year | Self::MultiYear(0 | 1) => f.write_str("year"),
            Self::MultiYear(n) => write!(f, "{n}year"),
        }
    }
}

impl FromStr for TimeIncrement {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            other => other
                .strip_suffix("year")
                .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|n| n.parse::<u32>().ok())
                .and_then(Self::years)
                .ok_or_else(|| ChartError::UnknownIncrement(s.to_string())),
        }
    }
}

impl Serialize for TimeIncrement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeIncrement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
