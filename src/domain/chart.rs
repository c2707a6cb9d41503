use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::continuous::{Domain, resolve_domain};
use super::{bar, line};
use crate::error::{ChartError, Result};
use crate::number::FormatTag;

/// Chart family whose axis policy applies to a value series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Bars and columns: always clamped to zero.
    Bar,
    /// Lines: never clamped.
    Line,
    /// No chart policy; clamping is up to the caller.
    #[default]
    Generic,
}

impl ChartKind {
    /// Value-axis domain under this chart's policy. `clamp_at_zero` only
    /// affects [`ChartKind::Generic`].
    ///
    /// # Errors
    /// See [`resolve_domain`].
    pub fn value_domain(
        self,
        values: &[f64],
        format: Option<FormatTag>,
        clamp_at_zero: bool,
    ) -> Result<Domain> {
        match self {
            Self::Bar => bar::value_domain(values, format),
            Self::Line => line::y_domain(values, format),
            Self::Generic => resolve_domain(values, format, clamp_at_zero),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Generic => "generic",
        })
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bar" | "column" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            "generic" => Ok(Self::Generic),
            _ => Err(ChartError::InvalidInput(format!(
                "Unknown chart type: '{s}'. Expected bar, line or generic"
            ))),
        }
    }
}
