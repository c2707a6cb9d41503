//! Loosely-typed values as they arrive from the statistics API.

use serde::{Deserialize, Serialize};

/// A value as delivered by the API: a number, a numeric string, free text,
/// a boolean flag, or nothing at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    #[default]
    Missing,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Numeric reading of the value, if it has one.
    ///
    /// Text is trimmed before parsing. Blank text, booleans and non-finite
    /// numbers have no numeric reading.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            _ => None,
        }
    }

    /// The value's string form, as it would be shown without formatting.
    #[must_use]
    pub fn display_string(&self) -> String {
        match self {
            Self::Missing => String::new(),
            Self::Bool(flag) => flag.to_string(),
            Self::Number(n) => number_to_string(*n),
            Self::Text(text) => text.clone(),
        }
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Shortest round-tripping decimal form of a number, without a trailing `.0`.
#[must_use]
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for RawValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for RawValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: Into<Self>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
