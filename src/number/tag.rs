use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ChartError;

/// Rendering policy selected for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatTag {
    /// Grouped number with the value's own decimal precision.
    #[default]
    Number,
    /// Grouped currency.
    Dollar,
    /// Raw value with a `%` suffix.
    Percent,
    /// English ordinal prefix (`21st-`).
    Ordinal,
    /// Free-form text.
    Annotation,
    /// No formatting at all.
    None,
    /// Margin of error (`±1.5`).
    Moe,
}

/// Every accepted spelling, lower-cased, mapped to its tag.
const ALIASES: &[(&str, FormatTag)] = &[
    ("number", FormatTag::Number),
    ("num", FormatTag::Number),
    ("commas", FormatTag::Number),
    ("dollar", FormatTag::Dollar),
    ("dol", FormatTag::Dollar),
    ("commas,dollar", FormatTag::Dollar),
    ("commas, dollar", FormatTag::Dollar),
    ("percent", FormatTag::Percent),
    ("pct", FormatTag::Percent),
    ("ordinal", FormatTag::Ordinal),
    ("annotation", FormatTag::Annotation),
    ("none", FormatTag::None),
    ("moe", FormatTag::Moe),
];

impl FormatTag {
    /// Canonical tag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Dollar => "dollar",
            Self::Percent => "percent",
            Self::Ordinal => "ordinal",
            Self::Annotation => "annotation",
            Self::None => "none",
            Self::Moe => "MOE",
        }
    }

    /// Percent-like formats anchor domains to a 0-100 scale.
    #[must_use]
    pub const fn is_percent(self) -> bool {
        matches!(self, Self::Percent)
    }
}

impl FromStr for FormatTag {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map(|(_, tag)| *tag)
            .ok_or_else(|| ChartError::UnknownFormatTag(s.to_string()))
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FormatTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FormatTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "tag_tests.rs"]
mod tests;
