//! Simple stats items as served by the statistics API.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::number::RawValue;

/// One data point of a simple chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatItem {
    pub description: String,

    #[serde(default)]
    pub value: RawValue,

    /// Margin of error, as delivered (a numeric string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moe: Option<String>,

    /// Series key for clustered bars and multi-line charts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_significance: Option<String>,

    /// Time code (`2023`, `2023-Q3`, `2023-08-15`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl StatItem {
    #[must_use]
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.as_number()
    }

    /// Margin of error as a number, if present and numeric.
    #[must_use]
    pub fn moe_value(&self) -> Option<f64> {
        self.moe
            .as_deref()
            .and_then(|moe| RawValue::from(moe).as_number())
    }
}

/// Parse a JSON array of stats items.
///
/// # Errors
/// Returns an error if `json` is not an array of items.
pub fn parse_items(json: &str) -> Result<Vec<StatItem>> {
    Ok(serde_json::from_str(json)?)
}
