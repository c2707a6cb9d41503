mod json;
mod report;
mod text;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use json::JsonFormatter;
pub use report::{
    ConfigShowReport, ConfigValidateReport, DeviationsReport, DomainReport, FormatReport,
    IncrementReport, LabelReport, MoeReport, PrepareReport, PreparedItem, Report,
};
pub use text::TextFormatter;

use crate::error::Result;

/// Renders a command report in one output format.
pub trait OutputFormatter {
    /// # Errors
    /// Returns an error if the report cannot be serialized.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
