use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dates must be sorted and unique: {0}")]
    UnsortedDates(String),

    #[error("Unsupported time code: '{0}'. Expected YYYY, YYYY-YYYY, YYYY-Qn, YYYY-MM or YYYY-MM-DD")]
    UnsupportedTimeCode(String),

    #[error("Unknown format tag: '{0}'")]
    UnknownFormatTag(String),

    #[error("Unknown time increment: '{0}'")]
    UnknownIncrement(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChartError {
    /// Whether this error originates from configuration rather than chart data.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::TomlParse(_))
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
