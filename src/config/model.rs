use serde::{Deserialize, Serialize};

use crate::number::FormatTag;
use crate::output::OutputFormat;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Number formatting defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Tag used when a command is run without `--format`.
    #[serde(default)]
    pub default: FormatTag,

    /// Precision passed to the condensed formatter. Non-zero disables SI
    /// abbreviation for plain numbers.
    #[serde(default)]
    pub condensed_precision: u32,
}

/// Domain resolution defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DomainConfig {
    /// Clamp single-signed series to zero in the generic `domain` command.
    #[serde(default)]
    pub clamp_at_zero: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config schema version. Missing means the current version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub format: FormatConfig,

    #[serde(default)]
    pub domain: DomainConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
