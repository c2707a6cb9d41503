use std::path::Path;

use crate::config::{LoadResult, parse_config};
use crate::error::{ChartError, Result};
use crate::output::{ConfigShowReport, ConfigValidateReport, Report};

#[must_use]
pub fn run_config_show_impl(loaded: &LoadResult) -> Report {
    Report::ConfigShow(ConfigShowReport {
        source: loaded.source.clone(),
        config: loaded.config.clone(),
    })
}

/// Validate a configuration file.
///
/// # Errors
/// Returns a [`ChartError::Config`] if the file is missing, is not valid TOML,
/// has unknown keys or declares an unsupported version.
pub fn run_config_validate_impl(config_path: &Path) -> Result<Report> {
    if !config_path.exists() {
        return Err(ChartError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = std::fs::read_to_string(config_path).map_err(|source| ChartError::FileRead {
        path: config_path.to_path_buf(),
        source,
    })?;
    parse_config(&content).map_err(|e| match e {
        ChartError::TomlParse(inner) => {
            ChartError::Config(format!("{}: {}", config_path.display(), inner.message()))
        }
        other => other,
    })?;

    Ok(Report::ConfigValidate(ConfigValidateReport {
        path: config_path.to_path_buf(),
        valid: true,
    }))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
