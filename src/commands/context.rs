use std::path::{Path, PathBuf};

use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::{ChartError, Result};
use crate::output::OutputFormat;
use crate::{EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR};

/// Load configuration honouring `--config` and `--no-config`.
///
/// # Errors
/// Returns an error if the selected config file cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    load_config_with(&FileConfigLoader::new(), config_path, no_config)
}

pub(crate) fn load_config_with<L: ConfigLoader>(
    loader: &L,
    config_path: Option<&Path>,
    no_config: bool,
) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult::defaults());
    }

    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// `--output` wins over the configured default.
#[must_use]
pub fn resolve_output_format(cli_format: Option<OutputFormat>, loaded: &LoadResult) -> OutputFormat {
    cli_format.unwrap_or(loaded.config.output.format)
}

#[must_use]
pub const fn exit_code_for(err: &ChartError) -> i32 {
    if err.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_INPUT_ERROR
    }
}

/// Read an input file, keeping the path in the error.
///
/// # Errors
/// Returns [`ChartError::FileRead`] if the file cannot be read.
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ChartError::FileRead {
        path: PathBuf::from(path),
        source,
    })
}

/// Print an error and its causes to stderr.
pub fn print_error(err: &ChartError) {
    eprintln!("Error: {err}");
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
