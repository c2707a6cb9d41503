pub mod config;
pub mod context;
pub mod deviations;
pub mod domain;
pub mod format;
pub mod increment;
pub mod label;
pub mod moe;
pub mod prepare;

pub use config::{run_config_show_impl, run_config_validate_impl};
pub use context::{exit_code_for, load_config, print_error, resolve_output_format};
pub use deviations::run_deviations_impl;
pub use domain::run_domain_impl;
pub use format::run_format_impl;
pub use increment::run_increment_impl;
pub use label::run_label_impl;
pub use moe::run_moe_impl;
pub use prepare::run_prepare_impl;

use crate::cli::{Cli, Commands, ConfigAction};
use crate::config::LoadResult;
use crate::error::Result;
use crate::output::{OutputFormat, Report};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

/// Run the parsed command line and return the process exit code.
#[must_use]
pub fn run(cli: &Cli) -> i32 {
    // Validation reads its own file; a broken discovered config must not block it.
    if let Commands::Config(args) = &cli.command
        && let ConfigAction::Validate { path } = &args.action
    {
        let format = cli.output.unwrap_or_default();
        return match run_config_validate_impl(path).and_then(|report| emit(&report, format)) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                print_error(&e);
                EXIT_CONFIG_ERROR
            }
        };
    }

    let loaded = match load_config(cli.config.as_deref(), cli.no_config) {
        Ok(loaded) => loaded,
        Err(e) => {
            print_error(&e);
            return EXIT_CONFIG_ERROR;
        }
    };
    let format = resolve_output_format(cli.output, &loaded);

    match dispatch(cli, &loaded).and_then(|report| emit(&report, format)) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            exit_code_for(&e)
        }
    }
}

fn dispatch(cli: &Cli, loaded: &LoadResult) -> Result<Report> {
    let config = &loaded.config;
    match &cli.command {
        Commands::Domain(args) => run_domain_impl(args, config),
        Commands::Increment(args) => run_increment_impl(args),
        Commands::Format(args) => Ok(run_format_impl(args, config)),
        Commands::Label(args) => run_label_impl(args),
        Commands::Moe(args) => run_moe_impl(args),
        Commands::Deviations(args) => run_deviations_impl(args),
        Commands::Prepare(args) => run_prepare_impl(args, config),
        Commands::Config(args) => match &args.action {
            ConfigAction::Show => Ok(run_config_show_impl(loaded)),
            ConfigAction::Validate { path } => run_config_validate_impl(path),
        },
    }
}

fn emit(report: &Report, format: OutputFormat) -> Result<()> {
    let rendered = format.formatter().format(report)?;
    print!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
