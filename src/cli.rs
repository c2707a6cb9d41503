use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::date::TimeIncrement;
use crate::domain::ChartKind;
use crate::number::FormatTag;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "chart-prep")]
#[command(author, version, about = "Prepare chart data: axis domains, time increments and labels")]
#[command(long_about = "Compute padded axis domains, infer time increments and format \
    labels for dashboard charts.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Invalid input\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a padded axis domain for a value series
    Domain(DomainArgs),

    /// Infer the time increment of a series of time codes
    Increment(IncrementArgs),

    /// Format a single value
    Format(FormatArgs),

    /// Render a human label for a time code
    Label(LabelArgs),

    /// Combine margins of error (root-sum-of-squares)
    Moe(MoeArgs),

    /// Standard deviation marks between a mean and a bound
    Deviations(DeviationsArgs),

    /// Prepare a JSON file of stats items for charting
    Prepare(PrepareArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct DomainArgs {
    /// Values of the series
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Format tag (number, dollar, percent, ...)
    #[arg(short, long)]
    pub format: Option<FormatTag>,

    /// Chart policy: bar, line or generic
    #[arg(long, default_value = "generic")]
    pub chart: ChartKind,

    /// Clamp single-signed series to zero (generic charts)
    #[arg(long)]
    pub clamp: bool,
}

#[derive(Args, Debug)]
pub struct IncrementArgs {
    /// Time codes (YYYY, YYYY-YYYY, YYYY-Qn, YYYY-MM, YYYY-MM-DD)
    #[arg(required = true)]
    pub codes: Vec<String>,

    /// Reject unsorted or duplicate dates instead of sorting them
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Value to format
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Format tag (number, dollar, percent, ordinal, annotation, none, moe)
    #[arg(short, long)]
    pub format: Option<FormatTag>,

    /// Abbreviate large magnitudes (25M, 1.5K)
    #[arg(long)]
    pub condensed: bool,

    /// Precision for condensed output; non-zero disables abbreviation of plain numbers
    #[arg(long)]
    pub precision: Option<u32>,
}

#[derive(Args, Debug)]
pub struct LabelArgs {
    /// Time code to label
    pub code: String,

    /// Label at this increment instead of the code's own granularity
    #[arg(long)]
    pub increment: Option<TimeIncrement>,

    /// Use full month names
    #[arg(long)]
    pub long: bool,
}

#[derive(Args, Debug)]
pub struct MoeArgs {
    /// Individual margins of error
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,
}

#[derive(Args, Debug)]
pub struct DeviationsArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub mean: f64,

    /// Bound the marks run toward (excluded)
    #[arg(long, allow_negative_numbers = true)]
    pub bound: f64,

    /// Distance between marks (one standard deviation)
    #[arg(long)]
    pub step: f64,
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// JSON file holding an array of stats items
    pub file: PathBuf,

    /// Chart policy: bar or line
    #[arg(long, default_value = "bar")]
    pub chart: ChartKind,

    /// Format tag (number, dollar, percent, ...)
    #[arg(short, long)]
    pub format: Option<FormatTag>,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Validate a configuration file
    Validate {
        /// Path to the configuration file
        #[arg(default_value = ".chart-prep.toml")]
        path: PathBuf,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
