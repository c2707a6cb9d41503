use crate::cli::FormatArgs;
use crate::config::Config;
use crate::number::{RawValue, format_number, format_number_condensed};
use crate::output::{FormatReport, Report};

/// Format a single value. Never fails: values without a numeric reading are
/// echoed back.
#[must_use]
pub fn run_format_impl(args: &FormatArgs, config: &Config) -> Report {
    let format = args.format.unwrap_or(config.format.default);
    let value = RawValue::from(args.value.as_str());

    let output = match value.as_number() {
        Some(number) if args.condensed => {
            let precision = args.precision.unwrap_or(config.format.condensed_precision);
            format_number_condensed(number, Some(format), precision)
        }
        _ => format_number(&value, Some(format)),
    };

    Report::Format(FormatReport {
        input: args.value.clone(),
        format,
        condensed: args.condensed,
        output,
    })
}
