use crate::cli::IncrementArgs;
use crate::date::{
    compute_time_increment, date_from_time_value, infer_time_increment, sort_dates, unique_dates,
};
use crate::error::Result;
use crate::output::{IncrementReport, Report};

/// Infer the increment of a series of time codes.
///
/// Without `--strict` the dates are sorted and de-duplicated first.
///
/// # Errors
/// Returns an error for unsupported time codes, or for unsorted or duplicate
/// dates in strict mode.
pub fn run_increment_impl(args: &IncrementArgs) -> Result<Report> {
    let dates = args
        .codes
        .iter()
        .map(|code| date_from_time_value(code))
        .collect::<Result<Vec<_>>>()?;

    let (increment, dates) = if args.strict {
        (compute_time_increment(&dates)?, dates)
    } else {
        (infer_time_increment(&dates), unique_dates(&sort_dates(&dates)))
    };

    Ok(Report::Increment(IncrementReport {
        increment,
        dates: dates
            .iter()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .collect(),
        strict: args.strict,
    }))
}
