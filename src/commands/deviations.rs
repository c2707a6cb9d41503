use crate::cli::DeviationsArgs;
use crate::error::Result;
use crate::output::{DeviationsReport, Report};
use crate::stats::deviations_in_range;

/// # Errors
/// Returns an error for a non-positive step or non-finite bounds.
pub fn run_deviations_impl(args: &DeviationsArgs) -> Result<Report> {
    let marks = deviations_in_range(args.mean, args.bound, args.step)?;

    Ok(Report::Deviations(DeviationsReport {
        mean: args.mean,
        bound: args.bound,
        step: args.step,
        marks,
    }))
}
