use crate::cli::MoeArgs;
use crate::error::{ChartError, Result};
use crate::number::{
    FormatTag, RawValue, aggregate_moes, determine_dataset_decimal_precision, format_number,
    round_to_precision,
};
use crate::output::{MoeReport, Report};

/// Combine independent margins of error, shown at the inputs' precision.
///
/// # Errors
/// Returns an error if any margin is not a finite number.
pub fn run_moe_impl(args: &MoeArgs) -> Result<Report> {
    if let Some(bad) = args.values.iter().find(|v| !v.is_finite()) {
        return Err(ChartError::InvalidInput(format!(
            "margins of error must be finite, got {bad}"
        )));
    }

    let moe = aggregate_moes(&args.values);
    let precision = determine_dataset_decimal_precision(&args.values);
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let rounded = round_to_precision(moe, precision as i32);

    Ok(Report::Moe(MoeReport {
        count: args.values.len(),
        moe,
        formatted: format_number(&RawValue::Number(rounded), Some(FormatTag::Moe)),
    }))
}
