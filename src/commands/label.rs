use crate::cli::LabelArgs;
use crate::date::{date_from_time_value, pretty_time_label, pretty_time_label_from_code};
use crate::error::Result;
use crate::output::{LabelReport, Report};

/// Label a time code, at its own granularity or at `--increment`.
///
/// # Errors
/// Returns an error only when `--increment` is given and the code cannot be
/// parsed; otherwise unknown codes are labelled as-is.
pub fn run_label_impl(args: &LabelArgs) -> Result<Report> {
    let parsed = date_from_time_value(&args.code);

    let (date, label) = match args.increment {
        Some(increment) => {
            let date = parsed?;
            (Some(date), pretty_time_label(date, increment, args.long))
        }
        None => (parsed.ok(), pretty_time_label_from_code(&args.code)),
    };

    Ok(Report::Label(LabelReport {
        code: args.code.clone(),
        date: date.map(|date| date.format("%Y-%m-%d").to_string()),
        increment: args.increment,
        label,
    }))
}
