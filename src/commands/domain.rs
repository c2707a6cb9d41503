use crate::cli::DomainArgs;
use crate::config::Config;
use crate::domain::{ChartKind, is_diverging};
use crate::error::Result;
use crate::number::format_number_condensed;
use crate::output::{DomainReport, Report};
use crate::stats::summarize;

/// Compute the value-axis domain for `args.values`.
///
/// # Errors
/// Returns an error for an empty or non-finite series.
pub fn run_domain_impl(args: &DomainArgs, config: &Config) -> Result<Report> {
    let format = args.format.unwrap_or(config.format.default);
    let clamp_at_zero = match args.chart {
        ChartKind::Bar => true,
        ChartKind::Line => false,
        ChartKind::Generic => args.clamp || config.domain.clamp_at_zero,
    };

    let domain = args
        .chart
        .value_domain(&args.values, Some(format), clamp_at_zero)?;
    let precision = config.format.condensed_precision;
    log::debug!("{} chart domain [{}, {}]", args.chart, domain.min, domain.max);

    Ok(Report::Domain(DomainReport {
        chart: args.chart,
        format,
        clamp_at_zero,
        diverging: is_diverging(&args.values),
        domain,
        labels: [
            format_number_condensed(domain.min, Some(format), precision),
            format_number_condensed(domain.max, Some(format), precision),
        ],
        summary: summarize(&args.values),
    }))
}
