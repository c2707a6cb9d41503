use std::fmt::Write;

use crate::error::{ChartError, Result};
use crate::number::number_to_string;

use super::OutputFormatter;
use super::report::{ConfigShowReport, DeviationsReport, DomainReport, PrepareReport, Report};

/// Plain `key: value` lines for terminals and shell pipelines.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let text = match report {
            Report::Domain(domain) => format_domain(domain),
            Report::Increment(report) => format!("{}\n", report.increment),
            Report::Format(report) => format!("{}\n", report.output),
            Report::Label(report) => format!("{}\n", report.label),
            Report::Moe(report) => format!("{}\n", report.formatted),
            Report::Deviations(report) => format_deviations(report),
            Report::Prepare(report) => format_prepare(report),
            Report::ConfigShow(report) => format_config_show(report)?,
            Report::ConfigValidate(report) => {
                format!("Configuration is valid: {}\n", report.path.display())
            }
        };
        Ok(text)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn format_domain(report: &DomainReport) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "domain: [{}, {}]",
        number_to_string(report.domain.min),
        number_to_string(report.domain.max)
    );
    let _ = writeln!(output, "labels: {} .. {}", report.labels[0], report.labels[1]);
    let _ = writeln!(output, "chart: {}", report.chart);
    let _ = writeln!(output, "format: {}", report.format);
    let _ = writeln!(output, "diverging: {}", yes_no(report.diverging));
    let _ = writeln!(
        output,
        "values: {} (min {}, max {}, mean {})",
        report.summary.count,
        number_to_string(report.summary.min),
        number_to_string(report.summary.max),
        number_to_string(report.summary.mean)
    );
    output
}

fn format_deviations(report: &DeviationsReport) -> String {
    let mut output = String::new();
    for mark in &report.marks {
        let _ = writeln!(output, "{}\t{}", mark.label, number_to_string(mark.value));
    }
    output
}

fn format_prepare(report: &PrepareReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "chart: {}", report.chart);
    let _ = writeln!(output, "format: {}", report.format);
    let _ = writeln!(output, "items: {} ({} skipped)", report.count, report.skipped);
    let _ = writeln!(
        output,
        "domain: [{}, {}]",
        number_to_string(report.domain.min),
        number_to_string(report.domain.max)
    );
    let _ = writeln!(output, "diverging: {}", yes_no(report.diverging));
    if let Some(increment) = report.increment {
        let _ = writeln!(output, "increment: {increment}");
    }
    let _ = writeln!(output, "decimal precision: {}", report.decimal_precision);
    if let Some(moe) = report.aggregated_moe {
        let _ = writeln!(output, "aggregated moe: {}", number_to_string(moe));
    }

    if !report.items.is_empty() {
        output.push('\n');
    }
    for item in &report.items {
        let _ = write!(output, "  {}: {}", item.description, item.label);
        if let Some(moe) = &item.moe_label {
            let _ = write!(output, " ({moe})");
        }
        if let Some(date) = &item.date_label {
            let _ = write!(output, " [{date}]");
        }
        output.push('\n');
    }
    output
}

fn format_config_show(report: &ConfigShowReport) -> Result<String> {
    let mut output = String::new();
    match &report.source {
        Some(path) => {
            let _ = writeln!(output, "# Loaded from {}", path.display());
        }
        None => output.push_str("# Built-in defaults\n"),
    }
    let rendered =
        toml::to_string_pretty(&report.config).map_err(|e| ChartError::Config(e.to_string()))?;
    output.push_str(&rendered);
    Ok(output)
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
