use chrono::NaiveDateTime;

use crate::cli::PrepareArgs;
use crate::config::Config;
use crate::date::{
    TimeIncrement, date_from_time_value, infer_time_increment, pretty_time_label,
    pretty_time_label_from_code,
};
use crate::domain::{is_diverging, x_domain};
use crate::error::{ChartError, Result};
use crate::helpers::string_to_element_id;
use crate::item::{StatItem, parse_items};
use crate::number::{
    FormatTag, RawValue, aggregate_moes, determine_dataset_decimal_precision, format_number,
};
use crate::output::{PrepareReport, PreparedItem, Report};

use super::context::read_input;

/// Read a JSON file of stats items and prepare it for a chart.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, if no item has a
/// numeric value, or if an item carries an unsupported time code.
pub fn run_prepare_impl(args: &PrepareArgs, config: &Config) -> Result<Report> {
    let content = read_input(&args.file)?;
    let items = parse_items(&content)?;
    prepare_items(&items, args, config)
}

pub(crate) fn prepare_items(
    items: &[StatItem],
    args: &PrepareArgs,
    config: &Config,
) -> Result<Report> {
    let format = args.format.unwrap_or(config.format.default);

    let values: Vec<f64> = items.iter().filter_map(StatItem::numeric_value).collect();
    let skipped = items.len() - values.len();
    if skipped > 0 {
        log::warn!("{skipped} item(s) without a numeric value left out of the domain");
    }
    if values.is_empty() {
        return Err(ChartError::InvalidInput(format!(
            "{} contains no items with a numeric value",
            args.file.display()
        )));
    }

    let domain = args
        .chart
        .value_domain(&values, Some(format), config.domain.clamp_at_zero)?;

    let dates = item_dates(items)?;
    let (increment, time_domain) = if dates.is_empty() {
        (None, None)
    } else {
        (Some(infer_time_increment(&dates)), Some(x_domain(&dates, true)?))
    };

    let moes: Vec<f64> = items.iter().filter_map(StatItem::moe_value).collect();
    let aggregated_moe = (!moes.is_empty()).then(|| aggregate_moes(&moes));

    Ok(Report::Prepare(PrepareReport {
        chart: args.chart,
        format,
        count: values.len(),
        skipped,
        domain,
        diverging: is_diverging(&values),
        increment,
        time_domain,
        decimal_precision: determine_dataset_decimal_precision(&values),
        aggregated_moe,
        items: items
            .iter()
            .map(|item| prepare_item(item, format, increment))
            .collect(),
    }))
}

fn item_dates(items: &[StatItem]) -> Result<Vec<NaiveDateTime>> {
    items
        .iter()
        .filter_map(|item| item.date.as_deref())
        .map(date_from_time_value)
        .collect()
}

fn prepare_item(
    item: &StatItem,
    format: FormatTag,
    increment: Option<TimeIncrement>,
) -> PreparedItem {
    let date_label = item.date.as_deref().map(|code| match increment {
        Some(increment) => date_from_time_value(code).map_or_else(
            |_| code.to_string(),
            |date| pretty_time_label(date, increment, false),
        ),
        None => pretty_time_label_from_code(code),
    });

    PreparedItem {
        description: item.description.clone(),
        label: format_number(&item.value, Some(format)),
        moe_label: item
            .moe
            .as_deref()
            .map(|moe| format_number(&RawValue::from(moe), Some(FormatTag::Moe))),
        date_label,
        element_id: string_to_element_id(&item.description),
    }
}

#[cfg(test)]
#[path = "prepare_tests.rs"]
mod tests;
