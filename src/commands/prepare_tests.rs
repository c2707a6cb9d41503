use std::path::PathBuf;

use super::*;
use crate::domain::ChartKind;

fn args(chart: ChartKind, format: Option<FormatTag>) -> PrepareArgs {
    PrepareArgs {
        file: PathBuf::from("items.json"),
        chart,
        format,
    }
}

fn prepare(json: &str, chart: ChartKind, format: Option<FormatTag>) -> Result<PrepareReport> {
    let items = parse_items(json).unwrap();
    match prepare_items(&items, &args(chart, format), &Config::default())? {
        Report::Prepare(report) => Ok(report),
        other => panic!("unexpected report {other:?}"),
    }
}

#[test]
fn bar_chart_summary() {
    let report = prepare(
        r#"[
            {"description": "Alameda County", "value": "1234.5", "moe": "12.3"},
            {"description": "Alpine County", "value": 800, "moe": "4"},
            {"description": "Amador County", "value": null}
        ]"#,
        ChartKind::Bar,
        Some(FormatTag::Dollar),
    )
    .unwrap();

    assert_eq!(report.count, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.domain.min, 0.0);
    assert!(report.domain.max > 1234.5);
    assert!(!report.diverging);
    assert!(report.increment.is_none());
    assert!(report.time_domain.is_none());
    assert_eq!(report.decimal_precision, 1);
    assert!(report.aggregated_moe.is_some());

    assert_eq!(report.items[0].label, "$1,234.50");
    assert_eq!(report.items[0].moe_label.as_deref(), Some("±12.3"));
    assert_eq!(report.items[0].element_id, "alameda-county");
    assert_eq!(report.items[2].label, "");
}

#[test]
fn dated_items_get_increment_and_labels() {
    let report = prepare(
        r#"[
            {"description": "2010", "value": 4.5, "date": "2010"},
            {"description": "2015", "value": -1.25, "date": "2015"},
            {"description": "2025", "value": 3, "date": "2025"}
        ]"#,
        ChartKind::Line,
        None,
    )
    .unwrap();

    assert_eq!(report.increment, Some(TimeIncrement::MultiYear(5)));
    assert!(report.time_domain.is_some());
    assert!(report.diverging);
    assert_eq!(report.decimal_precision, 2);
    assert_eq!(report.items[1].date_label.as_deref(), Some("2015"));
    assert!(report.aggregated_moe.is_none());
}

#[test]
fn quarterly_codes_label_as_quarters() {
    let report = prepare(
        r#"[
            {"description": "a", "value": 1, "date": "2023-Q1"},
            {"description": "b", "value": 2, "date": "2023-Q2"},
            {"description": "c", "value": 3, "date": "2023-Q3"}
        ]"#,
        ChartKind::Line,
        None,
    )
    .unwrap();

    assert_eq!(report.increment, Some(TimeIncrement::Quarter));
    assert_eq!(report.items[2].date_label.as_deref(), Some("Q3 2023"));
}

#[test]
fn no_numeric_values_is_an_error() {
    let err = prepare(
        r#"[{"description": "x", "value": "n/a"}]"#,
        ChartKind::Bar,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn unsupported_time_code_is_an_error() {
    let err = prepare(
        r#"[{"description": "x", "value": 1, "date": "spring"}]"#,
        ChartKind::Line,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::UnsupportedTimeCode(_)));
}
