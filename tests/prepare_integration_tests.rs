//! Integration tests for the `prepare` command.

mod common;

use common::{COUNTY_ITEMS, JSON_OUTPUT_CONFIG, TestFixture, YEARLY_ITEMS};
use predicates::prelude::*;

#[test]
fn prepares_bar_chart_items() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("counties.json", COUNTY_ITEMS);

    chart_prep!()
        .args(["--no-config", "prepare"])
        .arg(&file)
        .args(["--format", "dollar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("items: 2 (1 skipped)"))
        .stdout(predicate::str::contains("Alameda County: $112,017.00 (±1,021)"))
        .stdout(predicate::str::contains("Amador County: n/a"));
}

#[test]
fn prepares_dated_line_chart_items() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("unemployment.json", YEARLY_ITEMS);

    chart_prep!()
        .args(["--no-config", "prepare", "--chart", "line"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("increment: year"))
        .stdout(predicate::str::contains("Unemployment 2020: 10.1 [2020]"));
}

#[test]
fn json_output_from_config() {
    let fixture = TestFixture::new();
    fixture.create_config(JSON_OUTPUT_CONFIG);
    fixture.create_file("unemployment.json", YEARLY_ITEMS);

    let output = chart_prep!()
        .current_dir(fixture.path())
        .args(["prepare", "unemployment.json", "--chart", "line"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["command"], "prepare");
    assert_eq!(json["increment"], "year");
    assert_eq!(json["items"][0]["element_id"], "unemployment-2019");
    assert!(json["time_domain"]["min"].is_number());
}

#[test]
fn missing_file_is_an_input_error() {
    let fixture = TestFixture::new();

    chart_prep!()
        .current_dir(fixture.path())
        .args(["--no-config", "prepare", "missing.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn malformed_json_is_an_input_error() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("broken.json", "[{\"description\": ");

    chart_prep!()
        .args(["--no-config", "prepare"])
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON"));
}
