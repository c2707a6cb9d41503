use super::*;

#[test]
fn deserializes_api_shapes() {
    let values: Vec<RawValue> = serde_json::from_str(r#"[null, true, 12.5, "3.25", "N/A"]"#).unwrap();
    assert_eq!(
        values,
        vec![
            RawValue::Missing,
            RawValue::Bool(true),
            RawValue::Number(12.5),
            RawValue::Text("3.25".to_string()),
            RawValue::Text("N/A".to_string()),
        ]
    );
}

#[test]
fn numeric_reading() {
    assert_eq!(RawValue::from(4.5).as_number(), Some(4.5));
    assert_eq!(RawValue::from(" 12 ").as_number(), Some(12.0));
    assert_eq!(RawValue::from("-0.75").as_number(), Some(-0.75));
    assert_eq!(RawValue::from("N/A").as_number(), None);
    assert_eq!(RawValue::from("").as_number(), None);
    assert_eq!(RawValue::from(true).as_number(), None);
    assert_eq!(RawValue::Missing.as_number(), None);
    assert_eq!(RawValue::from(f64::NAN).as_number(), None);
    assert_eq!(RawValue::from("inf").as_number(), None);
}

#[test]
fn display_string_matches_unformatted_form() {
    assert_eq!(RawValue::from(21).display_string(), "21");
    assert_eq!(RawValue::from(1234.5).display_string(), "1234.5");
    assert_eq!(RawValue::from("12.50").display_string(), "12.50");
    assert_eq!(RawValue::from(false).display_string(), "false");
    assert_eq!(RawValue::Missing.display_string(), "");
}

#[test]
fn number_to_string_special_values() {
    assert_eq!(number_to_string(-0.0), "0");
    assert_eq!(number_to_string(f64::NAN), "NaN");
    assert_eq!(number_to_string(f64::INFINITY), "Infinity");
    assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(number_to_string(0.1), "0.1");
}

#[test]
fn option_converts_to_missing() {
    assert!(RawValue::from(None::<f64>).is_missing());
    assert_eq!(RawValue::from(Some("x")), RawValue::Text("x".to_string()));
}
