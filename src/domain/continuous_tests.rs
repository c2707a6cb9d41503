use super::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

mod degenerate_tests {
    use super::*;

    #[test]
    fn all_zero_percent() {
        let domain = resolve_domain(&[0.0, 0.0], Some(FormatTag::Percent), false).unwrap();
        assert_eq!(domain, Domain::new(0.0, 100.0));
    }

    #[test]
    fn all_zero_other_formats() {
        assert_eq!(resolve_domain(&[0.0], None, true).unwrap(), Domain::new(0.0, 1.0));
        assert_eq!(
            resolve_domain(&[0.0, -0.0], Some(FormatTag::Dollar), false).unwrap(),
            Domain::new(0.0, 1.0)
        );
    }

    #[test]
    fn empty_series_is_rejected() {
        assert!(matches!(
            resolve_domain(&[], None, false),
            Err(ChartError::InvalidInput(_))
        ));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(resolve_domain(&[1.0, f64::NAN], None, false).is_err());
        assert!(resolve_domain(&[f64::INFINITY], None, true).is_err());
    }
}

mod padding_tests {
    use super::*;

    #[test]
    fn diverging_series_pads_both_sides() {
        let domain = resolve_domain(&[-5.0, 3.0], None, false).unwrap();
        assert!(domain.min < -5.0);
        assert!(domain.max > 3.0);
        assert_close(domain.min, -5.2);
        assert_close(domain.max, 3.2);
    }

    #[test]
    fn clamp_pins_positive_series_to_zero() {
        let domain = resolve_domain(&[10.0, 20.0, 30.0], None, true).unwrap();
        assert_eq!(domain.min, 0.0);
        assert_close(domain.max, 32.0);
    }

    #[test]
    fn unclamped_positive_series_keeps_tight_baseline() {
        let domain = resolve_domain(&[10.0, 20.0, 30.0], None, false).unwrap();
        assert_close(domain.min, 8.0);
        assert_close(domain.max, 32.0);
    }

    #[test]
    fn padded_min_never_crosses_zero_for_positive_data() {
        let domain = resolve_domain(&[1.0, 90.0], None, false).unwrap();
        assert_eq!(domain.min, 0.0);
    }

    #[test]
    fn negative_series_mirrors_positive_rules() {
        let clamped = resolve_domain(&[-10.0, -20.0], None, true).unwrap();
        assert_eq!(clamped.max, 0.0);
        assert_close(clamped.min, -22.0);

        let unclamped = resolve_domain(&[-10.0, -20.0], None, false).unwrap();
        assert_close(unclamped.max, -8.0);
    }

    #[test]
    fn tick_rounding_wins_mid_tick() {
        // tick is 5, cushion is 2: 31 rounds up to 35, which beats 33.
        let domain = resolve_domain(&[31.0], None, true).unwrap();
        assert_close(domain.max, 35.0);
    }

    #[test]
    fn percent_anchors_on_hundred() {
        let domain = resolve_domain(&[44.0, 56.0], Some(FormatTag::Percent), false).unwrap();
        assert_close(domain.min, 40.0);
        assert_close(domain.max, 60.0);

        let small = resolve_domain(&[0.4, 0.6], Some(FormatTag::Percent), false).unwrap();
        assert_close(small.max, 5.0);
    }

    #[test]
    fn single_value_is_never_degenerate() {
        for value in [0.003, 1.0, 42.0, -7.5, 1.0e9] {
            let domain = resolve_domain(&[value], None, false).unwrap();
            assert!(domain.min < domain.max, "{value}: {domain:?}");
        }
    }

    #[test]
    fn subnormal_values_still_get_padding() {
        for clamp in [true, false] {
            let domain = resolve_domain(&[5e-324], None, clamp).unwrap();
            assert_eq!(domain.min, 0.0);
            assert!(domain.max > 5e-324, "{domain:?}");

            let negative = resolve_domain(&[-5e-324], None, clamp).unwrap();
            assert_eq!(negative.max, 0.0);
            assert!(negative.min < -5e-324, "{negative:?}");
        }
    }

    #[test]
    fn huge_values_stay_finite() {
        for values in [vec![1.5e308], vec![f64::MAX], vec![f64::MIN, f64::MAX]] {
            let domain = resolve_domain(&values, None, false).unwrap();
            assert!(domain.min.is_finite() && domain.max.is_finite(), "{domain:?}");
            assert!(domain.min < domain.max, "{domain:?}");
        }
        let domain = resolve_domain(&[1.5e308], None, false).unwrap();
        assert!(domain.max >= 1.5e308);
    }
}

mod domain_type_tests {
    use super::*;

    #[test]
    fn serializes_min_max() {
        let json = serde_json::to_string(&Domain::new(0.0, 1.0)).unwrap();
        assert_eq!(json, r#"{"min":0.0,"max":1.0}"#);
    }
}
