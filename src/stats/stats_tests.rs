use super::*;
use crate::error::ChartError;

mod deviation_tests {
    use super::*;

    fn labels(marks: &[DeviationMark]) -> Vec<&str> {
        marks.iter().map(|m| m.label.as_str()).collect()
    }

    #[test]
    fn marks_above_mean() {
        let marks = deviations_in_range(10.0, 40.0, 10.0).unwrap();
        assert_eq!(labels(&marks), ["1σ", "2σ"]);
        assert_eq!(marks[0].value, 20.0);
        assert_eq!(marks[1].value, 30.0);
    }

    #[test]
    fn partial_step_reaches_past_last_whole_step() {
        let marks = deviations_in_range(0.0, 3.5, 1.0).unwrap();
        assert_eq!(labels(&marks), ["1σ", "2σ", "3σ"]);
    }

    #[test]
    fn marks_below_mean_nearest_bound_first() {
        let marks = deviations_in_range(10.0, -20.0, 10.0).unwrap();
        assert_eq!(labels(&marks), ["-2σ", "-1σ"]);
        assert_eq!(marks[0].value, -10.0);
        assert_eq!(marks[1].value, 0.0);
    }

    #[test]
    fn bound_at_mean_is_empty() {
        assert!(deviations_in_range(5.0, 5.0, 1.0).unwrap().is_empty());
    }

    #[test]
    fn invalid_step_is_rejected() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                deviations_in_range(0.0, 10.0, step),
                Err(ChartError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn runaway_ranges_are_rejected() {
        assert!(deviations_in_range(0.0, 1.0e12, 1.0).is_err());
        assert!(deviations_in_range(f64::NAN, 1.0, 1.0).is_err());
    }
}

mod summary_tests {
    use super::*;

    #[test]
    fn empty_is_zeroed() {
        assert_eq!(summarize(&[]), SummaryStatistics::default());
    }

    #[test]
    fn basic_statistics() {
        let stats = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(stats.count, 5);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert!((stats.mean - 3.0).abs() < 1e-12);
        assert!((stats.std_dev - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn single_value_has_no_spread() {
        let stats = summarize(&[-7.0]);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.min, stats.max);
    }
}
