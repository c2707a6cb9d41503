use chrono::{NaiveDate, NaiveTime};

use super::*;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

#[allow(clippy::cast_precision_loss)]
fn ms(date: NaiveDateTime) -> f64 {
    epoch_millis(date) as f64
}

#[test]
fn y_domain_does_not_clamp() {
    let domain = y_domain(&[10.0, 20.0, 30.0], None).unwrap();
    assert!(domain.min > 0.0);
}

#[test]
fn x_domain_pads_by_half_the_smallest_gap() {
    let dates = [ymd(2023, 1, 1), ymd(2023, 1, 3), ymd(2023, 1, 9)];
    let domain = x_domain(&dates, true).unwrap();
    let one_day = 86_400_000.0;
    assert_eq!(domain.min, ms(dates[0]) - one_day);
    assert_eq!(domain.max, ms(dates[2]) + one_day);
}

#[test]
fn x_domain_without_padding_is_exact() {
    let dates = [ymd(2020, 1, 1), ymd(2021, 1, 1)];
    let domain = x_domain(&dates, false).unwrap();
    assert_eq!(domain.min, ms(dates[0]));
    assert_eq!(domain.max, ms(dates[1]));
}

#[test]
fn x_domain_sorts_its_own_copy() {
    let dates = [ymd(2021, 1, 1), ymd(2020, 1, 1)];
    let domain = x_domain(&dates, false).unwrap();
    assert_eq!(domain.min, ms(ymd(2020, 1, 1)));
    assert_eq!(dates[0], ymd(2021, 1, 1));
}

#[test]
fn single_date_gets_a_one_day_pad() {
    for add_padding in [true, false] {
        let domain = x_domain(&[ymd(2023, 6, 1)], add_padding).unwrap();
        assert!(domain.min < domain.max);
        assert_eq!(domain.max - domain.min, 2.0 * 86_400_000.0);
    }
}

#[test]
fn empty_dates_are_rejected() {
    assert!(matches!(x_domain(&[], true), Err(ChartError::InvalidInput(_))));
}
