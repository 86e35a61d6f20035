// File: crates/trends-series/tests/month.rs
// Purpose: Month index labels, label parsing and month arithmetic.

use chrono::NaiveDate;
use trends_series::month::{offset_months, parse_label, short_label};
use trends_series::{EpochMonths, MonthFormatter};

#[test]
fn index_labels_count_from_january_2000() {
    let f = EpochMonths::default();
    assert_eq!(f.label(0).as_deref(), Some("January 2000"));
    assert_eq!(f.label(11).as_deref(), Some("December 2000"));
    assert_eq!(f.label(12).as_deref(), Some("January 2001"));
    assert_eq!(f.label(-1).as_deref(), Some("December 1999"));
    assert_eq!(f.label(i64::MAX), None);
}

#[test]
fn labels_parse_to_first_of_month() {
    assert_eq!(parse_label("March 2014"), NaiveDate::from_ymd_opt(2014, 3, 1));
    assert_eq!(parse_label(" July 2000 "), NaiveDate::from_ymd_opt(2000, 7, 1));
    assert_eq!(parse_label("Smarch 2014"), None);
}

#[test]
fn offsets_cross_year_boundaries() {
    let jan = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
    assert_eq!(offset_months(jan, -5), NaiveDate::from_ymd_opt(2000, 8, 1));
    assert_eq!(offset_months(jan, 12), NaiveDate::from_ymd_opt(2002, 1, 1));
    assert_eq!(short_label(jan), "Jan 2001");
}
