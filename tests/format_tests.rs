// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::format::{format_currency, format_date};
use fintrack::prefs::{Currency, DatePattern};
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn currency_symbol_and_grouping() {
    assert_eq!(format_currency(d("1234567.891"), Currency::Usd), "$1,234,567.89");
    assert_eq!(format_currency(d("1500"), Currency::Inr), "₹1,500.00");
    assert_eq!(format_currency(d("999.9"), Currency::Eur), "€999.90");
    assert_eq!(format_currency(d("0"), Currency::Gbp), "£0.00");
}

#[test]
fn negative_amounts_keep_leading_minus() {
    assert_eq!(format_currency(d("-42.5"), Currency::Usd), "-$42.50");
    assert_eq!(format_currency(d("-1000"), Currency::Inr), "-₹1,000.00");
}

#[test]
fn date_patterns_render() {
    assert_eq!(
        format_date("2024-03-15", DatePattern::DayMonthYear),
        "15/03/2024"
    );
    assert_eq!(
        format_date("2024-03-15", DatePattern::MonthDayYear),
        "03/15/2024"
    );
    assert_eq!(
        format_date("2024-03-15", DatePattern::YearMonthDay),
        "2024-03-15"
    );
}

#[test]
fn datetime_suffixes_tolerated() {
    assert_eq!(
        format_date("2024-03-15T10:30:00Z", DatePattern::YearMonthDay),
        "2024-03-15"
    );
    assert_eq!(
        format_date("2024-03-15 10:30:00", DatePattern::DayMonthYear),
        "15/03/2024"
    );
}

#[test]
fn garbage_renders_invalid_date() {
    assert_eq!(format_date("not-a-date", DatePattern::DayMonthYear), "Invalid date");
    assert_eq!(format_date("", DatePattern::YearMonthDay), "Invalid date");
    assert_eq!(format_date("2024-13-45", DatePattern::MonthDayYear), "Invalid date");
}
