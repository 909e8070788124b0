// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::prefs::{Currency, DatePattern};

/// Renders an amount as a currency string: symbol prefix, thousands
/// grouping, two decimal places, leading minus for negatives.
pub fn format_currency(amount: Decimal, currency: Currency) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let s = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    format!(
        "{}{}{}.{}",
        sign,
        currency.symbol(),
        group_thousands(int_part),
        frac_part
    )
}

/// Renders a stored date string per the user's pattern. Unparseable input
/// yields the literal "Invalid date" rather than an error.
pub fn format_date(value: &str, pattern: DatePattern) -> String {
    match parse_date_value(value) {
        Some(date) => format_day(date, pattern),
        None => "Invalid date".to_string(),
    }
}

pub fn format_day(date: NaiveDate, pattern: DatePattern) -> String {
    date.format(pattern.strftime()).to_string()
}

fn parse_date_value(value: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(d);
    }
    // Datetime forms as stored by hosted backends, e.g. 2024-03-15T10:30:00Z
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    None
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let chars: Vec<char> = digits.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}
