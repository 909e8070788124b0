// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::prefs::{self, Currency, DatePattern, Preferences};
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let p = prefs::load_from(&path).unwrap();
    assert_eq!(p.currency, Currency::Inr);
    assert_eq!(p.date_format, DatePattern::DayMonthYear);
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let p = Preferences {
        currency: Currency::Gbp,
        date_format: DatePattern::YearMonthDay,
    };
    prefs::save_to(&path, &p).unwrap();
    assert_eq!(prefs::load_from(&path).unwrap(), p);

    // stored under the user-facing pattern strings
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"GBP\""));
    assert!(raw.contains("\"YYYY-MM-DD\""));
}

#[test]
fn partial_update_keeps_other_field() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let mut p = prefs::load_from(&path).unwrap();
    p.currency = Currency::Usd;
    prefs::save_to(&path, &p).unwrap();

    let got = prefs::load_from(&path).unwrap();
    assert_eq!(got.currency, Currency::Usd);
    assert_eq!(got.date_format, DatePattern::DayMonthYear);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(prefs::load_from(&path).is_err());
}
