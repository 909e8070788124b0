// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::db;
use fintrack::error::StoreError;
use fintrack::models::{InvestmentCategory, InvestmentDraft};
use fintrack::store::InvestmentStore;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn draft(units: &str, price: &str) -> InvestmentDraft {
    InvestmentDraft {
        name: "NIFTYBEES".into(),
        units: d(units),
        price: d(price),
        category: InvestmentCategory::MutualFunds,
        notes: None,
        date: date("2024-04-01"),
    }
}

#[test]
fn amount_is_units_times_price() {
    let conn = setup();
    let mut store = InvestmentStore::new("u1");
    let e = store.add(&conn, draft("10", "25.5")).unwrap();
    assert_eq!(e.amount, d("255.00"));

    // stored amount matches too
    let stored: String = conn
        .query_row("SELECT amount FROM investments WHERE id=?1", [e.id], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(stored.parse::<Decimal>().unwrap(), d("255.00"));
}

#[test]
fn edit_recomputes_amount() {
    let conn = setup();
    let mut store = InvestmentStore::new("u1");
    let e = store.add(&conn, draft("10", "25.5")).unwrap();

    let edited = store.edit(&conn, e.id, draft("20", "25.5")).unwrap();
    assert_eq!(edited.amount, d("510.00"));

    let mut fresh = InvestmentStore::new("u1");
    fresh.fetch(&conn).unwrap();
    assert_eq!(fresh.entries()[0].amount, d("510.00"));
    assert_eq!(fresh.total(), d("510.00"));
}

#[test]
fn non_positive_units_or_price_rejected() {
    let conn = setup();
    let mut store = InvestmentStore::new("u1");

    let err = store.add(&conn, draft("0", "25.5")).unwrap_err();
    assert!(matches!(err, StoreError::InvalidAmount { field: "units", .. }));

    let err = store.add(&conn, draft("10", "-1")).unwrap_err();
    assert!(matches!(err, StoreError::InvalidAmount { field: "price", .. }));

    assert!(store.entries().is_empty());
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM investments", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn blank_name_rejected() {
    let conn = setup();
    let mut store = InvestmentStore::new("u1");
    let mut bad = draft("1", "1");
    bad.name = "  ".into();
    let err = store.add(&conn, bad).unwrap_err();
    assert!(matches!(err, StoreError::InvalidField { field: "name", .. }));
}
