// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::db;
use fintrack::error::StoreError;
use fintrack::models::{IncomeCategory, IncomeDraft};
use fintrack::store::IncomeStore;
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

fn draft(amount: &str, day: &str) -> IncomeDraft {
    IncomeDraft {
        amount: d(amount),
        category: IncomeCategory::Salary,
        description: None,
        date: date(day),
    }
}

#[test]
fn add_edit_delete_mirror_into_collection() {
    let conn = setup();
    let mut store = IncomeStore::new("u1");

    let a = store.add(&conn, draft("1000", "2024-01-05")).unwrap();
    let b = store.add(&conn, draft("250.50", "2024-02-10")).unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(store.entries().len(), 2);
    assert_eq!(store.total(), d("1250.50"));

    let edited = store
        .edit(
            &conn,
            a.id,
            IncomeDraft {
                amount: d("1100"),
                category: IncomeCategory::Freelance,
                description: Some("contract".into()),
                date: date("2024-01-06"),
            },
        )
        .unwrap();
    assert_eq!(edited.amount, d("1100"));
    assert_eq!(store.entries().len(), 2);
    assert_eq!(store.total(), d("1350.50"));

    store.delete(&conn, b.id).unwrap();
    assert_eq!(store.entries().len(), 1);
    assert_eq!(store.total(), d("1100"));

    // and the database agrees after a refetch
    let mut fresh = IncomeStore::new("u1");
    fresh.fetch(&conn).unwrap();
    assert_eq!(fresh.entries().len(), 1);
    assert_eq!(fresh.entries()[0].category, IncomeCategory::Freelance);
    assert_eq!(fresh.total(), d("1100"));
}

#[test]
fn total_matches_recompute_after_each_mutation() {
    let conn = setup();
    let mut store = IncomeStore::new("u1");
    for (amt, day) in [("10", "2024-01-01"), ("20", "2024-01-02"), ("30", "2024-01-03")] {
        store.add(&conn, draft(amt, day)).unwrap();
        let expected: Decimal = store.entries().iter().map(|e| e.amount).sum();
        assert_eq!(store.total(), expected);
    }
}

#[test]
fn invalid_amount_rejected_without_mutation() {
    let conn = setup();
    let mut store = IncomeStore::new("u1");
    store.add(&conn, draft("100", "2024-01-01")).unwrap();

    let err = store.add(&conn, draft("0", "2024-01-02")).unwrap_err();
    assert!(matches!(err, StoreError::InvalidAmount { .. }));
    assert_eq!(store.entries().len(), 1);

    let err = store.add(&conn, draft("-5", "2024-01-02")).unwrap_err();
    assert!(matches!(err, StoreError::InvalidAmount { .. }));
    assert_eq!(store.entries().len(), 1);

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM incomes", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn edit_missing_row_is_not_found() {
    let conn = setup();
    let mut store = IncomeStore::new("u1");
    store.add(&conn, draft("100", "2024-01-01")).unwrap();

    let err = store.edit(&conn, 999, draft("200", "2024-01-02")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id: 999 }));
    assert_eq!(store.total(), d("100"));
}

#[test]
fn foreign_row_mutation_rejected_before_backend_write() {
    let conn = setup();
    let mut theirs = IncomeStore::new("u2");
    let row = theirs.add(&conn, draft("500", "2024-01-01")).unwrap();

    let mut store = IncomeStore::new("u1");
    store.fetch(&conn).unwrap();
    assert!(store.entries().is_empty());

    let err = store.delete(&conn, row.id).unwrap_err();
    assert!(matches!(err, StoreError::NotOwner { .. }));
    assert!(store.entries().is_empty());

    let err = store.edit(&conn, row.id, draft("1", "2024-01-01")).unwrap_err();
    assert!(matches!(err, StoreError::NotOwner { .. }));

    // the other user's row is untouched
    let amount: String = conn
        .query_row("SELECT amount FROM incomes WHERE id=?1", [row.id], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(amount, "500");
}

#[test]
fn fetch_scopes_to_owner_and_totals_follow() {
    let conn = setup();
    let mut mine = IncomeStore::new("u1");
    let mut theirs = IncomeStore::new("u2");
    mine.add(&conn, draft("100", "2024-01-01")).unwrap();
    theirs.add(&conn, draft("999", "2024-01-01")).unwrap();

    let mut fresh = IncomeStore::new("u1");
    fresh.fetch(&conn).unwrap();
    assert_eq!(fresh.entries().len(), 1);
    assert_eq!(fresh.total(), d("100"));
    assert_eq!(fresh.total_for_user("u1"), d("100"));
    assert_eq!(fresh.total_for_user("u2"), Decimal::ZERO);
}
