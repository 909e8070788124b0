// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::db;
use fintrack::error::StoreError;
use fintrack::models::{ExpenseCategory, ExpenseDraft, PaymentMethod};
use fintrack::store::ExpenseStore;
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

fn draft(amount: &str, category: ExpenseCategory, day: &str) -> ExpenseDraft {
    ExpenseDraft {
        amount: d(amount),
        category,
        description: "test".into(),
        date: date(day),
        paid_via: PaymentMethod::Upi,
    }
}

#[test]
fn fields_survive_write_and_fetch() {
    let conn = setup();
    let mut store = ExpenseStore::new("u1");
    store
        .add(
            &conn,
            ExpenseDraft {
                amount: d("42.75"),
                category: ExpenseCategory::OnlineOrder,
                description: "headphones".into(),
                date: date("2024-06-01"),
                paid_via: PaymentMethod::CreditCard,
            },
        )
        .unwrap();

    let mut fresh = ExpenseStore::new("u1");
    fresh.fetch(&conn).unwrap();
    assert_eq!(fresh.entries().len(), 1);
    let e = &fresh.entries()[0];
    assert_eq!(e.amount, d("42.75"));
    assert_eq!(e.category, ExpenseCategory::OnlineOrder);
    assert_eq!(e.description, "headphones");
    assert_eq!(e.paid_via, PaymentMethod::CreditCard);
    assert_eq!(e.date, date("2024-06-01"));
}

#[test]
fn edit_is_full_field_replace() {
    let conn = setup();
    let mut store = ExpenseStore::new("u1");
    let e = store
        .add(&conn, draft("10", ExpenseCategory::Food, "2024-03-01"))
        .unwrap();

    store
        .edit(
            &conn,
            e.id,
            ExpenseDraft {
                amount: d("12.50"),
                category: ExpenseCategory::Grocery,
                description: "weekly run".into(),
                date: date("2024-03-02"),
                paid_via: PaymentMethod::Cash,
            },
        )
        .unwrap();

    let mut fresh = ExpenseStore::new("u1");
    fresh.fetch(&conn).unwrap();
    let got = &fresh.entries()[0];
    assert_eq!(got.id, e.id);
    assert_eq!(got.amount, d("12.50"));
    assert_eq!(got.category, ExpenseCategory::Grocery);
    assert_eq!(got.description, "weekly run");
    assert_eq!(got.paid_via, PaymentMethod::Cash);
}

#[test]
fn delete_only_touches_the_target_row() {
    let conn = setup();
    let mut store = ExpenseStore::new("u1");
    let a = store
        .add(&conn, draft("10", ExpenseCategory::Food, "2024-03-01"))
        .unwrap();
    let b = store
        .add(&conn, draft("20", ExpenseCategory::Rent, "2024-03-02"))
        .unwrap();

    store.delete(&conn, a.id).unwrap();
    assert_eq!(store.entries().len(), 1);
    assert_eq!(store.entries()[0].id, b.id);
    assert_eq!(store.total(), d("20"));

    let err = store.delete(&conn, a.id).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
    assert_eq!(store.entries().len(), 1);
}

#[test]
fn foreign_rows_invisible_and_protected() {
    let conn = setup();
    let mut theirs = ExpenseStore::new("u2");
    let row = theirs
        .add(&conn, draft("99", ExpenseCategory::Travel, "2024-03-01"))
        .unwrap();

    let mut store = ExpenseStore::new("u1");
    store.fetch(&conn).unwrap();
    assert!(store.entries().is_empty());
    let err = store.delete(&conn, row.id).unwrap_err();
    assert!(matches!(err, StoreError::NotOwner { .. }));

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM expenses", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}
