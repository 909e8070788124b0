// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::models::{ExpenseCategory, ExpenseDraft, PaymentMethod};
use fintrack::store::ExpenseStore;
use fintrack::{auth, cli, commands::exporter, db};
use rusqlite::Connection;
use tempfile::tempdir;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    auth::sign_in(&conn, "u1").unwrap();
    conn
}

fn export_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    match matches.subcommand() {
        Some(("export", m)) => m.clone(),
        _ => panic!("no export subcommand"),
    }
}

#[test]
fn csv_round_trips_quoted_fields() {
    let conn = setup();
    let mut store = ExpenseStore::new("u1");
    store
        .add(
            &conn,
            ExpenseDraft {
                amount: "12.34".parse().unwrap(),
                category: ExpenseCategory::Food,
                description: "lunch, \"extra\" naan".into(),
                date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                paid_via: PaymentMethod::Upi,
            },
        )
        .unwrap();

    let dir = tempdir().unwrap();
    let out = dir.path().join("expenses.csv");
    let out_str = out.to_string_lossy().to_string();
    exporter::handle(
        &conn,
        &export_matches(&[
            "fintrack", "export", "expenses", "--format", "csv", "--out", &out_str,
        ]),
    )
    .unwrap();

    let raw = std::fs::read_to_string(&out).unwrap();
    // embedded quotes are doubled inside a quoted field
    assert!(raw.contains("\"lunch, \"\"extra\"\" naan\""));

    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers,
        csv::StringRecord::from(vec![
            "id", "amount", "category", "description", "date", "paid_via"
        ])
    );
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 1);
    assert_eq!(&records[0][1], "12.34");
    assert_eq!(&records[0][2], "food");
    assert_eq!(&records[0][3], "lunch, \"extra\" naan");
    assert_eq!(&records[0][4], "2024-03-15");
    assert_eq!(&records[0][5], "upi");
}

#[test]
fn json_export_parses_back() {
    let conn = setup();
    let mut store = ExpenseStore::new("u1");
    store
        .add(
            &conn,
            ExpenseDraft {
                amount: "5".parse().unwrap(),
                category: ExpenseCategory::Bills,
                description: "electricity".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                paid_via: PaymentMethod::NetBanking,
            },
        )
        .unwrap();

    let dir = tempdir().unwrap();
    let out = dir.path().join("expenses.json");
    let out_str = out.to_string_lossy().to_string();
    exporter::handle(
        &conn,
        &export_matches(&[
            "fintrack", "export", "expenses", "--format", "json", "--out", &out_str,
        ]),
    )
    .unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["category"], "bills");
    assert_eq!(arr[0]["paid_via"], "net_banking");
    assert_eq!(arr[0]["date"], "2024-01-02");
}

#[test]
fn unknown_format_is_an_error_and_writes_nothing() {
    let conn = setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("expenses.xml");
    let out_str = out.to_string_lossy().to_string();
    let res = exporter::handle(
        &conn,
        &export_matches(&[
            "fintrack", "export", "expenses", "--format", "xml", "--out", &out_str,
        ]),
    );
    assert!(res.is_err());
    assert!(!out.exists());
}

#[test]
fn unknown_entity_is_an_error() {
    let conn = setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("x.csv");
    let out_str = out.to_string_lossy().to_string();
    let res = exporter::handle(
        &conn,
        &export_matches(&[
            "fintrack", "export", "budgets", "--format", "csv", "--out", &out_str,
        ]),
    );
    assert!(res.is_err());
    assert!(!out.exists());
}

#[test]
fn export_requires_a_session() {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    let dir = tempdir().unwrap();
    let out = dir.path().join("incomes.csv");
    let out_str = out.to_string_lossy().to_string();
    let res = exporter::handle(
        &conn,
        &export_matches(&[
            "fintrack", "export", "incomes", "--format", "csv", "--out", &out_str,
        ]),
    );
    assert!(res.is_err());
    assert!(!out.exists());
}
