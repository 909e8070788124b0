// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::models::{
    BillingCycle, ExpenseCategory, IncomeCategory, InvestmentCategory, PaymentMethod,
    SubscriptionStatus,
};
use crate::utils::pretty_table;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Non-positive or unparseable amounts anywhere
    for table in ["incomes", "expenses", "investments", "subscriptions"] {
        let mut stmt = conn.prepare(&format!("SELECT id, amount FROM {} ORDER BY id", table))?;
        let mut cur = stmt.query([])?;
        while let Some(r) = cur.next()? {
            let id: i64 = r.get(0)?;
            let amount: String = r.get(1)?;
            match amount.parse::<Decimal>() {
                Ok(a) if a <= Decimal::ZERO => {
                    rows.push(vec![
                        "non_positive_amount".into(),
                        format!("{} id {} amount {}", table, id, a),
                    ]);
                }
                Ok(_) => {}
                Err(_) => {
                    rows.push(vec![
                        "bad_amount".into(),
                        format!("{} id {} amount '{}'", table, id, amount),
                    ]);
                }
            }
        }
    }

    // 2) Investment rows whose cached amount drifted from units * price
    let mut stmt = conn.prepare("SELECT id, units, price, amount FROM investments ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let units: String = r.get(1)?;
        let price: String = r.get(2)?;
        let amount: String = r.get(3)?;
        if let (Ok(u), Ok(p), Ok(a)) = (
            units.parse::<Decimal>(),
            price.parse::<Decimal>(),
            amount.parse::<Decimal>(),
        ) {
            if u * p != a {
                rows.push(vec![
                    "amount_drift".into(),
                    format!("investment {} stored {} expected {}", id, a, u * p),
                ]);
            }
        }
    }

    // 3) Enum columns with values the application no longer understands
    check_enum(conn, &mut rows, "incomes", "category", |s| {
        s.parse::<IncomeCategory>().is_ok()
    })?;
    check_enum(conn, &mut rows, "expenses", "category", |s| {
        s.parse::<ExpenseCategory>().is_ok()
    })?;
    check_enum(conn, &mut rows, "expenses", "paid_via", |s| {
        s.parse::<PaymentMethod>().is_ok()
    })?;
    check_enum(conn, &mut rows, "investments", "category", |s| {
        s.parse::<InvestmentCategory>().is_ok()
    })?;
    check_enum(conn, &mut rows, "subscriptions", "billing_cycle", |s| {
        s.parse::<BillingCycle>().is_ok()
    })?;
    check_enum(conn, &mut rows, "subscriptions", "status", |s| {
        s.parse::<SubscriptionStatus>().is_ok()
    })?;

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

fn check_enum(
    conn: &Connection,
    rows: &mut Vec<Vec<String>>,
    table: &str,
    column: &str,
    ok: impl Fn(&str) -> bool,
) -> Result<()> {
    let mut stmt = conn.prepare(&format!("SELECT id, {} FROM {} ORDER BY id", column, table))?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let value: String = r.get(1)?;
        if !ok(&value) {
            rows.push(vec![
                "unknown_value".into(),
                format!("{} id {} {} '{}'", table, id, column, value),
            ]);
        }
    }
    Ok(())
}
