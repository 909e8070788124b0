// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use rusqlite::Connection;

use crate::auth;
use crate::models::{ExpenseEntry, IncomeEntry, InvestmentEntry, SubscriptionEntry};
use crate::store::{ExpenseStore, IncomeStore, InvestmentStore, SubscriptionStore};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let entity = m.get_one::<String>("entity").unwrap().to_lowercase();
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out = m.get_one::<String>("out").unwrap();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let user = auth::current_user(conn)?;
    match entity.as_str() {
        "incomes" => {
            let mut store = IncomeStore::new(user);
            store.fetch(conn)?;
            if fmt == "csv" {
                write_incomes_csv(out, store.entries())?;
            } else {
                write_json(out, store.entries())?;
            }
        }
        "expenses" => {
            let mut store = ExpenseStore::new(user);
            store.fetch(conn)?;
            if fmt == "csv" {
                write_expenses_csv(out, store.entries())?;
            } else {
                write_json(out, store.entries())?;
            }
        }
        "investments" => {
            let mut store = InvestmentStore::new(user);
            store.fetch(conn)?;
            if fmt == "csv" {
                write_investments_csv(out, store.entries())?;
            } else {
                write_json(out, store.entries())?;
            }
        }
        "subscriptions" => {
            let mut store = SubscriptionStore::new(user);
            store.fetch(conn)?;
            if fmt == "csv" {
                write_subscriptions_csv(out, store.entries())?;
            } else {
                write_json(out, store.entries())?;
            }
        }
        _ => bail!(
            "Unknown entity: {} (use incomes|expenses|investments|subscriptions)",
            entity
        ),
    }
    println!("Exported {} to {}", entity, out);
    Ok(())
}

fn write_json<T: serde::Serialize>(out: &str, entries: &[T]) -> Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(entries)?)?;
    Ok(())
}

fn write_incomes_csv(out: &str, entries: &[IncomeEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(["id", "amount", "category", "description", "date"])?;
    for e in entries {
        wtr.write_record([
            e.id.to_string(),
            e.amount.to_string(),
            e.category.to_string(),
            e.description.clone().unwrap_or_default(),
            e.date.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_expenses_csv(out: &str, entries: &[ExpenseEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(["id", "amount", "category", "description", "date", "paid_via"])?;
    for e in entries {
        wtr.write_record([
            e.id.to_string(),
            e.amount.to_string(),
            e.category.to_string(),
            e.description.clone(),
            e.date.to_string(),
            e.paid_via.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_investments_csv(out: &str, entries: &[InvestmentEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record([
        "id", "name", "units", "price", "amount", "category", "notes", "date",
    ])?;
    for e in entries {
        wtr.write_record([
            e.id.to_string(),
            e.name.clone(),
            e.units.to_string(),
            e.price.to_string(),
            e.amount.to_string(),
            e.category.to_string(),
            e.notes.clone().unwrap_or_default(),
            e.date.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_subscriptions_csv(out: &str, entries: &[SubscriptionEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record([
        "id",
        "name",
        "amount",
        "billing_cycle",
        "start_date",
        "status",
        "notes",
    ])?;
    for e in entries {
        wtr.write_record([
            e.id.to_string(),
            e.name.clone(),
            e.amount.to_string(),
            e.billing_cycle.to_string(),
            e.start_date.to_string(),
            e.status.to_string(),
            e.notes.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
