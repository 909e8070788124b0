// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth;
use crate::format::{format_currency, format_day};
use crate::models::ExpenseDraft;
use crate::store::ExpenseStore;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, parse_range, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn draft_from(sub: &clap::ArgMatches) -> Result<ExpenseDraft> {
    Ok(ExpenseDraft {
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
        category: sub.get_one::<String>("category").unwrap().parse()?,
        description: sub.get_one::<String>("description").unwrap().to_string(),
        date: parse_date(sub.get_one::<String>("date").unwrap())?,
        paid_via: sub.get_one::<String>("paid-via").unwrap().parse()?,
    })
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(conn)?;
    let mut store = ExpenseStore::new(user);
    let entry = store.add(conn, draft_from(sub)?)?;
    println!(
        "Recorded expense {} ({}, {}) on {} [id {}]",
        entry.amount, entry.category, entry.paid_via, entry.date, entry.id
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(conn)?;
    let mut store = ExpenseStore::new(user);
    store.fetch(conn)?;
    let range = parse_range(sub)?;
    let mut entries: Vec<_> = store
        .entries()
        .iter()
        .filter(|e| range.contains(e.date))
        .collect();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        entries.truncate(*limit);
    }
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &entries)? {
        return Ok(());
    }
    let prefs = crate::prefs::load()?;
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                format_day(e.date, prefs.date_format),
                e.category.to_string(),
                e.description.clone(),
                e.paid_via.to_string(),
                format_currency(e.amount, prefs.currency),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Date", "Category", "Description", "Paid via", "Amount"],
            rows,
        )
    );
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(conn)?;
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut store = ExpenseStore::new(user);
    store.fetch(conn)?;
    let entry = store.edit(conn, id, draft_from(sub)?)?;
    println!("Updated expense {} ({})", entry.id, entry.amount);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(conn)?;
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut store = ExpenseStore::new(user);
    store.fetch(conn)?;
    store.delete(conn, id)?;
    println!("Removed expense {}", id);
    Ok(())
}
