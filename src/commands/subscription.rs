// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth;
use crate::format::{format_currency, format_day};
use crate::models::SubscriptionDraft;
use crate::store::SubscriptionStore;
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

fn draft_from(sub: &clap::ArgMatches) -> Result<SubscriptionDraft> {
    Ok(SubscriptionDraft {
        name: sub.get_one::<String>("name").unwrap().to_string(),
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
        billing_cycle: sub.get_one::<String>("cycle").unwrap().parse()?,
        start_date: parse_date(sub.get_one::<String>("start").unwrap())?,
        status: sub.get_one::<String>("status").unwrap().parse()?,
        notes: sub.get_one::<String>("notes").map(|s| s.to_string()),
    })
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(conn)?;
    let mut store = SubscriptionStore::new(user);
    let entry = store.add(conn, draft_from(sub)?)?;
    println!(
        "Recorded subscription '{}' ({} {}) from {} [id {}]",
        entry.name, entry.amount, entry.billing_cycle, entry.start_date, entry.id
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(conn)?;
    let mut store = SubscriptionStore::new(user);
    store.fetch(conn)?;
    let range = parse_range(sub)?;
    let mut entries: Vec<_> = store
        .entries()
        .iter()
        .filter(|e| range.contains(e.start_date))
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
                e.name.clone(),
                format_currency(e.amount, prefs.currency),
                e.billing_cycle.to_string(),
                format_day(e.start_date, prefs.date_format),
                e.status.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Name", "Amount", "Cycle", "Since", "Status"],
            rows,
        )
    );
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(conn)?;
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut store = SubscriptionStore::new(user);
    store.fetch(conn)?;
    let entry = store.edit(conn, id, draft_from(sub)?)?;
    println!(
        "Updated subscription {} ('{}', {})",
        entry.id, entry.name, entry.status
    );
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(conn)?;
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut store = SubscriptionStore::new(user);
    store.fetch(conn)?;
    store.delete(conn, id)?;
    println!("Removed subscription {}", id);
    Ok(())
}
