// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth;
use crate::dashboard::{expenses_by_category, monthly_average, recent_transactions, summarize};
use crate::format::{format_currency, format_day};
use crate::store::{ExpenseStore, IncomeStore, InvestmentStore, SubscriptionStore};
use crate::utils::{maybe_print_json, parse_range, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(conn)?;
    let mut incomes = IncomeStore::new(user.clone());
    let mut expenses = ExpenseStore::new(user.clone());
    let mut investments = InvestmentStore::new(user.clone());
    let mut subscriptions = SubscriptionStore::new(user);
    incomes.fetch(conn)?;
    expenses.fetch(conn)?;
    investments.fetch(conn)?;
    subscriptions.fetch(conn)?;

    let range = parse_range(m)?;
    let summary = summarize(
        incomes.entries(),
        expenses.entries(),
        investments.entries(),
        subscriptions.entries(),
        range,
    );
    let recent = recent_transactions(incomes.entries(), expenses.entries(), investments.entries(), range);
    let breakdown = expenses_by_category(expenses.entries(), range);

    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    if json_flag || jsonl_flag {
        let payload = json!({
            "summary": summary,
            "recent_transactions": recent,
            "expenses_by_category": breakdown
                .iter()
                .map(|(c, a)| json!({"category": c.as_str(), "amount": a}))
                .collect::<Vec<_>>(),
        });
        maybe_print_json(json_flag, jsonl_flag, &payload)?;
        return Ok(());
    }

    let prefs = crate::prefs::load()?;
    let money = |v| format_currency(v, prefs.currency);
    let rows = vec![
        vec!["Total Income".to_string(), money(summary.total_income)],
        vec!["Total Expenses".to_string(), money(summary.total_expenses)],
        vec![
            "Total Investments".to_string(),
            money(summary.total_investments),
        ],
        vec![
            "Monthly Subscriptions".to_string(),
            money(summary.monthly_subscription_cost),
        ],
        vec![
            "Yearly Subscriptions".to_string(),
            money(summary.yearly_subscription_cost),
        ],
        vec![
            "Available Balance".to_string(),
            money(summary.available_balance),
        ],
        vec!["Total Savings".to_string(), money(summary.total_savings)],
        vec![
            "Avg Monthly Income".to_string(),
            money(monthly_average(summary.total_income)),
        ],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));

    let recent_rows: Vec<Vec<String>> = recent
        .iter()
        .map(|t| {
            let sign = if t.kind == crate::dashboard::TransactionKind::Income {
                "+"
            } else {
                "-"
            };
            vec![
                t.kind.to_string(),
                t.label.clone(),
                format_day(t.date, prefs.date_format),
                format!("{}{}", sign, money(t.amount)),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Type", "Label", "Date", "Amount"], recent_rows)
    );

    let breakdown_rows: Vec<Vec<String>> = breakdown
        .iter()
        .map(|(c, a)| vec![c.to_string(), money(*a)])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent"], breakdown_rows));
    Ok(())
}
