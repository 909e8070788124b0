// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derives dashboard figures from the stores' in-memory collections. All of
//! this is pure and synchronous over already-fetched data; callers recompute
//! whenever a collection or the range changes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::models::{
    BillingCycle, ExpenseCategory, ExpenseEntry, IncomeEntry, InvestmentEntry, SubscriptionEntry,
    SubscriptionStatus,
};

/// Number of entries in the recent-transactions feed.
pub const RECENT_LIMIT: usize = 5;

/// Inclusive date range; a missing bound leaves that side unbounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        DateRange { from, to }
    }

    pub fn unbounded() -> Self {
        DateRange::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|f| date >= f) && self.to.is_none_or(|t| date <= t)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub total_investments: Decimal,
    pub monthly_subscription_cost: Decimal,
    pub yearly_subscription_cost: Decimal,
    pub available_balance: Decimal,
    pub total_savings: Decimal,
}

pub fn summarize(
    incomes: &[IncomeEntry],
    expenses: &[ExpenseEntry],
    investments: &[InvestmentEntry],
    subscriptions: &[SubscriptionEntry],
    range: DateRange,
) -> DashboardSummary {
    let total_income: Decimal = incomes
        .iter()
        .filter(|i| range.contains(i.date))
        .map(|i| i.amount)
        .sum();
    let total_expenses: Decimal = expenses
        .iter()
        .filter(|e| range.contains(e.date))
        .map(|e| e.amount)
        .sum();
    let total_investments: Decimal = investments
        .iter()
        .filter(|i| range.contains(i.date))
        .map(|i| i.amount)
        .sum();

    // Subscriptions filter on start_date; only active ones count toward cost.
    let monthly_subscription_cost: Decimal = subscriptions
        .iter()
        .filter(|s| {
            range.contains(s.start_date)
                && s.billing_cycle == BillingCycle::Monthly
                && s.status == SubscriptionStatus::Active
        })
        .map(|s| s.amount)
        .sum();
    let yearly_subscription_cost: Decimal = subscriptions
        .iter()
        .filter(|s| {
            range.contains(s.start_date)
                && s.billing_cycle == BillingCycle::Yearly
                && s.status == SubscriptionStatus::Active
        })
        .map(|s| s.amount)
        .sum();

    let yearly_as_monthly = yearly_subscription_cost / Decimal::from(12);
    let available_balance = total_income
        - total_expenses
        - total_investments
        - monthly_subscription_cost
        - yearly_as_monthly;
    let total_savings =
        total_income - total_expenses - monthly_subscription_cost - yearly_as_monthly;

    DashboardSummary {
        total_income,
        total_expenses,
        total_investments,
        monthly_subscription_cost,
        yearly_subscription_cost,
        available_balance,
        total_savings,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
    Investment,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
            TransactionKind::Investment => "investment",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentTransaction {
    pub kind: TransactionKind,
    pub id: i64,
    /// Category for incomes and expenses, name for investments.
    pub label: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// Incomes, expenses, and investments merged into one feed, filtered by the
/// range, newest first, truncated to the `RECENT_LIMIT` most recent.
pub fn recent_transactions(
    incomes: &[IncomeEntry],
    expenses: &[ExpenseEntry],
    investments: &[InvestmentEntry],
    range: DateRange,
) -> Vec<RecentTransaction> {
    let mut feed: Vec<RecentTransaction> = Vec::new();
    feed.extend(
        incomes
            .iter()
            .filter(|i| range.contains(i.date))
            .map(|i| RecentTransaction {
                kind: TransactionKind::Income,
                id: i.id,
                label: i.category.as_str().to_string(),
                amount: i.amount,
                date: i.date,
            }),
    );
    feed.extend(
        expenses
            .iter()
            .filter(|e| range.contains(e.date))
            .map(|e| RecentTransaction {
                kind: TransactionKind::Expense,
                id: e.id,
                label: e.category.as_str().to_string(),
                amount: e.amount,
                date: e.date,
            }),
    );
    feed.extend(
        investments
            .iter()
            .filter(|i| range.contains(i.date))
            .map(|i| RecentTransaction {
                kind: TransactionKind::Investment,
                id: i.id,
                label: i.name.clone(),
                amount: i.amount,
                date: i.date,
            }),
    );
    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(RECENT_LIMIT);
    feed
}

/// Per-category expense totals for the range, largest first.
pub fn expenses_by_category(
    expenses: &[ExpenseEntry],
    range: DateRange,
) -> Vec<(ExpenseCategory, Decimal)> {
    let mut agg: HashMap<ExpenseCategory, Decimal> = HashMap::new();
    for e in expenses.iter().filter(|e| range.contains(e.date)) {
        *agg.entry(e.category).or_insert(Decimal::ZERO) += e.amount;
    }
    let mut items: Vec<_> = agg.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.as_str().cmp(b.0.as_str())));
    items
}

/// Monthly average of an annual total.
pub fn monthly_average(total: Decimal) -> Decimal {
    total / Decimal::from(12)
}
