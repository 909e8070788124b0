// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeCategory {
    Salary,
    Freelance,
    Investments,
    Other,
}

impl IncomeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeCategory::Salary => "salary",
            IncomeCategory::Freelance => "freelance",
            IncomeCategory::Investments => "investments",
            IncomeCategory::Other => "other",
        }
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncomeCategory {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "salary" => Ok(IncomeCategory::Salary),
            "freelance" => Ok(IncomeCategory::Freelance),
            "investments" => Ok(IncomeCategory::Investments),
            "other" => Ok(IncomeCategory::Other),
            _ => Err(StoreError::InvalidField {
                field: "income category",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Food,
    Grocery,
    Medical,
    Bills,
    Education,
    OnlineOrder,
    Rent,
    Entertainment,
    Shopping,
    Travel,
    Sports,
    Emi,
    Savings,
    Debt,
    Loan,
    Others,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 16] = [
        ExpenseCategory::Food,
        ExpenseCategory::Grocery,
        ExpenseCategory::Medical,
        ExpenseCategory::Bills,
        ExpenseCategory::Education,
        ExpenseCategory::OnlineOrder,
        ExpenseCategory::Rent,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Shopping,
        ExpenseCategory::Travel,
        ExpenseCategory::Sports,
        ExpenseCategory::Emi,
        ExpenseCategory::Savings,
        ExpenseCategory::Debt,
        ExpenseCategory::Loan,
        ExpenseCategory::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "food",
            ExpenseCategory::Grocery => "grocery",
            ExpenseCategory::Medical => "medical",
            ExpenseCategory::Bills => "bills",
            ExpenseCategory::Education => "education",
            ExpenseCategory::OnlineOrder => "online_order",
            ExpenseCategory::Rent => "rent",
            ExpenseCategory::Entertainment => "entertainment",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Travel => "travel",
            ExpenseCategory::Sports => "sports",
            ExpenseCategory::Emi => "emi",
            ExpenseCategory::Savings => "savings",
            ExpenseCategory::Debt => "debt",
            ExpenseCategory::Loan => "loan",
            ExpenseCategory::Others => "others",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpenseCategory::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| StoreError::InvalidField {
                field: "expense category",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    EWallet,
    NetBanking,
    Upi,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::DebitCard => "debit_card",
            PaymentMethod::EWallet => "e_wallet",
            PaymentMethod::NetBanking => "net_banking",
            PaymentMethod::Upi => "upi",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "debit_card" => Ok(PaymentMethod::DebitCard),
            "e_wallet" => Ok(PaymentMethod::EWallet),
            "net_banking" => Ok(PaymentMethod::NetBanking),
            "upi" => Ok(PaymentMethod::Upi),
            _ => Err(StoreError::InvalidField {
                field: "payment method",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentCategory {
    Stocks,
    MutualFunds,
    RealEstate,
    Crypto,
    Bonds,
    Gold,
    Other,
}

impl InvestmentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentCategory::Stocks => "stocks",
            InvestmentCategory::MutualFunds => "mutual_funds",
            InvestmentCategory::RealEstate => "real_estate",
            InvestmentCategory::Crypto => "crypto",
            InvestmentCategory::Bonds => "bonds",
            InvestmentCategory::Gold => "gold",
            InvestmentCategory::Other => "other",
        }
    }
}

impl fmt::Display for InvestmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestmentCategory {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stocks" => Ok(InvestmentCategory::Stocks),
            "mutual_funds" => Ok(InvestmentCategory::MutualFunds),
            "real_estate" => Ok(InvestmentCategory::RealEstate),
            "crypto" => Ok(InvestmentCategory::Crypto),
            "bonds" => Ok(InvestmentCategory::Bonds),
            "gold" => Ok(InvestmentCategory::Gold),
            "other" => Ok(InvestmentCategory::Other),
            _ => Err(StoreError::InvalidField {
                field: "investment category",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    Monthly,
    Quarterly,
    Yearly,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Quarterly => "quarterly",
            BillingCycle::Yearly => "yearly",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingCycle {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(BillingCycle::Monthly),
            "quarterly" => Ok(BillingCycle::Quarterly),
            "yearly" => Ok(BillingCycle::Yearly),
            _ => Err(StoreError::InvalidField {
                field: "billing cycle",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(SubscriptionStatus::Active),
            "cancelled" => Ok(SubscriptionStatus::Cancelled),
            _ => Err(StoreError::InvalidField {
                field: "subscription status",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub id: i64,
    pub user_id: String,
    pub amount: Decimal,
    pub category: IncomeCategory,
    pub description: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: i64,
    pub user_id: String,
    pub amount: Decimal,
    pub category: ExpenseCategory,
    pub description: String,
    pub date: NaiveDate,
    pub paid_via: PaymentMethod,
}

/// `amount` is a cached derived value, always units * price; the store
/// recomputes it on every write and never accepts it from callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentEntry {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub units: Decimal,
    pub price: Decimal,
    pub amount: Decimal,
    pub category: InvestmentCategory,
    pub notes: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionEntry {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub amount: Decimal,
    pub billing_cycle: BillingCycle,
    pub start_date: NaiveDate,
    pub status: SubscriptionStatus,
    pub notes: Option<String>,
}

// Drafts carry the caller-supplied fields for add/edit; ids and the owning
// user are attached by the stores.

#[derive(Debug, Clone)]
pub struct IncomeDraft {
    pub amount: Decimal,
    pub category: IncomeCategory,
    pub description: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub amount: Decimal,
    pub category: ExpenseCategory,
    pub description: String,
    pub date: NaiveDate,
    pub paid_via: PaymentMethod,
}

#[derive(Debug, Clone)]
pub struct InvestmentDraft {
    pub name: String,
    pub units: Decimal,
    pub price: Decimal,
    pub category: InvestmentCategory,
    pub notes: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct SubscriptionDraft {
    pub name: String,
    pub amount: Decimal,
    pub billing_cycle: BillingCycle,
    pub start_date: NaiveDate,
    pub status: SubscriptionStatus,
    pub notes: Option<String>,
}
