// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::models::{ExpenseDraft, ExpenseEntry};

pub struct ExpenseStore {
    user_id: String,
    entries: Vec<ExpenseEntry>,
}

impl ExpenseStore {
    pub fn new(user_id: impl Into<String>) -> Self {
        ExpenseStore {
            user_id: user_id.into(),
            entries: Vec::new(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    pub fn fetch(&mut self, conn: &Connection) -> Result<(), StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, user_id, amount, category, description, date, paid_via
             FROM expenses WHERE user_id=?1 ORDER BY date DESC, id DESC",
        )?;
        let mut rows = stmt.query(params![self.user_id])?;
        let mut fetched = Vec::new();
        while let Some(r) = rows.next()? {
            let amount_s: String = r.get(2)?;
            let category_s: String = r.get(3)?;
            let paid_via_s: String = r.get(6)?;
            fetched.push(ExpenseEntry {
                id: r.get(0)?,
                user_id: r.get(1)?,
                amount: parse_amount(&amount_s)?,
                category: category_s.parse()?,
                description: r.get(4)?,
                date: r.get(5)?,
                paid_via: paid_via_s.parse()?,
            });
        }
        self.entries = fetched;
        Ok(())
    }

    pub fn add(
        &mut self,
        conn: &Connection,
        draft: ExpenseDraft,
    ) -> Result<ExpenseEntry, StoreError> {
        validate(&draft)?;
        conn.execute(
            "INSERT INTO expenses(user_id, amount, category, description, date, paid_via)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                self.user_id,
                draft.amount.to_string(),
                draft.category.as_str(),
                draft.description,
                draft.date.to_string(),
                draft.paid_via.as_str()
            ],
        )?;
        let entry = ExpenseEntry {
            id: conn.last_insert_rowid(),
            user_id: self.user_id.clone(),
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            date: draft.date,
            paid_via: draft.paid_via,
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    pub fn edit(
        &mut self,
        conn: &Connection,
        id: i64,
        draft: ExpenseDraft,
    ) -> Result<ExpenseEntry, StoreError> {
        validate(&draft)?;
        self.check_owner(conn, id)?;
        let n = conn.execute(
            "UPDATE expenses SET amount=?1, category=?2, description=?3, date=?4, paid_via=?5
             WHERE id=?6 AND user_id=?7",
            params![
                draft.amount.to_string(),
                draft.category.as_str(),
                draft.description,
                draft.date.to_string(),
                draft.paid_via.as_str(),
                id,
                self.user_id
            ],
        )?;
        if n == 0 {
            return Err(StoreError::NotFound { id });
        }
        let entry = ExpenseEntry {
            id,
            user_id: self.user_id.clone(),
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            date: draft.date,
            paid_via: draft.paid_via,
        };
        if let Some(slot) = self.entries.iter_mut().find(|e| e.id == id) {
            *slot = entry.clone();
        }
        Ok(entry)
    }

    pub fn delete(&mut self, conn: &Connection, id: i64) -> Result<(), StoreError> {
        self.check_owner(conn, id)?;
        let n = conn.execute(
            "DELETE FROM expenses WHERE id=?1 AND user_id=?2",
            params![id, self.user_id],
        )?;
        if n == 0 {
            return Err(StoreError::NotFound { id });
        }
        self.entries.retain(|e| e.id != id);
        Ok(())
    }

    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|e| e.amount).sum()
    }

    pub fn total_for_user(&self, user_id: &str) -> Decimal {
        self.entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .map(|e| e.amount)
            .sum()
    }

    fn check_owner(&self, conn: &Connection, id: i64) -> Result<(), StoreError> {
        let owner: Option<String> = conn
            .query_row(
                "SELECT user_id FROM expenses WHERE id=?1",
                params![id],
                |r| r.get(0),
            )
            .optional()?;
        match owner {
            None => Err(StoreError::NotFound { id }),
            Some(u) if u != self.user_id => Err(StoreError::NotOwner { id }),
            Some(_) => Ok(()),
        }
    }
}

fn validate(draft: &ExpenseDraft) -> Result<(), StoreError> {
    if draft.amount <= Decimal::ZERO {
        return Err(StoreError::InvalidAmount {
            field: "amount",
            value: draft.amount,
        });
    }
    Ok(())
}

fn parse_amount(s: &str) -> Result<Decimal, StoreError> {
    s.parse::<Decimal>().map_err(|_| StoreError::InvalidField {
        field: "amount",
        value: s.to_string(),
    })
}
