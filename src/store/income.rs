// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::models::{IncomeDraft, IncomeEntry};

/// In-memory collection of one user's income records plus the CRUD operations
/// that keep it synchronized with the database. Every operation either
/// succeeds and mutates the collection exactly once, or fails and leaves it
/// untouched.
pub struct IncomeStore {
    user_id: String,
    entries: Vec<IncomeEntry>,
}

impl IncomeStore {
    pub fn new(user_id: impl Into<String>) -> Self {
        IncomeStore {
            user_id: user_id.into(),
            entries: Vec::new(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn entries(&self) -> &[IncomeEntry] {
        &self.entries
    }

    /// Replaces the whole collection with the user's rows, newest first.
    pub fn fetch(&mut self, conn: &Connection) -> Result<(), StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, user_id, amount, category, description, date
             FROM incomes WHERE user_id=?1 ORDER BY date DESC, id DESC",
        )?;
        let mut rows = stmt.query(params![self.user_id])?;
        let mut fetched = Vec::new();
        while let Some(r) = rows.next()? {
            let amount_s: String = r.get(2)?;
            let category_s: String = r.get(3)?;
            fetched.push(IncomeEntry {
                id: r.get(0)?,
                user_id: r.get(1)?,
                amount: parse_amount(&amount_s)?,
                category: category_s.parse()?,
                description: r.get(4)?,
                date: r.get(5)?,
            });
        }
        self.entries = fetched;
        Ok(())
    }

    pub fn add(&mut self, conn: &Connection, draft: IncomeDraft) -> Result<IncomeEntry, StoreError> {
        validate(&draft)?;
        conn.execute(
            "INSERT INTO incomes(user_id, amount, category, description, date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                self.user_id,
                draft.amount.to_string(),
                draft.category.as_str(),
                draft.description,
                draft.date.to_string()
            ],
        )?;
        let entry = IncomeEntry {
            id: conn.last_insert_rowid(),
            user_id: self.user_id.clone(),
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            date: draft.date,
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Full-field replace of the row matching `id`.
    pub fn edit(
        &mut self,
        conn: &Connection,
        id: i64,
        draft: IncomeDraft,
    ) -> Result<IncomeEntry, StoreError> {
        validate(&draft)?;
        self.check_owner(conn, id)?;
        let n = conn.execute(
            "UPDATE incomes SET amount=?1, category=?2, description=?3, date=?4
             WHERE id=?5 AND user_id=?6",
            params![
                draft.amount.to_string(),
                draft.category.as_str(),
                draft.description,
                draft.date.to_string(),
                id,
                self.user_id
            ],
        )?;
        if n == 0 {
            return Err(StoreError::NotFound { id });
        }
        let entry = IncomeEntry {
            id,
            user_id: self.user_id.clone(),
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            date: draft.date,
        };
        if let Some(slot) = self.entries.iter_mut().find(|e| e.id == id) {
            *slot = entry.clone();
        }
        Ok(entry)
    }

    pub fn delete(&mut self, conn: &Connection, id: i64) -> Result<(), StoreError> {
        self.check_owner(conn, id)?;
        let n = conn.execute(
            "DELETE FROM incomes WHERE id=?1 AND user_id=?2",
            params![id, self.user_id],
        )?;
        if n == 0 {
            return Err(StoreError::NotFound { id });
        }
        self.entries.retain(|e| e.id != id);
        Ok(())
    }

    /// Sum of `amount` over the in-memory collection. Pure, no side effects.
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

    // Ownership fast path: reject mutations against rows we do not own before
    // issuing the write. The `AND user_id` clause on every UPDATE/DELETE is
    // the authoritative check.
    fn check_owner(&self, conn: &Connection, id: i64) -> Result<(), StoreError> {
        let owner: Option<String> = conn
            .query_row("SELECT user_id FROM incomes WHERE id=?1", params![id], |r| {
                r.get(0)
            })
            .optional()?;
        match owner {
            None => Err(StoreError::NotFound { id }),
            Some(u) if u != self.user_id => Err(StoreError::NotOwner { id }),
            Some(_) => Ok(()),
        }
    }
}

fn validate(draft: &IncomeDraft) -> Result<(), StoreError> {
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
