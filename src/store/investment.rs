// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::models::{InvestmentDraft, InvestmentEntry};

/// Investment records carry a derived `amount` column. It is recomputed here
/// as units * price on every add/edit; callers never supply it.
pub struct InvestmentStore {
    user_id: String,
    entries: Vec<InvestmentEntry>,
}

impl InvestmentStore {
    pub fn new(user_id: impl Into<String>) -> Self {
        InvestmentStore {
            user_id: user_id.into(),
            entries: Vec::new(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn entries(&self) -> &[InvestmentEntry] {
        &self.entries
    }

    pub fn fetch(&mut self, conn: &Connection) -> Result<(), StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, user_id, name, units, price, amount, category, notes, date
             FROM investments WHERE user_id=?1 ORDER BY date DESC, id DESC",
        )?;
        let mut rows = stmt.query(params![self.user_id])?;
        let mut fetched = Vec::new();
        while let Some(r) = rows.next()? {
            let units_s: String = r.get(3)?;
            let price_s: String = r.get(4)?;
            let amount_s: String = r.get(5)?;
            let category_s: String = r.get(6)?;
            fetched.push(InvestmentEntry {
                id: r.get(0)?,
                user_id: r.get(1)?,
                name: r.get(2)?,
                units: parse_decimal_field(&units_s, "units")?,
                price: parse_decimal_field(&price_s, "price")?,
                amount: parse_decimal_field(&amount_s, "amount")?,
                category: category_s.parse()?,
                notes: r.get(7)?,
                date: r.get(8)?,
            });
        }
        self.entries = fetched;
        Ok(())
    }

    pub fn add(
        &mut self,
        conn: &Connection,
        draft: InvestmentDraft,
    ) -> Result<InvestmentEntry, StoreError> {
        validate(&draft)?;
        let amount = draft.units * draft.price;
        conn.execute(
            "INSERT INTO investments(user_id, name, units, price, amount, category, notes, date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                self.user_id,
                draft.name,
                draft.units.to_string(),
                draft.price.to_string(),
                amount.to_string(),
                draft.category.as_str(),
                draft.notes,
                draft.date.to_string()
            ],
        )?;
        let entry = InvestmentEntry {
            id: conn.last_insert_rowid(),
            user_id: self.user_id.clone(),
            name: draft.name,
            units: draft.units,
            price: draft.price,
            amount,
            category: draft.category,
            notes: draft.notes,
            date: draft.date,
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    pub fn edit(
        &mut self,
        conn: &Connection,
        id: i64,
        draft: InvestmentDraft,
    ) -> Result<InvestmentEntry, StoreError> {
        validate(&draft)?;
        self.check_owner(conn, id)?;
        let amount = draft.units * draft.price;
        let n = conn.execute(
            "UPDATE investments SET name=?1, units=?2, price=?3, amount=?4, category=?5, notes=?6, date=?7
             WHERE id=?8 AND user_id=?9",
            params![
                draft.name,
                draft.units.to_string(),
                draft.price.to_string(),
                amount.to_string(),
                draft.category.as_str(),
                draft.notes,
                draft.date.to_string(),
                id,
                self.user_id
            ],
        )?;
        if n == 0 {
            return Err(StoreError::NotFound { id });
        }
        let entry = InvestmentEntry {
            id,
            user_id: self.user_id.clone(),
            name: draft.name,
            units: draft.units,
            price: draft.price,
            amount,
            category: draft.category,
            notes: draft.notes,
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
            "DELETE FROM investments WHERE id=?1 AND user_id=?2",
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
                "SELECT user_id FROM investments WHERE id=?1",
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

fn validate(draft: &InvestmentDraft) -> Result<(), StoreError> {
    if draft.units <= Decimal::ZERO {
        return Err(StoreError::InvalidAmount {
            field: "units",
            value: draft.units,
        });
    }
    if draft.price <= Decimal::ZERO {
        return Err(StoreError::InvalidAmount {
            field: "price",
            value: draft.price,
        });
    }
    if draft.name.trim().is_empty() {
        return Err(StoreError::InvalidField {
            field: "name",
            value: draft.name.clone(),
        });
    }
    Ok(())
}

fn parse_decimal_field(s: &str, field: &'static str) -> Result<Decimal, StoreError> {
    s.parse::<Decimal>().map_err(|_| StoreError::InvalidField {
        field,
        value: s.to_string(),
    })
}
