// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::models::{BillingCycle, SubscriptionDraft, SubscriptionEntry};

pub struct SubscriptionStore {
    user_id: String,
    entries: Vec<SubscriptionEntry>,
}

impl SubscriptionStore {
    pub fn new(user_id: impl Into<String>) -> Self {
        SubscriptionStore {
            user_id: user_id.into(),
            entries: Vec::new(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn entries(&self) -> &[SubscriptionEntry] {
        &self.entries
    }

    pub fn fetch(&mut self, conn: &Connection) -> Result<(), StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, user_id, name, amount, billing_cycle, start_date, status, notes
             FROM subscriptions WHERE user_id=?1 ORDER BY start_date DESC, id DESC",
        )?;
        let mut rows = stmt.query(params![self.user_id])?;
        let mut fetched = Vec::new();
        while let Some(r) = rows.next()? {
            let amount_s: String = r.get(3)?;
            let cycle_s: String = r.get(4)?;
            let status_s: String = r.get(6)?;
            fetched.push(SubscriptionEntry {
                id: r.get(0)?,
                user_id: r.get(1)?,
                name: r.get(2)?,
                amount: parse_amount(&amount_s)?,
                billing_cycle: cycle_s.parse()?,
                start_date: r.get(5)?,
                status: status_s.parse()?,
                notes: r.get(7)?,
            });
        }
        self.entries = fetched;
        Ok(())
    }

    pub fn add(
        &mut self,
        conn: &Connection,
        draft: SubscriptionDraft,
    ) -> Result<SubscriptionEntry, StoreError> {
        validate(&draft)?;
        conn.execute(
            "INSERT INTO subscriptions(user_id, name, amount, billing_cycle, start_date, status, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                self.user_id,
                draft.name,
                draft.amount.to_string(),
                draft.billing_cycle.as_str(),
                draft.start_date.to_string(),
                draft.status.as_str(),
                draft.notes
            ],
        )?;
        let entry = SubscriptionEntry {
            id: conn.last_insert_rowid(),
            user_id: self.user_id.clone(),
            name: draft.name,
            amount: draft.amount,
            billing_cycle: draft.billing_cycle,
            start_date: draft.start_date,
            status: draft.status,
            notes: draft.notes,
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    pub fn edit(
        &mut self,
        conn: &Connection,
        id: i64,
        draft: SubscriptionDraft,
    ) -> Result<SubscriptionEntry, StoreError> {
        validate(&draft)?;
        self.check_owner(conn, id)?;
        let n = conn.execute(
            "UPDATE subscriptions SET name=?1, amount=?2, billing_cycle=?3, start_date=?4, status=?5, notes=?6
             WHERE id=?7 AND user_id=?8",
            params![
                draft.name,
                draft.amount.to_string(),
                draft.billing_cycle.as_str(),
                draft.start_date.to_string(),
                draft.status.as_str(),
                draft.notes,
                id,
                self.user_id
            ],
        )?;
        if n == 0 {
            return Err(StoreError::NotFound { id });
        }
        let entry = SubscriptionEntry {
            id,
            user_id: self.user_id.clone(),
            name: draft.name,
            amount: draft.amount,
            billing_cycle: draft.billing_cycle,
            start_date: draft.start_date,
            status: draft.status,
            notes: draft.notes,
        };
        if let Some(slot) = self.entries.iter_mut().find(|e| e.id == id) {
            *slot = entry.clone();
        }
        Ok(entry)
    }

    pub fn delete(&mut self, conn: &Connection, id: i64) -> Result<(), StoreError> {
        self.check_owner(conn, id)?;
        let n = conn.execute(
            "DELETE FROM subscriptions WHERE id=?1 AND user_id=?2",
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

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Normalized monthly cost across all cycles: monthly as-is, quarterly
    /// divided by 3, yearly divided by 12. Status is not consulted here; the
    /// dashboard applies its own active-only buckets.
    pub fn monthly_cost(&self) -> Decimal {
        self.entries
            .iter()
            .map(|s| match s.billing_cycle {
                BillingCycle::Monthly => s.amount,
                BillingCycle::Quarterly => s.amount / Decimal::from(3),
                BillingCycle::Yearly => s.amount / Decimal::from(12),
            })
            .sum()
    }

    fn check_owner(&self, conn: &Connection, id: i64) -> Result<(), StoreError> {
        let owner: Option<String> = conn
            .query_row(
                "SELECT user_id FROM subscriptions WHERE id=?1",
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

fn validate(draft: &SubscriptionDraft) -> Result<(), StoreError> {
    if draft.amount <= Decimal::ZERO {
        return Err(StoreError::InvalidAmount {
            field: "amount",
            value: draft.amount,
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

fn parse_amount(s: &str) -> Result<Decimal, StoreError> {
    s.parse::<Decimal>().map_err(|_| StoreError::InvalidField {
        field: "amount",
        value: s.to_string(),
    })
}
