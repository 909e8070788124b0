// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Session provider. The stores treat the signed-in user id as the ownership
//! key for every row they touch; everything else about authentication lives
//! outside this crate.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::StoreError;

pub fn session_user(conn: &Connection) -> Result<Option<String>, StoreError> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key='session_user'",
            [],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

/// The signed-in user id, or `NotAuthenticated` when nobody is signed in.
pub fn current_user(conn: &Connection) -> Result<String, StoreError> {
    session_user(conn)?.ok_or(StoreError::NotAuthenticated)
}

pub fn sign_in(conn: &Connection, user_id: &str) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('session_user', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![user_id],
    )?;
    Ok(())
}

pub fn sign_out(conn: &Connection) -> Result<(), StoreError> {
    conn.execute("DELETE FROM settings WHERE key='session_user'", [])?;
    Ok(())
}
