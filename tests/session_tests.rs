// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::error::StoreError;
use fintrack::{auth, db};
use rusqlite::Connection;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

#[test]
fn sign_in_out_cycle() {
    let conn = setup();
    assert!(auth::session_user(&conn).unwrap().is_none());

    auth::sign_in(&conn, "u1").unwrap();
    assert_eq!(auth::current_user(&conn).unwrap(), "u1");

    // switching users overwrites the session
    auth::sign_in(&conn, "u2").unwrap();
    assert_eq!(auth::current_user(&conn).unwrap(), "u2");

    auth::sign_out(&conn).unwrap();
    assert!(auth::session_user(&conn).unwrap().is_none());
}

#[test]
fn operations_without_session_fail() {
    let conn = setup();
    let err = auth::current_user(&conn).unwrap_err();
    assert!(matches!(err, StoreError::NotAuthenticated));
}
