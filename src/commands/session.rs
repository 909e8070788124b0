// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::auth;

pub fn login(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = sub.get_one::<String>("user").unwrap();
    auth::sign_in(conn, user)?;
    println!("Signed in as '{}'", user);
    Ok(())
}

pub fn logout(conn: &Connection) -> Result<()> {
    auth::sign_out(conn)?;
    println!("Signed out");
    Ok(())
}

pub fn whoami(conn: &Connection) -> Result<()> {
    match auth::session_user(conn)? {
        Some(user) => println!("{}", user),
        None => println!("Not signed in"),
    }
    Ok(())
}
