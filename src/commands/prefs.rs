// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::prefs;
use crate::utils::pretty_table;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(sub),
        _ => show(),
    }
}

fn show() -> Result<()> {
    let p = prefs::load()?;
    let rows = vec![
        vec!["Currency".to_string(), p.currency.to_string()],
        vec!["Date format".to_string(), p.date_format.to_string()],
    ];
    println!("{}", pretty_table(&["Preference", "Value"], rows));
    Ok(())
}

fn set(sub: &clap::ArgMatches) -> Result<()> {
    let mut p = prefs::load()?;
    if let Some(c) = sub.get_one::<String>("currency") {
        p.currency = c.parse()?;
    }
    if let Some(d) = sub.get_one::<String>("date-format") {
        p.date_format = d.parse()?;
    }
    prefs::save(&p)?;
    println!("Preferences updated: {} / {}", p.currency, p.date_format);
    Ok(())
}
