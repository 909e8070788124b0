// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Display preferences (currency and date format), persisted device-locally
//! as JSON under a fixed path in the platform config dir. Not synced to the
//! database; purely a client-side setting.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::db;
use crate::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INR" => Ok(Currency::Inr),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            _ => Err(StoreError::InvalidField {
                field: "currency",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatePattern {
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    #[serde(rename = "YYYY-MM-DD")]
    YearMonthDay,
}

impl DatePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatePattern::DayMonthYear => "DD/MM/YYYY",
            DatePattern::MonthDayYear => "MM/DD/YYYY",
            DatePattern::YearMonthDay => "YYYY-MM-DD",
        }
    }

    pub fn strftime(&self) -> &'static str {
        match self {
            DatePattern::DayMonthYear => "%d/%m/%Y",
            DatePattern::MonthDayYear => "%m/%d/%Y",
            DatePattern::YearMonthDay => "%Y-%m-%d",
        }
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatePattern {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DD/MM/YYYY" => Ok(DatePattern::DayMonthYear),
            "MM/DD/YYYY" => Ok(DatePattern::MonthDayYear),
            "YYYY-MM-DD" => Ok(DatePattern::YearMonthDay),
            _ => Err(StoreError::InvalidField {
                field: "date format",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub currency: Currency,
    pub date_format: DatePattern,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            currency: Currency::Inr,
            date_format: DatePattern::DayMonthYear,
        }
    }
}

pub fn prefs_path() -> Result<PathBuf> {
    Ok(db::config_dir()?.join("preferences.json"))
}

/// Missing file means defaults; a malformed file is an error.
pub fn load_from(path: &Path) -> Result<Preferences> {
    if !path.exists() {
        return Ok(Preferences::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read preferences at {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Parse preferences at {}", path.display()))
}

pub fn save_to(path: &Path, prefs: &Preferences) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(prefs)?)
        .with_context(|| format!("Write preferences at {}", path.display()))?;
    Ok(())
}

pub fn load() -> Result<Preferences> {
    load_from(&prefs_path()?)
}

pub fn save(prefs: &Preferences) -> Result<()> {
    save_to(&prefs_path()?, prefs)
}
