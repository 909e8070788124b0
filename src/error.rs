// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Unified error contract for every store operation: an operation either
/// succeeds and mutates local state exactly once, or returns one of these and
/// leaves local state unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no user is signed in")]
    NotAuthenticated,

    #[error("record {id} not found")]
    NotFound { id: i64 },

    #[error("record {id} belongs to another user")]
    NotOwner { id: i64 },

    #[error("{field} must be positive, got {value}")]
    InvalidAmount { field: &'static str, value: Decimal },

    #[error("invalid {field} '{value}'")]
    InvalidField { field: &'static str, value: String },

    #[error(transparent)]
    Backend(#[from] rusqlite::Error),
}
