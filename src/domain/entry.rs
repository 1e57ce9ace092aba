use chrono::{DateTime, Utc};

use crate::common::money::Money;

/// A credit grant not tied to a sale: opening balance, adjustment, and the
/// like. Immutable once created.
#[derive(Debug, Clone)]
pub struct ManualCredit {
    pub amount: Money,
    pub note: String,
    pub date: DateTime<Utc>,
}

/// A payment against an account's outstanding balance. Append-only; its
/// position in the store is its chronology.
#[derive(Debug, Clone)]
pub struct Payment {
    pub account_key: String,
    pub amount: Money,
}

/// A pre-existing account row as the store hands it over: the key plus any
/// manual credits granted so far. Seeds accounts that have credits but no
/// sales yet.
#[derive(Debug, Clone)]
pub struct AccountShell {
    pub account_key: String,
    pub manual_credits: Vec<ManualCredit>,
}
