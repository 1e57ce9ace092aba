use crate::store::StoreError;

/// Errors raised by ledger operations. Validation failures are detected
/// before any store call, so a rejected mutation never leaves partial state.
#[derive(thiserror::Error, Debug)]
pub enum LedgerError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("empty account key")]
    InvalidKey,
    #[error("persistence failure: {0}")]
    Store(#[from] StoreError),
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(
        "missing argument. usage: credit_ledger <data-dir> <accounts|statement|report|credit|pay> [args]"
    )]
    MissingArg,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("unknown account: {0}")]
    UnknownAccount(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
