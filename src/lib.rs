pub mod app;
pub mod common;
pub mod domain;
pub mod engine;
pub mod report;
pub mod store;

pub use common::error::{AppError, LedgerError};
pub use common::money::{Money, Quantity};
pub use engine::{AccountSummary, LedgerEngine};
pub use store::{CsvStore, LedgerStore, MemoryStore};
