pub mod account;
pub mod entry;
pub mod ledger;
pub mod sale;
