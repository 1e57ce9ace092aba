pub mod csv;

use std::collections::BTreeMap;

use crate::domain::entry::{AccountShell, ManualCredit, Payment};
use crate::domain::sale::Sale;

pub use self::csv::CsvStore;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

/// The durable record store the engine reads from and appends to. Entries
/// are append-only; nothing here edits or deletes.
///
/// `fetch_all_sales` must deliver sales newest-first. Payments and each
/// shell's manual credits come back in append order, oldest first.
pub trait LedgerStore {
    fn fetch_all_sales(&self) -> Result<Vec<Sale>, StoreError>;
    fn fetch_all_accounts(&self) -> Result<Vec<AccountShell>, StoreError>;
    fn fetch_all_payments(&self) -> Result<Vec<Payment>, StoreError>;
    fn append_manual_credit(
        &mut self,
        account_key: &str,
        credit: ManualCredit,
    ) -> Result<(), StoreError>;
    fn append_payment(&mut self, payment: Payment) -> Result<(), StoreError>;
}

/// In-memory store for tests and examples.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub sales: Vec<Sale>,
    pub credits: BTreeMap<String, Vec<ManualCredit>>,
    pub payments: Vec<Payment>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryStore {
    fn fetch_all_sales(&self) -> Result<Vec<Sale>, StoreError> {
        let mut sales = self.sales.clone();
        sales.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(sales)
    }

    fn fetch_all_accounts(&self) -> Result<Vec<AccountShell>, StoreError> {
        Ok(self
            .credits
            .iter()
            .map(|(key, credits)| AccountShell {
                account_key: key.clone(),
                manual_credits: credits.clone(),
            })
            .collect())
    }

    fn fetch_all_payments(&self) -> Result<Vec<Payment>, StoreError> {
        Ok(self.payments.clone())
    }

    fn append_manual_credit(
        &mut self,
        account_key: &str,
        credit: ManualCredit,
    ) -> Result<(), StoreError> {
        self.credits
            .entry(account_key.to_string())
            .or_default()
            .push(credit);
        Ok(())
    }

    fn append_payment(&mut self, payment: Payment) -> Result<(), StoreError> {
        self.payments.push(payment);
        Ok(())
    }
}
