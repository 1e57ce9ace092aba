pub mod ops;

use crate::common::error::LedgerError;
use crate::common::money::Money;
use crate::domain::ledger::Ledger;
use crate::report;
use crate::store::LedgerStore;

pub use ops::list::AccountSummary;

/// Orchestrates the aggregation, resolution, and formatting over a ledger
/// store. Holds no ledger state of its own; every query re-projects from
/// the store, so two reads over an unchanged store always agree.
pub struct LedgerEngine<S: LedgerStore> {
    store: S,
}

impl<S: LedgerStore> LedgerEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn projection(&self) -> Result<Ledger, LedgerError> {
        let sales = self.store.fetch_all_sales()?;
        let shells = self.store.fetch_all_accounts()?;
        let payments = self.store.fetch_all_payments()?;
        Ok(Ledger::from_entries(&sales, &shells, &payments))
    }

    /// Account summaries per the dual filter rule: an empty query lists
    /// only accounts still carrying a balance, a non-empty query searches
    /// name and key regardless of balance.
    pub fn list_accounts(&self, query: &str) -> Result<Vec<AccountSummary>, LedgerError> {
        Ok(ops::list::handle(&self.projection()?, query))
    }

    pub fn grant_manual_credit(
        &mut self,
        account_key: &str,
        amount: Money,
        note: &str,
    ) -> Result<(), LedgerError> {
        ops::grant_credit::handle(&mut self.store, account_key, amount, note)
    }

    pub fn record_payment(&mut self, account_key: &str, amount: Money) -> Result<(), LedgerError> {
        ops::record_payment::handle(&mut self.store, account_key, amount)
    }

    /// The rendered statement for one account, or `None` when no entry
    /// references the key.
    pub fn statement(&self, account_key: &str) -> Result<Option<String>, LedgerError> {
        let ledger = self.projection()?;
        Ok(ledger.account(account_key).map(report::statement::render))
    }

    /// The shop-wide report over the full sale and payment sets.
    pub fn report(&self) -> Result<String, LedgerError> {
        let sales = self.store.fetch_all_sales()?;
        let shells = self.store.fetch_all_accounts()?;
        let payments = self.store.fetch_all_payments()?;
        let ledger = Ledger::from_entries(&sales, &shells, &payments);
        Ok(report::summary::render(&sales, &payments, &ledger))
    }
}
