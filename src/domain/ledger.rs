use std::collections::BTreeMap;

use crate::domain::account::CreditAccount;
use crate::domain::entry::{AccountShell, Payment};
use crate::domain::sale::{Sale, SaleKind};

/// The full account map, projected from the three entry collections on every
/// read. Keys come from account shells, credit sales, and payments alike, so
/// a payment against a key nobody has sold to still shows up (as a negative
/// balance).
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: BTreeMap<String, CreditAccount>,
}

impl Ledger {
    /// Builds the projection. The sale feed arrives newest-first from the
    /// store; each account keeps its own sales oldest-first, which is the
    /// order the name resolver and the statement expect.
    pub fn from_entries(sales: &[Sale], shells: &[AccountShell], payments: &[Payment]) -> Self {
        let mut ledger = Ledger::default();

        for shell in shells {
            let acc = ledger.get_or_create_account(&shell.account_key);
            acc.manual_credits
                .extend(shell.manual_credits.iter().cloned());
        }

        for sale in sales.iter().rev() {
            if sale.kind != SaleKind::Credit {
                continue;
            }
            if let Some(key) = sale.account_key.as_deref() {
                ledger.get_or_create_account(key).sales.push(sale.clone());
            }
        }

        for payment in payments {
            ledger
                .get_or_create_account(&payment.account_key)
                .payments
                .push(payment.clone());
        }

        ledger
    }

    pub fn get_or_create_account(&mut self, key: &str) -> &mut CreditAccount {
        self.accounts
            .entry(key.to_string())
            .or_insert_with(|| CreditAccount::new(key))
    }

    pub fn account(&self, key: &str) -> Option<&CreditAccount> {
        self.accounts.get(key)
    }

    /// Accounts in key order, for deterministic listings.
    pub fn accounts(&self) -> impl Iterator<Item = &CreditAccount> {
        self.accounts.values()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
