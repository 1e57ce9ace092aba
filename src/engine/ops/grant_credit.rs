use chrono::Utc;

use crate::common::error::LedgerError;
use crate::common::money::Money;
use crate::domain::entry::ManualCredit;
use crate::store::LedgerStore;

/// Grants a manual credit: validates, stamps the current time, appends.
/// Validation happens before the store is touched, so a rejected grant
/// writes nothing.
pub fn handle<S: LedgerStore>(
    store: &mut S,
    account_key: &str,
    amount: Money,
    note: &str,
) -> Result<(), LedgerError> {
    if !amount.is_positive() {
        return Err(LedgerError::InvalidAmount(amount.to_string_2dp()));
    }
    if account_key.is_empty() {
        return Err(LedgerError::InvalidKey);
    }

    store.append_manual_credit(
        account_key,
        ManualCredit {
            amount,
            note: note.to_string(),
            date: Utc::now(),
        },
    )?;
    tracing::info!(account_key, amount = %amount, "manual credit granted");
    Ok(())
}
