use crate::common::error::LedgerError;
use crate::common::money::Money;
use crate::domain::entry::Payment;
use crate::store::LedgerStore;

/// Records a payment against an account's balance.
///
/// Payments are accepted for any key, even one with no sales or credits;
/// such a payment surfaces later as a negative balance.
pub fn handle<S: LedgerStore>(
    store: &mut S,
    account_key: &str,
    amount: Money,
) -> Result<(), LedgerError> {
    if !amount.is_positive() {
        return Err(LedgerError::InvalidAmount(amount.to_string_2dp()));
    }

    store.append_payment(Payment {
        account_key: account_key.to_string(),
        amount,
    })?;
    tracing::info!(account_key, amount = %amount, "payment recorded");
    Ok(())
}
