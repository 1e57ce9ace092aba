use crate::domain::account::AccountTotals;
use crate::domain::ledger::Ledger;

/// One row of the accounts view: key, resolved name, computed totals.
#[derive(Debug, Clone)]
pub struct AccountSummary {
    pub account_key: String,
    pub name: Option<String>,
    pub totals: AccountTotals,
}

/// Lists accounts in key order.
///
/// Empty query: only accounts with a non-zero balance; a cleared account
/// is done and drops out of the default view. Non-empty query: matched
/// case-insensitively as a substring of the resolved name or the raw key,
/// zero-balance accounts included, so a fully-paid customer can still be
/// found by name or number.
pub fn handle(ledger: &Ledger, query: &str) -> Vec<AccountSummary> {
    let needle = query.to_lowercase();
    let mut rows = Vec::new();

    for account in ledger.accounts() {
        let totals = account.totals();
        let name = account.customer_name();

        let keep = if needle.is_empty() {
            !totals.balance.is_zero()
        } else {
            account.account_key.to_lowercase().contains(&needle)
                || name.is_some_and(|n| n.to_lowercase().contains(&needle))
        };
        if keep {
            rows.push(AccountSummary {
                account_key: account.account_key.clone(),
                name: name.map(str::to_string),
                totals,
            });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::common::money::Money;
    use crate::domain::entry::Payment;
    use crate::domain::sale::{Sale, SaleKind};

    fn credit_sale(id: u64, key: &str, total_cents: i64, customer: Option<&str>) -> Sale {
        Sale {
            id,
            items: Vec::new(),
            total: Money::new(total_cents),
            profit: Money::zero(),
            date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, id as u32).unwrap(),
            kind: SaleKind::Credit,
            mobile_amount: None,
            account_key: Some(key.to_string()),
            customer: customer.map(str::to_string),
        }
    }

    fn payment(key: &str, cents: i64) -> Payment {
        Payment {
            account_key: key.to_string(),
            amount: Money::new(cents),
        }
    }

    fn sample_ledger() -> Ledger {
        // "cleared" has paid in full; "amina" still owes; "walk-in" owes too.
        let sales = vec![
            credit_sale(3, "0711", 400, None),
            credit_sale(2, "0700", 1000, Some("Amina")),
            credit_sale(1, "cleared", 500, Some("Hassan")),
        ];
        let payments = vec![payment("cleared", 500)];
        Ledger::from_entries(&sales, &[], &payments)
    }

    #[test]
    fn empty_query_hides_cleared_accounts() {
        let rows = handle(&sample_ledger(), "");
        let keys: Vec<&str> = rows.iter().map(|r| r.account_key.as_str()).collect();
        assert_eq!(keys, vec!["0700", "0711"]);
    }

    #[test]
    fn query_matches_key_substring_including_cleared() {
        let rows = handle(&sample_ledger(), "clear");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].account_key, "cleared");
        assert!(rows[0].totals.balance.is_zero());
    }

    #[test]
    fn query_matches_resolved_name_case_insensitively() {
        let rows = handle(&sample_ledger(), "hasSAN");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].account_key, "cleared");
        assert_eq!(rows[0].name.as_deref(), Some("Hassan"));
    }

    #[test]
    fn summaries_carry_totals_and_names() {
        let rows = handle(&sample_ledger(), "0700");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name.as_deref(), Some("Amina"));
        assert_eq!(rows[0].totals.owed, Money::new(1000));
        assert_eq!(rows[0].totals.balance, Money::new(1000));
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(handle(&sample_ledger(), "zzz").is_empty());
    }
}
