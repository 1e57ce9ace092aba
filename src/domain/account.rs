use crate::common::money::Money;
use crate::domain::entry::{ManualCredit, Payment};
use crate::domain::sale::Sale;

/// Owed/paid/balance for one account, computed fresh from raw entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountTotals {
    pub owed: Money,
    pub paid: Money,
    pub balance: Money,
}

/// One customer's view of the ledger, reconstructed per key from the three
/// append-only entry collections. Never stored or cached; an account exists
/// whenever at least one entry references its key.
#[derive(Debug, Clone, Default)]
pub struct CreditAccount {
    pub account_key: String,
    /// Credit sales for this key, oldest first.
    pub sales: Vec<Sale>,
    pub manual_credits: Vec<ManualCredit>,
    pub payments: Vec<Payment>,
}

impl CreditAccount {
    pub fn new(account_key: impl Into<String>) -> Self {
        Self {
            account_key: account_key.into(),
            ..Self::default()
        }
    }

    /// Folds the entry collections into totals.
    ///
    /// owed = credit-sale totals + manual credit grants, paid = payments,
    /// balance = owed - paid. Balance may go negative on overpayment; the
    /// ledger does not reject that.
    pub fn totals(&self) -> AccountTotals {
        let mut owed = Money::zero();
        for sale in &self.sales {
            owed += sale.total;
        }
        for credit in &self.manual_credits {
            owed += credit.amount;
        }

        let mut paid = Money::zero();
        for payment in &self.payments {
            paid += payment.amount;
        }

        AccountTotals {
            owed,
            paid,
            balance: owed - paid,
        }
    }

    /// The display name for this account: the first non-empty customer name
    /// attached to a sale, oldest first. Names are typed once at checkout,
    /// so later sales may omit them. Credits and payments never carry one.
    pub fn customer_name(&self) -> Option<&str> {
        self.sales
            .iter()
            .filter_map(|s| s.customer.as_deref())
            .find(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::sale::SaleKind;

    fn credit_sale(total_cents: i64, customer: Option<&str>) -> Sale {
        Sale {
            id: 1,
            items: Vec::new(),
            total: Money::new(total_cents),
            profit: Money::zero(),
            date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            kind: SaleKind::Credit,
            mobile_amount: None,
            account_key: Some("0700".to_string()),
            customer: customer.map(str::to_string),
        }
    }

    fn manual_credit(cents: i64) -> ManualCredit {
        ManualCredit {
            amount: Money::new(cents),
            note: "opening".to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap(),
        }
    }

    fn payment(cents: i64) -> Payment {
        Payment {
            account_key: "0700".to_string(),
            amount: Money::new(cents),
        }
    }

    #[test]
    fn totals_fold_all_three_collections() {
        let mut acc = CreditAccount::new("0700");
        acc.sales.push(credit_sale(1000, None));
        acc.manual_credits.push(manual_credit(500));
        acc.payments.push(payment(700));

        let t = acc.totals();
        assert_eq!(t.owed, Money::new(1500));
        assert_eq!(t.paid, Money::new(700));
        assert_eq!(t.balance, Money::new(800));
    }

    #[test]
    fn totals_of_empty_account_are_zero() {
        let t = CreditAccount::new("0700").totals();
        assert_eq!(t.owed, Money::zero());
        assert_eq!(t.paid, Money::zero());
        assert_eq!(t.balance, Money::zero());
    }

    #[test]
    fn balance_goes_negative_on_overpayment() {
        let mut acc = CreditAccount::new("0700");
        acc.payments.push(payment(300));

        let t = acc.totals();
        assert_eq!(t.owed, Money::zero());
        assert_eq!(t.balance, Money::new(-300));
    }

    #[test]
    fn customer_name_takes_first_non_empty_oldest_first() {
        let mut acc = CreditAccount::new("0700");
        acc.sales.push(credit_sale(100, None));
        acc.sales.push(credit_sale(100, Some("")));
        acc.sales.push(credit_sale(100, Some("Amina")));
        acc.sales.push(credit_sale(100, Some("Other")));

        assert_eq!(acc.customer_name(), Some("Amina"));
    }

    #[test]
    fn customer_name_absent_when_no_sale_carries_one() {
        let mut acc = CreditAccount::new("0700");
        acc.sales.push(credit_sale(100, None));
        assert_eq!(acc.customer_name(), None);
    }
}
