use crate::common::money::Money;
use crate::domain::entry::Payment;
use crate::domain::ledger::Ledger;
use crate::domain::sale::{Sale, SaleKind};
use crate::report::format_date;

/// Shop-wide revenue figures over the full sale set, independent of any
/// per-customer ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShopTotals {
    pub profit: Money,
    pub cash_revenue: Money,
    pub mobile_revenue: Money,
}

/// Profit sums over every sale; cash revenue over cash sales' totals;
/// mobile-money revenue over mobile sales' mobile amounts, absent amounts
/// counting as zero.
pub fn shop_totals(sales: &[Sale]) -> ShopTotals {
    let mut totals = ShopTotals::default();
    for sale in sales {
        totals.profit += sale.profit;
        match sale.kind {
            SaleKind::Cash => totals.cash_revenue += sale.total,
            SaleKind::MobileMoney => {
                totals.mobile_revenue += sale.mobile_amount.unwrap_or_else(Money::zero);
            }
            SaleKind::Credit => {}
        }
    }
    totals
}

/// A payment joined with the display name its account resolves to.
#[derive(Debug, Clone)]
pub struct AnnotatedPayment {
    pub account_key: String,
    pub name: Option<String>,
    pub amount: Money,
}

pub fn annotate_payments(payments: &[Payment], ledger: &Ledger) -> Vec<AnnotatedPayment> {
    payments
        .iter()
        .map(|payment| AnnotatedPayment {
            account_key: payment.account_key.clone(),
            name: ledger
                .account(&payment.account_key)
                .and_then(|account| account.customer_name())
                .map(str::to_string),
            amount: payment.amount,
        })
        .collect()
}

/// Renders the shop report: the totals block, every sale with its items in
/// the feed's newest-first order, then all credit payments with resolved
/// names.
pub fn render(sales: &[Sale], payments: &[Payment], ledger: &Ledger) -> String {
    let totals = shop_totals(sales);

    let mut lines: Vec<String> = Vec::new();

    lines.push("SHOP REPORT".to_string());
    lines.push("----------------------------".to_string());
    lines.push(format!("Total Profit: ${}", totals.profit.to_string_2dp()));
    lines.push(format!(
        "Total Revenue (Cash): ${}",
        totals.cash_revenue.to_string_2dp()
    ));
    lines.push(format!(
        "Total Mobile Money Revenue: {}",
        totals.mobile_revenue.to_string_0dp()
    ));
    lines.push(String::new());

    lines.push("SALES:".to_string());
    for sale in sales {
        let mut heading = format!("{} ({})", format_date(sale.date), sale.kind.label());
        if let Some(customer) = sale.customer.as_deref() {
            heading.push_str(" - ");
            heading.push_str(customer);
        }
        lines.push(heading);
        for item in &sale.items {
            lines.push(format!(
                "   - {} x{} = ${}",
                item.name,
                item.quantity,
                item.extension().to_string_2dp()
            ));
        }
        lines.push(format!(
            "Revenue: ${} | Profit: ${}",
            sale.total.to_string_2dp(),
            sale.profit.to_string_2dp()
        ));
        if sale.kind == SaleKind::MobileMoney {
            if let Some(amount) = sale.mobile_amount {
                lines.push(format!("Mobile Paid: {}", amount.to_string_0dp()));
            }
        }
        lines.push(String::new());
    }

    lines.push("CREDIT PAYMENTS:".to_string());
    for payment in annotate_payments(payments, ledger) {
        match payment.name {
            Some(name) => lines.push(format!(
                "{} ({}) paid ${}",
                payment.account_key,
                name,
                payment.amount.to_string_2dp()
            )),
            None => lines.push(format!(
                "{} paid ${}",
                payment.account_key,
                payment.amount.to_string_2dp()
            )),
        }
    }

    lines.join("\n")
}
