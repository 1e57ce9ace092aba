use crate::domain::account::CreditAccount;
use crate::report::format_date;

/// Renders an account's full history and totals as the printable
/// statement document.
///
/// The layout is fixed: header, per-sale breakdown with indented item
/// lines, manual credits, numbered payments, then the three total lines.
/// All money renders at exactly two decimals.
///
/// # Examples
///
/// ```
/// use credit_ledger::common::money::Money;
/// use credit_ledger::domain::account::CreditAccount;
/// use credit_ledger::domain::entry::Payment;
/// use credit_ledger::report::statement;
///
/// let mut account = CreditAccount::new("0700");
/// account.payments.push(Payment {
///     account_key: "0700".to_string(),
///     amount: Money::new(700),
/// });
///
/// let text = statement::render(&account);
/// assert!(text.starts_with("CREDIT STATEMENT"));
/// assert!(text.contains("Payment 1  |  $7.00"));
/// assert!(text.contains("BALANCE: $-7.00"));
/// ```
pub fn render(account: &CreditAccount) -> String {
    let totals = account.totals();

    let mut lines: Vec<String> = Vec::new();

    lines.push("CREDIT STATEMENT".to_string());
    lines.push("----------------------------".to_string());
    lines.push(format!("Phone: {}", account.account_key));
    if let Some(name) = account.customer_name() {
        lines.push(format!("Customer: {name}"));
    }
    lines.push(String::new());

    lines.push("SALES:".to_string());
    for sale in &account.sales {
        lines.push(format!(
            "{}  |  Total: ${}",
            format_date(sale.date),
            sale.total.to_string_2dp()
        ));
        for item in &sale.items {
            lines.push(format!(
                "   - {} x{} = ${}",
                item.name,
                item.quantity,
                item.extension().to_string_2dp()
            ));
        }
        lines.push(String::new());
    }

    lines.push(String::new());
    lines.push("MANUAL CREDITS:".to_string());
    for credit in &account.manual_credits {
        lines.push(format!(
            "{}  |  ${}  |  {}",
            format_date(credit.date),
            credit.amount.to_string_2dp(),
            credit.note
        ));
    }

    lines.push(String::new());
    lines.push("PAYMENTS:".to_string());
    for (index, payment) in account.payments.iter().enumerate() {
        lines.push(format!(
            "Payment {}  |  ${}",
            index + 1,
            payment.amount.to_string_2dp()
        ));
    }

    lines.push(String::new());
    lines.push(format!("TOTAL OWED: ${}", totals.owed.to_string_2dp()));
    lines.push(format!("TOTAL PAID: ${}", totals.paid.to_string_2dp()));
    lines.push(format!("BALANCE: ${}", totals.balance.to_string_2dp()));

    lines.join("\n")
}
