use chrono::{DateTime, Utc};

use crate::common::money::{Money, Quantity};

/// How a sale was settled at the till.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleKind {
    Cash,
    Credit,
    MobileMoney,
}

impl SaleKind {
    pub fn label(&self) -> &'static str {
        match self {
            SaleKind::Cash => "cash",
            SaleKind::Credit => "credit",
            SaleKind::MobileMoney => "mobile money",
        }
    }
}

/// Whether a line is sold per piece or by weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Piece,
    Weight,
}

#[derive(Debug, Clone)]
pub struct LineItem {
    pub id: u64,
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Unit cost.
    pub cost: Money,
    /// Fractional only when `unit` is `Weight`.
    pub quantity: Quantity,
    pub unit: Unit,
}

impl LineItem {
    /// Price times quantity, for display lines.
    pub fn extension(&self) -> Money {
        self.price.extend(self.quantity)
    }
}

/// A completed checkout. Immutable once created; owned by the ledger store.
#[derive(Debug, Clone)]
pub struct Sale {
    pub id: u64,
    pub items: Vec<LineItem>,
    pub total: Money,
    pub profit: Money,
    pub date: DateTime<Utc>,
    pub kind: SaleKind,
    /// Present iff `kind` is `MobileMoney`.
    pub mobile_amount: Option<Money>,
    /// Grouping key for credit sales; `None` for cash and mobile sales.
    pub account_key: Option<String>,
    /// Display name typed at checkout, set only for credit sales.
    pub customer: Option<String>,
}
