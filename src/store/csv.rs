use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::common::money::{Money, Quantity};
use crate::domain::entry::{AccountShell, ManualCredit, Payment};
use crate::domain::sale::{LineItem, Sale, SaleKind, Unit};
use crate::store::{LedgerStore, StoreError};

const SALES_FILE: &str = "sales.csv";
const ITEMS_FILE: &str = "sale_items.csv";
const CREDITS_FILE: &str = "credits.csv";
const PAYMENTS_FILE: &str = "payments.csv";

#[derive(serde::Deserialize)]
/// Row shape of `sales.csv`. Dates are RFC 3339; optional columns stay
/// empty for sale kinds they do not apply to.
struct SaleRow {
    id: u64,
    date: String,
    #[serde(rename = "type")]
    kind: String,
    total: String,
    profit: String,
    mobile_amount: Option<String>,
    account_key: Option<String>,
    customer: Option<String>,
}

#[derive(serde::Deserialize)]
/// Row shape of `sale_items.csv`, joined to sales by `sale_id`.
struct ItemRow {
    sale_id: u64,
    item_id: u64,
    name: String,
    price: String,
    cost: String,
    quantity: String,
    unit: String,
}

#[derive(serde::Deserialize, serde::Serialize)]
struct CreditRow {
    account_key: String,
    amount: String,
    note: String,
    date: String,
}

#[derive(serde::Deserialize, serde::Serialize)]
struct PaymentRow {
    account_key: String,
    amount: String,
}

/// File-backed ledger store: one CSV per entry type inside a data
/// directory. Fetches read whole files; mutations append single rows.
#[derive(Debug)]
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn reader(path: &Path) -> Result<Option<::csv::Reader<std::fs::File>>, StoreError> {
        if !path.exists() {
            return Ok(None);
        }
        let file = std::fs::File::open(path)?;
        Ok(Some(
            ::csv::ReaderBuilder::new()
                .trim(::csv::Trim::All)
                .flexible(true)
                .from_reader(file),
        ))
    }

    fn append_row<S: serde::Serialize>(&self, file: &str, row: S) -> Result<(), StoreError> {
        let path = self.path(file);
        let write_header = !path.exists();
        let handle = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut wtr = ::csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(handle);
        wtr.serialize(row)?;
        wtr.flush()?;
        Ok(())
    }

    fn load_items(&self) -> Result<BTreeMap<u64, Vec<LineItem>>, StoreError> {
        let mut items: BTreeMap<u64, Vec<LineItem>> = BTreeMap::new();
        let Some(mut rdr) = Self::reader(&self.path(ITEMS_FILE))? else {
            return Ok(items);
        };
        for row in rdr.deserialize::<ItemRow>() {
            let row = row?;
            let unit = match row.unit.to_ascii_lowercase().as_str() {
                "piece" => Unit::Piece,
                "weight" => Unit::Weight,
                other => {
                    return Err(StoreError::Parse(format!(
                        "sale {}: unknown unit {other}",
                        row.sale_id
                    )));
                }
            };
            items.entry(row.sale_id).or_default().push(LineItem {
                id: row.item_id,
                name: row.name,
                price: parse_money(&row.price, "item price", row.sale_id)?,
                cost: parse_money(&row.cost, "item cost", row.sale_id)?,
                quantity: Quantity::from_str(&row.quantity).map_err(|e| {
                    StoreError::Parse(format!("sale {}: bad quantity: {e}", row.sale_id))
                })?,
                unit,
            });
        }
        Ok(items)
    }
}

impl LedgerStore for CsvStore {
    fn fetch_all_sales(&self) -> Result<Vec<Sale>, StoreError> {
        let Some(mut rdr) = Self::reader(&self.path(SALES_FILE))? else {
            return Ok(Vec::new());
        };
        let mut items = self.load_items()?;

        let mut sales = Vec::new();
        for row in rdr.deserialize::<SaleRow>() {
            let row = row?;
            let kind = match row.kind.to_ascii_lowercase().as_str() {
                "cash" => SaleKind::Cash,
                "credit" => SaleKind::Credit,
                "mobile-money" => SaleKind::MobileMoney,
                other => {
                    return Err(StoreError::Parse(format!(
                        "sale {}: unknown sale type {other}",
                        row.id
                    )));
                }
            };
            let mobile_amount = match row.mobile_amount.filter(|s| !s.is_empty()) {
                Some(raw) => Some(parse_money(&raw, "mobile amount", row.id)?),
                None => None,
            };
            sales.push(Sale {
                id: row.id,
                items: items.remove(&row.id).unwrap_or_default(),
                total: parse_money(&row.total, "total", row.id)?,
                profit: parse_money(&row.profit, "profit", row.id)?,
                date: parse_date(&row.date)?,
                kind,
                mobile_amount,
                account_key: row.account_key.filter(|s| !s.is_empty()),
                customer: row.customer.filter(|s| !s.is_empty()),
            });
        }

        // The feed contract is newest-first; file order is not trusted.
        sales.sort_by(|a, b| b.date.cmp(&a.date));
        tracing::debug!(count = sales.len(), "loaded sales");
        Ok(sales)
    }

    fn fetch_all_accounts(&self) -> Result<Vec<AccountShell>, StoreError> {
        let Some(mut rdr) = Self::reader(&self.path(CREDITS_FILE))? else {
            return Ok(Vec::new());
        };

        // Group rows per key, keeping each key's credits in file (append) order.
        let mut grouped: BTreeMap<String, Vec<ManualCredit>> = BTreeMap::new();
        for row in rdr.deserialize::<CreditRow>() {
            let row = row?;
            let amount = Money::from_str(&row.amount).map_err(|e| {
                StoreError::Parse(format!("credit for {}: bad amount: {e}", row.account_key))
            })?;
            grouped.entry(row.account_key).or_default().push(ManualCredit {
                amount,
                note: row.note,
                date: parse_date(&row.date)?,
            });
        }

        Ok(grouped
            .into_iter()
            .map(|(account_key, manual_credits)| AccountShell {
                account_key,
                manual_credits,
            })
            .collect())
    }

    fn fetch_all_payments(&self) -> Result<Vec<Payment>, StoreError> {
        let Some(mut rdr) = Self::reader(&self.path(PAYMENTS_FILE))? else {
            return Ok(Vec::new());
        };
        let mut payments = Vec::new();
        for row in rdr.deserialize::<PaymentRow>() {
            let row = row?;
            let amount = Money::from_str(&row.amount).map_err(|e| {
                StoreError::Parse(format!("payment for {}: bad amount: {e}", row.account_key))
            })?;
            payments.push(Payment {
                account_key: row.account_key,
                amount,
            });
        }
        Ok(payments)
    }

    fn append_manual_credit(
        &mut self,
        account_key: &str,
        credit: ManualCredit,
    ) -> Result<(), StoreError> {
        self.append_row(
            CREDITS_FILE,
            CreditRow {
                account_key: account_key.to_string(),
                amount: credit.amount.to_string_2dp(),
                note: credit.note,
                date: credit.date.to_rfc3339(),
            },
        )
    }

    fn append_payment(&mut self, payment: Payment) -> Result<(), StoreError> {
        self.append_row(
            PAYMENTS_FILE,
            PaymentRow {
                account_key: payment.account_key,
                amount: payment.amount.to_string_2dp(),
            },
        )
    }
}

fn parse_money(raw: &str, field: &str, sale_id: u64) -> Result<Money, StoreError> {
    Money::from_str(raw)
        .map_err(|e| StoreError::Parse(format!("sale {sale_id}: bad {field}: {e}")))
}

fn parse_date(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| StoreError::Parse(format!("bad date {raw}: {e}")))
}
