use std::io::{BufWriter, Write, stdout};

use crate::common::error::AppError;
use crate::common::money::Money;
use crate::engine::LedgerEngine;
use crate::store::CsvStore;

/// Runs one ledger command against a CSV data directory.
///
/// Usage: `credit_ledger <data-dir> <command> [args]` with commands
/// `accounts [query]`, `statement <key>`, `report`,
/// `credit <key> <amount> [note...]`, `pay <key> <amount>`.
pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 3 {
        return Err(AppError::MissingArg);
    }
    let data_dir = &args[1];
    let command = args[2].as_str();

    let store = CsvStore::open(data_dir)?;
    let mut engine = LedgerEngine::new(store);

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());

    match command {
        "accounts" => {
            let query = args.get(3).map(String::as_str).unwrap_or("");
            for row in engine.list_accounts(query)? {
                let name = row
                    .name
                    .map(|n| format!(" ({n})"))
                    .unwrap_or_default();
                writeln!(
                    out,
                    "{}{}  Owed: ${} | Paid: ${} | Balance: ${}",
                    row.account_key,
                    name,
                    row.totals.owed.to_string_2dp(),
                    row.totals.paid.to_string_2dp(),
                    row.totals.balance.to_string_2dp()
                )?;
            }
        }
        "statement" => {
            let key = args.get(3).ok_or(AppError::MissingArg)?;
            match engine.statement(key)? {
                Some(text) => writeln!(out, "{text}")?,
                None => return Err(AppError::UnknownAccount(key.clone())),
            }
        }
        "report" => {
            writeln!(out, "{}", engine.report()?)?;
        }
        "credit" => {
            let key = args.get(3).ok_or(AppError::MissingArg)?;
            let amount = parse_amount(args.get(4))?;
            let note = args.get(5..).map(|rest| rest.join(" ")).unwrap_or_default();
            engine.grant_manual_credit(key, amount, &note)?;
        }
        "pay" => {
            let key = args.get(3).ok_or(AppError::MissingArg)?;
            let amount = parse_amount(args.get(4))?;
            engine.record_payment(key, amount)?;
        }
        other => return Err(AppError::UnknownCommand(other.to_string())),
    }

    out.flush()?;
    Ok(())
}

fn parse_amount(arg: Option<&String>) -> Result<Money, AppError> {
    let raw = arg.ok_or(AppError::MissingArg)?;
    raw.parse::<Money>()
        .map_err(|e| AppError::Parse(format!("amount {raw}: {e}")))
}
