pub mod statement;
pub mod summary;

use chrono::{DateTime, Utc};

pub(crate) fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}
