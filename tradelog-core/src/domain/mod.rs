//! Domain types: daily records, trade entries, and date keys.

pub mod date_key;
pub mod day;
pub mod trade;

pub use date_key::{date_key, parse_key, DATE_KEY_FORMAT};
pub use day::DailyRecord;
pub use trade::TradeEntry;
