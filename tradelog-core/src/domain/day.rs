//! DailyRecord — one calendar day's trading activity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::trade::TradeEntry;

/// One day in the journal: net pnl, the day's trades in insertion order,
/// and a free-text note. A day with zero trades is a valid record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub pnl: f64,
    pub trades: Vec<TradeEntry>,
    pub note: String,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, pnl: f64, note: impl Into<String>) -> Self {
        Self {
            date,
            pnl,
            trades: Vec::new(),
            note: note.into(),
        }
    }

    pub fn with_trades(mut self, trades: Vec<TradeEntry>) -> Self {
        self.trades = trades;
        self
    }

    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_day_is_valid() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 5).unwrap();
        let day = DailyRecord::new(date, 0.0, "No trades today.");
        assert_eq!(day.trade_count(), 0);
        assert_eq!(day.pnl, 0.0);
    }

    #[test]
    fn trade_order_is_preserved() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let day = DailyRecord::new(date, 150.0, "").with_trades(vec![
            TradeEntry::new("AAPL", 250.0, true),
            TradeEntry::new("TSLA", -100.0, false),
        ]);
        let tickers: Vec<&str> = day.trades.iter().map(|t| t.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["AAPL", "TSLA"]);
    }
}
