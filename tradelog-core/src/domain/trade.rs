//! TradeEntry — one trade within a journal day.

use serde::{Deserialize, Serialize};

/// A single trade as it appears in the journal.
///
/// `win` is stored independently of the sign of `pnl`. The source data does
/// not enforce `win == (pnl >= 0)`, so nothing here derives one from the
/// other; both fields are authoritative on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeEntry {
    pub ticker: String,
    pub pnl: f64,
    pub win: bool,
    /// Opaque file reference to the pre-trade screenshot.
    pub before_image: String,
    /// Opaque file reference to the post-trade screenshot.
    pub after_image: String,
    pub note: String,
}

impl TradeEntry {
    pub fn new(ticker: impl Into<String>, pnl: f64, win: bool) -> Self {
        Self {
            ticker: ticker.into(),
            pnl,
            win,
            before_image: String::new(),
            after_image: String::new(),
            note: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_flag_is_independent_of_pnl_sign() {
        // A positive-pnl trade flagged as a loss stays a loss.
        let trade = TradeEntry::new("AAPL", 120.0, false);
        assert!(!trade.win);
        assert!(trade.pnl > 0.0);
    }

    #[test]
    fn serialization_roundtrip() {
        let mut trade = TradeEntry::new("TSLA", -100.0, false);
        trade.note = "Stopped out, bad timing.".into();
        trade.before_image = "samples/before.png".into();

        let json = serde_json::to_string(&trade).unwrap();
        let deser: TradeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(trade, deser);
    }
}
