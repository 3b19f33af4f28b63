//! Day-detail view models.
//!
//! `day_view` maps a journal date to a structured view model instead of a
//! rendered string, so the TUI, the CLI, and the tests all consume the same
//! aggregation logic.

use chrono::NaiveDate;

use crate::domain::DailyRecord;
use crate::journal::Journal;

/// Result of looking up one day: an explicit empty state for dates the
/// journal does not know about, never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum DayView {
    Empty { date: NaiveDate },
    Logged(DaySummary),
}

/// Aggregated detail for one logged day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total_pnl: f64,
    pub trade_count: usize,
    pub wins: usize,
    pub losses: usize,
    pub note: String,
    /// One review per trade, in original insertion order.
    pub reviews: Vec<TradeReview>,
}

/// Per-trade review block: ticker, signed pnl, note, before/after images.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeReview {
    pub ticker: String,
    pub pnl: f64,
    pub win: bool,
    pub note: String,
    pub before_image: String,
    pub after_image: String,
}

/// Look up `date` in the journal and aggregate it for display.
pub fn day_view(journal: &Journal, date: NaiveDate) -> DayView {
    match journal.day(date) {
        None => DayView::Empty { date },
        Some(record) => DayView::Logged(summarize(record)),
    }
}

/// Build the summary for a record.
///
/// `wins` counts `win == true` flags; `losses` is the complement, so
/// `wins + losses == trade_count` holds even when a win flag disagrees with
/// the sign of its pnl.
pub fn summarize(record: &DailyRecord) -> DaySummary {
    let wins = record.trades.iter().filter(|t| t.win).count();

    DaySummary {
        date: record.date,
        total_pnl: record.pnl,
        trade_count: record.trades.len(),
        wins,
        losses: record.trades.len() - wins,
        note: record.note.clone(),
        reviews: record
            .trades
            .iter()
            .map(|t| TradeReview {
                ticker: t.ticker.clone(),
                pnl: t.pnl,
                win: t.win,
                note: t.note.clone(),
                before_image: t.before_image.clone(),
                after_image: t.after_image.clone(),
            })
            .collect(),
    }
}

/// Display formatting for pnl values: exactly two decimals, no leading `+`.
/// Sign is conveyed by color at the render layer.
pub fn format_pnl(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TradeEntry;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn absent_date_yields_empty_state() {
        let view = day_view(&Journal::new(), d(2025, 9, 20));
        assert_eq!(
            view,
            DayView::Empty {
                date: d(2025, 9, 20)
            }
        );
    }

    #[test]
    fn one_win_one_loss() {
        let mut journal = Journal::new();
        journal.insert(DailyRecord::new(d(2025, 9, 1), 150.0, "").with_trades(vec![
            TradeEntry::new("AAPL", 250.0, true),
            TradeEntry::new("TSLA", -100.0, false),
        ]));

        let DayView::Logged(summary) = day_view(&journal, d(2025, 9, 1)) else {
            panic!("expected a logged day");
        };
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.losses, 1);
        assert_eq!(format_pnl(summary.total_pnl), "150.00");
    }

    #[test]
    fn losses_complement_even_with_inconsistent_flags() {
        // Positive pnl flagged as a loss: wins counts flags, losses stays
        // the complement.
        let mut journal = Journal::new();
        journal.insert(DailyRecord::new(d(2025, 9, 10), 80.0, "").with_trades(vec![
            TradeEntry::new("SPY", 80.0, false),
            TradeEntry::new("QQQ", -20.0, false),
            TradeEntry::new("IWM", 20.0, true),
        ]));

        let DayView::Logged(summary) = day_view(&journal, d(2025, 9, 10)) else {
            panic!("expected a logged day");
        };
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.losses, 2);
        assert_eq!(summary.wins + summary.losses, summary.trade_count);
    }

    #[test]
    fn reviews_preserve_trade_order() {
        let mut journal = Journal::new();
        journal.insert(DailyRecord::new(d(2025, 9, 3), -350.0, "").with_trades(vec![
            TradeEntry::new("AMZN", -250.0, false),
            TradeEntry::new("MSFT", -100.0, false),
        ]));

        let DayView::Logged(summary) = day_view(&journal, d(2025, 9, 3)) else {
            panic!("expected a logged day");
        };
        let tickers: Vec<&str> = summary.reviews.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["AMZN", "MSFT"]);
    }

    #[test]
    fn pnl_formatting() {
        assert_eq!(format_pnl(0.0), "0.00");
        assert_eq!(format_pnl(150.0), "150.00");
        assert_eq!(format_pnl(-350.5), "-350.50");
        assert_eq!(format_pnl(2.345), "2.35");
    }
}
