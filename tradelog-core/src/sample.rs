//! Seeded sample journal — the September 2025 demo data.
//!
//! Used when no API session is configured, and as a realistic fixture for
//! tests. Values are fixed so screenshots and tests stay stable.

use chrono::NaiveDate;

use crate::domain::{DailyRecord, TradeEntry};
use crate::journal::Journal;

/// Default selected date when the caller supplies none.
pub fn default_selected_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).expect("fixed reference date")
}

/// Build the five-day sample journal.
pub fn sample_journal() -> Journal {
    let d = |day: u32| NaiveDate::from_ymd_opt(2025, 9, day).expect("sample dates are valid");

    Journal::from_records(vec![
        DailyRecord::new(
            d(1),
            150.0,
            "Overall a good day. Followed my plan on AAPL, but was a bit early on TSLA.",
        )
        .with_trades(vec![
            trade(
                "AAPL",
                250.0,
                true,
                "samples/samples-img/dashboard1.png",
                "samples/samples-img/dashboard2.png",
                "Good entry on breakout.",
            ),
            trade(
                "TSLA",
                -100.0,
                false,
                "samples/samples-img/dashboard3.png",
                "samples/samples-img/dashboard4.png",
                "Stopped out, bad timing.",
            ),
        ]),
        DailyRecord::new(d(2), 500.0, "Excellent trading day. Very focused.").with_trades(vec![
            trade(
                "GOOG",
                500.0,
                true,
                "samples/samples-img/dashboard5.png",
                "samples/samples-img/dashboard6.png",
                "Caught the reversal perfectly.",
            ),
        ]),
        DailyRecord::new(d(3), -350.0, "Frustrating day. Need to work on my discipline.")
            .with_trades(vec![
                trade(
                    "AMZN",
                    -250.0,
                    false,
                    "samples/samples-img/report1.png",
                    "samples/samples-img/report2.png",
                    "Choppy market.",
                ),
                trade(
                    "MSFT",
                    -100.0,
                    false,
                    "samples/samples-img/dashboard1.png",
                    "samples/samples-img/dashboard2.png",
                    "Revenge trade.",
                ),
            ]),
        DailyRecord::new(d(4), 750.0, "Great win today. Patience paid off.").with_trades(vec![
            trade(
                "NVDA",
                750.0,
                true,
                "samples/samples-img/dashboard3.png",
                "samples/samples-img/dashboard4.png",
                "Earnings play worked out perfectly.",
            ),
        ]),
        DailyRecord::new(d(5), 0.0, "No trades today. Market was too uncertain."),
    ])
}

fn trade(
    ticker: &str,
    pnl: f64,
    win: bool,
    before: &str,
    after: &str,
    note: &str,
) -> TradeEntry {
    TradeEntry {
        ticker: ticker.into(),
        pnl,
        win,
        before_image: before.into(),
        after_image: after.into(),
        note: note.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_days_seeded() {
        let journal = sample_journal();
        assert_eq!(journal.len(), 5);
        assert!(journal.contains(default_selected_date()));
    }

    #[test]
    fn no_trade_day_present() {
        let journal = sample_journal();
        let day = journal
            .day(NaiveDate::from_ymd_opt(2025, 9, 5).unwrap())
            .unwrap();
        assert!(day.trades.is_empty());
        assert_eq!(day.pnl, 0.0);
        assert_eq!(day.note, "No trades today. Market was too uncertain.");
    }
}
