//! Journal data sources.
//!
//! The `JournalSource` trait abstracts over where daily records come from
//! (the in-memory sample journal or the live API) so the renderers never
//! change when the backing store does. A date the source does not know
//! about is `Ok(None)`, never an error.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::api::types::{NoteListResponse, NoteRow, TradeListResponse, TradeRow};
use crate::api::{ApiClient, ApiError};
use crate::domain::{date_key, DailyRecord, TradeEntry};
use crate::journal::Journal;

/// Errors a source can surface. Missing days are not among them.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("network unreachable: {0}")]
    Network(String),

    #[error("session expired or not logged in")]
    Unauthorized,

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("server error: {0}")]
    Server(String),
}

impl From<ApiError> for SourceError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => SourceError::Unauthorized,
            ApiError::Network(msg) | ApiError::Timeout(msg) => SourceError::Network(msg),
            ApiError::Decode(msg) => SourceError::Decode(msg),
            other => SourceError::Server(other.to_string()),
        }
    }
}

/// Capability to fetch journal data by day or by month.
pub trait JournalSource {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    fn fetch_day(&self, date: NaiveDate) -> Result<Option<DailyRecord>, SourceError>;

    fn fetch_month(&self, year: i32, month: u32) -> Result<Journal, SourceError>;
}

// ── Static source ──

/// Source backed by an in-memory journal (sample data, tests).
pub struct StaticSource {
    journal: Journal,
}

impl StaticSource {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl JournalSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch_day(&self, date: NaiveDate) -> Result<Option<DailyRecord>, SourceError> {
        Ok(self.journal.day(date).cloned())
    }

    fn fetch_month(&self, year: i32, month: u32) -> Result<Journal, SourceError> {
        Ok(Journal::from_records(
            self.journal
                .month_records(year, month)
                .into_iter()
                .cloned()
                .collect(),
        ))
    }
}

// ── API source ──

/// Source backed by the authenticated journal API.
///
/// The server has no daily-record endpoint, so each day is assembled here:
/// `/trades/` rows (already sorted by entry time) become trade entries, the
/// day's pnl is their sum, and the day note is the first `/notes/` entry
/// for that date.
pub struct ApiSource {
    client: ApiClient,
}

impl ApiSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn trades_for(&self, filter: &[(&str, &str)]) -> Result<Vec<TradeRow>, SourceError> {
        let resp = self.client.get_trades(filter)?;
        let body: TradeListResponse = resp
            .json()
            .map_err(|e| SourceError::Decode(format!("trade list: {e}")))?;
        Ok(body.trades)
    }

    fn notes_for(&self, filter: &[(&str, &str)]) -> Result<Vec<NoteRow>, SourceError> {
        let resp = self.client.get_notes(filter)?;
        let body: NoteListResponse = resp
            .json()
            .map_err(|e| SourceError::Decode(format!("note list: {e}")))?;
        Ok(body.notes)
    }
}

impl JournalSource for ApiSource {
    fn name(&self) -> &str {
        "api"
    }

    fn fetch_day(&self, date: NaiveDate) -> Result<Option<DailyRecord>, SourceError> {
        let key = date_key(date);
        let trades = self.trades_for(&[("date", key.as_str())])?;
        let notes = self.notes_for(&[("date", key.as_str())])?;

        if trades.is_empty() && notes.is_empty() {
            return Ok(None);
        }
        Ok(Some(assemble_day(date, trades, &notes)))
    }

    fn fetch_month(&self, year: i32, month: u32) -> Result<Journal, SourceError> {
        let key = format!("{year:04}-{month:02}");
        let trades = self.trades_for(&[("month", key.as_str())])?;
        let notes = self.notes_for(&[("month", key.as_str())])?;

        // Group rows by their calendar day; server order within a day is
        // entry time ascending and is preserved.
        let mut by_day: BTreeMap<NaiveDate, Vec<TradeRow>> = BTreeMap::new();
        for row in trades {
            let date = row_date(&row.entry_datetime)?;
            by_day.entry(date).or_default().push(row);
        }

        let mut notes_by_day: BTreeMap<NaiveDate, Vec<NoteRow>> = BTreeMap::new();
        for note in notes {
            let date = row_date(&note.created_at)?;
            notes_by_day.entry(date).or_default().push(note);
        }

        let mut journal = Journal::new();
        for (date, rows) in by_day {
            let day_notes = notes_by_day.remove(&date).unwrap_or_default();
            journal.insert(assemble_day(date, rows, &day_notes));
        }
        // Days with a note but no trades are still journal days.
        for (date, day_notes) in notes_by_day {
            journal.insert(assemble_day(date, Vec::new(), &day_notes));
        }
        Ok(journal)
    }
}

fn assemble_day(date: NaiveDate, rows: Vec<TradeRow>, notes: &[NoteRow]) -> DailyRecord {
    let trades: Vec<TradeEntry> = rows
        .into_iter()
        .map(|row| TradeEntry {
            ticker: row.ticker,
            pnl: row.total_pnl,
            win: row.result == "win",
            // The live store keeps a single screenshot per trade.
            before_image: row.screenshot_filename.unwrap_or_default(),
            after_image: String::new(),
            note: row.trade_note.unwrap_or_default(),
        })
        .collect();

    let pnl = trades.iter().map(|t| t.pnl).sum();
    let note = notes.first().map(|n| n.content.clone()).unwrap_or_default();

    DailyRecord {
        date,
        pnl,
        trades,
        note,
    }
}

/// Extract the calendar date from an ISO datetime like
/// `2025-09-01T09:30:00Z`; the key prefix is always the first ten bytes.
fn row_date(datetime: &str) -> Result<NaiveDate, SourceError> {
    let prefix = datetime.get(..10).ok_or_else(|| {
        SourceError::Decode(format!("datetime too short: {datetime:?}"))
    })?;
    crate::domain::parse_key(prefix)
        .map_err(|e| SourceError::Decode(format!("bad datetime {datetime:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_journal;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn static_source_returns_known_day() {
        let source = StaticSource::new(sample_journal());
        let day = source.fetch_day(d(2025, 9, 2)).unwrap().unwrap();
        assert_eq!(day.pnl, 500.0);
        assert_eq!(day.trades[0].ticker, "GOOG");
    }

    #[test]
    fn static_source_absent_day_is_none() {
        let source = StaticSource::new(sample_journal());
        assert!(source.fetch_day(d(2025, 9, 20)).unwrap().is_none());
    }

    #[test]
    fn static_source_month_is_filtered() {
        let source = StaticSource::new(sample_journal());
        assert_eq!(source.fetch_month(2025, 9).unwrap().len(), 5);
        assert!(source.fetch_month(2025, 8).unwrap().is_empty());
    }

    #[test]
    fn assemble_day_sums_pnl_and_keeps_order() {
        let rows = vec![
            TradeRow {
                id: 1,
                ticker: "AAPL".into(),
                result: "win".into(),
                total_pnl: 250.0,
                entry_datetime: "2025-09-01T09:30:00Z".into(),
                exit_datetime: "2025-09-01T10:15:00Z".into(),
                risk_reward: None,
                position: None,
                trade_note: Some("Good entry on breakout.".into()),
                screenshot_filename: Some("aapl.png".into()),
            },
            TradeRow {
                id: 2,
                ticker: "TSLA".into(),
                result: "loss".into(),
                total_pnl: -100.0,
                entry_datetime: "2025-09-01T11:00:00Z".into(),
                exit_datetime: "2025-09-01T11:20:00Z".into(),
                risk_reward: None,
                position: None,
                trade_note: None,
                screenshot_filename: None,
            },
        ];
        let notes = vec![NoteRow {
            id: 1,
            title: "Daily".into(),
            content: "Overall a good day.".into(),
            created_at: "2025-09-01T16:00:00Z".into(),
        }];

        let day = assemble_day(d(2025, 9, 1), rows, &notes);
        assert_eq!(day.pnl, 150.0);
        assert_eq!(day.trades.len(), 2);
        assert!(day.trades[0].win);
        assert!(!day.trades[1].win);
        assert_eq!(day.note, "Overall a good day.");
        assert_eq!(day.trades[0].before_image, "aapl.png");
    }

    #[test]
    fn row_date_parses_iso_prefix() {
        assert_eq!(row_date("2025-09-01T09:30:00Z").unwrap(), d(2025, 9, 1));
        assert!(row_date("garbage").is_err());
    }
}
