//! TradeLog Core — journal domain types, calendar layout, and the API client.
//!
//! This crate contains everything the terminal dashboard and CLI share:
//! - Domain types (daily records, trade entries, date keys)
//! - The date-keyed journal map
//! - Month-grid calendar layout with profit/loss classification
//! - Day-detail view models (totals, win/loss counts, trade reviews)
//! - A `JournalSource` capability backed by either the in-memory sample
//!   journal or the authenticated HTTP API
//! - The bearer-token API client for trades, notes, playbooks, and auth

pub mod api;
pub mod calendar;
pub mod domain;
pub mod journal;
pub mod sample;
pub mod source;
pub mod summary;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: shared types are Send + Sync.
    ///
    /// The TUI keeps everything on one thread today, but a fetch worker is
    /// the obvious next step; this breaks the build early if a type regresses.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::DailyRecord>();
        require_sync::<domain::DailyRecord>();
        require_send::<domain::TradeEntry>();
        require_sync::<domain::TradeEntry>();
        require_send::<journal::Journal>();
        require_sync::<journal::Journal>();
        require_send::<calendar::MonthGrid>();
        require_sync::<calendar::MonthGrid>();
        require_send::<summary::DayView>();
        require_sync::<summary::DayView>();
        require_send::<source::SourceError>();
        require_sync::<source::SourceError>();
        require_send::<api::ApiClient>();
        require_sync::<api::ApiClient>();
    }
}
