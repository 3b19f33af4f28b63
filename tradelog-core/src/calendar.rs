//! Month-grid calendar layout.
//!
//! Pure view-model computation: the grid carries everything both calendar
//! variants need (day number for the compact dashboard grid, pnl and trade
//! count for the detailed journal grid). Rendering targets decide what to
//! show; nothing here touches a terminal or an HTML string.

use chrono::{Datelike, NaiveDate};

use crate::journal::Journal;

/// Profit/loss classification for a day cell.
///
/// Classified from the day's net pnl: `Profit` iff `pnl >= 0`. Days absent
/// from the journal get no outcome at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOutcome {
    Profit,
    Loss,
}

impl DayOutcome {
    pub fn from_pnl(pnl: f64) -> Self {
        if pnl >= 0.0 {
            DayOutcome::Profit
        } else {
            DayOutcome::Loss
        }
    }
}

/// One rendered grid unit representing a calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    /// Day of month, 1-based.
    pub day: u32,
    pub date: NaiveDate,
    /// `None` when the journal has no record for this date.
    pub outcome: Option<DayOutcome>,
    pub pnl: f64,
    pub trade_count: usize,
    pub selected: bool,
}

/// Layout of one month: leading blanks so day 1 lands under its weekday
/// column (0 = Sunday), then one cell per day.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub leading_blanks: usize,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Total grid slots emitted: blanks plus day cells.
    pub fn total_slots(&self) -> usize {
        self.leading_blanks + self.cells.len()
    }

    pub fn selected_cell(&self) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.selected)
    }
}

/// Aggregate month statistics for the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthTotals {
    pub pnl: f64,
    pub trade_count: usize,
    pub days_logged: usize,
}

/// Number of days in a month. Leap years come from chrono.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = first_of_month(year, month);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("month arithmetic stays in range");
    (next - first).num_days() as u32
}

/// Compute the month grid for `year`/`month`.
///
/// Exactly one cell is marked selected when `selected` falls inside the
/// month; a selection outside the month marks nothing.
pub fn month_grid(
    journal: &Journal,
    year: i32,
    month: u32,
    selected: Option<NaiveDate>,
) -> MonthGrid {
    let first = first_of_month(year, month);
    let leading_blanks = first.weekday().num_days_from_sunday() as usize;

    let cells = (1..=days_in_month(year, month))
        .map(|day| {
            let date = NaiveDate::from_ymd_opt(year, month, day)
                .expect("day is within the month");
            let record = journal.day(date);
            DayCell {
                day,
                date,
                outcome: record.map(|r| DayOutcome::from_pnl(r.pnl)),
                pnl: record.map_or(0.0, |r| r.pnl),
                trade_count: record.map_or(0, |r| r.trade_count()),
                selected: selected == Some(date),
            }
        })
        .collect();

    MonthGrid {
        year,
        month,
        leading_blanks,
        cells,
    }
}

/// Sum pnl, trade count, and logged-day count over a month.
pub fn month_totals(journal: &Journal, year: i32, month: u32) -> MonthTotals {
    let records = journal.month_records(year, month);
    MonthTotals {
        pnl: records.iter().map(|r| r.pnl).sum(),
        trade_count: records.iter().map(|r| r.trade_count()).sum(),
        days_logged: records.len(),
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("month must be 1-12")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DailyRecord, TradeEntry};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn september_2025_layout() {
        // 2025-09-01 is a Monday: one leading blank, 30 days.
        let grid = month_grid(&Journal::new(), 2025, 9, None);
        assert_eq!(grid.leading_blanks, 1);
        assert_eq!(grid.cells.len(), 30);
        assert_eq!(grid.total_slots(), 31);
    }

    #[test]
    fn leap_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
    }

    #[test]
    fn zero_pnl_classifies_as_profit() {
        let mut journal = Journal::new();
        journal.insert(DailyRecord::new(d(2025, 9, 5), 0.0, "No trades today."));

        let grid = month_grid(&journal, 2025, 9, None);
        assert_eq!(grid.cells[4].outcome, Some(DayOutcome::Profit));
    }

    #[test]
    fn absent_day_has_no_outcome() {
        let grid = month_grid(&Journal::new(), 2025, 9, None);
        assert!(grid.cells.iter().all(|c| c.outcome.is_none()));
    }

    #[test]
    fn exactly_one_selected_cell() {
        let grid = month_grid(&Journal::new(), 2025, 9, Some(d(2025, 9, 12)));
        let selected: Vec<&DayCell> = grid.cells.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].day, 12);
    }

    #[test]
    fn selection_outside_month_marks_nothing() {
        let grid = month_grid(&Journal::new(), 2025, 9, Some(d(2025, 10, 1)));
        assert!(grid.selected_cell().is_none());
    }

    #[test]
    fn month_totals_sum_pnl_and_trades() {
        let mut journal = Journal::new();
        journal.insert(DailyRecord::new(d(2025, 9, 1), 150.0, "").with_trades(vec![
            TradeEntry::new("AAPL", 250.0, true),
            TradeEntry::new("TSLA", -100.0, false),
        ]));
        journal.insert(
            DailyRecord::new(d(2025, 9, 2), 500.0, "")
                .with_trades(vec![TradeEntry::new("GOOG", 500.0, true)]),
        );

        let totals = month_totals(&journal, 2025, 9);
        assert_eq!(totals.pnl, 650.0);
        assert_eq!(totals.trade_count, 3);
        assert_eq!(totals.days_logged, 2);
    }
}
