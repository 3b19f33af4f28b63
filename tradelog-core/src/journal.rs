//! The journal map — date-keyed collection of daily records.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::DailyRecord;

/// Date-keyed journal. The sole data source for calendar and day rendering.
///
/// Keys are unique by construction; inserting a record for an existing date
/// replaces it. Iteration is in date order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    days: BTreeMap<NaiveDate, DailyRecord>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<DailyRecord>) -> Self {
        let mut journal = Self::new();
        for record in records {
            journal.insert(record);
        }
        journal
    }

    /// Insert a record under its own date, replacing any existing entry.
    pub fn insert(&mut self, record: DailyRecord) {
        self.days.insert(record.date, record);
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.days.get(&date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DailyRecord)> {
        self.days.iter()
    }

    /// All records falling in the given month, in date order.
    pub fn month_records(&self, year: i32, month: u32) -> Vec<&DailyRecord> {
        self.days
            .values()
            .filter(|r| r.date.year() == year && r.date.month() == month)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn insert_replaces_same_date() {
        let mut journal = Journal::new();
        journal.insert(DailyRecord::new(d(2025, 9, 1), 100.0, "first"));
        journal.insert(DailyRecord::new(d(2025, 9, 1), -50.0, "second"));

        assert_eq!(journal.len(), 1);
        assert_eq!(journal.day(d(2025, 9, 1)).unwrap().note, "second");
    }

    #[test]
    fn month_records_filters_by_month() {
        let mut journal = Journal::new();
        journal.insert(DailyRecord::new(d(2025, 8, 30), 10.0, ""));
        journal.insert(DailyRecord::new(d(2025, 9, 1), 20.0, ""));
        journal.insert(DailyRecord::new(d(2025, 9, 15), 30.0, ""));

        let september = journal.month_records(2025, 9);
        assert_eq!(september.len(), 2);
        assert_eq!(september[0].date, d(2025, 9, 1));
    }

    #[test]
    fn missing_day_is_none() {
        let journal = Journal::new();
        assert!(journal.day(d(2025, 9, 5)).is_none());
    }
}
