//! Date keys — the zero-padded `YYYY-MM-DD` strings that index the journal.

use chrono::NaiveDate;

/// Format string for journal date keys. Month and day are always two digits.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a date as a journal key, e.g. `2025-09-01`.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a journal key back into a date.
pub fn parse_key(key: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(date_key(d), "2025-09-01");

        let d = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(date_key(d), "2025-12-31");
    }

    #[test]
    fn roundtrip() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(parse_key(&date_key(d)).unwrap(), d);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_key("not-a-date").is_err());
        assert!(parse_key("2025-13-01").is_err());
    }
}
