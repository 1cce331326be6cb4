//! Calendar helpers for report and policy dates
//!
//! Dates arrive as free text from callers and scanned documents. Parsing is
//! lenient and never fails loudly: an unparsable date is `None`, and every
//! rule that needs a date treats `None` as "not triggered".

use chrono::{Datelike, NaiveDate, Weekday};

/// Accepted date layouts, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parses a calendar date from text
///
/// Leading and trailing whitespace is ignored. Returns `None` when the text
/// matches none of the accepted layouts.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Number of whole days from `start` to `end` (negative if `end` precedes `start`)
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Returns true for Saturday and Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_date("2025-01-01"), NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(parse_date("  2025-03-20 "), NaiveDate::from_ymd_opt(2025, 3, 20));
    }

    #[test]
    fn test_parse_alternate_layouts() {
        assert_eq!(parse_date("2025/02/15"), NaiveDate::from_ymd_opt(2025, 2, 15));
        assert_eq!(parse_date("02/15/2025"), NaiveDate::from_ymd_opt(2025, 2, 15));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2025-13-40"), None);
    }

    #[test]
    fn test_days_between_is_signed() {
        let a = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(days_between(a, b), 30);
        assert_eq!(days_between(b, a), -30);
    }

    #[test]
    fn test_is_weekend() {
        // 2025-03-15 is a Saturday
        let saturday = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();
        assert!(is_weekend(saturday));
        assert!(is_weekend(sunday));
        assert!(!is_weekend(monday));
    }
}
