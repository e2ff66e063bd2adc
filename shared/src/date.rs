//! Date helpers
//!
//! The backend exchanges calendar dates as `YYYY-MM-DD`. `DateRange` is the
//! inclusive range used by attendance queries and leave requests.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire format of calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string, trimming surrounding whitespace.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Format a date the way the backend expects it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Inclusive date range, `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Returns `None` when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// A range covering exactly one day.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// The `days` days leading up to and including `today`.
    pub fn last_days(today: NaiveDate, days: u64) -> Self {
        let start = today.checked_sub_days(Days::new(days)).unwrap_or(today);
        Self { start, end: today }
    }

    /// The whole calendar month containing `day`.
    pub fn month_of(day: NaiveDate) -> Self {
        let start = day.with_day(1).unwrap_or(day);
        let next_month = start
            .checked_add_months(chrono::Months::new(1))
            .unwrap_or(start);
        let end = next_month.pred_opt().filter(|d| *d >= start).unwrap_or(start);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days, both ends included.
    pub fn inclusive_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Query parameters in the shape the attendance endpoints take.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("startDate", format_date(self.start)),
            ("endDate", format_date(self.end)),
        ]
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", format_date(self.start), format_date(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(DateRange::new(d(2024, 3, 5), d(2024, 3, 4)).is_none());
        assert!(DateRange::new(d(2024, 3, 5), d(2024, 3, 5)).is_some());
    }

    #[test]
    fn inclusive_days_counts_both_ends() {
        let range = DateRange::new(d(2024, 3, 1), d(2024, 3, 5)).unwrap();
        assert_eq!(range.inclusive_days(), 5);
        assert_eq!(DateRange::single(d(2024, 3, 1)).inclusive_days(), 1);
    }

    #[test]
    fn month_of_handles_leap_february() {
        let range = DateRange::month_of(d(2024, 2, 17));
        assert_eq!(range.start(), d(2024, 2, 1));
        assert_eq!(range.end(), d(2024, 2, 29));
    }

    #[test]
    fn last_days_ends_today() {
        let range = DateRange::last_days(d(2024, 1, 10), 30);
        assert_eq!(range.start(), d(2023, 12, 11));
        assert_eq!(range.end(), d(2024, 1, 10));
        assert!(range.contains(d(2024, 1, 1)));
    }

    #[test]
    fn query_uses_backend_names() {
        let range = DateRange::single(d(2024, 7, 4));
        assert_eq!(
            range.to_query(),
            vec![
                ("startDate", "2024-07-04".to_string()),
                ("endDate", "2024-07-04".to_string())
            ]
        );
    }

    #[test]
    fn parse_date_trims_and_validates() {
        assert_eq!(parse_date(" 2024-02-29 "), Some(d(2024, 2, 29)));
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_date(""), None);
    }
}
