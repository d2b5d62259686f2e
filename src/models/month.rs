//! Calendar month used as the reference period for summaries
//!
//! A `YearMonth` is always a valid month: both its first and last day are
//! resolved when it is constructed, so the accessors cannot fail.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{TrackerError, TrackerResult};

/// A calendar month, e.g. "2026-01"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    first: NaiveDate,
    last: NaiveDate,
}

impl YearMonth {
    /// Create a month from a year and a 1-based month number
    pub fn new(year: i32, month: u32) -> TrackerResult<Self> {
        let invalid = || TrackerError::InvalidMonth(format!("{:04}-{:02}", year, month));

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let last = next_first
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self { first, last })
    }

    /// The month containing the given date
    pub fn containing(date: NaiveDate) -> TrackerResult<Self> {
        Self::new(date.year(), date.month())
    }

    /// The current month in local time
    pub fn current() -> TrackerResult<Self> {
        Self::containing(chrono::Local::now().date_naive())
    }

    /// Parse a `YYYY-MM` string
    pub fn parse(s: &str) -> TrackerResult<Self> {
        let trimmed = s.trim();
        let invalid = || TrackerError::InvalidMonth(s.to_string());

        let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4
            || month.len() != 2
            || !year.bytes().all(|b| b.is_ascii_digit())
            || !month.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// First calendar day of the month
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Last calendar day of the month (inclusive)
    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    /// Number of calendar days in the month
    pub fn days_in_month(&self) -> u32 {
        self.last.day()
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first && date <= self.last
    }

    /// The following month
    pub fn next(&self) -> Option<Self> {
        self.last.succ_opt().and_then(|d| Self::containing(d).ok())
    }

    /// The preceding month
    pub fn prev(&self) -> Option<Self> {
        self.first.pred_opt().and_then(|d| Self::containing(d).ok())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = TrackerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(month: YearMonth) -> Self {
        month.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bounds() {
        let jan = YearMonth::new(2026, 1).unwrap();
        assert_eq!(jan.first_day(), date(2026, 1, 1));
        assert_eq!(jan.last_day(), date(2026, 1, 31));

        let dec = YearMonth::new(2025, 12).unwrap();
        assert_eq!(dec.last_day(), date(2025, 12, 31));
    }

    #[test]
    fn test_leap_february() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2026, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2000, 2).unwrap().days_in_month(), 29);
    }

    #[test]
    fn test_invalid_month_number() {
        assert!(matches!(
            YearMonth::new(2026, 13),
            Err(TrackerError::InvalidMonth(_))
        ));
        assert!(YearMonth::new(2026, 0).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            YearMonth::parse("2026-03").unwrap(),
            YearMonth::new(2026, 3).unwrap()
        );
        for bad in ["2026-3", "26-03", "2026-13", "2026-00", "2026/03", "2026-03-01", ""] {
            assert!(YearMonth::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_contains() {
        let feb = YearMonth::new(2026, 2).unwrap();
        assert!(feb.contains(date(2026, 2, 1)));
        assert!(feb.contains(date(2026, 2, 28)));
        assert!(!feb.contains(date(2026, 3, 1)));
        assert!(!feb.contains(date(2026, 1, 31)));
    }

    #[test]
    fn test_navigation() {
        let dec = YearMonth::new(2025, 12).unwrap();
        assert_eq!(dec.next().unwrap(), YearMonth::new(2026, 1).unwrap());
        assert_eq!(
            YearMonth::new(2026, 1).unwrap().prev().unwrap(),
            YearMonth::new(2025, 12).unwrap()
        );
    }

    #[test]
    fn test_serializes_as_month_string() {
        let month = YearMonth::new(2026, 1).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2026-01\"");
        let back: YearMonth = serde_json::from_str("\"2026-01\"").unwrap();
        assert_eq!(back, month);
        assert!(serde_json::from_str::<YearMonth>("\"2026-1\"").is_err());
    }
}
