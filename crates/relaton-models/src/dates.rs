//! Typed dates with relaxed precision
//!
//! Bibliographic dates are frequently known only to the year or month, so
//! values are kept as strings and parsed on demand together with their
//! precision.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A typed date (`published`, `issued`, `updated`, ...)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    #[serde(rename = "type")]
    pub date_type: String,
    pub value: String,
}

impl Date {
    pub fn new(date_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            date_type: date_type.into(),
            value: value.into(),
        }
    }

    /// Parse `value` with [`parse_relaxed_date`]
    pub fn parsed(&self) -> Option<RelaxedDate> {
        parse_relaxed_date(&self.value)
    }
}

/// How much of a date is actually known
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePrecision {
    Year,
    Month,
    Day,
}

/// A parsed date. Components beyond `precision` are set to 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelaxedDate {
    pub date: NaiveDate,
    pub precision: DatePrecision,
}

lazy_static! {
    // 2019, 2019-02, 2019-02-07, 2019-02-07T10:00:00Z
    static ref ISO_DATE_REGEX: Regex = Regex::new(
        r"^(?P<year>\d{4})(?:-(?P<month>\d{1,2})(?:-(?P<day>\d{1,2}))?)?(?:[T ].*)?$"
    ).unwrap();

    // February 2019, 7 February 2019, Feb. 2019, February 7, 2019
    static ref NAMED_MONTH_REGEX: Regex = Regex::new(
        r"^(?:(?P<day>\d{1,2})\s+)?(?P<month>[A-Za-z]+)\.?(?:\s+(?P<day2>\d{1,2}))?,?\s+(?P<year>\d{4})$"
    ).unwrap();
}

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Parse a date that may be specific to the year, month or day.
///
/// Returns `None` for anything that is not recognizable as a date.
pub fn parse_relaxed_date(value: &str) -> Option<RelaxedDate> {
    let value = value.trim();

    if let Some(caps) = ISO_DATE_REGEX.captures(value) {
        let year: i32 = caps.name("year")?.as_str().parse().ok()?;
        let month: Option<u32> = match caps.name("month") {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };
        let day: Option<u32> = match caps.name("day") {
            Some(d) => Some(d.as_str().parse().ok()?),
            None => None,
        };
        return build(year, month, day);
    }

    if let Some(caps) = NAMED_MONTH_REGEX.captures(value) {
        let year: i32 = caps.name("year")?.as_str().parse().ok()?;
        let month = month_from_name(caps.name("month")?.as_str())?;
        let day: Option<u32> = match caps.name("day").or_else(|| caps.name("day2")) {
            Some(d) => Some(d.as_str().parse().ok()?),
            None => None,
        };
        return build(year, Some(month), day);
    }

    None
}

fn build(year: i32, month: Option<u32>, day: Option<u32>) -> Option<RelaxedDate> {
    let (date, precision) = match (month, day) {
        (None, _) => (NaiveDate::from_ymd_opt(year, 1, 1)?, DatePrecision::Year),
        (Some(m), None) => (NaiveDate::from_ymd_opt(year, m, 1)?, DatePrecision::Month),
        (Some(m), Some(d)) => (NaiveDate::from_ymd_opt(year, m, d)?, DatePrecision::Day),
    };
    Some(RelaxedDate { date, precision })
}

/// Full or abbreviated (three letters or more) English month name
fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|m| m.starts_with(lower.as_str()))
        .map(|idx| idx as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_only() {
        let parsed = parse_relaxed_date("1996").unwrap();
        assert_eq!(parsed.precision, DatePrecision::Year);
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(1996, 1, 1).unwrap());
    }

    #[test]
    fn test_year_month() {
        let parsed = parse_relaxed_date("1996-02").unwrap();
        assert_eq!(parsed.precision, DatePrecision::Month);
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(1996, 2, 1).unwrap());
    }

    #[test]
    fn test_full_date_with_time() {
        let parsed = parse_relaxed_date("2021-06-30T12:00:00Z").unwrap();
        assert_eq!(parsed.precision, DatePrecision::Day);
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2021, 6, 30).unwrap());
    }

    #[test]
    fn test_named_month() {
        let parsed = parse_relaxed_date("February 1998").unwrap();
        assert_eq!(parsed.precision, DatePrecision::Month);
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(1998, 2, 1).unwrap());

        let parsed = parse_relaxed_date("7 Feb. 1998").unwrap();
        assert_eq!(parsed.precision, DatePrecision::Day);
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(1998, 2, 7).unwrap());

        let parsed = parse_relaxed_date("February 7, 1998").unwrap();
        assert_eq!(parsed.precision, DatePrecision::Day);
    }

    #[test]
    fn test_invalid_dates() {
        assert!(parse_relaxed_date("").is_none());
        assert!(parse_relaxed_date("sometime").is_none());
        assert!(parse_relaxed_date("1996-13").is_none());
        assert!(parse_relaxed_date("1996-02-30").is_none());
        assert!(parse_relaxed_date("Ma 1996").is_none());
    }
}
