//! Calendar month parameter and sale-date parsing.
//!
//! A [`SalesMonth`] is one of the twelve canonical English month names, matched
//! exactly (case-sensitive). Anything else is rejected with
//! [`AnalyticsError::InvalidMonth`] before the store is queried.
//!
//! ```
//! use sales_analytics::month::SalesMonth;
//!
//! let m: SalesMonth = "March".parse().unwrap();
//! assert_eq!(m.number(), 3);
//! assert!("march".parse::<SalesMonth>().is_err());
//! ```

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveDateTime, Utc};

use crate::error::AnalyticsError;

/// Months in calendar order; `name()` gives the canonical spelling.
const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Offset layouts without seconds, which RFC 3339 does not cover.
const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// Naive layouts SQLite's date functions also accept; interpreted as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A calendar month, independent of year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesMonth(Month);

impl SalesMonth {
    /// Wrap a chrono month.
    pub const fn new(month: Month) -> Self {
        Self(month)
    }

    /// 1-based month number (January = 1).
    pub fn number(&self) -> u32 {
        self.0.number_from_month()
    }

    /// Canonical English name.
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Zero-padded number as produced by SQLite `strftime('%m', ..)`.
    pub fn two_digit(&self) -> String {
        format!("{:02}", self.number())
    }

    /// All twelve months in calendar order.
    pub fn all() -> impl Iterator<Item = SalesMonth> {
        MONTHS.into_iter().map(SalesMonth)
    }

    /// Whether a stored sale date falls in this month (any year).
    pub fn contains(&self, date_of_sale: &str) -> bool {
        month_of_sale(date_of_sale) == Some(self.number())
    }
}

impl fmt::Display for SalesMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SalesMonth {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MONTHS
            .into_iter()
            .find(|m| m.name() == s)
            .map(SalesMonth)
            .ok_or_else(|| AnalyticsError::InvalidMonth(s.to_string()))
    }
}

/// Parse a stored sale date into a UTC instant.
///
/// Offsets are honoured (converted to UTC); naive date-times and bare dates are
/// taken as UTC. Surrounding whitespace is ignored. Returns `None` when the
/// string is not a real calendar date, so `2021-02-30` has no month.
pub fn sale_timestamp_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    let raw = raw
        .strip_suffix('Z')
        .or_else(|| raw.strip_suffix('z'))
        .unwrap_or(raw);
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(ndt.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

/// UTC calendar month (1..=12) of a stored sale date.
pub fn month_of_sale(raw: &str) -> Option<u32> {
    sale_timestamp_utc(raw).map(|dt| dt.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names_only() {
        let m: SalesMonth = "October".parse().unwrap();
        assert_eq!(m.number(), 10);
        assert_eq!(m.two_digit(), "10");
        assert_eq!(m.to_string(), "October");

        for bad in ["october", "OCTOBER", "Oct", " October", "", "Smarch"] {
            let err = bad.parse::<SalesMonth>().unwrap_err();
            assert!(matches!(err, AnalyticsError::InvalidMonth(ref s) if s == bad));
        }
    }

    #[test]
    fn all_months_roundtrip_through_names() {
        let numbers: Vec<u32> = SalesMonth::all().map(|m| m.number()).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<_>>());
        for m in SalesMonth::all() {
            assert_eq!(m.name().parse::<SalesMonth>().unwrap(), m);
        }
        assert_eq!(SalesMonth::new(Month::March).two_digit(), "03");
    }

    #[test]
    fn offsets_are_converted_to_utc_before_taking_the_month() {
        // 02:00 on Nov 1st at +05:30 is still October in UTC
        assert_eq!(month_of_sale("2021-11-01T02:00:00+05:30"), Some(10));
        assert_eq!(month_of_sale("2021-10-27T20:29:54Z"), Some(10));
        assert_eq!(month_of_sale("2022-03-31T23:30:00-01:00"), Some(4));
    }

    #[test]
    fn naive_layouts_are_taken_as_utc() {
        assert_eq!(month_of_sale("2021-07-04"), Some(7));
        assert_eq!(month_of_sale("2021-07-04 10:11:12"), Some(7));
        assert_eq!(month_of_sale("2021-07-04T10:11:12.250"), Some(7));
        assert_eq!(month_of_sale("2021-07-04T10:11"), Some(7));
    }

    #[test]
    fn loose_layouts_sqlite_also_reads() {
        // 20:29 at +05:30 is 14:59 UTC, same day
        assert_eq!(month_of_sale("2021-10-27T20:29+05:30"), Some(10));
        assert_eq!(month_of_sale("2021-11-01 02:00-01:00"), Some(11));
        assert_eq!(month_of_sale("2021-10-27T20:29:54 "), Some(10));
        assert_eq!(month_of_sale("2021-10-27t20:29:54z"), Some(10));
        assert_eq!(month_of_sale("2021-10-27T20:29Z"), Some(10));
    }

    #[test]
    fn impossible_days_do_not_roll_over() {
        assert_eq!(month_of_sale("2021-02-30"), None);
        assert_eq!(month_of_sale("2021-04-31T10:00:00Z"), None);
        assert!(!SalesMonth::new(Month::March).contains("2021-02-30"));
    }

    #[test]
    fn garbage_has_no_month() {
        assert_eq!(month_of_sale("yesterday"), None);
        assert_eq!(month_of_sale("2021-13-01"), None);
        assert_eq!(month_of_sale(""), None);
        assert!(!SalesMonth::new(Month::January).contains("not a date"));
    }
}
