//! Meteorological season arithmetic.
//!
//! Given a [`Hemisphere`] and a [`CalendarDate`], work out which [`Season`] is
//! active, where that season starts and ends, and how far into it the date is.
//! The calculator is a set of pure functions; reading the wall clock or
//! guessing a hemisphere is left to the adapters in [`clock`].

mod boundary;
pub mod clock;
mod config;
mod consts;
mod error;
mod ordinal;
mod prelude;
mod report;
mod season;
#[cfg(test)]
mod test_utils;
mod types;

pub use boundary::SeasonBoundary;
pub use chrono::Weekday;
pub use config::{Config, ConfiguredClock};
pub use consts::*;
pub use error::SeasonError;
pub use ordinal::{Ordinal, ordinal_suffix};
pub use report::SeasonReport;
pub use season::{
    Hemisphere, Season, day_of_season, days_in_season, season_end, season_icon, season_of,
    season_start,
};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate, TimeDelta};
use std::str::FromStr;

/// A calendar day in the proleptic Gregorian calendar, years 1 through 9999.
///
/// Values are immutable: every operation that moves a date returns a new one.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
    naive: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Unknown hemisphere: {_0:?} (expected northern or southern)")]
    UnknownHemisphere(String),
    #[display(fmt = "Unknown season: {_0:?} (expected Spring, Summer, Autumn or Winter)")]
    UnknownSeason(String),
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from its components, validating each against the calendar
    ///
    /// # Errors
    /// Returns the `ParseError` for the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let validated = (Year::new(year)?, Month::new(month)?, Day::new(day, year, month)?);
        let naive = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .ok_or(ParseError::InvalidDay { month, day, year })?;

        Ok(Self {
            year: validated.0,
            month: validated.1,
            day: validated.2,
            naive,
        })
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1 = January)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day-of-month component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns `(month, day)`, which orders dates within a single year
    pub const fn month_day(&self) -> (u8, u8) {
        (self.month.get(), self.day.get())
    }

    /// The same date as a `chrono` value
    pub const fn naive(&self) -> NaiveDate {
        self.naive
    }

    /// Builds a date from a day count relative to 1970-01-01
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the count lands outside years 1-9999.
    pub fn from_days_since_epoch(days: i64) -> Result<Self, ParseError> {
        let out_of_range = ParseError::InvalidYear(if days < 0 { 0 } else { u16::MAX });
        TimeDelta::try_days(days)
            .and_then(|delta| NaiveDate::default().checked_add_signed(delta))
            .ok_or(out_of_range)
            .and_then(Self::try_from)
    }

    /// Signed number of whole days from `self` to `other`
    pub fn days_until(&self, other: &Self) -> i64 {
        other.naive.signed_duration_since(self.naive).num_days()
    }

    /// The following day, or `None` after 9999-12-31
    pub fn succ(&self) -> Option<Self> {
        self.naive.succ_opt().and_then(|next| Self::try_from(next).ok())
    }

    /// Day of the week
    pub fn weekday(&self) -> Weekday {
        self.naive.weekday()
    }

    /// English long form, e.g. "Thursday, January 15, 2026"
    pub fn long_format(&self) -> String {
        self.naive.format("%A, %B %-d, %Y").to_string()
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = ParseError;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year()).map_err(|_| {
            ParseError::InvalidYear(if date.year() < 0 { 0 } else { u16::MAX })
        })?;
        // chrono months and days always fit in a u8
        Self::new(year, date.month() as u8, date.day() as u8)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.naive
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses an ISO 8601 calendar date, `YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} separators in {trimmed:?}",
                parts.len() - 1
            )));
        };

        Self::new(
            Self::parse_component(year)?,
            Self::parse_component(month)?,
            Self::parse_component(day)?,
        )
    }
}

impl CalendarDate {
    /// Helper to parse a numeric component with better error messages
    fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_parse_iso_date() {
        let parsed = "2026-01-15".parse::<CalendarDate>().unwrap();
        assert_eq!(parsed, date(2026, 1, 15));
        assert_eq!(parsed.year(), 2026);
        assert_eq!(parsed.month(), 1);
        assert_eq!(parsed.day(), 15);
    }

    #[test]
    fn test_parse_with_whitespace() {
        let parsed = " 2026 - 03 - 20 ".parse::<CalendarDate>().unwrap();
        assert_eq!(parsed, date(2026, 3, 20));
    }

    #[test]
    fn test_parse_errors() {
        struct TestCase {
            input:       &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "",
                description: "empty",
            },
            TestCase {
                input:       "2026-01",
                description: "missing day",
            },
            TestCase {
                input:       "2026-01-15-01",
                description: "too many components",
            },
            TestCase {
                input:       "01/15/2026",
                description: "month-first format",
            },
            TestCase {
                input:       "2026-xx-15",
                description: "non-numeric month",
            },
            TestCase {
                input:       "2026-13-01",
                description: "month out of range",
            },
            TestCase {
                input:       "2026-02-29",
                description: "leap day in common year",
            },
            TestCase {
                input:       "0000-01-01",
                description: "year zero",
            },
        ];

        for case in &cases {
            assert!(
                case.input.parse::<CalendarDate>().is_err(),
                "Expected failure for: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_parse_error_kinds() {
        assert_eq!("".parse::<CalendarDate>(), Err(ParseError::EmptyInput));
        assert_eq!(
            "2026-13-01".parse::<CalendarDate>(),
            Err(ParseError::InvalidMonth(13))
        );
        assert!(matches!(
            "2026-02-29".parse::<CalendarDate>(),
            Err(ParseError::InvalidDay {
                month: 2,
                day: 29,
                year: 2026
            })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2026, 1, 5).to_string(), "2026-01-05");
        assert_eq!(date(987, 12, 31).to_string(), "0987-12-31");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be 1-9999)"
        );
        assert_eq!(
            ParseError::UnknownHemisphere("eastern".to_owned()).to_string(),
            "Unknown hemisphere: \"eastern\" (expected northern or southern)"
        );
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2025, 12, 31) < date(2026, 1, 1));
        assert!(date(2026, 1, 31) < date(2026, 2, 1));
        assert!(date(2026, 3, 19) < date(2026, 3, 20));
    }

    #[test]
    fn test_days_until() {
        assert_eq!(date(2025, 12, 21).days_until(&date(2026, 1, 15)), 25);
        assert_eq!(date(2026, 1, 15).days_until(&date(2025, 12, 21)), -25);
        assert_eq!(date(2024, 1, 1).days_until(&date(2025, 1, 1)), 366);
        assert_eq!(date(2026, 1, 1).days_until(&date(2027, 1, 1)), 365);
    }

    #[test]
    fn test_from_days_since_epoch() {
        assert_eq!(
            CalendarDate::from_days_since_epoch(0).unwrap(),
            date(1970, 1, 1)
        );
        assert_eq!(
            CalendarDate::from_days_since_epoch(20_468).unwrap(),
            date(2026, 1, 15)
        );
        assert!(matches!(
            CalendarDate::from_days_since_epoch(-719_163),
            Err(ParseError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_from_days_since_epoch_extremes() {
        struct TestCase {
            days:     i64,
            expected: ParseError,
        }

        let cases = [
            TestCase {
                days:     i64::MAX,
                expected: ParseError::InvalidYear(u16::MAX),
            },
            TestCase {
                days:     i64::MIN,
                expected: ParseError::InvalidYear(0),
            },
            TestCase {
                days:     i64::from(i32::MAX),
                expected: ParseError::InvalidYear(u16::MAX),
            },
            TestCase {
                days:     2_932_897,
                expected: ParseError::InvalidYear(10_000),
            },
        ];

        for case in cases {
            assert_eq!(
                CalendarDate::from_days_since_epoch(case.days),
                Err(case.expected),
                "days = {}",
                case.days
            );
        }
        assert_eq!(
            CalendarDate::from_days_since_epoch(2_932_896).unwrap(),
            date(9999, 12, 31)
        );
    }

    #[test]
    fn test_naive_conversion() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(CalendarDate::try_from(naive).unwrap(), date(2024, 2, 29));
        assert_eq!(NaiveDate::from(date(2024, 2, 29)), naive);
        assert_eq!(date(2024, 2, 29).naive(), naive);

        assert_eq!(
            CalendarDate::try_from(NaiveDate::MAX),
            Err(ParseError::InvalidYear(u16::MAX))
        );
        assert_eq!(
            CalendarDate::try_from(NaiveDate::MIN),
            Err(ParseError::InvalidYear(0))
        );
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(1970, 1, 1).weekday(), Weekday::Thu);
        assert_eq!(date(2026, 1, 15).weekday(), Weekday::Thu);
        assert_eq!(date(2026, 10, 18).weekday(), Weekday::Sun);
        assert_eq!(date(1, 1, 1).weekday(), Weekday::Mon);
    }

    #[test]
    fn test_succ_rollover_and_leap() {
        assert_eq!(date(2024, 2, 28).succ(), Some(date(2024, 2, 29)));
        assert_eq!(date(2024, 2, 29).succ(), Some(date(2024, 3, 1)));
        assert_eq!(date(2026, 2, 28).succ(), Some(date(2026, 3, 1)));
        assert_eq!(date(2026, 12, 31).succ(), Some(date(2027, 1, 1)));
        assert_eq!(date(9999, 12, 31).succ(), None);
    }

    #[test]
    fn test_long_format() {
        assert_eq!(date(2026, 1, 15).long_format(), "Thursday, January 15, 2026");
        assert_eq!(date(2024, 2, 29).long_format(), "Thursday, February 29, 2024");
        assert_eq!(date(2026, 10, 18).long_format(), "Sunday, October 18, 2026");
    }

    #[test]
    fn test_serde() {
        let d = date(2026, 1, 15);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2026-01-15\"");

        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        let result: Result<CalendarDate, _> = serde_json::from_str("\"2026-02-30\"");
        assert!(result.is_err());
    }
}
