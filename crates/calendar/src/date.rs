//! Calendar date with a `YYYY-MM-DD` string form.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CalendarError;

/// A proleptic Gregorian calendar date with no time-zone component.
///
/// Arithmetic moves in whole calendar days. The canonical string form is
/// `YYYY-MM-DD`, which also orders lexicographically in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Earliest representable date.
    pub const MIN: CalendarDate = CalendarDate(NaiveDate::MIN);

    /// Latest representable date.
    pub const MAX: CalendarDate = CalendarDate(NaiveDate::MAX);

    /// Creates a date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] for months outside 1..=12 and
    /// [`CalendarError::InvalidDay`] when the day does not exist in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDay { year, month, day })
    }

    /// Parses a `YYYY-MM-DD` string.
    ///
    /// Surrounding whitespace is ignored. A timestamp such as
    /// `2024-12-24T09:30:00Z` keeps only its calendar day. Month and day
    /// must be zero-padded: `2024-1-5` is malformed.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Empty`] for blank input and
    /// [`CalendarError::Malformed`] for anything that is not a valid date.
    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::Empty);
        }
        let day_part = trimmed.split('T').next().unwrap_or(trimmed);
        let malformed = || CalendarError::Malformed {
            input: input.to_string(),
        };
        if !is_padded(day_part) {
            return Err(malformed());
        }
        NaiveDate::parse_from_str(day_part, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| malformed())
    }

    /// Returns today's date in the local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Returns `true` on Saturdays and Sundays.
    pub fn is_weekend(self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Shifts the date by `delta` calendar days, rolling over months and
    /// years as needed.
    ///
    /// Negative deltas move backwards. Results beyond the representable
    /// range saturate at [`CalendarDate::MIN`] or [`CalendarDate::MAX`].
    pub fn add_days(self, delta: i64) -> Self {
        let magnitude = Days::new(delta.unsigned_abs());
        let shifted = if delta >= 0 {
            self.0.checked_add_days(magnitude)
        } else {
            self.0.checked_sub_days(magnitude)
        };
        match shifted {
            Some(date) => Self(date),
            None if delta >= 0 => Self::MAX,
            None => Self::MIN,
        }
    }

    /// Returns the next calendar day, or `None` at [`CalendarDate::MAX`].
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Signed number of days from `self` to `other`.
    ///
    /// Positive when `other` is later.
    pub fn days_until(self, other: CalendarDate) -> i64 {
        (other.0 - self.0).num_days()
    }
}

// At least four year digits (sign allowed), then two-digit month and day.
fn is_padded(day_part: &str) -> bool {
    let mut parts = day_part.rsplitn(3, '-');
    let (Some(day), Some(month), Some(year)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    let year_digits = year.trim_start_matches(['+', '-']);
    day.len() == 2 && month.len() == 2 && year_digits.len() >= 4
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
