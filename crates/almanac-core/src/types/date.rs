//! Calendar date.

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::{AlmanacError, AlmanacResult};

/// A proleptic Gregorian date with no time or zone.
///
/// Wraps `chrono::NaiveDate`; ordering is chronological and the serialized
/// form is `YYYY-MM-DD`.
///
/// # Example
///
/// ```rust
/// use almanac_core::types::Date;
/// use chrono::Weekday;
///
/// let date = Date::from_ymd(2005, 5, 8).unwrap();
/// assert_eq!(date.weekday(), Weekday::Sun);
/// assert_eq!(date.add_days(1).to_string(), "2005-05-09");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Builds a date from its components.
    ///
    /// # Errors
    ///
    /// `AlmanacError::InvalidDate` when the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> AlmanacResult<Self> {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => Ok(Self(date)),
            None => Err(AlmanacError::invalid_date(format!(
                "{year}-{month:02}-{day:02} does not exist"
            ))),
        }
    }

    /// Parses `YYYY-MM-DD`, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// `AlmanacError::InvalidDate` on any other shape or a non-existent day.
    pub fn parse(s: &str) -> AlmanacResult<Self> {
        s.trim()
            .parse::<NaiveDate>()
            .map(Self)
            .map_err(|e| AlmanacError::invalid_date(format!("'{s}': {e}")))
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 1-12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month, 1-31.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Zero-based day of the year, 0 for 1 January.
    pub fn ordinal0(&self) -> u32 {
        self.0.ordinal0()
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// The date `days` calendar days later (earlier when negative).
    ///
    /// # Panics
    ///
    /// Panics if the result is outside chrono's representable range. Use
    /// [`Date::checked_add_days`] for offsets that come from input.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + TimeDelta::days(days))
    }

    /// The date `days` calendar days later, or `None` on overflow.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
    }

    /// Signed number of calendar days from `self` to `other`.
    pub fn days_between(&self, other: &Date) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// Last calendar day of the date's month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        let last = days_in_month(self.year(), self.month());
        self.add_days(i64::from(last) - i64::from(self.day()))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Calendar days from `rhs` to `self`.
    fn sub(self, rhs: Date) -> i64 {
        rhs.days_between(&self)
    }
}

/// Days in `month` of `year`, or 0 for a month outside 1..=12.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    const LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    match month {
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        1..=12 => LENGTHS[month as usize - 1],
        _ => 0,
    }
}
