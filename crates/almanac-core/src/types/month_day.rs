//! Month and day without a year.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::days_in_month;
use super::Date;
use crate::error::AlmanacResult;

/// A month/day pair, resolved against a year on demand.
///
/// No validation happens at construction, so `MonthDay::new(2, 29)` is a
/// legal value that resolves only in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthDay {
    /// Month (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
}

impl MonthDay {
    /// Creates a new month/day pair.
    #[must_use]
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Returns true if the pair names a real day in at least one year.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        // 2000 is a leap year, so 29 February passes.
        self.day >= 1 && self.day <= days_in_month(2000, self.month)
    }

    /// Resolves the pair to a date in `year`.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the day does not exist in that year.
    pub fn at_year(&self, year: i32) -> AlmanacResult<Date> {
        Date::from_ymd(year, self.month, self.day)
    }
}

impl From<Date> for MonthDay {
    fn from(date: Date) -> Self {
        Self::new(date.month(), date.day())
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_year() {
        let christmas = MonthDay::new(12, 25);
        assert_eq!(
            christmas.at_year(1965).unwrap(),
            Date::from_ymd(1965, 12, 25).unwrap()
        );
    }

    #[test]
    fn test_leap_day() {
        let leap = MonthDay::new(2, 29);
        assert!(leap.is_valid());
        assert!(leap.at_year(2024).is_ok());
        assert!(leap.at_year(2023).is_err());
    }

    #[test]
    fn test_invalid() {
        assert!(!MonthDay::new(4, 31).is_valid());
        assert!(!MonthDay::new(13, 1).is_valid());
        assert!(!MonthDay::new(1, 0).is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(MonthDay::new(5, 8).to_string(), "--05-08");
    }
}
