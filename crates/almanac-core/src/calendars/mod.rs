//! Holiday calendars and business day queries.
//!
//! This module provides:
//! - Rule primitives and weekend substitution policies
//! - A builder that generates immutable holiday calendars over a year range
//! - Business day predicates, rolling and adjustment conventions
//! - Declarative JSON calendar definitions

mod bitmap;
mod builder;
mod calendar;
mod conventions;
mod definition;
mod easter;
mod rules;
mod substitution;

pub use bitmap::HolidayBitmap;
pub use builder::{
    CalendarBuilder, ObservedRule, DEFAULT_END_YEAR, DEFAULT_START_YEAR, MAX_YEAR,
};
pub use calendar::{HolidayCalendar, MAX_LOOK_AHEAD_DAYS};
pub use conventions::{adjust, BusinessDayConvention};
pub use definition::CalendarDefinition;
pub use easter::{easter_sunday, FIRST_GREGORIAN_YEAR};
pub use rules::{last_weekday_of_month, nth_weekday_of_month, HolidayRule, Ordinal, RuleKind};
pub use substitution::SubstitutionPolicy;

use crate::error::{AlmanacError, AlmanacResult};
use crate::types::Date;

/// Trait for business day calendars.
///
/// Implementors answer [`Calendar::is_business_day`]; rolling, shifting and
/// adjustment are derived from it. Every stepping operation is bounded by
/// [`MAX_LOOK_AHEAD_DAYS`] per roll.
pub trait Calendar: Send + Sync {
    /// Returns the calendar code.
    fn code(&self) -> &str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> AlmanacResult<bool>;

    /// Returns true if the date is a weekend day or a holiday.
    fn is_holiday(&self, date: Date) -> AlmanacResult<bool> {
        Ok(!self.is_business_day(date)?)
    }

    /// Returns the first business day on or after the given date.
    fn next_or_same_business_day(&self, date: Date) -> AlmanacResult<Date> {
        roll(self, date, 1)
    }

    /// Returns the last business day on or before the given date.
    fn previous_or_same_business_day(&self, date: Date) -> AlmanacResult<Date> {
        roll(self, date, -1)
    }

    /// Returns the first business day strictly after the given date.
    fn next_business_day(&self, date: Date) -> AlmanacResult<Date> {
        self.next_or_same_business_day(step(date, 1)?)
    }

    /// Returns the last business day strictly before the given date.
    fn previous_business_day(&self, date: Date) -> AlmanacResult<Date> {
        self.previous_or_same_business_day(step(date, -1)?)
    }

    /// Moves `days` business days forward (or backward when negative).
    ///
    /// A shift of zero returns the date unchanged, even on a holiday.
    fn shift_business_days(&self, date: Date, days: i64) -> AlmanacResult<Date> {
        let mut result = date;
        for _ in 0..days.unsigned_abs() {
            result = if days > 0 {
                self.next_business_day(result)?
            } else {
                self.previous_business_day(result)?
            };
        }
        Ok(result)
    }

    /// Counts business days in `[start, end)`.
    fn business_days_between(&self, start: Date, end: Date) -> AlmanacResult<i64> {
        if end < start {
            return Err(AlmanacError::invalid_date(format!(
                "end date {end} is before start date {start}"
            )));
        }

        let mut count = 0;
        let mut current = start;
        while current < end {
            if self.is_business_day(current)? {
                count += 1;
            }
            current = current.add_days(1);
        }
        Ok(count)
    }

    /// Returns the last business day of the date's month.
    fn last_business_day_of_month(&self, date: Date) -> AlmanacResult<Date> {
        self.previous_or_same_business_day(date.end_of_month())
    }

    /// Returns true if the date is the last business day of its month.
    fn is_last_business_day_of_month(&self, date: Date) -> AlmanacResult<bool> {
        Ok(self.is_business_day(date)? && self.last_business_day_of_month(date)? == date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> AlmanacResult<Date> {
        conventions::adjust(date, convention, self)
    }
}

/// Moves `days` calendar days, failing at the edge of the representable range.
fn step(date: Date, days: i64) -> AlmanacResult<Date> {
    date.checked_add_days(days)
        .ok_or_else(|| AlmanacError::invalid_date(format!("{date} moved by {days} days overflows")))
}

/// Steps one day at a time in `direction` until a business day is found.
fn roll<C: Calendar + ?Sized>(calendar: &C, date: Date, direction: i64) -> AlmanacResult<Date> {
    for offset in 0..=MAX_LOOK_AHEAD_DAYS {
        let candidate = step(date, offset * direction)?;
        if calendar.is_business_day(candidate)? {
            return Ok(candidate);
        }
    }

    tracing::warn!(
        code = calendar.code(),
        %date,
        max_days = MAX_LOOK_AHEAD_DAYS,
        "No business day within look-ahead bound"
    );
    Err(AlmanacError::LookAheadExceeded {
        code: calendar.code().to_string(),
        date,
        max_days: MAX_LOOK_AHEAD_DAYS,
    })
}
