//! Immutable holiday calendar.

use std::fmt;

use super::bitmap::HolidayBitmap;
use super::Calendar;
use crate::error::{AlmanacError, AlmanacResult};
use crate::types::{Date, WeekendDays};

/// Maximum number of days inspected beyond the starting date when rolling
/// to a business day.
pub const MAX_LOOK_AHEAD_DAYS: i64 = 10;

/// A generated holiday calendar over a fixed range of years.
///
/// The holiday set holds only dates inside the generated range. Weekend
/// status is checked separately from the holiday set. Queries outside the
/// range fail with `AlmanacError::QueryOutOfRange`; the calendar is never
/// extended.
///
/// # Example
///
/// ```rust
/// use almanac_core::calendars::{Calendar, CalendarBuilder, HolidayRule, SubstitutionPolicy};
/// use almanac_core::types::Date;
///
/// let cal = CalendarBuilder::new("XMPL")
///     .year_range(2020, 2030)
///     .rule(HolidayRule::fixed(1, 1), SubstitutionPolicy::RollToMonday)
///     .build()
///     .unwrap();
///
/// // 2022-01-01 is a Saturday, observed on Monday 3rd
/// let monday = Date::from_ymd(2022, 1, 3).unwrap();
/// assert!(!cal.is_business_day(monday).unwrap());
/// assert!(cal.is_business_day(Date::from_ymd(2040, 1, 3).unwrap()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    code: String,
    weekend: WeekendDays,
    holidays: HolidayBitmap,
}

impl HolidayCalendar {
    pub(crate) fn from_parts(code: String, weekend: WeekendDays, holidays: HolidayBitmap) -> Self {
        Self {
            code,
            weekend,
            holidays,
        }
    }

    /// Weekend days of this calendar.
    #[inline]
    pub fn weekend(&self) -> WeekendDays {
        self.weekend
    }

    /// First generated year.
    #[inline]
    pub fn start_year(&self) -> i32 {
        self.holidays.start_year()
    }

    /// Last generated year.
    #[inline]
    pub fn end_year(&self) -> i32 {
        self.holidays.end_year()
    }

    /// Returns true if `date` lies inside the generated range.
    #[inline]
    pub fn covers(&self, date: Date) -> bool {
        self.holidays.covers_year(date.year())
    }

    /// Returns true if `date` is in the holiday set, ignoring weekends.
    pub fn is_listed_holiday(&self, date: Date) -> AlmanacResult<bool> {
        self.check_range(date)?;
        Ok(self.holidays.contains(date))
    }

    /// All holiday dates in ascending order, excluding plain weekends.
    pub fn holidays(&self) -> impl Iterator<Item = Date> + '_ {
        self.holidays.iter()
    }

    /// Holiday dates within one year.
    pub fn holidays_in_year(&self, year: i32) -> AlmanacResult<Vec<Date>> {
        if !self.holidays.covers_year(year) {
            return Err(self.out_of_range(Date::from_ymd(year, 1, 1)?));
        }
        Ok(self
            .holidays
            .iter()
            .skip_while(|date| date.year() < year)
            .take_while(|date| date.year() == year)
            .collect())
    }

    /// Number of holiday dates over the whole range.
    pub fn holiday_count(&self) -> usize {
        self.holidays.count()
    }

    /// Combines two calendars.
    ///
    /// A date is a holiday if it is a holiday in either calendar. Weekend days
    /// are the union and the range is the intersection of both ranges.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidYearRange` if the ranges do not overlap.
    pub fn combined_with(&self, other: &HolidayCalendar) -> AlmanacResult<HolidayCalendar> {
        let start_year = self.start_year().max(other.start_year());
        let end_year = self.end_year().min(other.end_year());
        if end_year < start_year {
            return Err(AlmanacError::invalid_year_range(
                start_year,
                end_year,
                format!("{} and {} do not overlap", self.code, other.code),
            ));
        }

        let mut holidays = HolidayBitmap::new(start_year, end_year);
        for date in self.holidays().chain(other.holidays()) {
            holidays.insert(date);
        }

        Ok(HolidayCalendar::from_parts(
            format!("{}+{}", self.code, other.code),
            self.weekend.union(other.weekend),
            holidays,
        ))
    }

    fn check_range(&self, date: Date) -> AlmanacResult<()> {
        if self.covers(date) {
            Ok(())
        } else {
            Err(self.out_of_range(date))
        }
    }

    fn out_of_range(&self, date: Date) -> AlmanacError {
        AlmanacError::QueryOutOfRange {
            code: self.code.clone(),
            date,
            start_year: self.start_year(),
            end_year: self.end_year(),
        }
    }
}

impl Calendar for HolidayCalendar {
    fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    fn is_business_day(&self, date: Date) -> AlmanacResult<bool> {
        self.check_range(date)?;
        Ok(!self.weekend.contains(date.weekday()) && !self.holidays.contains(date))
    }
}

impl fmt::Debug for HolidayCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayCalendar")
            .field("code", &self.code)
            .field("weekend", &self.weekend)
            .field("start_year", &self.start_year())
            .field("end_year", &self.end_year())
            .field("holiday_count", &self.holiday_count())
            .finish()
    }
}

impl fmt::Display for HolidayCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
