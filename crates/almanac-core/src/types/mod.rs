//! Value types shared by the calendar engine.
//!
//! - [`Date`]: Gregorian calendar date
//! - [`MonthDay`]: month/day pair without a year
//! - [`WeekendDays`]: set of weekdays that are never business days

mod date;
mod month_day;
mod weekend;

pub(crate) use date::days_in_month;
pub use date::Date;
pub use month_day::MonthDay;
pub use weekend::WeekendDays;
