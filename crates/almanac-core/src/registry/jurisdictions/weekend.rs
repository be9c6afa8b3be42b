//! Calendars with weekends and no holidays.

use super::{FRI_SAT, NO_HOLIDAYS, SAT_SUN, THU_FRI};
use crate::calendars::CalendarDefinition;
use crate::types::WeekendDays;

/// Every day is a business day.
pub fn no_holidays() -> CalendarDefinition {
    CalendarDefinition::new(NO_HOLIDAYS)
        .named("No holidays")
        .weekend(WeekendDays::NONE)
}

/// Saturday and Sunday are the only non-business days.
pub fn sat_sun() -> CalendarDefinition {
    CalendarDefinition::new(SAT_SUN)
        .named("Saturday/Sunday weekend")
        .weekend(WeekendDays::SATURDAY_SUNDAY)
}

/// Friday and Saturday are the only non-business days.
pub fn fri_sat() -> CalendarDefinition {
    CalendarDefinition::new(FRI_SAT)
        .named("Friday/Saturday weekend")
        .weekend(WeekendDays::FRIDAY_SATURDAY)
}

/// Thursday and Friday are the only non-business days.
pub fn thu_fri() -> CalendarDefinition {
    CalendarDefinition::new(THU_FRI)
        .named("Thursday/Friday weekend")
        .weekend(WeekendDays::THURSDAY_FRIDAY)
}
