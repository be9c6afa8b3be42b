//! Continental European calendars.
//!
//! None of these calendars substitute holidays that fall on a weekend.

use super::{one_offs, CHZU, EUTA, FRPA};
use crate::calendars::{CalendarDefinition, HolidayRule, SubstitutionPolicy};

/// Paris, 1950-2099.
///
/// Whit Monday was a working day ("journée de solidarité") from 2005 to 2007.
pub fn paris() -> CalendarDefinition {
    CalendarDefinition::new(FRPA)
        .named("Paris")
        .rules_with(
            SubstitutionPolicy::None,
            [
                HolidayRule::fixed(1, 1).named("New Year's Day"),
                HolidayRule::easter_offset(1).named("Easter Monday"),
                HolidayRule::fixed(5, 1).named("Labour Day"),
                HolidayRule::fixed(5, 8).named("Victory in Europe Day"),
                HolidayRule::easter_offset(39).named("Ascension Day"),
                HolidayRule::easter_offset(50)
                    .named("Whit Monday")
                    .except_years(2005..=2007),
                HolidayRule::fixed(7, 14).named("Bastille Day"),
                HolidayRule::fixed(8, 15).named("Assumption"),
                HolidayRule::fixed(11, 1).named("All Saints' Day"),
                HolidayRule::fixed(11, 11).named("Armistice Day"),
                HolidayRule::fixed(12, 25).named("Christmas Day"),
            ],
        )
}

/// Zurich, 1950-2099.
pub fn zurich() -> CalendarDefinition {
    CalendarDefinition::new(CHZU)
        .named("Zurich")
        .rules_with(
            SubstitutionPolicy::None,
            [
                HolidayRule::fixed(1, 1).named("New Year's Day"),
                HolidayRule::fixed(1, 2).named("Berchtoldstag"),
                HolidayRule::easter_offset(-2).named("Good Friday"),
                HolidayRule::easter_offset(1).named("Easter Monday"),
                HolidayRule::fixed(5, 1).named("Labour Day"),
                HolidayRule::easter_offset(39).named("Ascension Day"),
                HolidayRule::easter_offset(50).named("Whit Monday"),
                HolidayRule::fixed(8, 1).named("National Day"),
                HolidayRule::fixed(12, 25).named("Christmas Day"),
                HolidayRule::fixed(12, 26).named("St. Stephen's Day"),
            ],
        )
}

/// TARGET interbank payment system, 1997-2099.
///
/// Until 1999 only New Year's Day and Christmas Day were closing days.
pub fn target() -> CalendarDefinition {
    CalendarDefinition::new(EUTA)
        .named("TARGET")
        .year_range(1997, 2099)
        .rules_with(
            SubstitutionPolicy::None,
            [
                HolidayRule::fixed(1, 1).named("New Year's Day"),
                HolidayRule::easter_offset(-2).named("Good Friday").from_year(2000),
                HolidayRule::easter_offset(1).named("Easter Monday").from_year(2000),
                HolidayRule::fixed(5, 1).named("Labour Day").from_year(2000),
                HolidayRule::fixed(12, 25).named("Christmas Day"),
                HolidayRule::fixed(12, 26).named("Boxing Day").from_year(2000),
            ],
        )
        .rules_with(
            SubstitutionPolicy::None,
            one_offs(&[
                (1999, 12, 31, "Millennium"),
                (2001, 12, 31, "Euro changeover"),
            ]),
        )
}
