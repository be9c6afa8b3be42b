//! London bank holidays.

use chrono::Weekday;

use super::{one_offs, GBLO};
use crate::calendars::{CalendarDefinition, HolidayRule, SubstitutionPolicy};
use crate::types::MonthDay;

/// London (England and Wales) bank holidays, 1950-2099.
///
/// ## Holidays
///
/// - New Year's Day from 1974, substituted to Monday
/// - Good Friday and Easter Monday
/// - Early May bank holiday from 1978, moved in 1995 and 2020 for VE Day
/// - Whit Monday until 1964, then the spring bank holiday
/// - First Monday of August until 1964, then the summer bank holiday
/// - Christmas Day and Boxing Day, substituted two days forward
///
/// The spring and summer holidays were set year by year between 1965 and 1970.
/// Jubilees moved the spring holiday in 1977, 2002, 2012 and 2022.
pub fn london() -> CalendarDefinition {
    use SubstitutionPolicy::{RollToMonday, RollTwoDaysForward};

    let spring_moved = [1977, 2002, 2012, 2022];

    CalendarDefinition::new(GBLO)
        .named("London bank holidays")
        .rule(
            HolidayRule::fixed(1, 1).named("New Year's Day").from_year(1974),
            RollToMonday,
        )
        .rule(HolidayRule::easter_offset(-2).named("Good Friday"), SubstitutionPolicy::None)
        .rule(HolidayRule::easter_offset(1).named("Easter Monday"), SubstitutionPolicy::None)
        .rule(
            HolidayRule::first_weekday(5, Weekday::Mon)
                .named("Early May bank holiday")
                .from_year(1978)
                .except_years([1995, 2020]),
            SubstitutionPolicy::None,
        )
        .rule(
            HolidayRule::explicit([(1995, MonthDay::new(5, 8)), (2020, MonthDay::new(5, 8))])
                .named("VE Day"),
            SubstitutionPolicy::None,
        )
        .rule(
            HolidayRule::easter_offset(50).named("Whit Monday").until(1964),
            SubstitutionPolicy::None,
        )
        .rule(
            HolidayRule::explicit([
                (1965, MonthDay::new(6, 7)),
                (1966, MonthDay::new(5, 30)),
                (1967, MonthDay::new(5, 29)),
                (1968, MonthDay::new(6, 3)),
                (1969, MonthDay::new(5, 26)),
                (1970, MonthDay::new(5, 25)),
            ])
            .named("Spring holiday"),
            SubstitutionPolicy::None,
        )
        .rule(
            HolidayRule::last_weekday(5, Weekday::Mon)
                .named("Spring bank holiday")
                .from_year(1971)
                .except_years(spring_moved),
            SubstitutionPolicy::None,
        )
        .rule(
            HolidayRule::explicit([
                (1977, MonthDay::new(6, 6)),
                (2002, MonthDay::new(6, 4)),
                (2012, MonthDay::new(6, 4)),
                (2022, MonthDay::new(6, 2)),
            ])
            .named("Spring bank holiday (moved)"),
            SubstitutionPolicy::None,
        )
        .rule(
            HolidayRule::first_weekday(8, Weekday::Mon)
                .named("August bank holiday")
                .until(1964),
            SubstitutionPolicy::None,
        )
        .rule(
            HolidayRule::explicit([
                (1965, MonthDay::new(8, 30)),
                (1966, MonthDay::new(8, 29)),
                (1967, MonthDay::new(8, 28)),
                (1968, MonthDay::new(9, 2)),
                (1969, MonthDay::new(9, 1)),
                (1970, MonthDay::new(8, 31)),
            ])
            .named("Summer holiday"),
            SubstitutionPolicy::None,
        )
        .rule(
            HolidayRule::last_weekday(8, Weekday::Mon)
                .named("Summer bank holiday")
                .from_year(1971),
            SubstitutionPolicy::None,
        )
        .rule(
            HolidayRule::fixed(12, 25).named("Christmas Day"),
            RollTwoDaysForward,
        )
        .rule(
            HolidayRule::fixed(12, 26).named("Boxing Day"),
            RollTwoDaysForward,
        )
        .rules_with(
            SubstitutionPolicy::None,
            one_offs(&[
                (1973, 11, 14, "Royal wedding"),
                (1977, 6, 7, "Silver Jubilee"),
                (1981, 7, 29, "Royal wedding"),
                (1999, 12, 31, "Millennium"),
                (2002, 6, 3, "Golden Jubilee"),
                (2011, 4, 29, "Royal wedding"),
                (2012, 6, 5, "Diamond Jubilee"),
                (2022, 6, 3, "Platinum Jubilee"),
                (2022, 9, 19, "State funeral"),
                (2023, 5, 8, "Coronation"),
            ]),
        )
}
