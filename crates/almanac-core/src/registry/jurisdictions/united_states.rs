//! United States calendars.
//!
//! All four calendars share the federal holiday core. They differ in how
//! New Year's Day, Independence Day and Christmas Day are observed when they
//! fall on a weekend, and in which optional holidays they keep.

use chrono::Weekday;

use super::{one_offs, NYFD, NYSE, USGS, USNY};
use crate::calendars::{
    nth_weekday_of_month, CalendarDefinition, HolidayRule, Ordinal, SubstitutionPolicy,
};
use crate::types::MonthDay;

/// Variations on the federal holiday core.
struct Federal {
    /// Policy for New Year's Day, Independence Day, Juneteenth and Christmas Day.
    observance: SubstitutionPolicy,
    /// First year Martin Luther King Jr. Day is observed.
    mlk_from: i32,
    /// Whether Columbus Day and Veterans Day are observed.
    columbus_and_veterans: bool,
}

impl Federal {
    fn apply(&self, definition: CalendarDefinition) -> CalendarDefinition {
        use SubstitutionPolicy::RollSundayToMonday;

        let definition = definition
            .rule(HolidayRule::fixed(1, 1).named("New Year's Day"), self.observance)
            .rule(
                HolidayRule::nth_weekday(1, Weekday::Mon, Ordinal::Third)
                    .named("Martin Luther King Jr. Day")
                    .from_year(self.mlk_from),
                SubstitutionPolicy::None,
            )
            .rule(
                HolidayRule::fixed(2, 22).named("Washington's Birthday").until(1970),
                RollSundayToMonday,
            )
            .rule(
                HolidayRule::nth_weekday(2, Weekday::Mon, Ordinal::Third)
                    .named("Presidents' Day")
                    .from_year(1971),
                SubstitutionPolicy::None,
            )
            .rule(
                HolidayRule::fixed(5, 30).named("Memorial Day").until(1970),
                RollSundayToMonday,
            )
            .rule(
                HolidayRule::last_weekday(5, Weekday::Mon)
                    .named("Memorial Day")
                    .from_year(1971),
                SubstitutionPolicy::None,
            )
            .rule(
                HolidayRule::fixed(6, 19).named("Juneteenth").from_year(2022),
                self.observance,
            )
            .rule(HolidayRule::fixed(7, 4).named("Independence Day"), self.observance)
            .rule(
                HolidayRule::first_weekday(9, Weekday::Mon).named("Labor Day"),
                SubstitutionPolicy::None,
            )
            .rule(
                HolidayRule::nth_weekday(11, Weekday::Thu, Ordinal::Fourth).named("Thanksgiving"),
                SubstitutionPolicy::None,
            )
            .rule(HolidayRule::fixed(12, 25).named("Christmas Day"), self.observance);

        if !self.columbus_and_veterans {
            return definition;
        }

        definition
            .rule(
                HolidayRule::fixed(10, 12).named("Columbus Day").until(1970),
                RollSundayToMonday,
            )
            .rule(
                HolidayRule::nth_weekday(10, Weekday::Mon, Ordinal::Second)
                    .named("Columbus Day")
                    .from_year(1971),
                SubstitutionPolicy::None,
            )
            .rule(
                HolidayRule::nth_weekday(10, Weekday::Mon, Ordinal::Fourth)
                    .named("Veterans Day")
                    .between(1971, 1977),
                SubstitutionPolicy::None,
            )
            .rule(
                HolidayRule::fixed(11, 11)
                    .named("Veterans Day")
                    .except_years(1971..=1977),
                RollSundayToMonday,
            )
    }
}

/// US government securities, following the SIFMA recommendation, 1950-2099.
///
/// Saturday holidays are observed on the Friday before, unless that Friday
/// is in the previous year.
pub fn us_government_securities() -> CalendarDefinition {
    let federal = Federal {
        observance: SubstitutionPolicy::RollFridayMonday,
        mlk_from: 1986,
        columbus_and_veterans: true,
    };

    federal
        .apply(CalendarDefinition::new(USGS).named("US government securities"))
        .rule(
            HolidayRule::easter_offset(-2).named("Good Friday"),
            SubstitutionPolicy::None,
        )
        .rules_with(
            SubstitutionPolicy::None,
            one_offs(&[
                (2012, 10, 30, "Hurricane Sandy"),
                (2018, 12, 5, "Death of George H.W. Bush"),
            ]),
        )
}

/// New York state banking, 1950-2099.
pub fn new_york() -> CalendarDefinition {
    new_york_banking(USNY, "New York")
}

/// Federal Reserve Bank of New York, 1950-2099.
pub fn new_york_fed() -> CalendarDefinition {
    new_york_banking(NYFD, "Federal Reserve Bank of New York")
}

fn new_york_banking(code: &str, name: &str) -> CalendarDefinition {
    let federal = Federal {
        observance: SubstitutionPolicy::RollSundayToMonday,
        mlk_from: 1986,
        columbus_and_veterans: true,
    };
    federal.apply(CalendarDefinition::new(code).named(name))
}

/// New York Stock Exchange, 1950-2099.
///
/// Includes historical closures: Lincoln's Birthday, Columbus Day and
/// Veterans Day until 1953, presidential election days, the 1968 paperwork
/// crisis and days of mourning or emergency.
pub fn new_york_stock_exchange() -> CalendarDefinition {
    let federal = Federal {
        observance: SubstitutionPolicy::RollFridayMonday,
        mlk_from: 1998,
        columbus_and_veterans: false,
    };

    // Tuesday after the first Monday of November
    let election_days = (1950..=1968)
        .chain([1972, 1976, 1980])
        .filter_map(|year| {
            nth_weekday_of_month(year, 11, Weekday::Mon, 1)
                .map(|monday| (year, MonthDay::from(monday.add_days(1))))
        });

    federal
        .apply(CalendarDefinition::new(NYSE).named("New York Stock Exchange"))
        .rule(
            HolidayRule::easter_offset(-2).named("Good Friday"),
            SubstitutionPolicy::None,
        )
        .rules_with(
            SubstitutionPolicy::None,
            [
                HolidayRule::fixed(2, 12).named("Lincoln's Birthday").until(1953),
                HolidayRule::fixed(10, 12).named("Columbus Day").until(1953),
                HolidayRule::fixed(11, 11).named("Veterans Day").until(1953),
                HolidayRule::explicit(election_days).named("Election Day"),
            ],
        )
        .rules_with(SubstitutionPolicy::None, paperwork_crisis())
        .rules_with(
            SubstitutionPolicy::None,
            one_offs(&[
                (1955, 12, 24, "Christmas Eve"),
                (1956, 12, 24, "Christmas Eve"),
                (1958, 12, 26, "Day after Christmas"),
                (1961, 5, 29, "Day before Decoration Day"),
                (1963, 11, 25, "Funeral of John F. Kennedy"),
                (1965, 12, 24, "Christmas Eve"),
                (1968, 2, 12, "Lincoln's Birthday"),
                (1968, 4, 9, "Day of mourning for Martin Luther King Jr."),
                (1968, 7, 5, "Day after Independence Day"),
                (1969, 2, 10, "Snow"),
                (1969, 3, 31, "Funeral of Dwight D. Eisenhower"),
                (1969, 7, 21, "Lunar exploration"),
                (1972, 12, 28, "Funeral of Harry S. Truman"),
                (1973, 1, 25, "Funeral of Lyndon B. Johnson"),
                (1977, 7, 14, "Blackout"),
                (1985, 9, 27, "Hurricane Gloria"),
                (1994, 4, 27, "Funeral of Richard Nixon"),
                (2001, 9, 11, "September 11 attacks"),
                (2001, 9, 12, "September 11 attacks"),
                (2001, 9, 13, "September 11 attacks"),
                (2001, 9, 14, "September 11 attacks"),
                (2004, 6, 11, "Funeral of Ronald Reagan"),
                (2007, 1, 2, "Funeral of Gerald Ford"),
                (2018, 12, 5, "Funeral of George H.W. Bush"),
                (2025, 1, 9, "Funeral of Jimmy Carter"),
            ]),
        )
}

/// Mid-week closures of 1968.
fn paperwork_crisis() -> Vec<HolidayRule> {
    const DAYS: [(u32, u32); 29] = [
        (6, 12),
        (6, 19),
        (6, 26),
        (7, 3),
        (7, 10),
        (7, 17),
        (7, 24),
        (7, 31),
        (8, 7),
        (8, 13),
        (8, 21),
        (8, 28),
        (9, 11),
        (9, 18),
        (9, 25),
        (10, 2),
        (10, 9),
        (10, 16),
        (10, 23),
        (10, 30),
        (11, 6),
        (11, 13),
        (11, 20),
        (11, 27),
        (12, 4),
        (12, 11),
        (12, 18),
        (12, 25),
        (12, 31),
    ];

    DAYS.iter()
        .map(|&(month, day)| {
            HolidayRule::explicit([(1968, MonthDay::new(month, day))]).named("Paperwork crisis")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::Calendar;
    use crate::types::Date;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_usgs_saturday_new_year_absent() {
        let cal = us_government_securities().build().unwrap();
        // 2011-01-01 is a Saturday; Friday 2010-12-31 stays open
        assert!(cal.is_business_day(date(2010, 12, 31)).unwrap());
        assert!(!cal.is_listed_holiday(date(2011, 1, 1)).unwrap());
        // 2010-07-04 is a Sunday, 2009-07-04 a Saturday
        assert!(!cal.is_business_day(date(2010, 7, 5)).unwrap());
        assert!(!cal.is_business_day(date(2009, 7, 3)).unwrap());
    }

    #[test]
    fn test_new_york_keeps_saturday() {
        let cal = new_york().build().unwrap();
        // Christmas 2010 on Saturday has no weekday substitute
        assert!(cal.is_business_day(date(2010, 12, 24)).unwrap());
        assert!(cal.is_listed_holiday(date(2010, 12, 25)).unwrap());
        // Christmas 2011 on Sunday moves to Monday
        assert!(!cal.is_business_day(date(2011, 12, 26)).unwrap());
    }

    #[test]
    fn test_veterans_day_in_october() {
        let cal = new_york_fed().build().unwrap();
        // 1975: fourth Monday of October, 11 November a working day
        assert!(!cal.is_business_day(date(1975, 10, 27)).unwrap());
        assert!(cal.is_business_day(date(1975, 11, 11)).unwrap());
    }

    #[test]
    fn test_nyse_election_days() {
        let cal = new_york_stock_exchange().build().unwrap();
        assert!(!cal.is_business_day(date(1960, 11, 8)).unwrap());
        assert!(!cal.is_business_day(date(1980, 11, 4)).unwrap());
        assert!(cal.is_business_day(date(1984, 11, 6)).unwrap());
    }

    #[test]
    fn test_nyse_special_closures() {
        let cal = new_york_stock_exchange().build().unwrap();
        for day in 11..=14 {
            assert!(!cal.is_business_day(date(2001, 9, day)).unwrap());
        }
        assert!(!cal.is_business_day(date(1968, 6, 12)).unwrap());
        // Hurricane Sandy is not recorded as a closure
        assert!(cal.is_business_day(date(2012, 10, 30)).unwrap());
        // Columbus Day is a trading day
        assert!(cal.is_business_day(date(2015, 10, 12)).unwrap());
    }
}
