//! Property tests over the standard calendars.

use almanac_core::calendars::{easter_sunday, Calendar, FIRST_GREGORIAN_YEAR};
use almanac_core::registry;
use almanac_core::types::Date;
use chrono::Weekday;
use proptest::prelude::*;

const CODES: [&str; 9] = [
    "GBLO", "FRPA", "CHZU", "EUTA", "USGS", "USNY", "NYFD", "NYSE", "FRI_SAT",
];

fn code_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(CODES.to_vec())
}

// Dates well inside every standard range, leaving room to step
fn date_strategy() -> impl Strategy<Value = Date> {
    (0i64..365 * 90).prop_map(|offset| Date::from_ymd(2000, 1, 1).unwrap().add_days(offset))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_holiday_is_not_business_day(code in code_strategy(), date in date_strategy()) {
        let cal = registry::lookup(code).unwrap();
        prop_assert_eq!(cal.is_holiday(date).unwrap(), !cal.is_business_day(date).unwrap());
    }

    #[test]
    fn test_next_or_same_idempotent(code in code_strategy(), date in date_strategy()) {
        let cal = registry::lookup(code).unwrap();
        let next = cal.next_or_same_business_day(date).unwrap();
        prop_assert!(next >= date);
        prop_assert!(cal.is_business_day(next).unwrap());
        prop_assert_eq!(cal.next_or_same_business_day(next).unwrap(), next);

        let previous = cal.previous_or_same_business_day(date).unwrap();
        prop_assert!(previous <= date);
        prop_assert!(cal.is_business_day(previous).unwrap());
        prop_assert_eq!(cal.previous_or_same_business_day(previous).unwrap(), previous);
    }

    #[test]
    fn test_next_or_same_monotonic(
        code in code_strategy(),
        date in date_strategy(),
        gap in 0i64..30,
    ) {
        let cal = registry::lookup(code).unwrap();
        let later = date.add_days(gap);
        prop_assert!(
            cal.next_or_same_business_day(date).unwrap()
                <= cal.next_or_same_business_day(later).unwrap()
        );
        prop_assert!(
            cal.previous_or_same_business_day(date).unwrap()
                <= cal.previous_or_same_business_day(later).unwrap()
        );
    }

    #[test]
    fn test_shift_monotonic(
        code in code_strategy(),
        date in date_strategy(),
        gap in 0i64..30,
        days in 1i64..60,
    ) {
        let cal = registry::lookup(code).unwrap();
        let earlier = cal.next_or_same_business_day(date).unwrap();
        let later = cal.next_or_same_business_day(date.add_days(gap)).unwrap();
        prop_assert!(earlier <= later);
        prop_assert!(
            cal.shift_business_days(earlier, days).unwrap()
                <= cal.shift_business_days(later, days).unwrap()
        );
        prop_assert!(
            cal.shift_business_days(earlier, -days).unwrap()
                <= cal.shift_business_days(later, -days).unwrap()
        );
    }

    #[test]
    fn test_shift_round_trip(code in code_strategy(), date in date_strategy(), days in -30i64..30) {
        let cal = registry::lookup(code).unwrap();
        let start = cal.next_or_same_business_day(date).unwrap();
        let shifted = cal.shift_business_days(start, days).unwrap();
        prop_assert!(cal.is_business_day(shifted).unwrap() || days == 0);
        prop_assert_eq!(cal.shift_business_days(shifted, -days).unwrap(), start);
    }

    #[test]
    fn test_shift_zero_is_identity(code in code_strategy(), date in date_strategy()) {
        let cal = registry::lookup(code).unwrap();
        prop_assert_eq!(cal.shift_business_days(date, 0).unwrap(), date);
    }

    #[test]
    fn test_count_matches_shift(code in code_strategy(), date in date_strategy(), days in 0i64..60) {
        let cal = registry::lookup(code).unwrap();
        let start = cal.next_or_same_business_day(date).unwrap();
        let end = cal.shift_business_days(start, days).unwrap();
        prop_assert_eq!(cal.business_days_between(start, end).unwrap(), days);
    }

    #[test]
    fn test_easter_is_a_spring_sunday(year in FIRST_GREGORIAN_YEAR..=9999) {
        let easter = easter_sunday(year).unwrap();
        prop_assert_eq!(easter.weekday(), Weekday::Sun);
        prop_assert!(easter >= Date::from_ymd(year, 3, 22).unwrap());
        prop_assert!(easter <= Date::from_ymd(year, 4, 25).unwrap());
    }
}

#[test]
fn test_listed_holidays_sorted_and_in_range() {
    for code in CODES {
        let cal = registry::lookup(code).unwrap();
        let holidays: Vec<Date> = cal.holidays().collect();
        assert!(holidays.windows(2).all(|pair| pair[0] < pair[1]), "{code}");
        assert!(holidays
            .iter()
            .all(|date| (cal.start_year()..=cal.end_year()).contains(&date.year())));
        assert_eq!(holidays.len(), cal.holiday_count());
    }
}
