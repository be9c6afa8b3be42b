//! Calendar generation from observed rules.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::bitmap::HolidayBitmap;
use super::calendar::HolidayCalendar;
use super::easter::FIRST_GREGORIAN_YEAR;
use super::rules::HolidayRule;
use super::substitution::SubstitutionPolicy;
use crate::error::{AlmanacError, AlmanacResult};
use crate::types::WeekendDays;

/// Default first generated year.
pub const DEFAULT_START_YEAR: i32 = 1950;
/// Default last generated year.
pub const DEFAULT_END_YEAR: i32 = 2099;

/// Last year a calendar may be generated for.
pub const MAX_YEAR: i32 = 9999;

/// A rule paired with the substitution policy applied to its candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedRule {
    /// The date rule.
    pub rule: HolidayRule,
    /// Weekend substitution, ignored for explicit overrides.
    #[serde(default)]
    pub policy: SubstitutionPolicy,
}

impl ObservedRule {
    /// Pairs a rule with a policy.
    pub fn new(rule: HolidayRule, policy: SubstitutionPolicy) -> Self {
        Self { rule, policy }
    }
}

impl From<(HolidayRule, SubstitutionPolicy)> for ObservedRule {
    fn from((rule, policy): (HolidayRule, SubstitutionPolicy)) -> Self {
        Self::new(rule, policy)
    }
}

/// Builder for holiday calendars.
///
/// Rules are evaluated in insertion order for every year of the range.
/// Candidates from regular rules are moved off weekends by their policy;
/// explicit overrides are taken as-is. A substituted date that leaves its
/// year is dropped, and dates produced more than once collapse into one.
#[derive(Debug, Clone)]
pub struct CalendarBuilder {
    code: String,
    weekend: WeekendDays,
    start_year: i32,
    end_year: i32,
    rules: Vec<ObservedRule>,
}

impl CalendarBuilder {
    /// Create a new builder with a Saturday/Sunday weekend and the default range.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            weekend: WeekendDays::SATURDAY_SUNDAY,
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            rules: Vec::new(),
        }
    }

    /// Set the weekend days.
    pub fn weekend(mut self, weekend: WeekendDays) -> Self {
        self.weekend = weekend;
        self
    }

    /// Set the inclusive year range for generating holidays.
    pub fn year_range(mut self, start: i32, end: i32) -> Self {
        self.start_year = start;
        self.end_year = end;
        self
    }

    /// Add a rule with its substitution policy.
    pub fn rule(mut self, rule: HolidayRule, policy: SubstitutionPolicy) -> Self {
        self.rules.push(ObservedRule::new(rule, policy));
        self
    }

    /// Add rules from an iterator.
    pub fn rules<I, R>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ObservedRule>,
    {
        self.rules.extend(rules.into_iter().map(Into::into));
        self
    }

    /// Generate the calendar.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidYearRange` if the range is inverted or
    /// leaves `1583..=9999`, and `AlmanacError::RuleApplication` if a rule
    /// cannot produce a date for one of the years.
    pub fn build(self) -> AlmanacResult<HolidayCalendar> {
        self.validate_range()?;

        let mut holidays = HolidayBitmap::new(self.start_year, self.end_year);
        for year in self.start_year..=self.end_year {
            for observed in &self.rules {
                let Some(candidate) = observed.rule.apply(year)? else {
                    continue;
                };

                let date = if observed.rule.is_override() {
                    candidate
                } else {
                    observed.policy.substitute(candidate, self.weekend)
                };

                if date.year() != year {
                    trace!(
                        code = %self.code,
                        rule = %observed.rule,
                        %candidate,
                        substituted = %date,
                        "Dropping holiday substituted out of its year"
                    );
                    continue;
                }
                holidays.insert(date);
            }
        }

        debug!(
            code = %self.code,
            start_year = self.start_year,
            end_year = self.end_year,
            rules = self.rules.len(),
            holidays = holidays.count(),
            "Generated holiday calendar"
        );

        Ok(HolidayCalendar::from_parts(self.code, self.weekend, holidays))
    }

    fn validate_range(&self) -> AlmanacResult<()> {
        let reason = if self.end_year < self.start_year {
            "end year precedes start year"
        } else if self.start_year < FIRST_GREGORIAN_YEAR {
            "start year precedes the Gregorian calendar"
        } else if self.end_year > MAX_YEAR {
            "end year exceeds 9999"
        } else {
            return Ok(());
        };
        Err(AlmanacError::invalid_year_range(
            self.start_year,
            self.end_year,
            reason,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::Calendar;
    use crate::types::{Date, MonthDay};
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_builder() {
        let calendar = CalendarBuilder::new("Test")
            .year_range(2025, 2025)
            .rule(HolidayRule::fixed(1, 1), SubstitutionPolicy::RollFridayMonday)
            .build()
            .unwrap();

        assert!(calendar.is_listed_holiday(date(2025, 1, 1)).unwrap());
        assert_eq!(calendar.holiday_count(), 1);
    }

    #[test]
    fn test_inverted_range() {
        let err = CalendarBuilder::new("X").year_range(2010, 2000).build().unwrap_err();
        assert_eq!(
            err,
            AlmanacError::invalid_year_range(2010, 2000, "end year precedes start year")
        );
    }

    #[test]
    fn test_range_outside_gregorian() {
        assert!(CalendarBuilder::new("X").year_range(1500, 2000).build().is_err());
        assert!(CalendarBuilder::new("X").year_range(2000, 10_000).build().is_err());
        assert!(CalendarBuilder::new("X").year_range(1583, 1583).build().is_ok());
    }

    #[test]
    fn test_single_year_range() {
        let cal = CalendarBuilder::new("ONE").year_range(2015, 2015).build().unwrap();
        assert!(cal.is_business_day(date(2015, 6, 1)).unwrap());
        assert!(cal.is_business_day(date(2016, 1, 4)).is_err());
    }

    #[test]
    fn test_substitution_leaving_year_is_dropped() {
        // 2011-01-01 is a Saturday; rolling to Friday would land in 2010
        let cal = CalendarBuilder::new("US")
            .year_range(2010, 2011)
            .rule(HolidayRule::fixed(1, 1), SubstitutionPolicy::RollFridayMonday)
            .build()
            .unwrap();

        assert!(!cal.is_listed_holiday(date(2010, 12, 31)).unwrap());
        assert!(!cal.is_listed_holiday(date(2011, 1, 1)).unwrap());
        assert!(cal.is_business_day(date(2010, 12, 31)).unwrap());
    }

    #[test]
    fn test_collision_collapses() {
        // 2010-12-25 is a Saturday, 2010-12-26 a Sunday; both roll to Monday 27th
        let cal = CalendarBuilder::new("GB")
            .year_range(2010, 2010)
            .rule(HolidayRule::fixed(12, 25), SubstitutionPolicy::RollToMonday)
            .rule(HolidayRule::fixed(12, 26), SubstitutionPolicy::RollToMonday)
            .build()
            .unwrap();

        assert_eq!(cal.holidays_in_year(2010).unwrap(), vec![date(2010, 12, 27)]);
    }

    #[test]
    fn test_override_not_substituted() {
        // 2005-05-08 is a Sunday and stays there
        let cal = CalendarBuilder::new("X")
            .year_range(2005, 2005)
            .rule(
                HolidayRule::explicit([(2005, MonthDay::new(5, 8))]),
                SubstitutionPolicy::RollToMonday,
            )
            .build()
            .unwrap();

        assert_eq!(cal.holidays_in_year(2005).unwrap(), vec![date(2005, 5, 8)]);
    }

    #[test]
    fn test_rule_failure_propagates() {
        let err = CalendarBuilder::new("X")
            .year_range(2015, 2016)
            .rule(
                HolidayRule::nth_weekday(2, Weekday::Mon, crate::calendars::Ordinal::Fifth),
                SubstitutionPolicy::None,
            )
            .build()
            .unwrap_err();

        assert!(matches!(err, AlmanacError::RuleApplication { year: 2015, .. }));
    }

    #[test]
    fn test_weekend_only() {
        let cal = CalendarBuilder::new("FRI_SAT")
            .weekend(WeekendDays::FRIDAY_SATURDAY)
            .build()
            .unwrap();

        assert_eq!(cal.start_year(), DEFAULT_START_YEAR);
        assert_eq!(cal.end_year(), DEFAULT_END_YEAR);
        assert_eq!(cal.holiday_count(), 0);
        // 2015-07-03 is a Friday, 2015-07-05 a Sunday
        assert!(!cal.is_business_day(date(2015, 7, 3)).unwrap());
        assert!(cal.is_business_day(date(2015, 7, 5)).unwrap());
    }
}
