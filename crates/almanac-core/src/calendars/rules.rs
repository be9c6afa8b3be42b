//! Holiday rule primitives.
//!
//! A [`HolidayRule`] yields at most one candidate date per year. The rule kind
//! is a closed set; jurisdiction behavior comes from composing rules, not
//! from extending the set.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::easter::easter_sunday;
use crate::error::{AlmanacError, AlmanacResult};
use crate::types::{days_in_month, Date, MonthDay};

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ordinal {
    /// First occurrence.
    First,
    /// Second occurrence.
    Second,
    /// Third occurrence.
    Third,
    /// Fourth occurrence.
    Fourth,
    /// Fifth occurrence, absent in most months.
    Fifth,
    /// Last occurrence.
    Last,
}

impl Ordinal {
    /// Creates an ordinal from a 1-based occurrence number.
    pub fn from_index(n: u32) -> Option<Self> {
        match n {
            1 => Some(Ordinal::First),
            2 => Some(Ordinal::Second),
            3 => Some(Ordinal::Third),
            4 => Some(Ordinal::Fourth),
            5 => Some(Ordinal::Fifth),
            _ => None,
        }
    }

    /// The 1-based occurrence number, or `None` for [`Ordinal::Last`].
    pub fn index(self) -> Option<u32> {
        match self {
            Ordinal::First => Some(1),
            Ordinal::Second => Some(2),
            Ordinal::Third => Some(3),
            Ordinal::Fourth => Some(4),
            Ordinal::Fifth => Some(5),
            Ordinal::Last => None,
        }
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ordinal::First => "1st",
            Ordinal::Second => "2nd",
            Ordinal::Third => "3rd",
            Ordinal::Fourth => "4th",
            Ordinal::Fifth => "5th",
            Ordinal::Last => "last",
        };
        write!(f, "{name}")
    }
}

/// The date-producing part of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Same month and day every year.
    FixedDate(MonthDay),

    /// The k-th or last occurrence of a weekday within a month.
    NthWeekdayOfMonth {
        /// Month (1-12).
        month: u32,
        /// Target weekday.
        weekday: Weekday,
        /// Which occurrence.
        ordinal: Ordinal,
    },

    /// A signed number of days from Easter Sunday.
    EasterOffset {
        /// Offset in days, negative for days before Easter.
        days: i64,
    },

    /// Explicit dates per year. Never substituted.
    ExplicitOverride(BTreeMap<i32, MonthDay>),
}

/// A holiday rule with its validity window.
///
/// `from_year` and `to_year` are inclusive and either may be open. Years in
/// `except_years` are skipped even inside the window, which lets a regular
/// rule stand aside when an explicit override replaces it.
///
/// # Example
///
/// ```rust
/// use almanac_core::calendars::HolidayRule;
/// use chrono::Weekday;
///
/// // UK early May bank holiday, moved in 1995 and 2020
/// let rule = HolidayRule::first_weekday(5, Weekday::Mon)
///     .from_year(1978)
///     .except_years([1995, 2020]);
///
/// assert_eq!(rule.apply(2019).unwrap().unwrap().to_string(), "2019-05-06");
/// assert!(rule.apply(2020).unwrap().is_none());
/// assert!(rule.apply(1977).unwrap().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRule {
    /// Optional descriptive name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// What date the rule produces.
    pub kind: RuleKind,

    /// First year the rule applies (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_year: Option<i32>,

    /// Last year the rule applies (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_year: Option<i32>,

    /// Years skipped inside the window.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub except_years: BTreeSet<i32>,
}

impl HolidayRule {
    /// Creates an unnamed rule with an open window.
    pub fn new(kind: RuleKind) -> Self {
        Self {
            name: None,
            kind,
            from_year: None,
            to_year: None,
            except_years: BTreeSet::new(),
        }
    }

    /// A fixed month/day every year.
    pub fn fixed(month: u32, day: u32) -> Self {
        Self::new(RuleKind::FixedDate(MonthDay::new(month, day)))
    }

    /// The k-th (or last) `weekday` of `month`.
    pub fn nth_weekday(month: u32, weekday: Weekday, ordinal: Ordinal) -> Self {
        Self::new(RuleKind::NthWeekdayOfMonth {
            month,
            weekday,
            ordinal,
        })
    }

    /// The first `weekday` of `month`.
    pub fn first_weekday(month: u32, weekday: Weekday) -> Self {
        Self::nth_weekday(month, weekday, Ordinal::First)
    }

    /// The last `weekday` of `month`.
    pub fn last_weekday(month: u32, weekday: Weekday) -> Self {
        Self::nth_weekday(month, weekday, Ordinal::Last)
    }

    /// A day relative to Easter Sunday.
    pub fn easter_offset(days: i64) -> Self {
        Self::new(RuleKind::EasterOffset { days })
    }

    /// Explicit month/day per year.
    pub fn explicit<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = (i32, MonthDay)>,
    {
        Self::new(RuleKind::ExplicitOverride(dates.into_iter().collect()))
    }

    /// A single historical date.
    pub fn one_off(date: Date) -> Self {
        Self::explicit([(date.year(), MonthDay::from(date))])
    }

    /// Sets the descriptive name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Restricts the rule to years from `year` onwards.
    pub fn from_year(mut self, year: i32) -> Self {
        self.from_year = Some(year);
        self
    }

    /// Restricts the rule to years up to and including `year`.
    pub fn until(mut self, year: i32) -> Self {
        self.to_year = Some(year);
        self
    }

    /// Restricts the rule to an inclusive range of years.
    pub fn between(self, from: i32, to: i32) -> Self {
        self.from_year(from).until(to)
    }

    /// Skips the given years.
    pub fn except_years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.except_years.extend(years);
        self
    }

    /// Returns true if the validity window includes `year`.
    pub fn applies_to(&self, year: i32) -> bool {
        self.from_year.map_or(true, |from| year >= from)
            && self.to_year.map_or(true, |to| year <= to)
            && !self.except_years.contains(&year)
    }

    /// Returns true for explicit overrides, whose dates are final.
    pub fn is_override(&self) -> bool {
        matches!(self.kind, RuleKind::ExplicitOverride(_))
    }

    /// Produces the candidate date for `year`.
    ///
    /// `Ok(None)` means the rule does not apply that year.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::RuleApplication` when the rule cannot produce a
    /// date in `year`: a fixed date that does not exist, a missing fifth
    /// weekday, or an Easter offset that leaves the year.
    pub fn apply(&self, year: i32) -> AlmanacResult<Option<Date>> {
        if !self.applies_to(year) {
            return Ok(None);
        }

        let date = match &self.kind {
            RuleKind::FixedDate(month_day) => self.resolve(year, *month_day)?,
            RuleKind::NthWeekdayOfMonth {
                month,
                weekday,
                ordinal,
            } => {
                if days_in_month(year, *month) == 0 {
                    return Err(self.failure(year, format!("month {month} does not exist")));
                }
                let found = match ordinal.index() {
                    Some(n) => nth_weekday_of_month(year, *month, *weekday, n),
                    None => last_weekday_of_month(year, *month, *weekday),
                };
                found.ok_or_else(|| {
                    self.failure(
                        year,
                        format!("no {ordinal} {weekday} in {year}-{month:02}"),
                    )
                })?
            }
            RuleKind::EasterOffset { days } => {
                let easter = easter_sunday(year)
                    .ok_or_else(|| self.failure(year, "Easter is undefined for this year"))?;
                let date = easter.checked_add_days(*days).ok_or_else(|| {
                    self.failure(year, format!("offset of {days} days from Easter overflows"))
                })?;
                if date.year() != year {
                    return Err(self.failure(year, format!("{date} falls outside {year}")));
                }
                date
            }
            RuleKind::ExplicitOverride(dates) => match dates.get(&year) {
                Some(month_day) => self.resolve(year, *month_day)?,
                None => return Ok(None),
            },
        };

        Ok(Some(date))
    }

    fn resolve(&self, year: i32, month_day: MonthDay) -> AlmanacResult<Date> {
        month_day
            .at_year(year)
            .map_err(|_| self.failure(year, format!("{month_day} does not exist")))
    }

    fn failure(&self, year: i32, reason: impl Into<String>) -> AlmanacError {
        AlmanacError::rule_application(self.to_string(), year, reason)
    }
}

impl fmt::Display for HolidayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            return write!(f, "{name}");
        }
        match &self.kind {
            RuleKind::FixedDate(month_day) => write!(f, "fixed {month_day}"),
            RuleKind::NthWeekdayOfMonth {
                month,
                weekday,
                ordinal,
            } => write!(f, "{ordinal} {weekday} of month {month}"),
            RuleKind::EasterOffset { days } => write!(f, "Easter{days:+}"),
            RuleKind::ExplicitOverride(dates) => {
                write!(f, "explicit override ({} dates)", dates.len())
            }
        }
    }
}

/// Calculate the nth occurrence of a weekday in a month.
///
/// Returns `None` if the month has fewer than `n` such weekdays.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<Date> {
    if n == 0 {
        return None;
    }
    let first_of_month = Date::from_ymd(year, month, 1).ok()?;
    let first_weekday = first_of_month.weekday();

    // Calculate days until the first occurrence of the target weekday
    let days_until = (weekday.num_days_from_monday() as i32
        - first_weekday.num_days_from_monday() as i32)
        .rem_euclid(7) as u32;

    let day = (n - 1).checked_mul(7)?.checked_add(1 + days_until)?;

    Date::from_ymd(year, month, day).ok()
}

/// Calculate the last occurrence of a weekday in a month.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<Date> {
    let last_day = Date::from_ymd(year, month, days_in_month(year, month)).ok()?;

    let days_back = (last_day.weekday().num_days_from_monday() as i32
        - weekday.num_days_from_monday() as i32)
        .rem_euclid(7);

    Some(last_day.add_days(-i64::from(days_back)))
}
