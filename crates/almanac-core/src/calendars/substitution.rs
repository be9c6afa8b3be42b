//! Weekend substitution policies.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Date, WeekendDays};

/// How a holiday falling on a weekend is moved to a weekday.
///
/// Only Saturday and Sunday are ever moved. A policy never touches other
/// weekend days (e.g. Friday in a Friday/Saturday calendar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionPolicy {
    /// Never moved.
    #[default]
    None,
    /// Saturday or Sunday moves to the following Monday.
    RollToMonday,
    /// Saturday moves to the preceding Friday, Sunday to the following Monday.
    RollFridayMonday,
    /// Sunday moves to the following Monday. Saturday stays.
    RollSundayToMonday,
    /// Saturday or Sunday moves two days later.
    RollTwoDaysForward,
}

impl SubstitutionPolicy {
    /// Applies the policy to a candidate date.
    ///
    /// Dates that are not weekend days of `weekend` come back unchanged.
    pub fn substitute(self, date: Date, weekend: WeekendDays) -> Date {
        let weekday = date.weekday();
        if !weekend.contains(weekday) {
            return date;
        }

        let shift = match (self, weekday) {
            (SubstitutionPolicy::RollToMonday, Weekday::Sat) => 2,
            (SubstitutionPolicy::RollToMonday, Weekday::Sun) => 1,
            (SubstitutionPolicy::RollFridayMonday, Weekday::Sat) => -1,
            (SubstitutionPolicy::RollFridayMonday, Weekday::Sun) => 1,
            (SubstitutionPolicy::RollSundayToMonday, Weekday::Sun) => 1,
            (SubstitutionPolicy::RollTwoDaysForward, Weekday::Sat | Weekday::Sun) => 2,
            _ => 0,
        };
        date.add_days(shift)
    }
}

impl fmt::Display for SubstitutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubstitutionPolicy::None => "None",
            SubstitutionPolicy::RollToMonday => "Roll to Monday",
            SubstitutionPolicy::RollFridayMonday => "Roll Friday/Monday",
            SubstitutionPolicy::RollSundayToMonday => "Roll Sunday to Monday",
            SubstitutionPolicy::RollTwoDaysForward => "Roll two days forward",
        };
        write!(f, "{name}")
    }
}
