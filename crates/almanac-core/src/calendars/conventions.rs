//! Date adjustment conventions.
//!
//! A convention says where a date that is not a business day moves to.
//! Business days are never moved.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Calendar;
use crate::error::{AlmanacError, AlmanacResult};
use crate::types::Date;

/// How a non-business day is resolved to a business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BusinessDayConvention {
    /// Keep the date, business day or not.
    Unadjusted,

    /// First business day on or after the date.
    #[default]
    Following,

    /// `Following`, falling back to `Preceding` when that leaves the month.
    ModifiedFollowing,

    /// Last business day on or before the date.
    Preceding,

    /// `Preceding`, falling back to `Following` when that leaves the month.
    ModifiedPreceding,

    /// Whichever of `Following` and `Preceding` is closer; forward on a tie.
    Nearest,
}

impl BusinessDayConvention {
    /// Every convention.
    pub const ALL: [Self; 6] = [
        Self::Unadjusted,
        Self::Following,
        Self::ModifiedFollowing,
        Self::Preceding,
        Self::ModifiedPreceding,
        Self::Nearest,
    ];

    /// Display name, e.g. "Modified Following".
    pub fn name(self) -> &'static str {
        match self {
            Self::Unadjusted => "Unadjusted",
            Self::Following => "Following",
            Self::ModifiedFollowing => "Modified Following",
            Self::Preceding => "Preceding",
            Self::ModifiedPreceding => "Modified Preceding",
            Self::Nearest => "Nearest",
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BusinessDayConvention {
    type Err = AlmanacError;

    /// Case-insensitive; separators are ignored, so "modified-following",
    /// "Modified Following" and "MF" all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let convention = match key.as_str() {
            "unadjusted" | "none" => Self::Unadjusted,
            "following" | "f" => Self::Following,
            "modifiedfollowing" | "mf" => Self::ModifiedFollowing,
            "preceding" | "p" => Self::Preceding,
            "modifiedpreceding" | "mp" => Self::ModifiedPreceding,
            "nearest" => Self::Nearest,
            _ => {
                return Err(AlmanacError::config(format!(
                    "Unknown business day convention: {s}"
                )))
            }
        };
        Ok(convention)
    }
}

/// Moves `date` to a business day of `calendar` under `convention`.
///
/// `Unadjusted` returns the date without consulting the calendar, so it
/// never fails, even outside the generated range.
pub fn adjust<C: Calendar + ?Sized>(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &C,
) -> AlmanacResult<Date> {
    use BusinessDayConvention as Bdc;

    if convention == Bdc::Unadjusted || calendar.is_business_day(date)? {
        return Ok(date);
    }

    let forward = || calendar.next_or_same_business_day(date);
    let backward = || calendar.previous_or_same_business_day(date);

    match convention {
        Bdc::Unadjusted => Ok(date),
        Bdc::Following => forward(),
        Bdc::Preceding => backward(),
        Bdc::ModifiedFollowing => {
            let candidate = forward()?;
            if same_month(candidate, date) {
                Ok(candidate)
            } else {
                backward()
            }
        }
        Bdc::ModifiedPreceding => {
            let candidate = backward()?;
            if same_month(candidate, date) {
                Ok(candidate)
            } else {
                forward()
            }
        }
        Bdc::Nearest => {
            let (after, before) = (forward()?, backward()?);
            if after - date <= date - before {
                Ok(after)
            } else {
                Ok(before)
            }
        }
    }
}

fn same_month(a: Date, b: Date) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
