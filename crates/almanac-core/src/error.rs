//! Error types for the Almanac library.
//!
//! Every failure is surfaced to the caller. A fabricated business-day answer
//! would corrupt downstream date adjustment, so nothing here has a fallback.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for Almanac operations.
pub type AlmanacResult<T> = Result<T, AlmanacError>;

/// The main error type for Almanac operations.
///
/// Errors are `Clone` so that a memoized calendar construction failure can be
/// handed to every caller that looks the calendar up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlmanacError {
    /// Invalid or unparseable date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A calendar was requested over an unusable range of years.
    #[error("Invalid year range {start_year}..={end_year}: {reason}")]
    InvalidYearRange {
        /// First year of the requested range.
        start_year: i32,
        /// Last year of the requested range.
        end_year: i32,
        /// Why the range was rejected.
        reason: String,
    },

    /// A rule produced a date outside the month/day domain for a year.
    #[error("Rule '{rule}' cannot be applied to {year}: {reason}")]
    RuleApplication {
        /// Description of the failing rule.
        rule: String,
        /// Year being generated.
        year: i32,
        /// Description of the failure.
        reason: String,
    },

    /// A query touched a date outside the generated range.
    #[error("Date {date} is outside calendar '{code}' range {start_year}..={end_year}")]
    QueryOutOfRange {
        /// Calendar code.
        code: String,
        /// The offending date.
        date: Date,
        /// First generated year.
        start_year: i32,
        /// Last generated year.
        end_year: i32,
    },

    /// Business-day stepping did not find a business day within the bound.
    #[error("No business day within {max_days} days of {date} in calendar '{code}'")]
    LookAheadExceeded {
        /// Calendar code.
        code: String,
        /// Date the search started from.
        date: Date,
        /// Maximum number of days inspected.
        max_days: i64,
    },

    /// No calendar is registered under the code.
    #[error("Unknown calendar: {code}")]
    UnknownCalendar {
        /// The requested code.
        code: String,
    },

    /// Configuration error (calendar definitions, registry wiring).
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the configuration error.
        reason: String,
    },
}

impl AlmanacError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid year range error.
    #[must_use]
    pub fn invalid_year_range(start_year: i32, end_year: i32, reason: impl Into<String>) -> Self {
        Self::InvalidYearRange {
            start_year,
            end_year,
            reason: reason.into(),
        }
    }

    /// Creates a rule application error.
    #[must_use]
    pub fn rule_application(rule: impl Into<String>, year: i32, reason: impl Into<String>) -> Self {
        Self::RuleApplication {
            rule: rule.into(),
            year,
            reason: reason.into(),
        }
    }

    /// Creates an unknown calendar error.
    #[must_use]
    pub fn unknown_calendar(code: impl Into<String>) -> Self {
        Self::UnknownCalendar { code: code.into() }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
