//! # Almanac Core
//!
//! Holiday calendar generation and business-day arithmetic for financial
//! date calculations.
//!
//! This crate provides:
//!
//! - **Types**: `Date`, `MonthDay` and `WeekendDays`
//! - **Rules**: fixed dates, nth weekday of month, Easter offsets and
//!   explicit per-year overrides, each with optional weekend substitution
//! - **Calendars**: immutable holiday sets generated over a year range, with
//!   business day rolling, shifting, counting and convention-based adjustment
//! - **Registry**: built-in jurisdictions (London, Paris, Zurich, TARGET,
//!   US government securities, New York banking, NYSE) looked up by code
//!
//! ## Example
//!
//! ```rust
//! use almanac_core::prelude::*;
//!
//! let nyse = almanac_core::registry::lookup("NYSE").unwrap();
//! let good_friday = Date::from_ymd(2024, 3, 29).unwrap();
//!
//! assert!(nyse.is_holiday(good_friday).unwrap());
//! assert_eq!(
//!     nyse.adjust(good_friday, BusinessDayConvention::Following).unwrap(),
//!     Date::from_ymd(2024, 4, 1).unwrap()
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod calendars;
pub mod error;
pub mod registry;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessDayConvention, Calendar, CalendarBuilder, CalendarDefinition, HolidayCalendar,
        HolidayRule, Ordinal, SubstitutionPolicy,
    };
    pub use crate::error::{AlmanacError, AlmanacResult};
    pub use crate::registry::CalendarRegistry;
    pub use crate::types::{Date, MonthDay, WeekendDays};
}

pub use error::{AlmanacError, AlmanacResult};
pub use types::Date;
