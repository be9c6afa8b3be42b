//! CLI command implementations.

pub mod adjust;
pub mod check;
pub mod codes;
pub mod easter;
pub mod holidays;
pub mod shift;

// Re-export submodules for convenience
pub use adjust::AdjustArgs;
pub use check::CheckArgs;
pub use codes::CodesArgs;
pub use easter::EasterArgs;
pub use holidays::HolidaysArgs;
pub use shift::ShiftArgs;

use std::path::Path;
use std::sync::Arc;

use almanac_core::calendars::HolidayCalendar;
use almanac_core::registry::{self, CalendarRegistry};
use almanac_core::types::Date;
use tracing::info;

use crate::error::{CliError, CliResult};

/// Standard registry, extended from a definitions file when one is given.
pub fn load_registry(definitions: Option<&Path>) -> CliResult<CalendarRegistry> {
    match definitions {
        Some(path) => {
            let registry = registry::load_definitions(path)?;
            info!(path = %path.display(), calendars = registry.len(), "Loaded calendar definitions");
            Ok(registry)
        }
        None => Ok(CalendarRegistry::standard()),
    }
}

/// Looks up a calendar code, including `A+B` combinations.
pub fn lookup(registry: &CalendarRegistry, code: &str) -> CliResult<Arc<HolidayCalendar>> {
    Ok(registry.lookup(code)?)
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}
