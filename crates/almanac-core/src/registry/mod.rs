//! Calendar registry.
//!
//! Maps short codes to calendar definitions and builds each calendar on
//! first lookup. Built calendars are memoized per entry and shared as
//! `Arc<HolidayCalendar>`.
//!
//! # Example
//!
//! ```rust
//! use almanac_core::calendars::Calendar;
//! use almanac_core::registry;
//! use almanac_core::types::Date;
//!
//! let london = registry::lookup("GBLO").unwrap();
//! // Christmas Day 2010 fell on a Saturday, substituted to Monday 27th
//! assert!(!london.is_business_day(Date::from_ymd(2010, 12, 27).unwrap()).unwrap());
//!
//! let joint = registry::lookup("gblo+usny").unwrap();
//! assert_eq!(joint.code(), "GBLO+USNY");
//! ```

pub mod jurisdictions;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::calendars::{CalendarDefinition, HolidayCalendar};
use crate::error::{AlmanacError, AlmanacResult};

/// Process-wide registry of the standard jurisdictions.
static GLOBAL_REGISTRY: OnceLock<CalendarRegistry> = OnceLock::new();

/// A definition and its lazily built calendar.
struct Entry {
    definition: CalendarDefinition,
    calendar: OnceLock<AlmanacResult<Arc<HolidayCalendar>>>,
}

impl Entry {
    fn new(definition: CalendarDefinition) -> Self {
        Self {
            definition,
            calendar: OnceLock::new(),
        }
    }

    fn calendar(&self) -> AlmanacResult<Arc<HolidayCalendar>> {
        self.calendar
            .get_or_init(|| {
                debug!(code = %self.definition.code, "Building calendar on first lookup");
                self.definition.build().map(Arc::new)
            })
            .clone()
    }
}

/// Read-only map from calendar code to calendar.
///
/// Codes are case-insensitive. A code of the form `A+B` resolves to the
/// combination of the named calendars.
pub struct CalendarRegistry {
    entries: BTreeMap<String, Entry>,
}

impl CalendarRegistry {
    /// Registry holding the standard jurisdictions.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for definition in jurisdictions::standard_definitions() {
            registry.insert(definition);
        }
        registry
    }

    /// Get the global registry instance.
    pub fn global() -> &'static CalendarRegistry {
        GLOBAL_REGISTRY.get_or_init(CalendarRegistry::standard)
    }

    /// Registry holding only the given definitions.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::Config` for an invalid or repeated code.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = CalendarDefinition>,
    ) -> AlmanacResult<Self> {
        Self::empty().with_definitions(definitions)
    }

    /// Adds definitions, replacing any existing entry with the same code.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::Config` for an invalid code or a code repeated
    /// within `definitions`.
    pub fn with_definitions(
        mut self,
        definitions: impl IntoIterator<Item = CalendarDefinition>,
    ) -> AlmanacResult<Self> {
        let mut seen = Vec::new();
        for definition in definitions {
            definition.validate()?;
            let code = normalize(&definition.code);
            if seen.contains(&code) {
                return Err(AlmanacError::config(format!(
                    "Calendar code '{code}' is defined more than once"
                )));
            }
            if self.entries.contains_key(&code) {
                debug!(%code, "Replacing registered calendar definition");
            }
            seen.push(code);
            self.insert(definition);
        }
        Ok(self)
    }

    /// Looks up a calendar, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::UnknownCalendar` if any part of the code is not
    /// registered, or the construction error of the calendar.
    pub fn lookup(&self, code: &str) -> AlmanacResult<Arc<HolidayCalendar>> {
        let normalized = normalize(code);
        if !normalized.contains('+') {
            return self.entry(&normalized)?.calendar();
        }

        let mut parts = normalized.split('+').map(str::trim);
        let first = parts.next().unwrap_or_default();
        let mut combined = self.entry(first)?.calendar()?;
        for part in parts {
            let next = self.entry(part)?.calendar()?;
            combined = Arc::new(combined.combined_with(&next)?);
        }
        Ok(combined)
    }

    /// Returns true if the code names a registered calendar.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(&normalize(code))
    }

    /// Registered codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The definition registered under a code.
    pub fn definition(&self, code: &str) -> Option<&CalendarDefinition> {
        self.entries.get(&normalize(code)).map(|entry| &entry.definition)
    }

    /// Number of registered calendars.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    fn insert(&mut self, mut definition: CalendarDefinition) {
        let code = normalize(&definition.code);
        definition.code.clone_from(&code);
        self.entries.insert(code, Entry::new(definition));
    }

    fn entry(&self, code: &str) -> AlmanacResult<&Entry> {
        self.entries
            .get(code)
            .ok_or_else(|| AlmanacError::unknown_calendar(code))
    }
}

impl Default for CalendarRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for CalendarRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarRegistry")
            .field("codes", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Looks up a calendar in the global registry.
pub fn lookup(code: &str) -> AlmanacResult<Arc<HolidayCalendar>> {
    CalendarRegistry::global().lookup(code)
}

/// Standard registry extended with the definitions in a JSON file.
pub fn load_definitions(path: impl AsRef<Path>) -> AlmanacResult<CalendarRegistry> {
    let definitions = CalendarDefinition::from_json_file(path)?;
    CalendarRegistry::standard().with_definitions(definitions)
}
