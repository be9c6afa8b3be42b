//! Declarative calendar definitions.
//!
//! A [`CalendarDefinition`] describes one calendar as data: code, weekend,
//! year range and observed rules. Definitions can be loaded from JSON, which
//! is how calendars beyond the built-in jurisdictions are configured.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "code": "XMPL",
//!   "name": "Example exchange",
//!   "weekend": ["Sat", "Sun"],
//!   "start_year": 2000,
//!   "end_year": 2030,
//!   "rules": [
//!     {"rule": {"kind": {"fixed_date": {"month": 1, "day": 1}}}, "policy": "roll_to_monday"},
//!     {"rule": {"name": "Good Friday", "kind": {"easter_offset": {"days": -2}}}}
//!   ]
//! }
//! ```
//!
//! A file may hold a single object or an array of objects.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::builder::{CalendarBuilder, ObservedRule, DEFAULT_END_YEAR, DEFAULT_START_YEAR};
use super::calendar::HolidayCalendar;
use super::rules::HolidayRule;
use super::substitution::SubstitutionPolicy;
use crate::error::{AlmanacError, AlmanacResult};
use crate::types::WeekendDays;

/// Serializable description of a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDefinition {
    /// Short code used for lookup.
    pub code: String,

    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Weekend days, Saturday/Sunday if omitted.
    #[serde(default)]
    pub weekend: WeekendDays,

    /// First generated year.
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    /// Last generated year.
    #[serde(default = "default_end_year")]
    pub end_year: i32,

    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<ObservedRule>,
}

fn default_start_year() -> i32 {
    DEFAULT_START_YEAR
}

fn default_end_year() -> i32 {
    DEFAULT_END_YEAR
}

impl CalendarDefinition {
    /// Creates an empty definition with a Saturday/Sunday weekend and the default range.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: None,
            weekend: WeekendDays::SATURDAY_SUNDAY,
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            rules: Vec::new(),
        }
    }

    /// Sets the human-readable name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the weekend days.
    pub fn weekend(mut self, weekend: WeekendDays) -> Self {
        self.weekend = weekend;
        self
    }

    /// Sets the inclusive year range.
    pub fn year_range(mut self, start: i32, end: i32) -> Self {
        self.start_year = start;
        self.end_year = end;
        self
    }

    /// Appends a rule.
    pub fn rule(mut self, rule: HolidayRule, policy: SubstitutionPolicy) -> Self {
        self.rules.push(ObservedRule::new(rule, policy));
        self
    }

    /// Appends several rules sharing one policy.
    pub fn rules_with(
        mut self,
        policy: SubstitutionPolicy,
        rules: impl IntoIterator<Item = HolidayRule>,
    ) -> Self {
        self.rules
            .extend(rules.into_iter().map(|rule| ObservedRule::new(rule, policy)));
        self
    }

    /// Checks the code is usable as a registry key.
    pub fn validate(&self) -> AlmanacResult<()> {
        if self.code.trim().is_empty() {
            return Err(AlmanacError::config("Calendar code must not be empty"));
        }
        if self.code.contains('+') {
            return Err(AlmanacError::config(format!(
                "Calendar code '{}' must not contain '+'",
                self.code
            )));
        }
        Ok(())
    }

    /// Generates the calendar.
    pub fn build(&self) -> AlmanacResult<HolidayCalendar> {
        self.validate()?;
        CalendarBuilder::new(self.code.clone())
            .weekend(self.weekend)
            .year_range(self.start_year, self.end_year)
            .rules(self.rules.iter().cloned())
            .build()
    }

    /// Parses one definition or an array of definitions.
    pub fn from_json(json: &str) -> AlmanacResult<Vec<Self>> {
        let definitions = if json.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<Self>>(json)
        } else {
            serde_json::from_str::<Self>(json).map(|definition| vec![definition])
        }
        .map_err(|e| AlmanacError::config(format!("Failed to parse JSON: {}", e)))?;

        for definition in &definitions {
            definition.validate()?;
        }
        Ok(definitions)
    }

    /// Loads definitions from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> AlmanacResult<Vec<Self>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AlmanacError::config(format!("Failed to read file {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Serializes the definition to pretty JSON.
    pub fn to_json(&self) -> AlmanacResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AlmanacError::config(format!("Failed to serialize JSON: {}", e)))
    }
}
