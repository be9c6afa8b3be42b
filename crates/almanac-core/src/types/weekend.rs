//! Weekend day sets.

use chrono::Weekday;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// The set of weekdays that are always non-business days for a calendar.
///
/// Stored as a 7-bit mask indexed by days from Monday, so membership checks
/// are a single AND.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekendDays(u8);

impl WeekendDays {
    /// No weekend days.
    pub const NONE: Self = Self(0);
    /// Saturday and Sunday (most markets).
    pub const SATURDAY_SUNDAY: Self = Self(0b110_0000);
    /// Friday and Saturday (Middle East markets).
    pub const FRIDAY_SATURDAY: Self = Self(0b011_0000);
    /// Thursday and Friday.
    pub const THURSDAY_FRIDAY: Self = Self(0b001_1000);
    /// Sunday only.
    pub const SUNDAY_ONLY: Self = Self(0b100_0000);

    /// Creates a set from an iterator of weekdays.
    pub fn from_days(days: impl IntoIterator<Item = Weekday>) -> Self {
        days.into_iter().fold(Self::NONE, Self::with)
    }

    /// Returns a copy of the set with `day` added.
    #[must_use]
    pub fn with(self, day: Weekday) -> Self {
        Self(self.0 | bit(day))
    }

    /// Check if a weekday is a weekend day.
    #[inline]
    pub fn contains(self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// Union of two weekend sets.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true if no day is a weekend day.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of weekend days in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the weekend days, Monday first.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        ALL_DAYS.into_iter().filter(move |day| self.contains(*day))
    }

    /// Parses a preset name such as `SaturdaySunday` or `friday_saturday`.
    pub fn from_preset(name: &str) -> Option<Self> {
        match name {
            "SaturdaySunday" | "saturday_sunday" => Some(Self::SATURDAY_SUNDAY),
            "FridaySaturday" | "friday_saturday" => Some(Self::FRIDAY_SATURDAY),
            "ThursdayFriday" | "thursday_friday" => Some(Self::THURSDAY_FRIDAY),
            "SundayOnly" | "sunday_only" => Some(Self::SUNDAY_ONLY),
            "None" | "none" => Some(Self::NONE),
            _ => None,
        }
    }
}

#[inline]
fn bit(day: Weekday) -> u8 {
    1 << day.num_days_from_monday()
}

impl Default for WeekendDays {
    fn default() -> Self {
        Self::SATURDAY_SUNDAY
    }
}

impl fmt::Debug for WeekendDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for WeekendDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<String> = self.iter().map(|day| day.to_string()).collect();
        write!(f, "{}", names.join("/"))
    }
}

impl Serialize for WeekendDays {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter().map(|day| day.to_string()))
    }
}

impl<'de> Deserialize<'de> for WeekendDays {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(WeekendVisitor)
    }
}

/// Accepts either a preset name or a list of weekday names.
struct WeekendVisitor;

impl<'de> Visitor<'de> for WeekendVisitor {
    type Value = WeekendDays;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a weekend preset name or a list of weekday names")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        WeekendDays::from_preset(value)
            .ok_or_else(|| E::custom(format!("Unknown weekend type: {}", value)))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut days = WeekendDays::NONE;
        while let Some(name) = seq.next_element::<String>()? {
            let day: Weekday = name
                .parse()
                .map_err(|_| de::Error::custom(format!("Unknown weekday: {}", name)))?;
            days = days.with(day);
        }
        Ok(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert!(WeekendDays::SATURDAY_SUNDAY.contains(Weekday::Sat));
        assert!(WeekendDays::SATURDAY_SUNDAY.contains(Weekday::Sun));
        assert!(!WeekendDays::SATURDAY_SUNDAY.contains(Weekday::Fri));

        assert!(WeekendDays::FRIDAY_SATURDAY.contains(Weekday::Fri));
        assert!(!WeekendDays::FRIDAY_SATURDAY.contains(Weekday::Sun));

        assert!(WeekendDays::THURSDAY_FRIDAY.contains(Weekday::Thu));
        assert!(WeekendDays::THURSDAY_FRIDAY.contains(Weekday::Fri));

        assert!(WeekendDays::NONE.is_empty());
        assert_eq!(WeekendDays::SUNDAY_ONLY.len(), 1);
    }

    #[test]
    fn test_from_days_matches_preset() {
        let days = WeekendDays::from_days([Weekday::Sun, Weekday::Sat]);
        assert_eq!(days, WeekendDays::SATURDAY_SUNDAY);
        assert_eq!(days.iter().collect::<Vec<_>>(), vec![Weekday::Sat, Weekday::Sun]);
    }

    #[test]
    fn test_union() {
        let joint = WeekendDays::SATURDAY_SUNDAY.union(WeekendDays::FRIDAY_SATURDAY);
        assert_eq!(joint.len(), 3);
        assert!(joint.contains(Weekday::Fri));
    }

    #[test]
    fn test_display() {
        assert_eq!(WeekendDays::SATURDAY_SUNDAY.to_string(), "Sat/Sun");
        assert_eq!(WeekendDays::NONE.to_string(), "none");
    }

    #[test]
    fn test_weekend_serde() {
        let weekend: WeekendDays = serde_json::from_str(r#""SaturdaySunday""#).unwrap();
        assert_eq!(weekend, WeekendDays::SATURDAY_SUNDAY);

        let weekend: WeekendDays = serde_json::from_str(r#""friday_saturday""#).unwrap();
        assert_eq!(weekend, WeekendDays::FRIDAY_SATURDAY);

        let weekend: WeekendDays = serde_json::from_str(r#"["Thu", "Friday"]"#).unwrap();
        assert_eq!(weekend, WeekendDays::THURSDAY_FRIDAY);

        let json = serde_json::to_string(&WeekendDays::SATURDAY_SUNDAY).unwrap();
        assert_eq!(json, r#"["Sat","Sun"]"#);

        assert!(serde_json::from_str::<WeekendDays>(r#""Weekdays""#).is_err());
        assert!(serde_json::from_str::<WeekendDays>(r#"["Caturday"]"#).is_err());
    }
}
