//! Gregorian Easter computation.

use crate::types::Date;

/// First year of the Gregorian calendar for which Easter is computed.
pub const FIRST_GREGORIAN_YEAR: i32 = 1583;

/// Calculate Easter Sunday using the Anonymous Gregorian algorithm.
///
/// Returns `None` for years before [`FIRST_GREGORIAN_YEAR`] or outside the
/// representable date range.
///
/// # Example
///
/// ```rust
/// use almanac_core::calendars::easter_sunday;
///
/// let easter = easter_sunday(2025).unwrap();
/// assert_eq!(easter.to_string(), "2025-04-20");
/// assert!(easter_sunday(1500).is_none());
/// ```
#[allow(clippy::many_single_char_names)]
pub fn easter_sunday(year: i32) -> Option<Date> {
    if year < FIRST_GREGORIAN_YEAR {
        return None;
    }

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    Date::from_ymd(year, month as u32, day as u32).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easter() {
        // Easter Sunday 2025 is April 20
        let easter = easter_sunday(2025).unwrap();
        assert_eq!(easter, Date::from_ymd(2025, 4, 20).unwrap());

        // Easter Sunday 2024 was March 31
        let easter = easter_sunday(2024).unwrap();
        assert_eq!(easter, Date::from_ymd(2024, 3, 31).unwrap());
    }

    #[test]
    fn test_extreme_dates() {
        // Earliest possible Easter
        assert_eq!(easter_sunday(1818).unwrap(), Date::from_ymd(1818, 3, 22).unwrap());
        // Latest possible Easter
        assert_eq!(easter_sunday(1943).unwrap(), Date::from_ymd(1943, 4, 25).unwrap());
        assert_eq!(easter_sunday(2038).unwrap(), Date::from_ymd(2038, 4, 25).unwrap());
    }

    #[test]
    fn test_always_a_sunday() {
        for year in FIRST_GREGORIAN_YEAR..=2400 {
            let easter = easter_sunday(year).unwrap();
            assert_eq!(easter.weekday(), chrono::Weekday::Sun, "{year}");
            assert_eq!(easter.year(), year);
        }
    }

    #[test]
    fn test_before_gregorian_reform() {
        assert!(easter_sunday(1582).is_none());
        assert!(easter_sunday(FIRST_GREGORIAN_YEAR).is_some());
    }
}
