//! Bitmap storage for holiday sets.
//!
//! One bit per day over a contiguous range of years, giving constant-time
//! membership checks and date-ordered iteration.

use chrono::NaiveDate;

use crate::types::Date;

/// Bits reserved per year (leap year).
const MAX_DAYS_PER_YEAR: usize = 366;

/// Dense per-day bitset over `start_year..=end_year`.
///
/// # Performance
///
/// - `contains()`: O(1)
/// - Memory usage: ~46 bytes per year
#[derive(Clone, PartialEq, Eq)]
pub struct HolidayBitmap {
    start_year: i32,
    end_year: i32,
    /// 1 = holiday, 0 = not a holiday
    words: Vec<u64>,
}

impl std::fmt::Debug for HolidayBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayBitmap")
            .field("start_year", &self.start_year)
            .field("end_year", &self.end_year)
            .field("holiday_count", &self.count())
            .finish()
    }
}

impl HolidayBitmap {
    /// Creates an empty bitmap covering `start_year..=end_year`.
    ///
    /// An inverted range yields a bitmap that covers no years.
    pub fn new(start_year: i32, end_year: i32) -> Self {
        let years = (end_year - start_year + 1).max(0) as usize;
        let word_count = (years * MAX_DAYS_PER_YEAR).div_ceil(64);
        Self {
            start_year,
            end_year,
            words: vec![0u64; word_count],
        }
    }

    /// First covered year.
    #[inline]
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Last covered year.
    #[inline]
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Returns true if `year` is covered.
    #[inline]
    pub fn covers_year(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }

    /// Adds a date. Returns false if the date is outside the covered years.
    pub fn insert(&mut self, date: Date) -> bool {
        match self.indices(date) {
            Some((word_idx, bit_idx)) => {
                self.words[word_idx] |= 1u64 << bit_idx;
                true
            }
            None => false,
        }
    }

    /// Check if a date is set. Dates outside the covered years are never set.
    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        self.indices(date)
            .is_some_and(|(word_idx, bit_idx)| self.words[word_idx] & (1u64 << bit_idx) != 0)
    }

    /// Count of set dates.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterates set dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.words
            .iter()
            .enumerate()
            .flat_map(|(word_idx, &word)| {
                (0..64usize)
                    .filter(move |bit_idx| word & (1u64 << bit_idx) != 0)
                    .map(move |bit_idx| word_idx * 64 + bit_idx)
            })
            .filter_map(|position| self.position_to_date(position))
    }

    /// Converts a date to (word index, bit index).
    #[inline]
    fn indices(&self, date: Date) -> Option<(usize, usize)> {
        let year = date.year();
        if !self.covers_year(year) {
            return None;
        }

        let year_offset = (year - self.start_year) as usize;
        let bit_position = year_offset * MAX_DAYS_PER_YEAR + date.ordinal0() as usize;

        Some((bit_position / 64, bit_position % 64))
    }

    fn position_to_date(&self, position: usize) -> Option<Date> {
        let year = self.start_year + (position / MAX_DAYS_PER_YEAR) as i32;
        let ordinal = (position % MAX_DAYS_PER_YEAR) as u32 + 1;
        NaiveDate::from_yo_opt(year, ordinal).map(Date::from)
    }
}
