//! `SolarDate` — a validated Gregorian date in the supported range.
//!
//! The valid range is 1900-01-01 to 2100-12-31. A `SolarDate` can only be
//! built through [`SolarDate::new`] (or [`from_jdn`](crate::julian::from_jdn)),
//! so holding one proves the date exists.

use al_core::errors::{Error, Result};
use al_core::settings::{year_in_range, MAX_YEAR, MIN_YEAR};
use al_core::{Jdn, Year};

use crate::julian::{from_jdn, jdn_from_ymd};
use crate::weekday::Weekday;

/// A Gregorian calendar date.
///
/// Ordering follows calendar order (year, then month, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolarDate {
    year: Year,
    month: u8,
    day: u8,
}

impl SolarDate {
    /// Create a date from day-of-month, month (1–12) and year.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `year` is outside 1900–2100,
    /// [`Error::InvalidArgument`] if the month or day does not exist.
    pub fn new(day: u8, month: u8, year: Year) -> Result<Self> {
        if !year_in_range(year) {
            return Err(Error::OutOfRange(format!(
                "year {year} outside [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidArgument(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidArgument(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(SolarDate { year, month, day })
    }

    pub(crate) fn from_parts_unchecked(day: u8, month: u8, year: Year) -> Self {
        debug_assert!(year_in_range(year), "invalid solar year {year}");
        SolarDate { year, month, day }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Year (1900–2100).
    pub fn year(&self) -> Year {
        self.year
    }

    /// Julian Day Number of this date.
    pub fn jdn(&self) -> Jdn {
        jdn_from_ymd(self.day, self.month, self.year)
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_jdn(self.jdn())
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days. Returns an error if the result leaves the range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        from_jdn(self.jdn() + n)
    }

    /// The following day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// Iterate over every day from `self` to `end`, both inclusive.
    pub fn iter_to(self, end: SolarDate) -> impl Iterator<Item = SolarDate> {
        (self.jdn()..=end.jdn()).filter_map(|jd| from_jdn(jd).ok())
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for SolarDate {
    type Error = Error;

    fn try_from(date: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        SolarDate::new(date.day() as u8, date.month() as u8, date.year())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Whether a given year is a Gregorian leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year. Returns 0 for a month outside 1–12.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
