//! `Weekday` — day of the week with Vietnamese labels.

use al_core::Jdn;

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Weekday of a Julian Day Number (JDN 0 was a Monday).
    pub fn from_jdn(jdn: Jdn) -> Self {
        match jdn.rem_euclid(7) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Vietnamese name ("Thứ 2" … "Chủ nhật").
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Thứ 2",
            Weekday::Tuesday => "Thứ 3",
            Weekday::Wednesday => "Thứ 4",
            Weekday::Thursday => "Thứ 5",
            Weekday::Friday => "Thứ 6",
            Weekday::Saturday => "Thứ 7",
            Weekday::Sunday => "Chủ nhật",
        }
    }

    /// Short label used in month grids ("T2" … "CN").
    pub fn short_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "T2",
            Weekday::Tuesday => "T3",
            Weekday::Wednesday => "T4",
            Weekday::Thursday => "T5",
            Weekday::Friday => "T6",
            Weekday::Saturday => "T7",
            Weekday::Sunday => "CN",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
