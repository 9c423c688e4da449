//! Solar terms (tiết khí).
//!
//! The ecliptic is cut into 24 terms of 15° each, numbered from Lập xuân
//! at 315°. A term is "in force" on a civil day when the sun's longitude at
//! local midnight lies inside it. Boundaries are found by stepping day by
//! day; a term never spans more than 16 days, so the scan is short.

use al_astro::sun_longitude_degrees;
use al_core::errors::{Error, Result};
use al_core::settings::{jdn_in_range, TIME_ZONE};
use al_core::{ensure, Jdn};
use al_time::{from_jdn, SolarDate};

/// Vietnamese names of the 24 solar terms, starting at Lập xuân (315°).
pub const SOLAR_TERMS: [&str; 24] = [
    "Lập xuân",
    "Vũ thủy",
    "Kinh trập",
    "Xuân phân",
    "Thanh minh",
    "Cốc vũ",
    "Lập hạ",
    "Tiểu mãn",
    "Mang chủng",
    "Hạ chí",
    "Tiểu thử",
    "Đại thử",
    "Lập thu",
    "Xử thử",
    "Bạch lộ",
    "Thu phân",
    "Hàn lộ",
    "Sương giáng",
    "Lập đông",
    "Tiểu tuyết",
    "Đại tuyết",
    "Đông chí",
    "Tiểu hàn",
    "Đại hàn",
];

/// Index of Đông chí (winter solstice, 270°).
pub const WINTER_SOLSTICE: usize = 21;

/// Upper bound on the days a boundary scan may step.
const MAX_SCAN_DAYS: u32 = 20;

/// Which boundary [`term_boundary`] should locate, relative to the query day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermDirection {
    /// Start of the term in force on the query day.
    Current,
    /// Start of the following term.
    Next,
    /// Start of the term before the one in force.
    Previous,
}

/// A solar term and the first civil day it is in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolarTermRecord {
    /// Term index (0 = Lập xuân … 23 = Đại hàn).
    pub index: usize,
    /// Vietnamese term name.
    pub name: &'static str,
    /// Day number of the first day of the term.
    pub jd: Jdn,
}

impl SolarTermRecord {
    fn at(index: usize, jd: Jdn) -> Self {
        SolarTermRecord {
            index,
            name: SOLAR_TERMS[index],
            jd,
        }
    }

    /// Solar date of the first day of the term.
    ///
    /// Fails when the boundary sits just outside the supported range (the
    /// term in force on 1900-01-01 began in December 1899).
    pub fn date(&self) -> Result<SolarDate> {
        from_jdn(self.jd)
    }
}

/// Index (0–23) of the term in force on day `jdn`.
pub fn term_index(jdn: Jdn) -> usize {
    let deg = sun_longitude_degrees(jdn, TIME_ZONE);
    let idx = (((deg - 315.0 + 360.0) % 360.0) / 15.0).floor() as usize;
    idx.min(23)
}

/// Name of the term in force on day `jdn`.
pub fn term_name(jdn: Jdn) -> &'static str {
    SOLAR_TERMS[term_index(jdn)]
}

/// First day on which the term in force on `jdn` holds, stepping backwards.
fn scan_start(jdn: Jdn) -> Result<Jdn> {
    let idx = term_index(jdn);
    let mut j = jdn;
    for _ in 0..MAX_SCAN_DAYS {
        if term_index(j - 1) != idx {
            return Ok(j);
        }
        j -= 1;
    }
    Err(Error::ScanExhausted {
        limit: MAX_SCAN_DAYS,
    })
}

/// First day after `jdn` on which a different term is in force.
fn scan_next(jdn: Jdn) -> Result<Jdn> {
    let idx = term_index(jdn);
    let mut j = jdn + 1;
    for _ in 0..MAX_SCAN_DAYS {
        if term_index(j) != idx {
            return Ok(j);
        }
        j += 1;
    }
    Err(Error::ScanExhausted {
        limit: MAX_SCAN_DAYS,
    })
}

/// Locate a term boundary relative to day `jdn`.
///
/// # Errors
/// [`Error::OutOfRange`] if `jdn` is outside 1900-01-01..=2100-12-31. The
/// returned boundary itself may lie up to one term outside that range.
///
/// # Example
/// ```
/// use al_lunar::solar_term::{term_boundary, TermDirection};
/// use al_time::to_jdn;
///
/// let jd = to_jdn(10, 2, 2024).unwrap();
/// let term = term_boundary(jd, TermDirection::Current).unwrap();
/// assert_eq!(term.name, "Lập xuân");
/// assert_eq!(term.jd, to_jdn(5, 2, 2024).unwrap());
/// ```
pub fn term_boundary(jdn: Jdn, direction: TermDirection) -> Result<SolarTermRecord> {
    ensure!(
        jdn_in_range(jdn),
        Error::OutOfRange(format!("day number {jdn} outside the supported range"))
    );
    let jd = match direction {
        TermDirection::Current => scan_start(jdn)?,
        TermDirection::Next => scan_next(jdn)?,
        TermDirection::Previous => scan_start(scan_start(jdn)? - 1)?,
    };
    Ok(SolarTermRecord::at(term_index(jd), jd))
}
