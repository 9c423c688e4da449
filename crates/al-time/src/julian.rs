//! Julian Day Number conversion.
//!
//! Uses the Fliegel–Van Flandern integer formula. Day numbers before the
//! Gregorian reform (JDN 2299161, 1582-10-15) are converted with the
//! Julian-calendar variant of the same formula.

use al_core::errors::{Error, Result};
use al_core::settings::{year_in_range, GREGORIAN_REFORM_JDN, MAX_YEAR, MIN_YEAR};
use al_core::{Jdn, Year};

use crate::date::SolarDate;

/// Day number of `day`/`month`/`year` without range checks.
///
/// Falls back to the Julian calendar when the Gregorian result precedes
/// the reform. The astronomical code needs this for dates just outside the
/// supported range (e.g. 31 December 1899).
pub fn jdn_from_ymd(day: u8, month: u8, year: Year) -> Jdn {
    let d = day as i32;
    let m = month as i32;
    let a = (14 - m).div_euclid(12);
    let y = year + 4800 - a;
    let mm = m + 12 * a - 3;
    let jd = d + (153 * mm + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;
    if jd < GREGORIAN_REFORM_JDN {
        d + (153 * mm + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - 32083
    } else {
        jd
    }
}

/// Inverse of [`jdn_from_ymd`]: `(day, month, year)` without range checks.
pub fn ymd_from_jdn(jdn: Jdn) -> (u8, u8, Year) {
    let (b, c) = if jdn >= GREGORIAN_REFORM_JDN {
        let a = jdn + 32044;
        let b = (4 * a + 3).div_euclid(146_097);
        (b, a - (b * 146_097).div_euclid(4))
    } else {
        (0, jdn + 32082)
    };
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = b * 100 + d - 4800 + m.div_euclid(10);
    (day as u8, month as u8, year)
}

/// Day number of a Gregorian date in the supported range.
///
/// # Errors
/// [`Error::OutOfRange`] if `year` is outside 1900–2100,
/// [`Error::InvalidArgument`] if the month or day does not exist.
pub fn to_jdn(day: u8, month: u8, year: Year) -> Result<Jdn> {
    Ok(SolarDate::new(day, month, year)?.jdn())
}

/// Gregorian date of a day number in the supported range.
///
/// # Errors
/// [`Error::OutOfRange`] if `jdn` falls before 1900-01-01 or after
/// 2100-12-31.
pub fn from_jdn(jdn: Jdn) -> Result<SolarDate> {
    let (day, month, year) = ymd_from_jdn(jdn);
    if !year_in_range(year) {
        return Err(Error::OutOfRange(format!(
            "day number {jdn} ({year}) outside [{MIN_YEAR}, {MAX_YEAR}]"
        )));
    }
    Ok(SolarDate::from_parts_unchecked(day, month, year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use al_core::settings::{MAX_JDN, MIN_JDN};

    #[test]
    fn known_day_numbers() {
        assert_eq!(jdn_from_ymd(1, 1, 2000), 2_451_545);
        assert_eq!(jdn_from_ymd(1, 1, 1900), MIN_JDN);
        assert_eq!(jdn_from_ymd(31, 12, 2100), MAX_JDN);
        assert_eq!(jdn_from_ymd(2, 9, 1945), 2_431_701);
    }

    #[test]
    fn gregorian_reform() {
        // 4 October 1582 (Julian) is immediately followed by 15 October 1582.
        assert_eq!(jdn_from_ymd(15, 10, 1582), GREGORIAN_REFORM_JDN);
        assert_eq!(jdn_from_ymd(4, 10, 1582), GREGORIAN_REFORM_JDN - 1);
        assert_eq!(ymd_from_jdn(GREGORIAN_REFORM_JDN), (15, 10, 1582));
        assert_eq!(ymd_from_jdn(GREGORIAN_REFORM_JDN - 1), (4, 10, 1582));
    }

    #[test]
    fn julian_roundtrip() {
        for (d, m, y) in [(1, 1, 1000), (29, 2, 1500), (1, 3, 1200)] {
            assert_eq!(ymd_from_jdn(jdn_from_ymd(d, m, y)), (d, m, y));
        }
    }

    #[test]
    fn checked_conversions() {
        assert_eq!(to_jdn(1, 1, 2000), Ok(2_451_545));
        assert!(matches!(to_jdn(1, 1, 1899), Err(Error::OutOfRange(_))));
        assert!(matches!(to_jdn(30, 2, 2024), Err(Error::InvalidArgument(_))));
        assert!(matches!(from_jdn(MIN_JDN - 1), Err(Error::OutOfRange(_))));
        assert!(matches!(from_jdn(MAX_JDN + 1), Err(Error::OutOfRange(_))));
        let d = from_jdn(MAX_JDN).unwrap();
        assert_eq!((d.day(), d.month(), d.year()), (31, 12, 2100));
    }
}
