//! Calendar-wide constants.
//!
//! The engine keeps no process-wide mutable settings: every value that
//! parameterises a computation is fixed here at compile time, so any call
//! can run from any thread with no synchronisation.

use crate::{Jdn, Real, Year};

/// Civil time zone of the Vietnamese calendar, in hours east of UTC.
pub const TIME_ZONE: Real = 7.0;

/// First supported Gregorian year.
pub const MIN_YEAR: Year = 1900;

/// Last supported Gregorian year.
pub const MAX_YEAR: Year = 2100;

/// First day of the Gregorian calendar (1582-10-15).
///
/// Day numbers below this are converted with the Julian-calendar formula.
pub const GREGORIAN_REFORM_JDN: Jdn = 2_299_161;

/// Day number of 1900-01-01.
pub const MIN_JDN: Jdn = 2_415_021;

/// Day number of 2100-12-31.
pub const MAX_JDN: Jdn = 2_488_434;

/// Return `true` if `year` lies in `[MIN_YEAR, MAX_YEAR]`.
pub fn year_in_range(year: Year) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// Return `true` if `jdn` lies in `[MIN_JDN, MAX_JDN]`.
pub fn jdn_in_range(jdn: Jdn) -> bool {
    (MIN_JDN..=MAX_JDN).contains(&jdn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds() {
        assert!(year_in_range(1900));
        assert!(year_in_range(2100));
        assert!(!year_in_range(1899));
        assert!(!year_in_range(2101));
        assert!(jdn_in_range(MIN_JDN));
        assert!(!jdn_in_range(MAX_JDN + 1));
    }
}
