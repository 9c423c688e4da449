//! Apparent ecliptic longitude of the sun.
//!
//! Low-order series: mean longitude, mean anomaly and the equation of
//! centre, evaluated in Julian centuries from J2000.0. No nutation or
//! aberration terms.

use std::f64::consts::PI;

use al_core::{Jdn, Real};

/// Julian date of the J2000.0 epoch.
pub const J2000: Real = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: Real = 36_525.0;

/// Sun longitude in radians, normalised to `[0, 2π)`, at Julian date `jd`.
pub fn sun_longitude(jd: Real) -> Real {
    let t = (jd - J2000) / DAYS_PER_CENTURY;
    let t2 = t * t;
    let dr = PI / 180.0;
    // mean anomaly
    let m = 357.529_10 + 35_999.050_30 * t - 0.000_155_9 * t2 - 0.000_000_48 * t * t2;
    // mean longitude
    let l0 = 280.466_45 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let mut dl = (1.914_600 - 0.004_817 * t - 0.000_014 * t2) * (dr * m).sin();
    dl += (0.019_993 - 0.000_101 * t) * (2.0 * dr * m).sin() + 0.000_290 * (3.0 * dr * m).sin();
    let l = (l0 + dl) * dr;
    l - 2.0 * PI * (l / (2.0 * PI)).floor()
}

/// Julian date of local midnight starting civil day `jdn` in zone `tz` (hours).
fn local_midnight(jdn: Jdn, tz: Real) -> Real {
    jdn as Real - 0.5 - tz / 24.0
}

/// Sun longitude in degrees, in `[0, 360)`, at local midnight of day `jdn`.
pub fn sun_longitude_degrees(jdn: Jdn, tz: Real) -> Real {
    let deg = (sun_longitude(local_midnight(jdn, tz)) * 180.0 / PI + 360.0) % 360.0;
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}

/// 30° sector (0–11) holding the sun at local midnight of day `jdn`.
///
/// Sector 9 starts at the winter solstice (270°).
pub fn sun_longitude_sector(jdn: Jdn, tz: Real) -> i32 {
    let sector = (sun_longitude(local_midnight(jdn, tz)) / PI * 6.0).floor() as i32;
    sector.min(11)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn longitude_at_j2000() {
        assert_abs_diff_eq!(sun_longitude(J2000), 4.893_591_648_627_425, epsilon = 1e-12);
        assert_abs_diff_eq!(sun_longitude(J2000).to_degrees(), 280.382_148, epsilon = 1e-6);
    }

    #[test]
    fn local_midnight_shift() {
        // 2000-01-01 00:00 at UTC+7 is 1999-12-31 17:00 UTC.
        assert_abs_diff_eq!(sun_longitude_degrees(2_451_545, 7.0), 279.575_249_7, epsilon = 1e-6);
        assert_eq!(sun_longitude_sector(2_451_545, 7.0), 9);
    }

    #[test]
    fn normalised_range() {
        for jd in (2_415_021..2_488_434).step_by(97) {
            let rad = sun_longitude(jd as Real);
            assert!((0.0..2.0 * PI).contains(&rad), "{rad} at {jd}");
            let deg = sun_longitude_degrees(jd, 7.0);
            assert!((0.0..360.0).contains(&deg), "{deg} at {jd}");
            assert!((0..12).contains(&sun_longitude_sector(jd, 7.0)));
        }
    }
}
