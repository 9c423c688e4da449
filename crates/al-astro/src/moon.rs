//! Mean new-moon instants.
//!
//! `k` counts lunations from the new moon of January 1900 (`k = 0`). The
//! series corrects the mean lunation with the sun's and moon's mean
//! anomalies and the moon's argument of latitude, then removes ΔT.

use std::f64::consts::PI;

use al_core::{Jdn, Real};

/// Mean synodic month, in days.
pub const SYNODIC_MONTH: Real = 29.530_588_853;

/// Julian date of new moon `k = 0` (1900-01-01 13:51 UTC).
pub const NEW_MOON_EPOCH: Real = 2_415_021.076_998_695;

/// Lunations per Julian century.
const LUNATIONS_PER_CENTURY: Real = 1236.85;

/// Julian date (UTC, fractional) of the `k`-th new moon.
pub fn new_moon(k: i32) -> Real {
    let k = k as Real;
    let t = k / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let dr = PI / 180.0;

    let mut jd1 = 2_415_020.759_33 + 29.530_588_68 * k + 0.000_117_8 * t2 - 0.000_000_155 * t3;
    jd1 += 0.000_33 * ((166.56 + 132.87 * t - 0.009_173 * t2) * dr).sin();

    // sun's mean anomaly
    let m = 359.2242 + 29.105_356_08 * k - 0.000_033_3 * t2 - 0.000_003_47 * t3;
    // moon's mean anomaly
    let mpr = 306.0253 + 385.816_918_06 * k + 0.010_730_6 * t2 + 0.000_012_36 * t3;
    // moon's argument of latitude
    let f = 21.2964 + 390.670_506_46 * k - 0.001_652_8 * t2 - 0.000_002_39 * t3;

    let mut c1 = (0.1734 - 0.000_393 * t) * (m * dr).sin() + 0.0021 * (2.0 * m * dr).sin();
    c1 += -0.4068 * (mpr * dr).sin() + 0.0161 * (2.0 * mpr * dr).sin()
        - 0.0004 * (3.0 * mpr * dr).sin();
    c1 += 0.0104 * (2.0 * f * dr).sin() - 0.0051 * ((m + mpr) * dr).sin()
        - 0.0074 * ((m - mpr) * dr).sin();
    c1 += 0.0004 * ((2.0 * f + m) * dr).sin() - 0.0004 * ((2.0 * f - m) * dr).sin()
        - 0.0006 * ((2.0 * f + mpr) * dr).sin();
    c1 += 0.0010 * ((2.0 * f - mpr) * dr).sin() + 0.0005 * ((2.0 * mpr + m) * dr).sin();

    jd1 + c1 - delta_t(t)
}

/// ΔT correction in days, as a function of Julian centuries `t` from 1900.
fn delta_t(t: Real) -> Real {
    let t2 = t * t;
    let t3 = t2 * t;
    if t < -11.0 {
        0.001 + 0.000_839 * t + 0.000_226_1 * t2 - 0.000_008_45 * t3 - 0.000_000_081 * t * t3
    } else {
        -0.000_278 + 0.000_265 * t + 0.000_262 * t2
    }
}

/// Civil day (in zone `tz`, hours) on which the `k`-th new moon falls.
pub fn new_moon_day(k: i32, tz: Real) -> Jdn {
    (new_moon(k) + 0.5 + tz / 24.0).floor() as Jdn
}

/// Lunation index of the last mean new moon at or before day number `jdn`.
///
/// Only an estimate: the true new moon may fall one lunation either side.
pub fn lunation_before(jdn: Jdn) -> i32 {
    ((jdn as Real - NEW_MOON_EPOCH) / SYNODIC_MONTH).floor() as i32
}

/// Lunation index of the mean new moon nearest day number `jdn`.
pub fn lunation_nearest(jdn: Jdn) -> i32 {
    (0.5 + (jdn as Real - NEW_MOON_EPOCH) / SYNODIC_MONTH).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn epoch_new_moon() {
        assert_abs_diff_eq!(new_moon(0), NEW_MOON_EPOCH, epsilon = 1e-6);
        assert_eq!(new_moon_day(0, 7.0), 2_415_021);
    }

    #[test]
    fn new_moon_of_december_1999() {
        assert_abs_diff_eq!(new_moon(1236), 2_451_520.439_376_8, epsilon = 1e-6);
        // 1999-12-08 in Vietnam.
        assert_eq!(new_moon_day(1236, 7.0), 2_451_521);
    }

    #[test]
    fn delta_t_branches() {
        assert_abs_diff_eq!(delta_t(0.0), -0.000_278, epsilon = 1e-15);
        assert_abs_diff_eq!(delta_t(-12.0), 0.036_412_384, epsilon = 1e-12);
    }

    #[test]
    fn lunation_estimates() {
        // Tết 2024 (2024-02-10) is a new-moon day: lunation 1535.
        assert_eq!(lunation_before(2_460_351), 1535);
        assert_eq!(new_moon_day(1535, 7.0), 2_460_351);
        assert_eq!(lunation_nearest(2_451_521), 1236);
    }

    #[test]
    fn consecutive_new_moons_are_a_month_apart() {
        for k in 0..2500 {
            let gap = new_moon_day(k + 1, 7.0) - new_moon_day(k, 7.0);
            assert!((29..=30).contains(&gap), "gap {gap} after lunation {k}");
        }
    }
}
