//! Integration tests for the solar and lunar series against known events.

use al_astro::{new_moon_day, sun_longitude_degrees, sun_longitude_sector};
use al_core::settings::TIME_ZONE;
use al_time::to_jdn;
use approx::assert_abs_diff_eq;
use proptest::prelude::*;

fn jd(d: u8, m: u8, y: i32) -> i32 {
    to_jdn(d, m, y).unwrap()
}

#[test]
fn march_equinox_2024() {
    // The equinox fell on 2024-03-20 10:06 at UTC+7: the longitude wraps
    // between the two local midnights.
    assert_abs_diff_eq!(sun_longitude_degrees(jd(20, 3, 2024), TIME_ZONE), 359.590_017, epsilon = 1e-5);
    assert_abs_diff_eq!(sun_longitude_degrees(jd(21, 3, 2024), TIME_ZONE), 0.583_648, epsilon = 1e-5);
    assert_eq!(sun_longitude_sector(jd(20, 3, 2024), TIME_ZONE), 11);
    assert_eq!(sun_longitude_sector(jd(21, 3, 2024), TIME_ZONE), 0);
}

#[test]
fn solstice_and_equinox_longitudes() {
    assert_abs_diff_eq!(sun_longitude_degrees(jd(21, 6, 2024), TIME_ZONE), 89.854_583, epsilon = 1e-5);
    assert_abs_diff_eq!(sun_longitude_degrees(jd(23, 9, 2024), TIME_ZONE), 180.184_787, epsilon = 1e-5);
}

#[test]
fn documented_new_moons() {
    // Tết Giáp Thìn: 2024-02-10; the lunation before began 2024-01-11.
    assert_eq!(new_moon_day(1535, TIME_ZONE), jd(10, 2, 2024));
    assert_eq!(new_moon_day(1534, TIME_ZONE), jd(11, 1, 2024));
    // First new moon of the lunar year Canh Thìn: 2000-02-05.
    assert_eq!(new_moon_day(1238, TIME_ZONE), jd(5, 2, 2000));
}

proptest! {
    #[test]
    fn longitude_advances_about_one_degree_a_day(jdn in 2_415_021i32..2_488_434) {
        let today = sun_longitude_degrees(jdn, TIME_ZONE);
        let tomorrow = sun_longitude_degrees(jdn + 1, TIME_ZONE);
        let step = (tomorrow - today + 360.0) % 360.0;
        prop_assert!((0.9..1.1).contains(&step), "step {} at {}", step, jdn);
    }
}
