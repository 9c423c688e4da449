//! Integration tests for `SolarDate` and Julian Day Number conversion.

use al_core::settings::{MAX_JDN, MIN_JDN};
use al_time::date::days_in_month;
use al_time::{from_jdn, to_jdn, SolarDate, Weekday};
use proptest::prelude::*;

fn date(d: u8, m: u8, y: i32) -> SolarDate {
    SolarDate::new(d, m, y).unwrap()
}

// ─── Exhaustive sweeps ───────────────────────────────────────────────────────

#[test]
fn every_day_roundtrips() {
    let mut expected_jdn = MIN_JDN;
    for year in 1900..=2100 {
        for month in 1..=12u8 {
            for day in 1..=days_in_month(year, month) {
                let jd = to_jdn(day, month, year).unwrap();
                assert_eq!(jd, expected_jdn, "gap before {day}/{month}/{year}");
                assert_eq!(from_jdn(jd).unwrap(), date(day, month, year));
                expected_jdn += 1;
            }
        }
    }
    assert_eq!(expected_jdn - 1, MAX_JDN);
}

#[test]
fn iter_to_covers_a_leap_february() {
    let days: Vec<_> = date(27, 2, 2024).iter_to(date(2, 3, 2024)).collect();
    assert_eq!(
        days,
        vec![
            date(27, 2, 2024),
            date(28, 2, 2024),
            date(29, 2, 2024),
            date(1, 3, 2024),
            date(2, 3, 2024),
        ]
    );
}

#[test]
fn weekdays_cycle_over_a_week() {
    let start = date(1, 1, 2024);
    let names: Vec<_> = (0..7)
        .map(|n| start.add_days(n).unwrap().weekday())
        .collect();
    assert_eq!(
        names,
        vec![
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
    );
}

// ─── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn jdn_is_strictly_monotone(a in MIN_JDN..=MAX_JDN, b in MIN_JDN..=MAX_JDN) {
        let da = from_jdn(a).unwrap();
        let db = from_jdn(b).unwrap();
        prop_assert_eq!(a.cmp(&b), da.cmp(&db));
    }

    #[test]
    fn add_days_matches_jdn_offset(jd in MIN_JDN..=MAX_JDN - 400, n in 0i32..400) {
        let d = from_jdn(jd).unwrap();
        prop_assert_eq!(d.add_days(n).unwrap().jdn(), jd + n);
    }
}
