//! Sexagenary cycles and solar-term coverage.

use al_core::settings::{MAX_JDN, MIN_JDN};
use al_lunar::solar_term::WINTER_SOLSTICE;
use al_lunar::{day_can_chi, month_can_chi, term_index, year_can_chi, StemBranch};
use al_time::to_jdn;
use proptest::prelude::*;

#[test]
fn day_pairs_cycle_every_sixty_days() {
    let mut distinct: Vec<StemBranch> = (MIN_JDN..MIN_JDN + 60).map(day_can_chi).collect();
    distinct.sort_by_key(|p| p.cycle_index());
    distinct.dedup();
    assert_eq!(distinct.len(), 60);
    for jd in MIN_JDN..=MAX_JDN - 60 {
        assert_eq!(day_can_chi(jd), day_can_chi(jd + 60));
        assert_eq!(
            (day_can_chi(jd).cycle_index() + 1) % 60,
            day_can_chi(jd + 1).cycle_index()
        );
    }
}

#[test]
fn year_pairs_cycle_every_sixty_years() {
    for year in 1899..=2040 {
        assert_eq!(year_can_chi(year), year_can_chi(year + 60));
        for offset in 1..60 {
            assert_ne!(year_can_chi(year), year_can_chi(year + offset));
        }
    }
}

#[test]
fn known_day_pair_of_2_september_1945() {
    let pair = day_can_chi(to_jdn(2, 9, 1945).unwrap());
    assert_eq!(pair.to_string(), "Giáp Tuất");
}

#[test]
fn month_stems_repeat_every_five_years() {
    for year in 1900..=2095 {
        for month in 1..=12 {
            assert_eq!(month_can_chi(year, month), month_can_chi(year + 5, month));
        }
    }
}

#[test]
fn every_term_once_a_year_in_order() {
    for year in 1900..=2100 {
        let start = to_jdn(1, 1, year).unwrap();
        let end = to_jdn(31, 12, year).unwrap();
        let mut seen = [false; 24];
        let mut prev = term_index(start);
        seen[prev] = true;
        for jd in start + 1..=end {
            let idx = term_index(jd);
            if idx != prev {
                assert_eq!(idx, (prev + 1) % 24, "jump at day {jd}");
                prev = idx;
            }
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "{year}: {seen:?}");
    }
}

#[test]
fn winter_solstice_term_in_late_december() {
    for year in 1900..=2100 {
        let jd = to_jdn(25, 12, year).unwrap();
        assert_eq!(term_index(jd), WINTER_SOLSTICE, "{year}");
    }
}

proptest! {
    #[test]
    fn term_index_is_in_range(jd in MIN_JDN..=MAX_JDN) {
        prop_assert!(term_index(jd) < 24);
    }
}
