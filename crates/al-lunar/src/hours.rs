//! Auspicious double hours (giờ hoàng đạo).
//!
//! The day is split into twelve two-hour slots named by branch, starting
//! with Tý at 23:00. Which slots are hoàng đạo depends only on the day's
//! branch, through a fixed 12×12 table.

use al_core::Jdn;

use crate::can_chi::{day_can_chi, EarthlyBranch};

/// Clock range of each slot, indexed by branch.
pub const HOUR_RANGES: [&str; 12] = [
    "23:00-01:00",
    "01:00-03:00",
    "03:00-05:00",
    "05:00-07:00",
    "07:00-09:00",
    "09:00-11:00",
    "11:00-13:00",
    "13:00-15:00",
    "15:00-17:00",
    "17:00-19:00",
    "19:00-21:00",
    "21:00-23:00",
];

/// Row per day branch (Tý … Hợi); `1` marks a hoàng đạo slot, Tý slot first.
const GOOD_HOUR_MASKS: [&str; 12] = [
    "110100101100",
    "001101001011",
    "110011010010",
    "101100110100",
    "010110011010",
    "101011001101",
    "010101100110",
    "011010110011",
    "001101011001",
    "100110101100",
    "010011010110",
    "101001101011",
];

/// One two-hour slot of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HourSlot {
    /// Branch naming the slot.
    pub branch: EarthlyBranch,
    /// Clock range, e.g. `"23:00-01:00"`.
    pub range: &'static str,
    /// `true` for a hoàng đạo (auspicious) slot.
    pub good: bool,
}

/// The twelve slots of a day whose branch is `day_branch`.
pub fn hours_for_branch(day_branch: EarthlyBranch) -> [HourSlot; 12] {
    let mask = GOOD_HOUR_MASKS[day_branch.index()].as_bytes();
    std::array::from_fn(|i| HourSlot {
        branch: EarthlyBranch::ALL[i],
        range: HOUR_RANGES[i],
        good: mask[i] == b'1',
    })
}

/// The twelve slots of civil day `jdn`.
pub fn good_hours(jdn: Jdn) -> [HourSlot; 12] {
    hours_for_branch(day_can_chi(jdn).branch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_least_six_good_slots_every_day() {
        for branch in EarthlyBranch::ALL {
            let good = hours_for_branch(branch).iter().filter(|h| h.good).count();
            assert!((6..=7).contains(&good), "{branch}: {good}");
        }
    }

    #[test]
    fn ty_day_slots() {
        let hours = hours_for_branch(EarthlyBranch::Ty);
        let good: Vec<_> = hours.iter().filter(|h| h.good).map(|h| h.branch).collect();
        assert_eq!(
            good,
            vec![
                EarthlyBranch::Ty,
                EarthlyBranch::Suu,
                EarthlyBranch::Mao,
                EarthlyBranch::Ngo,
                EarthlyBranch::Than,
                EarthlyBranch::Dau,
            ]
        );
        assert_eq!(hours[0].range, "23:00-01:00");
    }

    #[test]
    fn keyed_by_day_branch() {
        // 2024-02-10 is a Thìn day.
        let hours = good_hours(2_460_351);
        assert_eq!(hours, hours_for_branch(EarthlyBranch::Thin));
    }
}
