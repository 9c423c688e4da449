//! Sexagenary (can-chi) stem-branch pairs.
//!
//! Ten heavenly stems (can) and twelve earthly branches (chi) pair into a
//! 60-element cycle, applied independently to years, months, days and
//! two-hour slots. Every function here is modular arithmetic over a fixed
//! epoch offset.

use al_core::errors::{Error, Result};
use al_core::{Jdn, Year};

/// Heavenly stem (can).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HeavenlyStem {
    /// Giáp
    Giap,
    /// Ất
    At,
    /// Bính
    Binh,
    /// Đinh
    Dinh,
    /// Mậu
    Mau,
    /// Kỷ
    Ky,
    /// Canh
    Canh,
    /// Tân
    Tan,
    /// Nhâm
    Nham,
    /// Quý
    Quy,
}

/// Vietnamese stem names, indexed from Giáp.
pub const STEM_NAMES: [&str; 10] = [
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];

impl HeavenlyStem {
    /// All stems in cycle order.
    pub const ALL: [HeavenlyStem; 10] = [
        HeavenlyStem::Giap,
        HeavenlyStem::At,
        HeavenlyStem::Binh,
        HeavenlyStem::Dinh,
        HeavenlyStem::Mau,
        HeavenlyStem::Ky,
        HeavenlyStem::Canh,
        HeavenlyStem::Tan,
        HeavenlyStem::Nham,
        HeavenlyStem::Quy,
    ];

    /// Stem at position `i` of the cycle (taken modulo 10).
    pub fn from_index(i: i64) -> Self {
        Self::ALL[i.rem_euclid(10) as usize]
    }

    /// Position in the cycle (0 = Giáp).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Vietnamese name.
    pub fn name(&self) -> &'static str {
        STEM_NAMES[self.index()]
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Earthly branch (chi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EarthlyBranch {
    /// Tý
    Ty,
    /// Sửu
    Suu,
    /// Dần
    Dan,
    /// Mão
    Mao,
    /// Thìn
    Thin,
    /// Tỵ
    Ti,
    /// Ngọ
    Ngo,
    /// Mùi
    Mui,
    /// Thân
    Than,
    /// Dậu
    Dau,
    /// Tuất
    Tuat,
    /// Hợi
    Hoi,
}

/// Vietnamese branch names, indexed from Tý.
pub const BRANCH_NAMES: [&str; 12] = [
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];

impl EarthlyBranch {
    /// All branches in cycle order.
    pub const ALL: [EarthlyBranch; 12] = [
        EarthlyBranch::Ty,
        EarthlyBranch::Suu,
        EarthlyBranch::Dan,
        EarthlyBranch::Mao,
        EarthlyBranch::Thin,
        EarthlyBranch::Ti,
        EarthlyBranch::Ngo,
        EarthlyBranch::Mui,
        EarthlyBranch::Than,
        EarthlyBranch::Dau,
        EarthlyBranch::Tuat,
        EarthlyBranch::Hoi,
    ];

    /// Branch at position `i` of the cycle (taken modulo 12).
    pub fn from_index(i: i64) -> Self {
        Self::ALL[i.rem_euclid(12) as usize]
    }

    /// Position in the cycle (0 = Tý).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Vietnamese name.
    pub fn name(&self) -> &'static str {
        BRANCH_NAMES[self.index()]
    }
}

impl std::fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One element of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StemBranch {
    /// Heavenly stem.
    pub stem: HeavenlyStem,
    /// Earthly branch.
    pub branch: EarthlyBranch,
}

impl StemBranch {
    /// Pair built from raw stem and branch positions.
    pub fn from_indices(stem: i64, branch: i64) -> Self {
        StemBranch {
            stem: HeavenlyStem::from_index(stem),
            branch: EarthlyBranch::from_index(branch),
        }
    }

    /// Position in the 60-cycle (0 = Giáp Tý, 59 = Quý Hợi).
    ///
    /// Only pairs whose stem and branch share parity occur in the cycle; for
    /// those the position is the unique `n` with `n ≡ stem (mod 10)` and
    /// `n ≡ branch (mod 12)`.
    pub fn cycle_index(&self) -> usize {
        let (s, b) = (self.stem.index(), self.branch.index());
        (0..60)
            .find(|n| n % 10 == s && n % 12 == b)
            .unwrap_or(0)
    }
}

impl std::fmt::Display for StemBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.stem, self.branch)
    }
}

// ── Cycle functions ───────────────────────────────────────────────────────────

/// Stem-branch pair of a lunar year.
pub fn year_can_chi(lunar_year: Year) -> StemBranch {
    let y = lunar_year as i64;
    StemBranch::from_indices(y + 6, y + 8)
}

/// Stem-branch pair of a lunar month.
///
/// The month stem follows `(yearStem * 2 + month + 1) mod 10`, so month 1
/// of a Giáp or Kỷ year is Bính Dần.
pub fn month_can_chi(lunar_year: Year, lunar_month: u8) -> StemBranch {
    let year_stem = year_can_chi(lunar_year).stem.index() as i64;
    let m = lunar_month as i64;
    StemBranch::from_indices(year_stem * 2 + m + 1, m + 1)
}

/// Stem-branch pair of the civil day `jdn`.
pub fn day_can_chi(jdn: Jdn) -> StemBranch {
    let jd = jdn as i64;
    StemBranch::from_indices(jd + 9, jd + 1)
}

/// Branch of the two-hour slot containing `hour` (0–23); 23:00 starts Tý.
pub fn hour_branch(hour: u8) -> Result<EarthlyBranch> {
    if hour > 23 {
        return Err(Error::InvalidArgument(format!(
            "hour {hour} out of range [0, 23]"
        )));
    }
    Ok(EarthlyBranch::from_index(((hour as i64 + 1) % 24) / 2))
}

/// Stem-branch pair of the two-hour slot containing `hour` on day `jdn`.
///
/// # Errors
/// [`Error::InvalidArgument`] if `hour > 23`.
pub fn hour_can_chi(jdn: Jdn, hour: u8) -> Result<StemBranch> {
    let branch = hour_branch(hour)?;
    let day_stem = day_can_chi(jdn).stem.index() as i64;
    Ok(StemBranch {
        stem: HeavenlyStem::from_index(day_stem * 2 + branch.index() as i64),
        branch,
    })
}
