//! # al-lunar
//!
//! The Vietnamese lunar calendar: solar↔lunar conversion, solar terms,
//! sexagenary (can-chi) pairs, day quality (trực) and auspicious hours.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Sexagenary stem-branch pairs.
pub mod can_chi;

/// Trực day classification.
pub mod day_quality;

/// Giờ hoàng đạo (auspicious double hours).
pub mod hours;

/// Lunar date resolution and leap months.
pub mod lunar;

/// The 24 solar terms.
pub mod solar_term;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use can_chi::{
    day_can_chi, hour_can_chi, month_can_chi, year_can_chi, EarthlyBranch, HeavenlyStem,
    StemBranch,
};
pub use day_quality::{day_quality, DayQuality, DayRating, Truc};
pub use hours::{good_hours, HourSlot};
pub use lunar::{
    leap_month, lunar_from_jdn, lunar_to_solar, lunar_year_months, solar_to_lunar, LunarDate,
    LunarMonth,
};
pub use solar_term::{term_boundary, term_index, term_name, SolarTermRecord, TermDirection};
