//! # al-time
//!
//! Gregorian dates, Julian Day Numbers, and weekdays.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `SolarDate` type.
pub mod date;

/// Julian Day Number conversion.
pub mod julian;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::SolarDate;
pub use julian::{from_jdn, to_jdn};
pub use weekday::Weekday;
