//! # al-astro
//!
//! Truncated astronomical series used by the lunisolar calendar: the sun's
//! ecliptic longitude and mean new-moon instants. No external ephemeris is
//! consulted; every result is a closed-form evaluation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Mean new-moon instants.
pub mod moon;

/// Solar ecliptic longitude.
pub mod sun;

pub use moon::{new_moon, new_moon_day, NEW_MOON_EPOCH, SYNODIC_MONTH};
pub use sun::{sun_longitude, sun_longitude_degrees, sun_longitude_sector};
