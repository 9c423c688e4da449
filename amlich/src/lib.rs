//! # amlich
//!
//! Vietnamese lunisolar calendar engine.
//!
//! This crate is a **façade**: [`date_info`] composes every calculation for
//! one solar date, and the underlying `al-*` crates are re-exported for
//! callers that need a single piece (a lunar conversion, a can-chi pair, a
//! solar-term boundary).
//!
//! ## Quick start
//!
//! ```rust
//! use amlich::lunar::{lunar_to_solar, solar_to_lunar};
//!
//! let l = solar_to_lunar(1, 1, 2000).unwrap();
//! assert_eq!((l.day, l.month, l.year, l.leap), (25, 11, 1999, false));
//!
//! let tet = lunar_to_solar(1, 1, 2024, false).unwrap();
//! assert_eq!(tet.to_string(), "10/02/2024");
//! ```
//!
//! All functions are pure: no global state, no I/O, safe to call from any
//! thread. Enable the `serde` feature to serialise the records, `chrono` to
//! query with a `NaiveDate`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Per-date aggregate.
pub mod info;

/// Core types, constants, and error definitions.
pub use al_core as core;

/// Solar dates, Julian Day Numbers, weekdays.
pub use al_time as time;

/// Solar longitude and new-moon series.
pub use al_astro as astro;

/// Lunar dates, solar terms, can-chi, day quality.
pub use al_lunar as lunar;

pub use al_core::{Error, Result};
#[cfg(feature = "chrono")]
pub use info::date_info_for;
pub use info::{date_info, CanChi, DateInfo};
