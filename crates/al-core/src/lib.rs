//! # al-core
//!
//! Core types, constants, and error definitions for amlich.
//!
//! This crate provides the building blocks shared by every other crate in
//! the workspace: primitive type aliases, the error enum with its
//! `ensure!` / `fail!` macros, and the fixed calendar settings.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Fixed calendar settings (time zone, supported range).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used by the astronomical series.
pub type Real = f64;

/// Julian Day Number: integer count of days, the ordering key for all dates.
pub type Jdn = i32;

/// Gregorian or lunar year number.
pub type Year = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
