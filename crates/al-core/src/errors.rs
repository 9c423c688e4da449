//! Error types for amlich.
//!
//! Every failure in the calendar engine is reported through the single
//! `thiserror`-derived [`Error`] enum. Nothing is coerced into a sentinel
//! date: an invalid query always produces an `Err`. The `ensure!` and `fail!`
//! macros defined here are the early-return shorthands used across the
//! workspace.

use thiserror::Error;

/// The top-level error type used throughout amlich.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date, day number, or lunar year outside the supported range.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// A lunar-to-solar query asserted a leap month the year does not have.
    #[error("lunar year {year} has no leap month {month}")]
    InvalidLeapMonth {
        /// The requested lunar month number.
        month: u8,
        /// The requested lunar year.
        year: i32,
    },

    /// Lunar day or month outside its nominal bounds.
    #[error("invalid lunar field: {0}")]
    InvalidLunarField(String),

    /// Invalid argument (impossible solar month/day, hour of day, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A bounded scan ran out of iterations before finding its target.
    #[error("scan did not terminate within {limit} steps")]
    ScanExhausted {
        /// The iteration bound that was hit.
        limit: u32,
    },
}

/// Shorthand `Result` type used throughout amlich.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` from the enclosing function if `$cond` is false.
///
/// # Example
/// ```
/// use al_core::{ensure, errors::Error};
/// fn month(m: u8) -> al_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), Error::InvalidArgument(format!("month {m}")));
///     Ok(m)
/// }
/// assert!(month(12).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Return `Err($err)` from the enclosing function immediately.
///
/// # Example
/// ```
/// use al_core::{fail, errors::Error};
/// fn always_err() -> al_core::errors::Result<()> {
///     fail!(Error::ScanExhausted { limit: 3 });
/// }
/// assert_eq!(always_err(), Err(Error::ScanExhausted { limit: 3 }));
/// ```
#[macro_export]
macro_rules! fail {
    ($err:expr) => {
        return Err($err)
    };
}
