//! Error types for the smath crates.
//!
//! Geometric degeneracies are handled with silent fallbacks and never
//! surface here; the variants below cover the handful of genuinely
//! fallible operations, all of which involve parsing caller-supplied
//! strings.
//!
//! # Usage
//!
//! ```rust
//! use smath_core::{Error, Result};
//!
//! fn parse_channel(input: &str) -> Result<u8> {
//!     u8::from_str_radix(input, 16).map_err(|_| Error::InvalidHexColor {
//!         input: input.to_string(),
//!     })
//! }
//!
//! assert!(parse_channel("zz").is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the smath crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A hex color string was not `#RRGGBB` / `#RRGGBBAA` shaped.
    ///
    /// Returned when the string (with or without a leading `#`) has the
    /// wrong length or contains non-hex digits.
    #[error("invalid hex color string: {input:?}")]
    InvalidHexColor {
        /// The string that failed to parse.
        input: String,
    },
}
