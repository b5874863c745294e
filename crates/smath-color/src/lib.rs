//! # smath-color
//!
//! RGB and RGBA color values with per-channel arithmetic, interpolation,
//! and hex string formatting/parsing.
//!
//! Channels are `f32` in nominal `[0, 1]` range. Arithmetic does not clamp;
//! call [`Color3::clamp01`] / [`Color4::clamp01`] explicitly before
//! quantizing. Hex parsing is the one fallible operation in the library and
//! returns [`smath_core::Result`].
//!
//! # Usage
//!
//! ```rust
//! use smath_color::{Color3, Color4};
//!
//! let warm = Color3::new(1.0, 0.5, 0.25);
//! assert_eq!(warm.to_hex_string(), "#FF8040");
//!
//! let parsed = Color3::from_hex_string("#FF8040").unwrap();
//! assert!(parsed.equals_with_epsilon(warm, 1.0 / 255.0));
//!
//! let faded = Color4::from_color3(warm, 0.5);
//! assert_eq!(faded.to_hex_string(), "#FF804080");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color3;
mod color4;

pub use color3::Color3;
pub use color4::Color4;
