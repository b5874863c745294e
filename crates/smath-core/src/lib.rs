//! # smath-core
//!
//! Core utilities shared by the smath scene-graph math crates.
//!
//! This crate provides the pieces every other smath crate leans on:
//!
//! - [`scalar`] - single-float helpers (clamp, lerp, repeat, hex formatting)
//! - [`version`] - the process-wide monotonic update counter used to stamp
//!   matrix versions
//! - [`error`] - the shared error type for the few fallible operations
//!
//! # Design
//!
//! Geometric degeneracies (zero vectors, singular matrices, parallel axes)
//! are **not** errors anywhere in smath: each one resolves to a documented
//! finite fallback so per-frame callers never have to unwind. The only
//! fallible surface is string parsing (hex colors), which returns
//! [`Result`].
//!
//! # Crate Structure
//!
//! This crate is the foundation of smath and has no internal dependencies:
//!
//! ```text
//! smath-core (this crate)
//!    ^
//!    |
//!    +-- smath-geom (vectors, quaternions, matrices, planes)
//!    +-- smath-color (Color3/Color4, hex conversion)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod scalar;
pub mod version;

pub use error::*;
pub use version::UpdateCounter;
