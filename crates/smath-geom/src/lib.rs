//! # smath-geom
//!
//! Geometry primitives for real-time scene-graph and rendering consumers.
//!
//! This crate provides the coupled trio at the heart of smath, plus the
//! thin types they collaborate with:
//!
//! - [`Vector3`] - 3-component free vector/point
//! - [`Quaternion`] - rotation representation with Euler/axis-angle/
//!   look-rotation conversions
//! - [`Matrix`] - 4x4 affine/projective transform with compose/decompose
//!   and camera/projection constructors
//! - [`Plane`] - `ax + by + cz + d = 0`, consumed by [`Matrix::reflection`]
//! - [`Vector2`] - trivial 2-component storage
//!
//! # Conventions
//!
//! - **Left-handed** axes with `Vector3::FORWARD = (0, 0, 1)` and
//!   `Vector3::UP = (0, 1, 0)`.
//! - Matrices are stored **row-major** with translation in elements
//!   12-14; points transform as row vectors (`p * M`), so
//!   `compose` builds `scale * rotation` and then injects translation.
//! - Euler angles are degrees in `(x = pitch, y = yaw, z = roll)` order.
//!
//! # Degenerate input
//!
//! No operation panics or returns an error for degenerate geometry.
//! Zero-length vectors, singular matrices, parallel axes, and zero
//! rotation axes each have a documented finite fallback; the only
//! caller-visible signal is the `bool` returned by [`Matrix::decompose`].
//! This keeps every operation safe to call from a per-frame loop.
//!
//! # In-place variants
//!
//! Every pure operation that produces a new value has a `*_into` sibling
//! writing into a caller-owned destination. The `*_into` forms allocate
//! nothing and tolerate the destination aliasing an input.
//!
//! # Usage
//!
//! ```rust
//! use smath_geom::{Matrix, Quaternion, Vector3};
//!
//! let rotation = Quaternion::from_euler_degrees(0.0, 90.0, 0.0);
//! let spun = Vector3::FORWARD.rotate(rotation);
//!
//! let transform = Matrix::compose(Vector3::ONE, rotation, Vector3::new(0.0, 1.0, 0.0));
//! let world = spun.transform_coordinates(&transform);
//! # let _ = world;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod matrix;
mod plane;
mod quaternion;
mod vector2;
mod vector3;

pub use matrix::*;
pub use plane::*;
pub use quaternion::*;
pub use vector2::*;
pub use vector3::*;

/// Re-export glam types for direct use at interop seams.
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Quat as GlamQuat, Vec3 as GlamVec3};
}
