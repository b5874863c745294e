//! Plane in `ax + by + cz + d = 0` form.
//!
//! [`Plane`] is a thin collaborator of the core trio; its main consumer is
//! [`Matrix::reflection`](crate::Matrix::reflection), which requires a
//! normalized plane.

use crate::Vector3;

/// A plane described by a normal and a signed offset `d`.
///
/// After [`normalize`](Self::normalize) the normal has unit length and `d`
/// is scaled consistently, so [`signed_distance_to`](Self::signed_distance_to)
/// returns true Euclidean distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Plane normal (a, b, c).
    pub normal: Vector3,
    /// Signed offset along the normal.
    pub d: f32,
}

impl Plane {
    /// Creates a plane from a normal and offset.
    #[inline]
    pub const fn new(normal: Vector3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Creates a plane from the four equation coefficients.
    #[inline]
    pub const fn from_components(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self::new(Vector3::new(a, b, c), d)
    }

    /// Returns the plane scaled so the normal has unit length.
    ///
    /// A zero-length normal yields a scale factor of 0 (all components
    /// zeroed) rather than a divide-by-zero fault.
    ///
    /// # Example
    ///
    /// ```rust
    /// use smath_geom::Plane;
    ///
    /// let p = Plane::from_components(0.0, 3.0, 0.0, 6.0).normalize();
    /// assert_eq!(p.normal.y, 1.0);
    /// assert_eq!(p.d, 2.0);
    /// ```
    #[inline]
    pub fn normalize(self) -> Self {
        let norm = self.normal.length();
        let magnitude = if norm != 0.0 { 1.0 / norm } else { 0.0 };
        Self::new(self.normal * magnitude, self.d * magnitude)
    }

    /// In-place sibling of [`normalize`](Self::normalize).
    #[inline]
    pub fn normalize_into(self, out: &mut Self) {
        *out = self.normalize();
    }

    /// Signed distance from a point to the plane.
    ///
    /// Positive on the side the normal points toward. Only meaningful for
    /// a normalized plane.
    #[inline]
    pub fn signed_distance_to(self, point: Vector3) -> f32 {
        self.normal.dot(point) + self.d
    }
}
