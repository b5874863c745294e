//! 3D vector type for points and free vectors.
//!
//! [`Vector3`] is the leaf type of the geometry trio: it accepts a
//! [`Quaternion`] or [`Matrix`] as an opaque transform argument but never
//! constructs one.
//!
//! # Convention
//!
//! Axes are **left-handed**: [`Vector3::FORWARD`] is `(0, 0, 1)`,
//! [`Vector3::UP`] is `(0, 1, 0)`, [`Vector3::RIGHT`] is `(1, 0, 0)`.
//!
//! # Usage
//!
//! ```rust
//! use smath_geom::Vector3;
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::UP;
//! let n = a.cross(b).normalize();
//! # let _ = n;
//! ```

use crate::{Matrix, Quaternion};
use smath_core::scalar;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

/// A 3-component vector or point.
///
/// Any real triple is valid, including the zero vector; there are no
/// invariants to maintain. Operations that would divide by a zero length
/// instead return their input unchanged (see [`normalize`](Self::normalize)).
///
/// # Example
///
/// ```rust
/// use smath_geom::Vector3;
///
/// let v = Vector3::new(3.0, 0.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v[2], 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vector3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vector3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Up axis (0, 1, 0).
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    /// Down axis (0, -1, 0).
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);

    /// Forward axis (0, 0, 1). Left-handed convention.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    /// Backward axis (0, 0, -1).
    pub const BACKWARD: Self = Self::new(0.0, 0.0, -1.0);

    /// Right axis (1, 0, 0).
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);

    /// Left axis (-1, 0, 0).
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean length (magnitude).
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length; avoids the square root for comparison use-cases.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (other - self).length_squared()
    }

    /// Normalizes the vector to unit length.
    ///
    /// When the length is exactly `0` or exactly `1` the input is returned
    /// unchanged. This is a degenerate-case shortcut (no divide-by-zero
    /// fault, no wasted divide on already-unit input), not a general
    /// epsilon guard.
    ///
    /// # Example
    ///
    /// ```rust
    /// use smath_geom::Vector3;
    ///
    /// assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
    /// assert_eq!(Vector3::new(0.0, 3.0, 4.0).normalize().length(), 1.0);
    /// ```
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 || len == 1.0 {
            self
        } else {
            self * (1.0 / len)
        }
    }

    /// In-place sibling of [`normalize`](Self::normalize).
    ///
    /// `out` may alias the input (`v.normalize_into(&mut v)` is fine).
    #[inline]
    pub fn normalize_into(self, out: &mut Self) {
        *out = self.normalize();
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, right-handed formula.
    ///
    /// Not commutative: `a.cross(b) == -b.cross(a)`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// In-place sibling of [`cross`](Self::cross); `out` may alias either input.
    #[inline]
    pub fn cross_into(self, other: Self, out: &mut Self) {
        *out = self.cross(other);
    }

    /// Rotates the vector by a quaternion.
    ///
    /// Applies the sandwich product `q * (v, 0) * q⁻¹` expanded
    /// algebraically; the quaternion is assumed unit (its conjugate stands
    /// in for the inverse).
    ///
    /// # Example
    ///
    /// ```rust
    /// use smath_geom::{Quaternion, Vector3};
    ///
    /// let yaw90 = Quaternion::from_euler_degrees(0.0, 90.0, 0.0);
    /// let v = Vector3::FORWARD.rotate(yaw90);
    /// assert!((v.x - 1.0).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn rotate(self, q: Quaternion) -> Self {
        let Self { x, y, z } = self;

        // q * (v, 0)
        let ix = q.w * x + q.y * z - q.z * y;
        let iy = q.w * y + q.z * x - q.x * z;
        let iz = q.w * z + q.x * y - q.y * x;
        let iw = -q.x * x - q.y * y - q.z * z;

        // (q * v) * conjugate(q)
        Self::new(
            ix * q.w + iw * -q.x + iy * -q.z - iz * -q.y,
            iy * q.w + iw * -q.y + iz * -q.x - ix * -q.z,
            iz * q.w + iw * -q.z + ix * -q.y - iy * -q.x,
        )
    }

    /// In-place sibling of [`rotate`](Self::rotate).
    #[inline]
    pub fn rotate_into(self, q: Quaternion, out: &mut Self) {
        *out = self.rotate(q);
    }

    /// Transforms the vector as a homogeneous **point** `(x, y, z, 1)`.
    ///
    /// Applies the full matrix including translation, then divides by the
    /// computed `w` (perspective divide).
    #[inline]
    pub fn transform_coordinates(self, matrix: &Matrix) -> Self {
        let m = matrix.m();
        let Self { x, y, z } = self;
        let rx = x * m[0] + y * m[4] + z * m[8] + m[12];
        let ry = x * m[1] + y * m[5] + z * m[9] + m[13];
        let rz = x * m[2] + y * m[6] + z * m[10] + m[14];
        let rw = 1.0 / (x * m[3] + y * m[7] + z * m[11] + m[15]);
        Self::new(rx * rw, ry * rw, rz * rw)
    }

    /// In-place sibling of [`transform_coordinates`](Self::transform_coordinates).
    #[inline]
    pub fn transform_coordinates_into(self, matrix: &Matrix, out: &mut Self) {
        *out = self.transform_coordinates(matrix);
    }

    /// Transforms the vector as a **direction**.
    ///
    /// Same multiply as [`transform_coordinates`](Self::transform_coordinates)
    /// but the translation row is omitted and no perspective divide is
    /// performed. Use this for normals and other free vectors.
    #[inline]
    pub fn transform_normal(self, matrix: &Matrix) -> Self {
        let m = matrix.m();
        let Self { x, y, z } = self;
        Self::new(
            x * m[0] + y * m[4] + z * m[8],
            x * m[1] + y * m[5] + z * m[9],
            x * m[2] + y * m[6] + z * m[10],
        )
    }

    /// In-place sibling of [`transform_normal`](Self::transform_normal).
    #[inline]
    pub fn transform_normal_into(self, matrix: &Matrix, out: &mut Self) {
        *out = self.transform_normal(matrix);
    }

    /// Signed angle in radians between `self` and `other`.
    ///
    /// Both inputs are normalized internally and their dot product is
    /// clamped to `[-1, 1]` before `acos`, so floating round-off cannot
    /// produce `NaN`. The sign comes from comparing the cross product
    /// against `normal`: positive when they align, negative otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use smath_geom::Vector3;
    ///
    /// // cross(RIGHT, FORWARD) points down, against UP, so the angle is negative.
    /// let angle = Vector3::RIGHT.angle_between(Vector3::FORWARD, Vector3::UP);
    /// assert!((angle + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn angle_between(self, other: Self, normal: Self) -> f32 {
        let v0 = self.normalize();
        let v1 = other.normalize();
        let dot = scalar::clamp(v0.dot(v1), -1.0, 1.0);
        let angle = dot.acos();
        if v0.cross(v1).dot(normal) > 0.0 {
            angle
        } else {
            -angle
        }
    }

    /// Linear interpolation between two vectors.
    ///
    /// The amount is not clamped; values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(self, other: Self, amount: f32) -> Self {
        Self::new(
            scalar::lerp(self.x, other.x, amount),
            scalar::lerp(self.y, other.y, amount),
            scalar::lerp(self.z, other.z, amount),
        )
    }

    /// In-place sibling of [`lerp`](Self::lerp).
    #[inline]
    pub fn lerp_into(self, other: Self, amount: f32, out: &mut Self) {
        *out = self.lerp(other, amount);
    }

    /// Catmull-Rom spline through four control points.
    ///
    /// Pure polynomial evaluation; `amount` is not clamped, so
    /// extrapolation outside `[0, 1]` is allowed.
    pub fn catmull_rom(p1: Self, p2: Self, p3: Self, p4: Self, amount: f32) -> Self {
        let squared = amount * amount;
        let cubed = amount * squared;

        let blend = |v1: f32, v2: f32, v3: f32, v4: f32| {
            0.5 * (2.0 * v2
                + (-v1 + v3) * amount
                + (2.0 * v1 - 5.0 * v2 + 4.0 * v3 - v4) * squared
                + (-v1 + 3.0 * v2 - 3.0 * v3 + v4) * cubed)
        };

        Self::new(
            blend(p1.x, p2.x, p3.x, p4.x),
            blend(p1.y, p2.y, p3.y, p4.y),
            blend(p1.z, p2.z, p3.z, p4.z),
        )
    }

    /// Cubic Hermite blend between two points with tangents.
    ///
    /// `amount` is not clamped.
    pub fn hermite(value1: Self, tangent1: Self, value2: Self, tangent2: Self, amount: f32) -> Self {
        let squared = amount * amount;
        let cubed = amount * squared;
        let part1 = 2.0 * cubed - 3.0 * squared + 1.0;
        let part2 = -2.0 * cubed + 3.0 * squared;
        let part3 = cubed - 2.0 * squared + amount;
        let part4 = cubed - squared;

        Self::new(
            value1.x * part1 + value2.x * part2 + tangent1.x * part3 + tangent2.x * part4,
            value1.y * part1 + value2.y * part2 + tangent1.y * part3 + tangent2.y * part4,
            value1.z * part1 + value2.z * part2 + tangent1.z * part3 + tangent2.z * part4,
        )
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Returns true when every component is within `epsilon` of `other`'s.
    #[inline]
    pub fn equals_with_epsilon(self, other: Self, epsilon: f32) -> bool {
        scalar::with_epsilon(self.x, other.x, epsilon)
            && scalar::with_epsilon(self.y, other.y, epsilon)
            && scalar::with_epsilon(self.z, other.z, epsilon)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", i),
        }
    }
}

impl Add for Vector3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Component-wise product
impl Mul for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

// Component-wise quotient
impl Div for Vector3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(v: Vector3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vector3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vector3> for glam::Vec3 {
    #[inline]
    fn from(v: Vector3) -> glam::Vec3 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length() {
        assert_eq!(Vector3::new(3.0, 0.0, 4.0).length(), 5.0);
        assert_eq!(Vector3::new(1.0, 2.0, 2.0).length_squared(), 9.0);
    }

    #[test]
    fn test_normalize_degenerate_shortcuts() {
        // Zero and unit lengths pass through untouched.
        assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
        assert_eq!(Vector3::UP.normalize(), Vector3::UP);

        let v = Vector3::new(0.0, 3.0, 4.0).normalize();
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_into_aliasing() {
        let mut v = Vector3::new(10.0, 0.0, 0.0);
        let src = v;
        src.normalize_into(&mut v);
        assert_eq!(v, Vector3::RIGHT);
    }

    #[test]
    fn test_normalize_idempotent() {
        let v = Vector3::new(1.0, -2.0, 0.5).normalize();
        assert!(v.normalize().equals_with_epsilon(v, 1e-6));
    }

    #[test]
    fn test_cross_anticommutative() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);
        assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn test_cross_handedness() {
        assert_eq!(Vector3::RIGHT.cross(Vector3::UP), Vector3::FORWARD);
    }

    #[test]
    fn test_dot() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_angle_between_sign() {
        let a = Vector3::RIGHT;
        let b = Vector3::FORWARD;
        let up = Vector3::UP;

        let angle = a.angle_between(b, up);
        assert_relative_eq!(angle.abs(), std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
        // Swapping the operands flips the sign.
        assert_relative_eq!(b.angle_between(a, up), -angle, epsilon = 1e-6);
    }

    #[test]
    fn test_angle_between_no_nan_on_parallel() {
        let a = Vector3::new(0.3, 0.4, 0.5);
        let angle = a.angle_between(a * 2.0, Vector3::UP);
        assert!(angle.is_finite());
        assert_relative_eq!(angle.abs(), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_lerp_unclamped() {
        let a = Vector3::ZERO;
        let b = Vector3::ONE;
        assert_eq!(a.lerp(b, 0.5), Vector3::splat(0.5));
        assert_eq!(a.lerp(b, 2.0), Vector3::splat(2.0));
    }

    #[test]
    fn test_catmull_rom_passes_through_inner_points() {
        let p1 = Vector3::new(-1.0, 0.0, 0.0);
        let p2 = Vector3::new(0.0, 1.0, 0.0);
        let p3 = Vector3::new(1.0, 0.0, 0.0);
        let p4 = Vector3::new(2.0, -1.0, 0.0);

        let at0 = Vector3::catmull_rom(p1, p2, p3, p4, 0.0);
        let at1 = Vector3::catmull_rom(p1, p2, p3, p4, 1.0);
        assert!(at0.equals_with_epsilon(p2, 1e-6));
        assert!(at1.equals_with_epsilon(p3, 1e-6));
    }

    #[test]
    fn test_hermite_endpoints() {
        let v1 = Vector3::new(0.0, 0.0, 0.0);
        let v2 = Vector3::new(1.0, 2.0, 3.0);
        let t = Vector3::new(0.5, 0.5, 0.5);

        assert!(Vector3::hermite(v1, t, v2, t, 0.0).equals_with_epsilon(v1, 1e-6));
        assert!(Vector3::hermite(v1, t, v2, t, 1.0).equals_with_epsilon(v2, 1e-6));
    }

    #[test]
    fn test_operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_named_constants() {
        assert_eq!(Vector3::FORWARD, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(Vector3::UP + Vector3::DOWN, Vector3::ZERO);
        assert_eq!(Vector3::RIGHT + Vector3::LEFT, Vector3::ZERO);
    }

    #[test]
    fn test_glam_roundtrip() {
        let v = Vector3::new(1.5, -2.5, 3.5);
        assert_eq!(Vector3::from_glam(v.to_glam()), v);
    }
}
