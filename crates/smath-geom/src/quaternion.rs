//! Quaternion rotation type.
//!
//! [`Quaternion`] represents a rotation when its norm is 1. Normalization
//! is **not** enforced on every operation: composition and slerp edge
//! cases can drift, and callers are expected to call
//! [`normalize`](Quaternion::normalize) explicitly afterwards. A zero
//! quaternion is a valid value, just meaningless as a rotation.
//!
//! # Euler convention
//!
//! Euler angles are degrees in `(x = pitch, y = yaw, z = roll)` order;
//! [`from_euler_degrees`](Quaternion::from_euler_degrees) maps the triple
//! to `(yaw = y, pitch = x, roll = z)` radians before delegating to
//! [`rotation_yaw_pitch_roll`](Quaternion::rotation_yaw_pitch_roll). That
//! mapping encodes the library's axis-naming convention.
//!
//! # Usage
//!
//! ```rust
//! use smath_geom::{Quaternion, Vector3};
//!
//! let q = Quaternion::from_euler_degrees(0.0, 90.0, 0.0);
//! let v = Vector3::FORWARD.rotate(q);
//! assert!(v.equals_with_epsilon(Vector3::RIGHT, 1e-6));
//! ```

use crate::{Matrix, Vector3};
use smath_core::scalar::{self, DEG2RAD, RAD2DEG};

/// Threshold above which slerp falls back to linear interpolation of
/// coefficients: when `|dot|` exceeds it, `sin θ` is too close to zero to
/// divide by safely.
const SLERP_LINEAR_THRESHOLD: f32 = 0.999999;

/// Squared-length / dot threshold below which two directions are treated
/// as parallel (or anti-parallel) in
/// [`Quaternion::from_to_rotation`].
const PARALLEL_THRESHOLD: f32 = 0.0001;

/// Gimbal-singularity threshold for Euler extraction, as a fraction of the
/// quaternion's squared length.
const GIMBAL_THRESHOLD: f32 = 0.4995;

/// A rotation stored as four components `(x, y, z, w)`.
///
/// The default value is the identity rotation `(0, 0, 0, 1)`.
///
/// # Example
///
/// ```rust
/// use smath_geom::Quaternion;
///
/// assert_eq!(Quaternion::default(), Quaternion::IDENTITY);
/// assert_eq!(Quaternion::from_euler_degrees(0.0, 0.0, 0.0), Quaternion::IDENTITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Quaternion {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
    /// W (scalar) component.
    pub w: f32,
}

impl Quaternion {
    /// The identity rotation (0, 0, 0, 1).
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates from an `[x, y, z, w]` array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an `[x, y, z, w]` array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Builds a rotation from yaw (about Y), pitch (about X), and roll
    /// (about Z), all in radians.
    pub fn rotation_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        let half_roll = roll * 0.5;
        let half_pitch = pitch * 0.5;
        let half_yaw = yaw * 0.5;

        let (sin_roll, cos_roll) = half_roll.sin_cos();
        let (sin_pitch, cos_pitch) = half_pitch.sin_cos();
        let (sin_yaw, cos_yaw) = half_yaw.sin_cos();

        Self::new(
            cos_yaw * sin_pitch * cos_roll + sin_yaw * cos_pitch * sin_roll,
            sin_yaw * cos_pitch * cos_roll - cos_yaw * sin_pitch * sin_roll,
            cos_yaw * cos_pitch * sin_roll - sin_yaw * sin_pitch * cos_roll,
            cos_yaw * cos_pitch * cos_roll + sin_yaw * sin_pitch * sin_roll,
        )
    }

    /// In-place sibling of [`rotation_yaw_pitch_roll`](Self::rotation_yaw_pitch_roll).
    #[inline]
    pub fn rotation_yaw_pitch_roll_into(yaw: f32, pitch: f32, roll: f32, out: &mut Self) {
        *out = Self::rotation_yaw_pitch_roll(yaw, pitch, roll);
    }

    /// Builds a rotation from Euler angles in degrees.
    ///
    /// The caller's `(x, y, z)` triple maps to `(yaw = y, pitch = x,
    /// roll = z)` in radians; this is the axis-naming convention of the whole
    /// library.
    ///
    /// # Example
    ///
    /// ```rust
    /// use smath_geom::Quaternion;
    ///
    /// let q = Quaternion::from_euler_degrees(0.0, 0.0, 0.0);
    /// assert_eq!(q, Quaternion::IDENTITY);
    /// ```
    #[inline]
    pub fn from_euler_degrees(x: f32, y: f32, z: f32) -> Self {
        Self::rotation_yaw_pitch_roll(y * DEG2RAD, x * DEG2RAD, z * DEG2RAD)
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Norm of the quaternion.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared norm.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Normalizes to unit length.
    ///
    /// Mirrors [`Vector3::normalize`]: a length of exactly `0` or `1`
    /// returns the input unchanged.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 || len == 1.0 {
            self
        } else {
            let inv = 1.0 / len;
            Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
        }
    }

    /// In-place sibling of [`normalize`](Self::normalize).
    #[inline]
    pub fn normalize_into(self, out: &mut Self) {
        *out = self.normalize();
    }

    /// The conjugate `(-x, -y, -z, w)`; the inverse for unit quaternions.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Angular distance between two rotations, in degrees.
    ///
    /// `2 * acos(min(|dot|, 1))`: the absolute value collapses the
    /// double-cover sign ambiguity so the result is always the shorter
    /// arc, and the clamp keeps round-off from feeding `acos` a value
    /// outside its domain.
    #[inline]
    pub fn angle_between_degrees(self, other: Self) -> f32 {
        let dot = self.dot(other);
        2.0 * dot.abs().min(1.0).acos() * RAD2DEG
    }

    /// Spherical linear interpolation from `self` to `right`.
    ///
    /// Three regimes, in order:
    ///
    /// 1. a negative dot product flips the sign of the `right`
    ///    contribution so interpolation takes the short path;
    /// 2. `|dot| > 0.999999` falls back to linear interpolation of the
    ///    coefficients, avoiding a division by a near-zero `sin`;
    /// 3. otherwise the standard `sin((1-t)θ)/sin θ`, `sin(tθ)/sin θ`
    ///    weighted sum.
    ///
    /// # Example
    ///
    /// ```rust
    /// use smath_geom::Quaternion;
    ///
    /// let a = Quaternion::from_euler_degrees(0.0, 0.0, 0.0);
    /// let b = Quaternion::from_euler_degrees(0.0, 90.0, 0.0);
    /// assert!(a.slerp(b, 0.0).dot(a).abs() > 1.0 - 1e-6);
    /// assert!(a.slerp(b, 1.0).dot(b).abs() > 1.0 - 1e-6);
    /// ```
    pub fn slerp(self, right: Self, amount: f32) -> Self {
        let mut out = Self::IDENTITY;
        self.slerp_into(right, amount, &mut out);
        out
    }

    /// In-place sibling of [`slerp`](Self::slerp); `out` may alias either input.
    pub fn slerp_into(self, right: Self, amount: f32, out: &mut Self) {
        let mut dot = self.dot(right);
        let flipped = dot < 0.0;
        if flipped {
            dot = -dot;
        }

        let (left_weight, right_weight) = if dot > SLERP_LINEAR_THRESHOLD {
            let w = if flipped { -amount } else { amount };
            (1.0 - amount, w)
        } else {
            let theta = dot.acos();
            let inv_sin = 1.0 / theta.sin();
            let lw = ((1.0 - amount) * theta).sin() * inv_sin;
            let rw = (amount * theta).sin() * inv_sin;
            (lw, if flipped { -rw } else { rw })
        };

        *out = Self::new(
            left_weight * self.x + right_weight * right.x,
            left_weight * self.y + right_weight * right.y,
            left_weight * self.z + right_weight * right.z,
            left_weight * self.w + right_weight * right.w,
        );
    }

    /// Rotates from `self` toward `to` by at most `max_degrees_delta`.
    ///
    /// Returns `to` unchanged when the angular distance is exactly zero,
    /// avoiding a wasted slerp (and a potential division by zero below).
    pub fn rotate_towards(self, to: Self, max_degrees_delta: f32) -> Self {
        let angle = self.angle_between_degrees(to);
        if angle == 0.0 {
            return to;
        }
        self.slerp(to, (max_degrees_delta / angle).min(1.0))
    }

    /// Builds the rotation that orients [`Vector3::FORWARD`] along
    /// `forward` with `up` as the up reference.
    ///
    /// An orthonormal basis is constructed first
    /// (`right = normalize(cross(up, forward))`, then the up axis is
    /// recomputed as `cross(forward, right)`), and converted to a
    /// quaternion with the trace-based branch-on-largest-diagonal
    /// algorithm.
    pub fn look_rotation(forward: Vector3, up: Vector3) -> Self {
        let mut out = Self::IDENTITY;
        Self::look_rotation_into(forward, up, &mut out);
        out
    }

    /// In-place sibling of [`look_rotation`](Self::look_rotation).
    pub fn look_rotation_into(forward: Vector3, up: Vector3, out: &mut Self) {
        let fwd = forward.normalize();
        let right = up.cross(fwd).normalize();
        let up = fwd.cross(right);

        let m00 = right.x;
        let m01 = right.y;
        let m02 = right.z;
        let m10 = up.x;
        let m11 = up.y;
        let m12 = up.z;
        let m20 = fwd.x;
        let m21 = fwd.y;
        let m22 = fwd.z;

        let trace = m00 + m11 + m22;
        if trace > 0.0 {
            let num = (trace + 1.0).sqrt();
            let half = 0.5 / num;
            *out = Self::new(
                (m12 - m21) * half,
                (m20 - m02) * half,
                (m01 - m10) * half,
                num * 0.5,
            );
        } else if m00 >= m11 && m00 >= m22 {
            let num = (1.0 + m00 - m11 - m22).sqrt();
            let half = 0.5 / num;
            *out = Self::new(
                0.5 * num,
                (m01 + m10) * half,
                (m02 + m20) * half,
                (m12 - m21) * half,
            );
        } else if m11 > m22 {
            let num = (1.0 + m11 - m00 - m22).sqrt();
            let half = 0.5 / num;
            *out = Self::new(
                (m10 + m01) * half,
                0.5 * num,
                (m21 + m12) * half,
                (m20 - m02) * half,
            );
        } else {
            let num = (1.0 + m22 - m00 - m11).sqrt();
            let half = 0.5 / num;
            *out = Self::new(
                (m20 + m02) * half,
                (m21 + m12) * half,
                0.5 * num,
                (m01 - m10) * half,
            );
        }
    }

    /// Computes the rotation aligning `from` with `to`.
    ///
    /// Non-degenerate case: `(cross, √(|from|²·|to|²) + dot)`, normalized.
    /// When the cross product's squared length drops below `0.0001` the
    /// vectors are parallel or anti-parallel: if the `w` term is also
    /// below `0.0001` in magnitude the rotation is a half turn and is
    /// built from the supplied `up` axis; otherwise the vectors already
    /// align and the identity is returned.
    pub fn from_to_rotation(from: Vector3, to: Vector3, up: Vector3) -> Self {
        let cross = from.cross(to);
        let w = (from.length_squared() * to.length_squared()).sqrt() + from.dot(to);

        if cross.length_squared() < PARALLEL_THRESHOLD {
            if w.abs() < PARALLEL_THRESHOLD {
                // Anti-parallel: rotate 180 degrees around the up axis.
                Self::new(up.x, up.y, up.z, 0.0).normalize()
            } else {
                Self::IDENTITY
            }
        } else {
            Self::new(cross.x, cross.y, cross.z, w).normalize()
        }
    }

    /// Extracts Euler angles in degrees, each wrapped into `[0, 360)`.
    ///
    /// The gimbal test compares `x*w - y*z` against `±0.4995 * unit`,
    /// where `unit` is the squared length (a normalization-correction
    /// factor). Inside the threshold the closed-form `asin`/`atan2`
    /// triple applies; at either pole the simplified two-argument `atan2`
    /// forms take over. Wrap-around uses the floor-based
    /// [`scalar::repeat`], which is correct for negative angles.
    ///
    /// # Example
    ///
    /// ```rust
    /// use smath_geom::{Quaternion, Vector3};
    ///
    /// let angles = Quaternion::from_euler_degrees(45.0, 60.0, 90.0).euler_angles();
    /// assert!(angles.equals_with_epsilon(Vector3::new(45.0, 60.0, 90.0), 1e-2));
    /// ```
    pub fn euler_angles(self) -> Vector3 {
        let Self { x, y, z, w } = self;
        let unit = x * x + y * y + z * z + w * w;
        let test = x * w - y * z;

        let (rx, ry, rz) = if test > GIMBAL_THRESHOLD * unit {
            // North-pole singularity.
            (core::f32::consts::FRAC_PI_2, 2.0 * y.atan2(x), 0.0)
        } else if test < -GIMBAL_THRESHOLD * unit {
            // South-pole singularity.
            (-core::f32::consts::FRAC_PI_2, -2.0 * y.atan2(x), 0.0)
        } else {
            (
                (2.0 * (w * x - y * z)).asin(),
                (2.0 * w * y + 2.0 * z * x).atan2(1.0 - 2.0 * (x * x + y * y)),
                (2.0 * w * z + 2.0 * x * y).atan2(1.0 - 2.0 * (z * z + x * x)),
            )
        };

        Vector3::new(
            scalar::repeat(rx * RAD2DEG, 360.0),
            scalar::repeat(ry * RAD2DEG, 360.0),
            scalar::repeat(rz * RAD2DEG, 360.0),
        )
    }

    /// Converts the rotation part of a matrix to a quaternion.
    ///
    /// Trace-based four-branch algorithm; the matrix is assumed to contain
    /// a pure rotation in its upper-left 3x3 block (scale already divided
    /// out, as [`Matrix::decompose`] does).
    pub fn from_rotation_matrix(matrix: &Matrix) -> Self {
        let mut out = Self::IDENTITY;
        Self::from_rotation_matrix_into(matrix, &mut out);
        out
    }

    /// In-place sibling of [`from_rotation_matrix`](Self::from_rotation_matrix).
    pub fn from_rotation_matrix_into(matrix: &Matrix, out: &mut Self) {
        let data = matrix.m();
        let (m11, m12, m13) = (data[0], data[4], data[8]);
        let (m21, m22, m23) = (data[1], data[5], data[9]);
        let (m31, m32, m33) = (data[2], data[6], data[10]);

        let trace = m11 + m22 + m33;
        if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            *out = Self::new(
                (m32 - m23) * s,
                (m13 - m31) * s,
                (m21 - m12) * s,
                0.25 / s,
            );
        } else if m11 > m22 && m11 > m33 {
            let s = 2.0 * (1.0 + m11 - m22 - m33).sqrt();
            *out = Self::new(
                0.25 * s,
                (m12 + m21) / s,
                (m13 + m31) / s,
                (m32 - m23) / s,
            );
        } else if m22 > m33 {
            let s = 2.0 * (1.0 + m22 - m11 - m33).sqrt();
            *out = Self::new(
                (m12 + m21) / s,
                0.25 * s,
                (m23 + m32) / s,
                (m13 - m31) / s,
            );
        } else {
            let s = 2.0 * (1.0 + m33 - m11 - m22).sqrt();
            *out = Self::new(
                (m13 + m31) / s,
                (m23 + m32) / s,
                0.25 * s,
                (m21 - m12) / s,
            );
        }
    }

    /// Hamilton product `self * other`.
    ///
    /// Order matters: `a.multiply(b)` is the rotation that applies `b`
    /// first and then `a`, consistent with the sandwich-product
    /// convention [`Vector3::rotate`] uses.
    #[inline]
    pub fn multiply(self, other: Self) -> Self {
        Self::new(
            self.x * other.w + self.y * other.z - self.z * other.y + self.w * other.x,
            -self.x * other.z + self.y * other.w + self.z * other.x + self.w * other.y,
            self.x * other.y - self.y * other.x + self.z * other.w + self.w * other.z,
            -self.x * other.x - self.y * other.y - self.z * other.z + self.w * other.w,
        )
    }

    /// In-place sibling of [`multiply`](Self::multiply); `out` may alias
    /// either input.
    #[inline]
    pub fn multiply_into(self, other: Self, out: &mut Self) {
        *out = self.multiply(other);
    }

    /// Builds a rotation of `degrees` around `axis`.
    ///
    /// A zero-length axis yields the identity rotation rather than a NaN
    /// from the normalization divide.
    ///
    /// # Example
    ///
    /// ```rust
    /// use smath_geom::{Quaternion, Vector3};
    ///
    /// assert_eq!(Quaternion::angle_axis(30.0, Vector3::ZERO), Quaternion::IDENTITY);
    /// ```
    pub fn angle_axis(degrees: f32, axis: Vector3) -> Self {
        if axis.length_squared() == 0.0 {
            return Self::IDENTITY;
        }
        let half = degrees * DEG2RAD * 0.5;
        let sin = half.sin();
        let a = axis.normalize();
        Self::new(a.x * sin, a.y * sin, a.z * sin, half.cos())
    }

    /// Converts to glam Quat.
    #[inline]
    pub fn to_glam(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam Quat.
    #[inline]
    pub fn from_glam(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl Default for Quaternion {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<glam::Quat> for Quaternion {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::from_glam(q)
    }
}

impl From<Quaternion> for glam::Quat {
    #[inline]
    fn from(q: Quaternion) -> glam::Quat {
        q.to_glam()
    }
}
