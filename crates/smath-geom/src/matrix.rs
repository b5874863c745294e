//! 4x4 transform matrix.
//!
//! [`Matrix`] is the general affine/projective transform of the library:
//! composition from scale/rotation/translation, inversion, camera and
//! projection constructors, and decomposition back into components.
//!
//! # Storage and convention
//!
//! Sixteen floats in **row-major** order; translation occupies elements
//! 12-14. Points transform as row vectors (`p * M`), so composing
//! `scale * rotation` applies scale first; see [`Matrix::compose`].
//!
//! # Cached metadata
//!
//! Alongside the elements, a matrix carries two lazily recomputed boolean
//! caches (`is_identity`, `is_identity_3x2`), each with its own validity
//! bit, and a `u64` version stamp (`update_flag`) drawn from the
//! process-wide [`UpdateCounter`]. Every mutation produces a fresh stamp,
//! so downstream consumers can skip re-uploading a matrix whose flag has
//! not changed. Blind mutations invalidate both caches; constructive
//! operations that know the answer analytically set them directly.
//!
//! # Degenerate input
//!
//! Inverting a singular matrix copies the source unchanged instead of
//! producing infinities; see [`Matrix::invert_into`]. No matrix operation
//! panics on degenerate input.

use crate::{Plane, Quaternion, Vector3};
use smath_core::UpdateCounter;

/// A 4x4 row-major transform matrix with cached identity flags and a
/// monotonic version stamp.
///
/// # Example
///
/// ```rust
/// use smath_geom::{Matrix, Vector3};
///
/// let m = Matrix::translation(1.0, 2.0, 3.0);
/// let p = Vector3::ZERO.transform_coordinates(&m);
/// assert_eq!(p, Vector3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Matrix {
    m: [f32; 16],
    update_flag: u64,
    is_identity: bool,
    is_identity_dirty: bool,
    is_identity_3x2: bool,
    is_identity_3x2_dirty: bool,
}

// Equality is element-wise; the cache/version metadata is derived state.
impl PartialEq for Matrix {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m
    }
}

const IDENTITY_ELEMENTS: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

impl Matrix {
    /// Creates a zero-filled matrix ("not identity, caches dirty").
    pub fn zeroed() -> Self {
        Self {
            m: [0.0; 16],
            update_flag: UpdateCounter::global().next(),
            is_identity: false,
            is_identity_dirty: true,
            is_identity_3x2: false,
            is_identity_3x2_dirty: true,
        }
    }

    /// Creates the identity matrix.
    pub fn identity() -> Self {
        let mut out = Self::zeroed();
        Self::identity_into(&mut out);
        out
    }

    /// Writes the identity matrix into `out`.
    pub fn identity_into(out: &mut Self) {
        out.m = IDENTITY_ELEMENTS;
        out.update_identity_status(true);
    }

    /// Creates a matrix from a flat row-major array (translation in
    /// elements 12-14).
    pub fn from_array(m: [f32; 16]) -> Self {
        let mut out = Self::zeroed();
        Self::from_array_into(m, &mut out);
        out
    }

    /// In-place sibling of [`from_array`](Self::from_array).
    pub fn from_array_into(m: [f32; 16], out: &mut Self) {
        out.m = m;
        out.mark_as_updated();
    }

    /// Creates a matrix from four row arrays.
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self::from_array([
            rows[0][0], rows[0][1], rows[0][2], rows[0][3], //
            rows[1][0], rows[1][1], rows[1][2], rows[1][3], //
            rows[2][0], rows[2][1], rows[2][2], rows[2][3], //
            rows[3][0], rows[3][1], rows[3][2], rows[3][3],
        ])
    }

    /// The elements as a flat row-major array reference.
    #[inline]
    pub fn m(&self) -> &[f32; 16] {
        &self.m
    }

    /// Copies the elements out as a flat row-major array.
    #[inline]
    pub fn to_array(&self) -> [f32; 16] {
        self.m
    }

    /// Element at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.m[row * 4 + col]
    }

    /// Writes a single element. A blind mutation: invalidates both
    /// identity caches and takes a fresh version stamp.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.m[row * 4 + col] = value;
        self.mark_as_updated();
    }

    /// Row `i` as an array.
    #[inline]
    pub fn get_row(&self, i: usize) -> [f32; 4] {
        let base = i * 4;
        [self.m[base], self.m[base + 1], self.m[base + 2], self.m[base + 3]]
    }

    /// The translation components (elements 12-14).
    #[inline]
    pub fn get_translation(&self) -> Vector3 {
        Vector3::new(self.m[12], self.m[13], self.m[14])
    }

    /// Overwrites the translation components.
    pub fn set_translation(&mut self, translation: Vector3) {
        self.m[12] = translation.x;
        self.m[13] = translation.y;
        self.m[14] = translation.z;
        self.mark_as_updated();
    }

    /// The version stamp of the last mutation.
    ///
    /// Strictly increases across mutations and is unique process-wide, so
    /// two matrices can never share a stamp.
    #[inline]
    pub fn update_flag(&self) -> u64 {
        self.update_flag
    }

    /// Copies `other`'s elements into `self`.
    pub fn copy_from(&mut self, other: &Self) {
        self.m = other.m;
        self.mark_as_updated();
    }

    // ------------------------------------------------------------------
    // Cache / version bookkeeping
    // ------------------------------------------------------------------

    /// Records a blind mutation: fresh stamp, both identity caches
    /// invalidated until the next query recomputes them.
    fn mark_as_updated(&mut self) {
        self.update_flag = UpdateCounter::global().next();
        self.is_identity_dirty = true;
        self.is_identity_3x2_dirty = true;
    }

    /// Records a constructive mutation whose identity-ness is known
    /// analytically, skipping the recomputation pass on first query. The
    /// 3x2 cache is still deferred.
    fn update_identity_status(&mut self, is_identity: bool) {
        self.update_flag = UpdateCounter::global().next();
        self.is_identity = is_identity;
        self.is_identity_dirty = false;
        self.is_identity_3x2_dirty = true;
    }

    fn compute_is_identity(&self) -> bool {
        self.m == IDENTITY_ELEMENTS
    }

    /// The 3x2 interpretation reads a matrix as a 2D affine transform:
    /// only the 2x2 block and the 2D translation are relevant.
    fn compute_is_identity_3x2(&self) -> bool {
        self.m[0] == 1.0
            && self.m[5] == 1.0
            && self.m[1] == 0.0
            && self.m[4] == 0.0
            && self.m[12] == 0.0
            && self.m[13] == 0.0
    }

    /// Identity check without touching the cache. Returns the cached value
    /// when valid, otherwise computes on the fly.
    #[inline]
    pub fn identity_status(&self) -> bool {
        if self.is_identity_dirty {
            self.compute_is_identity()
        } else {
            self.is_identity
        }
    }

    /// Identity check that recomputes and re-validates the cache when
    /// dirty.
    pub fn is_identity_update(&mut self) -> bool {
        if self.is_identity_dirty {
            self.is_identity = self.compute_is_identity();
            self.is_identity_dirty = false;
        }
        self.is_identity
    }

    /// 2D/texture-matrix identity check, cached like
    /// [`is_identity_update`](Self::is_identity_update).
    pub fn is_identity_3x2_update(&mut self) -> bool {
        if self.is_identity_3x2_dirty {
            self.is_identity_3x2 = self.compute_is_identity_3x2();
            self.is_identity_3x2_dirty = false;
        }
        self.is_identity_3x2
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    /// Matrix product `self * other` (row-vector convention: applying the
    /// product transforms by `self` first, then `other`).
    pub fn multiply(&self, other: &Self) -> Self {
        let mut out = Self::zeroed();
        self.multiply_into(other, &mut out);
        out
    }

    /// In-place sibling of [`multiply`](Self::multiply); `out` may alias
    /// either operand.
    ///
    /// Short-circuits to a copy when either operand is the identity.
    pub fn multiply_into(&self, other: &Self, out: &mut Self) {
        if self.identity_status() {
            out.copy_from(other);
            return;
        }
        if other.identity_status() {
            out.copy_from(self);
            return;
        }

        let a = self.m;
        let b = other.m;
        let mut r = [0.0f32; 16];
        for row in 0..4 {
            for col in 0..4 {
                r[row * 4 + col] = a[row * 4] * b[col]
                    + a[row * 4 + 1] * b[4 + col]
                    + a[row * 4 + 2] * b[8 + col]
                    + a[row * 4 + 3] * b[12 + col];
            }
        }
        out.m = r;
        out.mark_as_updated();
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        let mut out = Self::zeroed();
        self.add_into(other, &mut out);
        out
    }

    /// In-place sibling of [`add`](Self::add).
    pub fn add_into(&self, other: &Self, out: &mut Self) {
        for i in 0..16 {
            out.m[i] = self.m[i] + other.m[i];
        }
        out.mark_as_updated();
    }

    /// Every element multiplied by `value`.
    pub fn scale(&self, value: f32) -> Self {
        let mut out = Self::zeroed();
        for i in 0..16 {
            out.m[i] = self.m[i] * value;
        }
        out.mark_as_updated();
        out
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeroed();
        self.transpose_into(&mut out);
        out
    }

    /// In-place sibling of [`transpose`](Self::transpose); `out` may alias
    /// the source.
    pub fn transpose_into(&self, out: &mut Self) {
        let m = self.m;
        out.m = [
            m[0], m[4], m[8], m[12], //
            m[1], m[5], m[9], m[13], //
            m[2], m[6], m[10], m[14], //
            m[3], m[7], m[11], m[15],
        ];
        out.mark_as_updated();
    }

    /// Determinant by Laplace expansion along the first row, reusing 2x2
    /// sub-determinants of the last two rows.
    ///
    /// Returns 1 immediately when the matrix is known to be the identity.
    pub fn determinant(&self) -> f32 {
        if self.identity_status() {
            return 1.0;
        }

        let [m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33] =
            self.m;

        let det_22_33 = m22 * m33 - m32 * m23;
        let det_21_33 = m21 * m33 - m31 * m23;
        let det_21_32 = m21 * m32 - m31 * m22;
        let det_20_33 = m20 * m33 - m30 * m23;
        let det_20_32 = m20 * m32 - m30 * m22;
        let det_20_31 = m20 * m31 - m30 * m21;

        let cofact_00 = m11 * det_22_33 - m12 * det_21_33 + m13 * det_21_32;
        let cofact_01 = -(m10 * det_22_33 - m12 * det_20_33 + m13 * det_20_32);
        let cofact_02 = m10 * det_21_33 - m11 * det_20_33 + m13 * det_20_31;
        let cofact_03 = -(m10 * det_21_32 - m11 * det_20_32 + m12 * det_20_31);

        m00 * cofact_00 + m01 * cofact_01 + m02 * cofact_02 + m03 * cofact_03
    }

    /// Inverse by the adjugate/cofactor method.
    pub fn invert(&self) -> Self {
        let mut out = Self::zeroed();
        self.invert_into(&mut out);
        out
    }

    /// In-place sibling of [`invert`](Self::invert); `out` may alias the
    /// source.
    ///
    /// Two silent fallbacks:
    /// - an identity source is copied without computing;
    /// - a singular source (determinant exactly 0) is copied unchanged
    ///   rather than filling `out` with infinities. Callers that need to
    ///   distinguish this case can compare [`determinant`](Self::determinant)
    ///   against zero themselves.
    pub fn invert_into(&self, out: &mut Self) {
        if self.identity_status() {
            out.copy_from(self);
            return;
        }

        let [m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33] =
            self.m;

        let det_22_33 = m22 * m33 - m32 * m23;
        let det_21_33 = m21 * m33 - m31 * m23;
        let det_21_32 = m21 * m32 - m31 * m22;
        let det_20_33 = m20 * m33 - m30 * m23;
        let det_20_32 = m20 * m32 - m30 * m22;
        let det_20_31 = m20 * m31 - m30 * m21;

        let cofact_00 = m11 * det_22_33 - m12 * det_21_33 + m13 * det_21_32;
        let cofact_01 = -(m10 * det_22_33 - m12 * det_20_33 + m13 * det_20_32);
        let cofact_02 = m10 * det_21_33 - m11 * det_20_33 + m13 * det_20_31;
        let cofact_03 = -(m10 * det_21_32 - m11 * det_20_32 + m12 * det_20_31);

        let det = m00 * cofact_00 + m01 * cofact_01 + m02 * cofact_02 + m03 * cofact_03;
        if det == 0.0 {
            out.copy_from(self);
            return;
        }

        let det_inv = 1.0 / det;
        let det_12_33 = m12 * m33 - m32 * m13;
        let det_11_33 = m11 * m33 - m31 * m13;
        let det_11_32 = m11 * m32 - m31 * m12;
        let det_10_33 = m10 * m33 - m30 * m13;
        let det_10_32 = m10 * m32 - m30 * m12;
        let det_10_31 = m10 * m31 - m30 * m11;
        let det_12_23 = m12 * m23 - m22 * m13;
        let det_11_23 = m11 * m23 - m21 * m13;
        let det_11_22 = m11 * m22 - m21 * m12;
        let det_10_23 = m10 * m23 - m20 * m13;
        let det_10_22 = m10 * m22 - m20 * m12;
        let det_10_21 = m10 * m21 - m20 * m11;

        let cofact_10 = -(m01 * det_22_33 - m02 * det_21_33 + m03 * det_21_32);
        let cofact_11 = m00 * det_22_33 - m02 * det_20_33 + m03 * det_20_32;
        let cofact_12 = -(m00 * det_21_33 - m01 * det_20_33 + m03 * det_20_31);
        let cofact_13 = m00 * det_21_32 - m01 * det_20_32 + m02 * det_20_31;
        let cofact_20 = m01 * det_12_33 - m02 * det_11_33 + m03 * det_11_32;
        let cofact_21 = -(m00 * det_12_33 - m02 * det_10_33 + m03 * det_10_32);
        let cofact_22 = m00 * det_11_33 - m01 * det_10_33 + m03 * det_10_31;
        let cofact_23 = -(m00 * det_11_32 - m01 * det_10_32 + m02 * det_10_31);
        let cofact_30 = -(m01 * det_12_23 - m02 * det_11_23 + m03 * det_11_22);
        let cofact_31 = m00 * det_12_23 - m02 * det_10_23 + m03 * det_10_22;
        let cofact_32 = -(m00 * det_11_23 - m01 * det_10_23 + m03 * det_10_21);
        let cofact_33 = m00 * det_11_22 - m01 * det_10_22 + m02 * det_10_21;

        out.m = [
            cofact_00 * det_inv,
            cofact_10 * det_inv,
            cofact_20 * det_inv,
            cofact_30 * det_inv,
            cofact_01 * det_inv,
            cofact_11 * det_inv,
            cofact_21 * det_inv,
            cofact_31 * det_inv,
            cofact_02 * det_inv,
            cofact_12 * det_inv,
            cofact_22 * det_inv,
            cofact_32 * det_inv,
            cofact_03 * det_inv,
            cofact_13 * det_inv,
            cofact_23 * det_inv,
            cofact_33 * det_inv,
        ];
        out.mark_as_updated();
    }

    // ------------------------------------------------------------------
    // Compose / decompose
    // ------------------------------------------------------------------

    /// Builds `scale-matrix * rotation-matrix`, then writes the
    /// translation into the last row. Scale applies before rotation.
    pub fn compose(scale: Vector3, rotation: Quaternion, translation: Vector3) -> Self {
        let mut out = Self::zeroed();
        Self::compose_into(scale, rotation, translation, &mut out);
        out
    }

    /// In-place sibling of [`compose`](Self::compose).
    pub fn compose_into(
        scale: Vector3,
        rotation: Quaternion,
        translation: Vector3,
        out: &mut Self,
    ) {
        let scale_matrix = Self::scaling(scale.x, scale.y, scale.z);
        let rotation_matrix = Self::from_quaternion(rotation);
        scale_matrix.multiply_into(&rotation_matrix, out);
        out.m[12] = translation.x;
        out.m[13] = translation.y;
        out.m[14] = translation.z;
        out.mark_as_updated();
    }

    /// Splits the matrix back into scale, rotation, and translation.
    ///
    /// - Translation is read from elements 12-14.
    /// - Scale components are the magnitudes of the upper-left 3x3 rows;
    ///   when the determinant is non-positive, `scale.y` is negated: the
    ///   library represents reflections through a negative scale axis
    ///   rather than a separate handedness flag.
    /// - Returns `false` when any scale axis is exactly zero (the basis is
    ///   degenerate); `rotation` is then left **unwritten**, so callers
    ///   must check the return value before trusting it.
    ///
    /// When the matrix is known to be the identity the method
    /// short-circuits to translation `(0,0,0)`, rotation identity, and a
    /// **zero** scale vector, not ones. Callers that need the general-path
    /// convention must branch on [`identity_status`](Self::identity_status)
    /// first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use smath_geom::{Matrix, Quaternion, Vector3};
    ///
    /// let m = Matrix::compose(
    ///     Vector3::new(2.0, 3.0, 0.5),
    ///     Quaternion::from_euler_degrees(10.0, 20.0, 30.0),
    ///     Vector3::new(1.0, -2.0, 3.0),
    /// );
    ///
    /// let mut scale = Vector3::ZERO;
    /// let mut rotation = Quaternion::IDENTITY;
    /// let mut translation = Vector3::ZERO;
    /// assert!(m.decompose(Some(&mut scale), Some(&mut rotation), Some(&mut translation)));
    /// assert!(scale.equals_with_epsilon(Vector3::new(2.0, 3.0, 0.5), 1e-4));
    /// ```
    pub fn decompose(
        &self,
        scale: Option<&mut Vector3>,
        rotation: Option<&mut Quaternion>,
        translation: Option<&mut Vector3>,
    ) -> bool {
        if self.identity_status() {
            if let Some(translation) = translation {
                *translation = Vector3::ZERO;
            }
            if let Some(scale) = scale {
                // Zero, not ones; see the method docs.
                *scale = Vector3::ZERO;
            }
            if let Some(rotation) = rotation {
                *rotation = Quaternion::IDENTITY;
            }
            return true;
        }

        let m = &self.m;
        if let Some(translation) = translation {
            *translation = Vector3::new(m[12], m[13], m[14]);
        }

        let sx = (m[0] * m[0] + m[1] * m[1] + m[2] * m[2]).sqrt();
        let mut sy = (m[4] * m[4] + m[5] * m[5] + m[6] * m[6]).sqrt();
        let sz = (m[8] * m[8] + m[9] * m[9] + m[10] * m[10]).sqrt();
        if self.determinant() <= 0.0 {
            sy = -sy;
        }
        if let Some(scale) = scale {
            *scale = Vector3::new(sx, sy, sz);
        }

        if sx == 0.0 || sy == 0.0 || sz == 0.0 {
            // Degenerate basis: rotation left unwritten.
            return false;
        }

        if let Some(rotation) = rotation {
            let inv_sx = 1.0 / sx;
            let inv_sy = 1.0 / sy;
            let inv_sz = 1.0 / sz;
            let rotation_matrix = Self::from_array([
                m[0] * inv_sx,
                m[1] * inv_sx,
                m[2] * inv_sx,
                0.0,
                m[4] * inv_sy,
                m[5] * inv_sy,
                m[6] * inv_sy,
                0.0,
                m[8] * inv_sz,
                m[9] * inv_sz,
                m[10] * inv_sz,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0,
            ]);
            Quaternion::from_rotation_matrix_into(&rotation_matrix, rotation);
        }

        true
    }

    // ------------------------------------------------------------------
    // Elementary constructors
    // ------------------------------------------------------------------

    /// Pure translation matrix.
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut out = Self::zeroed();
        Self::translation_into(x, y, z, &mut out);
        out
    }

    /// In-place sibling of [`translation`](Self::translation).
    pub fn translation_into(x: f32, y: f32, z: f32, out: &mut Self) {
        out.m = IDENTITY_ELEMENTS;
        out.m[12] = x;
        out.m[13] = y;
        out.m[14] = z;
        out.update_identity_status(x == 0.0 && y == 0.0 && z == 0.0);
    }

    /// Pure scaling matrix.
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        let mut out = Self::zeroed();
        Self::scaling_into(x, y, z, &mut out);
        out
    }

    /// In-place sibling of [`scaling`](Self::scaling).
    pub fn scaling_into(x: f32, y: f32, z: f32, out: &mut Self) {
        out.m = [
            x, 0.0, 0.0, 0.0, //
            0.0, y, 0.0, 0.0, //
            0.0, 0.0, z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        out.update_identity_status(x == 1.0 && y == 1.0 && z == 1.0);
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let mut out = Self::zeroed();
        let (s, c) = angle.sin_cos();
        out.m = [
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, s, 0.0, //
            0.0, -s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        out.update_identity_status(c == 1.0 && s == 0.0);
        out
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let mut out = Self::zeroed();
        let (s, c) = angle.sin_cos();
        out.m = [
            c, 0.0, -s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        out.update_identity_status(c == 1.0 && s == 0.0);
        out
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let mut out = Self::zeroed();
        let (s, c) = angle.sin_cos();
        out.m = [
            c, s, 0.0, 0.0, //
            -s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        out.update_identity_status(c == 1.0 && s == 0.0);
        out
    }

    /// Rotation of `angle` radians about an arbitrary axis (Rodrigues'
    /// formula in matrix form).
    pub fn rotation_axis(axis: Vector3, angle: f32) -> Self {
        let mut out = Self::zeroed();
        Self::rotation_axis_into(axis, angle, &mut out);
        out
    }

    /// In-place sibling of [`rotation_axis`](Self::rotation_axis).
    ///
    /// The axis is normalized internally. The trig terms use the negated
    /// angle (`sin(-angle)`, `cos(-angle)`), matching the library's
    /// handedness convention for positive rotation.
    pub fn rotation_axis_into(axis: Vector3, angle: f32, out: &mut Self) {
        let s = (-angle).sin();
        let c = (-angle).cos();
        let c1 = 1.0 - c;
        let a = axis.normalize();

        out.m = [
            a.x * a.x * c1 + c,
            a.x * a.y * c1 - a.z * s,
            a.x * a.z * c1 + a.y * s,
            0.0,
            a.y * a.x * c1 + a.z * s,
            a.y * a.y * c1 + c,
            a.y * a.z * c1 - a.x * s,
            0.0,
            a.z * a.x * c1 - a.y * s,
            a.z * a.y * c1 + a.x * s,
            a.z * a.z * c1 + c,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ];
        out.mark_as_updated();
    }

    /// Rotation matrix from a quaternion.
    pub fn from_quaternion(rotation: Quaternion) -> Self {
        let mut out = Self::zeroed();
        Self::from_quaternion_into(rotation, &mut out);
        out
    }

    /// In-place sibling of [`from_quaternion`](Self::from_quaternion).
    pub fn from_quaternion_into(rotation: Quaternion, out: &mut Self) {
        let Quaternion { x, y, z, w } = rotation;
        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let zw = z * w;
        let zx = z * x;
        let yw = y * w;
        let yz = y * z;
        let xw = x * w;

        out.m = [
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + zw),
            2.0 * (zx - yw),
            0.0,
            2.0 * (xy - zw),
            1.0 - 2.0 * (zz + xx),
            2.0 * (yz + xw),
            0.0,
            2.0 * (zx + yw),
            2.0 * (yz - xw),
            1.0 - 2.0 * (yy + xx),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ];
        out.mark_as_updated();
    }

    // ------------------------------------------------------------------
    // View and projection constructors
    // ------------------------------------------------------------------

    /// Left-handed look-at view matrix.
    pub fn look_at_lh(eye: Vector3, target: Vector3, up: Vector3) -> Self {
        let mut out = Self::zeroed();
        Self::look_at_lh_into(eye, target, up, &mut out);
        out
    }

    /// In-place sibling of [`look_at_lh`](Self::look_at_lh).
    ///
    /// Builds the view basis by Gram-Schmidt: the z-axis points from eye
    /// to target, and the x-axis is `cross(up, z)`, falling back to
    /// `(1, 0, 0)` when `up` is parallel to the view direction (which
    /// would otherwise yield NaN). The y-axis closes the basis. The
    /// axes are packed per column with the translation row holding the
    /// negative dot products of each axis with the eye.
    pub fn look_at_lh_into(eye: Vector3, target: Vector3, up: Vector3, out: &mut Self) {
        let z_axis = (target - eye).normalize();
        Self::look_at_common(eye, z_axis, up, out);
    }

    /// Right-handed look-at view matrix.
    pub fn look_at_rh(eye: Vector3, target: Vector3, up: Vector3) -> Self {
        let mut out = Self::zeroed();
        Self::look_at_rh_into(eye, target, up, &mut out);
        out
    }

    /// In-place sibling of [`look_at_rh`](Self::look_at_rh). Identical to
    /// the LH construction with the z-axis reversed (target to eye).
    pub fn look_at_rh_into(eye: Vector3, target: Vector3, up: Vector3, out: &mut Self) {
        let z_axis = (eye - target).normalize();
        Self::look_at_common(eye, z_axis, up, out);
    }

    fn look_at_common(eye: Vector3, z_axis: Vector3, up: Vector3, out: &mut Self) {
        let cross = up.cross(z_axis);
        let x_axis = if cross.length_squared() == 0.0 {
            // Up is parallel to the view direction.
            Vector3::RIGHT
        } else {
            cross.normalize()
        };
        let y_axis = z_axis.cross(x_axis).normalize();

        let ex = -x_axis.dot(eye);
        let ey = -y_axis.dot(eye);
        let ez = -z_axis.dot(eye);

        out.m = [
            x_axis.x, y_axis.x, z_axis.x, 0.0, //
            x_axis.y, y_axis.y, z_axis.y, 0.0, //
            x_axis.z, y_axis.z, z_axis.z, 0.0, //
            ex, ey, ez, 1.0,
        ];
        out.mark_as_updated();
    }

    /// Left-handed perspective projection from a vertical field of view
    /// (radians), aspect ratio, and near/far planes.
    pub fn perspective_fov_lh(fov: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        let mut out = Self::zeroed();
        Self::perspective_fov_lh_into(fov, aspect, znear, zfar, &mut out);
        out
    }

    /// In-place sibling of [`perspective_fov_lh`](Self::perspective_fov_lh).
    pub fn perspective_fov_lh_into(fov: f32, aspect: f32, znear: f32, zfar: f32, out: &mut Self) {
        let n = znear;
        let f = zfar;
        let t = 1.0 / (fov * 0.5).tan();
        let a = t / aspect;
        let b = t;
        let c = if f != 0.0 { (f + n) / (f - n) } else { 1.0 };
        let d = if f != 0.0 { (-2.0 * f * n) / (f - n) } else { -2.0 * n };

        out.m = [
            a, 0.0, 0.0, 0.0, //
            0.0, b, 0.0, 0.0, //
            0.0, 0.0, c, 1.0, //
            0.0, 0.0, d, 0.0,
        ];
        out.mark_as_updated();
    }

    /// Right-handed perspective projection.
    pub fn perspective_fov_rh(fov: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        let mut out = Self::zeroed();
        Self::perspective_fov_rh_into(fov, aspect, znear, zfar, &mut out);
        out
    }

    /// In-place sibling of [`perspective_fov_rh`](Self::perspective_fov_rh).
    ///
    /// The LH formula with the sign of the z-axis terms flipped (the
    /// depth coefficient and the w-coupling element).
    pub fn perspective_fov_rh_into(fov: f32, aspect: f32, znear: f32, zfar: f32, out: &mut Self) {
        let n = znear;
        let f = zfar;
        let t = 1.0 / (fov * 0.5).tan();
        let a = t / aspect;
        let b = t;
        let c = if f != 0.0 { -(f + n) / (f - n) } else { -1.0 };
        let d = if f != 0.0 { (-2.0 * f * n) / (f - n) } else { -2.0 * n };

        out.m = [
            a, 0.0, 0.0, 0.0, //
            0.0, b, 0.0, 0.0, //
            0.0, 0.0, c, -1.0, //
            0.0, 0.0, d, 0.0,
        ];
        out.mark_as_updated();
    }

    /// Left-handed orthographic projection from viewport width/height and
    /// near/far planes.
    pub fn ortho_lh(width: f32, height: f32, znear: f32, zfar: f32) -> Self {
        let mut out = Self::zeroed();
        Self::ortho_lh_into(width, height, znear, zfar, &mut out);
        out
    }

    /// In-place sibling of [`ortho_lh`](Self::ortho_lh).
    pub fn ortho_lh_into(width: f32, height: f32, znear: f32, zfar: f32, out: &mut Self) {
        let n = znear;
        let f = zfar;
        let c = 2.0 / (f - n);
        let d = -(f + n) / (f - n);

        out.m = [
            2.0 / width, 0.0, 0.0, 0.0, //
            0.0, 2.0 / height, 0.0, 0.0, //
            0.0, 0.0, c, 0.0, //
            0.0, 0.0, d, 1.0,
        ];
        out.update_identity_status(width == 2.0 && height == 2.0 && c == 1.0 && d == 0.0);
    }

    /// Left-handed off-center orthographic projection.
    pub fn ortho_off_center_lh(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let mut out = Self::zeroed();
        Self::ortho_off_center_lh_into(left, right, bottom, top, znear, zfar, &mut out);
        out
    }

    /// In-place sibling of [`ortho_off_center_lh`](Self::ortho_off_center_lh).
    pub fn ortho_off_center_lh_into(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        znear: f32,
        zfar: f32,
        out: &mut Self,
    ) {
        let n = znear;
        let f = zfar;
        let a = 2.0 / (right - left);
        let b = 2.0 / (top - bottom);
        let c = 2.0 / (f - n);
        let d = -(f + n) / (f - n);
        let i0 = (left + right) / (left - right);
        let i1 = (top + bottom) / (bottom - top);

        out.m = [
            a, 0.0, 0.0, 0.0, //
            0.0, b, 0.0, 0.0, //
            0.0, 0.0, c, 0.0, //
            i0, i1, d, 1.0,
        ];
        out.mark_as_updated();
    }

    /// Right-handed off-center orthographic projection: the LH formula
    /// with the depth coefficient sign-flipped.
    pub fn ortho_off_center_rh(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let mut out = Self::zeroed();
        Self::ortho_off_center_rh_into(left, right, bottom, top, znear, zfar, &mut out);
        out
    }

    /// In-place sibling of [`ortho_off_center_rh`](Self::ortho_off_center_rh).
    pub fn ortho_off_center_rh_into(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        znear: f32,
        zfar: f32,
        out: &mut Self,
    ) {
        Self::ortho_off_center_lh_into(left, right, bottom, top, znear, zfar, out);
        out.m[10] = -out.m[10];
        out.mark_as_updated();
    }

    /// Householder reflection matrix across a plane.
    pub fn reflection(plane: Plane) -> Self {
        let mut out = Self::zeroed();
        Self::reflection_into(plane, &mut out);
        out
    }

    /// In-place sibling of [`reflection`](Self::reflection). The plane is
    /// normalized internally.
    pub fn reflection_into(plane: Plane, out: &mut Self) {
        let plane = plane.normalize();
        let x = plane.normal.x;
        let y = plane.normal.y;
        let z = plane.normal.z;
        let tx = -2.0 * x;
        let ty = -2.0 * y;
        let tz = -2.0 * z;

        out.m = [
            tx * x + 1.0,
            ty * x,
            tz * x,
            0.0,
            tx * y,
            ty * y + 1.0,
            tz * y,
            0.0,
            tx * z,
            ty * z,
            tz * z + 1.0,
            0.0,
            tx * plane.d,
            ty * plane.d,
            tz * plane.d,
            1.0,
        ];
        out.mark_as_updated();
    }

    /// Converts to glam Mat4.
    ///
    /// glam stores columns, but its column-major flat layout coincides
    /// with this library's row-major layout (translation at 12-14 in
    /// both), so the elements copy straight through.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.m)
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_array(m.to_cols_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_matrix_eq(a: &Matrix, b: &Matrix, epsilon: f32) {
        for i in 0..16 {
            assert!(
                (a.m()[i] - b.m()[i]).abs() <= epsilon,
                "element {i}: {} != {}",
                a.m()[i],
                b.m()[i]
            );
        }
    }

    #[test]
    fn test_identity_flattened() {
        assert_eq!(
            Matrix::identity().to_array(),
            [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0
            ]
        );
    }

    #[test]
    fn test_zeroed_metadata() {
        let mut m = Matrix::zeroed();
        assert!(!m.is_identity_update());
        assert_eq!(m.determinant(), 0.0);
    }

    #[test]
    fn test_update_flag_strictly_increases() {
        let mut m = Matrix::identity();
        let first = m.update_flag();
        m.set(0, 0, 2.0);
        let second = m.update_flag();
        m.set_translation(Vector3::new(1.0, 0.0, 0.0));
        let third = m.update_flag();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_update_flags_never_collide() {
        let a = Matrix::identity();
        let b = Matrix::identity();
        assert_ne!(a.update_flag(), b.update_flag());
    }

    #[test]
    fn test_lazy_identity_cache() {
        let mut m = Matrix::identity();
        assert!(m.is_identity_update());

        // A blind element write defers recomputation to the next query.
        m.set(0, 0, 3.0);
        assert!(!m.is_identity_update());

        m.set(0, 0, 1.0);
        assert!(m.is_identity_update());
    }

    #[test]
    fn test_identity_3x2() {
        let mut m = Matrix::identity();
        assert!(m.is_identity_3x2_update());

        // Elements outside the 2D interpretation do not matter.
        m.set(2, 2, 5.0);
        assert!(m.is_identity_3x2_update());

        // 2D translation does.
        m.set_translation(Vector3::new(1.0, 0.0, 0.0));
        assert!(!m.is_identity_3x2_update());
    }

    #[test]
    fn test_constructive_ops_know_identity() {
        let mut t = Matrix::translation(0.0, 0.0, 0.0);
        assert!(t.is_identity_update());
        let mut t2 = Matrix::translation(1.0, 0.0, 0.0);
        assert!(!t2.is_identity_update());
        let mut s = Matrix::scaling(1.0, 1.0, 1.0);
        assert!(s.is_identity_update());
        let mut r = Matrix::rotation_y(0.0);
        assert!(r.is_identity_update());
    }

    #[test]
    fn test_multiply_identity_short_circuit() {
        let m = Matrix::translation(1.0, 2.0, 3.0);
        let id = Matrix::identity();
        assert_eq!(m.multiply(&id), m);
        assert_eq!(id.multiply(&m), m);
    }

    #[test]
    fn test_multiply_composes_left_to_right() {
        // Row-vector convention: p * (A * B) applies A first.
        let scale = Matrix::scaling(2.0, 2.0, 2.0);
        let translate = Matrix::translation(1.0, 0.0, 0.0);

        let scale_then_translate = scale.multiply(&translate);
        let p = Vector3::new(1.0, 1.0, 1.0).transform_coordinates(&scale_then_translate);
        assert_eq!(p, Vector3::new(3.0, 2.0, 2.0));
    }

    #[test]
    fn test_multiply_into_aliasing() {
        let a = Matrix::scaling(2.0, 3.0, 4.0);
        let b = Matrix::translation(1.0, 1.0, 1.0);
        let expected = a.multiply(&b);

        let mut out = a;
        let src = out;
        src.multiply_into(&b, &mut out);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_transpose_into_aliasing() {
        let m = Matrix::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let mut out = m;
        let src = out;
        src.transpose_into(&mut out);
        assert_eq!(out.at(0, 1), 5.0);
        assert_eq!(out.at(1, 0), 2.0);
        assert_eq!(out.transpose(), m);
    }

    #[test]
    fn test_determinant_identity_shortcut() {
        assert_eq!(Matrix::identity().determinant(), 1.0);
        assert_relative_eq!(
            Matrix::scaling(2.0, 3.0, 4.0).determinant(),
            24.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_invert_roundtrip() {
        let m = Matrix::compose(
            Vector3::new(2.0, 3.0, 0.5),
            Quaternion::from_euler_degrees(10.0, 20.0, 30.0),
            Vector3::new(1.0, -2.0, 3.0),
        );
        let back = m.invert().invert();
        assert_matrix_eq(&back, &m, 1e-4);

        let product = m.multiply(&m.invert());
        assert_matrix_eq(&product, &Matrix::identity(), 1e-4);
    }

    #[test]
    fn test_invert_singular_copies_source() {
        let singular = Matrix::scaling(1.0, 0.0, 1.0);
        let inv = singular.invert();
        assert_eq!(inv, singular);
        assert!(inv.to_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_invert_identity_short_circuit() {
        assert_eq!(Matrix::identity().invert(), Matrix::identity());
    }

    #[test]
    fn test_compose_decompose_roundtrip() {
        let scale = Vector3::new(2.0, 3.0, 0.5);
        let rotation = Quaternion::from_euler_degrees(10.0, 20.0, 30.0);
        let translation = Vector3::new(1.0, -2.0, 3.0);
        let m = Matrix::compose(scale, rotation, translation);

        let mut s = Vector3::ZERO;
        let mut r = Quaternion::IDENTITY;
        let mut t = Vector3::ZERO;
        assert!(m.decompose(Some(&mut s), Some(&mut r), Some(&mut t)));

        assert!(s.equals_with_epsilon(scale, 1e-4));
        assert!(t.equals_with_epsilon(translation, 1e-4));
        // Rotations may differ by double-cover sign.
        let aligned = r.dot(rotation).abs();
        assert_relative_eq!(aligned, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_compose_order_scale_then_rotation() {
        let scale = Vector3::new(2.0, 1.0, 1.0);
        let rotation = Quaternion::from_euler_degrees(0.0, 90.0, 0.0);
        let m = Matrix::compose(scale, rotation, Vector3::ZERO);

        // Scale applies in local space before the rotation.
        let p = Vector3::RIGHT.transform_coordinates(&m);
        assert!(p.equals_with_epsilon(Vector3::new(0.0, 0.0, -2.0), 1e-5));
    }

    #[test]
    fn test_decompose_identity_shortcut() {
        let id = Matrix::identity();
        let mut s = Vector3::ONE;
        let mut r = Quaternion::new(9.0, 9.0, 9.0, 9.0);
        let mut t = Vector3::ONE;
        assert!(id.decompose(Some(&mut s), Some(&mut r), Some(&mut t)));
        assert_eq!(t, Vector3::ZERO);
        assert_eq!(r, Quaternion::IDENTITY);
        // Kept asymmetry: the identity fast path reports zero scale.
        assert_eq!(s, Vector3::ZERO);
    }

    #[test]
    fn test_decompose_zero_scale_returns_false() {
        let m = Matrix::scaling(2.0, 0.0, 1.0);
        let sentinel = Quaternion::new(7.0, 7.0, 7.0, 7.0);
        let mut r = sentinel;
        let mut s = Vector3::ZERO;
        assert!(!m.decompose(Some(&mut s), Some(&mut r), None));
        // Rotation output is left untouched on failure.
        assert_eq!(r, sentinel);
    }

    #[test]
    fn test_decompose_negative_determinant_negates_y_scale() {
        let m = Matrix::scaling(1.0, 1.0, -1.0);
        let mut s = Vector3::ZERO;
        assert!(m.decompose(Some(&mut s), None, None));
        assert_eq!(s.y, -1.0);
    }

    #[test]
    fn test_rotation_constructors_agree_with_quaternion() {
        let angle = 0.7_f32;
        let from_axis = Matrix::rotation_axis(Vector3::UP, angle);
        let v = Vector3::new(1.0, 0.0, 0.5);

        let q = Quaternion::angle_axis(angle * smath_core::scalar::RAD2DEG, Vector3::UP);
        let via_quat = v.rotate(q);
        let via_matrix = v.transform_coordinates(&from_axis);
        assert!(via_quat.equals_with_epsilon(via_matrix, 1e-5));

        let from_y = Matrix::rotation_y(angle);
        assert_matrix_eq(&from_axis, &from_y, 1e-6);
    }

    #[test]
    fn test_from_quaternion_roundtrip() {
        let q = Quaternion::from_euler_degrees(30.0, -45.0, 60.0);
        let m = Matrix::from_quaternion(q);
        let back = Quaternion::from_rotation_matrix(&m);
        assert_relative_eq!(back.dot(q).abs(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_look_at_lh_origin_forward_is_identity() {
        let view = Matrix::look_at_lh(Vector3::ZERO, Vector3::FORWARD, Vector3::UP);
        assert_matrix_eq(&view, &Matrix::identity(), 1e-6);
    }

    #[test]
    fn test_look_at_lh_translates_eye_to_origin() {
        let eye = Vector3::new(3.0, 2.0, -5.0);
        let view = Matrix::look_at_lh(eye, eye + Vector3::FORWARD, Vector3::UP);
        let at_origin = eye.transform_coordinates(&view);
        assert!(at_origin.equals_with_epsilon(Vector3::ZERO, 1e-5));
    }

    #[test]
    fn test_look_at_up_parallel_fallback() {
        // Up parallel to the view direction must not produce NaN.
        let view = Matrix::look_at_lh(Vector3::ZERO, Vector3::UP, Vector3::UP);
        assert!(view.to_array().iter().all(|v| v.is_finite()));
        assert_eq!(view.at(0, 0), 1.0);
    }

    #[test]
    fn test_look_at_rh_mirrors_lh() {
        let eye = Vector3::new(1.0, 2.0, 3.0);
        let target = Vector3::new(-2.0, 0.5, 7.0);
        let lh = Matrix::look_at_lh(eye, target, Vector3::UP);
        let rh = Matrix::look_at_rh(eye, target, Vector3::UP);
        // Both place the eye at the origin.
        assert!(eye
            .transform_coordinates(&lh)
            .equals_with_epsilon(Vector3::ZERO, 1e-5));
        assert!(eye
            .transform_coordinates(&rh)
            .equals_with_epsilon(Vector3::ZERO, 1e-5));
        // The depth axes point opposite ways.
        assert_relative_eq!(lh.at(0, 2), -rh.at(0, 2), epsilon = 1e-6);
    }

    #[test]
    fn test_perspective_lh_maps_near_far() {
        let fov = std::f32::consts::FRAC_PI_2;
        let proj = Matrix::perspective_fov_lh(fov, 1.0, 1.0, 100.0);

        let near = Vector3::new(0.0, 0.0, 1.0).transform_coordinates(&proj);
        let far = Vector3::new(0.0, 0.0, 100.0).transform_coordinates(&proj);
        assert_relative_eq!(near.z, -1.0, epsilon = 1e-4);
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_perspective_rh_flips_depth() {
        let fov = std::f32::consts::FRAC_PI_2;
        let lh = Matrix::perspective_fov_lh(fov, 2.0, 0.1, 50.0);
        let rh = Matrix::perspective_fov_rh(fov, 2.0, 0.1, 50.0);
        assert_relative_eq!(rh.at(2, 2), -lh.at(2, 2), epsilon = 1e-6);
        assert_relative_eq!(rh.at(2, 3), -lh.at(2, 3), epsilon = 1e-6);
        assert_relative_eq!(rh.at(0, 0), lh.at(0, 0), epsilon = 1e-6);
    }

    #[test]
    fn test_ortho_lh_maps_extents() {
        let proj = Matrix::ortho_lh(4.0, 2.0, 0.0, 10.0);
        let p = Vector3::new(2.0, 1.0, 10.0).transform_coordinates(&proj);
        assert!(p.equals_with_epsilon(Vector3::new(1.0, 1.0, 1.0), 1e-5));
    }

    #[test]
    fn test_ortho_off_center_rh_flips_depth() {
        let lh = Matrix::ortho_off_center_lh(-1.0, 3.0, -2.0, 2.0, 0.0, 10.0);
        let rh = Matrix::ortho_off_center_rh(-1.0, 3.0, -2.0, 2.0, 0.0, 10.0);
        assert_relative_eq!(rh.at(2, 2), -lh.at(2, 2), epsilon = 1e-6);
        assert_relative_eq!(rh.at(3, 0), lh.at(3, 0), epsilon = 1e-6);
    }

    #[test]
    fn test_reflection_mirrors_point() {
        // Reflect across the y = 0 plane.
        let m = Matrix::reflection(Plane::new(Vector3::UP, 0.0));
        let p = Vector3::new(1.0, 2.0, 3.0).transform_coordinates(&m);
        assert!(p.equals_with_epsilon(Vector3::new(1.0, -2.0, 3.0), 1e-6));

        // Reflecting twice is the identity.
        let twice = m.multiply(&m);
        assert_matrix_eq(&twice, &Matrix::identity(), 1e-6);
    }

    #[test]
    fn test_reflection_unnormalized_plane() {
        let m = Matrix::reflection(Plane::from_components(0.0, 5.0, 0.0, 0.0));
        let p = Vector3::new(0.0, 2.0, 0.0).transform_coordinates(&m);
        assert!(p.equals_with_epsilon(Vector3::new(0.0, -2.0, 0.0), 1e-6));
    }

    #[test]
    fn test_transform_normal_ignores_translation() {
        let m = Matrix::translation(10.0, 20.0, 30.0);
        let n = Vector3::FORWARD.transform_normal(&m);
        assert_eq!(n, Vector3::FORWARD);
    }

    #[test]
    fn test_glam_roundtrip() {
        let m = Matrix::compose(
            Vector3::new(1.0, 2.0, 3.0),
            Quaternion::from_euler_degrees(15.0, 25.0, 35.0),
            Vector3::new(-1.0, 4.0, 0.5),
        );
        let back = Matrix::from_glam(m.to_glam());
        assert_eq!(back, m);
    }

    #[test]
    fn test_glam_translation_agrees() {
        // Same flat layout: translation lands in w_axis on the glam side.
        let m = Matrix::translation(1.0, 2.0, 3.0);
        let g = m.to_glam();
        assert_eq!(g.w_axis.x, 1.0);
        assert_eq!(g.w_axis.y, 2.0);
        assert_eq!(g.w_axis.z, 3.0);
    }
}
