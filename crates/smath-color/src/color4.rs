//! RGBA color value.

use std::ops::{Add, Mul, Sub};

use smath_core::{scalar, Error, Result};

use crate::Color3;

/// An RGBA color with `f32` channels in nominal `[0, 1]` range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Color4 {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Default for Color4 {
    /// Opaque black.
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl Color4 {
    /// Opaque black (0, 0, 0, 1).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white (1, 1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent black (0, 0, 0, 0).
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from channel values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Attaches an alpha channel to an RGB color.
    #[inline]
    pub const fn from_color3(color: Color3, a: f32) -> Self {
        Self::new(color.r, color.g, color.b, a)
    }

    /// The RGB channels, alpha dropped.
    #[inline]
    pub const fn rgb(self) -> Color3 {
        Color3::new(self.r, self.g, self.b)
    }

    /// The channels as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Each channel clamped to `[0, 1]`.
    #[inline]
    pub fn clamp01(self) -> Self {
        Self::new(
            scalar::saturate(self.r),
            scalar::saturate(self.g),
            scalar::saturate(self.b),
            scalar::saturate(self.a),
        )
    }

    /// Linear interpolation between `self` (t = 0) and `other` (t = 1);
    /// `t` is not clamped. Alpha interpolates like the other channels.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            scalar::lerp(self.r, other.r, t),
            scalar::lerp(self.g, other.g, t),
            scalar::lerp(self.b, other.b, t),
            scalar::lerp(self.a, other.a, t),
        )
    }

    /// Every channel, alpha included, multiplied by `value`.
    #[inline]
    pub fn scale(self, value: f32) -> Self {
        Self::new(self.r * value, self.g * value, self.b * value, self.a * value)
    }

    /// Channel-wise comparison within `epsilon`.
    #[inline]
    pub fn equals_with_epsilon(self, other: Self, epsilon: f32) -> bool {
        scalar::with_epsilon(self.r, other.r, epsilon)
            && scalar::with_epsilon(self.g, other.g, epsilon)
            && scalar::with_epsilon(self.b, other.b, epsilon)
            && scalar::with_epsilon(self.a, other.a, epsilon)
    }

    /// Formats as `#RRGGBBAA` with uppercase hex digits.
    pub fn to_hex_string(&self) -> String {
        format!(
            "#{}{}{}{}",
            scalar::to_hex(self.r),
            scalar::to_hex(self.g),
            scalar::to_hex(self.b),
            scalar::to_hex(self.a)
        )
    }

    /// Parses a `#RRGGBBAA` hex string.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHexColor`] on wrong length, missing `#`, or
    /// non-hex digits.
    pub fn from_hex_string(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 8 && d.is_ascii())
            .ok_or_else(|| Error::InvalidHexColor { input: hex.to_owned() })?;
        let channel = |range: std::ops::Range<usize>| -> Result<f32> {
            u8::from_str_radix(&digits[range], 16)
                .map(|byte| byte as f32 / 255.0)
                .map_err(|_| Error::InvalidHexColor { input: hex.to_owned() })
        };
        Ok(Self::new(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        ))
    }
}

impl Add for Color4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl Sub for Color4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.r - rhs.r,
            self.g - rhs.g,
            self.b - rhs.b,
            self.a - rhs.a,
        )
    }
}

impl Mul for Color4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
            self.a * rhs.a,
        )
    }
}

impl Mul<f32> for Color4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}
