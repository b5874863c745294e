//! RGB color value.

use std::ops::{Add, Mul, Sub};

use smath_core::{scalar, Error, Result};

/// An RGB color with `f32` channels in nominal `[0, 1]` range.
///
/// Arithmetic is channel-wise and unclamped; use [`clamp01`](Self::clamp01)
/// before quantizing to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Color3 {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Color3 {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Red (1, 0, 0).
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    /// Green (0, 1, 0).
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    /// Blue (0, 0, 1).
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    /// Mid gray (0.5, 0.5, 0.5).
    pub const GRAY: Self = Self::new(0.5, 0.5, 0.5);

    /// Creates a color from channel values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// The channels as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Each channel clamped to `[0, 1]`.
    #[inline]
    pub fn clamp01(self) -> Self {
        Self::new(
            scalar::saturate(self.r),
            scalar::saturate(self.g),
            scalar::saturate(self.b),
        )
    }

    /// Linear interpolation between `self` (t = 0) and `other` (t = 1);
    /// `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            scalar::lerp(self.r, other.r, t),
            scalar::lerp(self.g, other.g, t),
            scalar::lerp(self.b, other.b, t),
        )
    }

    /// Every channel multiplied by `value`.
    #[inline]
    pub fn scale(self, value: f32) -> Self {
        Self::new(self.r * value, self.g * value, self.b * value)
    }

    /// Channel-wise comparison within `epsilon`.
    #[inline]
    pub fn equals_with_epsilon(self, other: Self, epsilon: f32) -> bool {
        scalar::with_epsilon(self.r, other.r, epsilon)
            && scalar::with_epsilon(self.g, other.g, epsilon)
            && scalar::with_epsilon(self.b, other.b, epsilon)
    }

    /// Formats as `#RRGGBB` with uppercase hex digits. Channels are
    /// clamped and rounded to bytes.
    ///
    /// ```rust
    /// use smath_color::Color3;
    /// assert_eq!(Color3::RED.to_hex_string(), "#FF0000");
    /// ```
    pub fn to_hex_string(&self) -> String {
        format!(
            "#{}{}{}",
            scalar::to_hex(self.r),
            scalar::to_hex(self.g),
            scalar::to_hex(self.b)
        )
    }

    /// Parses a `#RRGGBB` hex string (leading `#` required, digits in
    /// either case).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHexColor`] on wrong length, missing `#`, or
    /// non-hex digits.
    pub fn from_hex_string(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.is_ascii())
            .ok_or_else(|| Error::InvalidHexColor { input: hex.to_owned() })?;
        let channel = |range: std::ops::Range<usize>| -> Result<f32> {
            u8::from_str_radix(&digits[range], 16)
                .map(|byte| byte as f32 / 255.0)
                .map_err(|_| Error::InvalidHexColor { input: hex.to_owned() })
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Add for Color3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Color3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul for Color3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f32> for Color3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let c = Color3::new(1.0, 0.5, 0.25);
        let hex = c.to_hex_string();
        assert_eq!(hex, "#FF8040");
        let back = Color3::from_hex_string(&hex).unwrap();
        assert!(back.equals_with_epsilon(c, 1.0 / 255.0));
    }

    #[test]
    fn test_hex_lowercase_accepted() {
        let c = Color3::from_hex_string("#ff8040").unwrap();
        assert_eq!(c.to_hex_string(), "#FF8040");
    }

    #[test]
    fn test_hex_rejects_malformed() {
        for bad in ["FF8040", "#FF80", "#GG0000", "#FF8040AA", "", "#€€"] {
            let err = Color3::from_hex_string(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidHexColor { .. }), "{bad}");
        }
    }

    #[test]
    fn test_hex_clamps_out_of_range() {
        assert_eq!(Color3::new(2.0, -1.0, 0.0).to_hex_string(), "#FF0000");
    }

    #[test]
    fn test_channel_arithmetic() {
        let a = Color3::new(0.2, 0.4, 0.6);
        let b = Color3::new(0.1, 0.1, 0.1);
        assert!((a + b).equals_with_epsilon(Color3::new(0.3, 0.5, 0.7), 1e-6));
        assert!((a - b).equals_with_epsilon(Color3::new(0.1, 0.3, 0.5), 1e-6));
        assert!((a * Color3::GRAY).equals_with_epsilon(Color3::new(0.1, 0.2, 0.3), 1e-6));
        assert!((a * 2.0).equals_with_epsilon(Color3::new(0.4, 0.8, 1.2), 1e-6));
    }

    #[test]
    fn test_lerp_and_clamp() {
        let mid = Color3::BLACK.lerp(Color3::WHITE, 0.5);
        assert_eq!(mid, Color3::GRAY);

        let over = Color3::WHITE.scale(3.0).clamp01();
        assert_eq!(over, Color3::WHITE);
    }
}
