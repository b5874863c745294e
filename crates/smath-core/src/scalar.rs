//! Single-float utilities used throughout the smath crates.
//!
//! These are the leaf helpers the geometric types build on:
//!
//! - Clamping and interpolation ([`clamp`], [`saturate`], [`lerp`])
//! - Wrap-around arithmetic ([`repeat`], [`ping_pong`]) used by Euler-angle
//!   extraction to keep degrees in `[0, 360)`
//! - Angle unit conversion ([`degrees`], [`radians`])
//! - Hex channel formatting ([`to_hex`]) used by color string conversion
//!
//! # Usage
//!
//! ```rust
//! use smath_core::scalar;
//!
//! assert_eq!(scalar::lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(scalar::repeat(-90.0, 360.0), 270.0);
//! assert_eq!(scalar::to_hex(1.0), "FF");
//! ```

/// Factor converting degrees to radians (`PI / 180`).
pub const DEG2RAD: f32 = core::f32::consts::PI / 180.0;

/// Factor converting radians to degrees (`180 / PI`).
pub const RAD2DEG: f32 = 180.0 / core::f32::consts::PI;

/// Default tolerance for approximate comparisons.
pub const EPSILON: f32 = 1e-6;

/// Clamps a value to the range `[min, max]`.
///
/// # Example
///
/// ```rust
/// use smath_core::scalar::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Clamps a value to `[0, 1]`.
///
/// Shorthand for `clamp(value, 0.0, 1.0)`.
#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0` and `b` when `t = 1.0`. The amount is not
/// clamped, so values outside `[0, 1]` extrapolate.
///
/// # Example
///
/// ```rust
/// use smath_core::scalar::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t`.
/// Returns 0 when the range is degenerate.
///
/// # Example
///
/// ```rust
/// use smath_core::scalar::inverse_lerp;
///
/// assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
/// assert_eq!(inverse_lerp(3.0, 3.0, 7.0), 0.0);
/// ```
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() < 1e-10 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Wraps a value into `[0, length]` using a floor-based remainder.
///
/// Unlike the `%` operator this is correct for negative inputs, which is
/// what Euler-angle wrap-around needs:
///
/// ```rust
/// use smath_core::scalar::repeat;
///
/// assert_eq!(repeat(370.0, 360.0), 10.0);
/// assert_eq!(repeat(-90.0, 360.0), 270.0);
/// ```
#[inline]
pub fn repeat(value: f32, length: f32) -> f32 {
    clamp(value - (value / length).floor() * length, 0.0, length)
}

/// Bounces a value back and forth inside `[0, length]`.
///
/// # Example
///
/// ```rust
/// use smath_core::scalar::ping_pong;
///
/// assert_eq!(ping_pong(1.5, 1.0), 0.5);
/// assert_eq!(ping_pong(2.25, 1.0), 0.25);
/// ```
#[inline]
pub fn ping_pong(value: f32, length: f32) -> f32 {
    let t = repeat(value, length * 2.0);
    length - (t - length).abs()
}

/// Returns the sign of a value as `-1.0`, `0.0`, or `1.0`.
///
/// # Example
///
/// ```rust
/// use smath_core::scalar::sign;
///
/// assert_eq!(sign(-3.5), -1.0);
/// assert_eq!(sign(0.0), 0.0);
/// assert_eq!(sign(2.0), 1.0);
/// ```
#[inline]
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Converts degrees to radians.
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * DEG2RAD
}

/// Converts radians to degrees.
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * RAD2DEG
}

/// Returns true when `a` and `b` differ by at most `epsilon`.
///
/// # Example
///
/// ```rust
/// use smath_core::scalar::{with_epsilon, EPSILON};
///
/// assert!(with_epsilon(1.0, 1.0 + 1e-7, EPSILON));
/// assert!(!with_epsilon(1.0, 1.1, EPSILON));
/// ```
#[inline]
pub fn with_epsilon(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Formats a `[0, 1]` channel value as two uppercase hex digits.
///
/// The value is clamped, scaled to `0..=255`, and rounded before
/// formatting. Used by color hex-string conversion.
///
/// # Example
///
/// ```rust
/// use smath_core::scalar::to_hex;
///
/// assert_eq!(to_hex(0.0), "00");
/// assert_eq!(to_hex(0.5), "80");
/// assert_eq!(to_hex(1.0), "FF");
/// ```
#[inline]
pub fn to_hex(value: f32) -> String {
    let byte = (saturate(value) * 255.0).round() as u8;
    format!("{byte:02X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 8.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 8.0, 1.0), 8.0);
    }

    #[test]
    fn test_repeat_negative_input() {
        // Floor-based wrap, not `%`: negative angles land in [0, length].
        assert_eq!(repeat(-90.0, 360.0), 270.0);
        assert_eq!(repeat(-360.0, 360.0), 0.0);
        assert_eq!(repeat(-370.0, 360.0), 350.0);
    }

    #[test]
    fn test_ping_pong() {
        assert_eq!(ping_pong(0.5, 1.0), 0.5);
        assert_eq!(ping_pong(1.5, 1.0), 0.5);
    }

    #[test]
    fn test_sign_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(f32::MIN_POSITIVE), 1.0);
    }

    #[test]
    fn test_to_hex_bounds() {
        assert_eq!(to_hex(-1.0), "00");
        assert_eq!(to_hex(2.0), "FF");
        assert_eq!(to_hex(16.0 / 255.0), "10");
    }
}
