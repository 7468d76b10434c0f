//! Floating-point colors and color space conversion
//!
//! All synthesis happens on [`Color`] values with channels conventionally in
//! `[0, 1]`. Values are only clamped when quantized to RGBA8 for output.

use serde::{Deserialize, Serialize};

/// Linear RGBA color with `f32` channels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    /// Transparent black
    pub const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same color with a different alpha
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Per-channel linear interpolation from `self` to `other`
    ///
    /// `t` is not clamped; callers clamp where the domain requires it.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
            a: lerp(self.a, other.a, t),
        }
    }

    /// Quantize to 8 bits per channel, clamping to `[0, 1]` first
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            unit_to_u8(self.r),
            unit_to_u8(self.g),
            unit_to_u8(self.b),
            unit_to_u8(self.a),
        ]
    }

    /// Expand an 8-bit color
    #[inline]
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::new(
            rgba[0] as f32 / 255.0,
            rgba[1] as f32 / 255.0,
            rgba[2] as f32 / 255.0,
            rgba[3] as f32 / 255.0,
        )
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// HSV to RGB conversion
///
/// `h` is a fraction of a full turn (`0.0` and `1.0` are both red), `s` and
/// `v` are in `[0, 1]`. The result is opaque.
#[inline]
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Color {
    let h = (h * 360.0).rem_euclid(360.0);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Color::rgb(r + m, g + m, b + m)
}

#[cfg(test)]
pub(crate) fn assert_color_eq(actual: Color, expected: Color) {
    const EPS: f32 = 1e-5;
    let close = (actual.r - expected.r).abs() < EPS
        && (actual.g - expected.g).abs() < EPS
        && (actual.b - expected.b).abs() < EPS
        && (actual.a - expected.a).abs() < EPS;
    assert!(close, "expected {:?}, got {:?}", expected, actual);
}
