//! Evenly spaced color ramp
//!
//! A [`ColorRamp`] is an ordered list of colors spread evenly over `[0, 1]`.
//! With `N` colors there are `N - 1` segments of equal width, and color `k`
//! is hit exactly at `t = k / (N - 1)`.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Color returned by an empty ramp
pub const EMPTY_RAMP_COLOR: Color = Color::WHITE;

/// Piecewise-linear gradient over evenly spaced colors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorRamp {
    colors: Vec<Color>,
}

impl ColorRamp {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Mutable access for editors that rearrange stops between evaluations
    pub fn colors_mut(&mut self) -> &mut Vec<Color> {
        &mut self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Evaluate the ramp at `t` (clamped to `[0, 1]`)
    pub fn evaluate(&self, t: f32) -> Color {
        evaluate(&self.colors, t)
    }
}

impl From<Vec<Color>> for ColorRamp {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

/// Evaluate an evenly spaced list of colors at `t`
///
/// - no colors: [`EMPTY_RAMP_COLOR`]
/// - one color: that color everywhere
/// - otherwise: linear interpolation inside the segment containing `t`
pub fn evaluate(colors: &[Color], t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);

    match colors {
        [] => EMPTY_RAMP_COLOR,
        [only] => *only,
        _ => {
            let last = colors.len() - 1;
            let scaled = t * last as f32;
            let lower = (scaled.floor() as usize).min(last);
            let upper = (scaled.ceil() as usize).min(last);
            let fraction = scaled - lower as f32;
            colors[lower].lerp(colors[upper], fraction)
        }
    }
}
