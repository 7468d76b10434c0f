//! Pixel position to gradient parameter mapping
//!
//! Turns `(x, y)` inside an image into the scalar `t` that drives the
//! gradient-family color sources.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::Dimensions;

/// Spatial layout of a gradient
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SpatialMode {
    /// Left (0) to right (1)
    #[default]
    AxisX,
    /// Top (0) to bottom (1)
    AxisY,
    /// Distance from the center; 1 at edge midpoints, about 1.414 at corners
    Radial,
    /// Angle around the center as a fraction of a turn, in `[0, 1)`
    Angular {
        #[serde(default)]
        offset_degrees: f32,
    },
}

impl SpatialMode {
    /// Map a pixel to its gradient parameter
    ///
    /// Axis results lie in `[0, 1]`, radial results are unbounded above and
    /// clamped later by shaping or color lookup, angular results are wrapped
    /// into `[0, 1)`.
    pub fn map(&self, x: u32, y: u32, dims: Dimensions) -> f32 {
        match *self {
            SpatialMode::AxisX => axis_fraction(x, dims.width),
            SpatialMode::AxisY => axis_fraction(y, dims.height),
            SpatialMode::Radial => {
                let dx = axis_fraction(x, dims.width) - 0.5;
                let dy = axis_fraction(y, dims.height) - 0.5;
                2.0 * (dx * dx + dy * dy).sqrt()
            }
            SpatialMode::Angular { offset_degrees } => {
                let dx = x as f32 - dims.width as f32 / 2.0;
                let dy = y as f32 - dims.height as f32 / 2.0;
                wrap_unit(dy.atan2(dx) / TAU + offset_degrees / 360.0)
            }
        }
    }
}

/// `i / (extent - 1)`, with a single-pixel extent mapping to 0
#[inline]
pub(crate) fn axis_fraction(i: u32, extent: u32) -> f32 {
    let max = extent.saturating_sub(1).max(1) as f32;
    i as f32 / max
}

/// Floor-based modulo into `[0, 1)`
#[inline]
fn wrap_unit(v: f32) -> f32 {
    let wrapped = v - v.floor();
    // Tiny negative inputs round up to exactly 1.0
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}
