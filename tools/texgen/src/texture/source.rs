//! Color sources
//!
//! Gradient-family sources ([`ColorSource`]) turn a shaped parameter `t` into
//! a color. Pattern sources ([`PatternSource`]) work from the pixel position
//! directly and skip mapping and shaping.

use serde::{Deserialize, Serialize};

use super::color::{hsv_to_rgb, Color};
use super::curve::ResponseCurve;
use super::gradient::Gradient;
use super::mapping::axis_fraction;
use super::noise::NoiseSource;
use super::ramp::ColorRamp;
use super::Dimensions;
use crate::error::ConfigError;

/// Color lookup driven by the gradient parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColorSource {
    /// Single color, `t` ignored
    Flat { color: Color },
    /// Gradient with positioned keys
    Gradient { gradient: Gradient },
    /// `t` remapped through `curve`, then looked up in `ramp`
    CurveRamp {
        #[serde(default = "ResponseCurve::linear")]
        curve: ResponseCurve,
        /// Scales the resulting alpha by `alpha_curve(t)` when present
        #[serde(default)]
        alpha_curve: Option<ResponseCurve>,
        ramp: ColorRamp,
    },
}

impl ColorSource {
    /// Plain evenly spaced ramp (linear response curve)
    pub fn ramp(colors: Vec<Color>) -> Self {
        ColorSource::CurveRamp {
            curve: ResponseCurve::linear(),
            alpha_curve: None,
            ramp: ColorRamp::new(colors),
        }
    }

    pub fn resolve(&self, t: f32) -> Color {
        match self {
            ColorSource::Flat { color } => *color,
            ColorSource::Gradient { gradient } => gradient.evaluate(t),
            ColorSource::CurveRamp {
                curve,
                alpha_curve,
                ramp,
            } => {
                let color = ramp.evaluate(curve.evaluate(t));
                match alpha_curve {
                    Some(alpha) => {
                        color.with_alpha((color.a * alpha.evaluate(t)).clamp(0.0, 1.0))
                    }
                    None => color,
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            ColorSource::Gradient { gradient } => gradient.validate(),
            ColorSource::Flat { .. } | ColorSource::CurveRamp { .. } => Ok(()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorSource::Flat { .. } => "flat",
            ColorSource::Gradient { .. } => "gradient",
            ColorSource::CurveRamp { .. } => "curve_ramp",
        }
    }
}

/// Position-driven pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PatternSource {
    /// Alternating cells; cell (0, 0) is `color_a`
    Checkerboard {
        cell_width: u32,
        cell_height: u32,
        color_a: Color,
        color_b: Color,
    },
    /// Independent uniform sample per pixel, blended from `color_a` to `color_b`
    WhiteNoise { color_a: Color, color_b: Color },
    /// Hue across x, lightness down y (black, full hue, white) at full saturation
    HslWheel,
}

impl PatternSource {
    pub fn checkerboard(cell_size: u32, color_a: Color, color_b: Color) -> Self {
        PatternSource::Checkerboard {
            cell_width: cell_size,
            cell_height: cell_size,
            color_a,
            color_b,
        }
    }

    /// Color at `(x, y)`; only white noise draws from `noise`
    pub fn resolve<N: NoiseSource + ?Sized>(
        &self,
        x: u32,
        y: u32,
        dims: Dimensions,
        noise: &mut N,
    ) -> Color {
        match self {
            PatternSource::Checkerboard {
                cell_width,
                cell_height,
                color_a,
                color_b,
            } => {
                let cell = x / (*cell_width).max(1) + y / (*cell_height).max(1);
                if cell % 2 == 0 { *color_a } else { *color_b }
            }
            PatternSource::WhiteNoise { color_a, color_b } => color_a.lerp(*color_b, noise.sample()),
            PatternSource::HslWheel => {
                let u = axis_fraction(x, dims.width);
                let v = axis_fraction(y, dims.height);
                let hue = hsv_to_rgb(u, 1.0, 1.0);
                if v < 0.5 {
                    Color::BLACK.lerp(hue, v * 2.0)
                } else {
                    hue.lerp(Color::WHITE, (v - 0.5) * 2.0)
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            PatternSource::Checkerboard {
                cell_width,
                cell_height,
                ..
            } if *cell_width == 0 || *cell_height == 0 => Err(ConfigError::ZeroCellSize {
                width: *cell_width,
                height: *cell_height,
            }),
            _ => Ok(()),
        }
    }

    /// Whether output depends on the noise source
    pub fn is_random(&self) -> bool {
        matches!(self, PatternSource::WhiteNoise { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            PatternSource::Checkerboard { .. } => "checkerboard",
            PatternSource::WhiteNoise { .. } => "white_noise",
            PatternSource::HslWheel => "hsl_wheel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::color::assert_color_eq;
    use crate::texture::curve::Keyframe;
    use crate::texture::noise::ConstantNoise;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    #[test]
    fn test_flat_ignores_t() {
        let c = Color::new(0.1, 0.2, 0.3, 0.4);
        let source = ColorSource::Flat { color: c };
        assert_eq!(source.resolve(0.0), c);
        assert_eq!(source.resolve(0.9), c);
    }

    #[test]
    fn test_gradient_source() {
        let source = ColorSource::Gradient {
            gradient: Gradient::two_color(Color::BLACK, Color::WHITE),
        };
        assert_color_eq(source.resolve(0.25), Color::rgb(0.25, 0.25, 0.25));
    }

    #[test]
    fn test_plain_ramp_matches_color_ramp() {
        let colors = vec![Color::RED, Color::GREEN, Color::BLUE];
        let ramp = ColorRamp::new(colors.clone());
        let source = ColorSource::ramp(colors);
        for t in [0.0, 0.25, 0.5, 0.9, 1.0] {
            assert_color_eq(source.resolve(t), ramp.evaluate(t));
        }
    }

    #[test]
    fn test_curve_remaps_before_ramp() {
        let source = ColorSource::CurveRamp {
            curve: ResponseCurve::constant(1.0),
            alpha_curve: None,
            ramp: ColorRamp::new(vec![Color::BLACK, Color::WHITE]),
        };
        assert_color_eq(source.resolve(0.0), Color::WHITE);
    }

    #[test]
    fn test_alpha_curve_scales_alpha() {
        let source = ColorSource::CurveRamp {
            curve: ResponseCurve::linear(),
            alpha_curve: Some(ResponseCurve::new(vec![
                Keyframe::new(0.0, 0.0).with_tangents(1.0, 1.0),
                Keyframe::new(1.0, 1.0).with_tangents(1.0, 1.0),
            ])),
            ramp: ColorRamp::new(vec![Color::RED]),
        };
        assert_color_eq(source.resolve(0.5), Color::new(1.0, 0.0, 0.0, 0.5));
        assert_color_eq(source.resolve(0.0), Color::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_alpha_curve_result_clamped() {
        let source = ColorSource::CurveRamp {
            curve: ResponseCurve::linear(),
            alpha_curve: Some(ResponseCurve::constant(3.0)),
            ramp: ColorRamp::new(vec![Color::WHITE]),
        };
        assert_eq!(source.resolve(0.5).a, 1.0);
    }

    #[test]
    fn test_checkerboard_single_pixel_cells() {
        let pattern = PatternSource::checkerboard(1, Color::WHITE, Color::BLACK);
        let d = dims(4, 4);
        let mut noise = ConstantNoise(0.0);
        for y in 0..4 {
            for x in 0..4 {
                let expected = if (x + y) % 2 == 0 { Color::WHITE } else { Color::BLACK };
                assert_eq!(pattern.resolve(x, y, d, &mut noise), expected);
            }
        }
    }

    #[test]
    fn test_checkerboard_rectangular_cells() {
        let pattern = PatternSource::Checkerboard {
            cell_width: 4,
            cell_height: 2,
            color_a: Color::RED,
            color_b: Color::BLUE,
        };
        let d = dims(8, 8);
        let mut noise = ConstantNoise(0.0);
        assert_eq!(pattern.resolve(3, 1, d, &mut noise), Color::RED);
        assert_eq!(pattern.resolve(4, 0, d, &mut noise), Color::BLUE);
        assert_eq!(pattern.resolve(0, 2, d, &mut noise), Color::BLUE);
        assert_eq!(pattern.resolve(7, 3, d, &mut noise), Color::RED);
    }

    #[test]
    fn test_white_noise_blends_by_sample() {
        let pattern = PatternSource::WhiteNoise {
            color_a: Color::BLACK,
            color_b: Color::WHITE,
        };
        let d = dims(2, 2);
        let c = pattern.resolve(0, 0, d, &mut ConstantNoise(0.75));
        assert_color_eq(c, Color::rgb(0.75, 0.75, 0.75));
        assert!(pattern.is_random());
    }

    #[test]
    fn test_hsl_wheel_rows() {
        let d = dims(5, 5);
        let mut noise = ConstantNoise(0.0);
        // Top row black, bottom row white, middle row full hue
        assert_color_eq(PatternSource::HslWheel.resolve(3, 0, d, &mut noise), Color::BLACK);
        assert_color_eq(PatternSource::HslWheel.resolve(1, 4, d, &mut noise), Color::WHITE);
        assert_color_eq(PatternSource::HslWheel.resolve(0, 2, d, &mut noise), Color::RED);
        assert_color_eq(PatternSource::HslWheel.resolve(4, 2, d, &mut noise), Color::RED);
    }

    #[test]
    fn test_hsl_wheel_quarter_lightness() {
        let d = dims(5, 5);
        let c = PatternSource::HslWheel.resolve(0, 1, d, &mut ConstantNoise(0.0));
        assert_color_eq(c, Color::rgb(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_validate_zero_cell() {
        let pattern = PatternSource::Checkerboard {
            cell_width: 0,
            cell_height: 3,
            color_a: Color::RED,
            color_b: Color::BLUE,
        };
        assert!(matches!(
            pattern.validate(),
            Err(ConfigError::ZeroCellSize { width: 0, height: 3 })
        ));
        assert!(PatternSource::HslWheel.validate().is_ok());
    }

    #[test]
    fn test_deserialize_tagged_variants() {
        let source: ColorSource = toml::from_str(
            r#"
            type = "curve_ramp"
            ramp = [[0.0, 0.0, 0.0, 1.0], [1.0, 1.0, 1.0, 1.0]]
            "#,
        )
        .unwrap();
        assert_color_eq(source.resolve(0.5), Color::rgb(0.5, 0.5, 0.5));

        let pattern: PatternSource = toml::from_str(r#"type = "hsl_wheel""#).unwrap();
        assert_eq!(pattern, PatternSource::HslWheel);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let result: Result<PatternSource, _> = toml::from_str(r#"type = "plasma""#);
        assert!(result.is_err());
    }
}
