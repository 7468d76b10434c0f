//! Multi-key gradient with explicit key positions
//!
//! Unlike [`ColorRamp`](super::ColorRamp), keys sit at arbitrary positions in
//! `[0, 1]`. Color and alpha are keyed independently, the same way the editor
//! gradient widget stores them.

use serde::{Deserialize, Serialize};

use super::color::{lerp, Color};
use crate::error::ConfigError;

/// How values between two keys are produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientMode {
    /// Linear interpolation between neighbouring keys
    #[default]
    Blend,
    /// Hold the value of the next key (step function)
    Fixed,
}

/// RGB key; the alpha channel of `color` is ignored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorKey {
    pub position: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaKey {
    pub position: f32,
    pub alpha: f32,
}

/// Gradient keyed by explicit positions
///
/// Keys are kept sorted by position. Outside the key range the nearest end
/// key is used. No color keys evaluates to white, no alpha keys to opaque.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawGradient")]
pub struct Gradient {
    color_keys: Vec<ColorKey>,
    alpha_keys: Vec<AlphaKey>,
    mode: GradientMode,
}

#[derive(Deserialize)]
struct RawGradient {
    #[serde(default)]
    color_keys: Vec<ColorKey>,
    #[serde(default)]
    alpha_keys: Vec<AlphaKey>,
    #[serde(default)]
    mode: GradientMode,
}

impl From<RawGradient> for Gradient {
    fn from(raw: RawGradient) -> Self {
        Gradient::new(raw.color_keys, raw.alpha_keys).with_mode(raw.mode)
    }
}

impl Gradient {
    pub fn new(mut color_keys: Vec<ColorKey>, mut alpha_keys: Vec<AlphaKey>) -> Self {
        color_keys.sort_by(|a, b| a.position.total_cmp(&b.position));
        alpha_keys.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self {
            color_keys,
            alpha_keys,
            mode: GradientMode::Blend,
        }
    }

    /// Build from `(position, color, alpha)` stops, one color and one alpha key each
    pub fn from_stops(stops: &[(f32, Color, f32)]) -> Self {
        let color_keys = stops
            .iter()
            .map(|&(position, color, _)| ColorKey { position, color })
            .collect();
        let alpha_keys = stops
            .iter()
            .map(|&(position, _, alpha)| AlphaKey { position, alpha })
            .collect();
        Self::new(color_keys, alpha_keys)
    }

    /// Two-key gradient from `start` at 0 to `end` at 1
    pub fn two_color(start: Color, end: Color) -> Self {
        Self::from_stops(&[(0.0, start, start.a), (1.0, end, end.a)])
    }

    pub fn with_mode(mut self, mode: GradientMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> GradientMode {
        self.mode
    }

    pub fn color_keys(&self) -> &[ColorKey] {
        &self.color_keys
    }

    pub fn alpha_keys(&self) -> &[AlphaKey] {
        &self.alpha_keys
    }

    /// Check every key position lies in `[0, 1]`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positions = self
            .color_keys
            .iter()
            .map(|k| k.position)
            .chain(self.alpha_keys.iter().map(|k| k.position));
        for position in positions {
            if !(0.0..=1.0).contains(&position) {
                return Err(ConfigError::KeyOutOfRange(position));
            }
        }
        Ok(())
    }

    /// Evaluate at `t` (clamped to `[0, 1]`)
    pub fn evaluate(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);

        let rgb = sample_keys(
            &self.color_keys,
            t,
            self.mode,
            |k| k.position,
            |k| k.color,
            |a, b, f| a.lerp(b, f),
        )
        .unwrap_or(Color::WHITE);

        let alpha = sample_keys(
            &self.alpha_keys,
            t,
            self.mode,
            |k| k.position,
            |k| k.alpha,
            lerp,
        )
        .unwrap_or(1.0);

        rgb.with_alpha(alpha)
    }
}

/// Find the pair of keys around `t` and combine them according to `mode`
fn sample_keys<K, V: Copy>(
    keys: &[K],
    t: f32,
    mode: GradientMode,
    position: impl Fn(&K) -> f32,
    value: impl Fn(&K) -> V,
    blend: impl Fn(V, V, f32) -> V,
) -> Option<V> {
    let first = keys.first()?;
    let last = keys.last()?;

    if t <= position(first) {
        return Some(value(first));
    }
    if t >= position(last) {
        return Some(value(last));
    }

    // First key strictly past t; it exists because t < position(last)
    let upper_idx = keys.iter().position(|k| position(k) > t)?;
    let upper = &keys[upper_idx];
    let lower = &keys[upper_idx - 1];

    match mode {
        GradientMode::Fixed => {
            if position(lower) == t {
                Some(value(lower))
            } else {
                Some(value(upper))
            }
        }
        GradientMode::Blend => {
            let span = position(upper) - position(lower);
            if span <= f32::EPSILON {
                return Some(value(upper));
            }
            let f = (t - position(lower)) / span;
            Some(blend(value(lower), value(upper), f))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::color::assert_color_eq;

    #[test]
    fn test_two_color_gradient() {
        let g = Gradient::two_color(Color::BLACK, Color::WHITE);
        assert_color_eq(g.evaluate(0.0), Color::BLACK);
        assert_color_eq(g.evaluate(0.5), Color::new(0.5, 0.5, 0.5, 1.0));
        assert_color_eq(g.evaluate(1.0), Color::WHITE);
    }

    #[test]
    fn test_clamped_at_ends() {
        let g = Gradient::from_stops(&[(0.25, Color::RED, 1.0), (0.75, Color::BLUE, 1.0)]);
        assert_color_eq(g.evaluate(0.0), Color::RED);
        assert_color_eq(g.evaluate(0.1), Color::RED);
        assert_color_eq(g.evaluate(0.9), Color::BLUE);
        assert_color_eq(g.evaluate(0.5), Color::RED.lerp(Color::BLUE, 0.5));
    }

    #[test]
    fn test_uneven_positions() {
        let g = Gradient::from_stops(&[
            (0.0, Color::BLACK, 1.0),
            (0.2, Color::WHITE, 1.0),
            (1.0, Color::BLACK, 1.0),
        ]);
        assert_color_eq(g.evaluate(0.1), Color::rgb(0.5, 0.5, 0.5));
        assert_color_eq(g.evaluate(0.6), Color::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_keys_sorted_on_construction() {
        let g = Gradient::from_stops(&[(1.0, Color::WHITE, 1.0), (0.0, Color::BLACK, 1.0)]);
        assert_eq!(g.color_keys()[0].position, 0.0);
        assert_color_eq(g.evaluate(0.0), Color::BLACK);
    }

    #[test]
    fn test_alpha_keyed_independently() {
        let g = Gradient::new(
            vec![ColorKey { position: 0.0, color: Color::RED }],
            vec![
                AlphaKey { position: 0.0, alpha: 0.0 },
                AlphaKey { position: 1.0, alpha: 1.0 },
            ],
        );
        assert_color_eq(g.evaluate(0.5), Color::new(1.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn test_empty_gradient_is_opaque_white() {
        assert_color_eq(Gradient::default().evaluate(0.3), Color::WHITE);
    }

    #[test]
    fn test_fixed_mode_steps() {
        let g = Gradient::from_stops(&[
            (0.0, Color::RED, 1.0),
            (0.5, Color::GREEN, 1.0),
            (1.0, Color::BLUE, 1.0),
        ])
        .with_mode(GradientMode::Fixed);
        assert_color_eq(g.evaluate(0.0), Color::RED);
        assert_color_eq(g.evaluate(0.25), Color::GREEN);
        assert_color_eq(g.evaluate(0.5), Color::GREEN);
        assert_color_eq(g.evaluate(0.75), Color::BLUE);
    }

    #[test]
    fn test_validate_rejects_out_of_range_key() {
        let g = Gradient::from_stops(&[(1.5, Color::RED, 1.0)]);
        assert!(matches!(g.validate(), Err(ConfigError::KeyOutOfRange(p)) if p == 1.5));
        assert!(Gradient::two_color(Color::RED, Color::BLUE).validate().is_ok());
    }

    #[test]
    fn test_deserialize_sorts_keys() {
        let g: Gradient = toml::from_str(
            r#"
            mode = "blend"
            color_keys = [
                { position = 1.0, color = [1.0, 1.0, 1.0, 1.0] },
                { position = 0.0, color = [0.0, 0.0, 0.0, 1.0] },
            ]
            "#,
        )
        .unwrap();
        assert_eq!(g.color_keys()[0].position, 0.0);
        assert!(g.alpha_keys().is_empty());
        assert_color_eq(g.evaluate(1.0), Color::WHITE);
    }
}
