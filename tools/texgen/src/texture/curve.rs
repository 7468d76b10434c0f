//! Scalar response curves
//!
//! A [`ResponseCurve`] remaps a parameter through user-placed keyframes with
//! tangents, evaluated as cubic Hermite segments. Used by the curve + ramp
//! color source to reshape `t` before the ramp lookup.

use serde::{Deserialize, Serialize};

/// Curve keyframe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    /// Slope arriving at this key
    #[serde(default)]
    pub in_tangent: f32,
    /// Slope leaving this key
    #[serde(default)]
    pub out_tangent: f32,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    pub fn with_tangents(mut self, in_tangent: f32, out_tangent: f32) -> Self {
        self.in_tangent = in_tangent;
        self.out_tangent = out_tangent;
        self
    }
}

/// Keyframed scalar curve
///
/// Outside the key range the curve holds the first or last value. A curve
/// without keys passes its input through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct ResponseCurve {
    keys: Vec<Keyframe>,
}

impl From<Vec<Keyframe>> for ResponseCurve {
    fn from(keys: Vec<Keyframe>) -> Self {
        Self::new(keys)
    }
}

impl From<ResponseCurve> for Vec<Keyframe> {
    fn from(curve: ResponseCurve) -> Self {
        curve.keys
    }
}

impl ResponseCurve {
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    /// Straight line from (0, 0) to (1, 1)
    pub fn linear() -> Self {
        Self::new(vec![
            Keyframe::new(0.0, 0.0).with_tangents(1.0, 1.0),
            Keyframe::new(1.0, 1.0).with_tangents(1.0, 1.0),
        ])
    }

    /// Flat curve at `value`
    pub fn constant(value: f32) -> Self {
        Self::new(vec![Keyframe::new(0.0, value), Keyframe::new(1.0, value)])
    }

    /// S-curve from (0, 0) to (1, 1) with flat ends
    pub fn ease_in_out() -> Self {
        Self::new(vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 1.0)])
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return t;
        };

        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        for pair in self.keys.windows(2) {
            let (k0, k1) = (&pair[0], &pair[1]);
            if t <= k1.time {
                return hermite(k0, k1, t);
            }
        }
        last.value
    }
}

fn hermite(k0: &Keyframe, k1: &Keyframe, t: f32) -> f32 {
    let dt = k1.time - k0.time;
    if dt <= f32::EPSILON {
        return k1.value;
    }

    let s = (t - k0.time) / dt;
    let s2 = s * s;
    let s3 = s2 * s;

    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;

    h00 * k0.value + h10 * dt * k0.out_tangent + h01 * k1.value + h11 * dt * k1.in_tangent
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_linear_is_identity_on_unit_range() {
        let curve = ResponseCurve::linear();
        for t in [0.0, 0.1, 0.25, 0.5, 0.9, 1.0] {
            assert!(approx(curve.evaluate(t), t), "t={}", t);
        }
    }

    #[test]
    fn test_constant() {
        let curve = ResponseCurve::constant(0.3);
        assert!(approx(curve.evaluate(0.0), 0.3));
        assert!(approx(curve.evaluate(0.6), 0.3));
    }

    #[test]
    fn test_ease_in_out_is_smoothstep() {
        let curve = ResponseCurve::ease_in_out();
        assert!(approx(curve.evaluate(0.5), 0.5));
        assert!(approx(curve.evaluate(0.25), 0.15625));
        assert!(curve.evaluate(0.1) < 0.1);
        assert!(curve.evaluate(0.9) > 0.9);
    }

    #[test]
    fn test_holds_end_values_outside_range() {
        let curve = ResponseCurve::new(vec![Keyframe::new(0.2, 0.4), Keyframe::new(0.8, 0.6)]);
        assert!(approx(curve.evaluate(0.0), 0.4));
        assert!(approx(curve.evaluate(1.0), 0.6));
    }

    #[test]
    fn test_empty_curve_passes_through() {
        let curve = ResponseCurve::default();
        assert!(approx(curve.evaluate(0.42), 0.42));
    }

    #[test]
    fn test_keys_hit_exactly() {
        let curve = ResponseCurve::new(vec![
            Keyframe::new(1.0, 0.0),
            Keyframe::new(0.0, 1.0),
            Keyframe::new(0.5, 0.2),
        ]);
        assert!(approx(curve.evaluate(0.0), 1.0));
        assert!(approx(curve.evaluate(0.5), 0.2));
        assert!(approx(curve.evaluate(1.0), 0.0));
    }

    #[test]
    fn test_deserialize_from_key_list() {
        #[derive(Deserialize)]
        struct Wrapper {
            curve: ResponseCurve,
        }
        let w: Wrapper = toml::from_str(
            r#"
            curve = [
                { time = 0.0, value = 1.0 },
                { time = 1.0, value = 0.0 },
            ]
            "#,
        )
        .unwrap();
        assert!(approx(w.curve.evaluate(0.5), 0.5));
    }
}
