//! Post-processing of the gradient parameter: quantization and flip

use serde::{Deserialize, Serialize};

/// How the mapped `t` is reshaped before color lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapingConfig {
    /// Mirror the result (`1 - t`), applied after quantization
    pub flip: bool,
    /// Quantize into `step_count` levels
    pub discrete_steps: bool,
    /// Number of levels; values below 1 are treated as 1
    pub step_count: u32,
    /// Circular levels are `k / n` (no level at 1) so they tile around a wheel
    pub circular: bool,
}

impl Default for ShapingConfig {
    fn default() -> Self {
        Self {
            flip: false,
            discrete_steps: false,
            step_count: 4,
            circular: false,
        }
    }
}

impl ShapingConfig {
    /// Continuous shaping, optionally flipped
    pub fn continuous(flip: bool) -> Self {
        Self {
            flip,
            ..Default::default()
        }
    }

    /// Quantize into `step_count` levels
    pub fn stepped(step_count: u32, circular: bool) -> Self {
        Self {
            discrete_steps: true,
            step_count,
            circular,
            ..Default::default()
        }
    }

    pub fn flipped(mut self) -> Self {
        self.flip = true;
        self
    }

    /// Apply quantization, then flip
    pub fn shape(&self, t: f32) -> f32 {
        let shaped = if self.discrete_steps {
            quantize(t, self.step_count, self.circular)
        } else {
            t
        };

        if self.flip { 1.0 - shaped } else { shaped }
    }
}

fn quantize(t: f32, step_count: u32, circular: bool) -> f32 {
    let steps = step_count.max(1);
    if steps == 1 {
        return 0.0;
    }

    let scaled = t * steps as f32;
    let index = (scaled.floor().max(0.0) as u32).min(steps - 1);
    let denominator = if circular { steps } else { steps - 1 };
    index as f32 / denominator as f32
}
