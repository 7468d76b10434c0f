//! Texture synthesis driver
//!
//! Walks every pixel in row-major order and composes mapping, shaping and
//! color lookup (gradients), or hands the position straight to a pattern.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::mapping::SpatialMode;
use super::noise::NoiseSource;
use super::shaping::ShapingConfig;
use super::source::{ColorSource, PatternSource};
use super::{Dimensions, TextureBuffer};
use crate::error::ConfigError;

/// What to synthesize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextureKind {
    /// Position mapped to `t`, shaped, then colored
    Gradient {
        #[serde(default)]
        mapping: SpatialMode,
        #[serde(default)]
        shaping: ShapingConfig,
        source: ColorSource,
    },
    /// Position colored directly
    Pattern { pattern: PatternSource },
}

impl TextureKind {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            TextureKind::Gradient {
                shaping, source, ..
            } => {
                if shaping.discrete_steps && shaping.step_count < 1 {
                    return Err(ConfigError::InvalidStepCount(shaping.step_count));
                }
                source.validate()
            }
            TextureKind::Pattern { pattern } => pattern.validate(),
        }
    }

    /// Whether two renders of this kind can differ
    pub fn is_random(&self) -> bool {
        match self {
            TextureKind::Gradient { .. } => false,
            TextureKind::Pattern { pattern } => pattern.is_random(),
        }
    }

    /// Short human-readable label, e.g. `gradient/curve_ramp`
    pub fn label(&self) -> String {
        match self {
            TextureKind::Gradient { source, .. } => format!("gradient/{}", source.name()),
            TextureKind::Pattern { pattern } => format!("pattern/{}", pattern.name()),
        }
    }
}

/// Renders one [`TextureKind`] at a fixed size
#[derive(Debug, Clone, Copy)]
pub struct TextureSynthesizer<'a> {
    dims: Dimensions,
    kind: &'a TextureKind,
}

impl<'a> TextureSynthesizer<'a> {
    pub fn new(dims: Dimensions, kind: &'a TextureKind) -> Self {
        if let TextureKind::Gradient { shaping, .. } = kind {
            if shaping.discrete_steps && shaping.step_count < 1 {
                tracing::warn!(
                    "Step count {} is below 1, quantizing to a single level",
                    shaping.step_count
                );
            }
        }
        Self { dims, kind }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Color of a single pixel
    #[inline]
    pub fn pixel<N: NoiseSource + ?Sized>(&self, x: u32, y: u32, noise: &mut N) -> Color {
        match self.kind {
            TextureKind::Gradient {
                mapping,
                shaping,
                source,
            } => {
                let t = shaping.shape(mapping.map(x, y, self.dims));
                source.resolve(t)
            }
            TextureKind::Pattern { pattern } => pattern.resolve(x, y, self.dims, noise),
        }
    }

    /// Unquantized colors, row-major
    pub fn colors<N: NoiseSource + ?Sized>(&self, noise: &mut N) -> Vec<Color> {
        let mut out = Vec::with_capacity(self.dims.pixel_count());
        for y in 0..self.dims.height {
            for x in 0..self.dims.width {
                out.push(self.pixel(x, y, noise));
            }
        }
        out
    }

    /// Render into an RGBA8 buffer on the calling thread
    pub fn render<N: NoiseSource + ?Sized>(&self, noise: &mut N) -> TextureBuffer {
        tracing::debug!(
            "Synthesizing {} texture at {}x{}",
            self.kind.label(),
            self.dims.width,
            self.dims.height
        );

        let mut buffer = TextureBuffer::new(self.dims);
        for y in 0..self.dims.height {
            for x in 0..self.dims.width {
                buffer.set_pixel(x, y, self.pixel(x, y, noise).to_rgba8());
            }
        }
        buffer
    }

    /// Render rows in parallel
    ///
    /// Each worker gets its own noise source from `make_noise`. Deterministic
    /// kinds produce exactly the same buffer as [`render`](Self::render).
    pub fn render_parallel<F, N>(&self, make_noise: F) -> TextureBuffer
    where
        F: Fn() -> N + Sync + Send,
        N: NoiseSource,
    {
        tracing::debug!(
            "Synthesizing {} texture at {}x{} (parallel)",
            self.kind.label(),
            self.dims.width,
            self.dims.height
        );

        let mut buffer = TextureBuffer::new(self.dims);
        let row_bytes = self.dims.width as usize * 4;

        buffer
            .pixels
            .par_chunks_mut(row_bytes)
            .enumerate()
            .for_each_init(&make_noise, |noise, (y, row)| {
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    let color = self.pixel(x as u32, y as u32, noise);
                    px.copy_from_slice(&color.to_rgba8());
                }
            });

        buffer
    }
}

/// Synthesize `kind` at `dims` on the calling thread
pub fn synthesize<N: NoiseSource + ?Sized>(
    dims: Dimensions,
    kind: &TextureKind,
    noise: &mut N,
) -> TextureBuffer {
    TextureSynthesizer::new(dims, kind).render(noise)
}

/// Synthesize `kind` at `dims` with rows spread over the rayon pool
pub fn synthesize_parallel<F, N>(dims: Dimensions, kind: &TextureKind, make_noise: F) -> TextureBuffer
where
    F: Fn() -> N + Sync + Send,
    N: NoiseSource,
{
    TextureSynthesizer::new(dims, kind).render_parallel(make_noise)
}
