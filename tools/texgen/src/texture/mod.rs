//! Procedural texture synthesis
//!
//! A texture is either a gradient (pixel position mapped to `t`, `t` shaped,
//! then looked up in a color source) or a pattern that colors each pixel from
//! its position directly.
//!
//! # Example
//! ```
//! use texgen::texture::*;
//!
//! let dims = Dimensions::new(64, 8)?;
//! let kind = TextureKind::Gradient {
//!     mapping: SpatialMode::AxisX,
//!     shaping: ShapingConfig::stepped(4, false),
//!     source: ColorSource::ramp(vec![Color::BLACK, Color::WHITE]),
//! };
//! let tex = synthesize(dims, &kind, &mut ConstantNoise(0.0));
//! assert_eq!(tex.get_pixel(0, 0), [0, 0, 0, 255]);
//! assert_eq!(tex.get_pixel(63, 0), [255, 255, 255, 255]);
//! # Ok::<(), texgen::ConfigError>(())
//! ```

mod color;
mod curve;
mod gradient;
mod mapping;
mod noise;
mod preview;
mod ramp;
mod shaping;
mod source;
mod synth;

// Core types
pub use self::buffer::{Dimensions, TextureBuffer};
pub use color::{hsv_to_rgb, Color};

// Color evaluation
pub use curve::{Keyframe, ResponseCurve};
pub use gradient::{AlphaKey, ColorKey, Gradient, GradientMode};
pub use ramp::{ColorRamp, EMPTY_RAMP_COLOR};

// Pipeline stages
pub use mapping::SpatialMode;
pub use shaping::ShapingConfig;
pub use source::{ColorSource, PatternSource};

// Randomness
pub use noise::{ConstantNoise, NoiseSource, RandomNoise};

// Synthesis
pub use preview::{PreviewPanel, DEFAULT_PREVIEW_EDGE};
pub use synth::{synthesize, synthesize_parallel, TextureKind, TextureSynthesizer};

mod buffer {
    use super::Color;
    use crate::error::ConfigError;

    /// Size of a texture, both edges at least 1
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Dimensions {
        pub(super) width: u32,
        pub(super) height: u32,
    }

    impl Dimensions {
        pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
            if width == 0 || height == 0 {
                return Err(ConfigError::ZeroDimension { width, height });
            }
            Ok(Self { width, height })
        }

        #[inline]
        pub fn width(&self) -> u32 {
            self.width
        }

        #[inline]
        pub fn height(&self) -> u32 {
            self.height
        }

        #[inline]
        pub fn pixel_count(&self) -> usize {
            self.width as usize * self.height as usize
        }
    }

    /// RGBA8 texture buffer produced by synthesis
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct TextureBuffer {
        /// Width in pixels
        pub width: u32,
        /// Height in pixels
        pub height: u32,
        /// RGBA pixel data (4 bytes per pixel, row-major order)
        pub pixels: Vec<u8>,
    }

    impl TextureBuffer {
        /// Create a new texture buffer initialized to transparent black
        pub fn new(dims: Dimensions) -> Self {
            Self {
                width: dims.width,
                height: dims.height,
                pixels: vec![0u8; dims.pixel_count() * 4],
            }
        }

        /// Quantize row-major float colors into a buffer
        ///
        /// `colors` must hold exactly one entry per pixel.
        pub fn from_colors(dims: Dimensions, colors: &[Color]) -> Self {
            debug_assert_eq!(colors.len(), dims.pixel_count());
            Self {
                width: dims.width,
                height: dims.height,
                pixels: colors.iter().flat_map(|c| c.to_rgba8()).collect(),
            }
        }

        pub fn dimensions(&self) -> Dimensions {
            Dimensions {
                width: self.width,
                height: self.height,
            }
        }

        /// Get pixel at (x, y)
        #[inline]
        pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
            let idx = self.index(x, y);
            [
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            ]
        }

        /// Set pixel at (x, y)
        #[inline]
        pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
            let idx = self.index(x, y);
            self.pixels[idx..idx + 4].copy_from_slice(&color);
        }

        /// Iterate rows of RGBA bytes, top to bottom
        pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
            self.pixels.chunks_exact(self.width as usize * 4)
        }

        #[inline]
        fn index(&self, x: u32, y: u32) -> usize {
            (y as usize * self.width as usize + x as usize) * 4
        }
    }
}
