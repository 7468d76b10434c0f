//! Procedural texture synthesis
//!
//! Generates gradients, ramps, checkerboards, white noise and HSL wheels as
//! RGBA8 pixel buffers. Synthesis is a pure function of its configuration;
//! the only randomness (white noise) comes from an injected [`NoiseSource`].
//!
//! # Example
//! ```
//! use texgen::texture::*;
//!
//! let dims = Dimensions::new(128, 128)?;
//! let wheel = TextureKind::Gradient {
//!     mapping: SpatialMode::Angular { offset_degrees: 0.0 },
//!     shaping: ShapingConfig::stepped(8, true),
//!     source: ColorSource::ramp(vec![Color::RED, Color::GREEN, Color::BLUE]),
//! };
//! let tex = synthesize(dims, &wheel, &mut ConstantNoise(0.0));
//! assert_eq!(tex.pixels.len(), 128 * 128 * 4);
//!
//! // Reproducible white noise
//! let noise = TextureKind::Pattern {
//!     pattern: PatternSource::WhiteNoise { color_a: Color::BLACK, color_b: Color::WHITE },
//! };
//! let a = synthesize(dims, &noise, &mut RandomNoise::seeded(3));
//! let b = synthesize(dims, &noise, &mut RandomNoise::seeded(3));
//! assert_eq!(a, b);
//! # Ok::<(), texgen::ConfigError>(())
//! ```
//!
//! [`NoiseSource`]: texture::NoiseSource

pub mod config;
pub mod error;
pub mod texture;

pub use config::Recipe;
pub use error::ConfigError;
