//! Texture recipe parsing
//!
//! A recipe is a small TOML document describing one texture: its size, an
//! optional noise seed, and the [`TextureKind`] to synthesize.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::texture::{Dimensions, NoiseSource, RandomNoise, TextureKind};

/// Top-level recipe document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub texture: TextureSection,
}

/// `[texture]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureSection {
    pub width: u32,
    pub height: u32,

    /// Seed for white noise.
    /// Default: none (a fresh random image on every render)
    #[serde(default)]
    pub seed: Option<u64>,

    pub kind: TextureKind,
}

impl Recipe {
    /// Load recipe from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid recipe: {}", path.display()))
    }

    /// Parse recipe from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse recipe TOML")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize recipe")
    }

    pub fn dimensions(&self) -> Result<Dimensions, ConfigError> {
        Dimensions::new(self.texture.width, self.texture.height)
    }

    /// Validate size and texture parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dimensions()?;
        self.texture.kind.validate()
    }

    /// Noise source honoring the recipe seed, or `seed_override` when given
    pub fn noise(&self, seed_override: Option<u64>) -> Box<dyn NoiseSource> {
        match seed_override.or(self.texture.seed) {
            Some(seed) => Box::new(RandomNoise::seeded(seed)),
            None => Box::new(RandomNoise::thread()),
        }
    }
}
