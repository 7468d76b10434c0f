//! Configuration errors
//!
//! Synthesis itself cannot fail once its inputs are valid, so every error the
//! library reports is a rejected configuration.

/// Invalid texture configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Texture dimensions must be at least 1x1 (got {width}x{height})")]
    ZeroDimension { width: u32, height: u32 },

    #[error("Step count must be at least 1 (got {0})")]
    InvalidStepCount(u32),

    #[error("Checkerboard cells must be at least 1x1 (got {width}x{height})")]
    ZeroCellSize { width: u32, height: u32 },

    #[error("Gradient key position {0} is outside [0, 1]")]
    KeyOutOfRange(f32),
}
