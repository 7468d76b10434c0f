//! Preview sizing around a synthesis function
//!
//! A [`PreviewPanel`] does not know how textures are made; it is handed a
//! function from [`Dimensions`] to [`TextureBuffer`] and decides what size to
//! call it with. Previews are bounded, exports are rendered at full size.

use super::{Dimensions, TextureBuffer};

/// Default bound on the longer preview edge
pub const DEFAULT_PREVIEW_EDGE: u32 = 256;

pub struct PreviewPanel<F> {
    synth: F,
    max_edge: u32,
}

impl<F> PreviewPanel<F>
where
    F: Fn(Dimensions) -> TextureBuffer,
{
    pub fn new(synth: F) -> Self {
        Self {
            synth,
            max_edge: DEFAULT_PREVIEW_EDGE,
        }
    }

    pub fn with_max_edge(mut self, max_edge: u32) -> Self {
        self.max_edge = max_edge.max(1);
        self
    }

    pub fn max_edge(&self) -> u32 {
        self.max_edge
    }

    /// Scale `requested` down so its longer edge fits the bound
    ///
    /// Aspect ratio is kept (rounded down), neither edge drops below 1, and
    /// sizes already inside the bound are returned unchanged.
    pub fn preview_dimensions(&self, requested: Dimensions) -> Dimensions {
        let longest = requested.width.max(requested.height);
        if longest <= self.max_edge {
            return requested;
        }

        let scale = |edge: u32| -> u32 {
            let scaled = edge as u64 * self.max_edge as u64 / longest as u64;
            (scaled as u32).max(1)
        };
        let preview = Dimensions {
            width: scale(requested.width),
            height: scale(requested.height),
        };

        tracing::trace!(
            "Preview scaled {}x{} -> {}x{}",
            requested.width,
            requested.height,
            preview.width,
            preview.height
        );
        preview
    }

    pub fn render_preview(&self, requested: Dimensions) -> TextureBuffer {
        (self.synth)(self.preview_dimensions(requested))
    }

    pub fn render_export(&self, requested: Dimensions) -> TextureBuffer {
        (self.synth)(requested)
    }
}
