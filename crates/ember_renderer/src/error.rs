//! Errors reported by the renderer before any work starts.

use thiserror::Error;

/// Invalid render settings. Rendering never starts when one of these is
/// returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    #[error("Image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Aspect ratio must be a positive finite number, got {0}")]
    InvalidAspectRatio(f32),

    #[error("At least one sample per pixel is required")]
    NoSamples,
}
