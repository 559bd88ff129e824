//! PNG output.

use anyhow::{Context, Result};
use ember_renderer::RenderConfig;
use image::RgbImage;
use log::info;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// File name describing the render settings, e.g.
/// `render_1024x576_500samples_100depth_1762093827.png`.
pub fn generate_filename(config: &RenderConfig, timestamp: u64) -> String {
    format!(
        "render_{}x{}_{}samples_{}depth_{}.png",
        config.image_width,
        config.image_height(),
        config.samples_per_pixel,
        config.max_depth,
        timestamp
    )
}

/// Seconds since the Unix epoch, or 0 if the clock is before it.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

/// Write tightly packed RGB bytes, top row first, as a PNG file.
pub fn save_png(path: &Path, width: u32, height: u32, rgb: Vec<u8>) -> Result<()> {
    let image = RgbImage::from_raw(width, height, rgb).with_context(|| {
        format!("pixel buffer does not hold {width}x{height} RGB pixels")
    })?;

    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!("Saved image to {}", path.display());
    Ok(())
}
