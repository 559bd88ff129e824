//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a fixed depth cutoff
//! - Point-light sampling on diffuse surfaces
//! - Anti-aliasing via jittered multi-sampling
//! - Clamping, square-root gamma and 8-bit quantization

use crate::{direct_lighting, Camera, Color, Hittable, Ray, RenderError, Scene};
use crate::sampling::gen_f32;
use ember_math::Interval;
use log::{debug, info};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Closest hit distance accepted along a ray. Excludes the surface a ray
/// was spawned from.
pub const MIN_HIT_DISTANCE: f32 = 0.001;

/// Effectively infinite ray length.
pub const MAX_HIT_DISTANCE: f32 = 1_000_000.0;

/// Channel range before quantization. The upper bound stays below 1 so that
/// `value * 256` truncates to at most 255.
const CHANNEL_RANGE: Interval = Interval::new(0.0, 0.999);

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub image_width: u32,
    /// Width / height
    pub aspect_ratio: f32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Apply square-root gamma before quantizing
    pub gamma_correction: bool,
    /// Whether to use sky gradient instead of solid background
    pub use_sky_gradient: bool,
    /// Background color when ray doesn't hit anything and the sky is off
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 600,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 100,
            max_depth: 50,
            gamma_correction: true,
            use_sky_gradient: true,
            background: Color::ZERO,
        }
    }
}

impl RenderConfig {
    /// Image height derived from width and aspect ratio (truncated).
    pub fn image_height(&self) -> u32 {
        (self.image_width as f32 / self.aspect_ratio) as u32
    }

    /// Check the settings before any rendering work starts.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(RenderError::InvalidAspectRatio(self.aspect_ratio));
        }

        let height = self.image_height();
        if self.image_width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: self.image_width,
                height,
            });
        }

        if self.samples_per_pixel == 0 {
            return Err(RenderError::NoSamples);
        }

        Ok(())
    }
}

/// Compute the color seen by a ray.
///
/// Diffuse hits add the direct contribution of every visible light on top
/// of the recursively traced bounce; mirrors and glass only get the bounce.
/// Paths are cut off after `depth` segments.
pub fn ray_color(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    // If we've exceeded max depth, return black (no light)
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = scene.hit(ray, Interval::new(MIN_HIT_DISTANCE, MAX_HIT_DISTANCE)) else {
        // Ray didn't hit anything - return background
        if config.use_sky_gradient {
            return sky_gradient(ray);
        }
        return config.background;
    };

    let material = rec.material;
    let direct = if material.is_diffuse() {
        material.base_color() * direct_lighting(scene, &rec)
    } else {
        Color::ZERO
    };

    match material.scatter(ray, &rec, rng) {
        Some(scatter) => {
            let indirect = ray_color(&scatter.scattered, scene, depth - 1, config, rng);
            direct + scatter.attenuation * indirect
        }
        // Ray was absorbed
        None => direct,
    }
}

/// Compute sky gradient background.
///
/// Blends white at the horizon-down direction into light blue straight up.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Tone map one linear channel to a byte.
#[inline]
fn channel_to_byte(value: f32, gamma: bool) -> u8 {
    // NaN would survive clamp; infinities clamp to the range ends
    let value = if value.is_nan() { 0.0 } else { value };
    let clamped = CHANNEL_RANGE.clamp(value);
    let mapped = if gamma { linear_to_gamma(clamped) } else { clamped };
    (mapped * 256.0) as u8
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb8(color: Color, gamma: bool) -> [u8; 3] {
    [
        channel_to_byte(color.x, gamma),
        channel_to_byte(color.y, gamma),
        channel_to_byte(color.z, gamma),
    ]
}

/// Render a single pixel with multi-sampling.
///
/// `row` counts from the bottom of the image, matching the camera's
/// viewport coordinates.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    col: u32,
    row: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let width_span = config.image_width.saturating_sub(1).max(1) as f32;
    let height_span = config.image_height().saturating_sub(1).max(1) as f32;
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        // Jitter within the pixel footprint
        let s = (col as f32 + gen_f32(rng)) / width_span;
        let t = (row as f32 + gen_f32(rng)) / height_span;

        let ray = camera.get_ray(s, t);
        let sample = ray_color(&ray, scene, config.max_depth, config, rng);

        // A degenerate sample is dropped rather than poisoning the average
        if sample.is_finite() {
            pixel_color += sample;
        }
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}

/// Linear-light image buffer, stored top row first.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y), y = 0 being the top row.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y), y = 0 being the top row.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Tone map to tightly packed RGB bytes, row-major, top row first.
    ///
    /// The result holds `width * height * 3` bytes.
    pub fn to_rgb8(&self, gamma: bool) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color, gamma));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded; the caller owns the random stream so a fixed seed gives
/// a reproducible image.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Result<ImageBuffer, RenderError> {
    config.validate()?;

    let width = config.image_width;
    let height = config.image_height();
    let mut image = ImageBuffer::new(width, height);

    info!(
        "Rendering {}x{} @ {} spp, max depth {} ({} objects, {} lights)",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth,
        scene.object_count(),
        scene.light_count()
    );
    let start = Instant::now();

    for y in 0..height {
        // Image rows run top to bottom, viewport rows bottom to top
        let row = height - 1 - y;
        debug!("Scanlines remaining: {}", row);

        for x in 0..width {
            let color = render_pixel(camera, scene, x, row, config, rng);
            image.set(x, y, color);
        }
    }

    info!("Rendered in {:.2?}", start.elapsed());
    Ok(image)
}
