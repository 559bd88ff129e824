//! Ember math types.
//!
//! Vectors come straight from glam. A single `Vec3` type doubles as point,
//! direction and linear RGB color; the aliases only document intent.

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// A position in world space.
pub type Point3 = Vec3;

/// Linear RGB color. Channels are not bounded to [0, 1] before tone mapping.
pub type Color = Vec3;

/// Threshold below which a vector component counts as zero.
pub const NEAR_ZERO_EPSILON: f32 = 1e-8;

/// Returns true if every component of `v` is within [`NEAR_ZERO_EPSILON`] of zero.
#[inline]
pub fn is_near_zero(v: Vec3) -> bool {
    v.abs().cmplt(Vec3::splat(NEAR_ZERO_EPSILON)).all()
}

/// Component of `v` along `axis` (0 = X, 1 = Y, 2 = Z).
#[inline]
pub fn axis_component(v: Vec3, axis: usize) -> f32 {
    match axis {
        0 => v.x,
        1 => v.y,
        _ => v.z,
    }
}
