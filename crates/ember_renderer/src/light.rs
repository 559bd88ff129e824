//! Point lights.

use ember_math::{Color, Point3};

/// An infinitely small emitter.
///
/// `intensity` is radiant power per channel; received light falls off with
/// the square of the distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Point3,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Point3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    /// White light with the same power on every channel.
    pub fn white(position: Point3, power: f32) -> Self {
        Self::new(position, Color::splat(power))
    }
}
