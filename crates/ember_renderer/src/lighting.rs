//! Direct lighting from point lights (next event estimation).

use crate::{HitRecord, Hittable, Scene};
use ember_math::{Color, Interval, Ray};

/// Offset applied to shadow ray origins and range ends to keep a surface
/// from shadowing itself.
pub const SHADOW_BIAS: f32 = 0.001;

/// Irradiance arriving at `rec.p` from every visible point light.
///
/// Each unoccluded light in front of the surface contributes
/// `n·l * intensity / distance²`. Shadows are binary. The result is not yet
/// multiplied by the surface albedo.
pub fn direct_lighting(scene: &Scene, rec: &HitRecord) -> Color {
    let mut accumulated = Color::ZERO;

    for light in scene.lights() {
        let to_light = light.position - rec.p;
        let distance_squared = to_light.length_squared();
        if distance_squared <= 0.0 {
            continue;
        }

        let distance = distance_squared.sqrt();
        let light_dir = to_light / distance;
        let n_dot_l = rec.normal.dot(light_dir);
        if n_dot_l <= 0.0 {
            continue;
        }

        let shadow_ray = Ray::new(rec.p + SHADOW_BIAS * rec.normal, light_dir);
        let shadow_range = Interval::new(SHADOW_BIAS, distance - SHADOW_BIAS);
        if scene.occluded(&shadow_ray, shadow_range) {
            continue;
        }

        accumulated += n_dot_l * light.intensity / distance_squared;
    }

    accumulated
}
