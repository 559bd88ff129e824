//! Random sampling and reflection helpers shared by materials and the
//! render loop.
//!
//! Every function takes the generator explicitly so that each caller owns
//! its own random stream.

use ember_math::{is_near_zero, Vec3};
use rand::{Rng, RngCore};
use std::f32::consts::PI;

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform f32 in [min, max).
#[inline]
pub fn gen_range(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Random point strictly inside the unit sphere (rejection sampling).
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_range(rng, -1.0, 1.0),
            gen_range(rng, -1.0, 1.0),
            gen_range(rng, -1.0, 1.0),
        );
        let len_sq = p.length_squared();
        if len_sq > 1e-12 && len_sq < 1.0 {
            return p;
        }
    }
}

/// Random unit vector, uniformly distributed on the unit sphere.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    random_in_unit_sphere(rng).normalize()
}

/// Unit direction drawn from a cosine-weighted distribution over the
/// hemisphere around `normal`.
///
/// Samples a point on the unit disk with `r = sqrt(u1)` and lifts it onto
/// the hemisphere, so `cos(theta)^2` is uniform in [0, 1] and the pdf is
/// `cos(theta) / pi`. `normal` must be unit length.
pub fn random_cosine_direction(normal: Vec3, rng: &mut dyn RngCore) -> Vec3 {
    let r = gen_f32(rng).sqrt();
    let phi = 2.0 * PI * gen_f32(rng);
    let x = r * phi.cos();
    let y = r * phi.sin();
    let z = (1.0 - r * r).max(0.0).sqrt();

    // Helper axis must not be parallel to the normal
    let helper = if normal.x.abs() > 0.9 { Vec3::Y } else { Vec3::X };
    let tangent = normal.cross(helper).normalize();
    let bitangent = normal.cross(tangent);

    let direction = tangent * x + bitangent * y + normal * z;
    if is_near_zero(direction) {
        return direction;
    }
    direction.normalize()
}

/// Mirror `v` about the unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit vector `uv` through a surface with unit normal `n`
/// using Snell's law, split into perpendicular and parallel parts.
///
/// `etai_over_etat` is the ratio of refractive indices (incident over
/// transmitted).
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
