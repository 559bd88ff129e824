//! Material trait for surface scattering.

use crate::hittable::HitRecord;
use crate::sampling::{gen_f32, random_cosine_direction, random_unit_vector, reflect, refract};
use ember_math::{is_near_zero, Color, Ray};
use rand::RngCore;

/// Outcome of a ray scattering off a surface.
#[derive(Debug, Clone, Copy)]
pub struct ScatterRecord {
    /// The outgoing ray, starting at the hit point
    pub scattered: Ray,
    /// Fraction of light that survives the bounce, per channel
    pub attenuation: Color,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord>;

    /// Surface albedo used when shading with direct light.
    fn base_color(&self) -> Color;

    /// Whether the surface receives explicit point-light sampling.
    ///
    /// Only diffuse surfaces do. A mirror or glass surface would reflect a
    /// point light toward the eye along a single direction only, so those
    /// materials get their light from the recursive term alone.
    fn is_diffuse(&self) -> bool {
        false
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        // Importance sample the cosine term of the rendering equation
        let mut scatter_direction = random_cosine_direction(rec.normal, rng);

        // Catch degenerate scatter direction
        if is_near_zero(scatter_direction) {
            scatter_direction = rec.normal;
        }

        Some(ScatterRecord {
            scattered: Ray::new(rec.p, scatter_direction),
            attenuation: self.albedo,
        })
    }

    fn base_color(&self) -> Color {
        self.albedo
    }

    fn is_diffuse(&self) -> bool {
        true
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }
}

impl Material for Metal {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        let reflected = reflect(ray_in.direction().normalize(), rec.normal);
        let scattered_dir = reflected + self.fuzz * random_unit_vector(rng);

        // Fuzzed below the surface: absorbed
        if scattered_dir.dot(rec.normal) <= 0.0 {
            return None;
        }

        Some(ScatterRecord {
            scattered: Ray::new(rec.p, scattered_dir),
            attenuation: self.albedo,
        })
    }

    fn base_color(&self) -> Color {
        self.albedo
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone)]
pub struct Dielectric {
    /// Index of refraction
    ior: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `ior`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn new(ior: f32) -> Self {
        Self { ior }
    }

    pub fn ior(&self) -> f32 {
        self.ior
    }

    /// Schlick's approximation for reflectance
    pub fn reflectance(cosine: f32, ior: f32) -> f32 {
        let r0 = ((1.0 - ior) / (1.0 + ior)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        let refraction_ratio = if rec.front_face { 1.0 / self.ior } else { self.ior };

        let unit_direction = ray_in.direction().normalize();
        // Clamp guards against dot products drifting past 1.0
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

        // Total internal reflection needs no random draw
        let cannot_refract = refraction_ratio * sin_theta > 1.0;

        let direction = if cannot_refract
            || Self::reflectance(cos_theta, refraction_ratio) > gen_f32(rng)
        {
            reflect(unit_direction, rec.normal)
        } else {
            refract(unit_direction, rec.normal, refraction_ratio)
        };

        Some(ScatterRecord {
            scattered: Ray::new(rec.p, direction),
            attenuation: Color::ONE,
        })
    }

    fn base_color(&self) -> Color {
        Color::ONE
    }
}
