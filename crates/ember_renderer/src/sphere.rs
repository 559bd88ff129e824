//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use ember_math::{Interval, Point3, Ray};
use std::sync::Arc;

/// A sphere primitive.
///
/// A negative radius is allowed on purpose: the computed normal then points
/// inward, which turns a glass sphere into a hollow shell when nested inside
/// a positive one.
pub struct Sphere {
    center: Point3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (h + sqrtd) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::new(ray, root, outward_normal, self.material.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;
    use ember_math::Vec3;

    fn sphere(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Arc::new(Lambertian::new(Vec3::splat(0.5))))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!((rec.t - 0.5).abs() < 0.001);
        assert!(rec.front_face);
    }

    #[test]
    fn test_sphere_hit_distance_equals_radius() {
        for r in [0.5_f32, 1.0, 3.0, 40.0] {
            let sphere = sphere(Vec3::ZERO, r);
            let ray = Ray::new(Vec3::new(0.0, 0.0, -2.0 * r), Vec3::Z);

            let rec = sphere.hit(&ray, Interval::new(0.001, 1e6)).unwrap();
            assert!((rec.t - r).abs() < 1e-4 * r, "t={} r={}", rec.t, r);
            assert!((rec.normal - Vec3::NEG_Z).length() < 1e-5);
        }
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside_uses_far_root() {
        let sphere = sphere(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-5);
        assert!(!rec.front_face);
        // Normal flipped to face the ray
        assert!((rec.normal - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_sphere_tangent_ray() {
        let sphere = sphere(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(-5.0, 1.0, 0.0), Vec3::X);

        let rec = sphere.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!((rec.t - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_sphere_outside_interval() {
        let sphere = sphere(Vec3::new(0.0, 0.0, -10.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(sphere.hit(&ray, Interval::new(0.001, 8.0)).is_none());
    }

    #[test]
    fn test_negative_radius_points_normal_inward() {
        let shell = sphere(Vec3::ZERO, -1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z);

        let rec = shell.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-5);
        // Geometric normal is inward, so the ray counts as hitting the back face
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3::NEG_Z).length() < 1e-5);
    }
}
