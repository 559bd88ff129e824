//! Scene aggregate: geometry plus point lights.

use crate::{HitRecord, Hittable, HittableList, PointLight};
use ember_math::{Interval, Ray};
use log::warn;

/// Everything the integrator needs to shade a ray.
///
/// Built once before rendering and only read afterwards.
#[derive(Default)]
pub struct Scene {
    objects: HittableList,
    lights: Vec<PointLight>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive.
    pub fn add<H: Hittable + 'static>(&mut self, object: H) {
        self.objects.add(Box::new(object));
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: PointLight) {
        if light.intensity.max_element() <= 0.0 {
            warn!("Light at {:?} has no positive intensity and will not contribute", light.position);
        }
        self.lights.push(light);
    }

    pub fn objects(&self) -> &HittableList {
        &self.objects
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

impl Hittable for Scene {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        self.objects.hit(ray, ray_t)
    }

    fn occluded(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.objects.occluded(ray, ray_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Sphere};
    use ember_math::Vec3;
    use std::sync::Arc;

    #[test]
    fn test_scene_counts() {
        let mut scene = Scene::new();
        assert_eq!(scene.object_count(), 0);
        assert_eq!(scene.light_count(), 0);

        let material = Arc::new(Lambertian::new(Vec3::splat(0.5)));
        scene.add(Sphere::new(Vec3::ZERO, 1.0, material.clone()));
        scene.add(Sphere::new(Vec3::X * 3.0, 1.0, material));
        scene.add_light(PointLight::white(Vec3::Y * 5.0, 10.0));

        assert_eq!(scene.object_count(), 2);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.lights()[0].intensity, Vec3::splat(10.0));
    }

    #[test]
    fn test_scene_hit_delegates_to_objects() {
        let mut scene = Scene::new();
        scene.add(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Arc::new(Lambertian::new(Vec3::ONE)),
        ));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let rec = scene.hit(&ray, Interval::new(0.001, 1e6)).unwrap();
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert!(scene.occluded(&ray, Interval::new(0.001, 1e6)));
        assert!(scene.hit(&ray, Interval::new(0.001, 3.0)).is_none());
    }
}
