//! Axis-aligned box built from six rectangles.

use crate::{
    hittable::{HitRecord, Hittable, HittableList},
    AxisAlignedRect, Material,
};
use ember_math::{Interval, Point3, Ray};
use std::sync::Arc;

/// An axis-aligned box whose six faces share one material.
///
/// Intersection goes through the face list; there is no slab test.
pub struct AxisAlignedBox {
    min: Point3,
    max: Point3,
    sides: HittableList,
}

impl AxisAlignedBox {
    /// Create a box spanning the two corners. The corners may be given in
    /// any order.
    pub fn new(a: Point3, b: Point3, material: Arc<dyn Material>) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        let mut sides = HittableList::new();

        // Front and back (constant z)
        sides.add(Box::new(AxisAlignedRect::xy(
            min.x, max.x, min.y, max.y, max.z, material.clone(),
        )));
        sides.add(Box::new(
            AxisAlignedRect::xy(min.x, max.x, min.y, max.y, min.z, material.clone()).flipped(),
        ));

        // Top and bottom (constant y)
        sides.add(Box::new(AxisAlignedRect::xz(
            min.x, max.x, min.z, max.z, max.y, material.clone(),
        )));
        sides.add(Box::new(
            AxisAlignedRect::xz(min.x, max.x, min.z, max.z, min.y, material.clone()).flipped(),
        ));

        // Right and left (constant x)
        sides.add(Box::new(
            AxisAlignedRect::yz(min.y, max.y, min.z, max.z, max.x, material.clone()).flipped(),
        ));
        sides.add(Box::new(AxisAlignedRect::yz(
            min.y, max.y, min.z, max.z, min.x, material,
        )));

        Self { min, max, sides }
    }

    pub fn min(&self) -> Point3 {
        self.min
    }

    pub fn max(&self) -> Point3 {
        self.max
    }

    /// Number of faces. Always six.
    pub fn face_count(&self) -> usize {
        self.sides.len()
    }
}

impl Hittable for AxisAlignedBox {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        self.sides.hit(ray, ray_t)
    }

    fn occluded(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.sides.occluded(ray, ray_t)
    }
}
