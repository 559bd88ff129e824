//! Axis-aligned rectangles.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use ember_math::{axis_component, Interval, Ray, Vec3};
use std::sync::Arc;

/// Rays whose direction along the plane normal is below this are treated as
/// parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-8;

/// Which plane a rectangle lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectPlane {
    /// Spans X and Y at constant Z; base normal +Z.
    Xy,
    /// Spans X and Z at constant Y; base normal +Y.
    Xz,
    /// Spans Y and Z at constant X; base normal +X.
    Yz,
}

impl RectPlane {
    /// (first tangent axis, second tangent axis, normal axis)
    #[inline]
    fn axes(self) -> (usize, usize, usize) {
        match self {
            RectPlane::Xy => (0, 1, 2),
            RectPlane::Xz => (0, 2, 1),
            RectPlane::Yz => (1, 2, 0),
        }
    }

    #[inline]
    fn base_normal(self) -> Vec3 {
        match self {
            RectPlane::Xy => Vec3::Z,
            RectPlane::Xz => Vec3::Y,
            RectPlane::Yz => Vec3::X,
        }
    }
}

/// A rectangle lying in one of the three axis planes.
///
/// `u` and `v` bound the two tangent axes in the order given by
/// [`RectPlane`], `k` is the constant coordinate along the normal axis.
pub struct AxisAlignedRect {
    plane: RectPlane,
    u: Interval,
    v: Interval,
    k: f32,
    material: Arc<dyn Material>,
    flip_normal: bool,
}

impl AxisAlignedRect {
    pub fn new(
        plane: RectPlane,
        u: (f32, f32),
        v: (f32, f32),
        k: f32,
        material: Arc<dyn Material>,
    ) -> Self {
        Self {
            plane,
            u: Interval::new(u.0, u.1),
            v: Interval::new(v.0, v.1),
            k,
            material,
            flip_normal: false,
        }
    }

    /// Rectangle on the XY plane at `z = k`.
    pub fn xy(x0: f32, x1: f32, y0: f32, y1: f32, k: f32, material: Arc<dyn Material>) -> Self {
        Self::new(RectPlane::Xy, (x0, x1), (y0, y1), k, material)
    }

    /// Rectangle on the XZ plane at `y = k`.
    pub fn xz(x0: f32, x1: f32, z0: f32, z1: f32, k: f32, material: Arc<dyn Material>) -> Self {
        Self::new(RectPlane::Xz, (x0, x1), (z0, z1), k, material)
    }

    /// Rectangle on the YZ plane at `x = k`.
    pub fn yz(y0: f32, y1: f32, z0: f32, z1: f32, k: f32, material: Arc<dyn Material>) -> Self {
        Self::new(RectPlane::Yz, (y0, y1), (z0, z1), k, material)
    }

    /// Negate the outward normal, e.g. for walls seen from inside a room.
    pub fn flipped(mut self) -> Self {
        self.flip_normal = !self.flip_normal;
        self
    }

    /// Outward normal before face correction.
    pub fn outward_normal(&self) -> Vec3 {
        let n = self.plane.base_normal();
        if self.flip_normal {
            -n
        } else {
            n
        }
    }
}

impl Hittable for AxisAlignedRect {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let (u_axis, v_axis, n_axis) = self.plane.axes();

        let denominator = axis_component(ray.direction(), n_axis);
        if denominator.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.k - axis_component(ray.origin(), n_axis)) / denominator;
        if !ray_t.contains(t) {
            return None;
        }

        let p = ray.at(t);
        if !self.u.contains(axis_component(p, u_axis)) || !self.v.contains(axis_component(p, v_axis)) {
            return None;
        }

        Some(HitRecord::new(ray, t, self.outward_normal(), self.material.as_ref()))
    }
}
