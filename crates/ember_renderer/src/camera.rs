//! Pinhole camera for primary ray generation.

use ember_math::{Point3, Ray, Vec3};

/// A pinhole camera.
///
/// The default looks from the origin down -Z with a 90° vertical field of
/// view, which places a viewport of height 2 at distance 1. Rays are
/// generated from normalized viewport coordinates where `(0, 0)` is the
/// lower-left corner and `(1, 1)` the upper-right.
#[derive(Debug, Clone)]
pub struct Camera {
    // Camera positioning
    look_from: Point3,
    look_at: Point3,
    vup: Vec3,

    vfov: f32, // Vertical field of view in degrees
    aspect_ratio: f32,

    // Cached viewport, refreshed by every builder method
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera with the default placement for the given aspect
    /// ratio (width / height).
    pub fn new(aspect_ratio: f32) -> Self {
        let mut camera = Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio,
            origin: Vec3::ZERO,
            lower_left_corner: Vec3::ZERO,
            horizontal: Vec3::ZERO,
            vertical: Vec3::ZERO,
        };
        camera.update_viewport();
        camera
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Point3, look_at: Point3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self.update_viewport();
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_vfov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self.update_viewport();
        self
    }

    fn update_viewport(&mut self) {
        let theta = self.vfov.to_radians();
        let viewport_height = 2.0 * (theta / 2.0).tan();
        let viewport_width = self.aspect_ratio * viewport_height;

        // Camera basis vectors
        let w = (self.look_from - self.look_at).normalize();
        let u = self.vup.cross(w).normalize();
        let v = w.cross(u);

        self.origin = self.look_from;
        self.horizontal = viewport_width * u;
        self.vertical = viewport_height * v;
        self.lower_left_corner = self.origin - self.horizontal / 2.0 - self.vertical / 2.0 - w;
    }

    /// Ray through the viewport point `(s, t)`.
    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        let target = self.lower_left_corner + s * self.horizontal + t * self.vertical;
        Ray::new(self.origin, target - self.origin)
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }
}
