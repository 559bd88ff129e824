//! Ember renderer - CPU path tracing core.
//!
//! A small Monte Carlo path tracer: analytic primitives, three material
//! models, explicit point-light sampling on diffuse surfaces and a
//! jittered multi-sample render loop that produces 8-bit RGB.
//!
//! Intersection is a linear scan over the scene.

mod aabox;
mod camera;
mod error;
mod hittable;
mod light;
mod lighting;
mod material;
mod rect;
mod renderer;
pub mod sampling;
mod scene;
mod sphere;

pub use aabox::AxisAlignedBox;
pub use camera::Camera;
pub use error::RenderError;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use light::PointLight;
pub use lighting::{direct_lighting, SHADOW_BIAS};
pub use material::{Dielectric, Lambertian, Material, Metal, ScatterRecord};
pub use rect::{AxisAlignedRect, RectPlane};
pub use renderer::{
    color_to_rgb8, linear_to_gamma, ray_color, render, render_pixel, sky_gradient, ImageBuffer,
    RenderConfig, MAX_HIT_DISTANCE, MIN_HIT_DISTANCE,
};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export the math types from ember_math
pub use ember_math::{Color, Interval, Point3, Ray, Vec3};
