//! End-to-end checks through the public renderer API.

use ember_renderer::{
    direct_lighting, ray_color, render, AxisAlignedBox, AxisAlignedRect, Camera, Color,
    Dielectric, Hittable, Interval, Lambertian, Material, Metal, PointLight, Ray, RenderConfig,
    Scene, Sphere, Vec3, MAX_HIT_DISTANCE, MIN_HIT_DISTANCE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

fn test_config() -> RenderConfig {
    RenderConfig {
        image_width: 24,
        aspect_ratio: 1.5,
        samples_per_pixel: 4,
        max_depth: 8,
        ..Default::default()
    }
}

/// A small closed-top room with one of each material and a ceiling lamp.
fn room_scene() -> Scene {
    let white: Arc<dyn Material> = Arc::new(Lambertian::new(Color::splat(0.73)));
    let red: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.65, 0.05, 0.05)));
    let metal: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.8, 0.9), 0.1));
    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));

    let mut scene = Scene::new();
    scene.add(AxisAlignedRect::xz(-2.0, 2.0, -5.0, 0.0, -1.0, white.clone()));
    scene.add(AxisAlignedRect::xz(-2.0, 2.0, -5.0, 0.0, 2.0, white.clone()).flipped());
    scene.add(AxisAlignedRect::xy(-2.0, 2.0, -1.0, 2.0, -5.0, white.clone()));
    scene.add(AxisAlignedRect::yz(-1.0, 2.0, -5.0, 0.0, -2.0, red));
    scene.add(AxisAlignedRect::yz(-1.0, 2.0, -5.0, 0.0, 2.0, white.clone()).flipped());

    scene.add(Sphere::new(Vec3::new(-0.8, -0.5, -3.0), 0.5, glass));
    scene.add(Sphere::new(Vec3::new(0.8, -0.5, -3.0), 0.5, metal));
    scene.add(AxisAlignedBox::new(
        Vec3::new(-0.3, -1.0, -4.2),
        Vec3::new(0.3, 0.0, -3.6),
        white,
    ));

    scene.add_light(PointLight::white(Vec3::new(0.0, 1.7, -2.5), 10.0));
    scene
}

#[test]
fn renders_room_to_rgb_bytes() {
    let scene = room_scene();
    let config = test_config();
    let camera = Camera::new(config.aspect_ratio);
    let mut rng = StdRng::seed_from_u64(2024);

    let image = render(&camera, &scene, &config, &mut rng).unwrap();
    let bytes = image.to_rgb8(config.gamma_correction);

    assert_eq!(image.width, 24);
    assert_eq!(image.height, 16);
    assert_eq!(bytes.len(), 24 * 16 * 3);
    assert!(image.pixels.iter().all(|c| c.is_finite()));
    // The lamp lights the room, so the picture is not black
    assert!(bytes.iter().any(|&b| b > 0));
}

#[test]
fn same_seed_gives_same_image() {
    let scene = room_scene();
    let config = test_config();
    let camera = Camera::new(config.aspect_ratio);

    let a = render(&camera, &scene, &config, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = render(&camera, &scene, &config, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a.to_rgb8(true), b.to_rgb8(true));
}

#[test]
fn zero_depth_renders_black_for_any_scene() {
    let scene = room_scene();
    let config = RenderConfig {
        max_depth: 0,
        ..test_config()
    };
    let camera = Camera::new(config.aspect_ratio);
    let mut rng = StdRng::seed_from_u64(3);

    let image = render(&camera, &scene, &config, &mut rng).unwrap();
    assert!(image.to_rgb8(true).iter().all(|&b| b == 0));
}

#[test]
fn occluder_removes_direct_light_in_a_full_scene() {
    let white: Arc<dyn Material> = Arc::new(Lambertian::new(Color::ONE));
    let light = PointLight::white(Vec3::new(0.0, 4.0, 0.0), 16.0);

    let mut lit = Scene::new();
    lit.add(AxisAlignedRect::xz(-5.0, 5.0, -5.0, 5.0, 0.0, white.clone()));
    lit.add_light(light);

    let mut shadowed = Scene::new();
    shadowed.add(AxisAlignedRect::xz(-5.0, 5.0, -5.0, 5.0, 0.0, white.clone()));
    shadowed.add(AxisAlignedBox::new(
        Vec3::new(-0.5, 1.0, -0.5),
        Vec3::new(0.5, 2.0, 0.5),
        white,
    ));
    shadowed.add_light(light);

    let ray = Ray::new(Vec3::new(0.0, 0.5, 0.0), Vec3::NEG_Y);
    let range = Interval::new(MIN_HIT_DISTANCE, MAX_HIT_DISTANCE);

    let rec = lit.hit(&ray, range).unwrap();
    let unoccluded = direct_lighting(&lit, &rec);
    assert!((unoccluded - Color::splat(1.0)).length() < 1e-5);

    let rec = shadowed.hit(&ray, range).unwrap();
    assert_eq!(direct_lighting(&shadowed, &rec), Color::ZERO);
}

#[test]
fn closed_room_without_lights_is_black() {
    // Inside a closed diffuse sphere with no lights there is no energy
    // source at all, so no bounce may create light.
    let mut scene = Scene::new();
    scene.add(Sphere::new(
        Vec3::ZERO,
        10.0,
        Arc::new(Lambertian::new(Color::splat(0.8))),
    ));
    let config = RenderConfig {
        max_depth: 6,
        ..test_config()
    };
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..50 {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.1, 0.2, -1.0));
        assert_eq!(ray_color(&ray, &scene, config.max_depth, &config, &mut rng), Color::ZERO);
    }
}

#[test]
fn glass_sphere_transmits_sky() {
    // Glass has no absorption: a ray through a glass ball still reaches the
    // sky, and its color stays within the sky's range.
    let mut scene = Scene::new();
    scene.add(Sphere::new(
        Vec3::new(0.0, 0.0, -3.0),
        1.0,
        Arc::new(Dielectric::new(1.5)),
    ));
    let config = test_config();
    let mut rng = StdRng::seed_from_u64(12);

    for _ in 0..100 {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let color = ray_color(&ray, &scene, config.max_depth, &config, &mut rng);
        assert!(color.min_element() >= 0.5 - 1e-5);
        assert!(color.max_element() <= 1.0 + 1e-5);
    }
}
