//! The demo scene: a Cornell-style room open toward the camera.

use ember_renderer::{
    AxisAlignedBox, AxisAlignedRect, Color, Dielectric, Lambertian, Material, Metal, PointLight,
    Scene, Sphere, Vec3,
};
use log::info;
use std::f32::consts::TAU;
use std::sync::Arc;

/// Room dimensions and wall placement.
///
/// The room is centred on x = 0 and extends along -Z away from the camera,
/// from `front_opening_z` to `back_wall_z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomLayout {
    pub half_width: f32,
    pub half_depth: f32,
    pub floor_y: f32,
    pub ceiling_y: f32,
    pub back_wall_z: f32,
    pub front_opening_z: f32,
}

impl RoomLayout {
    pub fn center_z(&self) -> f32 {
        self.back_wall_z + self.half_depth
    }
}

impl Default for RoomLayout {
    fn default() -> Self {
        Self {
            half_width: 2.0,
            half_depth: 2.5,
            floor_y: -1.0,
            ceiling_y: 2.0,
            back_wall_z: -6.0,
            front_opening_z: -1.0,
        }
    }
}

/// How the room is lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lighting {
    /// One lamp hanging just below the ceiling in the middle of the room
    CeilingLamp,
    /// `n` lights on a ring above the room, which is then built without a ceiling
    Ring(u32),
}

const LAMP_INTENSITY: f32 = 10.0;
const LAMP_DROP_FROM_CEILING: f32 = 0.3;

const RING_RADIUS: f32 = 6.0;
const RING_HEIGHT: f32 = 6.0;
const RING_INTENSITY: f32 = 14.0;

/// Single white lamp 0.3 below the ceiling, centred over the floor.
pub fn ceiling_lamp(layout: &RoomLayout) -> PointLight {
    PointLight::white(
        Vec3::new(0.0, layout.ceiling_y - LAMP_DROP_FROM_CEILING, layout.center_z()),
        LAMP_INTENSITY,
    )
}

/// `count` white lights spread evenly on a ring around the y axis.
pub fn ring_lights(count: u32) -> Vec<PointLight> {
    (0..count)
        .map(|index| {
            let angle = TAU * index as f32 / count as f32;
            PointLight::white(
                Vec3::new(
                    RING_RADIUS * angle.cos(),
                    RING_HEIGHT,
                    -2.5 + 1.5 * angle.sin(),
                ),
                RING_INTENSITY,
            )
        })
        .collect()
}

/// Assemble the room, its furniture and its lights.
pub fn build_scene(layout: &RoomLayout, lighting: Lighting) -> Scene {
    let white: Arc<dyn Material> = Arc::new(Lambertian::new(Color::splat(0.73)));
    let red: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.65, 0.05, 0.05)));
    let green: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.12, 0.45, 0.15)));

    let RoomLayout {
        half_width: hw,
        floor_y,
        ceiling_y,
        back_wall_z,
        front_opening_z,
        ..
    } = *layout;

    let mut scene = Scene::new();

    // Walls, every normal facing into the room
    scene.add(AxisAlignedRect::xz(-hw, hw, back_wall_z, front_opening_z, floor_y, white.clone()));
    scene.add(AxisAlignedRect::xy(-hw, hw, floor_y, ceiling_y, back_wall_z, white.clone()));
    scene.add(AxisAlignedRect::yz(floor_y, ceiling_y, back_wall_z, front_opening_z, -hw, red));
    scene.add(
        AxisAlignedRect::yz(floor_y, ceiling_y, back_wall_z, front_opening_z, hw, green).flipped(),
    );
    if lighting == Lighting::CeilingLamp {
        scene.add(
            AxisAlignedRect::xz(-hw, hw, back_wall_z, front_opening_z, ceiling_y, white.clone())
                .flipped(),
        );
    }

    // Furniture resting on the floor
    let center_z = layout.center_z();
    scene.add(Sphere::new(
        Vec3::new(-0.9, floor_y + 0.6, center_z + 0.3),
        0.6,
        Arc::new(Dielectric::new(1.5)),
    ));
    scene.add(Sphere::new(
        Vec3::new(0.9, floor_y + 0.5, center_z - 0.7),
        0.5,
        Arc::new(Metal::new(Color::new(0.8, 0.85, 0.9), 0.05)),
    ));
    scene.add(Sphere::new(
        Vec3::new(0.1, floor_y + 0.3, center_z + 0.9),
        0.3,
        Arc::new(Lambertian::new(Color::new(0.2, 0.3, 0.7))),
    ));
    scene.add(AxisAlignedBox::new(
        Vec3::new(-1.6, floor_y, back_wall_z + 0.4),
        Vec3::new(-0.7, floor_y + 1.6, back_wall_z + 1.2),
        white.clone(),
    ));
    scene.add(AxisAlignedBox::new(
        Vec3::new(0.7, floor_y, center_z + 0.2),
        Vec3::new(1.5, floor_y + 0.5, center_z + 1.0),
        white,
    ));

    match lighting {
        Lighting::CeilingLamp => scene.add_light(ceiling_lamp(layout)),
        Lighting::Ring(count) => {
            for light in ring_lights(count) {
                scene.add_light(light);
            }
        }
    }

    info!(
        "Built room scene with {} objects and {} lights",
        scene.object_count(),
        scene.light_count()
    );
    scene
}
