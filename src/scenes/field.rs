use std::f32::consts::TAU;

use glam::Vec3;

use crate::error::Result;
use crate::motion::Bob;
use crate::objects::{Plane, Sphere, DEFAULT_MATERIAL};
use crate::scene::Scene;

pub const FIELD_SPHERES: usize = 30;

/// Randomly placed spheres, each bobbing with its own range, speed and phase.
///
/// Centers: x in [-50, 50], y in [0, 10], z in [-110, -10]; radius in [2, 6].
/// Motion: min in [-8, -2], max in [2, 8], speed in [0.5, 2], phase in [0, 2π].
pub fn load_random_field(scene: &mut Scene) -> Result<()> {
    scene.add_plane(Plane::new(Vec3::Y, -10.0, [0.5, 0.5, 0.5, 0.2], DEFAULT_MATERIAL));

    for _ in 0..FIELD_SPHERES {
        let center = Vec3::new(scene.rnd(-50.0, 50.0), scene.rnd(0.0, 10.0), scene.rnd(-10.0, -110.0));
        let radius = scene.rnd(2.0, 6.0);
        let color = scene.rnd_color(0.0);
        let sphere = scene.add_sphere(Sphere::new(center, radius, color, DEFAULT_MATERIAL));

        let bob = Bob::new(
            Vec3::Y,
            scene.rnd(-8.0, -2.0),
            scene.rnd(2.0, 8.0),
            scene.rnd(0.5, 2.0),
            scene.rnd(0.0, TAU),
        );
        scene.bind(sphere, bob)?;
    }
    Ok(())
}
