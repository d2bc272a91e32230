use glam::Vec3;

use crate::error::Result;
use crate::objects::{Cube, Plane, Sphere, DEFAULT_MATERIAL, WHITE};
use crate::scene::Scene;

const STEPS: usize = 4;
const STEP_SIZE: f32 = 10.0;

/// A staircase pyramid of randomly tinted cubes with a sphere resting on each inner step
pub fn load_pyramid(scene: &mut Scene) -> Result<()> {
    scene.add_plane(Plane::new(Vec3::Y, -30.0, [0.5, 0.5, 0.5, 0.2], DEFAULT_MATERIAL));

    let w = STEP_SIZE;
    for i in 0..STEPS {
        for j in 0..STEPS - i {
            let (fi, fj) = (i as f32, j as f32);
            let color = scene.rnd_color(0.1);
            scene.add_cube(Cube::axis_aligned(
                Vec3::new(fi * w, (fi + fj) * w - 15.0, -fj * w - 10.0),
                w,
                color,
                DEFAULT_MATERIAL,
            ));
        }
    }

    for i in 0..STEPS - 1 {
        for j in 0..STEPS - i - 1 {
            let (fi, fj) = (i as f32, j as f32);
            scene.add_sphere(Sphere::new(
                Vec3::new(fi * w + 5.0, (fi + fj) * w, -fj * w - 5.0),
                2.0,
                WHITE,
                DEFAULT_MATERIAL,
            ));
        }
    }
    Ok(())
}
