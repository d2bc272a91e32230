use glam::Vec3;

use crate::error::Result;
use crate::motion::Circle;
use crate::objects::{Cube, Light, Quad, Sphere, DEFAULT_MATERIAL, LIGHT_MATERIAL};
use crate::scene::Scene;

const GRID: usize = 5;

/// A field of cubes under a light circling high above them
pub fn load_orbit(scene: &mut Scene) -> Result<()> {
    scene.set_sky_color([0.6, 0.6, 0.6, 1.0]);

    let light = scene.add_light(Light::new(Vec3::new(0.0, 80.0, 0.0), [1.0; 4], LIGHT_MATERIAL));
    scene.bind(light, Circle::new(Vec3::Y, 100.0, 1.0, 0.0))?;

    let shade = [scene.rnd(0.0, 1.0), scene.rnd(0.0, 1.0), scene.rnd(0.0, 1.0), scene.rnd(0.0, 1.0)];
    scene.add_sphere(Sphere::new(Vec3::new(0.0, 80.0, 0.0), 10.0, shade, DEFAULT_MATERIAL));

    scene.add_quad(Quad::new(
        Vec3::new(-200.0, -40.0, -200.0),
        Vec3::new(400.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 400.0),
        [0.3, 0.3, 0.3, 0.6],
        DEFAULT_MATERIAL,
    ));

    for i in 0..GRID {
        for j in 0..GRID {
            let anchor = Vec3::new(20.0 * i as f32 - 45.0, 0.0, -20.0 * j as f32 + 35.0);
            let color = [scene.rnd(0.0, 1.0), scene.rnd(0.0, 1.0), scene.rnd(0.0, 1.0), scene.rnd(0.0, 1.0)];
            scene.add_cube(Cube::axis_aligned(anchor, 10.0, color, DEFAULT_MATERIAL));
        }
    }
    Ok(())
}
