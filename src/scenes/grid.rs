use std::f32::consts::TAU;

use glam::Vec3;

use crate::error::Result;
use crate::motion::Bob;
use crate::objects::{Light, Plane, Quad, Sphere, DEFAULT_MATERIAL, LIGHT_MATERIAL};
use crate::scene::Scene;

const RIGHT_COLORS: [[f32; 3]; 4] = [[0.3, 0.3, 0.3], [0.3, 0.9, 0.9], [0.9, 0.3, 0.9], [0.9, 0.9, 0.3]];
const LEFT_COLORS: [[f32; 3]; 4] = [[0.9, 0.9, 0.9], [0.9, 0.3, 0.3], [0.3, 0.9, 0.3], [0.3, 0.3, 0.9]];

/// Two mirrored 4x4 grids of bobbing spheres in front of a slanted mirror
pub fn load_bobbing_grid(scene: &mut Scene) -> Result<()> {
    build_grid(scene, [0.5, 0.5, 0.5, 0.2])
}

/// The bobbing grid lit by a light sweeping along X
pub fn load_lit_grid(scene: &mut Scene) -> Result<()> {
    scene.set_sky_color([0.9, 0.9, 0.9, 1.0]);

    let light = scene.add_light(Light::new(Vec3::new(0.0, 100.0, 50.0), [1.0; 4], LIGHT_MATERIAL));
    scene.bind(light, Bob::new(Vec3::X, -100.0, 100.0, 1.0, 0.0))?;

    build_grid(scene, [0.4, 0.4, 0.4, 0.6])
}

fn build_grid(scene: &mut Scene, floor_color: [f32; 4]) -> Result<()> {
    scene.add_plane(Plane::new(Vec3::Y, -30.0, floor_color, DEFAULT_MATERIAL));
    scene.add_quad(Quad::new(
        Vec3::new(0.0, -30.0, 0.0),
        Vec3::new(0.0, 40.0, 0.0),
        Vec3::new(0.0, 20.0, -50.0),
        [1.0, 1.0, 1.0, 0.1],
        DEFAULT_MATERIAL,
    ));

    let n = 16;
    for i in 0..n {
        let column = (i % 4) as f32;
        let row = (i / 4) as f32;
        let phase = i as f32 * TAU / n as f32;
        // Rows fade from fully reflective to nearly matte
        let reflectivity = 1.0 - row * 0.333;

        for (side, colors) in [(1.0, RIGHT_COLORS), (-1.0, LEFT_COLORS)] {
            let center = Vec3::new(side * (10.0 * column + 10.0), 0.0, 10.0 * row - 40.0);
            let [r, g, b] = colors[i % 4];
            let sphere = scene.add_sphere(Sphere::new(center, 3.0, [r, g, b, reflectivity], DEFAULT_MATERIAL));
            scene.bind(sphere, Bob::new(Vec3::Y, -6.0, 6.0, 1.0, phase))?;
        }
    }
    Ok(())
}
