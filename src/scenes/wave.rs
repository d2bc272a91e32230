use std::f32::consts::TAU;

use glam::Vec3;

use crate::error::Result;
use crate::motion::Bob;
use crate::objects::{Quad, Sphere, DEFAULT_MATERIAL, WHITE};
use crate::scene::Scene;

const WAVE_SPHERES: usize = 36;

/// A line of spheres between two facing mirrors, each bobbing along a rotating axis
pub fn load_wave(scene: &mut Scene) -> Result<()> {
    for x in [-35.0, 35.0] {
        scene.add_quad(Quad::new(
            Vec3::new(x, -20.0, 0.0),
            Vec3::new(0.0, 40.0, 0.0),
            Vec3::new(0.0, 0.0, -40.0),
            [1.0, 1.0, 1.0, 0.1],
            DEFAULT_MATERIAL,
        ));
    }

    let n = WAVE_SPHERES;
    for i in 0..n {
        let phi = i as f32 * TAU / n as f32;
        let x = ((n - 1) as f32 / 2.0 - i as f32) * 2.0;
        let sphere = scene.add_sphere(Sphere::new(Vec3::new(x, 0.0, -20.0), 1.0, WHITE, DEFAULT_MATERIAL));
        scene.bind(sphere, Bob::new(Vec3::new(0.0, phi.cos(), phi.sin()), -10.0, 10.0, 1.0, 24.0 * phi))?;
    }
    Ok(())
}
