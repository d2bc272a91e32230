use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec3;

use crate::error::Result;
use crate::objects::{Quad, Sphere, DEFAULT_MATERIAL, WHITE};
use crate::scene::Scene;

const SIDES: usize = 6;
const ROOM_RADIUS: f32 = 20.0;

/// Closed hexagonal hall of mirrors with a single sphere in the middle
pub fn load_hexagon_room(scene: &mut Scene) -> Result<()> {
    let r = ROOM_RADIUS;
    let n = SIDES as f32;
    let side = 2.0 * r * (PI / n).sin();
    let h = side;

    for i in 0..SIDES {
        let phi = i as f32 * TAU / n;
        let along = phi + FRAC_PI_2 + PI / n;
        scene.add_quad(Quad::new(
            Vec3::new(phi.cos() * r, -h / 2.0, phi.sin() * r),
            Vec3::new(0.0, h, 0.0),
            Vec3::new(along.cos() * side, 0.0, along.sin() * side),
            [0.8, 0.8, 0.8, 0.0],
            DEFAULT_MATERIAL,
        ));
    }

    // Floor and ceiling
    for y in [-h / 2.0, h / 2.0] {
        scene.add_quad(Quad::new(
            Vec3::new(-r, y, r),
            Vec3::new(2.0 * r, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -2.0 * r),
            WHITE,
            DEFAULT_MATERIAL,
        ));
    }

    scene.add_sphere(Sphere::new(Vec3::ZERO, 2.0, WHITE, DEFAULT_MATERIAL));
    Ok(())
}
