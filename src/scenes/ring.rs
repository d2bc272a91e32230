use std::f32::consts::TAU;

use glam::Vec3;

use crate::error::Result;
use crate::motion::{Bob, Circle};
use crate::objects::{Light, Plane, Sphere, Volume, DEFAULT_MATERIAL, LIGHT_MATERIAL, WHITE};
use crate::scene::Scene;

const RING_SPHERES: usize = 30;

/// A large sphere encircled by a wave of small bobbing spheres
pub fn load_ring(scene: &mut Scene) -> Result<()> {
    scene.add_plane(Plane::new(Vec3::Y, -30.0, [0.5, 0.5, 0.5, 0.2], DEFAULT_MATERIAL));
    scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, -30.0), 20.0, WHITE, DEFAULT_MATERIAL));

    let radius = RING_SPHERES as f32;
    for i in 0..RING_SPHERES {
        let phi = i as f32 * TAU / RING_SPHERES as f32;
        let center = Vec3::new(phi.cos() * radius, 0.0, -30.0 + phi.sin() * radius);
        let color = scene.rnd_color(0.0);
        let sphere = scene.add_sphere(Sphere::new(center, 1.0, color, DEFAULT_MATERIAL));
        scene.bind(sphere, Bob::new(Vec3::Y, -10.0, 10.0, 1.0, phi * 3.0))?;
    }
    Ok(())
}

/// A ring of bobbing spheres around a column of fog, lit by an orbiting light
pub fn load_fog_ring(scene: &mut Scene) -> Result<()> {
    let light = scene.add_light(Light::new(Vec3::new(0.0, 80.0, 0.0), [1.0; 4], LIGHT_MATERIAL));
    scene.bind(light, Circle::new(Vec3::Y, 100.0, 1.0, 0.0))?;

    scene.add_plane(Plane::new(Vec3::Y, -30.0, [0.5, 0.5, 0.5, 0.2], DEFAULT_MATERIAL));

    let radius = 30.0;
    for i in 0..RING_SPHERES {
        let phi = i as f32 * TAU / RING_SPHERES as f32;
        let center = Vec3::new(phi.cos() * radius, 0.0, phi.sin() * radius);
        let color = scene.rnd_color(0.0);
        let sphere = scene.add_sphere(Sphere::new(center, 1.0, color, DEFAULT_MATERIAL));
        scene.bind(sphere, Bob::new(Vec3::Y, -5.0, 5.0, 1.0, phi * 4.0))?;
    }

    let w = 20.0;
    let fog = scene.rnd_color(0.03);
    scene.add_volume(Volume::new(
        Vec3::new(-w / 2.0, -w, -w / 2.0),
        Vec3::new(w, 0.0, 0.0),
        Vec3::new(0.0, w * 2.0, 0.0),
        Vec3::new(0.0, 0.0, w),
        fog,
        DEFAULT_MATERIAL,
    ));
    Ok(())
}
