use glam::Vec3;

use super::{Material, Movable, Primitive, PrimitiveKind, DEFAULT_MATERIAL, WHITE};
use crate::math::AABB;

/// Sphere record for the render stage
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Sphere {
    pub position: [f32; 4], // x, y, z, radius
    pub color: [f32; 4],
    pub bounds: [[f32; 4]; 2], // generated
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, color: [f32; 4], material: Material) -> Self {
        let mut sphere = Self {
            position: center.extend(radius).to_array(),
            color,
            bounds: [[0.0; 4]; 2],
            material,
        };
        sphere.regenerate();
        sphere
    }

    pub fn center(&self) -> Vec3 {
        Vec3::from_slice(&self.position[..3])
    }

    pub fn radius(&self) -> f32 {
        self.position[3]
    }

    pub fn bounds(&self) -> AABB {
        AABB::from_records(&self.bounds)
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 1.0, WHITE, DEFAULT_MATERIAL)
    }
}

impl Primitive for Sphere {
    const KIND: PrimitiveKind = PrimitiveKind::Sphere;

    fn regenerate(&mut self) {
        self.bounds = AABB::around(self.center(), self.radius()).to_records();
    }
}

impl Movable for Sphere {
    fn position(&self) -> [f32; 4] {
        self.position
    }

    fn position_mut(&mut self) -> &mut [f32; 4] {
        &mut self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_bounds_on_construction() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -30.0), 20.0, WHITE, DEFAULT_MATERIAL);
        assert_eq!(sphere.bounds[0], [-20.0, -20.0, -50.0, 0.0]);
        assert_eq!(sphere.bounds[1], [20.0, 20.0, -10.0, 0.0]);
    }

    #[test]
    fn test_sphere_regenerate_follows_position() {
        let mut sphere = Sphere::default();
        sphere.position = [5.0, 0.0, 0.0, 1.0];
        sphere.regenerate();
        assert_eq!(sphere.bounds().min, Vec3::new(4.0, -1.0, -1.0));
        assert_eq!(sphere.bounds().max, Vec3::new(6.0, 1.0, 1.0));
    }

    #[test]
    fn test_sphere_regenerate_idempotent() {
        let mut sphere = Sphere::new(Vec3::new(1.5, -2.0, 7.0), 3.0, WHITE, DEFAULT_MATERIAL);
        sphere.regenerate();
        let first = sphere.bounds;
        sphere.regenerate();
        assert_eq!(sphere.bounds, first);
    }
}
