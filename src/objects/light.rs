use glam::Vec3;

use super::{Material, Movable, Primitive, PrimitiveKind, LIGHT_MATERIAL};

/// Point light
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Light {
    pub position: [f32; 4],
    pub color: [f32; 4],
    pub material: Material,
}

impl Light {
    pub fn new(position: Vec3, color: [f32; 4], material: Material) -> Self {
        Self {
            position: position.extend(0.0).to_array(),
            color,
            material,
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::new(Vec3::ZERO, [1.0; 4], LIGHT_MATERIAL)
    }
}

impl Primitive for Light {
    const KIND: PrimitiveKind = PrimitiveKind::Light;
}

impl Movable for Light {
    fn position(&self) -> [f32; 4] {
        self.position
    }

    fn position_mut(&mut self) -> &mut [f32; 4] {
        &mut self.position
    }
}
