use glam::Vec3;

use super::{Material, Primitive, PrimitiveKind, DEFAULT_MATERIAL, WHITE};

/// Infinite plane. Static once loaded; carries no derived fields.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Plane {
    pub normal: [f32; 4], // x, y, z, offset
    pub color: [f32; 4],
    pub material: Material,
}

impl Plane {
    /// The normal is normalized; the offset is kept as authored.
    pub fn new(normal: Vec3, offset: f32, color: [f32; 4], material: Material) -> Self {
        Self {
            normal: normal.normalize().extend(offset).to_array(),
            color,
            material,
        }
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_slice(&self.normal[..3])
    }

    pub fn offset(&self) -> f32 {
        self.normal[3]
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(Vec3::Y, 0.0, WHITE, DEFAULT_MATERIAL)
    }
}

impl Primitive for Plane {
    const KIND: PrimitiveKind = PrimitiveKind::Plane;
}
