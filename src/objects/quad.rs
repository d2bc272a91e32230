use glam::Vec3;

use super::{Material, Movable, Primitive, PrimitiveKind, DEFAULT_MATERIAL, WHITE};
use crate::math::{face_plane, AABB};

/// Parallelogram spanned by two edges from an anchor point
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quad {
    pub position: [f32; 4],
    pub edges: [[f32; 4]; 2],
    pub color: [f32; 4],
    pub normal: [f32; 4],      // x, y, z, offset (generated)
    pub bounds: [[f32; 4]; 2], // generated
    pub material: Material,
}

impl Quad {
    pub fn new(position: Vec3, edge1: Vec3, edge2: Vec3, color: [f32; 4], material: Material) -> Self {
        let mut quad = Self {
            position: position.extend(0.0).to_array(),
            edges: [edge1.extend(0.0).to_array(), edge2.extend(0.0).to_array()],
            color,
            normal: [0.0; 4],
            bounds: [[0.0; 4]; 2],
            material,
        };
        quad.regenerate();
        quad
    }

    pub fn anchor(&self) -> Vec3 {
        Vec3::from_slice(&self.position[..3])
    }

    /// Edge `i` of the two spanning edges.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2`.
    pub fn edge(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.edges[i][..3])
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_slice(&self.normal[..3])
    }

    pub fn bounds(&self) -> AABB {
        AABB::from_records(&self.bounds)
    }
}

impl Default for Quad {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::X, Vec3::Y, WHITE, DEFAULT_MATERIAL)
    }
}

impl Primitive for Quad {
    const KIND: PrimitiveKind = PrimitiveKind::Quad;

    fn regenerate(&mut self) {
        let anchor = self.anchor();
        let (e1, e2) = (self.edge(0), self.edge(1));
        self.normal = face_plane(anchor, e1, e2).to_array();
        self.bounds = AABB::spanning(anchor, &[e1, e2]).to_records();
    }
}

impl Movable for Quad {
    fn position(&self) -> [f32; 4] {
        self.position
    }

    fn position_mut(&mut self) -> &mut [f32; 4] {
        &mut self.position
    }
}
