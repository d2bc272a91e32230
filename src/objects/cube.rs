use std::ops::{Deref, DerefMut};

use glam::Vec3;

use super::{Material, Movable, Primitive, PrimitiveKind, DEFAULT_MATERIAL, WHITE};
use crate::math::{face_plane, AABB};

/// Parallelepiped spanned by three edges from an anchor point
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Cube {
    pub position: [f32; 4],
    pub edges: [[f32; 4]; 3],
    pub color: [f32; 4],
    pub normals: [[f32; 4]; 3], // x, y, z, offset (generated)
    pub bounds: [[f32; 4]; 2],  // generated
    pub material: Material,
}

impl Cube {
    pub fn new(
        position: Vec3,
        edge1: Vec3,
        edge2: Vec3,
        edge3: Vec3,
        color: [f32; 4],
        material: Material,
    ) -> Self {
        let mut cube = Self {
            position: position.extend(0.0).to_array(),
            edges: [
                edge1.extend(0.0).to_array(),
                edge2.extend(0.0).to_array(),
                edge3.extend(0.0).to_array(),
            ],
            color,
            normals: [[0.0; 4]; 3],
            bounds: [[0.0; 4]; 2],
            material,
        };
        cube.regenerate();
        cube
    }

    /// Axis-aligned cube with side `size` anchored at its minimum corner
    pub fn axis_aligned(position: Vec3, size: f32, color: [f32; 4], material: Material) -> Self {
        Self::new(position, Vec3::X * size, Vec3::Y * size, Vec3::Z * size, color, material)
    }

    pub fn anchor(&self) -> Vec3 {
        Vec3::from_slice(&self.position[..3])
    }

    /// Edge `i` of the three spanning edges.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    pub fn edge(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.edges[i][..3])
    }

    /// Stored (negated) normal of face `i`, built from edges `i` and `i + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.normals[i][..3])
    }

    pub fn bounds(&self) -> AABB {
        AABB::from_records(&self.bounds)
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::axis_aligned(Vec3::ZERO, 1.0, WHITE, DEFAULT_MATERIAL)
    }
}

impl Primitive for Cube {
    const KIND: PrimitiveKind = PrimitiveKind::Cube;

    fn regenerate(&mut self) {
        let anchor = self.anchor();
        let edges = [self.edge(0), self.edge(1), self.edge(2)];
        // Faces through the anchor, stored negated: (e1,e2), (e2,e3), (e3,e1).
        for (i, normal) in self.normals.iter_mut().enumerate() {
            *normal = (-face_plane(anchor, edges[i], edges[(i + 1) % 3])).to_array();
        }
        self.bounds = AABB::spanning(anchor, &edges).to_records();
    }
}

impl Movable for Cube {
    fn position(&self) -> [f32; 4] {
        self.position
    }

    fn position_mut(&mut self) -> &mut [f32; 4] {
        &mut self.position
    }
}

/// Participating-media box. Same record as [`Cube`] but its own collection and buffer region.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Volume(pub Cube);

impl Volume {
    pub fn new(
        position: Vec3,
        edge1: Vec3,
        edge2: Vec3,
        edge3: Vec3,
        color: [f32; 4],
        material: Material,
    ) -> Self {
        Self(Cube::new(position, edge1, edge2, edge3, color, material))
    }
}

impl Deref for Volume {
    type Target = Cube;

    fn deref(&self) -> &Cube {
        &self.0
    }
}

impl DerefMut for Volume {
    fn deref_mut(&mut self) -> &mut Cube {
        &mut self.0
    }
}

impl Primitive for Volume {
    const KIND: PrimitiveKind = PrimitiveKind::Volume;

    fn regenerate(&mut self) {
        self.0.regenerate();
    }
}

impl Movable for Volume {
    fn position(&self) -> [f32; 4] {
        self.0.position
    }

    fn position_mut(&mut self) -> &mut [f32; 4] {
        &mut self.0.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skewed() -> Cube {
        Cube::new(
            Vec3::new(-10.0, -20.0, -10.0),
            Vec3::new(20.0, 0.0, 0.0),
            Vec3::new(3.0, 40.0, 0.0),
            Vec3::new(0.0, 5.0, 20.0),
            WHITE,
            DEFAULT_MATERIAL,
        )
    }

    #[test]
    fn test_cube_normals_orthogonal_to_face_edges() {
        let cube = skewed();
        for i in 0..3 {
            let n = cube.normal(i);
            assert!(n.dot(cube.edge(i)).abs() < 1e-4, "face {} vs edge {}", i, i);
            assert!(n.dot(cube.edge((i + 1) % 3)).abs() < 1e-4, "face {} vs edge {}", i, (i + 1) % 3);
        }
    }

    #[test]
    fn test_unit_cube_faces_point_inward() {
        let cube = Cube::default();
        assert_eq!(cube.normals[0], [0.0, 0.0, -1.0, 0.0]);
        assert_eq!(cube.normals[1], [-1.0, 0.0, 0.0, 0.0]);
        assert_eq!(cube.normals[2], [0.0, -1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cube_bounds_span_all_edges() {
        let cube = Cube::axis_aligned(Vec3::new(5.0, -15.0, -10.0), 10.0, WHITE, DEFAULT_MATERIAL);
        assert_eq!(cube.bounds().min, Vec3::new(5.0, -15.0, -10.0));
        assert_eq!(cube.bounds().max, Vec3::new(15.0, -5.0, 0.0));
    }

    #[test]
    fn test_cube_regenerate_idempotent() {
        let mut cube = skewed();
        cube.regenerate();
        let first = (cube.normals, cube.bounds);
        cube.regenerate();
        assert_eq!((cube.normals, cube.bounds), first);
    }

    #[test]
    fn test_volume_shares_cube_layout() {
        assert_eq!(std::mem::size_of::<Volume>(), std::mem::size_of::<Cube>());
        let volume = Volume::new(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z, WHITE, DEFAULT_MATERIAL);
        assert_eq!(volume.0, Cube::default());
        assert_eq!(bytemuck::bytes_of(&volume), bytemuck::bytes_of(&Cube::default()));
    }

    #[test]
    #[should_panic]
    fn test_cube_has_only_three_faces() {
        Cube::default().normal(3);
    }
}
