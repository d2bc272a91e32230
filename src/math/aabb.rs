use glam::Vec3;

/// Axis-aligned bounding pair as stored in the `bounds[2]` field of a record
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Bounds of a sphere: center minus/plus the radius on every axis
    pub fn around(center: Vec3, radius: f32) -> Self {
        let extent = Vec3::splat(radius);
        Self::new(center - extent, center + extent)
    }

    /// Bounding pair spanning an anchor and the far corner reached by `edges`.
    ///
    /// Matches the consumer's approximation: the pair is (anchor, anchor + Σedges),
    /// not the component-wise min/max over every implied corner.
    pub fn spanning(anchor: Vec3, edges: &[Vec3]) -> Self {
        let far = edges.iter().fold(anchor, |acc, edge| acc + *edge);
        Self::new(anchor, far)
    }

    pub fn from_records(bounds: &[[f32; 4]; 2]) -> Self {
        Self::new(
            Vec3::from_slice(&bounds[0][..3]),
            Vec3::from_slice(&bounds[1][..3]),
        )
    }

    pub fn to_records(self) -> [[f32; 4]; 2] {
        [self.min.extend(0.0).to_array(), self.max.extend(0.0).to_array()]
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}
