mod cube;
mod light;
mod plane;
mod quad;
mod sphere;

pub use cube::{Cube, Volume};
pub use light::Light;
pub use plane::Plane;
pub use quad::Quad;
pub use sphere::Sphere;

use serde::{Deserialize, Serialize};

/// Material record: ambient, diffuse, specular, exponent
pub type Material = [f32; 4];

pub const DEFAULT_MATERIAL: Material = [0.1, 0.5, 0.5, 32.0];
pub const LIGHT_MATERIAL: Material = [1.0, 1.0, 1.0, 1.0];
pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 0.0];

/// Primitive types in buffer order. The order is part of the wire contract.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Plane,
    Sphere,
    Quad,
    Cube,
    Volume,
    Light,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 6] = [
        PrimitiveKind::Plane,
        PrimitiveKind::Sphere,
        PrimitiveKind::Quad,
        PrimitiveKind::Cube,
        PrimitiveKind::Volume,
        PrimitiveKind::Light,
    ];

    /// Position of this kind in the buffer ordering
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Size in bytes of one serialized record
    pub const fn record_size(self) -> usize {
        match self {
            PrimitiveKind::Plane => std::mem::size_of::<Plane>(),
            PrimitiveKind::Sphere => std::mem::size_of::<Sphere>(),
            PrimitiveKind::Quad => std::mem::size_of::<Quad>(),
            PrimitiveKind::Cube => std::mem::size_of::<Cube>(),
            PrimitiveKind::Volume => std::mem::size_of::<Volume>(),
            PrimitiveKind::Light => std::mem::size_of::<Light>(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Plane => "plane",
            PrimitiveKind::Sphere => "sphere",
            PrimitiveKind::Quad => "quad",
            PrimitiveKind::Cube => "cube",
            PrimitiveKind::Volume => "volume",
            PrimitiveKind::Light => "light",
        }
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A GPU record stored in one of the scene's collections
pub trait Primitive: bytemuck::Pod {
    const KIND: PrimitiveKind;

    /// Recompute derived fields from the authored ones. No-op for kinds without any.
    fn regenerate(&mut self) {}
}

/// A primitive whose first record is a position that motion bindings can drive
pub trait Movable: Primitive {
    fn position(&self) -> [f32; 4];
    fn position_mut(&mut self) -> &mut [f32; 4];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sizes_are_vec4_multiples() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(kind.record_size() % 16, 0, "{} record is misaligned", kind);
        }
    }

    #[test]
    fn test_record_sizes_match_wire_contract() {
        assert_eq!(PrimitiveKind::Plane.record_size(), 48);
        assert_eq!(PrimitiveKind::Sphere.record_size(), 80);
        assert_eq!(PrimitiveKind::Quad.record_size(), 128);
        assert_eq!(PrimitiveKind::Cube.record_size(), 176);
        assert_eq!(PrimitiveKind::Volume.record_size(), 176);
        assert_eq!(PrimitiveKind::Light.record_size(), 48);
    }

    #[test]
    fn test_kind_order_matches_index() {
        for (i, kind) in PrimitiveKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
