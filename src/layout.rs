use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};
use crate::objects::PrimitiveKind;
use crate::scene::Scene;

/// Records reserved per primitive type unless configured otherwise
pub const DEFAULT_CAPACITY: usize = 100;

/// Largest packed buffer a layout may describe (1 GiB)
pub const MAX_LAYOUT_BYTES: usize = 1 << 30;

/// Fixed number of records reserved for each primitive type
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capacities {
    pub planes: usize,
    pub spheres: usize,
    pub quads: usize,
    pub cubes: usize,
    pub volumes: usize,
    pub lights: usize,
}

impl Capacities {
    pub const fn uniform(capacity: usize) -> Self {
        Self {
            planes: capacity,
            spheres: capacity,
            quads: capacity,
            cubes: capacity,
            volumes: capacity,
            lights: capacity,
        }
    }

    pub const fn get(&self, kind: PrimitiveKind) -> usize {
        match kind {
            PrimitiveKind::Plane => self.planes,
            PrimitiveKind::Sphere => self.spheres,
            PrimitiveKind::Quad => self.quads,
            PrimitiveKind::Cube => self.cubes,
            PrimitiveKind::Volume => self.volumes,
            PrimitiveKind::Light => self.lights,
        }
    }
}

impl Default for Capacities {
    fn default() -> Self {
        Self::uniform(DEFAULT_CAPACITY)
    }
}

/// Byte ranges of every type's reserved span in the packed scene buffer.
///
/// Spans follow the fixed order Plane, Sphere, Quad, Cube, Volume, Light, each
/// `capacity * record_size` bytes, with no gaps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferLayout {
    capacities: Capacities,
    offsets: [usize; 6],
    size: usize,
}

impl BufferLayout {
    /// Fails when the spans add up to more than [`MAX_LAYOUT_BYTES`]
    pub fn new(capacities: Capacities) -> Result<Self> {
        let too_large = || SceneError::LayoutTooLarge { capacities, limit: MAX_LAYOUT_BYTES };
        let mut offsets = [0; 6];
        let mut size: usize = 0;
        for kind in PrimitiveKind::ALL {
            offsets[kind.index()] = size;
            size = capacities
                .get(kind)
                .checked_mul(kind.record_size())
                .and_then(|span| size.checked_add(span))
                .filter(|&total| total <= MAX_LAYOUT_BYTES)
                .ok_or_else(too_large)?;
        }
        Ok(Self { capacities, offsets, size })
    }

    pub fn capacities(&self) -> &Capacities {
        &self.capacities
    }

    pub fn capacity(&self, kind: PrimitiveKind) -> usize {
        self.capacities.get(kind)
    }

    pub fn offset(&self, kind: PrimitiveKind) -> usize {
        self.offsets[kind.index()]
    }

    pub fn range(&self, kind: PrimitiveKind) -> Range<usize> {
        let start = self.offset(kind);
        start..start + self.capacity(kind) * kind.record_size()
    }

    /// Total size in bytes of the packed buffer
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Live record count per type, handed to the render stage next to the packed bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectCounts {
    pub planes: u32,
    pub spheres: u32,
    pub quads: u32,
    pub cubes: u32,
    pub volumes: u32,
    pub lights: u32,
    #[serde(skip)]
    pub _pad: [u32; 2],
}

impl ObjectCounts {
    pub fn of(scene: &Scene) -> Self {
        let count = |kind| scene.len(kind) as u32;
        Self {
            planes: count(PrimitiveKind::Plane),
            spheres: count(PrimitiveKind::Sphere),
            quads: count(PrimitiveKind::Quad),
            cubes: count(PrimitiveKind::Cube),
            volumes: count(PrimitiveKind::Volume),
            lights: count(PrimitiveKind::Light),
            _pad: [0; 2],
        }
    }

    pub fn get(&self, kind: PrimitiveKind) -> u32 {
        match kind {
            PrimitiveKind::Plane => self.planes,
            PrimitiveKind::Sphere => self.spheres,
            PrimitiveKind::Quad => self.quads,
            PrimitiveKind::Cube => self.cubes,
            PrimitiveKind::Volume => self.volumes,
            PrimitiveKind::Light => self.lights,
        }
    }
}
