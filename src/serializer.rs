use log::trace;

use crate::error::{Result, SceneError};
use crate::layout::{BufferLayout, Capacities, ObjectCounts};
use crate::objects::{Primitive, PrimitiveKind};
use crate::scene::Scene;

/// Packs a scene's collections into one fixed-layout byte region.
///
/// The region persists across frames: each pack overwrites only the live
/// prefix of every type's span, so bytes past the live count keep whatever
/// an earlier frame left there. Consumers must read the returned counts.
pub struct FrameSerializer {
    layout: BufferLayout,
    // Stored as vec4 records so typed views stay aligned.
    data: Vec<[f32; 4]>,
}

const VEC4: usize = std::mem::size_of::<[f32; 4]>();

impl FrameSerializer {
    pub fn new(capacities: Capacities) -> Result<Self> {
        let layout = BufferLayout::new(capacities)?;
        let data = vec![[0.0; 4]; layout.size() / VEC4];
        Ok(Self { layout, data })
    }

    /// Check every collection against its capacity without writing anything
    pub fn validate(&self, scene: &Scene) -> Result<()> {
        for kind in PrimitiveKind::ALL {
            let count = scene.len(kind);
            let capacity = self.layout.capacity(kind);
            if count > capacity {
                return Err(SceneError::CapacityExceeded { kind, count, capacity });
            }
        }
        Ok(())
    }

    /// Copy the scene's records into their spans and return the live counts.
    ///
    /// A scene that overflows any span is rejected before a single byte is written.
    pub fn pack(&mut self, scene: &Scene) -> Result<ObjectCounts> {
        self.validate(scene)?;

        self.write(scene.planes());
        self.write(scene.spheres());
        self.write(scene.quads());
        self.write(scene.cubes());
        self.write(scene.volumes());
        self.write(scene.lights());

        let counts = ObjectCounts::of(scene);
        trace!("Packed {:?} into {} bytes", counts, self.layout.size());
        Ok(counts)
    }

    fn write<T: Primitive>(&mut self, records: &[T]) {
        let src: &[[f32; 4]] = bytemuck::cast_slice(records);
        let start = self.layout.offset(T::KIND) / VEC4;
        self.data[start..start + src.len()].copy_from_slice(src);
    }

    pub fn layout(&self) -> &BufferLayout {
        &self.layout
    }

    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Records of one type as currently stored, live or stale
    pub fn records<T: Primitive>(&self) -> &[T] {
        let range = self.layout.range(T::KIND);
        bytemuck::cast_slice(&self.data[range.start / VEC4..range.end / VEC4])
    }
}
