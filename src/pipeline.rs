use log::debug;

use crate::camera::Camera;
use crate::error::Result;
use crate::frame::{AnimationClock, FrameUniforms, RenderSettings};
use crate::layout::Capacities;
use crate::scene::Scene;
use crate::serializer::FrameSerializer;

/// Drives one scene through the per-frame sequence the render stage relies on:
/// apply motion, regenerate derived fields, then pack.
pub struct FramePipeline {
    scene: Scene,
    serializer: FrameSerializer,
    clock: AnimationClock,
    settings: RenderSettings,
}

impl FramePipeline {
    pub fn new(scene: Scene, capacities: Capacities, settings: RenderSettings) -> Result<Self> {
        Ok(Self {
            scene,
            serializer: FrameSerializer::new(capacities)?,
            clock: AnimationClock::new(),
            settings,
        })
    }

    pub fn load(&mut self, id: u32) -> Result<()> {
        self.scene.load(id)
    }

    /// Produce the next frame's packed buffer and uniforms.
    ///
    /// While paused the motion bindings do not run and time stays frozen; the
    /// scene is still packed so the render stage always sees a full frame.
    /// On error nothing from this frame should be presented.
    pub fn step(&mut self, delta: f32, camera: &Camera, aspect: f32) -> Result<FrameUniforms> {
        let frame = self.clock.tick(delta);
        if !frame.paused {
            self.scene.update(frame.time)?;
        }
        let counts = self.serializer.pack(&self.scene)?;
        debug!("Frame {} at t={:.3}: {:?}", frame.number, frame.time, counts);

        Ok(FrameUniforms::new(
            &frame,
            &self.settings,
            counts,
            self.scene.sky_color(),
            camera.view(),
            camera.projection(aspect),
        ))
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn serializer(&self) -> &FrameSerializer {
        &self.serializer
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut AnimationClock {
        &mut self.clock
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut RenderSettings {
        &mut self.settings
    }
}
