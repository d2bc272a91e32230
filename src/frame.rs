use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::layout::ObjectCounts;

pub const DEFAULT_BOUNCES: u32 = 20;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
    pub paused: bool,
}

/// Animation time source driven by the host loop.
///
/// Time only advances while unpaused; pausing freezes it at the last value.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    frame_number: u64,
    time: f32,
    paused: bool,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `delta` seconds (ignored while paused) and describe the new frame
    pub fn tick(&mut self, delta: f32) -> FrameInfo {
        if !self.paused {
            self.time += delta;
        }
        let info = FrameInfo {
            number: self.frame_number,
            time: self.time,
            delta,
            paused: self.paused,
        };
        self.frame_number += 1;
        info
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}

/// Render-stage switches carried in the frame uniforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub bounces: u32,
    pub animation: bool,
    pub reflections: bool,
    pub lighting: bool,
}

impl RenderSettings {
    pub fn increase_bounces(&mut self) {
        self.bounces += 1;
    }

    /// Never drops below one bounce
    pub fn decrease_bounces(&mut self) {
        self.bounces = self.bounces.saturating_sub(1).max(1);
    }

    fn flags(&self) -> u32 {
        let mut flags = 0;
        if self.reflections {
            flags |= FLAG_REFLECTIONS;
        }
        if self.lighting {
            flags |= FLAG_LIGHTING;
        }
        flags
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            bounces: DEFAULT_BOUNCES,
            animation: true,
            reflections: true,
            lighting: true,
        }
    }
}

pub const FLAG_REFLECTIONS: u32 = 1;
pub const FLAG_LIGHTING: u32 = 1 << 1;

/// Per-frame uniform block for the render stage
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub sky_color: [f32; 4],
    pub time: f32,
    pub bounces: u32,
    pub animation: u32,
    pub flags: u32,
    pub counts: ObjectCounts,
}

impl FrameUniforms {
    pub fn new(
        frame: &FrameInfo,
        settings: &RenderSettings,
        counts: ObjectCounts,
        sky_color: [f32; 4],
        view: Mat4,
        projection: Mat4,
    ) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            sky_color,
            time: frame.time,
            bounces: settings.bounces.max(1),
            animation: (settings.animation && !frame.paused) as u32,
            flags: settings.flags(),
            counts,
        }
    }
}
