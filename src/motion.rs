//! Procedural motion bound to a primitive's position.
//!
//! A binding names its target by collection and index rather than holding a
//! reference, so the scene can grow its collections freely and the binding is
//! resolved against the live record each frame.

use glam::Vec3;

use crate::math::orthonormal_basis;
use crate::objects::PrimitiveKind;

/// Collection slot a motion binding drives
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    pub kind: PrimitiveKind,
    pub index: usize,
}

impl Target {
    pub const fn new(kind: PrimitiveKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// Oscillation along an axis between `min` and `max`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bob {
    pub axis: Vec3,
    pub min: f32,
    pub max: f32,
    pub speed: f32,
    pub offset: f32,
}

impl Bob {
    pub fn new(axis: Vec3, min: f32, max: f32, speed: f32, offset: f32) -> Self {
        Self { axis, min, max, speed, offset }
    }

    /// Scalar distance along the axis at `time`, always within `[min, max]`
    pub fn factor(&self, time: f32) -> f32 {
        self.min + 0.5 * (self.max - self.min) * (1.0 + (self.speed * time + self.offset).sin())
    }
}

/// Orbit of fixed radius in the plane perpendicular to `axis`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    pub axis: Vec3,
    pub radius: f32,
    pub speed: f32,
    pub offset: f32,
}

impl Circle {
    pub fn new(axis: Vec3, radius: f32, speed: f32, offset: f32) -> Self {
        Self { axis, radius, speed, offset }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Motion {
    Bob(Bob),
    Circle(Circle),
}

impl Motion {
    /// Position at `time` for a binding whose origin is `origin`
    pub fn position(&self, origin: Vec3, time: f32) -> Vec3 {
        match self {
            Motion::Bob(bob) => origin + bob.axis * bob.factor(time),
            Motion::Circle(circle) => {
                let (u, v) = orthonormal_basis(circle.axis);
                let phase = circle.speed * time + circle.offset;
                origin + circle.radius * (phase.cos() * u + phase.sin() * v)
            }
        }
    }
}

impl From<Bob> for Motion {
    fn from(bob: Bob) -> Self {
        Motion::Bob(bob)
    }
}

impl From<Circle> for Motion {
    fn from(circle: Circle) -> Self {
        Motion::Circle(circle)
    }
}

/// A motion bound to one target, with the origin captured at bind time
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Updater {
    pub target: Target,
    pub origin: Vec3,
    pub motion: Motion,
}

impl Updater {
    pub fn new(target: Target, origin: Vec3, motion: Motion) -> Self {
        Self { target, origin, motion }
    }

    /// Write the position for `time` into `slot`, keeping its fourth component
    pub fn apply(&self, time: f32, slot: &mut [f32; 4]) {
        let position = self.motion.position(self.origin, time);
        slot[..3].copy_from_slice(&position.to_array());
    }
}
