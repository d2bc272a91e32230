pub mod camera;
pub mod cli;
pub mod error;
pub mod frame;
pub mod gpu;
pub mod layout;
pub mod math;
pub mod motion;
pub mod objects;
pub mod pipeline;
pub mod scene;
pub mod scenes;
pub mod serializer;

pub use error::{Result, SceneError};
pub use frame::{AnimationClock, FrameUniforms, RenderSettings};
pub use layout::{BufferLayout, Capacities, ObjectCounts};
pub use motion::{Bob, Circle, Motion, Target, Updater};
pub use objects::{Cube, Light, Plane, PrimitiveKind, Quad, Sphere, Volume};
pub use pipeline::FramePipeline;
pub use scene::{Scene, SceneState};
pub use serializer::FrameSerializer;
