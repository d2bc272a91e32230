use glam::Vec3;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SceneError};
use crate::motion::{Motion, Target, Updater};
use crate::objects::{Cube, Light, Movable, Plane, Primitive, PrimitiveKind, Quad, Sphere, Volume};
use crate::scenes;

/// Sky color: r, g, b, gradient bottom
pub const DEFAULT_SKY_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.0];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SceneState {
    Unloaded,
    Loaded(u32),
}

/// Owns every primitive collection and the motion bindings that drive them
pub struct Scene {
    planes: Vec<Plane>,
    spheres: Vec<Sphere>,
    quads: Vec<Quad>,
    cubes: Vec<Cube>,
    volumes: Vec<Volume>,
    lights: Vec<Light>,
    updaters: Vec<Updater>,
    sky_color: [f32; 4],
    state: SceneState,
    rng: StdRng,
}

impl Scene {
    /// Empty scene whose randomized presets differ from run to run
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Empty scene whose randomized presets are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            planes: Vec::new(),
            spheres: Vec::new(),
            quads: Vec::new(),
            cubes: Vec::new(),
            volumes: Vec::new(),
            lights: Vec::new(),
            updaters: Vec::new(),
            sky_color: DEFAULT_SKY_COLOR,
            state: SceneState::Unloaded,
            rng,
        }
    }

    /// Replace the whole scene with preset `id`.
    ///
    /// Every primitive and binding from the previous scene is dropped first.
    /// Unknown ids load an empty scene; this is not an error.
    pub fn load(&mut self, id: u32) -> Result<()> {
        self.clear();

        match scenes::populate(self, id) {
            Ok(true) => {}
            Ok(false) => warn!("Unknown scene preset {}, loading an empty scene", id),
            Err(e) => {
                self.clear();
                return Err(e);
            }
        }

        self.state = SceneState::Loaded(id);
        info!(
            "Loaded scene {}: {} planes, {} spheres, {} quads, {} cubes, {} volumes, {} lights, {} updaters",
            id,
            self.planes.len(),
            self.spheres.len(),
            self.quads.len(),
            self.cubes.len(),
            self.volumes.len(),
            self.lights.len(),
            self.updaters.len(),
        );
        Ok(())
    }

    /// Drop every primitive and binding and return to the unloaded state
    pub fn clear(&mut self) {
        self.planes.clear();
        self.spheres.clear();
        self.quads.clear();
        self.cubes.clear();
        self.volumes.clear();
        self.lights.clear();
        self.updaters.clear();
        self.sky_color = DEFAULT_SKY_COLOR;
        self.state = SceneState::Unloaded;
    }

    /// Advance every binding to `time`, then regenerate derived fields.
    ///
    /// Bindings run in insertion order; spheres, quads, cubes and volumes are
    /// regenerated afterwards in collection order. Planes and lights have no
    /// derived fields.
    pub fn update(&mut self, time: f32) -> Result<()> {
        for i in 0..self.updaters.len() {
            let updater = self.updaters[i];
            updater.apply(time, self.position_mut(updater.target)?);
        }

        regenerate_all(&mut self.spheres);
        regenerate_all(&mut self.quads);
        regenerate_all(&mut self.cubes);
        regenerate_all(&mut self.volumes);
        Ok(())
    }

    /// Bind `motion` to `target`, capturing its current position as the origin
    pub fn bind(&mut self, target: Target, motion: impl Into<Motion>) -> Result<()> {
        let position = self.position(target)?;
        let origin = Vec3::new(position[0], position[1], position[2]);
        let updater = Updater::new(target, origin, motion.into());
        debug!("Bound {:?} to {} #{}", updater.motion, target.kind, target.index);
        self.updaters.push(updater);
        Ok(())
    }

    pub fn add_plane(&mut self, plane: Plane) -> Target {
        push(&mut self.planes, plane)
    }

    pub fn add_sphere(&mut self, sphere: Sphere) -> Target {
        push(&mut self.spheres, sphere)
    }

    pub fn add_quad(&mut self, quad: Quad) -> Target {
        push(&mut self.quads, quad)
    }

    pub fn add_cube(&mut self, cube: Cube) -> Target {
        push(&mut self.cubes, cube)
    }

    pub fn add_volume(&mut self, volume: Volume) -> Target {
        push(&mut self.volumes, volume)
    }

    pub fn add_light(&mut self, light: Light) -> Target {
        push(&mut self.lights, light)
    }

    pub fn position(&self, target: Target) -> Result<[f32; 4]> {
        match target.kind {
            PrimitiveKind::Plane => Err(SceneError::NotMovable(PrimitiveKind::Plane)),
            PrimitiveKind::Sphere => slot(&self.spheres, target).map(Movable::position),
            PrimitiveKind::Quad => slot(&self.quads, target).map(Movable::position),
            PrimitiveKind::Cube => slot(&self.cubes, target).map(Movable::position),
            PrimitiveKind::Volume => slot(&self.volumes, target).map(Movable::position),
            PrimitiveKind::Light => slot(&self.lights, target).map(Movable::position),
        }
    }

    fn position_mut(&mut self, target: Target) -> Result<&mut [f32; 4]> {
        match target.kind {
            PrimitiveKind::Plane => Err(SceneError::NotMovable(PrimitiveKind::Plane)),
            PrimitiveKind::Sphere => slot_mut(&mut self.spheres, target).map(Movable::position_mut),
            PrimitiveKind::Quad => slot_mut(&mut self.quads, target).map(Movable::position_mut),
            PrimitiveKind::Cube => slot_mut(&mut self.cubes, target).map(Movable::position_mut),
            PrimitiveKind::Volume => slot_mut(&mut self.volumes, target).map(Movable::position_mut),
            PrimitiveKind::Light => slot_mut(&mut self.lights, target).map(Movable::position_mut),
        }
    }

    /// Uniform sample between `min` and `max`; a reversed range is allowed
    pub fn rnd(&mut self, min: f32, max: f32) -> f32 {
        min + self.rng.gen::<f32>() * (max - min)
    }

    /// Random RGB color with the given fourth component
    pub fn rnd_color(&mut self, alpha: f32) -> [f32; 4] {
        [self.rnd(0.0, 1.0), self.rnd(0.0, 1.0), self.rnd(0.0, 1.0), alpha]
    }

    pub fn len(&self, kind: PrimitiveKind) -> usize {
        match kind {
            PrimitiveKind::Plane => self.planes.len(),
            PrimitiveKind::Sphere => self.spheres.len(),
            PrimitiveKind::Quad => self.quads.len(),
            PrimitiveKind::Cube => self.cubes.len(),
            PrimitiveKind::Volume => self.volumes.len(),
            PrimitiveKind::Light => self.lights.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        PrimitiveKind::ALL.iter().all(|&kind| self.len(kind) == 0)
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn volumes(&self) -> &[Volume] {
        &self.volumes
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn updaters(&self) -> &[Updater] {
        &self.updaters
    }

    pub fn sky_color(&self) -> [f32; 4] {
        self.sky_color
    }

    pub fn set_sky_color(&mut self, sky_color: [f32; 4]) {
        self.sky_color = sky_color;
    }

    pub fn state(&self) -> SceneState {
        self.state
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

fn push<T: Primitive>(records: &mut Vec<T>, record: T) -> Target {
    records.push(record);
    Target::new(T::KIND, records.len() - 1)
}

fn slot<T: Movable>(records: &[T], target: Target) -> Result<&T> {
    records.get(target.index).ok_or(SceneError::UnboundTarget {
        kind: target.kind,
        index: target.index,
    })
}

fn slot_mut<T: Movable>(records: &mut [T], target: Target) -> Result<&mut T> {
    records.get_mut(target.index).ok_or(SceneError::UnboundTarget {
        kind: target.kind,
        index: target.index,
    })
}

fn regenerate_all<T: Primitive>(records: &mut [T]) {
    records.iter_mut().for_each(Primitive::regenerate);
}
