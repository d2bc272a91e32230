//! Numbered scene presets.
//!
//! Presets 1, 4, 6 and 7 are fully deterministic. Presets 2, 3, 5, 8 and 9
//! draw from the scene's random generator (positions and motion for 2, colors
//! only for the rest); seed the scene to make them reproducible.

mod field;
mod grid;
mod hexagon;
mod orbit;
mod pyramid;
mod ring;
mod wave;

pub use field::load_random_field;
pub use grid::{load_bobbing_grid, load_lit_grid};
pub use hexagon::load_hexagon_room;
pub use orbit::load_orbit;
pub use pyramid::load_pyramid;
pub use ring::{load_fog_ring, load_ring};
pub use wave::load_wave;

use crate::error::Result;
use crate::scene::Scene;

/// Known preset ids and their names
pub const PRESETS: [(u32, &str); 9] = [
    (1, "bobbing-grid"),
    (2, "random-field"),
    (3, "ring"),
    (4, "wave"),
    (5, "pyramid"),
    (6, "hexagon-room"),
    (7, "lit-grid"),
    (8, "orbit"),
    (9, "fog-ring"),
];

pub fn preset_name(id: u32) -> Option<&'static str> {
    PRESETS.iter().find(|(preset, _)| *preset == id).map(|(_, name)| *name)
}

/// Resolve a preset by id or by name
pub fn preset_id(key: &str) -> Option<u32> {
    key.parse::<u32>()
        .ok()
        .or_else(|| PRESETS.iter().find(|(_, name)| *name == key).map(|(id, _)| *id))
}

/// Run the construction recipe for `id` on an already cleared scene.
///
/// Returns `Ok(false)` and leaves the scene empty when `id` is not a preset.
pub fn populate(scene: &mut Scene, id: u32) -> Result<bool> {
    match id {
        1 => load_bobbing_grid(scene)?,
        2 => load_random_field(scene)?,
        3 => load_ring(scene)?,
        4 => load_wave(scene)?,
        5 => load_pyramid(scene)?,
        6 => load_hexagon_room(scene)?,
        7 => load_lit_grid(scene)?,
        8 => load_orbit(scene)?,
        9 => load_fog_ring(scene)?,
        _ => return Ok(false),
    }
    Ok(true)
}
