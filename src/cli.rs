// cli.rs - Command-line interface and settings file
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::frame::RenderSettings;
use crate::layout::{BufferLayout, Capacities};
use crate::scenes::preset_id;

#[derive(Parser, Debug, Clone)]
#[command(name = "euclid")]
#[command(about = "Animated scene builder and frame packer", long_about = None)]
pub struct Cli {
    /// Preset id (1-9) or name, falls back to the SCENE environment variable
    #[arg(long, env = "SCENE", default_value = "1", value_parser = parse_preset)]
    pub scene: u32,

    /// Number of frames to step
    #[arg(long, default_value_t = 60)]
    pub frames: u32,

    /// Seconds between frames
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Seed for randomized presets (OS entropy when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with animation paused
    #[arg(long, default_value = "false")]
    pub paused: bool,

    /// Ray bounces for the render stage
    #[arg(long)]
    pub bounces: Option<u32>,

    /// Records reserved per primitive type
    #[arg(long)]
    pub capacity: Option<usize>,

    /// JSON settings file with capacities and render settings
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Write a JSON report of the final frame
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Upload every frame to a headless GPU device and verify the last one
    #[arg(long, default_value = "false")]
    pub gpu: bool,
}

fn parse_preset(key: &str) -> std::result::Result<u32, String> {
    preset_id(key).ok_or_else(|| format!("unknown preset '{}'", key))
}

impl Cli {
    /// Settings file contents with command-line overrides applied
    pub fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(capacity) = self.capacity {
            settings.capacities = Capacities::uniform(capacity);
        }
        if let Some(bounces) = self.bounces {
            settings.render.bounces = bounces;
        }
        settings.normalize()?;
        Ok(settings)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub capacities: Capacities,
    pub render: RenderSettings,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let mut settings: Self = serde_json::from_str(text)?;
        settings.normalize()?;
        Ok(settings)
    }

    /// Clamp bounces to at least one and check the capacities fit a packed buffer
    pub fn normalize(&mut self) -> Result<()> {
        self.render.bounces = self.render.bounces.max(1);
        BufferLayout::new(self.capacities)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["euclid", "--scene", "ring"]);
        assert_eq!(cli.scene, 3);
        assert_eq!(cli.frames, 60);
        assert!(!cli.paused);
        assert!(!cli.gpu);
        assert_eq!(cli.resolve_settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_overrides_apply_on_top_of_settings() {
        let cli = Cli::parse_from(["euclid", "--scene", "1", "--capacity", "8", "--bounces", "0"]);
        let settings = cli.resolve_settings().unwrap();
        assert_eq!(settings.capacities, Capacities::uniform(8));
        assert_eq!(settings.render.bounces, 1);
    }

    #[test]
    fn test_unknown_preset_name_is_rejected() {
        assert!(Cli::try_parse_from(["euclid", "--scene", "nowhere"]).is_err());
        assert_eq!(Cli::parse_from(["euclid", "--scene", "42"]).scene, 42);
    }

    #[test]
    fn test_oversized_capacity_is_rejected() {
        let cli = Cli::parse_from(["euclid", "--capacity", "18446744073709551615"]);
        assert!(cli.resolve_settings().is_err());

        assert!(Settings::from_json(r#"{ "capacities": { "cubes": 100000000000 } }"#).is_err());
    }

    #[test]
    fn test_settings_file_bounces_are_clamped() {
        let settings = Settings::from_json(r#"{ "render": { "bounces": 0 } }"#).unwrap();
        assert_eq!(settings.render.bounces, 1);
    }

    #[test]
    fn test_partial_settings_json() {
        let settings = Settings::from_json(r#"{ "capacities": { "spheres": 40 }, "render": { "lighting": false } }"#)
            .unwrap();
        assert_eq!(settings.capacities.spheres, 40);
        assert_eq!(settings.capacities.planes, 100);
        assert!(!settings.render.lighting);
        assert_eq!(settings.render.bounces, 20);
    }
}
