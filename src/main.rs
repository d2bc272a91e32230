use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use euclid_scene::camera::Camera;
use euclid_scene::cli::Cli;
use euclid_scene::gpu::{GpuContext, SceneBuffers};
use euclid_scene::layout::ObjectCounts;
use euclid_scene::pipeline::FramePipeline;
use euclid_scene::scene::Scene;
use euclid_scene::scenes::preset_name;

const ASPECT_RATIO: f32 = 16.0 / 9.0;

/// Summary of the last frame, written with `--report`
#[derive(Debug, Serialize)]
struct FrameReport {
    scene: u32,
    preset: Option<&'static str>,
    frames: u32,
    time: f32,
    paused: bool,
    bounces: u32,
    buffer_bytes: usize,
    counts: ObjectCounts,
    updaters: usize,
    sky_color: [f32; 4],
    elapsed_ms: f64,
    gpu_verified: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = cli.resolve_settings()?;

    let scene = match cli.seed {
        Some(seed) => Scene::with_seed(seed),
        None => Scene::new(),
    };
    let mut pipeline = FramePipeline::new(scene, settings.capacities, settings.render)?;
    pipeline
        .load(cli.scene)
        .with_context(|| format!("Failed to load scene {}", cli.scene))?;
    pipeline.clock_mut().set_paused(cli.paused);

    let gpu = if cli.gpu {
        let context = pollster::block_on(GpuContext::new()).context("Failed to create GPU context")?;
        let buffers = SceneBuffers::new(&context, pipeline.serializer().layout())?;
        Some((context, buffers))
    } else {
        None
    };

    let camera = Camera::new();
    let start = Instant::now();
    let mut counts = ObjectCounts::default();
    let mut time = 0.0;

    for _ in 0..cli.frames {
        let uniforms = pipeline.step(cli.dt, &camera, ASPECT_RATIO)?;
        if let Some((context, buffers)) = &gpu {
            buffers.upload(context, pipeline.serializer().bytes(), &uniforms)?;
        }
        counts = uniforms.counts;
        time = uniforms.time;
    }
    let elapsed = start.elapsed();

    let gpu_verified = match &gpu {
        Some((context, buffers)) => {
            let readback = context.read_buffer_sync(buffers.scene_buffer())?;
            anyhow::ensure!(
                readback.as_slice() == pipeline.serializer().bytes(),
                "GPU scene buffer does not match the packed frame"
            );
            info!("Verified {} bytes on the GPU", readback.len());
            true
        }
        None => false,
    };

    let preset = preset_name(cli.scene);
    println!(
        "Scene {} ({}): {} frames in {:.2?}, t={:.3}s",
        cli.scene,
        preset.unwrap_or("empty"),
        cli.frames,
        elapsed,
        time
    );
    println!(
        "  planes={} spheres={} quads={} cubes={} volumes={} lights={} updaters={}",
        counts.planes,
        counts.spheres,
        counts.quads,
        counts.cubes,
        counts.volumes,
        counts.lights,
        pipeline.scene().updaters().len()
    );

    if let Some(path) = &cli.report {
        let report = FrameReport {
            scene: cli.scene,
            preset,
            frames: cli.frames,
            time,
            paused: pipeline.clock().is_paused(),
            bounces: pipeline.settings().bounces,
            buffer_bytes: pipeline.serializer().layout().size(),
            counts,
            updaters: pipeline.scene().updaters().len(),
            sky_color: pipeline.scene().sky_color(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            gpu_verified,
        };
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json).with_context(|| format!("Failed to write report {}", path.display()))?;
        info!("Wrote report to {}", path.display());
    }

    Ok(())
}
