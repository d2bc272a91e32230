use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use wgpu::{Adapter, Buffer, Device, DeviceDescriptor, Features, Instance, Limits, Queue};

use crate::frame::FrameUniforms;
use crate::layout::BufferLayout;

/// Headless device and queue the packed scene is uploaded to.
///
/// Cloning is cheap (Arc), so the host can hand the same context to whatever
/// render stage consumes the buffers.
#[derive(Clone)]
pub struct GpuContext {
    device: Arc<Device>,
    queue: Arc<Queue>,
}

impl GpuContext {
    pub async fn new() -> Result<Self> {
        let instance = Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("Failed to find appropriate adapter: {:?}", e))?;
        info!("Using adapter {}", adapter.get_info().name);

        let (device, queue) = Self::request_device(&adapter).await?;

        Ok(Self {
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Copy `source` into a mappable staging buffer and read it back.
    ///
    /// Blocks until the device is idle.
    pub fn read_buffer_sync(&self, source: &Buffer) -> Result<Vec<u8>> {
        let staging = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Readback Staging Buffer"),
            size: source.size(),
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Readback Encoder"),
        });
        encoder.copy_buffer_to_buffer(source, 0, &staging, 0, source.size());
        self.queue.submit(Some(encoder.finish()));

        let slice = staging.slice(..);
        let (sender, receiver) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            sender.send(result).ok();
        });

        self.device
            .poll(wgpu::PollType::Wait {
                submission_index: None,
                timeout: None,
            })
            .ok();

        match receiver.recv() {
            Ok(Ok(())) => {
                let data = slice.get_mapped_range();
                let bytes = data.to_vec();
                drop(data);
                staging.unmap();
                Ok(bytes)
            }
            Ok(Err(e)) => Err(anyhow!("Buffer mapping failed: {:?}", e)),
            Err(_) => Err(anyhow!("Channel closed before receiving result")),
        }
    }

    async fn request_device(adapter: &Adapter) -> Result<(Device, Queue)> {
        // The packed scene can exceed the default storage binding limit with large capacities
        let limits = Limits {
            max_storage_buffer_binding_size: adapter.limits().max_storage_buffer_binding_size,
            max_buffer_size: adapter.limits().max_buffer_size,
            ..Default::default()
        };

        adapter
            .request_device(&DeviceDescriptor {
                label: Some("Scene Device"),
                required_features: Features::empty(),
                required_limits: limits,
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .context("Failed to create device")
    }
}

/// GPU-side copies of the packed scene and the frame uniforms.
///
/// The packed scene is bound as a read-only storage buffer at binding 0 and the
/// uniforms at binding 1; the default layout is larger than the 64 KiB uniform limit.
pub struct SceneBuffers {
    scene: Buffer,
    uniforms: Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl SceneBuffers {
    pub fn new(gpu: &GpuContext, layout: &BufferLayout) -> Result<Self> {
        let device = gpu.device();
        let size = layout.size() as u64;
        let max = device.limits().max_storage_buffer_binding_size as u64;
        if size > max {
            return Err(anyhow!("Scene buffer of {} bytes exceeds the device limit of {} bytes", size, max));
        }

        let scene = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Packed Scene Buffer"),
            size,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });

        let uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Frame Uniforms Buffer"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Scene Bind Group Layout"),
            entries: &[
                // Packed scene (binding 0)
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::COMPUTE | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                // Frame uniforms (binding 1)
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::COMPUTE | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: scene.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: uniforms.as_entire_binding(),
                },
            ],
        });

        debug!("Allocated {} byte scene buffer", size);

        Ok(Self {
            scene,
            uniforms,
            bind_group_layout,
            bind_group,
        })
    }

    /// Write one frame's packed bytes and uniforms and submit
    pub fn upload(&self, gpu: &GpuContext, packed: &[u8], uniforms: &FrameUniforms) -> Result<()> {
        if packed.len() as u64 != self.scene.size() {
            return Err(anyhow!(
                "Packed scene is {} bytes but the buffer holds {}",
                packed.len(),
                self.scene.size()
            ));
        }
        gpu.queue().write_buffer(&self.scene, 0, packed);
        gpu.queue().write_buffer(&self.uniforms, 0, bytemuck::bytes_of(uniforms));
        gpu.queue().submit(std::iter::empty());
        Ok(())
    }

    pub fn scene_buffer(&self) -> &Buffer {
        &self.scene
    }

    pub fn uniforms_buffer(&self) -> &Buffer {
        &self.uniforms
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
