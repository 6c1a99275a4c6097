//! wgpu renderer for the scene's four drawables.
//!
//! [`ScenePass`] owns the GPU side: a line pipeline (grid, frustum), a triangle
//! pipeline (cube, NDC cube), one uniform buffer per drawable, the vertex and
//! index buffers, and a depth buffer. The scene drives it through the
//! [`RenderTarget`] trait, so the scene itself never touches wgpu.
//!
//! # Buffers
//!
//! | Drawable | Vertices                    | Indices             |
//! |----------|-----------------------------|---------------------|
//! | Grid     | static, line list           | none                |
//! | Cube     | static                      | static, 36          |
//! | NDC cube | rewritten every frame       | shared with cube    |
//! | Frustum  | rewritten every frame       | static, 32 (lines)  |

use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::color::Color;
use crate::frustum::{FRUSTUM_COLORS, FRUSTUM_INDICES, FRUSTUM_VERTEX_COUNT};
use crate::geometry::{
    CUBE_INDICES, CUBE_VERTEX_COUNT, ColorVertex, colored_vertices, cube_colors, cube_vertices,
    grid_vertices,
};
use crate::gpu::GpuContext;
use crate::scene::{Drawable, RenderTarget, SceneSurface};

/// Remaps OpenGL clip depth (-1..1) to the 0..1 range wgpu clips against.
///
/// The scene's matrices follow the OpenGL convention so that NDC depth is in
/// [-1, 1]; this correction is applied only when uploading to the GPU.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU: Mat4 = Mat4::from_cols_array(&[
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
]);

/// Per-drawable uniforms.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct DrawUniforms {
    /// Object-to-clip matrix, already depth-corrected for wgpu.
    mvp: [[f32; 4]; 4],
}

struct UniformSlot {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

const DRAWABLE_COUNT: usize = 4;

fn slot_index(drawable: Drawable) -> usize {
    match drawable {
        Drawable::Grid => 0,
        Drawable::Cube => 1,
        Drawable::NdcCube => 2,
        Drawable::Frustum => 3,
    }
}

/// Renders a [`SceneSurface`] into the window surface.
pub struct ScenePass {
    triangle_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    slots: [UniformSlot; DRAWABLE_COUNT],
    cube_vertex_buffer: wgpu::Buffer,
    cube_index_buffer: wgpu::Buffer,
    ndc_vertex_buffer: wgpu::Buffer,
    grid_vertex_buffer: wgpu::Buffer,
    grid_vertex_count: u32,
    frustum_vertex_buffer: wgpu::Buffer,
    frustum_index_buffer: wgpu::Buffer,
    depth_view: wgpu::TextureView,
    depth_size: (u32, u32),
}

impl ScenePass {
    /// Creates pipelines and buffers. Static geometry is uploaded here, once.
    pub fn new(gpu: &GpuContext) -> Self {
        let device = &gpu.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/scene.wgsl").into()),
        });

        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Draw Uniforms Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        // One buffer per drawable: all uniform writes land before the single
        // submit, so drawables cannot share a buffer.
        let slots = std::array::from_fn(|i| {
            let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Draw Uniforms"),
                size: std::mem::size_of::<DrawUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(["Grid", "Cube", "NDC Cube", "Frustum"][i]),
                layout: &uniform_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            });
            UniformSlot { buffer, bind_group }
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&uniform_layout],
            push_constant_ranges: &[],
        });

        let triangle_pipeline = create_pipeline(
            gpu,
            &pipeline_layout,
            &shader,
            wgpu::PrimitiveTopology::TriangleList,
            "Triangle Pipeline",
        );
        let line_pipeline = create_pipeline(
            gpu,
            &pipeline_layout,
            &shader,
            wgpu::PrimitiveTopology::LineList,
            "Line Pipeline",
        );

        let cube_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Vertex Buffer"),
            contents: bytemuck::cast_slice(&cube_vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let cube_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Index Buffer"),
            contents: bytemuck::cast_slice(&CUBE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });
        let ndc_vertex_buffer = dynamic_vertex_buffer(gpu, CUBE_VERTEX_COUNT, "NDC Cube Vertex Buffer");

        let grid = grid_vertices();
        let grid_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Grid Vertex Buffer"),
            contents: bytemuck::cast_slice(&grid),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let frustum_vertex_buffer =
            dynamic_vertex_buffer(gpu, FRUSTUM_VERTEX_COUNT, "Frustum Vertex Buffer");
        let frustum_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Frustum Index Buffer"),
            contents: bytemuck::cast_slice(&FRUSTUM_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let depth_view = create_depth_view(gpu);

        Self {
            triangle_pipeline,
            line_pipeline,
            slots,
            cube_vertex_buffer,
            cube_index_buffer,
            ndc_vertex_buffer,
            grid_vertex_buffer,
            grid_vertex_count: grid.len() as u32,
            frustum_vertex_buffer,
            frustum_index_buffer,
            depth_view,
            depth_size: (gpu.width(), gpu.height()),
        }
    }

    /// Recreates the depth buffer if the surface size changed.
    pub fn ensure_depth_size(&mut self, gpu: &GpuContext) {
        if self.depth_size != (gpu.width(), gpu.height()) {
            self.depth_view = create_depth_view(gpu);
            self.depth_size = (gpu.width(), gpu.height());
        }
    }

    /// Lets `scene` upload its dynamic geometry and issue draws, then presents.
    pub fn render(
        &mut self,
        gpu: &GpuContext,
        scene: &mut dyn SceneSurface,
    ) -> Result<(), wgpu::SurfaceError> {
        self.ensure_depth_size(gpu);

        let output = gpu.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut frame = FrameRecorder {
            gpu,
            pass: self,
            draws: Vec::with_capacity(DRAWABLE_COUNT),
        };
        scene.render(&mut frame);
        let draws = frame.draws;

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(Color::BACKGROUND.into()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for drawable in draws {
                self.encode(&mut render_pass, drawable);
            }
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn encode(&self, render_pass: &mut wgpu::RenderPass<'_>, drawable: Drawable) {
        render_pass.set_bind_group(0, &self.slots[slot_index(drawable)].bind_group, &[]);

        match drawable {
            Drawable::Grid => {
                render_pass.set_pipeline(&self.line_pipeline);
                render_pass.set_vertex_buffer(0, self.grid_vertex_buffer.slice(..));
                render_pass.draw(0..self.grid_vertex_count, 0..1);
            }
            Drawable::Cube | Drawable::NdcCube => {
                let vertices = if drawable == Drawable::Cube {
                    &self.cube_vertex_buffer
                } else {
                    &self.ndc_vertex_buffer
                };
                render_pass.set_pipeline(&self.triangle_pipeline);
                render_pass.set_vertex_buffer(0, vertices.slice(..));
                render_pass
                    .set_index_buffer(self.cube_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..CUBE_INDICES.len() as u32, 0, 0..1);
            }
            Drawable::Frustum => {
                render_pass.set_pipeline(&self.line_pipeline);
                render_pass.set_vertex_buffer(0, self.frustum_vertex_buffer.slice(..));
                render_pass.set_index_buffer(
                    self.frustum_index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                render_pass.draw_indexed(0..FRUSTUM_INDICES.len() as u32, 0, 0..1);
            }
        }
    }
}

/// Collects one frame's uploads and draws from the scene.
struct FrameRecorder<'a> {
    gpu: &'a GpuContext,
    pass: &'a ScenePass,
    draws: Vec<Drawable>,
}

impl RenderTarget for FrameRecorder<'_> {
    fn upload_frustum(&mut self, positions: &[Vec3; FRUSTUM_VERTEX_COUNT]) {
        let vertices = colored_vertices(positions, &FRUSTUM_COLORS);
        self.gpu.queue.write_buffer(
            &self.pass.frustum_vertex_buffer,
            0,
            bytemuck::cast_slice(&vertices),
        );
    }

    fn upload_ndc_cube(&mut self, positions: &[Vec3; CUBE_VERTEX_COUNT]) {
        let vertices = colored_vertices(positions, &cube_colors());
        self.gpu.queue.write_buffer(
            &self.pass.ndc_vertex_buffer,
            0,
            bytemuck::cast_slice(&vertices),
        );
    }

    fn draw(&mut self, drawable: Drawable, mvp: Mat4) {
        let uniforms = DrawUniforms {
            mvp: (OPENGL_TO_WGPU * mvp).to_cols_array_2d(),
        };
        self.gpu.queue.write_buffer(
            &self.pass.slots[slot_index(drawable)].buffer,
            0,
            bytemuck::cast_slice(&[uniforms]),
        );
        self.draws.push(drawable);
    }
}

fn create_pipeline(
    gpu: &GpuContext,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    topology: wgpu::PrimitiveTopology,
    label: &str,
) -> wgpu::RenderPipeline {
    gpu.device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs"),
                buffers: &[ColorVertex::LAYOUT],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            // No culling: the perspective divide mirrors the NDC cube's winding.
            primitive: wgpu::PrimitiveState {
                topology,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}

fn dynamic_vertex_buffer(gpu: &GpuContext, vertex_count: usize, label: &str) -> wgpu::Buffer {
    gpu.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (vertex_count * std::mem::size_of::<ColorVertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_depth_view(gpu: &GpuContext) -> wgpu::TextureView {
    let texture = gpu.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: gpu.width(),
            height: gpu.height(),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth32Float,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
