use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::camera::SceneCamera;
use crate::scene::LayerKind;
use crate::shaders;

/// Clear color shared with the lensing shader's ambient term.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.1,
    g: 0.1,
    b: 0.15,
    a: 1.0,
};

const BACKGROUND_HALF_EXTENT: f32 = 40.0;
const BLACK_HOLE_RADIUS: f32 = 2.0;
const STAR_RADIUS: f32 = 1.0;
const DISK_INNER: f32 = 2.5;
const DISK_OUTER: f32 = 6.0;
const RING_INNER: f32 = 2.1;
const RING_OUTER: f32 = 2.6;
const RING_SEGMENTS: u32 = 64;

const DISK_COLOR: [f32; 4] = [0.9, 0.45, 0.1, 1.0];
const RING_COLOR: [f32; 4] = [1.0, 0.9, 0.6, 1.0];
const BLACK_HOLE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const STAR_COLOR: [f32; 4] = [1.0, 1.0, 0.7, 1.0];

/// Per-layer transform uniforms. Layout matches the `LayerUniforms` block in
/// every WGSL program: three column-major mat4x4<f32>.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct LayerUniforms {
    model: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
    color: [f32; 4],
}

/// Axis-aligned billboard quad in the XY plane as a 4-vertex triangle strip.
fn quad_vertices(half_extent: f32, color: [f32; 4]) -> Vec<Vertex> {
    let h = half_extent;
    vec![
        Vertex { position: [-h, -h, 0.0], color },
        Vertex { position: [h, -h, 0.0], color },
        Vertex { position: [-h, h, 0.0], color },
        Vertex { position: [h, h, 0.0], color },
    ]
}

/// Annulus in the XY plane as a triangle strip alternating inner and outer
/// rim vertices, closed by repeating the first pair.
fn annulus_vertices(inner: f32, outer: f32, segments: u32, color: [f32; 4]) -> Vec<Vertex> {
    let mut verts = Vec::with_capacity(2 * (segments as usize + 1));
    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
        let (sin, cos) = theta.sin_cos();
        verts.push(Vertex {
            position: [cos * inner, sin * inner, 0.0],
            color,
        });
        verts.push(Vertex {
            position: [cos * outer, sin * outer, 0.0],
            color,
        });
    }
    verts
}

/// One immutable render layer: compiled pipeline, static mesh, and the
/// uniform buffer/bind group resolved at creation time. Only the uniform
/// *values* change per frame.
struct RenderLayer {
    kind: LayerKind,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// The ordered multi-layer pipeline: five layers drawn back-to-front in
/// [`LayerKind::ORDER`] within a single render pass.
pub struct LayerPipeline {
    layers: Vec<RenderLayer>,
}

impl LayerPipeline {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("layer_uniform_layout"),
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

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("layer_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let build = |kind: LayerKind, shader_src: &str, mesh: Vec<Vertex>| {
            Self::build_layer(
                device,
                surface_format,
                &pipeline_layout,
                &bind_group_layout,
                kind,
                shader_src,
                mesh,
            )
        };

        // Construction order is the draw order.
        let layers = vec![
            build(
                LayerKind::Background,
                shaders::BACKGROUND_SHADER,
                quad_vertices(BACKGROUND_HALF_EXTENT, [0.0; 4]),
            ),
            build(
                LayerKind::Disk,
                shaders::BODY_SHADER,
                annulus_vertices(DISK_INNER, DISK_OUTER, RING_SEGMENTS, DISK_COLOR),
            ),
            build(
                LayerKind::Ring,
                shaders::RING_SHADER,
                annulus_vertices(RING_INNER, RING_OUTER, RING_SEGMENTS, RING_COLOR),
            ),
            build(
                LayerKind::BlackHole,
                shaders::BODY_SHADER,
                quad_vertices(BLACK_HOLE_RADIUS, BLACK_HOLE_COLOR),
            ),
            build(
                LayerKind::Star,
                shaders::BODY_SHADER,
                quad_vertices(STAR_RADIUS, STAR_COLOR),
            ),
        ];
        debug_assert_eq!(
            layers.iter().map(|l| l.kind).collect::<Vec<_>>(),
            LayerKind::ORDER
        );

        tracing::info!(layers = layers.len(), "layer pipeline created");
        Self { layers }
    }

    #[allow(clippy::too_many_arguments)]
    fn build_layer(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        pipeline_layout: &wgpu::PipelineLayout,
        bind_group_layout: &wgpu::BindGroupLayout,
        kind: LayerKind,
        shader_src: &str,
        mesh: Vec<Vertex>,
    ) -> RenderLayer {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(kind.label()),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(kind.label()),
            layout: Some(pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3,
                        1 => Float32x4,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                cull_mode: None,
                ..Default::default()
            },
            // Compositing comes from draw order alone.
            depth_stencil: None,
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let vertex_count = mesh.len() as u32;
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(kind.label()),
            contents: bytemuck::cast_slice(&mesh),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(kind.label()),
            contents: bytemuck::bytes_of(&LayerUniforms {
                model: Mat4::IDENTITY.to_cols_array_2d(),
                view: Mat4::IDENTITY.to_cols_array_2d(),
                proj: Mat4::IDENTITY.to_cols_array_2d(),
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(kind.label()),
            layout: bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        RenderLayer {
            kind,
            pipeline,
            vertex_buffer,
            vertex_count,
            uniform_buffer,
            bind_group,
        }
    }

    /// Render one frame: upload each layer's model/view/proj, then draw the
    /// layers back-to-front in a single pass cleared to [`CLEAR_COLOR`].
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: &wgpu::TextureView,
        camera: &SceneCamera,
        star_position: Vec3,
    ) {
        let view = camera.view_matrix().to_cols_array_2d();
        let proj = camera.projection_matrix().to_cols_array_2d();

        for layer in &self.layers {
            let uniforms = LayerUniforms {
                model: layer.kind.model_matrix(star_position).to_cols_array_2d(),
                view,
                proj,
            };
            queue.write_buffer(&layer.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("layer_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("layer_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            for layer in &self.layers {
                pass.set_pipeline(&layer.pipeline);
                pass.set_bind_group(0, &layer.bind_group, &[]);
                pass.set_vertex_buffer(0, layer.vertex_buffer.slice(..));
                pass.draw(0..layer.vertex_count, 0..1);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }
}
