//! WGSL sources for the layer pipelines.
//!
//! Every program shares the same uniform block: `model`, `view`, and `proj`
//! as column-major 4×4 matrices at group 0 binding 0. The pipeline relies on
//! that layout being identical across programs so uniform upload is generic.

/// Background quad with screen-space gravitational darkening. The quad spans
/// ±40 world units; `uv = xy * 0.0125 + 0.5` maps that to [0, 1].
pub const BACKGROUND_SHADER: &str = r#"
struct LayerUniforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: LayerUniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.proj * uniforms.view * uniforms.model
        * vec4<f32>(position, 1.0);
    out.uv = position.xy * 0.0125 + vec2<f32>(0.5, 0.5);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let r = length(in.uv - vec2<f32>(0.5, 0.5));
    // Inverse-cube falloff: darkest at the center, ambient at the edges.
    let lens = 1.0 / (1.0 + 20.0 * pow(r, 3.0));
    let col = mix(vec3<f32>(0.1, 0.1, 0.15), vec3<f32>(0.0, 0.0, 0.0), lens);
    return vec4<f32>(col, 1.0);
}
"#;

/// Flat-color billboard shader used by the disk, black hole, and star.
pub const BODY_SHADER: &str = r#"
struct LayerUniforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: LayerUniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(
    @location(0) position: vec3<f32>,
    @location(1) color: vec4<f32>,
) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.proj * uniforms.view * uniforms.model
        * vec4<f32>(position, 1.0);
    out.color = color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

/// Photon-ring shader: base color boosted past 1.0 for an emissive look.
/// There is no HDR pass; the overbright values simply saturate.
pub const RING_SHADER: &str = r#"
struct LayerUniforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: LayerUniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(
    @location(0) position: vec3<f32>,
    @location(1) color: vec4<f32>,
) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.proj * uniforms.view * uniforms.model
        * vec4<f32>(position, 1.0);
    out.color = color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(in.color.rgb * 1.5, in.color.a);
}
"#;
