//! Rendering for the gravwell scene: camera, layer descriptions, and the wgpu
//! backend that draws them.
//!
//! The scene is five flat layers composited back-to-front in a fixed order;
//! there is no depth buffer and no depth sorting. Each layer owns its
//! pipeline, mesh, and uniform bind group, all created once at startup.
//!
//! # Invariants
//! - The renderer never mutates simulation state.
//! - Layer order is `[Background, Disk, Ring, BlackHole, Star]`, always.
//! - View/projection matrices are recomputed from the camera pose every
//!   frame; nothing is cached across a pose mutation.

mod camera;
mod context;
mod gpu;
mod scene;
mod shaders;

pub use camera::SceneCamera;
pub use context::{GpuContext, RenderError};
pub use gpu::LayerPipeline;
pub use scene::LayerKind;
