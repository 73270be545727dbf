//! Physical and pacing constants shared across the workspace.

/// Gravitational constant, m³ kg⁻¹ s⁻².
pub const G: f64 = 6.674_30e-11;

/// Mass of the central black hole, kg.
pub const BLACK_HOLE_MASS: f64 = 1e31;

/// Mass of the orbiting star, kg.
pub const STAR_MASS: f64 = 1e30;

/// Fixed integrator timestep in simulated seconds. Applied exactly once per
/// frame; simulated time rate is deliberately coupled to frame rate.
pub const FIXED_DT: f64 = 0.01;

/// Minimum star/black-hole separation fed to the inverse-square law.
/// Clamping here keeps the acceleration finite as the star reaches the hole.
pub const MIN_SEPARATION: f64 = 1e-3;

/// Camera displacement per discrete movement command, world units.
pub const CAMERA_STEP: f32 = 0.5;

/// Frame-loop throughput cap.
pub const TARGET_FPS: u32 = 60;
