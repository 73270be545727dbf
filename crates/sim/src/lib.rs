//! Simulation kernel: explicit state plus a fixed-step two-body integrator.
//!
//! # Invariants
//! - Stepping is a pure function of current state and constants; repeated
//!   runs from the same state are bit-identical.
//! - All state mutations flow through [`SimulationState::step`].
//! - No NaN/Inf ever leaves the integrator (separation is clamped).

pub mod state;

pub use state::{SimConstants, SimulationState};
