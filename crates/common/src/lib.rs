//! Shared value types and constants for the gravwell scene.
//!
//! # Invariants
//! - `Body` is a plain value; nothing here owns GPU or window resources.
//! - Constants are process-wide and never reconfigured at runtime.

pub mod constants;
pub mod types;

pub use types::Body;
