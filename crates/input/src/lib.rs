//! Input vocabulary: discrete commands produced by key-press edges.
//!
//! # Invariants
//! - Commands are toolkit-free; the camera consumes commands, never raw
//!   window events.
//! - One triggering event maps to at most one command.

pub mod command;

pub use command::CameraCommand;
