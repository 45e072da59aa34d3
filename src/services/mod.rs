//! Shared system services for the launcher.
//!
//! - `apps` - Background catalog rescans
//! - `process` - Fire-and-forget spawning of launch commands

pub mod apps;
pub mod process;
