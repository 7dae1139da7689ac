//! Systems for the camera views.
//!
//! Organized by functionality:
//! - camera: Scroll and focus drivers, orbit rig auto-rotation
//! - command: Command queue processing from WASM
//! - scroll: Scroll proxy transitions
//! - rendering: Gizmo rendering of the waypoint path
//! - state_sync: Sync ECS state to shared stores for UI

pub mod camera;
pub mod command;
pub mod rendering;
pub mod scroll;
pub mod state_sync;

pub use camera::*;
pub use command::*;
pub use rendering::*;
pub use scroll::*;
pub use state_sync::*;
