//! Bevy integration for orbit-folio.
//!
//! Mounts the camera drivers on the main camera entity, feeds them progress
//! from the host page through a command queue, and publishes navigation state
//! back to the page through shared stores.

pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod state_store;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_utils;

#[cfg(all(target_arch = "wasm32", feature = "windowed"))]
pub mod wasm_entry;

#[cfg(all(target_arch = "wasm32", feature = "windowed"))]
pub use wasm_entry::*;

pub use components::*;
pub use events::*;
pub use plugin::{OrbitHeadlessPlugin, OrbitUnifiedPlugin, ViewMode};
pub use resources::*;
pub use state_store::{NavigationStore, NavigationSummary, StateStores, ViewModeSummary, WaypointInfo};
pub use systems::camera::{drive_focus_camera, drive_scroll_camera, look_transform, update_orbit_rig};
