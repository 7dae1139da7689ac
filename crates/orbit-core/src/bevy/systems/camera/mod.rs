//! Camera systems.
//!
//! - `scroll`: progress-driven journey through the waypoint table
//! - `focus`: click-to-focus flights
//! - `orbit`: free-orbit auto-rotation when no driver owns the camera

pub mod focus;
pub mod orbit;
pub mod scroll;

pub use focus::*;
pub use orbit::*;
pub use scroll::*;

use bevy::prelude::*;

use crate::waypoint::CameraPose;

/// Camera transform at `pose.position`, facing `pose.look_at`.
pub fn look_transform(pose: &CameraPose) -> Transform {
    Transform::from_translation(pose.position).looking_at(pose.look_at, Vec3::Y)
}
