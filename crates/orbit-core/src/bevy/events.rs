//! ECS messages for the camera views.
//!
//! Note: In Bevy 0.18+, buffered events use the Message trait instead of Event.

use bevy::prelude::*;

use crate::waypoint::Waypoint;

/// Message fired once each time the active section changes.
#[derive(Message, Debug, Clone)]
pub struct SectionChangedEvent {
    pub index: usize,
    pub waypoint: Waypoint,
}

/// Message fired when a focus flight reaches its body.
#[derive(Message, Debug, Clone)]
pub struct FocusArrivedEvent {
    pub look_at: Vec3,
}

/// Message fired when a new waypoint table is active.
#[derive(Message, Debug, Clone)]
pub struct WaypointsLoadedEvent {
    pub count: usize,
    /// True when the requested table was rejected and the fallback pose is in use.
    pub fallback: bool,
}
