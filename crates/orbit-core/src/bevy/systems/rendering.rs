//! Rendering systems for the camera views.
//!
//! Uses Bevy's Gizmos API to draw the waypoint path and the bodies the camera
//! looks at. The host page draws the real scene; these are the engine-side
//! markers.

use bevy::prelude::*;

use crate::bevy::{ActiveWaypoints, ScrollCamera};

/// Gizmo configuration resource for waypoint rendering.
#[derive(Resource)]
pub struct WaypointGizmoConfig {
    /// Color of the camera path polyline.
    pub path_color: Color,
    /// Color of inactive look-at markers.
    pub marker_color: Color,
    /// Color of the active section's marker.
    pub active_color: Color,
    /// Radius of look-at markers.
    pub marker_radius: f32,
}

impl Default for WaypointGizmoConfig {
    fn default() -> Self {
        Self {
            path_color: Color::srgba(0.5, 0.8, 0.9, 0.35),
            marker_color: Color::srgb(0.8, 0.8, 0.8),
            active_color: Color::srgb(1.0, 0.75, 0.2),
            marker_radius: 0.4,
        }
    }
}

/// Draws the camera path and a marker on every look-at point.
#[allow(clippy::needless_pass_by_value)]
pub fn render_waypoint_gizmos(
    mut gizmos: Gizmos,
    config: Res<WaypointGizmoConfig>,
    waypoints: Res<ActiveWaypoints>,
    cameras: Query<&ScrollCamera>,
) {
    let active = cameras.iter().next().map(|camera| camera.0.active_section());

    gizmos.linestrip(
        waypoints.0.iter().map(|waypoint| waypoint.camera_position),
        config.path_color,
    );

    for (index, waypoint) in waypoints.0.iter().enumerate() {
        let color = if active == Some(index) {
            config.active_color
        } else {
            config.marker_color
        };
        gizmos.sphere(
            Isometry3d::from_translation(waypoint.look_at),
            config.marker_radius,
            color,
        );
    }
}
