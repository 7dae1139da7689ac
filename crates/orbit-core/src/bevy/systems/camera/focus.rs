//! Focus camera system.

use bevy::prelude::*;

use crate::bevy::{FocusArrivedEvent, FocusCamera, MainCamera, OrbitRig};
use crate::waypoint::CameraPose;

use super::look_transform;

/// Runs the focus driver once per frame.
///
/// While the orbit rig owns the camera the driver only records where the
/// camera is, so the next flight starts from there.
pub fn drive_focus_camera(
    time: Res<Time>,
    mut cameras: Query<(&mut Transform, &mut FocusCamera, &mut OrbitRig), With<MainCamera>>,
    mut arrived_events: MessageWriter<FocusArrivedEvent>,
) {
    for (mut transform, mut camera, mut rig) in &mut cameras {
        if !camera.0.is_driving() {
            camera
                .0
                .track_external(CameraPose::new(transform.translation, rig.target));
        }

        let frame = camera.0.tick(&*time, &mut *rig);
        if let Some(pose) = frame.pose {
            *transform = look_transform(&pose);
        }

        if frame.arrived
            && let Some(target) = camera.0.focused()
        {
            tracing::info!("[orbit] focus arrived at {:?}", target.look_at);
            arrived_events.write(FocusArrivedEvent {
                look_at: target.look_at,
            });
        }
    }
}
