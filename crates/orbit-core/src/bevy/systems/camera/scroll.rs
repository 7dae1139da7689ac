//! Scroll camera system.

use bevy::prelude::*;

use crate::bevy::{MainCamera, OrbitRig, ScrollCamera, ScrollProxyRes, SectionChangedEvent};

use super::look_transform;

/// Runs the scroll driver once per frame and applies its pose.
///
/// Progress is only passed in when the proxy changed since the last run;
/// otherwise the driver keeps its last known value.
pub fn drive_scroll_camera(
    time: Res<Time>,
    proxy: Res<ScrollProxyRes>,
    mut cameras: Query<(&mut Transform, &mut ScrollCamera, &mut OrbitRig), With<MainCamera>>,
    mut section_events: MessageWriter<SectionChangedEvent>,
) {
    let input = proxy.is_changed().then(|| proxy.0.progress());

    for (mut transform, mut camera, mut rig) in &mut cameras {
        let frame = camera.0.tick(input, &*time, &mut *rig);
        *transform = look_transform(&frame.pose);

        if let Some(change) = frame.section_change {
            section_events.write(SectionChangedEvent {
                index: change.index,
                waypoint: change.waypoint,
            });
        }
    }
}
