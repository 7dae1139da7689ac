//! Orbit rig auto-rotation.

use bevy::prelude::*;

use crate::bevy::{MainCamera, OrbitRig};

/// Circles the camera around the rig target while auto-rotate is on.
pub fn update_orbit_rig(time: Res<Time>, mut cameras: Query<(&mut Transform, &OrbitRig), With<MainCamera>>) {
    for (mut transform, rig) in &mut cameras {
        if !rig.enabled || !rig.auto_rotate {
            continue;
        }
        let angle = rig.auto_rotate_angle(time.delta_secs());
        transform.rotate_around(rig.target, Quat::from_rotation_y(angle));
        transform.look_at(rig.target, Vec3::Y);
    }
}
