//! ECS components for the camera views.

use bevy::prelude::*;

use crate::driver::CameraDriver;
use crate::focus::FocusDriver;
use crate::orbit::OrbitControl;

/// Marker component for the main camera.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MainCamera;

/// Scroll journey driver, present on the main camera while the scroll view is
/// mounted.
#[derive(Component, Debug, Clone)]
pub struct ScrollCamera(pub CameraDriver);

/// Click-to-focus driver, present on the main camera while the focus view is
/// mounted.
#[derive(Component, Debug, Clone)]
pub struct FocusCamera(pub FocusDriver);

/// Free-orbit rig attached to the main camera.
///
/// When enabled with auto-rotate on, the camera circles `target` around the
/// vertical axis. Drivers switch it on and off through [`OrbitControl`].
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitRig {
    pub enabled: bool,
    pub target: Vec3,
    pub auto_rotate: bool,
    /// 2.0 is one revolution every 30 seconds.
    pub auto_rotate_speed: f32,
}

impl OrbitRig {
    pub fn new(auto_rotate_speed: f32) -> Self {
        Self {
            auto_rotate_speed,
            ..Self::default()
        }
    }

    /// Rotation in radians for a frame of `dt` seconds.
    pub fn auto_rotate_angle(&self, dt: f32) -> f32 {
        std::f32::consts::TAU / 60.0 * self.auto_rotate_speed * dt
    }
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            enabled: true,
            target: Vec3::ZERO,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
        }
    }
}

impl OrbitControl for OrbitRig {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    fn set_auto_rotate(&mut self, auto_rotate: bool) {
        self.auto_rotate = auto_rotate;
    }
}
