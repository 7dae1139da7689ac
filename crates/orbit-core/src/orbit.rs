//! Free-orbit camera control capability.
//!
//! Camera drivers only ever talk to orbit controls through this trait, so the
//! control can be an ECS component, a browser widget, or a test double.

use bevy::math::Vec3;

/// The three operations a camera driver may perform on orbit controls.
pub trait OrbitControl {
    fn set_enabled(&mut self, enabled: bool);
    fn set_target(&mut self, target: Vec3);
    fn set_auto_rotate(&mut self, auto_rotate: bool);
}

/// Plain orbit-control state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub enabled: bool,
    pub target: Vec3,
    pub auto_rotate: bool,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            enabled: true,
            target: Vec3::ZERO,
            auto_rotate: true,
        }
    }
}

impl OrbitControl for OrbitState {
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
