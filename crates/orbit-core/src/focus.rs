//! Click-to-focus camera variant.
//!
//! The camera idles under free-orbit control around a home pose. Focusing a
//! body flies the camera to a framing position next to it; releasing flies it
//! home and hands control back to the orbit rig.

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

use crate::damping::DampedPose;
use crate::driver::TickSource;
use crate::orbit::OrbitControl;
use crate::waypoint::CameraPose;

/// Direction from a focused body to the camera, scaled by the framing distance.
pub const FOCUS_OFFSET: Vec3 = Vec3::new(0.6, 0.4, 0.8);
/// Distance under which a focus flight counts as arrived.
pub const ARRIVAL_DISTANCE: f32 = 0.1;
/// Distance under which a return flight hands control back to the orbit rig.
pub const HOME_DISTANCE: f32 = 0.5;
/// Return flights are this much snappier than focus flights.
pub const RETURN_SMOOTHNESS_SCALE: f32 = 0.8;

/// A body the camera can focus on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusTarget {
    #[serde(with = "crate::waypoint::vec3_array")]
    pub look_at: Vec3,
    /// Rendered radius of the body.
    #[serde(default = "FocusTarget::default_size")]
    pub size: f32,
}

impl FocusTarget {
    fn default_size() -> f32 {
        0.3
    }

    pub fn new(look_at: Vec3, size: f32) -> Self {
        Self { look_at, size }
    }

    /// Framing distance: bigger bodies are viewed from further away.
    pub fn zoom_distance(&self) -> f32 {
        self.size.max(0.0) * 6.0 + 1.5
    }

    /// Pose that frames the body.
    pub fn camera_goal(&self) -> CameraPose {
        CameraPose::new(self.look_at + FOCUS_OFFSET * self.zoom_distance(), self.look_at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Orbit rig owns the camera.
    Orbiting,
    Focusing { target: FocusTarget, arrived: bool },
    Returning,
}

/// Output of one focus tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusFrame {
    /// Pose to apply, or `None` while the orbit rig owns the camera.
    pub pose: Option<CameraPose>,
    /// True on the single tick the camera reaches a focused body.
    pub arrived: bool,
}

#[derive(Debug, Clone)]
pub struct FocusDriver {
    home: CameraPose,
    damped: DampedPose,
    smoothness: f32,
    phase: Phase,
}

impl FocusDriver {
    pub fn new(home: CameraPose, smoothness: f32) -> Self {
        Self {
            home,
            damped: DampedPose::new(home),
            smoothness,
            phase: Phase::Orbiting,
        }
    }

    pub fn home(&self) -> CameraPose {
        self.home
    }

    pub fn current(&self) -> CameraPose {
        self.damped.current
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        match self.phase {
            Phase::Focusing { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn has_arrived(&self) -> bool {
        matches!(self.phase, Phase::Focusing { arrived: true, .. })
    }

    /// Whether the driver, rather than the orbit rig, moves the camera.
    pub fn is_driving(&self) -> bool {
        !matches!(self.phase, Phase::Orbiting)
    }

    /// Records where the orbit rig has put the camera, so the next flight
    /// starts from there.
    pub fn track_external(&mut self, pose: CameraPose) {
        if !self.is_driving() {
            self.damped.snap_to(pose);
        }
    }

    /// Starts (or retargets) a focus flight.
    pub fn focus_on(&mut self, target: FocusTarget) {
        tracing::debug!("[orbit] focusing {:?} (size {})", target.look_at, target.size);
        self.phase = Phase::Focusing {
            target,
            arrived: false,
        };
    }

    /// Starts the flight home. No-op unless a body is focused.
    pub fn release(&mut self) {
        if matches!(self.phase, Phase::Focusing { .. }) {
            tracing::debug!("[orbit] focus released, returning home");
            self.phase = Phase::Returning;
        }
    }

    /// Hands the camera to the orbit rig at the home view.
    pub fn engage_orbit(&self, controls: &mut impl OrbitControl) {
        controls.set_target(self.home.look_at);
        controls.set_enabled(true);
        controls.set_auto_rotate(true);
    }

    pub fn tick(&mut self, clock: &impl TickSource, controls: &mut impl OrbitControl) -> FocusFrame {
        let dt = clock.delta_secs();
        match self.phase {
            Phase::Orbiting => FocusFrame {
                pose: None,
                arrived: false,
            },
            Phase::Focusing { target, arrived } => {
                let goal = target.camera_goal();
                let pose = self.damped.step(&goal, self.smoothness, dt);
                controls.set_auto_rotate(false);

                let arrived_now = !arrived && self.damped.distance_to(goal.position) < ARRIVAL_DISTANCE;
                if arrived_now {
                    self.phase = Phase::Focusing {
                        target,
                        arrived: true,
                    };
                }
                if arrived || arrived_now {
                    controls.set_target(target.look_at);
                    controls.set_enabled(true);
                } else {
                    controls.set_target(pose.look_at);
                    controls.set_enabled(false);
                }

                FocusFrame {
                    pose: Some(pose),
                    arrived: arrived_now,
                }
            }
            Phase::Returning => {
                let pose = self
                    .damped
                    .step(&self.home, self.smoothness * RETURN_SMOOTHNESS_SCALE, dt);
                controls.set_enabled(false);
                controls.set_target(pose.look_at);

                if self.damped.distance_to(self.home.position) < HOME_DISTANCE {
                    self.phase = Phase::Orbiting;
                    self.engage_orbit(controls);
                }
                FocusFrame {
                    pose: Some(pose),
                    arrived: false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::FixedTick;
    use crate::orbit::OrbitState;

    fn home() -> CameraPose {
        CameraPose::fallback()
    }

    #[test]
    fn test_camera_goal() {
        let target = FocusTarget::new(Vec3::new(10.0, 0.0, 0.0), 0.5);
        assert!((target.zoom_distance() - 4.5).abs() < 1e-6);
        let goal = target.camera_goal();
        assert!(goal.position.distance(Vec3::new(12.7, 1.8, 3.6)) < 1e-5);
        assert_eq!(goal.look_at, target.look_at);
    }

    #[test]
    fn test_idle_leaves_camera_to_orbit() {
        let mut driver = FocusDriver::new(home(), 0.08);
        let mut orbit = OrbitState::default();
        let frame = driver.tick(&FixedTick::SIXTY_HZ, &mut orbit);
        assert_eq!(frame.pose, None);
        assert!(!driver.is_driving());
        assert_eq!(orbit, OrbitState::default());
    }

    #[test]
    fn test_focus_arrives_once() {
        let mut driver = FocusDriver::new(home(), 0.08);
        let mut orbit = OrbitState::default();
        let target = FocusTarget::new(Vec3::new(8.0, 0.0, -3.0), 0.3);
        driver.focus_on(target);

        let mut arrivals = 0;
        for _ in 0..300 {
            let frame = driver.tick(&FixedTick::SIXTY_HZ, &mut orbit);
            assert!(!orbit.auto_rotate);
            if frame.arrived {
                arrivals += 1;
            }
        }
        assert_eq!(arrivals, 1);
        assert!(driver.has_arrived());
        assert!(orbit.enabled);
        assert_eq!(orbit.target, target.look_at);
        assert!(driver.current().position.distance(target.camera_goal().position) < ARRIVAL_DISTANCE);
    }

    #[test]
    fn test_controls_locked_during_flight() {
        let mut driver = FocusDriver::new(home(), 0.08);
        let mut orbit = OrbitState::default();
        driver.focus_on(FocusTarget::new(Vec3::new(30.0, 0.0, 0.0), 1.0));
        let frame = driver.tick(&FixedTick::SIXTY_HZ, &mut orbit);
        assert!(!frame.arrived);
        assert!(!orbit.enabled);
    }

    #[test]
    fn test_release_returns_home_and_resumes_orbit() {
        let mut driver = FocusDriver::new(home(), 0.08);
        let mut orbit = OrbitState::default();
        driver.focus_on(FocusTarget::new(Vec3::new(8.0, 0.0, -3.0), 0.3));
        for _ in 0..120 {
            driver.tick(&FixedTick::SIXTY_HZ, &mut orbit);
        }

        driver.release();
        assert!(driver.focused().is_none());
        driver.tick(&FixedTick::SIXTY_HZ, &mut orbit);
        assert!(!orbit.auto_rotate);

        for _ in 0..300 {
            driver.tick(&FixedTick::SIXTY_HZ, &mut orbit);
        }
        assert!(!driver.is_driving());
        assert!(orbit.auto_rotate);
        assert!(orbit.enabled);
        assert_eq!(orbit.target, home().look_at);
        assert!(driver.current().position.distance(home().position) < HOME_DISTANCE);
    }

    #[test]
    fn test_release_without_focus_is_noop() {
        let mut driver = FocusDriver::new(home(), 0.08);
        driver.release();
        assert!(!driver.is_driving());
    }

    #[test]
    fn test_flight_starts_from_orbit_position() {
        let mut driver = FocusDriver::new(home(), 0.08);
        let orbited = CameraPose::new(Vec3::new(25.0, 12.0, 0.0), Vec3::ZERO);
        driver.track_external(orbited);
        assert_eq!(driver.current(), orbited);

        driver.focus_on(FocusTarget::new(Vec3::ZERO, 0.3));
        driver.track_external(home());
        assert_eq!(driver.current(), orbited);
    }
}
