//! Frame-rate independent exponential damping.
//!
//! Each step moves the current value toward the target by
//! `1 - exp(-dt / smoothness)`, so ten 16 ms frames land exactly where one
//! 160 ms frame does.

use bevy::math::Vec3;

use crate::waypoint::CameraPose;

/// Fraction of the remaining distance covered in a frame of `dt` seconds.
///
/// `dt <= 0` yields 0 (no motion); a non-positive `smoothness` yields 1 (snap).
pub fn damp_factor(dt: f32, smoothness: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 {
        return 0.0;
    }
    if smoothness.is_nan() || smoothness <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt / smoothness).exp()
}

/// Damps a scalar toward `target`.
pub fn damp(current: f32, target: f32, smoothness: f32, dt: f32) -> f32 {
    current + (target - current) * damp_factor(dt, smoothness)
}

/// Damps each axis of a vector toward `target` by the same factor.
pub fn damp_vec3(current: Vec3, target: Vec3, smoothness: f32, dt: f32) -> Vec3 {
    current + (target - current) * damp_factor(dt, smoothness)
}

/// The smoothed pose actually shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DampedPose {
    pub current: CameraPose,
}

impl DampedPose {
    pub fn new(initial: CameraPose) -> Self {
        Self { current: initial }
    }

    /// Jumps straight to `pose` with no transition.
    pub fn snap_to(&mut self, pose: CameraPose) {
        self.current = pose;
    }

    /// Advances position and look-at toward `target` by one frame.
    pub fn step(&mut self, target: &CameraPose, smoothness: f32, dt: f32) -> CameraPose {
        let factor = damp_factor(dt, smoothness);
        self.current.position += (target.position - self.current.position) * factor;
        self.current.look_at += (target.look_at - self.current.look_at) * factor;
        self.current
    }

    /// Distance from the current position to `position`.
    pub fn distance_to(&self, position: Vec3) -> f32 {
        self.current.position.distance(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_motion_without_time() {
        assert!((damp(1.0, 5.0, 0.05, 0.0) - 1.0).abs() < 1e-6);
        assert!((damp(1.0, 5.0, 0.05, -0.1) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_smoothness_snaps() {
        assert!((damp(1.0, 5.0, 0.0, 0.016) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_converges_monotonically_without_overshoot() {
        let target = 10.0;
        let mut current = 0.0_f32;
        let mut gap = (target - current).abs();
        for _ in 0..200 {
            current = damp(current, target, 0.05, 0.016);
            let next_gap = (target - current).abs();
            assert!(current <= target, "overshot target: {current}");
            assert!(next_gap <= gap);
            gap = next_gap;
        }
        assert!(gap < 1e-3);
    }

    #[test]
    fn test_strictly_decreasing_while_far() {
        let target = Vec3::new(4.0, -80.0, 20.0);
        let mut current = Vec3::new(0.0, 0.0, 10.0);
        let mut gap = current.distance(target);
        for _ in 0..20 {
            current = damp_vec3(current, target, 0.05, 0.016);
            let next_gap = current.distance(target);
            assert!(next_gap < gap);
            gap = next_gap;
        }
    }

    #[test]
    fn test_frame_rate_independence() {
        let target = Vec3::new(3.0, -10.0, 20.0);
        let start = Vec3::new(0.0, 0.0, 10.0);

        let mut stepped = start;
        for _ in 0..10 {
            stepped = damp_vec3(stepped, target, 0.05, 0.016);
        }
        let single = damp_vec3(start, target, 0.05, 0.16);

        assert!(stepped.distance(single) < 1e-3, "{stepped} vs {single}");
    }

    #[test]
    fn test_damped_pose_moves_both_fields() {
        let mut pose = DampedPose::new(CameraPose::new(Vec3::ZERO, Vec3::ZERO));
        let target = CameraPose::new(Vec3::splat(10.0), Vec3::new(0.0, -5.0, 0.0));
        let after = pose.step(&target, 0.1, 0.1);

        let expected = 1.0 - (-1.0_f32).exp();
        assert!((after.position.x - 10.0 * expected).abs() < 1e-4);
        assert!((after.look_at.y + 5.0 * expected).abs() < 1e-4);
        assert_eq!(pose.current, after);

        pose.snap_to(target);
        assert!(pose.distance_to(target.position) < 1e-6);
    }
}
