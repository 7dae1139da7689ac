//! Easing curves and the pure progress-to-target-pose mapping.

use serde::{Deserialize, Serialize};

use crate::progress::{Segment, map_progress};
use crate::waypoint::{CameraPose, WaypointTable};

/// Easing type applied to a local interpolation factor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    EaseIn,
    EaseOut,
    /// Quadratic ease-in-out.
    EaseInOut,
    /// Cubic ease-in-out; the curve used between scroll sections.
    #[default]
    EaseInOutCubic,
    /// Power-2 in-out, used by the click-to-focus transitions.
    Power2InOut,
}

impl EasingType {
    /// Applies the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut | Self::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::EaseInOutCubic => ease_in_out_cubic(t),
        }
    }
}

/// Cubic ease-in-out: `4t³` below 0.5, `1 - (-2t + 2)³ / 2` above.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Computes where the camera is heading for `progress`.
///
/// Pure function of progress: no smoothing state is consulted.
pub fn target_pose(table: &WaypointTable, progress: f32, easing: EasingType) -> (Segment, CameraPose) {
    let segment = map_progress(progress, table.len());
    let from = table.clamped(segment.from_index).pose();
    let to = table.clamped(segment.to_index).pose();
    let pose = from.lerp(&to, easing.apply(segment.local_t));
    (segment, pose)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 6] = [
        EasingType::Linear,
        EasingType::EaseIn,
        EasingType::EaseOut,
        EasingType::EaseInOut,
        EasingType::EaseInOutCubic,
        EasingType::Power2InOut,
    ];

    #[test]
    fn test_easing_functions() {
        assert!((EasingType::Linear.apply(0.5) - 0.5).abs() < 0.001);
        assert!((EasingType::EaseIn.apply(0.5) - 0.25).abs() < 0.001);
        assert!((EasingType::EaseOut.apply(0.5) - 0.75).abs() < 0.001);
        assert!((EasingType::EaseInOut.apply(0.5) - 0.5).abs() < 0.001);
        assert!((EasingType::EaseInOutCubic.apply(0.25) - 0.0625).abs() < 0.001);
        assert!((EasingType::EaseInOutCubic.apply(0.75) - 0.9375).abs() < 0.001);
    }

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut previous = easing.apply(0.0);
            for step in 1..=1000 {
                let value = easing.apply(step as f32 / 1000.0);
                assert!(value + 1e-6 >= previous, "{easing:?} decreased at step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn test_cubic_continuous_at_half() {
        let below = ease_in_out_cubic(0.499_99);
        let above = ease_in_out_cubic(0.5);
        assert!((below - above).abs() < 1e-3);
        assert!((above - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_target_pose_at_sections() {
        let table = WaypointTable::solar_system();
        let (_, start) = target_pose(&table, 0.0, EasingType::EaseInOutCubic);
        assert_eq!(start, table.first().pose());

        let (segment, end) = target_pose(&table, 1.0, EasingType::EaseInOutCubic);
        assert_eq!(segment.to_index, 8);
        assert!(end.position.distance(table.clamped(8).camera_position) < 1e-4);

        // Halfway along a segment the cubic curve is exactly at the midpoint.
        let (_, mid) = target_pose(&table, 0.0625, EasingType::EaseInOutCubic);
        let expected = table.first().pose().lerp(&table.clamped(1).pose(), 0.5);
        assert!(mid.position.distance(expected.position) < 1e-3);
        assert!(mid.look_at.distance(expected.look_at) < 1e-3);
    }
}
