//! Camera driver: the single per-frame owner of the scroll camera.
//!
//! A tick reads progress, computes the eased target pose, damps the displayed
//! pose toward it, takes the camera away from free-orbit control and finally
//! runs the section tracker.

use std::sync::Arc;

use bevy::math::Vec3;
use bevy::time::Time;

use crate::config::CameraConfig;
use crate::damping::DampedPose;
use crate::easing::target_pose;
use crate::orbit::OrbitControl;
use crate::progress::{Segment, clamp_progress, section_progress};
use crate::tracker::SectionTracker;
use crate::waypoint::{CameraPose, Waypoint, WaypointTable};

/// Frame clock injected into the drivers.
pub trait TickSource {
    /// Seconds elapsed since the previous tick.
    fn delta_secs(&self) -> f32;
}

impl<T: Default> TickSource for Time<T> {
    fn delta_secs(&self) -> f32 {
        Time::<T>::delta_secs(self)
    }
}

/// A fixed frame duration, for deterministic stepping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTick(pub f32);

impl FixedTick {
    pub const SIXTY_HZ: Self = Self(1.0 / 60.0);
}

impl TickSource for FixedTick {
    fn delta_secs(&self) -> f32 {
        self.0
    }
}

/// Per-view mutable navigation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationState {
    pub progress: f32,
    pub current_camera_position: Vec3,
    pub current_look_at: Vec3,
    pub active_section_index: usize,
    pub last_notified_section_index: Option<usize>,
}

impl NavigationState {
    /// State parked on the first waypoint.
    pub fn seeded(table: &WaypointTable) -> Self {
        let pose = table.first().pose();
        Self {
            progress: 0.0,
            current_camera_position: pose.position,
            current_look_at: pose.look_at,
            active_section_index: 0,
            last_notified_section_index: None,
        }
    }

    pub fn current_pose(&self) -> CameraPose {
        CameraPose::new(self.current_camera_position, self.current_look_at)
    }
}

/// The active section changed.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionChange {
    pub index: usize,
    pub waypoint: Waypoint,
}

/// Output of one driver tick.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverFrame {
    /// Damped pose to apply to the camera.
    pub pose: CameraPose,
    /// Undamped pose the camera is heading for.
    pub target: CameraPose,
    pub segment: Segment,
    pub section_change: Option<SectionChange>,
}

#[derive(Debug, Clone)]
pub struct CameraDriver {
    table: Arc<WaypointTable>,
    config: CameraConfig,
    state: NavigationState,
    damped: DampedPose,
    tracker: SectionTracker,
}

impl CameraDriver {
    /// Creates a driver parked on the first waypoint, with no transition.
    pub fn new(table: Arc<WaypointTable>, config: CameraConfig) -> Self {
        let state = NavigationState::seeded(&table);
        Self {
            damped: DampedPose::new(state.current_pose()),
            tracker: SectionTracker::new(config.section_policy),
            table,
            config,
            state,
        }
    }

    pub fn table(&self) -> &Arc<WaypointTable> {
        &self.table
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn progress(&self) -> f32 {
        self.state.progress
    }

    pub fn active_section(&self) -> usize {
        self.state.active_section_index
    }

    /// Runs one frame.
    ///
    /// `input` is the latest progress; `None` reuses the last known value.
    pub fn tick(
        &mut self,
        input: Option<f32>,
        clock: &impl TickSource,
        controls: &mut impl OrbitControl,
    ) -> DriverFrame {
        if let Some(progress) = input {
            self.state.progress = clamp_progress(progress);
        }

        let (segment, target) = target_pose(&self.table, self.state.progress, self.config.easing);
        let pose = self
            .damped
            .step(&target, self.config.smoothness, clock.delta_secs());
        self.state.current_camera_position = pose.position;
        self.state.current_look_at = pose.look_at;

        controls.set_enabled(false);
        controls.set_auto_rotate(false);
        controls.set_target(pose.look_at);

        let section_change = self
            .tracker
            .update(self.state.progress, &segment, self.table.len())
            .map(|index| SectionChange {
                index,
                waypoint: self.table.clamped(index).clone(),
            });
        self.state.active_section_index = self.tracker.active();
        self.state.last_notified_section_index = self.tracker.last_notified();

        if let Some(change) = &section_change {
            tracing::debug!(
                "[orbit] section {} ({}) active at progress {:.3}",
                change.index,
                change.waypoint.id,
                self.state.progress
            );
        }

        DriverFrame {
            pose,
            target,
            segment,
            section_change,
        }
    }

    /// Parks the view on `index` instantly, with no damping.
    ///
    /// The active section updates at once; the change is reported by the
    /// next tick.
    pub fn jump_to_section(&mut self, index: usize) {
        let index = index.min(self.table.last_index());
        self.state.progress = section_progress(index, self.table.len());
        self.tracker.jump_to(index, self.table.len());
        self.state.active_section_index = self.tracker.active();
        let pose = self.table.clamped(index).pose();
        self.damped.snap_to(pose);
        self.state.current_camera_position = pose.position;
        self.state.current_look_at = pose.look_at;
    }

    /// Swaps the waypoint table and restarts from its first waypoint.
    pub fn replace_table(&mut self, table: Arc<WaypointTable>) {
        self.state = NavigationState::seeded(&table);
        self.damped.snap_to(self.state.current_pose());
        self.tracker.reset();
        self.table = table;
    }
}
