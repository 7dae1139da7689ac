//! State synchronization systems.
//!
//! Syncs Bevy ECS state to `StateStores` for Yew UI access.

use bevy::prelude::*;

use crate::bevy::state_store::ViewModeSummary;
use crate::bevy::{
    ActiveWaypoints, FocusCamera, NavigationSummary, ScrollCamera, SectionChangedEvent,
    StateStores, ViewMode,
};

/// System to sync navigation state to the state stores.
///
/// The store only bumps its version when the summary actually changes.
#[allow(clippy::needless_pass_by_value)]
pub fn sync_navigation_to_stores(
    mode: Res<State<ViewMode>>,
    waypoints: Res<ActiveWaypoints>,
    scroll_cameras: Query<&ScrollCamera>,
    focus_cameras: Query<&FocusCamera>,
    state_stores: Res<StateStores>,
) {
    let summary = match mode.get() {
        ViewMode::Idle => NavigationSummary::default(),
        ViewMode::Scroll => {
            let Ok(camera) = scroll_cameras.single() else {
                return;
            };
            let state = camera.0.state();
            let table = camera.0.table();
            let waypoint = table.clamped(state.active_section_index);
            NavigationSummary {
                mode: ViewModeSummary::Scroll,
                active_section: state.active_section_index,
                section_count: table.len(),
                progress: state.progress,
                section_id: waypoint.id.clone(),
                section_name: waypoint.name.clone(),
                side_hint: waypoint.side_hint,
                focus_arrived: false,
            }
        }
        ViewMode::Focus => {
            let Ok(camera) = focus_cameras.single() else {
                return;
            };
            let first = waypoints.0.first();
            NavigationSummary {
                mode: ViewModeSummary::Focus,
                active_section: 0,
                section_count: waypoints.0.len(),
                progress: 0.0,
                section_id: first.id.clone(),
                section_name: first.name.clone(),
                side_hint: first.side_hint,
                focus_arrived: camera.0.has_arrived(),
            }
        }
    };

    state_stores.navigation.update(summary);
}

/// Logs every section change.
pub fn log_section_changes(mut events: MessageReader<SectionChangedEvent>) {
    for event in events.read() {
        tracing::info!(
            "[orbit] section changed: {} ({}, {})",
            event.index,
            event.waypoint.id,
            event.waypoint.name
        );
    }
}
