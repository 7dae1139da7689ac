//! Shared state stores for Bevy-Yew communication.
//!
//! The page polls these by version number, so a store bumps its version only
//! when its content actually changes.

use std::sync::Arc;

use bevy::prelude::Resource;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::waypoint::{SideHint, Waypoint, WaypointTable};

/// Which view is mounted, as seen by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewModeSummary {
    #[default]
    Idle,
    Scroll,
    Focus,
}

/// Navigation state summary for the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NavigationSummary {
    pub mode: ViewModeSummary,
    pub active_section: usize,
    pub section_count: usize,
    pub progress: f32,
    pub section_id: String,
    pub section_name: String,
    pub side_hint: SideHint,
    pub focus_arrived: bool,
}

/// Waypoint entry as shown by progress dots and text panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointInfo {
    pub id: String,
    pub name: String,
    pub order: usize,
    pub side_hint: SideHint,
}

impl From<&Waypoint> for WaypointInfo {
    fn from(waypoint: &Waypoint) -> Self {
        Self {
            id: waypoint.id.clone(),
            name: waypoint.name.clone(),
            order: waypoint.order,
            side_hint: waypoint.side_hint,
        }
    }
}

/// Store for the navigation summary and the waypoint list.
#[derive(Debug, Default)]
pub struct NavigationStore {
    summary: RwLock<NavigationSummary>,
    version: RwLock<u64>,
    waypoints: RwLock<Vec<WaypointInfo>>,
    waypoints_version: RwLock<u64>,
}

impl NavigationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_summary(&self) -> NavigationSummary {
        self.summary.read().clone()
    }

    pub fn get_version(&self) -> u64 {
        *self.version.read()
    }

    /// Replaces the summary. Returns whether anything changed.
    pub fn update(&self, summary: NavigationSummary) -> bool {
        let mut guard = self.summary.write();
        if *guard == summary {
            return false;
        }
        *guard = summary;
        *self.version.write() += 1;
        true
    }

    pub fn get_waypoints(&self) -> Vec<WaypointInfo> {
        self.waypoints.read().clone()
    }

    pub fn get_waypoints_version(&self) -> u64 {
        *self.waypoints_version.read()
    }

    pub fn set_waypoints(&self, table: &WaypointTable) {
        *self.waypoints.write() = table.iter().map(WaypointInfo::from).collect();
        *self.waypoints_version.write() += 1;
    }

    /// Back to the unmounted state.
    pub fn reset(&self) {
        self.update(NavigationSummary::default());
    }
}

/// Container for all shared state stores.
#[derive(Resource, Clone)]
pub struct StateStores {
    pub navigation: Arc<NavigationStore>,
}

impl StateStores {
    pub fn new() -> Self {
        Self {
            navigation: Arc::new(NavigationStore::new()),
        }
    }
}

impl Default for StateStores {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_bumps_only_on_change() {
        let store = NavigationStore::new();
        let summary = NavigationSummary {
            mode: ViewModeSummary::Scroll,
            active_section: 2,
            ..NavigationSummary::default()
        };
        assert!(store.update(summary.clone()));
        assert_eq!(store.get_version(), 1);
        assert!(!store.update(summary));
        assert_eq!(store.get_version(), 1);

        store.reset();
        assert_eq!(store.get_version(), 2);
        assert_eq!(store.get_summary().mode, ViewModeSummary::Idle);
    }

    #[test]
    fn test_waypoint_list() {
        let store = NavigationStore::new();
        store.set_waypoints(&WaypointTable::solar_system());
        let waypoints = store.get_waypoints();
        assert_eq!(waypoints.len(), 9);
        assert_eq!(waypoints[0].id, "sun");
        assert_eq!(store.get_waypoints_version(), 1);
    }
}
