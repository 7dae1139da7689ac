//! ECS resources for the camera views.

use std::collections::VecDeque;
use std::sync::Arc;

use bevy::prelude::*;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::{CameraConfig, ViewConfig};
use crate::error::OrbitError;
use crate::focus::FocusTarget;
use crate::navigation::NavIntent;
use crate::scroll::ScrollProxy;
use crate::waypoint::WaypointTable;

/// Progress source read by the scroll camera every frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct ScrollProxyRes(pub ScrollProxy);

/// The waypoint table of the mounted view.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveWaypoints(pub Arc<WaypointTable>);

impl ActiveWaypoints {
    pub fn new(table: WaypointTable) -> Self {
        Self(Arc::new(table))
    }
}

/// Camera tuning of the mounted view.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ActiveConfig(pub CameraConfig);

/// Commands sent from the host page to the Bevy app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrbitCommand {
    /// Mount the scroll view.
    InitScroll {
        #[serde(default)]
        config: ViewConfig,
    },
    /// Mount the click-to-focus view.
    InitFocus {
        #[serde(default)]
        config: ViewConfig,
    },
    /// Unmount whichever view is active.
    ClearMode,
    /// Raw progress from user input; cancels a running smooth scroll.
    SetProgress { progress: f32 },
    /// Raw scroll geometry in pixels; cancels a running smooth scroll.
    SetScroll {
        scroll_top: f32,
        scroll_height: f32,
        viewport_height: f32,
    },
    /// Smoothly scroll to a section.
    GotoSection { index: usize },
    /// Resolve a navigation intent against the active section and scroll to it.
    Navigate { intent: NavIntent },
    /// Park on a section instantly.
    JumpToSection { index: usize },
    /// Fly the focus camera to a body.
    Focus { target: FocusTarget },
    /// Fly the focus camera home.
    ReleaseFocus,
    /// Replace the waypoint table of the mounted view.
    LoadWaypoints { waypoints: serde_json::Value },
    /// Frame boundary marker - commands after this are processed in the next frame.
    Yield,
}

impl OrbitCommand {
    pub fn from_json(json: &str) -> Result<Self, OrbitError> {
        serde_json::from_str(json).map_err(|e| OrbitError::InvalidCommand(e.to_string()))
    }
}

/// Thread-safe command queue shared with the host page.
///
/// The page pushes commands at any time; `process_commands` drains them at
/// the start of the next frame.
#[derive(Resource, Clone, Default)]
pub struct CommandQueue {
    inner: Arc<Mutex<VecDeque<OrbitCommand>>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a command to be processed.
    pub fn push(&self, command: OrbitCommand) {
        self.inner.lock().push_back(command);
    }

    /// Drain commands until Yield or empty.
    ///
    /// Yield itself is consumed but not returned; everything after it stays
    /// queued for the next frame.
    pub fn drain_until_yield(&self) -> Vec<OrbitCommand> {
        let mut guard = self.inner.lock();
        let mut commands = Vec::new();

        while let Some(cmd) = guard.pop_front() {
            if matches!(cmd, OrbitCommand::Yield) {
                tracing::debug!("[command] Yield - deferring remaining commands to next frame");
                break;
            }
            commands.push(cmd);
        }
        commands
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Clear all pending commands.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}
