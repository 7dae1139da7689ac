//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `OrbitHeadlessPlugin` with a fixed 60 Hz frame clock.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::bevy::plugin::OrbitHeadlessPlugin;
use crate::bevy::resources::{CommandQueue, OrbitCommand};
use crate::bevy::state_store::{NavigationSummary, StateStores};
use crate::bevy::{FocusArrivedEvent, MainCamera, OrbitRig, SectionChangedEvent, WaypointsLoadedEvent};
use crate::config::ViewConfig;

/// Every message the app emitted, in order.
#[derive(Resource, Default)]
pub(crate) struct MessageLog {
    pub sections: Vec<usize>,
    pub arrivals: usize,
    pub loads: Vec<(usize, bool)>,
}

fn record_messages(
    mut sections: MessageReader<SectionChangedEvent>,
    mut arrivals: MessageReader<FocusArrivedEvent>,
    mut loads: MessageReader<WaypointsLoadedEvent>,
    mut log: ResMut<MessageLog>,
) {
    log.sections.extend(sections.read().map(|event| event.index));
    log.arrivals += arrivals.read().count();
    log.loads
        .extend(loads.read().map(|event| (event.count, event.fallback)));
}

/// A headless Bevy app wrapper for testing.
pub(crate) struct TestApp {
    pub app: App,
}

impl TestApp {
    pub const FRAME: f32 = 1.0 / 60.0;

    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.add_plugins(OrbitHeadlessPlugin::default());
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
            Self::FRAME,
        )));
        app.init_resource::<MessageLog>();
        app.add_systems(Last, record_messages);
        // Run one update to initialize all resources and state
        app.update();
        Self { app }
    }

    /// Run a single frame update.
    pub fn update(&mut self) {
        self.app.update();
    }

    /// Run `n` frame updates.
    pub fn run_frames(&mut self, n: usize) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Push a command to the command queue.
    pub fn push_command(&mut self, cmd: OrbitCommand) {
        self.app.world().resource::<CommandQueue>().push(cmd);
    }

    /// Mount the scroll view and run until its first tick.
    pub fn enter_scroll_view(&mut self, config: ViewConfig) {
        self.push_command(OrbitCommand::InitScroll { config });
        self.update();
        // Extra update to process OnEnter systems
        self.update();
    }

    /// Mount the focus view and run until its first tick.
    pub fn enter_focus_view(&mut self, config: ViewConfig) {
        self.push_command(OrbitCommand::InitFocus { config });
        self.update();
        self.update();
    }

    pub fn camera_transform(&mut self) -> Transform {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<MainCamera>>();
        *query.single(world).unwrap()
    }

    pub fn orbit_rig(&mut self) -> OrbitRig {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&OrbitRig, With<MainCamera>>();
        *query.single(world).unwrap()
    }

    /// Get a component from the main camera, if present.
    pub fn camera_component<C: Component + Clone>(&mut self) -> Option<C> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&C, With<MainCamera>>();
        query.single(world).ok().cloned()
    }

    pub fn summary(&self) -> NavigationSummary {
        self.app
            .world()
            .resource::<StateStores>()
            .navigation
            .get_summary()
    }

    pub fn log(&self) -> &MessageLog {
        self.app.world().resource::<MessageLog>()
    }

    /// Get a reference to the World.
    pub fn world(&self) -> &World {
        self.app.world()
    }
}
