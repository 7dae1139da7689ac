//! Bevy plugins for the camera views.
//!
//! Provides:
//! - `OrbitHeadlessPlugin`: Logic-only plugin (no rendering/window dependencies) for headless testing
//! - `OrbitUnifiedPlugin`: Full plugin including `OrbitHeadlessPlugin` + camera spawn and gizmo rendering

use bevy::prelude::*;

use crate::bevy::components::*;
use crate::bevy::events::*;
use crate::bevy::resources::*;
use crate::bevy::state_store::StateStores;
use crate::bevy::systems;
use crate::driver::CameraDriver;
use crate::focus::FocusDriver;
use crate::orbit::OrbitControl;
use crate::waypoint::CameraPose;

/// Which camera view is mounted.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Idle,
    Scroll,
    Focus,
}

// ============================================================================
// Headless Plugin (logic only, no rendering/window dependencies)
// ============================================================================

/// Headless plugin containing all camera logic without rendering or window dependencies.
///
/// Use this plugin in tests with `MinimalPlugins` to run ECS systems
/// without requiring a windowing or rendering backend. Mounting a view
/// attaches its driver to the `MainCamera` entity, spawning a bare one if
/// none exists.
#[derive(Default)]
pub struct OrbitHeadlessPlugin {
    pub command_queue: Option<CommandQueue>,
    pub state_stores: Option<StateStores>,
}

impl Plugin for OrbitHeadlessPlugin {
    fn build(&self, app: &mut App) {
        // ====================================================================
        // States
        // ====================================================================
        app.init_state::<ViewMode>();

        // ====================================================================
        // Resources
        // ====================================================================
        app.insert_resource(ScrollProxyRes::default())
            .insert_resource(ActiveWaypoints::default())
            .insert_resource(ActiveConfig::default())
            .insert_resource(self.command_queue.clone().unwrap_or_default())
            .insert_resource(self.state_stores.clone().unwrap_or_default());

        // ====================================================================
        // Messages
        // ====================================================================
        app.add_message::<SectionChangedEvent>()
            .add_message::<FocusArrivedEvent>()
            .add_message::<WaypointsLoadedEvent>();

        // ====================================================================
        // Per-frame pipeline
        // ====================================================================
        app.add_systems(
            Update,
            (
                systems::process_commands,
                systems::advance_scroll_proxy.run_if(in_state(ViewMode::Scroll)),
                systems::drive_scroll_camera.run_if(in_state(ViewMode::Scroll)),
                systems::drive_focus_camera.run_if(in_state(ViewMode::Focus)),
                systems::update_orbit_rig.run_if(in_state(ViewMode::Focus)),
                systems::log_section_changes,
            )
                .chain(),
        );

        // WASM exit system
        #[cfg(all(target_arch = "wasm32", feature = "windowed"))]
        app.add_systems(Update, crate::bevy::wasm_entry::check_exit_system);

        app.add_systems(PostUpdate, systems::sync_navigation_to_stores);

        // ====================================================================
        // Mount / unmount
        // ====================================================================
        app.add_systems(OnEnter(ViewMode::Scroll), mount_scroll_view);
        app.add_systems(OnExit(ViewMode::Scroll), unmount_scroll_view);
        app.add_systems(OnEnter(ViewMode::Focus), mount_focus_view);
        app.add_systems(OnExit(ViewMode::Focus), unmount_focus_view);
    }
}

// ============================================================================
// Unified Plugin (headless + rendering)
// ============================================================================

/// Unified plugin that supports dynamic view switching via `ViewMode` state.
///
/// Includes `OrbitHeadlessPlugin` for all camera logic, plus the `Camera3d`
/// entity and gizmo rendering of the waypoint path.
#[derive(Default)]
pub struct OrbitUnifiedPlugin {
    pub command_queue: Option<CommandQueue>,
    pub state_stores: Option<StateStores>,
}

impl OrbitUnifiedPlugin {
    pub fn new(command_queue: CommandQueue, state_stores: StateStores) -> Self {
        Self {
            command_queue: Some(command_queue),
            state_stores: Some(state_stores),
        }
    }
}

impl Plugin for OrbitUnifiedPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(OrbitHeadlessPlugin {
            command_queue: self.command_queue.clone(),
            state_stores: self.state_stores.clone(),
        });

        app.init_resource::<systems::WaypointGizmoConfig>();

        app.add_systems(Startup, spawn_main_camera);
        app.add_systems(
            Update,
            systems::render_waypoint_gizmos
                .after(systems::drive_scroll_camera)
                .run_if(in_state(ViewMode::Scroll).or(in_state(ViewMode::Focus))),
        );
    }
}

/// Spawns the render camera at the fallback home pose.
fn spawn_main_camera(mut commands: Commands) {
    tracing::info!("[orbit] spawning main camera");
    commands.spawn((
        Camera3d::default(),
        MainCamera,
        systems::look_transform(&CameraPose::fallback()),
        OrbitRig::default(),
    ));
}

/// Attaches a fresh scroll driver to the main camera, snapped to waypoint 0.
///
/// Reuses the existing camera entity; only the driver component is swapped.
#[allow(clippy::needless_pass_by_value)]
fn mount_scroll_view(
    mut commands: Commands,
    waypoints: Res<ActiveWaypoints>,
    config: Res<ActiveConfig>,
    cameras: Query<Entity, With<MainCamera>>,
) {
    let driver = CameraDriver::new(waypoints.0.clone(), config.0);
    let transform = systems::look_transform(&driver.state().current_pose());
    let rig = OrbitRig::new(config.0.auto_rotate_speed);

    if let Ok(entity) = cameras.single() {
        commands
            .entity(entity)
            .insert((ScrollCamera(driver), transform, rig));
        tracing::info!("[orbit] scroll view mounted ({} waypoints)", waypoints.0.len());
    } else {
        commands.spawn((MainCamera, ScrollCamera(driver), transform, rig));
        tracing::info!("[orbit] scroll view mounted on a new camera entity");
    }
}

#[allow(clippy::needless_pass_by_value)]
fn unmount_scroll_view(
    mut commands: Commands,
    cameras: Query<Entity, With<ScrollCamera>>,
    state_stores: Res<StateStores>,
) {
    tracing::info!("[orbit] scroll view unmounted");
    for entity in &cameras {
        commands.entity(entity).remove::<ScrollCamera>();
    }
    state_stores.navigation.reset();
}

/// Attaches a focus driver to the main camera and hands it to the orbit rig.
#[allow(clippy::needless_pass_by_value)]
fn mount_focus_view(
    mut commands: Commands,
    config: Res<ActiveConfig>,
    cameras: Query<Entity, With<MainCamera>>,
) {
    let home = CameraPose::fallback();
    let driver = FocusDriver::new(home, config.0.focus_smoothness);
    let mut rig = OrbitRig::new(config.0.auto_rotate_speed);
    driver.engage_orbit(&mut rig);
    let transform = systems::look_transform(&home);

    if let Ok(entity) = cameras.single() {
        commands
            .entity(entity)
            .insert((FocusCamera(driver), transform, rig));
        tracing::info!("[orbit] focus view mounted");
    } else {
        commands.spawn((MainCamera, FocusCamera(driver), transform, rig));
        tracing::info!("[orbit] focus view mounted on a new camera entity");
    }
}

/// Removes the focus driver and parks the orbit rig; nothing moves in Idle.
#[allow(clippy::needless_pass_by_value)]
fn unmount_focus_view(
    mut commands: Commands,
    mut cameras: Query<(Entity, &mut OrbitRig), With<FocusCamera>>,
    state_stores: Res<StateStores>,
) {
    tracing::info!("[orbit] focus view unmounted");
    for (entity, mut rig) in &mut cameras {
        rig.set_enabled(false);
        rig.set_auto_rotate(false);
        commands.entity(entity).remove::<FocusCamera>();
    }
    state_stores.navigation.reset();
}
