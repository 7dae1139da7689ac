//! WASM entry points for the camera views.
//!
//! Provides JavaScript-callable functions to start the app, mount views and
//! feed scroll input, plus getters the page polls for navigation state.

use std::sync::atomic::{AtomicBool, Ordering};

use bevy::prelude::*;
use bevy::winit::{UpdateMode, WinitSettings};
use parking_lot::Mutex;
use wasm_bindgen::prelude::*;

use crate::bevy::{CommandQueue, OrbitCommand, OrbitUnifiedPlugin, StateStores};
use crate::config::ViewConfig;

// ============================================================================
// Global State
// ============================================================================

/// Atomic flag for signaling app shutdown (checked every frame by Bevy system).
static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);

/// Atomic flag indicating whether the Bevy App has been started.
/// In WASM, the EventLoop can only be created once.
static BEVY_APP_STARTED: AtomicBool = AtomicBool::new(false);

/// Global state that can be reset on page reload.
#[derive(Clone)]
struct GlobalState {
    command_queue: CommandQueue,
    state_stores: StateStores,
}

impl GlobalState {
    fn new() -> Self {
        Self {
            command_queue: CommandQueue::new(),
            state_stores: StateStores::new(),
        }
    }
}

static GLOBAL_STATE: Mutex<Option<GlobalState>> = Mutex::new(None);

fn global_state() -> GlobalState {
    GLOBAL_STATE.lock().get_or_insert_with(GlobalState::new).clone()
}

fn get_command_queue() -> CommandQueue {
    global_state().command_queue
}

fn get_state_stores() -> StateStores {
    global_state().state_stores
}

fn is_shutdown_requested() -> bool {
    SHOULD_EXIT.load(Ordering::SeqCst)
}

fn ensure_running() -> Result<(), JsValue> {
    if is_shutdown_requested() {
        return Err(JsValue::from_str("orbit app is shutting down"));
    }
    Ok(())
}

/// Request the Bevy app to exit. Called before page unload.
#[wasm_bindgen]
pub fn request_orbit_exit() {
    tracing::info!("[orbit] request_orbit_exit called - signaling app to exit");
    SHOULD_EXIT.store(true, Ordering::SeqCst);
}

/// Reset global state. Called after app exits or before page unload.
#[wasm_bindgen]
pub fn reset_orbit_state() {
    tracing::info!("[orbit] reset_orbit_state called - clearing global state");
    SHOULD_EXIT.store(true, Ordering::SeqCst);

    let mut guard = GLOBAL_STATE.lock();
    if let Some(state) = guard.as_ref() {
        state.command_queue.clear();
    }
    *guard = None;

    SHOULD_EXIT.store(false, Ordering::SeqCst);
}

/// Bevy system that sends `AppExit` once exit was requested.
pub fn check_exit_system(mut exit: MessageWriter<bevy::app::AppExit>) {
    if SHOULD_EXIT.load(Ordering::SeqCst) {
        tracing::info!("[orbit] check_exit_system: sending AppExit");
        exit.write(bevy::app::AppExit::Success);
    }
}

// ============================================================================
// Initialization
// ============================================================================

/// Starts the unified Bevy app in Idle mode on the given canvas.
///
/// Use `init_scroll_view()` or `init_focus_view()` to mount a view.
#[wasm_bindgen]
pub fn start_orbit_app(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if BEVY_APP_STARTED.load(Ordering::SeqCst) {
        tracing::info!("[orbit] app already running, skipping creation");
        return Ok(());
    }

    let state = global_state();
    tracing::info!("[orbit] creating Bevy app for canvas: #{}", canvas_id);

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    canvas: Some(format!("#{canvas_id}")),
                    fit_canvas_to_parent: true,
                    // Scroll and touch events must reach the page.
                    prevent_default_event_handling: false,
                    ..default()
                }),
                ..default()
            })
            .disable::<bevy::log::LogPlugin>(),
    );
    app.insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::Continuous,
    });
    app.insert_resource(ClearColor(Color::BLACK));
    app.add_plugins(OrbitUnifiedPlugin::new(state.command_queue, state.state_stores));

    BEVY_APP_STARTED.store(true, Ordering::SeqCst);

    tracing::info!("[orbit] calling app.run()");
    app.run();
    Ok(())
}

fn parse_view_config(config_json: &str) -> Result<ViewConfig, JsValue> {
    if config_json.trim().is_empty() {
        return Ok(ViewConfig::default());
    }
    ViewConfig::from_json(config_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse view config: {e}")))
}

/// Mounts the scroll view.
///
/// Command sequence: ClearMode → Yield → InitScroll → Yield
#[wasm_bindgen]
pub fn init_scroll_view(config_json: &str) -> Result<(), JsValue> {
    ensure_running()?;
    let config = parse_view_config(config_json)?;
    let queue = get_command_queue();

    tracing::info!("[orbit] init_scroll_view: switching to Scroll mode");
    queue.push(OrbitCommand::ClearMode);
    queue.push(OrbitCommand::Yield);
    queue.push(OrbitCommand::InitScroll { config });
    queue.push(OrbitCommand::Yield);
    Ok(())
}

/// Mounts the click-to-focus view.
///
/// Command sequence: ClearMode → Yield → InitFocus → Yield
#[wasm_bindgen]
pub fn init_focus_view(config_json: &str) -> Result<(), JsValue> {
    ensure_running()?;
    let config = parse_view_config(config_json)?;
    let queue = get_command_queue();

    tracing::info!("[orbit] init_focus_view: switching to Focus mode");
    queue.push(OrbitCommand::ClearMode);
    queue.push(OrbitCommand::Yield);
    queue.push(OrbitCommand::InitFocus { config });
    queue.push(OrbitCommand::Yield);
    Ok(())
}

// ============================================================================
// Commands
// ============================================================================

/// Check if the Bevy app is running and not shutting down.
#[wasm_bindgen]
pub fn is_orbit_app_running() -> bool {
    BEVY_APP_STARTED.load(Ordering::SeqCst) && !is_shutdown_requested()
}

/// Sends a JSON command (`{ "type": "set_scroll", ... }`) to the running app.
#[wasm_bindgen]
pub fn send_command(command_json: &str) -> Result<(), JsValue> {
    ensure_running()?;
    let command = OrbitCommand::from_json(command_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    get_command_queue().push(command);
    Ok(())
}

// ============================================================================
// State Getters (for Yew hooks)
// ============================================================================

/// Get the navigation summary.
#[wasm_bindgen]
pub fn get_navigation() -> JsValue {
    if is_shutdown_requested() {
        return JsValue::NULL;
    }
    let summary = get_state_stores().navigation.get_summary();
    serde_wasm_bindgen::to_value(&summary).unwrap_or(JsValue::NULL)
}

/// Get the navigation summary version (for change detection).
#[wasm_bindgen]
pub fn get_navigation_version() -> u64 {
    get_state_stores().navigation.get_version()
}

/// Get the waypoint list of the mounted view.
#[wasm_bindgen]
pub fn get_waypoints() -> JsValue {
    let waypoints = get_state_stores().navigation.get_waypoints();
    serde_wasm_bindgen::to_value(&waypoints).unwrap_or(JsValue::NULL)
}

/// Get the waypoint list version.
#[wasm_bindgen]
pub fn get_waypoints_version() -> u64 {
    get_state_stores().navigation.get_waypoints_version()
}
