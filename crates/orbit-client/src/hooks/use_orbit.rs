//! Orbit engine integration hooks for Yew.
//!
//! `OrbitProvider` owns the canvas and starts the engine once. The polling
//! hooks read the shared navigation store and re-render only when its
//! version moves.

use gloo::timers::callback::{Interval, Timeout};
use orbit_core::bevy::{NavigationSummary, OrbitCommand, WaypointInfo};
use orbit_core::ViewConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

pub use orbit_core::bevy::{
    get_navigation, get_navigation_version, get_waypoints, get_waypoints_version,
    init_focus_view, init_scroll_view, request_orbit_exit,
    reset_orbit_state, send_command, start_orbit_app,
};

// ============================================================================
// Context
// ============================================================================

/// Shared handle for sending commands to the engine.
#[derive(Clone, PartialEq)]
pub struct OrbitContext {
    /// Whether the engine has been started.
    pub initialized: bool,
}

impl OrbitContext {
    /// Send a command to the engine.
    pub fn send(&self, command: &OrbitCommand) -> Result<(), String> {
        if !self.initialized {
            return Err("orbit engine not initialized".to_string());
        }
        let json = serde_json::to_string(command).map_err(|e| e.to_string())?;
        send_command(&json).map_err(|e| format!("{e:?}"))
    }

    /// Mount the scroll view with `config`.
    pub fn mount_scroll(&self, config: &ViewConfig) -> Result<(), String> {
        let json = serde_json::to_string(config).map_err(|e| e.to_string())?;
        init_scroll_view(&json).map_err(|e| format!("{e:?}"))
    }

    /// Mount the click-to-focus view with `config`.
    pub fn mount_focus(&self, config: &ViewConfig) -> Result<(), String> {
        let json = serde_json::to_string(config).map_err(|e| e.to_string())?;
        init_focus_view(&json).map_err(|e| format!("{e:?}"))
    }

    /// Unmount whichever view is active.
    ///
    /// Queued even before the engine starts, like the mount calls.
    pub fn clear(&self) -> Result<(), String> {
        let json = serde_json::to_string(&OrbitCommand::ClearMode).map_err(|e| e.to_string())?;
        send_command(&json).map_err(|e| format!("{e:?}"))
    }
}

/// Props for `OrbitProvider`.
#[derive(Properties, PartialEq)]
pub struct OrbitProviderProps {
    pub children: Children,
    /// Canvas element ID.
    pub canvas_id: AttrValue,
}

/// Provider component that starts the engine in Idle mode.
///
/// Views mount themselves with `init_scroll_view` or `init_focus_view`.
#[function_component(OrbitProvider)]
pub fn orbit_provider(props: &OrbitProviderProps) -> Html {
    let initialized = use_state(|| false);

    {
        let initialized = initialized.clone();
        let canvas_id = props.canvas_id.clone();

        use_effect_with((), move |()| {
            let window = web_sys::window();
            let beforeunload = Closure::<dyn Fn()>::new(move || {
                tracing::info!("beforeunload: requesting orbit exit and cleaning up state");
                request_orbit_exit();
                reset_orbit_state();
            });

            if let Some(window) = &window
                && let Err(e) = window.add_event_listener_with_callback(
                    "beforeunload",
                    beforeunload.as_ref().unchecked_ref(),
                )
            {
                tracing::warn!("failed to add beforeunload listener: {:?}", e);
            }

            // Give the canvas a moment to mount.
            let timeout = Timeout::new(100, move || {
                initialized.set(true);
                tracing::info!("orbit engine initializing...");

                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = start_orbit_app(&canvas_id) {
                        tracing::error!("failed to start orbit engine: {:?}", e);
                    }
                });
            });

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "beforeunload",
                        beforeunload.as_ref().unchecked_ref(),
                    );
                }
                drop(timeout);
            }
        });
    }

    let context = OrbitContext {
        initialized: *initialized,
    };

    let canvas_style = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: 0;";

    html! {
        <ContextProvider<OrbitContext> context={context}>
            <canvas
                id={props.canvas_id.clone()}
                class="orbit-canvas"
                style={canvas_style}
            />
            { props.children.clone() }
        </ContextProvider<OrbitContext>>
    }
}

/// Hook to get the engine context.
#[hook]
pub fn use_orbit() -> OrbitContext {
    use_context::<OrbitContext>().unwrap_or(OrbitContext { initialized: false })
}

// ============================================================================
// Polling Hooks
// ============================================================================

/// Polling interval in milliseconds.
const POLL_INTERVAL_MS: u32 = 50;

/// Hook to get the navigation summary (active section, progress, mode).
#[hook]
pub fn use_navigation() -> NavigationSummary {
    let summary = use_state(NavigationSummary::default);
    let last_version = use_mut_ref(|| 0u64);

    {
        let summary = summary.clone();
        use_effect_with((), move |()| {
            let interval = Interval::new(POLL_INTERVAL_MS, move || {
                let version = get_navigation_version();
                if version != *last_version.borrow() {
                    *last_version.borrow_mut() = version;
                    let js_value = get_navigation();
                    if let Ok(next) = serde_wasm_bindgen::from_value::<NavigationSummary>(js_value) {
                        summary.set(next);
                    }
                }
            });

            move || drop(interval)
        });
    }

    (*summary).clone()
}

/// Hook to get the waypoint list of the mounted view.
#[hook]
pub fn use_waypoints() -> Vec<WaypointInfo> {
    let waypoints = use_state(Vec::new);
    let last_version = use_mut_ref(|| 0u64);

    {
        let waypoints = waypoints.clone();
        use_effect_with((), move |()| {
            let interval = Interval::new(POLL_INTERVAL_MS, move || {
                let version = get_waypoints_version();
                if version != *last_version.borrow() {
                    *last_version.borrow_mut() = version;
                    let js_value = get_waypoints();
                    if let Ok(list) = serde_wasm_bindgen::from_value::<Vec<WaypointInfo>>(js_value) {
                        waypoints.set(list);
                    }
                }
            });

            move || drop(interval)
        });
    }

    (*waypoints).clone()
}
