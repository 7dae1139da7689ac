//! Window scroll listener feeding raw scroll geometry to the engine.

use gloo::events::EventListener;
use orbit_core::bevy::OrbitCommand;
use yew::prelude::*;

use crate::dom::ScrollGeometry;
use crate::hooks::OrbitContext;

fn report_scroll(orbit: &OrbitContext) {
    let Some(geometry) = ScrollGeometry::read() else {
        return;
    };
    let command = OrbitCommand::SetScroll {
        scroll_top: geometry.scroll_top,
        scroll_height: geometry.scroll_height,
        viewport_height: geometry.viewport_height,
    };
    if let Err(e) = orbit.send(&command) {
        tracing::debug!("scroll update dropped: {}", e);
    }
}

/// Forwards every window scroll and resize to the engine as `set_scroll`.
///
/// The engine derives progress itself and keeps the last value when the page
/// has nothing to scroll.
#[hook]
pub fn use_scroll_progress(orbit: OrbitContext, enabled: bool) {
    use_effect_with((orbit, enabled), move |(orbit, enabled)| {
        let mut listeners = Vec::new();

        if *enabled && let Some(window) = web_sys::window() {
            // Sync the current position once the view is mounted.
            report_scroll(orbit);

            for event in ["scroll", "resize"] {
                let orbit = orbit.clone();
                listeners.push(EventListener::new(&window, event, move |_| {
                    report_scroll(&orbit);
                }));
            }
        }

        move || drop(listeners)
    });
}
