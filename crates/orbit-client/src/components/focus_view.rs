//! Click-to-focus page.
//!
//! A list of bodies; picking one flies the camera to it, Escape or the home
//! button flies back to the free-orbit view.

use gloo::events::EventListener;
use orbit_core::bevy::{OrbitCommand, ViewModeSummary};
use orbit_core::{CameraConfig, FocusTarget, ViewConfig, WaypointTable};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::content::body_size;
use crate::dom::jump_scroll_to;
use crate::hooks::{OrbitContext, use_navigation, use_orbit};

fn release_focus(orbit: &OrbitContext) {
    if let Err(e) = orbit.send(&OrbitCommand::ReleaseFocus) {
        tracing::warn!("failed to release focus: {}", e);
    }
}

#[function_component(FocusView)]
pub fn focus_view() -> Html {
    let orbit = use_orbit();
    let navigation = use_navigation();
    let bodies = use_memo((), |()| WaypointTable::deep_space());
    let focused = use_state(|| None::<String>);

    {
        let orbit = orbit.clone();
        use_effect_with((), move |()| {
            jump_scroll_to(0.0);
            let config = ViewConfig {
                camera: CameraConfig::focus(),
                waypoints: None,
            };
            if let Err(e) = orbit.mount_focus(&config) {
                tracing::error!("failed to mount focus view: {}", e);
            }

            move || {
                if let Err(e) = orbit.clear() {
                    tracing::warn!("failed to unmount focus view: {}", e);
                }
            }
        });
    }

    let mounted = navigation.mode == ViewModeSummary::Focus;

    {
        let orbit = orbit.clone();
        let focused = focused.clone();
        use_effect_with((orbit, mounted), move |(orbit, mounted)| {
            let listener = mounted.then(|| {
                let orbit = orbit.clone();
                EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>()
                        && event.key() == "Escape"
                    {
                        release_focus(&orbit);
                        focused.set(None);
                    }
                })
            });

            move || drop(listener)
        });
    }

    let buttons = bodies.iter().map(|body| {
        let is_focused = focused.as_deref() == Some(body.id.as_str());
        let onclick = {
            let orbit = orbit.clone();
            let focused = focused.clone();
            let id = body.id.clone();
            let target = FocusTarget::new(body.look_at, body_size(&body.id));
            Callback::from(move |_: MouseEvent| {
                if let Err(e) = orbit.send(&OrbitCommand::Focus { target }) {
                    tracing::warn!("failed to focus {}: {}", id, e);
                    return;
                }
                focused.set(Some(id.clone()));
            })
        };
        let style = format!(
            "display: block; width: 100%; margin: 4px 0; padding: 6px 10px; text-align: left; color: inherit; border: 1px solid #555; border-radius: 4px; cursor: pointer; background: {};",
            if is_focused { "rgba(255, 191, 51, 0.3)" } else { "rgba(0, 0, 0, 0.5)" }
        );

        html! {
            <li key={body.id.clone()} style="list-style: none;">
                <button {style} disabled={!mounted} {onclick}>{ body.name.clone() }</button>
            </li>
        }
    });

    let on_home = {
        let orbit = orbit.clone();
        let focused = focused.clone();
        Callback::from(move |_: MouseEvent| {
            release_focus(&orbit);
            focused.set(None);
        })
    };

    let status = match (focused.as_deref(), navigation.focus_arrived) {
        (None, _) => "Free orbit",
        (Some(_), false) => "Flying...",
        (Some(_), true) => "Arrived",
    };

    html! {
        <aside
            class="focus-menu"
            style="position: fixed; left: 24px; top: 24px; width: 12rem; z-index: 1;"
        >
            <small style="opacity: 0.6;">{ status }</small>
            <ul style="margin: 8px 0; padding: 0;">
                { for buttons }
            </ul>
            <button disabled={!mounted || focused.is_none()} onclick={on_home}>{ "Home" }</button>
        </aside>
    }
}
