//! Keyboard and swipe navigation between sections.
//!
//! Both inputs resolve to a section index through `NavigationShell` and end in
//! a smooth window scroll. The camera follows the scroll on its own.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use orbit_core::{NavIntent, NavigationShell, SwipeTracker};
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, TouchEvent};
use yew::prelude::*;

use crate::dom::scroll_to_section;

/// A pending request older than this no longer anchors the next one.
const PENDING_TIMEOUT_MS: f64 = 1500.0;

/// Last section requested by keyboard or swipe, while its scroll is in flight.
#[derive(Debug, Clone, Copy)]
struct PendingTarget {
    index: usize,
    requested_at: f64,
}

/// Origin for the next relative step.
///
/// Repeated presses during a smooth scroll step from the section already
/// requested, not from the one the camera is passing.
fn navigation_origin(active: usize, pending: Option<PendingTarget>, now: f64) -> usize {
    match pending {
        Some(target) if target.index != active && now - target.requested_at < PENDING_TIMEOUT_MS => {
            target.index
        }
        _ => active,
    }
}

fn request(
    shell: NavigationShell,
    active: usize,
    intent: NavIntent,
    pending: &RefCell<Option<PendingTarget>>,
) {
    let now = js_sys::Date::now();
    let origin = navigation_origin(active, *pending.borrow(), now);
    let target = shell.resolve(origin, intent);
    let index = scroll_to_section(&shell, target);
    *pending.borrow_mut() = Some(PendingTarget {
        index,
        requested_at: now,
    });
}

/// Check if the event target is an input element (input, textarea, etc.)
fn is_input_element(event: &KeyboardEvent) -> bool {
    if let Some(target) = event.target()
        && let Some(element) = target.dyn_ref::<web_sys::HtmlElement>()
    {
        let tag_name = element.tag_name().to_lowercase();
        return matches!(tag_name.as_str(), "input" | "textarea" | "select");
    }
    false
}

fn touch_point(event: &TouchEvent) -> Option<(f32, f32)> {
    let touch = event.changed_touches().get(0)?;
    Some((touch.client_x() as f32, touch.client_y() as f32))
}

/// Hook for keyboard and swipe navigation.
///
/// Arrow keys, Page Up/Down and Space step one section; Home and End jump to
/// the ends. A vertical swipe steps one section. Steps clamp at the table
/// bounds.
#[hook]
pub fn use_keyboard_navigation(active: usize, count: usize, enabled: bool) {
    let pending = use_mut_ref(|| None::<PendingTarget>);
    let swipe = use_mut_ref(SwipeTracker::new);

    use_effect_with((active, count, enabled), move |&(active, count, enabled)| {
        let mut listeners = Vec::new();

        if enabled && count > 1 {
            let shell = NavigationShell::new(count);
            let document = gloo::utils::document();
            let window = gloo::utils::window();

            {
                let pending = Rc::clone(&pending);
                // Not passive: handled keys must not also scroll natively.
                let options = EventListenerOptions::enable_prevent_default();
                listeners.push(EventListener::new_with_options(
                    &document,
                    "keydown",
                    options,
                    move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if is_input_element(event)
                            || event.ctrl_key()
                            || event.meta_key()
                            || event.alt_key()
                        {
                            return;
                        }

                        let key = event.key();
                        let intent = if key == "End" {
                            Some(NavIntent::Goto(shell.last()))
                        } else {
                            NavIntent::from_key(&key)
                        };
                        if let Some(intent) = intent {
                            event.prevent_default();
                            request(shell, active, intent, &pending);
                        }
                    },
                ));
            }

            {
                let swipe = Rc::clone(&swipe);
                listeners.push(EventListener::new(&window, "touchstart", move |event| {
                    if let Some(event) = event.dyn_ref::<TouchEvent>()
                        && let Some((x, y)) = touch_point(event)
                    {
                        swipe.borrow_mut().begin(x, y);
                    }
                }));
            }

            {
                let swipe = Rc::clone(&swipe);
                let pending = Rc::clone(&pending);
                listeners.push(EventListener::new(&window, "touchend", move |event| {
                    let Some((x, y)) = event.dyn_ref::<TouchEvent>().and_then(touch_point) else {
                        swipe.borrow_mut().cancel();
                        return;
                    };
                    let intent = swipe.borrow_mut().end(x, y);
                    if let Some(intent) = intent {
                        request(shell, active, intent, &pending);
                    }
                }));
            }
        }

        move || drop(listeners)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn origin_is_active_without_pending_request() {
        assert_eq!(navigation_origin(3, None, 0.0), 3);
    }

    #[wasm_bindgen_test]
    fn origin_follows_fresh_pending_request() {
        let pending = PendingTarget {
            index: 5,
            requested_at: 1000.0,
        };
        assert_eq!(navigation_origin(3, Some(pending), 1200.0), 5);
    }

    #[wasm_bindgen_test]
    fn stale_or_reached_pending_request_is_ignored() {
        let pending = PendingTarget {
            index: 5,
            requested_at: 1000.0,
        };
        assert_eq!(navigation_origin(3, Some(pending), 1000.0 + PENDING_TIMEOUT_MS), 3);
        assert_eq!(navigation_origin(5, Some(pending), 1100.0), 5);
    }
}
