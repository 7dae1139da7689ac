//! Scroll-driven journey page.
//!
//! The page is a tall, empty scroll track (one viewport per section) over the
//! fixed engine canvas. Scrolling it is the only way the camera moves.

use orbit_core::bevy::ViewModeSummary;
use orbit_core::{CameraConfig, ViewConfig};
use yew::prelude::*;

use crate::components::{ProgressDots, SectionPanel};
use crate::content::section_blurb;
use crate::dom::jump_scroll_to;
use crate::hooks::{
    use_keyboard_navigation, use_navigation, use_orbit, use_scroll_progress, use_waypoints,
};

#[derive(Properties, PartialEq)]
pub struct ScrollViewProps {
    pub camera: CameraConfig,
}

#[function_component(ScrollView)]
pub fn scroll_view(props: &ScrollViewProps) -> Html {
    let orbit = use_orbit();
    let navigation = use_navigation();
    let waypoints = use_waypoints();
    let planned_sections = use_memo(props.camera.builtin_table, |table| table.load().len());

    // Mount on entry (and on preset change), unmount on leave.
    {
        let orbit = orbit.clone();
        use_effect_with(props.camera, move |camera| {
            jump_scroll_to(0.0);
            let config = ViewConfig {
                camera: *camera,
                waypoints: None,
            };
            if let Err(e) = orbit.mount_scroll(&config) {
                tracing::error!("failed to mount scroll view: {}", e);
            }

            move || {
                if let Err(e) = orbit.clear() {
                    tracing::warn!("failed to unmount scroll view: {}", e);
                }
            }
        });
    }

    let mounted = navigation.mode == ViewModeSummary::Scroll;
    let count = if waypoints.is_empty() {
        *planned_sections
    } else {
        waypoints.len()
    };

    use_scroll_progress(orbit, mounted);
    use_keyboard_navigation(navigation.active_section, count, mounted);

    let track_style = format!(
        "position: relative; height: {}vh; z-index: 1; pointer-events: none;",
        count.max(1) * 100
    );

    html! {
        <>
            <div class="scroll-track" style={track_style} />
            if mounted && !waypoints.is_empty() {
                <ProgressDots
                    waypoints={waypoints.clone()}
                    active={navigation.active_section}
                />
                <SectionPanel
                    title={navigation.section_name.clone()}
                    index={navigation.active_section}
                    count={navigation.section_count}
                    side_hint={navigation.side_hint}
                >
                    <p style="margin: 0; line-height: 1.5;">
                        { section_blurb(&navigation.section_id) }
                    </p>
                </SectionPanel>
            }
        </>
    }
}
