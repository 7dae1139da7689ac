//! Vertical progress indicator with one dot per section.

use orbit_core::NavigationShell;
use orbit_core::bevy::WaypointInfo;
use yew::prelude::*;

use crate::dom::scroll_to_section;

#[derive(Properties, PartialEq)]
pub struct ProgressDotsProps {
    pub waypoints: Vec<WaypointInfo>,
    pub active: usize,
}

/// Clicking a dot smooth-scrolls to its section.
#[function_component(ProgressDots)]
pub fn progress_dots(props: &ProgressDotsProps) -> Html {
    let shell = NavigationShell::new(props.waypoints.len());

    let dots = props.waypoints.iter().enumerate().map(|(index, waypoint)| {
        let is_active = index == props.active;
        let onclick = Callback::from(move |_: MouseEvent| {
            scroll_to_section(&shell, index);
        });
        let style = format!(
            "width: 10px; height: 10px; border-radius: 50%; border: 1px solid #ccc; padding: 0; cursor: pointer; background: {};",
            if is_active { "#ffbf33" } else { "transparent" }
        );

        html! {
            <li key={waypoint.id.clone()} style="list-style: none; margin: 10px 0;">
                <button
                    title={waypoint.name.clone()}
                    aria-label={format!("Go to {}", waypoint.name)}
                    aria-current={is_active.then_some("step")}
                    style={style}
                    {onclick}
                />
            </li>
        }
    });

    html! {
        <nav
            class="progress-dots"
            style="position: fixed; right: 24px; top: 50%; transform: translateY(-50%); z-index: 2;"
        >
            <ul style="margin: 0; padding: 0;">
                { for dots }
            </ul>
        </nav>
    }
}
