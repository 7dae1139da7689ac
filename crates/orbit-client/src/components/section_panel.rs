//! Text panel for the active section.

use orbit_core::SideHint;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionPanelProps {
    pub title: AttrValue,
    pub index: usize,
    pub count: usize,
    /// Side the section's subject sits on.
    pub side_hint: SideHint,
    #[prop_or_default]
    pub children: Children,
}

/// Panel placed on the side of the screen the camera leaves free.
#[function_component(SectionPanel)]
pub fn section_panel(props: &SectionPanelProps) -> Html {
    let side = match props.side_hint.opposite() {
        SideHint::Left => "left: 6vw;",
        SideHint::Right => "right: 6vw;",
    };
    let style = format!(
        "position: fixed; top: 50%; transform: translateY(-50%); {side} max-width: 28rem; padding: 1.5rem; background: rgba(0, 0, 0, 0.55); border-radius: 8px; z-index: 1;"
    );

    html! {
        <section class="section-panel" {style}>
            <small style="opacity: 0.6;">
                { format!("{:02} / {:02}", props.index + 1, props.count) }
            </small>
            <h2 style="margin: 0.25rem 0 0.75rem;">{ props.title.clone() }</h2>
            { props.children.clone() }
        </section>
    }
}
