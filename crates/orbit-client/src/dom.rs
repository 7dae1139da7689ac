//! Window scroll helpers.

use orbit_core::NavigationShell;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Scroll geometry of the document in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub viewport_height: f32,
}

impl ScrollGeometry {
    /// Reads the current geometry; `None` before the document is ready.
    pub fn read() -> Option<Self> {
        let window = web_sys::window()?;
        let root = window.document()?.document_element()?;
        let scroll_top = window.scroll_y().ok()? as f32;
        let viewport_height = window.inner_height().ok()?.as_f64()? as f32;
        Some(Self {
            scroll_top,
            scroll_height: root.scroll_height() as f32,
            viewport_height,
        })
    }

    pub fn scrollable_distance(&self) -> f32 {
        (self.scroll_height - self.viewport_height).max(0.0)
    }
}

fn scroll_window(offset: f32, behavior: ScrollBehavior) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(f64::from(offset));
    options.set_behavior(behavior);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth, browser-animated scroll. Any user scroll cancels it.
pub fn smooth_scroll_to(offset: f32) {
    scroll_window(offset, ScrollBehavior::Smooth);
}

/// Instant scroll, used when a view mounts.
pub fn jump_scroll_to(offset: f32) {
    scroll_window(offset, ScrollBehavior::Instant);
}

/// Smoothly scrolls the window so the camera parks on section `index`.
///
/// Returns the section actually targeted after clamping.
pub fn scroll_to_section(shell: &NavigationShell, index: usize) -> usize {
    let distance = ScrollGeometry::read().map_or(0.0, |geometry| geometry.scrollable_distance());
    let request = shell.scroll_to_section(index, distance);
    tracing::debug!(
        "scroll to section {} (progress {:.3}, offset {:.0}px)",
        request.index,
        request.progress,
        request.offset
    );
    smooth_scroll_to(request.offset);
    request.index
}
