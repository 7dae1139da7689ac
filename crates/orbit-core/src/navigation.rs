//! Navigation shell: discrete user intents turned into scroll targets.
//!
//! Nothing here moves the camera. Intents resolve to a target section and a
//! scroll request; the host performs the (smooth, cancellable) scroll and the
//! camera driver picks the new position up on its next tick.

use serde::{Deserialize, Serialize};

use crate::progress::{section_progress, section_scroll_offset};

/// Minimum vertical travel in pixels for a touch gesture to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// A discrete navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum NavIntent {
    Next,
    Previous,
    Goto(usize),
}

impl NavIntent {
    /// Maps a DOM `KeyboardEvent.key` value to an intent.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | " " | "PageDown" => Some(Self::Next),
            "ArrowUp" | "PageUp" => Some(Self::Previous),
            "Home" => Some(Self::Goto(0)),
            _ => None,
        }
    }
}

/// A request to scroll the host container to a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    /// Section the scroll lands on.
    pub index: usize,
    /// Progress at the landing point.
    pub progress: f32,
    /// Scroll offset in pixels at the landing point.
    pub offset: f32,
}

/// Resolves intents against a table of `len` sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationShell {
    len: usize,
}

impl NavigationShell {
    /// A shell always covers at least one section, so `last()` cannot underflow.
    pub fn new(len: usize) -> Self {
        Self { len: len.max(1) }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: `new` clamps the length to at least one section.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the final section.
    pub fn last(&self) -> usize {
        self.len - 1
    }

    /// Target section for `intent` starting from `active`. Clamped, no wraparound.
    pub fn resolve(&self, active: usize, intent: NavIntent) -> usize {
        match intent {
            NavIntent::Next => self.navigate_relative(active, 1),
            NavIntent::Previous => self.navigate_relative(active, -1),
            NavIntent::Goto(index) => index.min(self.last()),
        }
    }

    /// Moves `delta` sections from `active`, clamped to the table.
    pub fn navigate_relative(&self, active: usize, delta: i32) -> usize {
        let active = active.min(self.last());
        let target = if delta.is_negative() {
            active.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            active.saturating_add(delta as usize)
        };
        target.min(self.last())
    }

    /// Scroll request that parks the view on `index`.
    pub fn scroll_to_section(&self, index: usize, scrollable_distance: f32) -> ScrollRequest {
        let index = index.min(self.last());
        ScrollRequest {
            index,
            progress: section_progress(index, self.len),
            offset: section_scroll_offset(index, self.len, scrollable_distance),
        }
    }
}

/// Turns touch start/end points into swipe intents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Finishes the gesture.
    ///
    /// Only a dominant vertical swipe longer than [`SWIPE_THRESHOLD_PX`]
    /// produces an intent: finger moving up means `Next`.
    pub fn end(&mut self, x: f32, y: f32) -> Option<NavIntent> {
        let (start_x, start_y) = self.start.take()?;
        let delta_x = start_x - x;
        let delta_y = start_y - y;

        if delta_y.abs() <= delta_x.abs() || delta_y.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        if delta_y > 0.0 {
            Some(NavIntent::Next)
        } else {
            Some(NavIntent::Previous)
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{map_progress, progress_from_scroll};

    #[test]
    fn test_previous_at_start_stays_put() {
        let shell = NavigationShell::new(9);
        assert_eq!(shell.navigate_relative(0, -1), 0);
        assert_eq!(shell.resolve(0, NavIntent::Previous), 0);
    }

    #[test]
    fn test_next_at_end_stays_put() {
        let shell = NavigationShell::new(9);
        assert_eq!(shell.resolve(8, NavIntent::Next), 8);
        assert_eq!(shell.navigate_relative(8, 3), 8);
    }

    #[test]
    fn test_relative_navigation() {
        let shell = NavigationShell::new(9);
        assert_eq!(shell.resolve(3, NavIntent::Next), 4);
        assert_eq!(shell.resolve(3, NavIntent::Previous), 2);
        assert_eq!(shell.navigate_relative(6, -10), 0);
        assert_eq!(shell.navigate_relative(6, i32::MAX), 8);
    }

    #[test]
    fn test_goto_clamps_out_of_range() {
        let shell = NavigationShell::new(9);
        assert_eq!(shell.resolve(2, NavIntent::Goto(42)), 8);
        assert_eq!(shell.scroll_to_section(42, 800.0).index, 8);
    }

    #[test]
    fn test_scroll_to_section_round_trips_through_mapper() {
        let shell = NavigationShell::new(9);
        let viewport = 900.0;
        let scrollable = 9.0 * viewport - viewport;

        for k in 0..9 {
            let request = shell.scroll_to_section(k, scrollable);
            let progress = progress_from_scroll(request.offset, scrollable + viewport, viewport)
                .unwrap();
            assert!((progress - request.progress).abs() < 1e-5);

            let segment = map_progress(progress, 9);
            let at_from = segment.from_index == k && segment.local_t < 1e-4;
            let at_to = segment.to_index == k && segment.local_t > 1.0 - 1e-4;
            assert!(at_from || at_to, "section {k}: {segment:?}");
        }
    }

    #[test]
    fn test_shell_never_empty() {
        let shell = NavigationShell::new(0);
        assert_eq!(shell.len(), 1);
        assert!(!shell.is_empty());
        assert_eq!(shell.last(), 0);
        assert_eq!(shell.resolve(0, NavIntent::Next), 0);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(NavIntent::from_key("ArrowDown"), Some(NavIntent::Next));
        assert_eq!(NavIntent::from_key(" "), Some(NavIntent::Next));
        assert_eq!(NavIntent::from_key("ArrowUp"), Some(NavIntent::Previous));
        assert_eq!(NavIntent::from_key("Home"), Some(NavIntent::Goto(0)));
        assert_eq!(NavIntent::from_key("Enter"), None);
    }

    #[test]
    fn test_swipe_detection() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(100.0, 600.0);
        assert_eq!(swipe.end(110.0, 400.0), Some(NavIntent::Next));

        swipe.begin(100.0, 400.0);
        assert_eq!(swipe.end(90.0, 600.0), Some(NavIntent::Previous));

        // Too short.
        swipe.begin(100.0, 400.0);
        assert_eq!(swipe.end(100.0, 370.0), None);

        // Mostly horizontal.
        swipe.begin(0.0, 400.0);
        assert_eq!(swipe.end(300.0, 300.0), None);

        // No start recorded.
        assert_eq!(swipe.end(0.0, 0.0), None);
    }
}
