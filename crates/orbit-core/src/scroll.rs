//! Scroll proxy: the progress source for hosts that do not scroll natively.
//!
//! Raw input always wins. A programmatic smooth transition runs only until the
//! next raw value arrives, which cancels it.

use crate::easing::EasingType;
use crate::progress::clamp_progress;

/// Default duration of a programmatic smooth scroll, in seconds.
pub const DEFAULT_TRANSITION_SECS: f32 = 0.8;

/// An animated move of the progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTransition {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: EasingType,
}

impl ScrollTransition {
    pub fn new(from: f32, to: f32, duration: f32, easing: EasingType) -> Self {
        Self {
            from: clamp_progress(from),
            to: clamp_progress(to),
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Progress at the current elapsed time.
    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Advances by `dt` seconds and returns the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if dt > 0.0 {
            self.elapsed += dt;
        }
        self.value()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Holds the progress value the camera driver reads each frame.
#[derive(Debug, Clone, Default)]
pub struct ScrollProxy {
    progress: f32,
    transition: Option<ScrollTransition>,
}

impl ScrollProxy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current progress (last raw value or transition position).
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Records raw user input. Cancels any running transition.
    pub fn set_raw(&mut self, progress: f32) {
        if self.transition.take().is_some() {
            tracing::debug!("[orbit] scroll transition superseded by user input");
        }
        self.progress = clamp_progress(progress);
    }

    /// Starts a smooth transition from the current progress to `target`.
    ///
    /// A transition already in flight is replaced and the new one starts from
    /// wherever the old one had reached.
    pub fn request(&mut self, target: f32, duration: f32, easing: EasingType) {
        self.transition = Some(ScrollTransition::new(self.progress, target, duration, easing));
    }

    /// Advances the running transition, if any, and returns current progress.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if let Some(transition) = self.transition.as_mut() {
            self.progress = transition.advance(dt);
            if transition.is_finished() {
                self.progress = transition.target();
                self.transition = None;
            }
        }
        self.progress
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Destination of the running transition.
    pub fn pending_target(&self) -> Option<f32> {
        self.transition.as_ref().map(ScrollTransition::target)
    }
}
