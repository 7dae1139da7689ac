//! Active-section tracking with deduplicated change notifications.

use serde::{Deserialize, Serialize};

use crate::progress::{Segment, clamp_progress};

/// How the active section is derived from progress.
///
/// Whichever policy is chosen drives both the progress dots and the text
/// panel; there is only one tracker per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionPolicy {
    /// `round(progress * (N - 1))`: the nearest waypoint.
    #[default]
    Nearest,
    /// `to_index` once `local_t > 0.5`, otherwise `from_index`.
    Threshold,
}

impl SectionPolicy {
    /// Active section index for the given progress and its mapped segment.
    pub fn active_index(self, progress: f32, segment: &Segment, len: usize) -> usize {
        let last = len.saturating_sub(1);
        match self {
            Self::Nearest => ((clamp_progress(progress) * last as f32).round() as usize).min(last),
            Self::Threshold => {
                if segment.local_t > 0.5 {
                    segment.to_index
                } else {
                    segment.from_index
                }
            }
        }
    }
}

/// Tracks the active section and reports each change exactly once.
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    policy: SectionPolicy,
    active: usize,
    last_notified: Option<usize>,
}

impl SectionTracker {
    pub fn new(policy: SectionPolicy) -> Self {
        Self {
            policy,
            active: 0,
            last_notified: None,
        }
    }

    pub fn policy(&self) -> SectionPolicy {
        self.policy
    }

    /// Index currently considered active.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Last index that was reported, if any.
    pub fn last_notified(&self) -> Option<usize> {
        self.last_notified
    }

    /// Recomputes the active section.
    ///
    /// Returns `Some(index)` only when the index differs from the last one
    /// reported. The first call always reports.
    pub fn update(&mut self, progress: f32, segment: &Segment, len: usize) -> Option<usize> {
        self.active = self.policy.active_index(progress, segment, len);
        if self.last_notified == Some(self.active) {
            return None;
        }
        self.last_notified = Some(self.active);
        Some(self.active)
    }

    /// Makes `index` active for an explicit jump, without reporting it.
    ///
    /// The next update reports the change if it differs from the last one
    /// reported.
    pub fn jump_to(&mut self, index: usize, len: usize) {
        self.active = index.min(len.saturating_sub(1));
    }

    /// Forgets what was reported; the next update reports again.
    pub fn reset(&mut self) {
        self.active = 0;
        self.last_notified = None;
    }
}
