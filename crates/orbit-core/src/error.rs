//! Error type for the camera core.

/// Errors raised while building a waypoint table or decoding host input.
///
/// Out-of-range progress and navigation indices are not errors; they are
/// clamped where they are consumed.
#[derive(Debug, thiserror::Error)]
pub enum OrbitError {
    /// Fewer than two waypoints: nothing to interpolate between.
    #[error("waypoint table needs at least 2 entries, got {len}")]
    DegenerateTable { len: usize },
    /// Two waypoints share the same id.
    #[error("duplicate waypoint id: {0}")]
    DuplicateWaypointId(String),
    /// Waypoint `order` values are not exactly `0..N-1`.
    #[error("waypoint order is not contiguous: expected {expected}, found {found}")]
    NonContiguousOrder { expected: usize, found: usize },
    /// JSON could not be decoded.
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A host command was well-formed JSON but semantically unusable.
    #[error("invalid command: {0}")]
    InvalidCommand(String),
}
