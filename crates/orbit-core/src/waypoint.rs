//! Waypoint table: the ordered camera poses the journey passes through.
//!
//! Each waypoint pairs a camera position with the point it should face when the
//! viewer is parked on that section. Insertion order (the `order` field) defines
//! the spatial path travelled by the camera.

use std::collections::HashSet;
use std::slice;

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Camera home pose used when no waypoint data is available.
pub const FALLBACK_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 12.0, 25.0);
/// Look-at target paired with [`FALLBACK_CAMERA_POSITION`].
pub const FALLBACK_LOOK_AT: Vec3 = Vec3::ZERO;

/// Which side of the viewport the section's subject sits on.
///
/// Only the presentation layer reads this; the camera core carries it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideHint {
    #[default]
    Left,
    Right,
}

impl SideHint {
    /// The side the text panel goes on (opposite the subject).
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A camera position together with the point it faces.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// The pose shown when waypoint data failed to load.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_CAMERA_POSITION, FALLBACK_LOOK_AT)
    }

    /// Linear interpolation of both fields by `t`.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            look_at: self.look_at.lerp(other.look_at, t),
        }
    }
}

/// A named section of the journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Stable key, unique within a table.
    pub id: String,
    /// Display name for progress-dot tooltips and panel titles.
    #[serde(default)]
    pub name: String,
    /// Position in the sequence, `0..N-1`.
    pub order: usize,
    #[serde(with = "vec3_array")]
    pub camera_position: Vec3,
    #[serde(with = "vec3_array")]
    pub look_at: Vec3,
    #[serde(default)]
    pub side_hint: SideHint,
}

impl Waypoint {
    pub fn new(
        id: impl Into<String>,
        order: usize,
        camera_position: Vec3,
        look_at: Vec3,
        side_hint: SideHint,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            order,
            camera_position,
            look_at,
            side_hint,
        }
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.camera_position, self.look_at)
    }
}

/// On-disk shape of a table: either a bare array or `{ "waypoints": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TableDocument {
    Wrapped { waypoints: Vec<Waypoint> },
    Bare(Vec<Waypoint>),
}

/// Immutable, validated, order-sorted list of waypoints.
///
/// Invariants: at least 2 entries, unique ids, and `waypoints[i].order == i`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WaypointTable {
    waypoints: Vec<Waypoint>,
}

impl WaypointTable {
    /// Validates and sorts the given waypoints.
    pub fn new(mut waypoints: Vec<Waypoint>) -> Result<Self, OrbitError> {
        if waypoints.len() < 2 {
            return Err(OrbitError::DegenerateTable {
                len: waypoints.len(),
            });
        }

        let mut seen = HashSet::with_capacity(waypoints.len());
        for waypoint in &waypoints {
            if !seen.insert(waypoint.id.as_str()) {
                return Err(OrbitError::DuplicateWaypointId(waypoint.id.clone()));
            }
        }

        waypoints.sort_by_key(|w| w.order);
        for (expected, waypoint) in waypoints.iter().enumerate() {
            if waypoint.order != expected {
                return Err(OrbitError::NonContiguousOrder {
                    expected,
                    found: waypoint.order,
                });
            }
        }

        Ok(Self { waypoints })
    }

    /// Parses a JSON table and validates it.
    pub fn from_json(json: &str) -> Result<Self, OrbitError> {
        let document: TableDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Same as [`Self::from_json`] for an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, OrbitError> {
        let document: TableDocument = serde_json::from_value(value)?;
        Self::from_document(document)
    }

    fn from_document(document: TableDocument) -> Result<Self, OrbitError> {
        match document {
            TableDocument::Wrapped { waypoints } | TableDocument::Bare(waypoints) => {
                Self::new(waypoints)
            }
        }
    }

    /// Parses a JSON table, falling back to a stationary camera on failure.
    ///
    /// The failure is logged, never returned: a broken table must not blank
    /// the page.
    pub fn from_json_or_fallback(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|e| {
            tracing::error!("[orbit] waypoint table rejected, using fallback pose: {e}");
            Self::stationary(CameraPose::fallback())
        })
    }

    /// A two-entry table where both entries share `pose`; the camera never moves.
    pub fn stationary(pose: CameraPose) -> Self {
        let make = |id: &str, order| Waypoint {
            id: id.to_string(),
            name: "Home".to_string(),
            order,
            camera_position: pose.position,
            look_at: pose.look_at,
            side_hint: SideHint::Left,
        };
        Self {
            waypoints: vec![make("home", 0), make("home-end", 1)],
        }
    }

    /// The zig-zag journey from the sun down to neptune (9 sections).
    pub fn solar_system() -> Self {
        const SOLAR_SYSTEM_JSON: &str = include_str!("../waypoints/solar_system.json");
        Self::from_json_or_fallback(SOLAR_SYSTEM_JSON)
    }

    /// The deep-space journey where each look-at is the planet itself (8 sections).
    pub fn deep_space() -> Self {
        const DEEP_SPACE_JSON: &str = include_str!("../waypoints/deep_space.json");
        Self::from_json_or_fallback(DEEP_SPACE_JSON)
    }

    /// Number of waypoints (always >= 2).
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Index of the last waypoint.
    pub fn last_index(&self) -> usize {
        self.waypoints.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// The waypoint at `index`, clamped into the table.
    pub fn clamped(&self, index: usize) -> &Waypoint {
        &self.waypoints[index.min(self.last_index())]
    }

    pub fn first(&self) -> &Waypoint {
        &self.waypoints[0]
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.waypoints.iter().position(|w| w.id == id)
    }

    pub fn iter(&self) -> slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }

    pub fn as_slice(&self) -> &[Waypoint] {
        &self.waypoints
    }
}

impl Default for WaypointTable {
    fn default() -> Self {
        Self::solar_system()
    }
}

impl<'a> IntoIterator for &'a WaypointTable {
    type Item = &'a Waypoint;
    type IntoIter = slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serializes `Vec3` as a plain `[x, y, z]` array.
pub(crate) mod vec3_array {
    use bevy::math::Vec3;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(v: &Vec3, serializer: S) -> Result<S::Ok, S::Error> {
        v.to_array().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec3, D::Error> {
        <[f32; 3]>::deserialize(deserializer).map(Vec3::from_array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(id: &str, order: usize) -> Waypoint {
        Waypoint::new(
            id,
            order,
            Vec3::new(0.0, -10.0 * order as f32, 20.0),
            Vec3::new(0.0, -10.0 * order as f32, 0.0),
            SideHint::Left,
        )
    }

    #[test]
    fn test_solar_system_table() {
        let table = WaypointTable::solar_system();
        assert_eq!(table.len(), 9);
        assert_eq!(table.first().id, "sun");
        assert_eq!(table.clamped(100).id, "neptune");
        assert_eq!(table.index_of("earth"), Some(3));
        assert_eq!(table.get(1).map(|w| w.side_hint), Some(SideHint::Right));
        assert_eq!(table.first().camera_position, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(table.first().look_at, Vec3::new(-3.0, 0.0, 0.0));
    }

    #[test]
    fn test_deep_space_table() {
        let table = WaypointTable::deep_space();
        assert_eq!(table.len(), 8);
        assert_eq!(table.clamped(7).id, "neptune");
        assert!(table.iter().enumerate().all(|(i, w)| w.order == i));
    }

    #[test]
    fn test_rejects_degenerate_table() {
        let err = WaypointTable::new(vec![waypoint("only", 0)]).unwrap_err();
        assert!(matches!(err, OrbitError::DegenerateTable { len: 1 }));

        let err = WaypointTable::new(Vec::new()).unwrap_err();
        assert!(matches!(err, OrbitError::DegenerateTable { len: 0 }));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = WaypointTable::new(vec![waypoint("a", 0), waypoint("a", 1)]).unwrap_err();
        assert!(matches!(err, OrbitError::DuplicateWaypointId(id) if id == "a"));
    }

    #[test]
    fn test_rejects_order_gaps() {
        let err = WaypointTable::new(vec![waypoint("a", 0), waypoint("b", 2)]).unwrap_err();
        assert!(matches!(
            err,
            OrbitError::NonContiguousOrder {
                expected: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn test_sorts_by_order() {
        let table =
            WaypointTable::new(vec![waypoint("c", 2), waypoint("a", 0), waypoint("b", 1)])
                .unwrap();
        let ids: Vec<_> = table.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_bare_array_json() {
        let json = r#"[
            { "id": "a", "order": 0, "camera_position": [0, 0, 10], "look_at": [0, 0, 0] },
            { "id": "b", "order": 1, "camera_position": [0, -5, 10], "look_at": [1, -5, 0],
              "side_hint": "right" }
        ]"#;
        let table = WaypointTable::from_json(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.first().side_hint, SideHint::Left);
        assert_eq!(table.clamped(1).side_hint, SideHint::Right);
        assert_eq!(table.clamped(1).look_at, Vec3::new(1.0, -5.0, 0.0));
    }

    #[test]
    fn test_invalid_json_falls_back_to_stationary() {
        let table = WaypointTable::from_json_or_fallback("{ not json");
        assert_eq!(table.len(), 2);
        assert_eq!(table.first().pose(), CameraPose::fallback());
        assert_eq!(table.clamped(1).pose(), CameraPose::fallback());

        let single = r#"[{ "id": "a", "order": 0, "camera_position": [1, 2, 3], "look_at": [0, 0, 0] }]"#;
        let table = WaypointTable::from_json_or_fallback(single);
        assert_eq!(table.first().pose(), CameraPose::fallback());
    }

    #[test]
    fn test_pose_lerp() {
        let a = CameraPose::new(Vec3::ZERO, Vec3::ZERO);
        let b = CameraPose::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 4.0, 0.0));
        let mid = a.lerp(&b, 0.5);
        assert!((mid.position.x - 5.0).abs() < 0.001);
        assert!((mid.look_at.y - 2.0).abs() < 0.001);
    }
}
