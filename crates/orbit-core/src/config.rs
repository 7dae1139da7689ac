//! View configuration passed in by the host page.

use serde::{Deserialize, Serialize};

use crate::easing::EasingType;
use crate::error::OrbitError;
use crate::scroll::DEFAULT_TRANSITION_SECS;
use crate::tracker::SectionPolicy;
use crate::waypoint::{CameraPose, WaypointTable};

/// Which camera driver wraps the shared core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraVariant {
    /// Progress-driven journey through the waypoint table.
    #[default]
    Scroll,
    /// Click-to-focus on individual bodies with a free-orbit home view.
    Focus,
}

/// Which built-in table a view uses when the host sends none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinTable {
    #[default]
    SolarSystem,
    DeepSpace,
}

impl BuiltinTable {
    pub fn load(self) -> WaypointTable {
        match self {
            Self::SolarSystem => WaypointTable::solar_system(),
            Self::DeepSpace => WaypointTable::deep_space(),
        }
    }
}

fn default_smoothness() -> f32 {
    0.05
}

fn default_focus_smoothness() -> f32 {
    0.08
}

fn default_transition_duration() -> f32 {
    DEFAULT_TRANSITION_SECS
}

fn default_auto_rotate_speed() -> f32 {
    2.0
}

/// Camera tuning. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default)]
    pub variant: CameraVariant,
    /// Damping time constant in seconds for the scroll journey.
    #[serde(default = "default_smoothness")]
    pub smoothness: f32,
    /// Damping time constant in seconds for focus transitions.
    #[serde(default = "default_focus_smoothness")]
    pub focus_smoothness: f32,
    #[serde(default)]
    pub easing: EasingType,
    #[serde(default)]
    pub section_policy: SectionPolicy,
    /// Duration of programmatic smooth scrolls, in seconds.
    #[serde(default = "default_transition_duration")]
    pub transition_duration: f32,
    /// Orbit auto-rotate speed; 2.0 is one revolution per 30 seconds.
    #[serde(default = "default_auto_rotate_speed")]
    pub auto_rotate_speed: f32,
    #[serde(default)]
    pub builtin_table: BuiltinTable,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::scroll()
    }
}

impl CameraConfig {
    /// The scroll journey through the solar system.
    pub fn scroll() -> Self {
        Self {
            variant: CameraVariant::Scroll,
            smoothness: default_smoothness(),
            focus_smoothness: default_focus_smoothness(),
            easing: EasingType::EaseInOutCubic,
            section_policy: SectionPolicy::Nearest,
            transition_duration: default_transition_duration(),
            auto_rotate_speed: default_auto_rotate_speed(),
            builtin_table: BuiltinTable::SolarSystem,
        }
    }

    /// The deep-space journey, looking straight at each planet.
    pub fn advanced() -> Self {
        Self {
            builtin_table: BuiltinTable::DeepSpace,
            ..Self::scroll()
        }
    }

    /// Click-to-focus view.
    pub fn focus() -> Self {
        Self {
            variant: CameraVariant::Focus,
            ..Self::scroll()
        }
    }
}

/// Document the host passes when mounting a view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub camera: CameraConfig,
    /// Waypoint table JSON; `None` selects the configured built-in table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<serde_json::Value>,
}

impl ViewConfig {
    pub fn from_json(json: &str) -> Result<Self, OrbitError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes the waypoint table: the inline one if given, else the built-in.
    pub fn try_waypoint_table(&self) -> Result<WaypointTable, OrbitError> {
        match &self.waypoints {
            None => Ok(self.camera.builtin_table.load()),
            Some(value) => WaypointTable::from_value(value.clone()),
        }
    }

    /// Resolves the waypoint table.
    ///
    /// Invalid waypoint data is logged and replaced by the stationary fallback.
    pub fn waypoint_table(&self) -> WaypointTable {
        self.try_waypoint_table().unwrap_or_else(|e| {
            tracing::error!("[orbit] view waypoints rejected, using fallback pose: {e}");
            WaypointTable::stationary(CameraPose::fallback())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let view = ViewConfig::from_json("{}").unwrap();
        assert_eq!(view.camera, CameraConfig::scroll());
        assert_eq!(view.waypoint_table().len(), 9);
    }

    #[test]
    fn test_partial_camera_config() {
        let view = ViewConfig::from_json(
            r#"{ "camera": { "variant": "focus", "section_policy": "threshold", "smoothness": 0.2 } }"#,
        )
        .unwrap();
        assert_eq!(view.camera.variant, CameraVariant::Focus);
        assert_eq!(view.camera.section_policy, SectionPolicy::Threshold);
        assert!((view.camera.smoothness - 0.2).abs() < 1e-6);
        assert!((view.camera.focus_smoothness - 0.08).abs() < 1e-6);
        assert_eq!(view.camera.easing, EasingType::EaseInOutCubic);
    }

    #[test]
    fn test_advanced_preset_uses_deep_space() {
        let view = ViewConfig {
            camera: CameraConfig::advanced(),
            waypoints: None,
        };
        assert_eq!(view.waypoint_table().len(), 8);
    }

    #[test]
    fn test_bad_waypoints_fall_back() {
        let view = ViewConfig::from_json(r#"{ "waypoints": [ { "id": "lonely" } ] }"#).unwrap();
        let table = view.waypoint_table();
        assert_eq!(table.first().pose(), CameraPose::fallback());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(matches!(
            ViewConfig::from_json("[1, 2"),
            Err(OrbitError::Parse(_))
        ));
    }
}
