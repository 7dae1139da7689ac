//! Orbit-Folio Core Library
//!
//! Scroll-driven camera choreography for a 3D portfolio page.
//!
//! The camera travels through an ordered table of waypoints as the viewer
//! scrolls. The pure modules (`progress`, `easing`, `damping`, `tracker`,
//! `navigation`) hold all the math and can be tested without an engine; the
//! `bevy` module wires them into an ECS app driven from the host page.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod damping;
pub mod driver;
pub mod easing;
pub mod error;
pub mod focus;
pub mod navigation;
pub mod orbit;
pub mod progress;
pub mod scroll;
pub mod tracker;
pub mod waypoint;

// Bevy integration
pub mod bevy;

pub use config::{BuiltinTable, CameraConfig, CameraVariant, ViewConfig};
pub use damping::{DampedPose, damp, damp_factor, damp_vec3};
pub use driver::{CameraDriver, DriverFrame, FixedTick, NavigationState, SectionChange, TickSource};
pub use easing::{EasingType, ease_in_out_cubic, target_pose};
pub use error::OrbitError;
pub use focus::{FocusDriver, FocusFrame, FocusTarget};
pub use navigation::{NavIntent, NavigationShell, ScrollRequest, SwipeTracker};
pub use orbit::{OrbitControl, OrbitState};
pub use progress::{Segment, clamp_progress, map_progress, progress_from_scroll, section_progress, section_scroll_offset};
pub use scroll::{ScrollProxy, ScrollTransition};
pub use tracker::{SectionPolicy, SectionTracker};
pub use waypoint::{CameraPose, SideHint, Waypoint, WaypointTable};
