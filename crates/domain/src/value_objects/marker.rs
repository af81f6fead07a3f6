//! Transient range marker value object.
//!
//! When the user asks for it, a circular marker is drawn at the caster's
//! token center showing the spell's range, then removed automatically after
//! a short lifetime. The shape and lifetime mirror the measured-template
//! call the host exposes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::placement::GridPoint;

/// How long a range marker stays on the scene before auto-removal.
pub const MARKER_LIFETIME: Duration = Duration::from_secs(10);

/// A circular range marker to be drawn on the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    /// Center of the circle (caster token center)
    pub origin: GridPoint,
    /// Radius in scene distance units (feet for most systems)
    pub distance: u32,
}

impl MarkerSpec {
    pub fn circle(origin: GridPoint, distance: u32) -> Self {
        Self { origin, distance }
    }
}
