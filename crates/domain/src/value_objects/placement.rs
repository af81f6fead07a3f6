//! Token placement math.
//!
//! Pure geometry for dropping a summoned token into the scene: one grid
//! square east of the caster's token when one is on the canvas, otherwise
//! the center of the scene.

use serde::{Deserialize, Serialize};

/// A point in scene pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl GridPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Scene dimensions and grid size, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneGeometry {
    /// Pixels per grid square
    pub grid_size: i64,
    /// Scene width in pixels
    pub width: i64,
    /// Scene height in pixels
    pub height: i64,
}

impl SceneGeometry {
    /// Center of the scene, for placement when no caster token exists.
    pub fn center(&self) -> GridPoint {
        GridPoint::new(self.width / 2, self.height / 2)
    }
}

/// Where the summoned token should land.
///
/// `caster_token_origin` is the top-left corner of the caster's token, when
/// the caster has a token on the current scene.
pub fn token_placement(geometry: &SceneGeometry, caster_token_origin: Option<GridPoint>) -> GridPoint {
    match caster_token_origin {
        Some(origin) => GridPoint::new(origin.x + geometry.grid_size, origin.y),
        None => geometry.center(),
    }
}
