//! Value objects - Immutable objects defined by their attributes

mod filter;
mod marker;
mod placement;
mod range;

pub use filter::{FilterCriteria, LevelFilter};
pub use marker::{MarkerSpec, MARKER_LIFETIME};
pub use placement::{token_placement, GridPoint, SceneGeometry};
pub use range::parse_range_distance;
