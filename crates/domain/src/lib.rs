//! Summoner domain layer.
//!
//! Pure types and logic for the summoning flow: creature records, filter
//! criteria, the selector, selection-session state, and the folder-search
//! strategies. Nothing in this crate touches the host, performs I/O, or
//! goes async; the integration layer in `summoner-engine` does all of that.

pub mod entities;
pub mod error;
pub mod folder_search;
pub mod ids;
pub mod selector;
pub mod session;
pub mod value_objects;

pub use entities::{CreatureRecord, FolderSummary};
pub use error::SummonError;
pub use folder_search::{find_summons_folder, folders_mentioning_summons, CasterProfile};
pub use ids::{ActorId, CreatureId, FolderId, MarkerId, TokenId};
pub use selector::{distinct_levels, distinct_traits, select, SelectionResult};
pub use session::SelectionSession;
pub use value_objects::{
    parse_range_distance, token_placement, FilterCriteria, GridPoint, LevelFilter, MarkerSpec,
    SceneGeometry, MARKER_LIFETIME,
};
