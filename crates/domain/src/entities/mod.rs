//! Domain entities - Core objects with host-assigned identity

mod creature;
mod folder;

pub use creature::CreatureRecord;
pub use folder::FolderSummary;
