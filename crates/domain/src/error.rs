//! Unified error types for the domain layer
//!
//! Every failure a summoning session can hit is recoverable: the integration
//! layer turns these into user-facing notices and aborts the session cleanly.
//! Nothing here should ever take the host process down.

use thiserror::Error;

use crate::ids::CreatureId;

/// Unified error type for summoning operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SummonError {
    /// The casting character could not be resolved through any fallback
    #[error("Could not determine which character is casting the spell")]
    CasterNotFound,

    /// No summons folder exists for the casting character
    #[error("Summons folder for \"{caster}\" not found")]
    FolderNotFound { caster: String },

    /// The summons folder exists but holds no creature records
    #[error("No creatures found in the summons folder \"{folder}\"")]
    NoCreatures { folder: String },

    /// A selection referenced a creature outside the current filtered result
    #[error("Creature {id} is not in the current selection")]
    NotInSelection { id: CreatureId },

    /// Confirmation was requested with nothing selected
    #[error("No creature selected")]
    NothingSelected,
}

impl SummonError {
    /// Create a folder-not-found error for the given caster name.
    pub fn folder_not_found(caster: impl Into<String>) -> Self {
        Self::FolderNotFound {
            caster: caster.into(),
        }
    }

    /// Create a no-creatures error for the given folder name.
    pub fn no_creatures(folder: impl Into<String>) -> Self {
        Self::NoCreatures {
            folder: folder.into(),
        }
    }
}
