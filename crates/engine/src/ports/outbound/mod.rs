//! Outbound ports - Interfaces for the virtual-tabletop host
//!
//! These ports define the contracts a host adapter must implement, so the
//! use cases can resolve actors, folders, and scene objects without knowing
//! anything about the host's object model or event system.

pub mod actor_directory_port;
pub mod folder_port;
pub mod notification_port;
pub mod scene_port;

use thiserror::Error;

pub use actor_directory_port::ActorDirectoryPort;
pub use folder_port::FolderPort;
pub use notification_port::NotificationPort;
pub use scene_port::{ScenePort, TokenView};

/// Error crossing the host boundary.
///
/// Host failures are never fatal to the host process; use cases log them
/// and abort the running session with a notice.
#[derive(Debug, Error)]
pub enum HostError {
    /// A referenced host document does not exist
    #[error("Host document not found: {0}")]
    NotFound(String),

    /// A host API call failed
    #[error("Host call failed: {0}")]
    Call(String),

    /// Anything else the adapter needs to surface
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HostError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn call(msg: impl Into<String>) -> Self {
        Self::Call(msg.into())
    }
}
