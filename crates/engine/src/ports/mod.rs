//! Ports - Interfaces the host adapter must implement

pub mod outbound;

pub use outbound::{
    ActorDirectoryPort, FolderPort, HostError, NotificationPort, ScenePort, TokenView,
};
