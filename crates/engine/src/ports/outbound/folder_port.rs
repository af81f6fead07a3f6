//! Folder Port - Reads the host's actor-folder tree

use async_trait::async_trait;

use summoner_domain::{CreatureRecord, FolderId, FolderSummary};

use super::HostError;

/// Port for listing folders and reading their creature contents.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait FolderPort: Send + Sync {
    /// All folders in the host's actor directory.
    async fn list_folders(&self) -> Result<Vec<FolderSummary>, HostError>;

    /// Creature records projected from the actor documents in one folder.
    /// Non-actor documents are skipped by the adapter.
    async fn creatures_in(&self, folder: &FolderId) -> Result<Vec<CreatureRecord>, HostError>;
}
