//! Actor Directory Port - Looks up actors and spell items in the host
//!
//! Backs the caster-resolution fallback chain: lookup by id, by the user's
//! controlled token, and by the chat speaker's token. Also resolves the cast
//! spell's range text for the optional range marker.

use async_trait::async_trait;

use summoner_domain::{ActorId, CasterProfile, TokenId};

use super::HostError;

/// Port for actor and spell-item lookups.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ActorDirectoryPort: Send + Sync {
    /// Look up an actor by host document id. `None` when no such actor.
    async fn actor(&self, id: &ActorId) -> Result<Option<CasterProfile>, HostError>;

    /// The actor behind the user's first controlled token, if any token is
    /// controlled.
    async fn first_controlled_actor(&self) -> Result<Option<(ActorId, CasterProfile)>, HostError>;

    /// The actor behind a specific token on the current scene.
    async fn token_actor(&self, token: &TokenId)
        -> Result<Option<(ActorId, CasterProfile)>, HostError>;

    /// Range text of a spell item ("30 feet", "touch"), resolved by uuid.
    /// `None` when the item is gone or has no range.
    async fn spell_range(&self, uuid: &str) -> Result<Option<String>, HostError>;
}
