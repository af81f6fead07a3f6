//! Scene Port - Places tokens and markers on the current scene

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use summoner_domain::{ActorId, CreatureId, GridPoint, MarkerId, MarkerSpec, SceneGeometry, TokenId};

use super::HostError;

/// A token as positioned on the scene.
///
/// `origin` is the top-left corner (token placement math keys off it),
/// `center` is where a range marker is anchored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenView {
    pub id: TokenId,
    pub origin: GridPoint,
    pub center: GridPoint,
}

/// Port for scene mutations and geometry.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ScenePort: Send + Sync {
    /// Grid size and dimensions of the current scene.
    async fn geometry(&self) -> Result<SceneGeometry, HostError>;

    /// The given actor's token on the current scene, if it has one.
    async fn actor_token(&self, actor: &ActorId) -> Result<Option<TokenView>, HostError>;

    /// Instantiate a token for a creature at the given position, using the
    /// creature actor's prototype token data. One atomic host call.
    async fn spawn_token(&self, creature: &CreatureId, at: GridPoint)
        -> Result<TokenId, HostError>;

    /// Draw a circular range marker.
    async fn create_marker(&self, spec: MarkerSpec) -> Result<MarkerId, HostError>;

    /// Remove a previously created marker.
    async fn remove_marker(&self, id: &MarkerId) -> Result<(), HostError>;
}
