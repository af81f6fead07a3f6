//! Caster resolution use case.
//!
//! The origin block of a cast message should name the casting actor, but in
//! practice it is missing often enough (macro casts, linked tokens, renamed
//! actors) that the lookup falls back through, in order:
//!
//! 1. the origin actor id;
//! 2. the actor behind the user's first controlled token;
//! 3. the chat speaker's actor id;
//! 4. the actor behind the chat speaker's token.

use summoner_domain::{ActorId, CasterProfile};

use crate::events::ChatMessageEvent;
use crate::ports::{ActorDirectoryPort, HostError};

/// The casting character, once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCaster {
    pub id: ActorId,
    pub profile: CasterProfile,
}

impl ResolvedCaster {
    pub fn new(id: ActorId, profile: CasterProfile) -> Self {
        Self { id, profile }
    }
}

/// Resolve the caster behind `event`, or `None` when every fallback misses.
pub async fn resolve_caster(
    actors: &dyn ActorDirectoryPort,
    event: &ChatMessageEvent,
) -> Result<Option<ResolvedCaster>, HostError> {
    if let Some(id) = event.origin_actor_id() {
        if let Some(profile) = actors.actor(&id).await? {
            return Ok(Some(ResolvedCaster::new(id, profile)));
        }
        tracing::debug!(actor_id = %id, "origin actor not found, trying fallbacks");
    }

    if let Some((id, profile)) = actors.first_controlled_actor().await? {
        return Ok(Some(ResolvedCaster::new(id, profile)));
    }

    if let Some(speaker) = &event.speaker {
        if let Some(id) = &speaker.actor {
            if let Some(profile) = actors.actor(id).await? {
                return Ok(Some(ResolvedCaster::new(id.clone(), profile)));
            }
        }
        if let Some(token) = &speaker.token {
            if let Some((id, profile)) = actors.token_actor(token).await? {
                return Ok(Some(ResolvedCaster::new(id, profile)));
            }
        }
    }

    Ok(None)
}
