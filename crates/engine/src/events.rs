//! Host chat event contract.
//!
//! The host fires a notification for every created chat message; the adapter
//! deserializes the message flags into [`ChatMessageEvent`] and hands it to
//! the trigger. The nested fields are all optional because the host object
//! model is duck-typed: most messages carry no spell origin at all, and even
//! spell casts may omit the actor or item reference.

use serde::{Deserialize, Serialize};

use summoner_domain::{ActorId, TokenId};

/// Roll option the host attaches to casts of spells with the summon trait.
pub const SUMMON_TRAIT_OPTION: &str = "origin:item:trait:summon";

/// Prefix on actor references inside spell origins ("Actor.<id>").
const ACTOR_REF_PREFIX: &str = "Actor.";

/// Flags of one created chat message, as far as summoning cares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageEvent {
    /// Present when the message was produced by using an item (spell, feat, ...)
    #[serde(default)]
    pub origin: Option<SpellOrigin>,
    /// Who the host thinks spoke the message
    #[serde(default)]
    pub speaker: Option<Speaker>,
}

/// Origin block of an item-use chat message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellOrigin {
    /// Item type; summoning only reacts to "spell"
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Roll options the cast produced, e.g. "origin:item:trait:summon"
    #[serde(default)]
    pub roll_options: Vec<String>,
    /// Reference to the casting actor, "Actor."-prefixed
    #[serde(default)]
    pub actor: Option<String>,
    /// Host uuid of the spell item, for range lookup
    #[serde(default)]
    pub uuid: Option<String>,
}

/// Speaker block of a chat message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    #[serde(default)]
    pub actor: Option<ActorId>,
    #[serde(default)]
    pub token: Option<TokenId>,
}

impl ChatMessageEvent {
    /// Whether this message is a cast of a spell with the summon trait.
    pub fn is_summon_cast(&self) -> bool {
        self.origin.as_ref().is_some_and(|origin| {
            origin.kind.as_deref() == Some("spell")
                && origin.roll_options.iter().any(|o| o == SUMMON_TRAIT_OPTION)
        })
    }

    /// The casting actor's id from the origin block, prefix stripped.
    pub fn origin_actor_id(&self) -> Option<ActorId> {
        let reference = self.origin.as_ref()?.actor.as_deref()?;
        let id = reference.strip_prefix(ACTOR_REF_PREFIX).unwrap_or(reference);
        if id.is_empty() {
            None
        } else {
            Some(ActorId::new(id))
        }
    }

    /// The spell item's uuid, when the host recorded one.
    pub fn spell_uuid(&self) -> Option<&str> {
        self.origin.as_ref()?.uuid.as_deref()
    }
}
