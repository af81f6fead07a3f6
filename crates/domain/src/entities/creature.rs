//! Creature record entity.
//!
//! A summonable creature as projected out of the host's actor documents.
//! Host data is duck-typed and frequently incomplete, so the optional fields
//! get explicit defaults here: a missing level means level 0, missing traits
//! mean an empty trait set. Records are immutable for the lifetime of a
//! selection session and re-fetched when a new session opens.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::CreatureId;

/// A summonable creature, ready for filtering and token placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatureRecord {
    /// Host document id of the underlying actor
    pub id: CreatureId,
    /// Display name
    pub name: String,
    /// Creature level; hosts omit it for some actor types
    #[serde(default)]
    pub level: u8,
    /// Descriptive tags used for filtering (e.g. "fire", "elemental")
    #[serde(default)]
    pub traits: BTreeSet<String>,
}

impl CreatureRecord {
    /// Create a record with no traits.
    pub fn new(id: impl Into<CreatureId>, name: impl Into<String>, level: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level,
            traits: BTreeSet::new(),
        }
    }

    /// Builder-style helper to attach traits.
    pub fn with_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traits = traits.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether this creature carries every trait in `required`.
    pub fn has_all_traits(&self, required: &BTreeSet<String>) -> bool {
        required.iter().all(|t| self.traits.contains(t))
    }
}
