//! Filter criteria value objects.
//!
//! Criteria are immutable value objects; the session builds a fresh copy on
//! every control change and hands it to the selector. The level filter uses
//! the exact-set policy: a creature qualifies when its level is one of the
//! chosen levels, and choosing nothing means "All".

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entities::CreatureRecord;

/// Which levels are admitted by the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum LevelFilter {
    /// No level filtering ("All" control)
    #[default]
    All,
    /// Only levels in the set qualify
    Exact(BTreeSet<u8>),
}

impl LevelFilter {
    /// Check whether a creature level passes this filter.
    pub fn admits(&self, level: u8) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Exact(levels) => levels.contains(&level),
        }
    }

    /// Toggle one level in or out of the exact set.
    ///
    /// Removing the last chosen level reverts to [`LevelFilter::All`], the
    /// same way deselecting every level control re-selects "All".
    pub fn toggled(&self, level: u8) -> Self {
        let mut levels = match self {
            LevelFilter::All => BTreeSet::new(),
            LevelFilter::Exact(levels) => levels.clone(),
        };
        if !levels.remove(&level) {
            levels.insert(level);
        }
        if levels.is_empty() {
            LevelFilter::All
        } else {
            LevelFilter::Exact(levels)
        }
    }
}

/// Combined level + trait criteria, applied conjunctively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Level policy (exact-set)
    pub levels: LevelFilter,
    /// The creature's trait set must contain every entry here
    pub required_traits: BTreeSet<String>,
}

impl FilterCriteria {
    /// Criteria that admit everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Builder-style helper restricting to an exact level set.
    pub fn with_levels<I: IntoIterator<Item = u8>>(mut self, levels: I) -> Self {
        let set: BTreeSet<u8> = levels.into_iter().collect();
        self.levels = if set.is_empty() {
            LevelFilter::All
        } else {
            LevelFilter::Exact(set)
        };
        self
    }

    /// Builder-style helper requiring the given traits.
    pub fn with_required_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_traits = traits.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether a record passes both filters.
    pub fn matches(&self, record: &CreatureRecord) -> bool {
        self.levels.admits(record.level) && record.has_all_traits(&self.required_traits)
    }
}
