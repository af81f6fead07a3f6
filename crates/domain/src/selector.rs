//! Creature selector - pure filtering, ordering, and default selection.
//!
//! This is the one piece of the summoning flow that is plain computation:
//! given the session's record snapshot and the current criteria, produce the
//! list to display. Everything is a pure function of its inputs; records are
//! never mutated and no state is kept between calls, so re-applying the same
//! criteria is a fixed point.

use std::collections::BTreeSet;

use crate::entities::CreatureRecord;
use crate::ids::CreatureId;
use crate::value_objects::FilterCriteria;

/// The filtered, ordered creature list plus its default selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    entries: Vec<CreatureRecord>,
}

impl SelectionResult {
    /// Records passing the filter, highest level first.
    pub fn entries(&self) -> &[CreatureRecord] {
        &self.entries
    }

    /// The default selection: the first entry, or `None` when the filter
    /// matched nothing. An empty result is an explicit state, not an error.
    pub fn default_entry(&self) -> Option<&CreatureRecord> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up an entry by id within this result.
    pub fn entry(&self, id: &CreatureId) -> Option<&CreatureRecord> {
        self.entries.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &CreatureId) -> bool {
        self.entry(id).is_some()
    }
}

/// Filter `records` by `criteria` and order the survivors by level,
/// descending. The sort is stable: records of equal level keep the relative
/// order they arrived in.
pub fn select(records: &[CreatureRecord], criteria: &FilterCriteria) -> SelectionResult {
    let mut entries: Vec<CreatureRecord> = records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect();
    entries.sort_by(|a, b| b.level.cmp(&a.level));
    SelectionResult { entries }
}

/// Distinct levels present in the full record list, ascending.
///
/// Computed once per session from the unfiltered snapshot so the level
/// controls stay stable while the user narrows the list.
pub fn distinct_levels(records: &[CreatureRecord]) -> Vec<u8> {
    let levels: BTreeSet<u8> = records.iter().map(|r| r.level).collect();
    levels.into_iter().collect()
}

/// Distinct traits present in the full record list, lexicographic.
pub fn distinct_traits(records: &[CreatureRecord]) -> Vec<String> {
    let traits: BTreeSet<String> = records
        .iter()
        .flat_map(|r| r.traits.iter().cloned())
        .collect();
    traits.into_iter().collect()
}
