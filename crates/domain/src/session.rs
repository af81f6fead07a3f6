//! Selection session state.
//!
//! The dialog's working state lives here instead of in whatever surface
//! renders it: the immutable record snapshot taken when the session opened,
//! the current filter criteria, the current filtered result, and which
//! creature is highlighted. Every control change goes through a method that
//! recomputes the result via the selector and re-defaults the highlight, so
//! the rendered list can never drift from the criteria.
//!
//! A session is opened fresh per summon cast and dropped when the dialog
//! closes; nothing is cached across sessions.

use crate::entities::CreatureRecord;
use crate::error::SummonError;
use crate::ids::CreatureId;
use crate::selector::{self, SelectionResult};
use crate::value_objects::FilterCriteria;

/// Working state of one summon-selection dialog.
#[derive(Debug, Clone)]
pub struct SelectionSession {
    records: Vec<CreatureRecord>,
    levels: Vec<u8>,
    traits: Vec<String>,
    criteria: FilterCriteria,
    result: SelectionResult,
    selected: Option<CreatureId>,
    place_marker: bool,
}

impl SelectionSession {
    /// Open a session over a fresh record snapshot.
    ///
    /// `folder_name` is the summons folder the snapshot came from; it only
    /// exists to label the [`SummonError::NoCreatures`] notice when the
    /// snapshot turns out to be empty.
    pub fn open(
        records: Vec<CreatureRecord>,
        folder_name: impl Into<String>,
    ) -> Result<Self, SummonError> {
        if records.is_empty() {
            return Err(SummonError::no_creatures(folder_name));
        }
        let levels = selector::distinct_levels(&records);
        let traits = selector::distinct_traits(&records);
        let criteria = FilterCriteria::all();
        let result = selector::select(&records, &criteria);
        let selected = result.default_entry().map(|r| r.id.clone());
        Ok(Self {
            records,
            levels,
            traits,
            criteria,
            result,
            selected,
            place_marker: false,
        })
    }

    /// Toggle one level in the exact-set filter. Draining the set reverts
    /// to "All".
    pub fn toggle_level(&mut self, level: u8) {
        self.criteria.levels = self.criteria.levels.toggled(level);
        self.refresh();
    }

    /// Clear the level filter back to "All" (the reset control).
    pub fn reset_levels(&mut self) {
        self.criteria.levels = Default::default();
        self.refresh();
    }

    /// Toggle one required trait on or off.
    pub fn toggle_trait(&mut self, name: &str) {
        if !self.criteria.required_traits.remove(name) {
            self.criteria.required_traits.insert(name.to_string());
        }
        self.refresh();
    }

    /// Clear all required traits (the reset control).
    pub fn reset_traits(&mut self) {
        self.criteria.required_traits.clear();
        self.refresh();
    }

    /// Highlight a creature from the current result.
    pub fn select(&mut self, id: &CreatureId) -> Result<(), SummonError> {
        if !self.result.contains(id) {
            return Err(SummonError::NotInSelection { id: id.clone() });
        }
        self.selected = Some(id.clone());
        Ok(())
    }

    /// The creature a confirm would summon.
    pub fn selected(&self) -> Result<&CreatureRecord, SummonError> {
        let id = self.selected.as_ref().ok_or(SummonError::NothingSelected)?;
        self.result.entry(id).ok_or(SummonError::NothingSelected)
    }

    pub fn set_place_marker(&mut self, place_marker: bool) {
        self.place_marker = place_marker;
    }

    pub fn place_marker(&self) -> bool {
        self.place_marker
    }

    /// Current filtered result, for rendering.
    pub fn result(&self) -> &SelectionResult {
        &self.result
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Distinct levels of the full snapshot, for the level controls.
    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    /// Distinct traits of the full snapshot, for the trait controls.
    pub fn traits(&self) -> &[String] {
        &self.traits
    }

    fn refresh(&mut self) {
        self.result = selector::select(&self.records, &self.criteria);
        self.selected = self.result.default_entry().map(|r| r.id.clone());
    }
}
