//! Folder summary entity.
//!
//! A lightweight projection of a host-side folder, carrying just enough to
//! run the summons-folder search without holding the folder's contents.

use serde::{Deserialize, Serialize};

use crate::ids::FolderId;

/// Summary of one host folder, as listed by the folder port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FolderSummary {
    /// Host document id
    pub id: FolderId,
    /// Display name, e.g. "Ezren Summons"
    pub name: String,
    /// Whether the folder holds at least one actor document
    #[serde(default)]
    pub contains_actors: bool,
}

impl FolderSummary {
    pub fn new(id: impl Into<FolderId>, name: impl Into<String>, contains_actors: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contains_actors,
        }
    }
}
