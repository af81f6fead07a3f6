//! Summons-folder lookup.
//!
//! A character's summoning pool lives in a host folder named by convention,
//! `"<CharacterName> Summons"`. Players rename things, so the exact match is
//! backed by progressively looser strategies:
//!
//! 1. exact match on the conventional name;
//! 2. folder name containing both the character name and "summons";
//! 3. for NPC casters only, folder name containing "npc" or "monster" plus
//!    "summons";
//! 4. any folder mentioning "summons" that actually holds actor documents.
//!
//! All matching beyond strategy 1 is case-insensitive. Pure scans over the
//! folder list; the caller fetches the list and reports the outcome.

use serde::{Deserialize, Serialize};

use crate::entities::FolderSummary;

/// The caster identity a folder search keys on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasterProfile {
    /// Display name of the casting character
    pub name: String,
    /// NPC casters unlock the shared NPC/monster pool strategy
    #[serde(default)]
    pub is_npc: bool,
}

impl CasterProfile {
    pub fn new(name: impl Into<String>, is_npc: bool) -> Self {
        Self {
            name: name.into(),
            is_npc,
        }
    }

    /// The conventional folder name for this caster.
    pub fn summons_folder_name(&self) -> String {
        format!("{} Summons", self.name)
    }
}

/// Find the summons folder for `caster`, applying the fallback strategies in
/// order. Returns `None` when nothing plausible exists.
pub fn find_summons_folder<'a>(
    caster: &CasterProfile,
    folders: &'a [FolderSummary],
) -> Option<&'a FolderSummary> {
    let exact = caster.summons_folder_name();
    if let Some(folder) = folders.iter().find(|f| f.name == exact) {
        return Some(folder);
    }

    if let Some(folder) = folders
        .iter()
        .find(|f| f.name.contains(&caster.name) && mentions_summons(&f.name))
    {
        return Some(folder);
    }

    if caster.is_npc {
        if let Some(folder) = folders.iter().find(|f| {
            let lower = f.name.to_lowercase();
            (lower.contains("npc") || lower.contains("monster")) && mentions_summons(&f.name)
        }) {
            return Some(folder);
        }
    }

    folders
        .iter()
        .find(|f| mentions_summons(&f.name) && f.contains_actors)
}

/// Every folder whose name mentions "summons", for the hint notice shown
/// when no folder matched the caster.
pub fn folders_mentioning_summons(folders: &[FolderSummary]) -> Vec<&FolderSummary> {
    folders.iter().filter(|f| mentions_summons(&f.name)).collect()
}

fn mentions_summons(name: &str) -> bool {
    name.to_lowercase().contains("summons")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: &str, name: &str, contains_actors: bool) -> FolderSummary {
        FolderSummary::new(id, name, contains_actors)
    }

    #[test]
    fn test_exact_name_wins() {
        let folders = vec![
            folder("1", "Shared Summons", true),
            folder("2", "Ezren Summons", false),
        ];
        let caster = CasterProfile::new("Ezren", false);
        let found = find_summons_folder(&caster, &folders).expect("exact match");
        assert_eq!(found.id.as_str(), "2");
    }

    #[test]
    fn test_partial_match_needs_name_and_summons() {
        let folders = vec![
            folder("1", "Ezren's Spellbook", true),
            folder("2", "Old Ezren SUMMONS (backup)", false),
        ];
        let caster = CasterProfile::new("Ezren", false);
        let found = find_summons_folder(&caster, &folders).expect("partial match");
        assert_eq!(found.id.as_str(), "2");
    }

    #[test]
    fn test_npc_pool_only_for_npc_casters() {
        let pc = CasterProfile::new("Ezren", false);
        let npc = CasterProfile::new("Cultist Leader", true);

        // Actor-less folder so the PC cannot land on the last-resort
        // strategy; only the NPC pool strategy can match it.
        let pool = vec![folder("1", "Monster Summons", false)];
        assert!(find_summons_folder(&pc, &pool).is_none());
        assert!(find_summons_folder(&npc, &pool).is_some());
    }

    #[test]
    fn test_any_summons_folder_with_actors_as_last_resort() {
        let folders = vec![
            folder("1", "Party Loot", true),
            folder("2", "Communal summons pool", true),
        ];
        let caster = CasterProfile::new("Ezren", false);
        let found = find_summons_folder(&caster, &folders).expect("last resort");
        assert_eq!(found.id.as_str(), "2");
    }

    #[test]
    fn test_last_resort_skips_actorless_folders() {
        let folders = vec![folder("1", "Summons art assets", false)];
        let caster = CasterProfile::new("Ezren", false);
        assert!(find_summons_folder(&caster, &folders).is_none());
    }

    #[test]
    fn test_hint_lists_every_summons_folder() {
        let folders = vec![
            folder("1", "Merisiel Summons", true),
            folder("2", "Party Loot", true),
            folder("3", "summons scratchpad", false),
        ];
        let hints = folders_mentioning_summons(&folders);
        let names: Vec<&str> = hints.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Merisiel Summons", "summons scratchpad"]);
    }

    #[test]
    fn test_conventional_folder_name() {
        let caster = CasterProfile::new("Ezren", false);
        assert_eq!(caster.summons_folder_name(), "Ezren Summons");
    }
}
