//! Open-session use case.
//!
//! Runs the preamble of a summon: resolve the caster, find their summons
//! folder, load its creatures, and open a selection session over them. The
//! three recoverable conditions (no caster, no folder, empty folder) end in
//! a user-facing notice and `Ok(None)` - the session simply does not open,
//! with no side effects on the host.

use std::sync::Arc;

use summoner_domain::{
    find_summons_folder, folders_mentioning_summons, FolderSummary, SelectionSession,
};

use crate::events::ChatMessageEvent;
use crate::ports::{ActorDirectoryPort, FolderPort, HostError, NotificationPort};
use crate::use_cases::caster::{resolve_caster, ResolvedCaster};

/// Everything a selection dialog needs to run and later confirm.
#[derive(Debug, Clone)]
pub struct PreparedSummon {
    /// The casting character
    pub caster: ResolvedCaster,
    /// The folder the records came from
    pub folder: FolderSummary,
    /// The dialog's working state
    pub session: SelectionSession,
    /// Range text of the cast spell, for the optional marker
    pub range: Option<String>,
}

/// Use case: open a selection session for a summon cast.
pub struct OpenSummonSession {
    actors: Arc<dyn ActorDirectoryPort>,
    folders: Arc<dyn FolderPort>,
    notifications: Arc<dyn NotificationPort>,
}

impl OpenSummonSession {
    pub fn new(
        actors: Arc<dyn ActorDirectoryPort>,
        folders: Arc<dyn FolderPort>,
        notifications: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            actors,
            folders,
            notifications,
        }
    }

    /// Run the preamble. `Ok(None)` means the session was aborted cleanly
    /// after a notice; `Err` means the host itself failed.
    pub async fn execute(
        &self,
        event: &ChatMessageEvent,
    ) -> Result<Option<PreparedSummon>, HostError> {
        let Some(caster) = resolve_caster(self.actors.as_ref(), event).await? else {
            tracing::warn!("no caster resolvable for summon cast");
            self.notifications
                .error("Could not determine which character is casting the spell. Please try again.");
            return Ok(None);
        };
        tracing::debug!(caster = %caster.profile.name, "resolved summon caster");

        let range = self.lookup_range(event).await;

        let all_folders = self.folders.list_folders().await?;
        let Some(folder) = find_summons_folder(&caster.profile, &all_folders).cloned() else {
            self.report_missing_folder(&caster, &all_folders);
            return Ok(None);
        };

        let records = self.folders.creatures_in(&folder.id).await?;
        // Opening only fails when the folder snapshot is empty
        let session = match SelectionSession::open(records, folder.name.clone()) {
            Ok(session) => session,
            Err(err) => {
                self.notifications.warn(&format!(
                    "{err}! Please add some creatures to this folder."
                ));
                return Ok(None);
            }
        };

        tracing::info!(
            caster = %caster.profile.name,
            folder = %folder.name,
            creatures = session.result().len(),
            "summon selection session opened"
        );
        Ok(Some(PreparedSummon {
            caster,
            folder,
            session,
            range,
        }))
    }

    /// Resolve the spell's range text; a host failure here only costs the
    /// optional marker, so it degrades to `None` instead of aborting.
    async fn lookup_range(&self, event: &ChatMessageEvent) -> Option<String> {
        let uuid = event.spell_uuid()?;
        match self.actors.spell_range(uuid).await {
            Ok(range) => range,
            Err(err) => {
                tracing::warn!(error = %err, uuid, "spell range lookup failed");
                None
            }
        }
    }

    fn report_missing_folder(&self, caster: &ResolvedCaster, all_folders: &[FolderSummary]) {
        let candidates = folders_mentioning_summons(all_folders);
        if candidates.is_empty() {
            self.notifications.info(&format!(
                "No summons folder found for: {}. No summons folders exist in the Actors tab.",
                caster.profile.name
            ));
        } else {
            let names: Vec<&str> = candidates.iter().map(|f| f.name.as_str()).collect();
            self.notifications.info(&format!(
                "No summons folder found for: {}. Available summons folders: {}",
                caster.profile.name,
                names.join(", ")
            ));
        }
        self.notifications.warn(&format!(
            "Summons folder for this character not found! Please create a folder named \"{}\" in the Actors tab.",
            caster.profile.summons_folder_name()
        ));
    }
}
