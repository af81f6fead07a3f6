//! Summon trigger - the subscription seam.
//!
//! The host adapter subscribes to chat-message creation and calls
//! [`SummonTrigger::handle_chat_message`] with every payload. Everything
//! below this seam works on plain data; nothing else in the workspace knows
//! the host has an event system at all.

use std::sync::Arc;

use summoner_domain::TokenId;

use crate::events::ChatMessageEvent;
use crate::ports::{ActorDirectoryPort, FolderPort, HostError, NotificationPort, ScenePort};
use crate::use_cases::{ConfirmSummon, OpenSummonSession, PreparedSummon};

/// Entry point the host adapter wires its chat hook to.
pub struct SummonTrigger {
    open_session: OpenSummonSession,
    confirm: ConfirmSummon,
}

impl SummonTrigger {
    pub fn new(
        actors: Arc<dyn ActorDirectoryPort>,
        folders: Arc<dyn FolderPort>,
        scene: Arc<dyn ScenePort>,
        notifications: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            open_session: OpenSummonSession::new(actors, folders, Arc::clone(&notifications)),
            confirm: ConfirmSummon::new(scene, notifications),
        }
    }

    /// Inspect one chat message. Non-summon messages return `Ok(None)`
    /// without touching the host; summon casts run the open-session use
    /// case and hand back the prepared session for the dialog to drive.
    pub async fn handle_chat_message(
        &self,
        event: &ChatMessageEvent,
    ) -> Result<Option<PreparedSummon>, HostError> {
        if !event.is_summon_cast() {
            return Ok(None);
        }
        tracing::debug!("summon cast detected in chat");
        self.open_session.execute(event).await
    }

    /// Confirm the dialog's current selection and place the token.
    pub async fn confirm_summon(
        &self,
        prepared: &PreparedSummon,
    ) -> Result<Option<TokenId>, HostError> {
        self.confirm.execute(prepared).await
    }
}
