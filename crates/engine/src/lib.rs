//! Summoner engine - host-integration layer.
//!
//! Everything that talks to the virtual-tabletop host lives here: the chat
//! event contract, the outbound ports a host adapter implements, and the use
//! cases orchestrating a summon from cast detection to token placement. The
//! pure selection logic lives in `summoner-domain`.
//!
//! A host adapter wires the flow up like this:
//!
//! 1. implement the four ports in [`ports`] over the host's object model;
//! 2. build a [`SummonTrigger`] from them;
//! 3. on every chat-message creation, deserialize the flags into a
//!    [`events::ChatMessageEvent`] and call
//!    [`SummonTrigger::handle_chat_message`];
//! 4. render the returned session, mutate it as the user works the filter
//!    controls, and call [`SummonTrigger::confirm_summon`] on confirmation.

pub mod events;
pub mod logging;
pub mod ports;
pub mod trigger;
pub mod use_cases;

pub use events::{ChatMessageEvent, Speaker, SpellOrigin, SUMMON_TRAIT_OPTION};
pub use ports::{ActorDirectoryPort, FolderPort, HostError, NotificationPort, ScenePort, TokenView};
pub use trigger::SummonTrigger;
pub use use_cases::{ConfirmSummon, OpenSummonSession, PreparedSummon, ResolvedCaster};
