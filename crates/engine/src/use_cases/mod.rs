//! Use cases - Orchestration of the summoning flow against the ports

pub mod caster;
pub mod open_session;
pub mod summon;

pub use caster::{resolve_caster, ResolvedCaster};
pub use open_session::{OpenSummonSession, PreparedSummon};
pub use summon::ConfirmSummon;
