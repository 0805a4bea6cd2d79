//! Errors surfaced to the caller when a player command is rejected.
//!
//! The engine itself never fails: unreachable targets end the turn and stale
//! handles are skipped. Only the input surface reports refusals, so the UI can
//! explain why nothing happened.
use game_core::{ArenaError, EntityId, Position};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InputError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("it is not the player's turn")]
    NotPlayerTurn,

    #[error("no encounter is active")]
    NotInCombat,

    #[error("an action is still playing out")]
    Busy,

    #[error("{0} cannot act this turn")]
    CannotAct(EntityId),

    #[error("combatant {0} not found")]
    UnknownCombatant(EntityId),

    #[error("tile {0} is blocked")]
    Blocked(Position),

    #[error("nothing to attack at {0}")]
    NoTarget(Position),

    #[error("no target selection is pending")]
    NothingArmed,

    #[error(transparent)]
    Arena(#[from] ArenaError),
}
