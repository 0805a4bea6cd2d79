//! Events recorded by the combat engine.
//!
//! The engine buffers events instead of calling listeners; callers drain them
//! once per frame with [`crate::CombatState::drain_events`] and route them to
//! message logs, sound cues, or analytics.
use game_core::{AttackActionType, EntityId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    EncounterStarted,
    EncounterEnded,
    /// A side's turn began.
    TurnChanged { player_turn: bool },
    OpponentJoined(EntityId),
    OpponentLeft(EntityId),
    /// The one-shot alert sweep ran around `origin`.
    AlertSweep { origin: EntityId, recruited: usize },
    /// An attack landed or missed. `damage` is `None` on a miss.
    AttackResolved {
        attacker: EntityId,
        target: EntityId,
        attack: AttackActionType,
        damage: Option<u32>,
    },
    CombatantDied(EntityId),
}
