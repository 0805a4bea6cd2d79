//! Action vocabulary: directions and the AI's decision output.
mod battle;
mod direction;

pub use battle::{AttackActionType, BattleAction};
pub use direction::CardinalDirection;
