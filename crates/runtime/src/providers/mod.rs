//! Decision providers for computer-controlled combatants.

pub mod pathing;

pub use pathing::PathingAi;

use game_core::{BattleAction, EntityId, WorldQuery};

/// Chooses what a computer-controlled combatant does with its turn.
///
/// Used for opponents and for the player's party while auto-attack is on.
pub trait BattleAi: std::fmt::Debug {
    /// `enemies` are the combatants `actor` is hostile to; `remaining_moves`
    /// is what is left of its movement allowance this turn.
    fn decide(
        &self,
        world: &dyn WorldQuery,
        actor: EntityId,
        enemies: &[EntityId],
        remaining_moves: u32,
    ) -> BattleAction;
}
