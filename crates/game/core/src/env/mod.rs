//! Narrow capability interfaces the combat engine consumes.
//!
//! The engine never reaches into a global façade. Every call site receives a
//! [`CombatEnv`] bundling the four collaborator surfaces, each of which can
//! be mocked independently in tests:
//!
//! - [`WorldQuery`]: combatant arena, passability, pathing, line of sight
//! - [`CombatRules`]: hit resolution, damage, death handling
//! - [`PartyControl`]: the player's party roster and active member
//! - [`Presentation`]: menus, coordinate conversion, per-frame drawing
mod party;
mod presentation;
mod rules;
mod world;

pub use party::PartyControl;
pub use presentation::{CombatFrame, HitSprite, IconRef, Presentation, ScreenPoint, Tint};
pub use rules::CombatRules;
pub use world::{Neighbors, WorldQuery};

/// Aggregates the collaborator surfaces for a single engine call.
pub struct CombatEnv<'a> {
    pub world: &'a mut dyn WorldQuery,
    pub rules: &'a mut dyn CombatRules,
    pub party: &'a mut dyn PartyControl,
    pub presentation: &'a mut dyn Presentation,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        world: &'a mut dyn WorldQuery,
        rules: &'a mut dyn CombatRules,
        party: &'a mut dyn PartyControl,
        presentation: &'a mut dyn Presentation,
    ) -> Self {
        Self {
            world,
            rules,
            party,
            presentation,
        }
    }

    /// Reborrows the bundle for a nested call without giving up the original.
    pub fn reborrow(&mut self) -> CombatEnv<'_> {
        CombatEnv {
            world: &mut *self.world,
            rules: &mut *self.rules,
            party: &mut *self.party,
            presentation: &mut *self.presentation,
        }
    }
}
