//! Combatant data and grid primitives.
//!
//! The engine never owns combatants. Callers keep them in a
//! [`CombatantArena`] and the engine refers to them by [`EntityId`] handles,
//! which stay valid (and simply resolve to `None`) after a combatant is
//! removed mid-tick.
mod combatant;
mod common;

pub use combatant::{ArenaError, Combatant, CombatantArena, CombatantStats};
pub use common::{EntityId, Position, ResourceMeter};
