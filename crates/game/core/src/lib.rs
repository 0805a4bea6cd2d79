//! Value types and collaborator interfaces for the tactical combat engine.
//!
//! `game-core` defines the vocabulary shared by every other crate: stable
//! combatant handles and the arena they index, tile positions and directions,
//! the AI decision output, combat tunables, and the narrow capability traits
//! through which the engine reaches the world, the rules, the party and the
//! presentation layer. Nothing in here owns a turn or a tick; orchestration
//! lives in `combat-runtime`.
pub mod action;
pub mod combat;
pub mod config;
pub mod env;
pub mod state;

pub use action::{AttackActionType, BattleAction, CardinalDirection};
pub use combat::{
    DamageParams, HitChanceParams, apply_damage, calculate_damage, calculate_hit_chance, check_hit,
};
pub use config::CombatConfig;
pub use env::{
    CombatEnv, CombatFrame, CombatRules, HitSprite, IconRef, Neighbors, PartyControl,
    Presentation, ScreenPoint, Tint, WorldQuery,
};
pub use state::{
    ArenaError, Combatant, CombatantArena, CombatantStats, EntityId, Position, ResourceMeter,
};
