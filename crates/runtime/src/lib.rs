//! Tick-driven orchestration of turn-based tactical combat.
//!
//! [`CombatState`] owns everything that lives only for the duration of an
//! encounter: the opponent set, per-turn budgets, the hit-animation queue and
//! the step scheduler. Callers drive it once per frame with
//! [`CombatState::update`], handing in a [`game_core::CombatEnv`] that bundles
//! the world, rules, party and presentation collaborators.
//!
//! Modules are organized by responsibility:
//! - [`combat`] hosts the turn state machine and attack resolution
//! - [`animation`] and [`scheduler`] are the two suspension mechanisms that
//!   freeze turn logic while an action plays out
//! - [`providers`] holds the AI decision procedure
//! - [`spell`] is the caster-facing spell abstraction
//! - [`oracle`] provides reference implementations of the collaborator traits
pub mod animation;
pub mod combat;
pub mod error;
pub mod events;
pub mod oracle;
pub mod providers;
pub mod scheduler;
pub mod spell;

pub use animation::{HitAnimation, HitAnimationQueue, HitEffect};
pub use combat::{CombatState, MenuAction, OpponentSet, PendingTarget, StepOutcome, TurnBudget};
pub use error::{InputError, Result};
pub use events::CombatEvent;
pub use oracle::{GridWorld, HeadlessPresentation, PartyRoster, StatRules};
pub use providers::{BattleAi, PathingAi};
pub use scheduler::{MovementScript, StepCommand, StepScheduler, StepScript, StepYield};
pub use spell::{BoltSpell, Spell, SpellCast, SpellEffect, SpellImpact};
