//! Encounter orchestration.
//!
//! [`CombatState`] is the single owner of encounter-scoped state. Its methods
//! are split across submodules by concern:
//! - `turns`: the per-tick update and the player/enemy phase machine
//! - `resolution`: melee, ranged and spell attacks plus their completion
//! - `aggro`: opponent-set membership and the one-shot alert sweep
//! - `input`: the player command surface and pending-target continuations
mod aggro;
mod budget;
mod input;
mod opponents;
mod resolution;
mod turns;

pub use budget::TurnBudget;
pub use input::{MenuAction, PendingTarget, StepOutcome};
pub use opponents::OpponentSet;

use game_core::{CombatConfig, CombatFrame, EntityId, Position, Presentation, WorldQuery};

use crate::animation::HitAnimationQueue;
use crate::events::CombatEvent;
use crate::providers::{BattleAi, PathingAi};
use crate::scheduler::StepScheduler;

/// Turn-based combat state for one map.
///
/// Created once and reused across encounters; [`CombatState::combat_init_by_player`]
/// re-arms it whenever the player commits an act of aggression.
#[derive(Debug)]
pub struct CombatState {
    config: CombatConfig,
    in_combat: bool,
    player_turn: bool,
    did_alert_nearby_actors: bool,
    party_auto_attacks: bool,
    opponents: OpponentSet,
    budget: TurnBudget,
    animations: HitAnimationQueue,
    scheduler: StepScheduler,
    pending: Option<PendingTarget>,
    selection: Option<Position>,
    events: Vec<CombatEvent>,
    ai: Box<dyn BattleAi>,
}

impl CombatState {
    pub fn new(config: CombatConfig) -> Self {
        Self {
            config: config.normalized(),
            in_combat: false,
            player_turn: true,
            did_alert_nearby_actors: false,
            party_auto_attacks: false,
            opponents: OpponentSet::new(),
            budget: TurnBudget::new(),
            animations: HitAnimationQueue::new(),
            scheduler: StepScheduler::new(),
            pending: None,
            selection: None,
            events: Vec::new(),
            ai: Box::new(PathingAi::new()),
        }
    }

    /// Replaces the decision procedure used for opponents and auto-attack.
    #[must_use]
    pub fn with_ai(mut self, ai: Box<dyn BattleAi>) -> Self {
        self.ai = ai;
        self
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn is_in_combat(&self) -> bool {
        self.in_combat
    }

    pub fn is_player_turn(&self) -> bool {
        self.player_turn
    }

    pub fn did_alert_nearby_actors(&self) -> bool {
        self.did_alert_nearby_actors
    }

    pub fn party_auto_attacks(&self) -> bool {
        self.party_auto_attacks
    }

    pub fn opponents(&self) -> &OpponentSet {
        &self.opponents
    }

    pub fn budget(&self) -> &TurnBudget {
        &self.budget
    }

    pub fn animations(&self) -> &HitAnimationQueue {
        &self.animations
    }

    pub fn scheduler(&self) -> &StepScheduler {
        &self.scheduler
    }

    pub fn pending_target(&self) -> Option<&PendingTarget> {
        self.pending.as_ref()
    }

    /// True while an animation or a scripted move is playing out. Turn logic
    /// is frozen for as long as this holds.
    pub fn is_busy(&self) -> bool {
        self.scheduler.is_running() || !self.animations.is_empty()
    }

    /// Alive, primary action unused and movement left.
    pub fn can_act(&self, world: &dyn WorldQuery, id: EntityId) -> bool {
        let Some(combatant) = world.combatant(id) else {
            return false;
        };
        combatant.is_alive()
            && !self.budget.primary_used(id)
            && self.budget.moves_taken(id) < combatant.movement_allowance
    }

    /// Moves `id` still has this turn.
    pub fn remaining_moves(&self, world: &dyn WorldQuery, id: EntityId) -> u32 {
        world
            .combatant(id)
            .map_or(0, |c| self.budget.remaining(id, c.movement_allowance))
    }

    /// Hands the current hit sprites and targeting indicator to the renderer.
    pub fn draw(&self, presentation: &mut dyn Presentation) {
        let frame = CombatFrame {
            hits: self.animations.sprites(),
            selection: self.pending.as_ref().and(self.selection),
        };
        presentation.draw_combat(&frame);
    }

    /// Takes every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: CombatEvent) {
        self.events.push(event);
    }
}

impl Default for CombatState {
    fn default() -> Self {
        Self::new(CombatConfig::default())
    }
}

fn is_alive(world: &dyn WorldQuery, id: EntityId) -> bool {
    world.combatant(id).is_some_and(|c| c.is_alive())
}
