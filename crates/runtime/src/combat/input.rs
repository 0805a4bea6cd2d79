//! Player command surface.
//!
//! Every command validates against the turn machine first and reports a
//! refusal as an [`InputError`] instead of silently doing nothing.
use std::sync::Arc;

use game_core::{
    CardinalDirection, CombatEnv, EntityId, Position, Presentation, ScreenPoint, WorldQuery,
};
use tracing::debug;

use super::CombatState;
use crate::error::{InputError, Result};
use crate::spell::Spell;

/// Single-shot continuation armed by a targeted action. The next confirmed
/// position resolves it, then it is gone.
#[derive(Debug, Clone)]
pub enum PendingTarget {
    Melee { attacker: EntityId },
    Ranged { attacker: EntityId },
    Spell { caster: EntityId, spell: Arc<dyn Spell> },
}

impl PendingTarget {
    pub fn actor(&self) -> EntityId {
        match self {
            PendingTarget::Melee { attacker } | PendingTarget::Ranged { attacker } => *attacker,
            PendingTarget::Spell { caster, .. } => *caster,
        }
    }
}

/// Result of moving the active party member one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved(Position),
    /// The destination was occupied by a non-party combatant, which was
    /// attacked instead.
    Attacked(EntityId),
}

/// Entries of the combat action menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum MenuAction {
    #[strum(to_string = "Attack")]
    Melee,
    #[strum(to_string = "Shoot")]
    Ranged,
    #[strum(to_string = "Auto battle")]
    AutoBattle,
    #[strum(to_string = "End turn")]
    EndTurn,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [
        MenuAction::Melee,
        MenuAction::Ranged,
        MenuAction::AutoBattle,
        MenuAction::EndTurn,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl CombatState {
    /// Moves the active party member one tile, or bump-attacks whatever
    /// non-party combatant stands there.
    pub fn step_active(
        &mut self,
        env: &mut CombatEnv<'_>,
        direction: CardinalDirection,
    ) -> Result<StepOutcome> {
        let actor = env.party.avatar();
        self.ensure_can_input(&*env.world, actor)?;
        let from = self.position_of(&*env.world, actor)?;
        let to = from.step(direction);

        if let Some(occupant) = env.world.actor_at(to) {
            if env.world.arena().is_player_controlled(occupant) {
                return Err(InputError::Blocked(to));
            }
            self.engage_melee(env, actor, occupant);
            return Ok(StepOutcome::Attacked(occupant));
        }

        if !env.world.can_move_into(to) {
            return Err(InputError::Blocked(to));
        }
        env.world.move_combatant(actor, to)?;
        if self.in_combat {
            self.budget.record_move(actor);
        }
        env.presentation.recenter(to);
        Ok(StepOutcome::Moved(to))
    }

    pub fn arm_melee(&mut self, env: &mut CombatEnv<'_>, attacker: EntityId) -> Result<()> {
        self.arm(&*env.world, PendingTarget::Melee { attacker })
    }

    pub fn arm_ranged(&mut self, env: &mut CombatEnv<'_>, attacker: EntityId) -> Result<()> {
        self.arm(&*env.world, PendingTarget::Ranged { attacker })
    }

    /// Arms a targeted spell, or casts an untargeted one on the caster's tile
    /// right away.
    pub fn arm_spell(
        &mut self,
        env: &mut CombatEnv<'_>,
        caster: EntityId,
        spell: Arc<dyn Spell>,
    ) -> Result<()> {
        if spell.is_targeted() {
            return self.arm(&*env.world, PendingTarget::Spell { caster, spell });
        }

        self.ensure_can_input(&*env.world, caster)?;
        let position = self.position_of(&*env.world, caster)?;
        self.engage_spell(env, caster, spell.as_ref(), position);
        Ok(())
    }

    /// Resolves the pending target in `direction` from its actor.
    ///
    /// Melee strikes the adjacent tile. Ranged attacks and spells fly until
    /// the first tile they cannot pass, at most `projection_range` tiles out.
    pub fn confirm_direction(
        &mut self,
        env: &mut CombatEnv<'_>,
        direction: CardinalDirection,
    ) -> Result<()> {
        let pending = self.take_pending(&*env.world)?;
        let origin = self.position_of(&*env.world, pending.actor())?;
        let position = match pending {
            PendingTarget::Melee { .. } => origin.step(direction),
            _ => project(&*env.world, origin, direction, self.config.projection_range),
        };
        self.resolve_pending(env, pending, position)
    }

    /// Resolves the pending target at the map tile under `point`.
    pub fn confirm_pointer(&mut self, env: &mut CombatEnv<'_>, point: ScreenPoint) -> Result<()> {
        let pending = self.take_pending(&*env.world)?;
        let position = env.presentation.screen_to_map(point);
        self.resolve_pending(env, pending, position)
    }

    /// Moves the targeting indicator while a target is pending.
    pub fn hover_pointer(&mut self, presentation: &dyn Presentation, point: ScreenPoint) {
        if self.pending.is_some() {
            self.selection = Some(presentation.screen_to_map(point));
        }
    }

    pub fn cancel_pending(&mut self) -> Option<PendingTarget> {
        self.selection = None;
        self.pending.take()
    }

    /// Gives up the rest of `member`'s turn.
    pub fn end_member_turn(&mut self, member: EntityId) -> Result<()> {
        if !self.in_combat {
            return Err(InputError::NotInCombat);
        }
        if !self.player_turn {
            return Err(InputError::NotPlayerTurn);
        }
        debug!("{} ends its turn", member);
        self.budget.mark_primary_used(member);
        Ok(())
    }

    pub fn set_party_auto_attacks(&mut self, enabled: bool) {
        debug!("party auto-attack {}", if enabled { "on" } else { "off" });
        self.party_auto_attacks = enabled;
    }

    pub fn open_action_menu(&self, presentation: &mut dyn Presentation) {
        let labels: Vec<String> = MenuAction::ALL.iter().map(ToString::to_string).collect();
        presentation.open_choice_menu("Combat", &labels);
    }

    /// Runs a menu choice for the active party member.
    pub fn choose_action(&mut self, env: &mut CombatEnv<'_>, action: MenuAction) -> Result<()> {
        let avatar = env.party.avatar();
        match action {
            MenuAction::Melee => self.arm_melee(env, avatar),
            MenuAction::Ranged => self.arm_ranged(env, avatar),
            MenuAction::AutoBattle => {
                self.set_party_auto_attacks(true);
                Ok(())
            }
            MenuAction::EndTurn => self.end_member_turn(avatar),
        }
    }

    fn ensure_can_input(&self, world: &dyn WorldQuery, actor: EntityId) -> Result<()> {
        if self.in_combat && !self.player_turn {
            return Err(InputError::NotPlayerTurn);
        }
        if self.is_busy() {
            return Err(InputError::Busy);
        }
        let Some(combatant) = world.combatant(actor) else {
            return Err(InputError::UnknownCombatant(actor));
        };
        if !combatant.is_alive() || (self.in_combat && !self.can_act(world, actor)) {
            return Err(InputError::CannotAct(actor));
        }
        Ok(())
    }

    fn position_of(&self, world: &dyn WorldQuery, id: EntityId) -> Result<Position> {
        world
            .combatant(id)
            .map(|c| c.position)
            .ok_or(InputError::UnknownCombatant(id))
    }

    fn arm(&mut self, world: &dyn WorldQuery, pending: PendingTarget) -> Result<()> {
        let actor = pending.actor();
        self.ensure_can_input(world, actor)?;
        debug!("{} armed {:?}", actor, pending);
        self.selection = world.combatant(actor).map(|c| c.position);
        self.pending = Some(pending);
        Ok(())
    }

    /// Revalidates and consumes the pending target.
    fn take_pending(&mut self, world: &dyn WorldQuery) -> Result<PendingTarget> {
        let actor = self
            .pending
            .as_ref()
            .map(PendingTarget::actor)
            .ok_or(InputError::NothingArmed)?;
        self.ensure_can_input(world, actor)?;
        self.selection = None;
        self.pending.take().ok_or(InputError::NothingArmed)
    }

    fn resolve_pending(
        &mut self,
        env: &mut CombatEnv<'_>,
        pending: PendingTarget,
        position: Position,
    ) -> Result<()> {
        match pending {
            PendingTarget::Melee { attacker } => {
                let origin = self.position_of(&*env.world, attacker)?;
                let target = env
                    .world
                    .actor_at(position)
                    .filter(|&id| id != attacker && origin.is_orthogonally_adjacent(position))
                    .ok_or(InputError::NoTarget(position))?;
                self.engage_melee(env, attacker, target);
            }
            PendingTarget::Ranged { attacker } => self.engage_ranged(env, attacker, position),
            PendingTarget::Spell { caster, spell } => {
                self.engage_spell(env, caster, spell.as_ref(), position);
            }
        }
        Ok(())
    }
}

/// Walks from `origin` in `direction` while tiles let projectiles through,
/// stopping on the first tile that does not or after `range` tiles.
fn project(
    world: &dyn WorldQuery,
    origin: Position,
    direction: CardinalDirection,
    range: u32,
) -> Position {
    let mut position = origin;
    for _ in 0..range.max(1) {
        position = position.step(direction);
        if !world.can_project_through(position) {
            break;
        }
    }
    position
}
