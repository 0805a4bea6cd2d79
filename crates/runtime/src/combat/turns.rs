//! Per-tick update and the player/enemy turn machine.
use std::time::Duration;

use game_core::{BattleAction, CombatEnv, EntityId};
use tracing::{debug, info, warn};

use super::{CombatState, is_alive};
use crate::events::CombatEvent;
use crate::scheduler::{MovementScript, StepCommand};

impl CombatState {
    /// Advances the encounter by one tick.
    ///
    /// The scheduler and the animation queue always advance, in or out of
    /// combat. Turn logic runs once both are idle after advancing, so the
    /// tick that lands the last hit also moves the turn along.
    pub fn update(&mut self, env: &mut CombatEnv<'_>, elapsed: Duration) {
        let mut commands = Vec::new();
        self.scheduler.step(elapsed, &mut commands);
        for command in commands {
            if !self.apply_step_command(env, command) {
                break;
            }
        }

        for effect in self.animations.advance() {
            self.complete_hit(env, effect);
        }

        if self.is_busy() || !self.in_combat {
            return;
        }

        self.check_end_of_combat(env);
        if !self.in_combat {
            return;
        }

        if self.player_turn {
            self.run_player_phase(env);
        } else {
            self.run_enemy_phase(env);
        }
    }

    /// Re-arms the encounter after player aggression.
    ///
    /// Always resets, even mid-encounter: budgets and the opponent set are
    /// wiped and the alert sweep may fire again. Running scripts and queued
    /// animations are left alone.
    pub fn combat_init_by_player(&mut self) {
        if self.in_combat {
            debug!("re-arming encounter with {} opponent(s)", self.opponents.len());
        }
        self.budget.clear();
        self.opponents.clear();
        self.party_auto_attacks = false;
        self.in_combat = true;
        self.player_turn = true;
        self.did_alert_nearby_actors = false;
        info!("encounter started by player");
        self.emit(CombatEvent::EncounterStarted);
    }

    pub fn end_player_turn(&mut self, env: &mut CombatEnv<'_>) {
        self.budget.clear();
        self.player_turn = false;
        debug!("player turn ended");
        self.emit(CombatEvent::TurnChanged { player_turn: false });
        self.check_end_of_combat(env);
    }

    pub fn end_enemy_turn(&mut self, env: &mut CombatEnv<'_>) {
        self.budget.clear();
        self.player_turn = true;
        debug!("enemy turn ended");
        self.emit(CombatEvent::TurnChanged { player_turn: true });
        self.check_end_of_combat(env);

        let members = env.party.members();
        if let Some(member) = members.into_iter().find(|&m| self.can_act(&*env.world, m)) {
            env.party.switch_active(member);
        }
    }

    /// Ends the encounter once nothing hostile or in flight remains.
    ///
    /// Purges dead opponents first. Safe to call any number of times.
    pub fn check_end_of_combat(&mut self, env: &mut CombatEnv<'_>) {
        for fallen in self.opponents.purge_fallen(env.world.arena()) {
            debug!("{} dropped from the opponent set", fallen);
            self.emit(CombatEvent::OpponentLeft(fallen));
        }

        if !self.in_combat || !self.opponents.is_empty() || self.is_busy() {
            return;
        }

        self.in_combat = false;
        env.party.force_rejoin();
        info!("encounter ended");
        self.emit(CombatEvent::EncounterEnded);
    }

    fn run_player_phase(&mut self, env: &mut CombatEnv<'_>) {
        let members = env.party.members();
        let Some(actor) = members
            .iter()
            .copied()
            .find(|&m| self.can_act(&*env.world, m))
        else {
            self.end_player_turn(env);
            return;
        };

        let avatar = env.party.avatar();
        if avatar != actor && !self.can_act(&*env.world, avatar) {
            env.party.switch_active(actor);
        }

        if !self.party_auto_attacks {
            return;
        }

        let enemies = self.opponents.to_vec();
        let remaining = self.remaining_moves(&*env.world, actor);
        let action = self.ai.decide(&*env.world, actor, &enemies, remaining);
        debug!("auto-attack for {}: {:?}", actor, action);
        self.schedule_battle_action(env, actor, action);
    }

    fn run_enemy_phase(&mut self, env: &mut CombatEnv<'_>) {
        let Some(actor) = self
            .opponents
            .iter()
            .find(|&id| self.can_act(&*env.world, id))
        else {
            self.end_enemy_turn(env);
            return;
        };

        let enemies: Vec<EntityId> = env
            .party
            .members()
            .into_iter()
            .filter(|&member| is_alive(&*env.world, member))
            .collect();
        let remaining = self.remaining_moves(&*env.world, actor);
        let action = self.ai.decide(&*env.world, actor, &enemies, remaining);
        debug!("opponent {} decided {:?}", actor, action);
        self.schedule_battle_action(env, actor, action);
    }

    /// Carries out an AI decision: ends the actor's turn, strikes in place, or
    /// hands the walk to the step scheduler.
    pub(crate) fn schedule_battle_action(
        &mut self,
        env: &mut CombatEnv<'_>,
        actor: EntityId,
        action: BattleAction,
    ) {
        if action.is_end_turn() {
            self.budget.mark_primary_used(actor);
            return;
        }

        if action.path.is_empty() {
            if let Some(target) = action.target {
                self.melee_attack(env, actor, target);
            }
            return;
        }

        let script = MovementScript::new(actor, action.path, action.target, self.config.step_delay());
        if !self.scheduler.start(Box::new(script)) {
            warn!("step scheduler busy, dropping movement for {}", actor);
            self.budget.mark_primary_used(actor);
        }
    }

    /// Returns false when the running script was aborted.
    fn apply_step_command(&mut self, env: &mut CombatEnv<'_>, command: StepCommand) -> bool {
        match command {
            StepCommand::Move { actor, to } => match env.world.move_combatant(actor, to) {
                Ok(()) => {
                    self.budget.record_move(actor);
                    if env.world.arena().is_player_controlled(actor) {
                        env.presentation.recenter(to);
                    }
                    true
                }
                Err(error) => {
                    warn!("scripted move of {} to {} failed: {}", actor, to, error);
                    if let Some(actor) = self.scheduler.abort() {
                        self.budget.mark_primary_used(actor);
                    }
                    false
                }
            },
            StepCommand::Melee { attacker, target } => {
                self.melee_attack(env, attacker, target);
                true
            }
        }
    }
}
