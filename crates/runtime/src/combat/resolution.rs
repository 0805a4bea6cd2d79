//! Attack and spell resolution.
//!
//! Every channel enqueues a [`HitAnimation`] carrying a [`HitEffect`]; the
//! consequences (damage, death, primary-action bookkeeping) are applied in
//! [`CombatState::complete_hit`] once the animation finishes.
use game_core::{AttackActionType, CombatEnv, EntityId, IconRef, Position, Tint, WorldQuery};
use tracing::debug;

use super::{CombatState, is_alive};
use crate::animation::{HitAnimation, HitEffect};
use crate::events::CombatEvent;
use crate::spell::{Spell, SpellCast, SpellImpact};

const MELEE_ICON: IconRef = IconRef::new("combat", "slash");
const PROJECTILE_ICON: IconRef = IconRef::new("combat", "arrow");

impl CombatState {
    /// Player melee: re-arms combat, sweeps for allies of `target`, strikes.
    pub fn engage_melee(&mut self, env: &mut CombatEnv<'_>, attacker: EntityId, target: EntityId) {
        self.combat_init_by_player();
        self.alert_nearby_actors(env, target);
        self.melee_attack(env, attacker, target);
    }

    /// Player ranged attack toward `position`.
    pub fn engage_ranged(&mut self, env: &mut CombatEnv<'_>, attacker: EntityId, position: Position) {
        self.combat_init_by_player();
        self.ranged_attack(env, attacker, position);
    }

    /// Every living party member fires at `position`.
    pub fn party_volley(&mut self, env: &mut CombatEnv<'_>, position: Position) {
        self.combat_init_by_player();
        let shooters: Vec<EntityId> = env
            .party
            .members()
            .into_iter()
            .filter(|&member| is_alive(&*env.world, member))
            .collect();
        debug!("volley of {} shot(s) at {}", shooters.len(), position);
        for shooter in shooters {
            self.ranged_attack(env, shooter, position);
        }
    }

    /// Casts `spell`. Offensive spells re-arm combat first.
    pub fn engage_spell(
        &mut self,
        env: &mut CombatEnv<'_>,
        caster: EntityId,
        spell: &dyn Spell,
        position: Position,
    ) {
        if spell.is_offensive() {
            self.combat_init_by_player();
        }
        debug!("{} casts {} at {}", caster, spell.name(), position);
        spell.cast_on_target(self, env, caster, position);
    }

    /// Rolls the hit now and plays a flourish on the target's tile; damage
    /// lands when the flourish ends.
    pub fn melee_attack(&mut self, env: &mut CombatEnv<'_>, attacker: EntityId, target: EntityId) {
        let Some(position) = env.world.combatant(target).map(|c| c.position) else {
            debug!("{} swings at missing {}", attacker, target);
            self.budget.mark_primary_used(attacker);
            return;
        };

        let hit = env.rules.resolve_hit(&*env.world, attacker, target);
        debug!(
            "{} {} {} in melee",
            attacker,
            if hit { "hits" } else { "misses" },
            target
        );
        let tint = if hit { Tint::RED } else { Tint::WHITE };
        self.animations.push(
            HitAnimation::flourish(position, self.config.melee_flourish_ticks, MELEE_ICON, tint)
                .with_effect(HitEffect::Melee {
                    attacker,
                    target,
                    hit,
                }),
        );
    }

    /// Fires a projectile from `attacker` toward `position`.
    ///
    /// The projectile stops at the first tile it cannot pass; whoever stands
    /// there becomes the victim and joins the opponent set immediately.
    pub fn ranged_attack(&mut self, env: &mut CombatEnv<'_>, attacker: EntityId, position: Position) {
        let Some(origin) = env.world.combatant(attacker).map(|c| c.position) else {
            return;
        };

        let (path, impact) = trace_projectile(&*env.world, origin, position);
        let victim = env.world.actor_at(impact).filter(|&id| id != attacker);
        if let Some(victim) = victim {
            self.mark_hostile(env, victim);
        }
        debug!(
            "{} fires at {}: {} tile(s), impact {} ({:?})",
            attacker,
            position,
            path.len(),
            impact,
            victim
        );

        self.animations.push(
            HitAnimation::travelling(
                path,
                self.config.projectile_ticks_per_step,
                PROJECTILE_ICON,
                Tint::ORANGE,
            )
            .with_effect(HitEffect::Projectile {
                attacker,
                target: victim,
            }),
        );
    }

    /// Animates a spell toward `position` and applies its impact on landing.
    pub fn cast_spell(
        &mut self,
        env: &mut CombatEnv<'_>,
        caster: EntityId,
        position: Position,
        cast: SpellCast,
    ) {
        let Some(origin) = env.world.combatant(caster).map(|c| c.position) else {
            return;
        };

        let (animation, impact) = if cast.projectile {
            let (path, impact) = trace_projectile(&*env.world, origin, position);
            let animation = HitAnimation::travelling(
                path,
                self.config.projectile_ticks_per_step,
                cast.icon,
                cast.tint,
            );
            (animation, impact)
        } else {
            let animation = HitAnimation::flourish(
                position,
                self.config.melee_flourish_ticks,
                cast.icon,
                cast.tint,
            );
            (animation, position)
        };

        if cast.impact.is_offensive() {
            if let Some(victim) = env.world.actor_at(impact).filter(|&id| id != caster) {
                self.mark_hostile(env, victim);
            }
        }

        self.animations.push(animation.with_effect(HitEffect::Spell {
            caster,
            position: impact,
            impact: cast.impact,
        }));
    }

    /// Applies the deferred consequence of a finished animation.
    pub(crate) fn complete_hit(&mut self, env: &mut CombatEnv<'_>, effect: HitEffect) {
        self.budget.mark_primary_used(effect.actor());

        match effect {
            HitEffect::Melee {
                attacker,
                target,
                hit,
            } => {
                if !is_alive(&*env.world, target) {
                    return;
                }
                let damage = if hit {
                    Some(env.rules.apply_damage(
                        &mut *env.world,
                        attacker,
                        target,
                        AttackActionType::Melee,
                    ))
                } else {
                    None
                };
                self.emit(CombatEvent::AttackResolved {
                    attacker,
                    target,
                    attack: AttackActionType::Melee,
                    damage,
                });
                if hit {
                    self.handle_casualty(env, target);
                }
            }
            HitEffect::Projectile { attacker, target } => {
                if let Some(target) = target.filter(|&id| is_alive(&*env.world, id)) {
                    self.strike(env, attacker, target, AttackActionType::Ranged);
                }
            }
            HitEffect::Spell {
                caster,
                position,
                impact,
            } => match impact {
                SpellImpact::Damage => {
                    let victim = env
                        .world
                        .actor_at(position)
                        .filter(|&id| id != caster && is_alive(&*env.world, id));
                    if let Some(victim) = victim {
                        self.strike(env, caster, victim, AttackActionType::Spell);
                    }
                }
                SpellImpact::Area { radius } => {
                    let victims = env.world.actors_within(position, radius, &|id, c| {
                        id != caster && c.is_alive()
                    });
                    debug!("area spell at {} catches {} combatant(s)", position, victims.len());
                    for victim in victims {
                        self.mark_hostile(env, victim);
                        self.strike(env, caster, victim, AttackActionType::Spell);
                    }
                }
                SpellImpact::Effect(handler) => {
                    handler.apply(&mut env.reborrow(), caster, position);
                }
            },
        }
    }

    /// Unconditional damage followed by casualty handling.
    fn strike(
        &mut self,
        env: &mut CombatEnv<'_>,
        attacker: EntityId,
        target: EntityId,
        attack: AttackActionType,
    ) {
        let damage = env.rules.apply_damage(&mut *env.world, attacker, target, attack);
        self.emit(CombatEvent::AttackResolved {
            attacker,
            target,
            attack,
            damage: Some(damage),
        });
        self.handle_casualty(env, target);
    }

    fn handle_casualty(&mut self, env: &mut CombatEnv<'_>, victim: EntityId) {
        if env.world.combatant(victim).is_none_or(|c| c.is_alive()) {
            return;
        }
        debug!("{} died", victim);
        env.rules.handle_death(&mut *env.world, victim);
        self.emit(CombatEvent::CombatantDied(victim));
        if self.opponents.remove(victim) {
            self.emit(CombatEvent::OpponentLeft(victim));
        }
    }
}

/// Traces a projectile from `origin` toward `target`.
///
/// Returns the flight path and the impact tile. The path is the passable
/// prefix of the line of sight. The impact is the first tile the projectile
/// cannot pass, or the end of the line when nothing blocks it. A shot with no
/// passable tiles is drawn on the impact tile itself.
pub(crate) fn trace_projectile(
    world: &dyn WorldQuery,
    origin: Position,
    target: Position,
) -> (Vec<Position>, Position) {
    let mut path = Vec::new();
    let mut blocked = None;
    for tile in world.line_of_sight(origin, target) {
        if tile == origin {
            continue;
        }
        if !world.can_project_through(tile) {
            blocked = Some(tile);
            break;
        }
        path.push(tile);
    }

    let impact = blocked.or_else(|| path.last().copied()).unwrap_or(origin);
    if path.is_empty() {
        path.push(impact);
    }
    (path, impact)
}
