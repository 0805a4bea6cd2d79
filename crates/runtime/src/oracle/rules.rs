//! Stat-driven dice served through [`game_core::CombatRules`].
use game_core::{
    AttackActionType, CombatRules, DamageParams, EntityId, HitChanceParams, WorldQuery, combat,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Rolls hits against accuracy/evasion and derives damage from attack and
/// defense, with a seeded RNG so encounters replay identically.
#[derive(Debug, Clone)]
pub struct StatRules {
    rng: StdRng,
    hit: HitChanceParams,
    damage: DamageParams,
    deaths: Vec<EntityId>,
}

impl StatRules {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            hit: HitChanceParams::default(),
            damage: DamageParams::default(),
            deaths: Vec::new(),
        }
    }

    /// Rules where every attack connects.
    pub fn always_hit() -> Self {
        let mut rules = Self::seeded(0);
        rules.hit = HitChanceParams {
            base: 100,
            min: 100,
            max: 100,
        };
        rules
    }

    #[must_use]
    pub fn with_damage(mut self, damage: DamageParams) -> Self {
        self.damage = damage;
        self
    }

    /// Combatants whose death was handled, in order.
    pub fn deaths(&self) -> &[EntityId] {
        &self.deaths
    }

    fn power(attack: AttackActionType) -> u32 {
        match attack {
            AttackActionType::Melee => 2,
            AttackActionType::Ranged => 1,
            AttackActionType::Spell => 3,
        }
    }
}

impl Default for StatRules {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl CombatRules for StatRules {
    fn resolve_hit(&mut self, world: &dyn WorldQuery, attacker: EntityId, target: EntityId) -> bool {
        let (Some(attacker), Some(target)) = (world.combatant(attacker), world.combatant(target))
        else {
            return false;
        };
        let roll = self.rng.gen_range(1..=100);
        combat::check_hit(attacker.stats.accuracy, target.stats.evasion, roll, &self.hit)
    }

    fn apply_damage(
        &mut self,
        world: &mut dyn WorldQuery,
        attacker: EntityId,
        target: EntityId,
        attack: AttackActionType,
    ) -> u32 {
        let Some(attack_stat) = world.combatant(attacker).map(|c| c.stats.attack) else {
            return 0;
        };
        let Some(victim) = world.arena_mut().get_mut(target) else {
            return 0;
        };
        let amount = combat::calculate_damage(
            Self::power(attack),
            attack_stat,
            victim.stats.defense,
            &self.damage,
        );
        victim.health.current = combat::apply_damage(victim.health.current, amount);
        amount
    }

    fn handle_death(&mut self, _world: &mut dyn WorldQuery, victim: EntityId) {
        self.deaths.push(victim);
    }
}
