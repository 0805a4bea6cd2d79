use super::WorldQuery;
use crate::action::AttackActionType;
use crate::state::EntityId;

/// Rules surface: the engine sequences attacks, the rules decide outcomes.
pub trait CombatRules {
    /// Rolls whether `attacker` connects with `target`.
    fn resolve_hit(&mut self, world: &dyn WorldQuery, attacker: EntityId, target: EntityId)
    -> bool;

    /// Applies the damage of one attack and returns the amount dealt.
    fn apply_damage(
        &mut self,
        world: &mut dyn WorldQuery,
        attacker: EntityId,
        target: EntityId,
        attack: AttackActionType,
    ) -> u32;

    /// Runs death side effects (loot, corpses, experience) for `victim`.
    fn handle_death(&mut self, world: &mut dyn WorldQuery, victim: EntityId);
}
