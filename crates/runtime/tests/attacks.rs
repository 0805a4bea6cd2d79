mod common;

use std::sync::Arc;

use combat_runtime::{BoltSpell, CombatEvent, InputError, PendingTarget, SpellEffect, StepOutcome};
use common::Fixture;
use game_core::{
    AttackActionType, CardinalDirection, CombatEnv, Combatant, EntityId, Position, Presentation,
    Tint, WorldQuery,
};

#[test]
fn ranged_shot_travels_four_tiles_and_damages_once() {
    let mut fx = Fixture::new(12, 3);
    let hero = fx.hero("hero", Position::new(0, 1), 30);
    let orc = fx.npc(Combatant::new("orc", Position::new(5, 1), 50));

    fx.run(|combat, env| combat.engage_ranged(env, hero, Position::new(5, 1)));

    let animation = fx.combat.animations().iter().next().unwrap();
    assert_eq!(
        animation.path(),
        &[
            Position::new(1, 1),
            Position::new(2, 1),
            Position::new(3, 1),
            Position::new(4, 1),
        ]
    );
    assert!(fx.combat.opponents().contains(orc));
    assert_eq!(fx.rules.damage_on(orc), 0);

    let ticks = fx.settle();
    let per_step = fx.combat.config().projectile_ticks_per_step as usize;
    assert_eq!(ticks, 4 * per_step);
    assert_eq!(fx.rules.damage_calls, vec![(hero, orc, AttackActionType::Ranged)]);
    // The shot spent the only member's action; the landing tick ends the turn.
    assert!(!fx.combat.is_player_turn());
}

#[test]
fn melee_engagement_recruits_allies_inside_the_alert_radius_only() {
    let mut fx = Fixture::new(30, 6);
    let hero = fx.hero("hero", Position::new(0, 0), 30);
    let target = fx.npc(Combatant::new("orc", Position::new(1, 0), 50));
    let ally = fx.npc(Combatant::new("ally", Position::new(4, 0), 50));
    let lurker = fx.npc(Combatant::new("lurker", Position::new(3, 2), 50).hidden());
    fx.npc(Combatant::new("far", Position::new(20, 0), 50));
    fx.npc(Combatant::new("farther", Position::new(25, 3), 50));

    fx.run(|combat, env| combat.engage_melee(env, hero, target));

    assert!(fx.combat.is_in_combat());
    assert_eq!(fx.combat.opponents().to_vec(), vec![target, ally]);
    assert!(!fx.combat.opponents().contains(lurker));
}

#[test]
fn alert_sweep_fires_once_per_encounter() {
    let mut fx = Fixture::new(30, 6);
    let hero = fx.hero("hero", Position::new(0, 0), 30);
    let target = fx.npc(Combatant::new("orc", Position::new(0, 1), 50));
    let far = fx.npc(Combatant::new("far", Position::new(20, 0), 50));
    let far_friend = fx.npc(Combatant::new("far friend", Position::new(22, 0), 50));

    fx.run(|combat, env| combat.engage_melee(env, hero, target));
    fx.run(|combat, env| combat.alert_nearby_actors(env, far));
    assert!(!fx.combat.opponents().contains(far));

    // Direct hits still pull the victim in, but no second sweep runs.
    fx.run(|combat, env| combat.ranged_attack(env, hero, Position::new(20, 0)));
    fx.run(|combat, env| combat.ranged_attack(env, hero, Position::new(20, 0)));
    fx.settle();

    let sweeps = fx.count_events(|e| matches!(e, CombatEvent::AlertSweep { .. }));
    assert_eq!(sweeps, 1);
    assert_eq!(fx.rules.damage_on(far), 2);
    assert!(fx.combat.opponents().contains(far));
    assert!(!fx.combat.opponents().contains(far_friend));
    assert_eq!(fx.combat.opponents().len(), 2);
}

#[test]
fn ranged_hit_reveals_hidden_target() {
    let mut fx = Fixture::new(12, 3);
    let hero = fx.hero("hero", Position::new(0, 0), 30);
    let sneak = fx.npc(Combatant::new("sneak", Position::new(4, 0), 50).hidden());

    fx.run(|combat, env| combat.engage_ranged(env, hero, Position::new(6, 0)));

    assert!(!fx.world.combatant(sneak).unwrap().hidden);
    assert!(fx.combat.opponents().contains(sneak));
}

#[test]
fn shots_never_pull_party_members_into_the_opponent_set() {
    let mut fx = Fixture::new(12, 3);
    let archer = fx.hero("archer", Position::new(0, 0), 30);
    let friend = fx.hero("friend", Position::new(2, 0), 30);

    fx.run(|combat, env| combat.engage_ranged(env, archer, Position::new(5, 0)));
    fx.settle();

    assert!(!fx.combat.opponents().contains(friend));
    assert_eq!(fx.rules.damage_on(friend), 1);
}

#[test]
fn volley_fires_once_per_living_member() {
    let mut fx = Fixture::new(12, 3);
    let members = [
        fx.hero("a", Position::new(0, 0), 30),
        fx.hero("b", Position::new(0, 1), 30),
        fx.hero("c", Position::new(0, 2), 30),
    ];
    fx.world.arena_mut().get_mut(members[2]).unwrap().health.current = 0;
    let orc = fx.npc(Combatant::new("orc", Position::new(6, 1), 100));

    fx.run(|combat, env| combat.party_volley(env, Position::new(6, 1)));
    assert_eq!(fx.combat.animations().len(), 2);

    fx.settle();
    assert_eq!(fx.rules.damage_on(orc), 2);
    // Both living members are spent, so the turn passes as the volley lands.
    assert!(!fx.combat.is_player_turn());
}

#[test]
fn area_spell_damages_everyone_in_the_burst_but_the_caster() {
    let mut fx = Fixture::new(16, 4);
    let mage = fx.hero("mage", Position::new(0, 0), 30);
    let caught = [
        fx.npc(Combatant::new("a", Position::new(5, 0), 100)),
        fx.npc(Combatant::new("b", Position::new(6, 1), 100)),
        fx.npc(Combatant::new("c", Position::new(5, 2), 100)),
    ];
    let spared = fx.npc(Combatant::new("d", Position::new(12, 0), 100));
    let fireball = BoltSpell::burst("fireball", Tint::ORANGE, 1);

    fx.run(|combat, env| combat.engage_spell(env, mage, &fireball, Position::new(5, 1)));
    assert!(fx.combat.is_in_combat());
    fx.settle();

    for id in caught {
        assert_eq!(fx.rules.damage_on(id), 1);
        assert!(fx.combat.opponents().contains(id));
    }
    assert_eq!(fx.rules.damage_on(spared), 0);
    assert_eq!(fx.rules.damage_on(mage), 0);
    assert!(
        fx.rules
            .damage_calls
            .iter()
            .all(|(_, _, attack)| *attack == AttackActionType::Spell)
    );
}

#[test]
fn pending_target_resolves_exactly_once() {
    let mut fx = Fixture::new(12, 3);
    let hero = fx.hero("hero", Position::new(0, 0), 30);
    let orc = fx.npc(Combatant::new("orc", Position::new(4, 0), 50));

    fx.run(|combat, env| combat.arm_ranged(env, hero)).unwrap();
    assert!(matches!(
        fx.combat.pending_target(),
        Some(PendingTarget::Ranged { attacker }) if *attacker == hero
    ));

    fx.run(|combat, env| combat.confirm_direction(env, CardinalDirection::East))
        .unwrap();
    assert!(fx.combat.pending_target().is_none());
    assert!(fx.combat.opponents().contains(orc));

    let again = fx.run(|combat, env| combat.confirm_direction(env, CardinalDirection::East));
    assert_eq!(again, Err(InputError::NothingArmed));

    fx.settle();
    assert_eq!(fx.rules.damage_on(orc), 1);
}

#[test]
fn pointer_confirms_a_targeted_spell() {
    let mut fx = Fixture::new(12, 3);
    let mage = fx.hero("mage", Position::new(0, 0), 30);
    let orc = fx.npc(Combatant::new("orc", Position::new(4, 0), 50));
    let bolt: Arc<BoltSpell> = Arc::new(BoltSpell::bolt("spark", Tint::BLUE));

    fx.run(|combat, env| combat.arm_spell(env, mage, bolt)).unwrap();

    let tile = fx.presentation.map_to_screen(Position::new(4, 0));
    fx.run(|combat, env| combat.hover_pointer(&*env.presentation, tile));
    fx.combat.draw(&mut fx.presentation);
    assert_eq!(
        fx.presentation.last_frame().unwrap().selection,
        Some(Position::new(4, 0))
    );

    fx.run(|combat, env| combat.confirm_pointer(env, tile)).unwrap();
    fx.combat.draw(&mut fx.presentation);
    let frame = fx.presentation.last_frame().unwrap();
    assert_eq!(frame.selection, None);
    assert_eq!(frame.hits.len(), 1);
    assert_eq!(frame.hits[0].tint, Tint::BLUE);

    fx.settle();
    assert_eq!(fx.rules.damage_calls, vec![(mage, orc, AttackActionType::Spell)]);
}

#[derive(Debug)]
struct Mend;

impl SpellEffect for Mend {
    fn apply(&self, env: &mut CombatEnv<'_>, caster: EntityId, _position: Position) {
        if let Some(caster) = env.world.arena_mut().get_mut(caster) {
            caster.health.current = caster.health.maximum;
        }
    }
}

#[test]
fn untargeted_support_spell_lands_on_the_caster_without_starting_combat() {
    let mut fx = Fixture::new(6, 6);
    let cleric = fx.hero("cleric", Position::new(2, 2), 20);
    fx.world.arena_mut().get_mut(cleric).unwrap().health.current = 3;
    let mend = Arc::new(BoltSpell::effect("mend", Tint::GREEN, Arc::new(Mend)).untargeted());

    fx.run(|combat, env| combat.arm_spell(env, cleric, mend)).unwrap();

    assert!(!fx.combat.is_in_combat());
    assert!(fx.combat.pending_target().is_none());
    let sprite = fx.combat.animations().iter().next().unwrap().sprite().unwrap();
    assert_eq!(sprite.position, Position::new(2, 2));

    fx.settle();
    assert_eq!(fx.health(cleric), 20);
}

#[test]
fn melee_confirmation_needs_an_adjacent_occupant() {
    let mut fx = Fixture::new(12, 3);
    let hero = fx.hero("hero", Position::new(0, 0), 30);
    let orc = fx.npc(Combatant::new("orc", Position::new(1, 0), 50));

    fx.run(|combat, env| combat.arm_melee(env, hero)).unwrap();
    let miss = fx.run(|combat, env| combat.confirm_direction(env, CardinalDirection::North));
    assert_eq!(miss, Err(InputError::NoTarget(Position::new(0, 1))));

    fx.run(|combat, env| combat.arm_melee(env, hero)).unwrap();
    fx.run(|combat, env| combat.confirm_direction(env, CardinalDirection::East))
        .unwrap();
    assert!(fx.combat.opponents().contains(orc));
    fx.settle();
    assert_eq!(fx.rules.damage_on(orc), 1);
}

#[test]
fn bumping_into_an_npc_attacks_it() {
    let mut fx = Fixture::new(12, 3);
    fx.hero("hero", Position::new(0, 0), 30);
    let orc = fx.npc(Combatant::new("orc", Position::new(1, 0), 50));

    let outcome = fx.run(|combat, env| combat.step_active(env, CardinalDirection::East));

    assert_eq!(outcome, Ok(StepOutcome::Attacked(orc)));
    assert!(fx.combat.is_in_combat());
    assert_eq!(fx.combat.animations().len(), 1);
}

#[test]
fn walls_and_party_members_block_movement() {
    let mut fx = Fixture::new(6, 3);
    fx.world.add_wall(Position::new(1, 0));
    fx.hero("hero", Position::new(0, 0), 30);
    fx.hero("friend", Position::new(0, 1), 30);

    let wall = fx.run(|combat, env| combat.step_active(env, CardinalDirection::East));
    let friend = fx.run(|combat, env| combat.step_active(env, CardinalDirection::North));

    assert_eq!(wall, Err(InputError::Blocked(Position::new(1, 0))));
    assert_eq!(friend, Err(InputError::Blocked(Position::new(0, 1))));
    assert!(!fx.combat.is_in_combat());
}

#[test]
fn action_menu_lists_every_choice() {
    let mut fx = Fixture::new(6, 3);
    let hero = fx.hero("hero", Position::new(0, 0), 30);

    fx.combat.open_action_menu(&mut fx.presentation);
    let (title, options) = &fx.presentation.menus()[0];
    assert_eq!(title, "Combat");
    assert_eq!(options, &["Attack", "Shoot", "Auto battle", "End turn"]);

    fx.run(|combat, env| combat.choose_action(env, combat_runtime::MenuAction::Ranged))
        .unwrap();
    assert_eq!(fx.combat.pending_target().map(PendingTarget::actor), Some(hero));

    fx.run(|combat, env| combat.choose_action(env, combat_runtime::MenuAction::AutoBattle))
        .unwrap();
    assert!(fx.combat.party_auto_attacks());
}
