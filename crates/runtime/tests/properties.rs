mod common;

use common::Fixture;
use game_core::{Combatant, EntityId, Position, WorldQuery};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Spawn {
    x: i32,
    y: i32,
    health: u32,
    player: bool,
    hidden: bool,
}

fn spawn_strategy() -> impl Strategy<Value = Spawn> {
    (1..10i32, 0..10i32, 0..4u32, any::<bool>(), any::<bool>()).prop_map(
        |(x, y, health, player, hidden)| Spawn {
            x,
            y,
            health,
            player,
            hidden,
        },
    )
}

fn populate(spawns: &[Spawn]) -> (Fixture, EntityId, Vec<EntityId>) {
    let mut fx = Fixture::new(10, 10);
    let hero = fx.hero("hero", Position::new(0, 0), 20);
    let mut npcs = Vec::new();

    for (index, spawn) in spawns.iter().enumerate() {
        let position = Position::new(spawn.x, spawn.y);
        if fx.world.actor_at(position).is_some() {
            continue;
        }
        let mut combatant = Combatant::new(format!("c{index}"), position, 3);
        combatant.health.current = spawn.health;
        combatant.hidden = spawn.hidden;
        if spawn.player {
            fx.hero(&combatant.name, position, 3);
            let id = fx.world.actor_at(position).unwrap();
            fx.world.arena_mut().get_mut(id).unwrap().health.current = spawn.health.max(1);
        } else if let Ok(id) = fx.world.spawn(combatant) {
            npcs.push(id);
        }
    }

    (fx, hero, npcs)
}

fn assert_invariants(fx: &Fixture) {
    for (id, combatant) in fx.world.arena().iter() {
        if combatant.health.current == 0 {
            assert!(!fx.combat.can_act(&fx.world, id), "{id} acts while dead");
        }
        if combatant.player_controlled {
            assert!(!fx.combat.opponents().contains(id), "{id} is an opponent");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn encounter_invariants_hold_every_tick(
        spawns in prop::collection::vec(spawn_strategy(), 1..8),
        target_pick in any::<prop::sample::Index>(),
    ) {
        let (mut fx, hero, npcs) = populate(&spawns);
        prop_assume!(!npcs.is_empty());
        let target = npcs[target_pick.index(npcs.len())];
        let target_position = fx.position(target);

        fx.run(|combat, env| combat.engage_ranged(env, hero, target_position));
        fx.combat.set_party_auto_attacks(true);
        assert_invariants(&fx);

        for _ in 0..400 {
            let turn = fx.combat.is_player_turn();
            fx.tick();
            if fx.combat.is_busy() {
                prop_assert_eq!(fx.combat.is_player_turn(), turn);
            }
            assert_invariants(&fx);
        }
    }

    #[test]
    fn dead_combatants_never_act(max_health in 1..50u32, allowance in 0..6u32) {
        let mut fx = Fixture::new(4, 4);
        let id = fx.npc(Combatant::new("corpse", Position::new(1, 1), max_health).with_movement(allowance));
        fx.world.arena_mut().get_mut(id).unwrap().health.current = 0;

        fx.combat.combat_init_by_player();
        prop_assert!(!fx.combat.can_act(&fx.world, id));
    }
}
