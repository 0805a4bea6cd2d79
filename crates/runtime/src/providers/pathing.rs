//! Nearest-reachable-enemy melee AI.
use game_core::{BattleAction, EntityId, Position, WorldQuery};
use tracing::debug;

use super::BattleAi;

/// Walks toward the enemy with the shortest path to a free side and strikes
/// when it gets there.
///
/// Decision order:
/// 1. Already orthogonally adjacent to a live enemy: attack in place. The
///    first adjacent enemy in `enemies` order wins.
/// 2. Otherwise path to every free cardinal neighbour of every live enemy and
///    keep the globally shortest path.
/// 3. No path at all: the actor is stuck and ends its turn.
/// 4. Truncate to the remaining movement. Only a path that fits entirely
///    carries the attack target.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathingAi;

impl PathingAi {
    pub fn new() -> Self {
        Self
    }
}

impl BattleAi for PathingAi {
    fn decide(
        &self,
        world: &dyn WorldQuery,
        actor: EntityId,
        enemies: &[EntityId],
        remaining_moves: u32,
    ) -> BattleAction {
        let Some(origin) = world.combatant(actor).map(|c| c.position) else {
            return BattleAction::end_turn();
        };

        let live: Vec<(EntityId, Position)> = enemies
            .iter()
            .filter_map(|&id| {
                world
                    .combatant(id)
                    .filter(|c| c.is_alive())
                    .map(|c| (id, c.position))
            })
            .collect();

        if let Some(&(target, _)) = live
            .iter()
            .find(|(_, position)| origin.is_orthogonally_adjacent(*position))
        {
            debug!("{} is adjacent to {}, attacking in place", actor, target);
            return BattleAction::attack(target);
        }

        let passable = |position: Position| world.can_move_into(position);
        let mut best: Option<(Vec<Position>, EntityId)> = None;
        for &(enemy, position) in &live {
            for cell in world.neighbors(position, &passable) {
                let path = world.find_path(origin, cell, &passable);
                if path.is_empty() {
                    continue;
                }
                if best
                    .as_ref()
                    .is_none_or(|(shortest, _)| path.len() < shortest.len())
                {
                    best = Some((path, enemy));
                }
            }
        }

        let Some((mut path, target)) = best else {
            if let Some(&(nearest, position)) =
                live.iter().min_by_key(|(_, position)| origin.manhattan(*position))
            {
                debug!(
                    "{} is stuck: no path toward nearest enemy {} at distance {}",
                    actor,
                    nearest,
                    origin.manhattan(position)
                );
            }
            return BattleAction::end_turn();
        };

        let fits = path.len() <= remaining_moves as usize;
        path.truncate(remaining_moves as usize);
        debug!(
            "{} moves {} step(s) toward {}{}",
            actor,
            path.len(),
            target,
            if fits { " and attacks" } else { "" }
        );

        BattleAction {
            path,
            target: fits.then_some(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::GridWorld;
    use game_core::Combatant;

    fn corridor() -> GridWorld {
        GridWorld::open(12, 12)
    }

    #[test]
    fn walks_three_steps_toward_distant_enemy_without_attacking() {
        let mut world = corridor();
        let actor = world
            .spawn(Combatant::new("orc", Position::new(0, 0), 10).with_movement(3))
            .unwrap();
        let hero = world
            .spawn(Combatant::new("hero", Position::new(5, 0), 10).player_controlled())
            .unwrap();

        let action = PathingAi.decide(&world, actor, &[hero], 3);

        assert_eq!(
            action.path,
            vec![Position::new(1, 0), Position::new(2, 0), Position::new(3, 0)]
        );
        assert_eq!(action.target, None);
    }

    #[test]
    fn attacks_when_whole_path_fits() {
        let mut world = corridor();
        let actor = world
            .spawn(Combatant::new("orc", Position::new(0, 0), 10))
            .unwrap();
        let hero = world
            .spawn(Combatant::new("hero", Position::new(3, 0), 10).player_controlled())
            .unwrap();

        let action = PathingAi.decide(&world, actor, &[hero], 4);

        assert_eq!(action.path.len(), 2);
        assert_eq!(action.path.last(), Some(&Position::new(2, 0)));
        assert_eq!(action.target, Some(hero));
    }

    #[test]
    fn adjacent_enemy_short_circuits_path_search() {
        let mut world = corridor();
        let actor = world
            .spawn(Combatant::new("orc", Position::new(5, 5), 10))
            .unwrap();
        let far = world
            .spawn(Combatant::new("far", Position::new(5, 8), 10).player_controlled())
            .unwrap();
        let adjacent = world
            .spawn(Combatant::new("near", Position::new(6, 5), 10).player_controlled())
            .unwrap();

        let action = PathingAi.decide(&world, actor, &[far, adjacent], 4);

        assert!(action.path.is_empty());
        assert_eq!(action.target, Some(adjacent));
    }

    #[test]
    fn walled_off_enemy_leaves_actor_stuck() {
        let mut world = corridor();
        for y in 0..12 {
            world.add_wall(Position::new(4, y));
        }
        let actor = world
            .spawn(Combatant::new("orc", Position::new(0, 0), 10))
            .unwrap();
        let hero = world
            .spawn(Combatant::new("hero", Position::new(8, 0), 10).player_controlled())
            .unwrap();

        let action = PathingAi.decide(&world, actor, &[hero], 4);

        assert!(action.is_end_turn());
    }

    #[test]
    fn dead_enemies_are_ignored() {
        let mut world = corridor();
        let actor = world
            .spawn(Combatant::new("orc", Position::new(0, 0), 10))
            .unwrap();
        let corpse = world
            .spawn(Combatant::new("corpse", Position::new(1, 0), 10).player_controlled())
            .unwrap();
        world.arena_mut().get_mut(corpse).unwrap().health.current = 0;

        let action = PathingAi.decide(&world, actor, &[corpse], 4);

        assert!(action.is_end_turn());
    }
}
