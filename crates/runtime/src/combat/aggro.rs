//! Opponent-set membership and alert propagation.
use game_core::{CombatEnv, CombatantArena, EntityId};
use tracing::{debug, info};

use super::CombatState;
use crate::events::CombatEvent;

impl CombatState {
    /// Pulls `target` and every visible non-party combatant within the alert
    /// radius into the encounter.
    ///
    /// Fires at most once per encounter; later calls are no-ops until the
    /// encounter is re-armed.
    pub fn alert_nearby_actors(&mut self, env: &mut CombatEnv<'_>, target: EntityId) {
        if self.did_alert_nearby_actors {
            return;
        }

        let mut recruited = 0;
        if self.can_act(&*env.world, target) && self.add_opponent(env.world.arena(), target) {
            recruited += 1;
        }

        if let Some(center) = env.world.combatant(target).map(|c| c.position) {
            let nearby = env.world.actors_within(center, self.config.alert_radius, &|_, c| {
                !c.player_controlled && c.is_alive() && !c.hidden
            });
            for id in nearby {
                if self.add_opponent(env.world.arena(), id) {
                    recruited += 1;
                }
            }
        }

        self.did_alert_nearby_actors = true;
        info!("alert sweep around {} recruited {} opponent(s)", target, recruited);
        self.emit(CombatEvent::AlertSweep {
            origin: target,
            recruited,
        });
    }

    /// Explicit leave: the opponent fled, surrendered or was pacified.
    pub fn remove_opponent(&mut self, id: EntityId) -> bool {
        let removed = self.opponents.remove(id);
        if removed {
            debug!("{} left the encounter", id);
            self.emit(CombatEvent::OpponentLeft(id));
        }
        removed
    }

    /// Makes `victim` hostile after it was struck: reveals it, adds it to the
    /// opponent set and triggers the alert sweep on first contact.
    pub(crate) fn mark_hostile(&mut self, env: &mut CombatEnv<'_>, victim: EntityId) {
        if env.world.arena().is_player_controlled(victim) {
            return;
        }
        if env.world.reveal(victim) {
            debug!("{} revealed by attack", victim);
        }
        self.add_opponent(env.world.arena(), victim);
        self.alert_nearby_actors(env, victim);
    }

    fn add_opponent(&mut self, arena: &CombatantArena, id: EntityId) -> bool {
        let joined = self.opponents.insert(arena, id);
        if joined {
            debug!("{} joined the encounter", id);
            self.emit(CombatEvent::OpponentJoined(id));
        }
        joined
    }
}
