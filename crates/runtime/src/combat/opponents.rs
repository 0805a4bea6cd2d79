use game_core::{CombatantArena, EntityId};

/// Hostile combatants of the current encounter, in the order they joined.
///
/// Never holds a player-controlled combatant: [`OpponentSet::insert`] checks
/// the arena and refuses them.
#[derive(Debug, Default, Clone)]
pub struct OpponentSet {
    members: Vec<EntityId>,
}

impl OpponentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` unless it is already present, unknown, or player-controlled.
    /// Returns true if the set grew.
    pub fn insert(&mut self, arena: &CombatantArena, id: EntityId) -> bool {
        let eligible = arena.get(id).is_some_and(|c| !c.player_controlled);
        if !eligible || self.contains(id) {
            return false;
        }
        self.members.push(id);
        true
    }

    pub fn remove(&mut self, id: EntityId) -> bool {
        let before = self.members.len();
        self.members.retain(|&member| member != id);
        self.members.len() != before
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.members.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.members.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<EntityId> {
        self.members.clone()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Drops members that are gone from the arena or dead, returning them.
    pub(crate) fn purge_fallen(&mut self, arena: &CombatantArena) -> Vec<EntityId> {
        let (kept, fallen) = self
            .members
            .iter()
            .partition(|&&id| arena.get(id).is_some_and(|c| c.is_alive()));
        self.members = kept;
        fallen
    }
}
