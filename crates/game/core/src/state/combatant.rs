use super::{EntityId, Position, ResourceMeter};

/// Errors raised by [`CombatantArena`] mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    #[error("combatant {0} not found")]
    UnknownCombatant(EntityId),

    #[error("tile {position} is occupied by {occupant}")]
    Occupied {
        position: Position,
        occupant: EntityId,
    },
}

/// Offensive and defensive numbers consumed by the rules surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatantStats {
    pub attack: i32,
    pub defense: i32,
    pub accuracy: i32,
    pub evasion: i32,
}

impl Default for CombatantStats {
    fn default() -> Self {
        Self {
            attack: 3,
            defense: 0,
            accuracy: 0,
            evasion: 0,
        }
    }
}

/// Everything the combat engine needs to know about a single participant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub position: Position,
    pub health: ResourceMeter,
    /// Tiles this combatant may move per turn.
    pub movement_allowance: u32,
    pub hidden: bool,
    pub player_controlled: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: CombatantStats,
}

impl Combatant {
    pub const DEFAULT_MOVEMENT: u32 = 4;

    pub fn new(name: impl Into<String>, position: Position, max_health: u32) -> Self {
        Self {
            name: name.into(),
            position,
            health: ResourceMeter::full(max_health),
            movement_allowance: Self::DEFAULT_MOVEMENT,
            hidden: false,
            player_controlled: false,
            stats: CombatantStats::default(),
        }
    }

    #[must_use]
    pub fn with_movement(mut self, movement_allowance: u32) -> Self {
        self.movement_allowance = movement_allowance;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: CombatantStats) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn player_controlled(mut self) -> Self {
        self.player_controlled = true;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }
}

/// Slot storage handing out stable [`EntityId`] handles.
///
/// Removing a combatant leaves an empty slot behind, so handles held by the
/// engine never alias a later spawn.
#[derive(Clone, Debug, Default)]
pub struct CombatantArena {
    slots: Vec<Option<Combatant>>,
}

impl CombatantArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a combatant and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns `ArenaError::Occupied` if a live combatant already stands on the tile.
    pub fn spawn(&mut self, combatant: Combatant) -> Result<EntityId, ArenaError> {
        if let Some(occupant) = self.actor_at(combatant.position) {
            return Err(ArenaError::Occupied {
                position: combatant.position,
                occupant,
            });
        }
        let id = EntityId(self.slots.len() as u32);
        self.slots.push(Some(combatant));
        Ok(id)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Combatant> {
        self.slots.get_mut(id.index()).and_then(Option::take)
    }

    pub fn get(&self, id: EntityId) -> Option<&Combatant> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Combatant> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Returns true if the handle resolves to a player-controlled combatant.
    pub fn is_player_controlled(&self, id: EntityId) -> bool {
        self.get(id).is_some_and(|c| c.player_controlled)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Combatant)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|c| (EntityId(index as u32), c)))
    }

    /// Live combatant standing on `position`, if any. Corpses do not occupy tiles.
    pub fn actor_at(&self, position: Position) -> Option<EntityId> {
        self.iter()
            .find(|(_, c)| c.is_alive() && c.position == position)
            .map(|(id, _)| id)
    }

    /// Moves a combatant to `position`.
    ///
    /// # Errors
    ///
    /// Fails if the handle is stale or another live combatant holds the tile.
    pub fn relocate(&mut self, id: EntityId, position: Position) -> Result<(), ArenaError> {
        if let Some(occupant) = self.actor_at(position).filter(|&occupant| occupant != id) {
            return Err(ArenaError::Occupied { position, occupant });
        }
        let combatant = self.get_mut(id).ok_or(ArenaError::UnknownCombatant(id))?;
        combatant.position = position;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
