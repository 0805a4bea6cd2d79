use arrayvec::ArrayVec;

use crate::action::CardinalDirection;
use crate::state::{ArenaError, Combatant, CombatantArena, EntityId, Position};

/// Up to four cardinal neighbours of a tile.
pub type Neighbors = ArrayVec<Position, 4>;

/// World query surface: the tile grid plus the combatant arena living on it.
///
/// Terrain predicates (`is_walkable`, `is_projectile_passable`) ignore
/// occupants; the `can_*` helpers layer occupancy on top.
pub trait WorldQuery {
    fn arena(&self) -> &CombatantArena;
    fn arena_mut(&mut self) -> &mut CombatantArena;

    /// Terrain allows walking onto `position`.
    fn is_walkable(&self, position: Position) -> bool;

    /// Terrain lets a projectile fly through `position`.
    fn is_projectile_passable(&self, position: Position) -> bool;

    /// Shortest cardinal path from `from` to `to` over tiles accepted by
    /// `passable`. The result excludes `from` and ends at `to`; it is empty
    /// when `to` is unreachable or equal to `from`.
    fn find_path(
        &self,
        from: Position,
        to: Position,
        passable: &dyn Fn(Position) -> bool,
    ) -> Vec<Position>;

    /// Tiles crossed by a straight line from `from` to `to`, excluding
    /// `from` and ending at `to`.
    fn line_of_sight(&self, from: Position, to: Position) -> Vec<Position>;

    fn combatant(&self, id: EntityId) -> Option<&Combatant> {
        self.arena().get(id)
    }

    fn actor_at(&self, position: Position) -> Option<EntityId> {
        self.arena().actor_at(position)
    }

    fn can_move_into(&self, position: Position) -> bool {
        self.is_walkable(position) && self.actor_at(position).is_none()
    }

    fn can_project_through(&self, position: Position) -> bool {
        self.is_projectile_passable(position) && self.actor_at(position).is_none()
    }

    /// Cardinal neighbours of `position` accepted by `filter`.
    fn neighbors(&self, position: Position, filter: &dyn Fn(Position) -> bool) -> Neighbors {
        CardinalDirection::ALL
            .iter()
            .map(|&direction| position.step(direction))
            .filter(|&candidate| filter(candidate))
            .collect()
    }

    /// Combatants within `radius` (Chebyshev) of `center` accepted by `filter`.
    fn actors_within(
        &self,
        center: Position,
        radius: u32,
        filter: &dyn Fn(EntityId, &Combatant) -> bool,
    ) -> Vec<EntityId> {
        self.arena()
            .iter()
            .filter(|(id, combatant)| {
                combatant.position.chebyshev(center) <= radius && filter(*id, combatant)
            })
            .map(|(id, _)| id)
            .collect()
    }

    fn move_combatant(&mut self, id: EntityId, to: Position) -> Result<(), ArenaError> {
        self.arena_mut().relocate(id, to)
    }

    /// Clears the hidden flag; returns true if the combatant was hidden.
    fn reveal(&mut self, id: EntityId) -> bool {
        match self.arena_mut().get_mut(id) {
            Some(combatant) if combatant.hidden => {
                combatant.hidden = false;
                true
            }
            _ => false,
        }
    }
}
