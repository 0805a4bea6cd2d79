//! Bounded tile grid served through [`game_core::WorldQuery`].
use std::collections::{HashMap, HashSet, VecDeque};

use game_core::{
    ArenaError, CardinalDirection, Combatant, CombatantArena, EntityId, Position, WorldQuery,
};

/// Rectangular map of floor and wall tiles plus the combatants standing on it.
///
/// Walls block both walking and projectiles. Tiles outside the rectangle do
/// not exist.
#[derive(Debug, Clone, Default)]
pub struct GridWorld {
    width: u32,
    height: u32,
    walls: HashSet<Position>,
    arena: CombatantArena,
}

impl GridWorld {
    /// All-floor map of the given size.
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            walls: HashSet::new(),
            arena: CombatantArena::new(),
        }
    }

    #[must_use]
    pub fn with_wall(mut self, position: Position) -> Self {
        self.add_wall(position);
        self
    }

    pub fn add_wall(&mut self, position: Position) {
        self.walls.insert(position);
    }

    pub fn spawn(&mut self, combatant: Combatant) -> Result<EntityId, ArenaError> {
        self.arena.spawn(combatant)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub fn is_wall(&self, position: Position) -> bool {
        self.walls.contains(&position)
    }
}

impl WorldQuery for GridWorld {
    fn arena(&self) -> &CombatantArena {
        &self.arena
    }

    fn arena_mut(&mut self) -> &mut CombatantArena {
        &mut self.arena
    }

    fn is_walkable(&self, position: Position) -> bool {
        self.contains(position) && !self.is_wall(position)
    }

    fn is_projectile_passable(&self, position: Position) -> bool {
        self.is_walkable(position)
    }

    /// Breadth-first search in [`CardinalDirection::ALL`] order, so ties
    /// resolve the same way every time.
    fn find_path(
        &self,
        from: Position,
        to: Position,
        passable: &dyn Fn(Position) -> bool,
    ) -> Vec<Position> {
        if from == to || !self.contains(to) {
            return Vec::new();
        }

        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut frontier = VecDeque::from([from]);
        while let Some(current) = frontier.pop_front() {
            if current == to {
                break;
            }
            for direction in CardinalDirection::ALL {
                let next = current.step(direction);
                if next == from
                    || came_from.contains_key(&next)
                    || !self.contains(next)
                    || !passable(next)
                {
                    continue;
                }
                came_from.insert(next, current);
                frontier.push_back(next);
            }
        }

        if !came_from.contains_key(&to) {
            return Vec::new();
        }

        let mut path = vec![to];
        let mut cursor = to;
        while let Some(&previous) = came_from.get(&cursor) {
            if previous == from {
                break;
            }
            path.push(previous);
            cursor = previous;
        }
        path.reverse();
        path
    }

    /// Bresenham line, excluding `from`.
    fn line_of_sight(&self, from: Position, to: Position) -> Vec<Position> {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };

        let mut line = Vec::with_capacity(dx.max(-dy) as usize);
        let (mut x, mut y) = (from.x, from.y);
        let mut error = dx + dy;
        while (x, y) != (to.x, to.y) {
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x += sx;
            }
            if doubled <= dx {
                error += dx;
                y += sy;
            }
            line.push(Position::new(x, y));
        }
        line
    }
}
