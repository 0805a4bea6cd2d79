use std::collections::{HashMap, HashSet};

use game_core::EntityId;

/// Per-turn action bookkeeping, wiped whenever a side's turn begins.
#[derive(Debug, Default, Clone)]
pub struct TurnBudget {
    moves_taken: HashMap<EntityId, u32>,
    primary_used: HashSet<EntityId>,
}

impl TurnBudget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_move(&mut self, id: EntityId) {
        *self.moves_taken.entry(id).or_default() += 1;
    }

    pub fn mark_primary_used(&mut self, id: EntityId) {
        self.primary_used.insert(id);
    }

    pub fn moves_taken(&self, id: EntityId) -> u32 {
        self.moves_taken.get(&id).copied().unwrap_or(0)
    }

    pub fn primary_used(&self, id: EntityId) -> bool {
        self.primary_used.contains(&id)
    }

    /// Moves left out of `allowance` this turn.
    pub fn remaining(&self, id: EntityId, allowance: u32) -> u32 {
        allowance.saturating_sub(self.moves_taken(id))
    }

    pub fn clear(&mut self) {
        self.moves_taken.clear();
        self.primary_used.clear();
    }
}
