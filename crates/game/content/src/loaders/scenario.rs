//! Skirmish scenario loader.
//!
//! A scenario is a rectangular floor with optional walls and the combatants
//! standing on it. Player-controlled combatants form the party in file order.

use std::path::Path;

use game_core::{Combatant, CombatantStats, Position};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One combatant entry in a scenario file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantSpec {
    pub name: String,
    pub position: (i32, i32),
    pub health: u32,
    #[serde(default = "default_movement")]
    pub movement: u32,
    #[serde(default)]
    pub player: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub stats: CombatantStats,
}

impl CombatantSpec {
    pub fn to_combatant(&self) -> Combatant {
        let (x, y) = self.position;
        Combatant {
            movement_allowance: self.movement,
            hidden: self.hidden,
            player_controlled: self.player,
            stats: self.stats,
            ..Combatant::new(self.name.clone(), Position::new(x, y), self.health)
        }
    }
}

fn default_movement() -> u32 {
    Combatant::DEFAULT_MOVEMENT
}

/// Scenario data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub dimensions: (u32, u32),
    #[serde(default)]
    pub walls: Vec<(i32, i32)>,
    pub combatants: Vec<CombatantSpec>,
}

impl Scenario {
    pub fn wall_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.walls.iter().map(|&(x, y)| Position::new(x, y))
    }
}

/// Loader for skirmish scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file and validate it.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        validate(&scenario)?;
        Ok(scenario)
    }
}

fn validate(scenario: &Scenario) -> LoadResult<()> {
    let (width, height) = scenario.dimensions;
    let in_bounds =
        |(x, y): (i32, i32)| x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height;

    if !scenario.combatants.iter().any(|c| c.player) {
        anyhow::bail!("Scenario has no player-controlled combatant");
    }

    let mut occupied = Vec::with_capacity(scenario.combatants.len());
    for spec in &scenario.combatants {
        if !in_bounds(spec.position) {
            anyhow::bail!("{} at {:?} is outside the map", spec.name, spec.position);
        }
        if scenario.walls.contains(&spec.position) {
            anyhow::bail!("{} at {:?} stands inside a wall", spec.name, spec.position);
        }
        if occupied.contains(&spec.position) {
            anyhow::bail!("{} at {:?} overlaps another combatant", spec.name, spec.position);
        }
        occupied.push(spec.position);
    }

    Ok(())
}
