//! Utility functions for xtask commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use combat_runtime::{GridWorld, PartyRoster};
use game_content::Scenario;
use game_core::{CombatConfig, EntityId};

/// Bundled content directory of the `game-content` crate.
pub fn content_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("game")
        .join("content")
        .join("data")
}

/// Config from `path` when given, otherwise defaults. `COMBAT_*`
/// environment overrides apply either way.
pub fn resolve_config(path: Option<&std::path::Path>) -> Result<CombatConfig> {
    let config = match path {
        Some(path) => game_content::ConfigLoader::load(path)?,
        None => CombatConfig::default(),
    };
    Ok(config.with_env_overrides().normalized())
}

/// Spawns every scenario combatant into a fresh grid. The party is made of
/// the player-controlled entries in file order.
pub fn build_world(scenario: &Scenario) -> Result<(GridWorld, PartyRoster)> {
    let (width, height) = scenario.dimensions;
    let mut world = GridWorld::open(width, height);
    for wall in scenario.wall_positions() {
        world.add_wall(wall);
    }

    let mut party: Vec<EntityId> = Vec::new();
    for spec in &scenario.combatants {
        let id = world
            .spawn(spec.to_combatant())
            .with_context(|| format!("Failed to place {}", spec.name))?;
        if spec.player {
            party.push(id);
        }
    }

    Ok((world, PartyRoster::new(party)))
}
