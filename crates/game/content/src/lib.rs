//! Data-driven combat content and its loaders.
//!
//! This crate reads the files that parameterize an encounter:
//! - Combat tunables (TOML, into [`game_core::CombatConfig`])
//! - Skirmish scenarios (RON: map size, walls, combatants)
//!
//! Content is consumed when an encounter is set up and never appears in
//! combat state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CombatantSpec, ConfigLoader, Scenario, ScenarioLoader};
