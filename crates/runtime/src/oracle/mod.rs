//! Reference implementations of the collaborator surfaces.
//!
//! The engine only sees `game-core` traits. These adapters back them with a
//! plain tile grid, stat-driven dice, a fixed party roster and a recording
//! presentation layer, so encounters can run headless in tests and from the
//! developer CLI.
mod party;
mod presentation;
mod rules;
mod world;

pub use party::PartyRoster;
pub use presentation::HeadlessPresentation;
pub use rules::StatRules;
pub use world::GridWorld;
