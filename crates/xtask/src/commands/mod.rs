//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check_config;
mod skirmish;

pub use check_config::CheckConfig;
pub use skirmish::Skirmish;
