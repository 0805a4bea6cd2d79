//! Pure combat arithmetic used by rules implementations.
//!
//! The engine itself never rolls dice or computes damage; it asks the
//! [`crate::env::CombatRules`] surface. These helpers are what the bundled
//! rules implementation uses, and are kept side-effect free.

pub mod damage;
pub mod hit;

pub use damage::{DamageParams, apply_damage, calculate_damage};
pub use hit::{HitChanceParams, calculate_hit_chance, check_hit};
