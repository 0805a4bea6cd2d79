//! Hit chance and accuracy calculations.

/// Balance parameters for the hit roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitChanceParams {
    pub base: i32,
    pub min: u32,
    pub max: u32,
}

impl Default for HitChanceParams {
    fn default() -> Self {
        Self {
            base: 75,
            min: 5,
            max: 95,
        }
    }
}

/// Calculate hit chance based on accuracy vs evasion.
///
/// # Formula
///
/// ```text
/// hit_chance = base + (accuracy - evasion)
/// clamped to [min, max]
/// ```
pub fn calculate_hit_chance(accuracy: i32, evasion: i32, params: &HitChanceParams) -> u32 {
    let hit_chance = params.base + (accuracy - evasion);
    hit_chance.clamp(params.min as i32, params.max as i32) as u32
}

/// Returns `true` if a roll in `1..=100` lands inside the hit chance.
pub fn check_hit(accuracy: i32, evasion: i32, roll: u32, params: &HitChanceParams) -> bool {
    roll <= calculate_hit_chance(accuracy, evasion, params)
}
