//! Damage calculation and application.

/// Balance parameters for damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageParams {
    /// Divisor applied to defense before subtracting it.
    pub defense_divisor: u32,
    /// Floor applied after mitigation.
    pub minimum: u32,
}

impl Default for DamageParams {
    fn default() -> Self {
        Self {
            defense_divisor: 2,
            minimum: 1,
        }
    }
}

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// base_damage = power + attack
/// final_damage = max(base_damage - defense / divisor, minimum)
/// ```
pub fn calculate_damage(power: u32, attack: i32, defense: i32, params: &DamageParams) -> u32 {
    let base_damage = power + attack.max(0) as u32;
    let reduction = defense.max(0) as u32 / params.defense_divisor.max(1);
    base_damage.saturating_sub(reduction).max(params.minimum)
}

/// Apply damage to current HP, clamped at zero.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}
