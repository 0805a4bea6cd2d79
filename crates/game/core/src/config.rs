use std::env;
use std::time::Duration;

/// Combat tunables shared by the runtime and tooling.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Radius (Chebyshev) of the one-shot alert sweep around an engaged NPC.
    pub alert_radius: u32,
    /// Real-time pause between steps of a scheduled movement.
    pub step_delay_ms: u64,
    /// Ticks a melee flourish stays on screen.
    pub melee_flourish_ticks: u32,
    /// Ticks a projectile spends on each tile of its path.
    pub projectile_ticks_per_step: u32,
    /// Maximum reach of a direction-projected target.
    pub projection_range: u32,
}

impl CombatConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ALERT_RADIUS: u32 = 6;
    pub const DEFAULT_STEP_DELAY_MS: u64 = 150;
    pub const DEFAULT_MELEE_FLOURISH_TICKS: u32 = 8;
    pub const DEFAULT_PROJECTILE_TICKS_PER_STEP: u32 = 2;
    pub const DEFAULT_PROJECTION_RANGE: u32 = 8;

    pub fn new() -> Self {
        Self {
            alert_radius: Self::DEFAULT_ALERT_RADIUS,
            step_delay_ms: Self::DEFAULT_STEP_DELAY_MS,
            melee_flourish_ticks: Self::DEFAULT_MELEE_FLOURISH_TICKS,
            projectile_ticks_per_step: Self::DEFAULT_PROJECTILE_TICKS_PER_STEP,
            projection_range: Self::DEFAULT_PROJECTION_RANGE,
        }
    }

    pub fn with_alert_radius(mut self, alert_radius: u32) -> Self {
        self.alert_radius = alert_radius;
        self
    }

    pub fn with_step_delay_ms(mut self, step_delay_ms: u64) -> Self {
        self.step_delay_ms = step_delay_ms;
        self
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// Defaults overridden by process environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies process environment overrides on top of `self`.
    ///
    /// Environment variables:
    /// - `COMBAT_ALERT_RADIUS` - Alert sweep radius (default: 6)
    /// - `COMBAT_STEP_DELAY_MS` - Pause between scheduled steps (default: 150)
    /// - `COMBAT_PROJECTION_RANGE` - Direction targeting reach (default: 8)
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Applies overrides read through `lookup`. Unset or unparsable values are
    /// ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(radius) = parse_var::<u32>(&lookup, "COMBAT_ALERT_RADIUS") {
            self.alert_radius = radius;
        }
        if let Some(delay) = parse_var::<u64>(&lookup, "COMBAT_STEP_DELAY_MS") {
            self.step_delay_ms = delay;
        }
        if let Some(range) = parse_var::<u32>(&lookup, "COMBAT_PROJECTION_RANGE") {
            self.projection_range = range.max(1);
        }
        self
    }

    /// Animation timings must be at least one tick or nothing would ever draw.
    pub fn normalized(mut self) -> Self {
        self.melee_flourish_ticks = self.melee_flourish_ticks.max(1);
        self.projectile_ticks_per_step = self.projectile_ticks_per_step.max(1);
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    lookup(key).and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_clamps_zero_tick_timings() {
        let config = CombatConfig {
            melee_flourish_ticks: 0,
            projectile_ticks_per_step: 0,
            ..CombatConfig::default()
        }
        .normalized();

        assert_eq!(config.melee_flourish_ticks, 1);
        assert_eq!(config.projectile_ticks_per_step, 1);
    }

    #[test]
    fn overrides_apply_over_a_loaded_config() {
        let loaded = CombatConfig::default().with_alert_radius(2).with_step_delay_ms(40);

        let config = loaded.with_overrides(|key| match key {
            "COMBAT_ALERT_RADIUS" => Some(" 9 ".to_string()),
            "COMBAT_PROJECTION_RANGE" => Some("0".to_string()),
            "COMBAT_STEP_DELAY_MS" => Some("soon".to_string()),
            _ => None,
        });

        assert_eq!(config.alert_radius, 9);
        assert_eq!(config.projection_range, 1);
        assert_eq!(config.step_delay_ms, 40);
    }
}
