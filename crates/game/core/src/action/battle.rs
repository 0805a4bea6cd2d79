use crate::state::{EntityId, Position};

/// Channel through which an attack is delivered.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackActionType {
    /// Adjacent strike with a single-tile flourish.
    #[default]
    Melee,
    /// Projectile traced along line of sight.
    Ranged,
    /// Caster-supplied effect riding the projectile/flourish mechanism.
    Spell,
}

/// Output of the AI decision procedure.
///
/// `path` excludes the actor's current tile and is already truncated to the
/// remaining movement budget. The decision means "end turn" iff both `path`
/// and `target` are empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BattleAction {
    pub path: Vec<Position>,
    /// Struck in melee once the path is walked.
    pub target: Option<EntityId>,
}

impl BattleAction {
    /// Decision that ends the actor's turn without doing anything.
    pub fn end_turn() -> Self {
        Self::default()
    }

    /// Strike `target` without moving.
    pub fn attack(target: EntityId) -> Self {
        Self {
            path: Vec::new(),
            target: Some(target),
        }
    }

    pub fn is_end_turn(&self) -> bool {
        self.path.is_empty() && self.target.is_none()
    }
}
