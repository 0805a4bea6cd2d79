//! Caster-facing spell abstraction.
//!
//! Spells ride the same projectile/flourish mechanism as weapon attacks. A
//! spell decides its icon, tint and [`SpellImpact`]; the engine animates it and
//! applies the impact when the animation lands. Resource costs are paid by the
//! spell before it calls into the engine.
use std::fmt;
use std::sync::Arc;

use game_core::{CombatEnv, EntityId, IconRef, Position, Tint};

use crate::combat::CombatState;

/// Non-damaging impact handler (heal, teleport, terrain change, ...).
pub trait SpellEffect: fmt::Debug {
    fn apply(&self, env: &mut CombatEnv<'_>, caster: EntityId, position: Position);
}

/// What happens where a spell lands.
#[derive(Debug, Clone)]
pub enum SpellImpact {
    /// Damages the combatant standing on the impact tile.
    Damage,
    /// Damages every living combatant within `radius` except the caster.
    Area { radius: u32 },
    /// Arbitrary caster-supplied effect.
    Effect(Arc<dyn SpellEffect>),
}

impl SpellImpact {
    /// Offensive impacts pull the struck combatant into the encounter.
    pub fn is_offensive(&self) -> bool {
        !matches!(self, SpellImpact::Effect(_))
    }
}

/// One concrete casting request handed to [`CombatState::cast_spell`].
#[derive(Debug, Clone)]
pub struct SpellCast {
    pub icon: IconRef,
    pub tint: Tint,
    /// Travel along line of sight rather than appear on the target tile.
    pub projectile: bool,
    pub impact: SpellImpact,
}

pub trait Spell: fmt::Debug {
    fn name(&self) -> &str;

    /// Targeted spells wait for a confirmed position; others land on the caster.
    fn is_targeted(&self) -> bool;

    fn tint(&self) -> Tint;

    /// Casting this spell counts as player aggression and re-arms combat.
    fn is_offensive(&self) -> bool {
        true
    }

    fn cast_on_target(
        &self,
        combat: &mut CombatState,
        env: &mut CombatEnv<'_>,
        caster: EntityId,
        position: Position,
    );
}

/// Data-driven spell: fixed icon, tint and impact.
#[derive(Debug, Clone)]
pub struct BoltSpell {
    name: String,
    icon: IconRef,
    tint: Tint,
    impact: SpellImpact,
    targeted: bool,
    projectile: bool,
}

impl BoltSpell {
    pub const ATLAS: &'static str = "spells";

    /// Targeted projectile that damages whatever it hits.
    pub fn bolt(name: impl Into<String>, tint: Tint) -> Self {
        Self {
            name: name.into(),
            icon: IconRef::new(Self::ATLAS, "bolt"),
            tint,
            impact: SpellImpact::Damage,
            targeted: true,
            projectile: true,
        }
    }

    /// Targeted projectile that bursts over an area on impact.
    pub fn burst(name: impl Into<String>, tint: Tint, radius: u32) -> Self {
        Self {
            name: name.into(),
            icon: IconRef::new(Self::ATLAS, "burst"),
            tint,
            impact: SpellImpact::Area { radius },
            targeted: true,
            projectile: true,
        }
    }

    /// Flourish on the target tile running a custom effect.
    pub fn effect(name: impl Into<String>, tint: Tint, effect: Arc<dyn SpellEffect>) -> Self {
        Self {
            name: name.into(),
            icon: IconRef::new(Self::ATLAS, "glyph"),
            tint,
            impact: SpellImpact::Effect(effect),
            targeted: true,
            projectile: false,
        }
    }

    #[must_use]
    pub fn untargeted(mut self) -> Self {
        self.targeted = false;
        self
    }
}

impl Spell for BoltSpell {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_targeted(&self) -> bool {
        self.targeted
    }

    fn tint(&self) -> Tint {
        self.tint
    }

    fn is_offensive(&self) -> bool {
        self.impact.is_offensive()
    }

    fn cast_on_target(
        &self,
        combat: &mut CombatState,
        env: &mut CombatEnv<'_>,
        caster: EntityId,
        position: Position,
    ) {
        combat.cast_spell(
            env,
            caster,
            position,
            SpellCast {
                icon: self.icon.clone(),
                tint: self.tint,
                projectile: self.projectile,
                impact: self.impact.clone(),
            },
        );
    }
}
