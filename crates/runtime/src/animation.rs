//! Hit-animation queue.
//!
//! Every attack leaves a short-lived visual on the map: a flourish on a single
//! tile or a projectile travelling along a path. Each animation is an
//! independent countdown advanced once per tick, whatever the turn phase. When
//! the countdown runs out on the final path position the animation is removed
//! and its [`HitEffect`] is handed back to the caller to apply. Because
//! damage, death and aggro changes live in those effects, they always land
//! strictly after the visual finishes.
use game_core::{EntityId, HitSprite, IconRef, Position, Tint};

use crate::spell::SpellImpact;

/// Deferred consequence of an attack, applied when its animation completes.
#[derive(Debug, Clone)]
pub enum HitEffect {
    Melee {
        attacker: EntityId,
        target: EntityId,
        hit: bool,
    },
    Projectile {
        attacker: EntityId,
        target: Option<EntityId>,
    },
    Spell {
        caster: EntityId,
        position: Position,
        impact: SpellImpact,
    },
}

impl HitEffect {
    /// Combatant whose primary action this effect consumes.
    pub fn actor(&self) -> EntityId {
        match self {
            HitEffect::Melee { attacker, .. } | HitEffect::Projectile { attacker, .. } => {
                *attacker
            }
            HitEffect::Spell { caster, .. } => *caster,
        }
    }
}

/// A timed, positioned visual effect with an optional completion effect.
#[derive(Debug, Clone)]
pub struct HitAnimation {
    path: Vec<Position>,
    index: usize,
    ticks_left: u32,
    ticks_per_step: u32,
    icon: IconRef,
    tint: Tint,
    on_complete: Option<HitEffect>,
}

impl HitAnimation {
    /// Single-tile animation lasting `ticks`.
    pub fn flourish(position: Position, ticks: u32, icon: IconRef, tint: Tint) -> Self {
        Self::travelling(vec![position], ticks, icon, tint)
    }

    /// Animation visiting each tile of `path`, `ticks_per_step` ticks apiece.
    ///
    /// An empty path completes on its first tick.
    pub fn travelling(path: Vec<Position>, ticks_per_step: u32, icon: IconRef, tint: Tint) -> Self {
        let ticks_per_step = ticks_per_step.max(1);
        Self {
            path,
            index: 0,
            ticks_left: ticks_per_step,
            ticks_per_step,
            icon,
            tint,
            on_complete: None,
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: HitEffect) -> Self {
        self.on_complete = Some(effect);
        self
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn ticks_left(&self) -> u32 {
        self.ticks_left
    }

    pub fn current_position(&self) -> Option<Position> {
        self.path.get(self.index).copied()
    }

    pub fn effect(&self) -> Option<&HitEffect> {
        self.on_complete.as_ref()
    }

    pub fn sprite(&self) -> Option<HitSprite> {
        self.current_position().map(|position| HitSprite {
            position,
            icon: self.icon.clone(),
            tint: self.tint,
        })
    }

    fn is_at_final_position(&self) -> bool {
        self.index + 1 >= self.path.len()
    }

    /// Advances one tick. Returns true once the animation has finished.
    fn tick(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        if self.ticks_left > 0 {
            return false;
        }
        if self.is_at_final_position() {
            return true;
        }
        self.index += 1;
        self.ticks_left = self.ticks_per_step;
        false
    }
}

/// Flat list of independent animations.
#[derive(Debug, Default)]
pub struct HitAnimationQueue {
    animations: Vec<HitAnimation>,
}

impl HitAnimationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, animation: HitAnimation) {
        self.animations.push(animation);
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HitAnimation> {
        self.animations.iter()
    }

    /// Ticks every animation once and returns the effects of those that
    /// finished, in queue order. Finished animations are already removed, so
    /// applying an effect may safely enqueue new animations.
    pub fn advance(&mut self) -> Vec<HitEffect> {
        let mut completed = Vec::new();
        let mut index = 0;
        while index < self.animations.len() {
            if self.animations[index].tick() {
                let finished = self.animations.remove(index);
                completed.extend(finished.on_complete);
            } else {
                index += 1;
            }
        }
        completed
    }

    pub fn sprites(&self) -> Vec<HitSprite> {
        self.animations.iter().filter_map(HitAnimation::sprite).collect()
    }
}
