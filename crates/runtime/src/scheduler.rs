//! Single-slot cooperative step scheduler.
//!
//! A [`StepScript`] is an explicit state machine that yields commands and
//! timed suspensions. The scheduler resumes it only once enough elapsed time
//! has been fed in through [`StepScheduler::step`], so scripted movement plays
//! back deterministically under an injected clock. The commands themselves are
//! applied by the caller; the scheduler never touches the world.
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use game_core::{EntityId, Position};

/// World mutation requested by a running script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepCommand {
    Move { actor: EntityId, to: Position },
    Melee { attacker: EntityId, target: EntityId },
}

/// What a script produced when resumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepYield {
    Command(StepCommand),
    Suspend(Duration),
    Finished,
}

pub trait StepScript: fmt::Debug {
    /// Runs the script up to its next yield point.
    fn resume(&mut self) -> StepYield;

    /// Combatant driving the script, for logging and abort handling.
    fn actor(&self) -> EntityId;
}

#[derive(Debug, Default)]
pub struct StepScheduler {
    script: Option<Box<dyn StepScript>>,
    suspended_for: Duration,
}

impl StepScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.script.is_some()
    }

    /// Installs `script` if the slot is free. Returns false when busy.
    pub fn start(&mut self, script: Box<dyn StepScript>) -> bool {
        if self.script.is_some() {
            return false;
        }
        self.script = Some(script);
        self.suspended_for = Duration::ZERO;
        true
    }

    /// Feeds `elapsed` time to the running script, pushing any commands it
    /// yields into `out`. Returns whether a script is still running.
    pub fn step(&mut self, elapsed: Duration, out: &mut Vec<StepCommand>) -> bool {
        let Some(script) = self.script.as_mut() else {
            return false;
        };

        if self.suspended_for > elapsed {
            self.suspended_for -= elapsed;
            return true;
        }
        self.suspended_for = Duration::ZERO;

        loop {
            match script.resume() {
                StepYield::Command(command) => out.push(command),
                StepYield::Suspend(duration) if duration.is_zero() => {}
                StepYield::Suspend(duration) => {
                    self.suspended_for = duration;
                    return true;
                }
                StepYield::Finished => {
                    self.script = None;
                    return false;
                }
            }
        }
    }

    /// Drops the running script after one of its commands could not be applied.
    pub(crate) fn abort(&mut self) -> Option<EntityId> {
        self.suspended_for = Duration::ZERO;
        self.script.take().map(|script| script.actor())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MovementPhase {
    Step,
    Pause,
    Strike,
    Done,
}

/// Walks a path one tile at a time, pausing between steps, then optionally
/// strikes a target.
#[derive(Debug)]
pub struct MovementScript {
    actor: EntityId,
    path: VecDeque<Position>,
    target: Option<EntityId>,
    delay: Duration,
    phase: MovementPhase,
}

impl MovementScript {
    pub fn new(
        actor: EntityId,
        path: Vec<Position>,
        target: Option<EntityId>,
        delay: Duration,
    ) -> Self {
        Self {
            actor,
            path: path.into(),
            target,
            delay,
            phase: MovementPhase::Step,
        }
    }
}

impl StepScript for MovementScript {
    fn resume(&mut self) -> StepYield {
        loop {
            match self.phase {
                MovementPhase::Step => match self.path.pop_front() {
                    Some(to) => {
                        self.phase = MovementPhase::Pause;
                        return StepYield::Command(StepCommand::Move {
                            actor: self.actor,
                            to,
                        });
                    }
                    None => self.phase = MovementPhase::Strike,
                },
                MovementPhase::Pause => {
                    self.phase = MovementPhase::Step;
                    return StepYield::Suspend(self.delay);
                }
                MovementPhase::Strike => {
                    self.phase = MovementPhase::Done;
                    if let Some(target) = self.target.take() {
                        return StepYield::Command(StepCommand::Melee {
                            attacker: self.actor,
                            target,
                        });
                    }
                }
                MovementPhase::Done => return StepYield::Finished,
            }
        }
    }

    fn actor(&self) -> EntityId {
        self.actor
    }
}
