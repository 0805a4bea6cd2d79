#![allow(dead_code)]

use std::time::Duration;

use combat_runtime::{CombatEvent, CombatState, GridWorld, HeadlessPresentation, PartyRoster, StatRules};
use game_core::{
    AttackActionType, CombatConfig, CombatEnv, CombatRules, Combatant, EntityId, Position,
    WorldQuery,
};

pub const TICK: Duration = Duration::from_millis(16);

/// Rules that always hit and record every damage and death call.
#[derive(Debug)]
pub struct CountingRules {
    inner: StatRules,
    pub damage_calls: Vec<(EntityId, EntityId, AttackActionType)>,
    pub deaths: Vec<EntityId>,
}

impl CountingRules {
    pub fn new() -> Self {
        Self {
            inner: StatRules::always_hit(),
            damage_calls: Vec::new(),
            deaths: Vec::new(),
        }
    }

    pub fn damage_on(&self, target: EntityId) -> usize {
        self.damage_calls.iter().filter(|(_, t, _)| *t == target).count()
    }
}

impl CombatRules for CountingRules {
    fn resolve_hit(&mut self, world: &dyn WorldQuery, attacker: EntityId, target: EntityId) -> bool {
        self.inner.resolve_hit(world, attacker, target)
    }

    fn apply_damage(
        &mut self,
        world: &mut dyn WorldQuery,
        attacker: EntityId,
        target: EntityId,
        attack: AttackActionType,
    ) -> u32 {
        self.damage_calls.push((attacker, target, attack));
        self.inner.apply_damage(world, attacker, target, attack)
    }

    fn handle_death(&mut self, world: &mut dyn WorldQuery, victim: EntityId) {
        self.deaths.push(victim);
        self.inner.handle_death(world, victim);
    }
}

/// A world, its collaborators and the combat state driving them.
pub struct Fixture {
    pub world: GridWorld,
    pub rules: CountingRules,
    pub party: PartyRoster,
    pub presentation: HeadlessPresentation,
    pub combat: CombatState,
    pub events: Vec<CombatEvent>,
}

impl Fixture {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, CombatConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: CombatConfig) -> Self {
        Self {
            world: GridWorld::open(width, height),
            rules: CountingRules::new(),
            party: PartyRoster::default(),
            presentation: HeadlessPresentation::new(),
            combat: CombatState::new(config),
            events: Vec::new(),
        }
    }

    /// Spawns a party member and appends it to the roster.
    pub fn hero(&mut self, name: &str, position: Position, health: u32) -> EntityId {
        let id = self
            .world
            .spawn(Combatant::new(name, position, health).player_controlled())
            .unwrap();
        let mut members = game_core::PartyControl::members(&self.party);
        members.push(id);
        self.party = PartyRoster::new(members);
        id
    }

    pub fn npc(&mut self, combatant: Combatant) -> EntityId {
        self.world.spawn(combatant).unwrap()
    }

    pub fn run<R>(&mut self, f: impl FnOnce(&mut CombatState, &mut CombatEnv<'_>) -> R) -> R {
        let mut env = CombatEnv::new(
            &mut self.world,
            &mut self.rules,
            &mut self.party,
            &mut self.presentation,
        );
        let result = f(&mut self.combat, &mut env);
        self.events.extend(self.combat.drain_events());
        result
    }

    pub fn tick(&mut self) {
        self.run(|combat, env| combat.update(env, TICK));
    }

    /// Ticks until nothing is animating or scripted. Returns the ticks spent.
    pub fn settle(&mut self) -> usize {
        let mut ticks = 0;
        while self.combat.is_busy() {
            assert!(ticks < 10_000, "combat never settled");
            self.tick();
            ticks += 1;
        }
        ticks
    }

    /// Ticks until `done` holds, failing after `limit` ticks.
    pub fn tick_until(&mut self, limit: usize, mut done: impl FnMut(&Fixture) -> bool) {
        for _ in 0..limit {
            if done(self) {
                return;
            }
            self.tick();
        }
        assert!(done(self), "condition not reached within {limit} ticks");
    }

    pub fn health(&self, id: EntityId) -> u32 {
        self.world.combatant(id).map_or(0, |c| c.health.current)
    }

    pub fn position(&self, id: EntityId) -> Position {
        self.world.combatant(id).unwrap().position
    }

    pub fn count_events(&self, predicate: impl Fn(&CombatEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }
}
