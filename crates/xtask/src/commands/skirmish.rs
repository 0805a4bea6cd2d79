//! Run a scenario headless.
//!
//! The party opens with a volley at the nearest visible opponent, then both
//! sides fight on autopilot until the encounter ends or the tick limit runs
//! out.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use combat_runtime::{CombatEvent, CombatState, HeadlessPresentation, StatRules};
use console::style;
use game_content::ScenarioLoader;
use game_core::{CombatEnv, EntityId, PartyControl, WorldQuery};
use serde::Serialize;
use tracing::info;

use crate::utils;

/// Run a scenario headless with both sides on autopilot
#[derive(Parser, Debug)]
pub struct Skirmish {
    /// Scenario file (defaults to the bundled ambush.ron)
    #[arg(value_name = "SCENARIO")]
    scenario: Option<PathBuf>,

    /// Combat config file (defaults to COMBAT_* environment overrides)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for hit rolls
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Simulated milliseconds per tick
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Give up after this many ticks
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable outcome
    Summary,
    /// JSON report
    Json,
}

#[derive(Debug, Serialize)]
struct SkirmishReport {
    ticks: u64,
    outcome: &'static str,
    survivors: Vec<String>,
    fallen: Vec<String>,
    attacks: usize,
}

impl Skirmish {
    pub fn execute(self) -> Result<()> {
        let scenario_path = self
            .scenario
            .clone()
            .unwrap_or_else(|| utils::content_dir().join("scenarios").join("ambush.ron"));
        let scenario = ScenarioLoader::load(&scenario_path)
            .with_context(|| format!("Failed to load scenario {}", scenario_path.display()))?;
        let config = utils::resolve_config(self.config.as_deref())?;

        let (mut world, mut party) = utils::build_world(&scenario)?;
        let mut rules = StatRules::seeded(self.seed);
        let mut presentation = HeadlessPresentation::new();
        let mut combat = CombatState::new(config);

        let avatar = party.avatar();
        let opening = nearest_visible_opponent(&world, avatar)
            .context("Scenario has no visible opponent to open on")?;
        info!("party opens fire on {}", opening);

        let elapsed = Duration::from_millis(self.tick_ms);
        let mut ticks = 0;
        let mut attacks = 0;
        {
            let mut env = CombatEnv::new(&mut world, &mut rules, &mut party, &mut presentation);
            combat.party_volley(&mut env, opening);
            combat.set_party_auto_attacks(true);

            while ticks < self.max_ticks {
                combat.update(&mut env, elapsed);
                ticks += 1;
                for event in combat.drain_events() {
                    if matches!(event, CombatEvent::AttackResolved { .. }) {
                        attacks += 1;
                    }
                    log_event(&event);
                }
                if !combat.is_in_combat() && !combat.is_busy() {
                    break;
                }
                if party_wiped(&*env.world, &*env.party) {
                    break;
                }
            }
        }

        let report = report(&world, &party, ticks, attacks, combat.is_in_combat());
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Summary => print_summary(&report),
        }
        Ok(())
    }
}

fn nearest_visible_opponent(
    world: &dyn WorldQuery,
    avatar: EntityId,
) -> Option<game_core::Position> {
    let origin = world.combatant(avatar)?.position;
    world
        .arena()
        .iter()
        .filter(|(_, c)| !c.player_controlled && !c.hidden && c.is_alive())
        .map(|(_, c)| c.position)
        .min_by_key(|position| position.manhattan(origin))
}

fn party_wiped(world: &dyn WorldQuery, party: &dyn PartyControl) -> bool {
    party
        .members()
        .into_iter()
        .all(|member| world.combatant(member).is_none_or(|c| !c.is_alive()))
}

fn log_event(event: &CombatEvent) {
    match event {
        CombatEvent::AttackResolved {
            attacker,
            target,
            attack,
            damage: Some(damage),
        } => info!("{} {} {} for {}", attacker, attack, target, damage),
        CombatEvent::AttackResolved {
            attacker, target, ..
        } => info!("{} missed {}", attacker, target),
        other => info!("{:?}", other),
    }
}

fn report(
    world: &dyn WorldQuery,
    party: &dyn PartyControl,
    ticks: u64,
    attacks: usize,
    still_fighting: bool,
) -> SkirmishReport {
    let members = party.members();
    let (survivors, fallen): (Vec<_>, Vec<_>) = world
        .arena()
        .iter()
        .partition(|(_, c)| c.is_alive());

    let outcome = if party_wiped(world, party) {
        "defeat"
    } else if still_fighting {
        "undecided"
    } else {
        "victory"
    };
    let label = |(id, c): (EntityId, &game_core::Combatant)| {
        let side = if members.contains(&id) { "party" } else { "foe" };
        format!("{} ({side}, {}/{} hp)", c.name, c.health.current, c.health.maximum)
    };

    SkirmishReport {
        ticks,
        outcome,
        survivors: survivors.into_iter().map(label).collect(),
        fallen: fallen.into_iter().map(label).collect(),
        attacks,
    }
}

fn print_summary(report: &SkirmishReport) {
    let headline = match report.outcome {
        "victory" => style(report.outcome).green().bold(),
        "defeat" => style(report.outcome).red().bold(),
        _ => style(report.outcome).yellow().bold(),
    };
    println!(
        "{} after {} ticks, {} attacks resolved",
        headline, report.ticks, report.attacks
    );
    for name in &report.survivors {
        println!("  {} {}", style("+").green(), name);
    }
    for name in &report.fallen {
        println!("  {} {}", style("x").red(), name);
    }
}
