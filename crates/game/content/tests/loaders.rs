use std::io::Write;

use game_content::{ConfigLoader, ScenarioLoader};
use game_core::{CombatConfig, Combatant, Position};
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn config_loader_reads_partial_toml_over_defaults() {
    let file = write_temp("alert_radius = 3\nmelee_flourish_ticks = 0\n");

    let config = ConfigLoader::load(file.path()).unwrap();

    assert_eq!(config.alert_radius, 3);
    assert_eq!(config.melee_flourish_ticks, 1);
    assert_eq!(config.step_delay_ms, CombatConfig::default().step_delay_ms);
}

#[test]
fn config_loader_reports_bad_toml() {
    let file = write_temp("alert_radius = \"far\"\n");

    let error = ConfigLoader::load(file.path()).unwrap_err();

    assert!(error.to_string().contains("combat config"));
}

#[test]
fn missing_file_names_the_path() {
    let error = ConfigLoader::load(std::path::Path::new("/nonexistent/combat.toml")).unwrap_err();
    assert!(error.to_string().contains("/nonexistent/combat.toml"));
}

#[test]
fn bundled_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/combat.toml");
    let config = ConfigLoader::load(std::path::Path::new(path)).unwrap();
    assert_eq!(config, CombatConfig::default());
}

#[test]
fn scenario_loader_builds_combatants() {
    let file = write_temp(
        r#"(
            dimensions: (8, 4),
            walls: [(3, 0)],
            combatants: [
                (name: "hero", position: (0, 0), health: 12, player: true),
                (name: "orc", position: (5, 1), health: 9, movement: 2, hidden: true),
            ],
        )"#,
    );

    let scenario = ScenarioLoader::load(file.path()).unwrap();
    let combatants: Vec<_> = scenario.combatants.iter().map(|c| c.to_combatant()).collect();

    assert_eq!(scenario.dimensions, (8, 4));
    assert_eq!(scenario.wall_positions().collect::<Vec<_>>(), vec![Position::new(3, 0)]);
    assert!(combatants[0].player_controlled);
    assert_eq!(combatants[1].movement_allowance, 2);
    assert!(combatants[1].hidden);
    assert_eq!(combatants[1].health.current, 9);
}

#[test]
fn scenario_without_party_is_rejected() {
    let error = ScenarioLoader::parse(
        r#"(dimensions: (4, 4), combatants: [(name: "orc", position: (1, 1), health: 3)])"#,
    )
    .unwrap_err();
    assert!(error.to_string().contains("no player-controlled"));
}

#[test]
fn overlapping_combatants_are_rejected() {
    let error = ScenarioLoader::parse(
        r#"(
            dimensions: (4, 4),
            combatants: [
                (name: "hero", position: (1, 1), health: 3, player: true),
                (name: "orc", position: (1, 1), health: 3),
            ],
        )"#,
    )
    .unwrap_err();
    assert!(error.to_string().contains("overlaps"));
}

#[test]
fn bundled_ambush_scenario_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/scenarios/ambush.ron");
    let scenario = ScenarioLoader::load(std::path::Path::new(path)).unwrap();
    assert_eq!(scenario.combatants.iter().filter(|c| c.player).count(), 2);
}

#[test]
fn movement_defaults_unless_the_entry_sets_it() {
    let scenario = ScenarioLoader::parse(
        r#"(
            dimensions: (6, 2),
            combatants: [
                (name: "hero", position: (0, 0), health: 5, player: true),
                (name: "scout", position: (3, 0), health: 5, movement: 6),
            ],
        )"#,
    )
    .unwrap();

    let movement: Vec<_> = scenario
        .combatants
        .iter()
        .map(|c| c.to_combatant().movement_allowance)
        .collect();
    assert_eq!(movement, vec![Combatant::DEFAULT_MOVEMENT, 6]);
}

#[test]
fn bundled_ambush_keeps_the_slow_fighter() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/scenarios/ambush.ron");
    let scenario = ScenarioLoader::load(std::path::Path::new(path)).unwrap();
    let bram = scenario.combatants.iter().find(|c| c.name == "Bram").unwrap();
    assert_eq!(bram.movement, 3);
}
