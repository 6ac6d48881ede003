//! Integration tests for the `tk` command-line interface.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MONSTERS: &str = r#"[
  {"name":"Rat","challenge":"Minion","experience":10,"hitPoints":1,"initiative":0,"damageDice":"d4","damageType":"Physical"},
  {"name":"Goblin","challenge":"Minion","experience":20,"hitPoints":6,"initiative":5,"damageDice":"d6","damageType":"Physical"},
  {"name":"Red Dragon","challenge":"Boss","experience":400,"hitPoints":1000,"initiative":8,"damageDice":"d12","damageType":"Fire"}
]"#;

const CHARACTERS: &str = r#"[
  {"name":"Jordi","player":"Anna","xp":0,"body":1,"mind":1,"spirit":1,"class":"Adventurer"},
  {"name":"Mira","player":"Ben","xp":0,"body":1,"mind":1,"spirit":1,"class":"Adventurer"},
  {"name":"Tobias","player":"Anna","xp":0,"body":1,"mind":1,"spirit":1,"class":"Adventurer"}
]"#;

const ADVENTURES: &str = r#"[
  {"name":"Rat Cellar","numEncounters":1,"encounters":[{"monsterTypes":["Rat"],"amount":[1]}]},
  {"name":"Dragon Lair","numEncounters":1,"encounters":[{"monsterTypes":["Red Dragon"],"amount":[1]}]}
]"#;

/// Create a temp data directory with all three catalogs.
fn test_data() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("monsters.json"), MONSTERS).unwrap();
    fs::write(dir.path().join("characters.json"), CHARACTERS).unwrap();
    fs::write(dir.path().join("adventures.json"), ADVENTURES).unwrap();
    dir
}

fn tk(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tk").unwrap();
    cmd.env("NO_COLOR", "1")
        .args(["--data-dir", dir.to_str().unwrap()]);
    cmd
}

fn stored_characters(dir: &Path) -> String {
    fs::read_to_string(dir.join("characters.json")).unwrap()
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_missing_catalogs() {
    let parent = TempDir::new().unwrap();
    let data = parent.path().join("data");
    tk(&data)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("characters.json"));

    assert!(data.join("monsters.json").exists());
    assert!(data.join("adventures.json").exists());

    tk(&data)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exist"));
}

#[test]
fn commands_fail_without_catalogs() {
    let dir = TempDir::new().unwrap();
    tk(dir.path())
        .arg("characters")
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("catalog file not found")
                .and(predicate::str::contains("tk init")),
        );
}

// ---------------------------------------------------------------------------
// characters / show / create / delete
// ---------------------------------------------------------------------------

#[test]
fn characters_lists_all() {
    let dir = test_data();
    tk(dir.path())
        .arg("characters")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Jordi")
                .and(predicate::str::contains("Mira"))
                .and(predicate::str::contains("3 characters")),
        );
}

#[test]
fn characters_filters_by_player() {
    let dir = test_data();
    tk(dir.path())
        .args(["characters", "--player", "ann"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Jordi")
                .and(predicate::str::contains("Tobias"))
                .and(predicate::str::contains("Mira").not())
                .and(predicate::str::contains("2 characters")),
        );
}

#[test]
fn show_prints_sheet() {
    let dir = test_data();
    tk(dir.path())
        .args(["show", "jordi"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Jordi")
                .and(predicate::str::contains("Adventurer"))
                .and(predicate::str::contains("hit points: 11"))
                .and(predicate::str::contains("Sword slash"))
                .and(predicate::str::contains("evolves into Warrior at 300 xp")),
        );
}

#[test]
fn show_unknown_character() {
    let dir = test_data();
    tk(dir.path())
        .args(["show", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("character not found"));
}

#[test]
fn create_rolls_and_stores_character() {
    let dir = test_data();
    tk(dir.path())
        .args([
            "create", "aria stormborn", "--player", "Sam", "--level", "3", "--class", "wizard",
            "--seed", "7",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rolling dice")
                .and(predicate::str::contains("Body:"))
                .and(predicate::str::contains("created"))
                .and(predicate::str::contains("Aria Stormborn")),
        );

    let catalog = stored_characters(dir.path());
    assert!(catalog.contains("\"Aria Stormborn\""));
    assert!(catalog.contains("\"xp\": 200"));
    assert!(catalog.contains("\"Wizard\""));
}

#[test]
fn create_rejects_evolved_class() {
    let dir = test_data();
    tk(dir.path())
        .args(["create", "Aria", "--player", "Sam", "--class", "Paladin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a starting class"));
}

#[test]
fn create_rejects_duplicate_and_bad_names() {
    let dir = test_data();
    tk(dir.path())
        .args(["create", "jordi", "--player", "Sam"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    tk(dir.path())
        .args(["create", "R2D2", "--player", "Sam"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character name"));
}

#[test]
fn create_rejects_bad_level() {
    let dir = test_data();
    tk(dir.path())
        .args(["create", "Aria", "--player", "Sam", "--level", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid level"));
}

#[test]
fn delete_removes_character() {
    let dir = test_data();
    tk(dir.path())
        .args(["delete", "Mira"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mira left the Guild"));
    assert!(!stored_characters(dir.path()).contains("Mira"));

    tk(dir.path())
        .args(["delete", "Mira"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("character not found"));
}

// ---------------------------------------------------------------------------
// monsters / adventures / new-adventure
// ---------------------------------------------------------------------------

#[test]
fn monsters_lists_catalog() {
    let dir = test_data();
    tk(dir.path())
        .arg("monsters")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Red Dragon")
                .and(predicate::str::contains("Boss"))
                .and(predicate::str::contains("d12 Fire"))
                .and(predicate::str::contains("3 monsters")),
        );
}

#[test]
fn adventures_lists_encounters() {
    let dir = test_data();
    tk(dir.path())
        .arg("adventures")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rat Cellar")
                .and(predicate::str::contains("1. 1x Rat"))
                .and(predicate::str::contains("2 adventures")),
        );
}

#[test]
fn new_adventure_is_stored() {
    let dir = test_data();
    tk(dir.path())
        .args([
            "new-adventure",
            "Goblin Cave",
            "--encounter",
            "Goblin x3",
            "--encounter",
            "goblin x2, Red Dragon",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goblin Cave"));

    tk(dir.path())
        .arg("adventures")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1. 3x Goblin")
                .and(predicate::str::contains("2. 2x Goblin, 1x Red Dragon")),
        );
}

#[test]
fn new_adventure_enforces_boss_limit() {
    let dir = test_data();
    tk(dir.path())
        .args(["new-adventure", "Twin Dragons", "--encounter", "Red Dragon x2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than one boss"));
}

#[test]
fn new_adventure_rejects_duplicates_and_unknown_monsters() {
    let dir = test_data();
    tk(dir.path())
        .args(["new-adventure", "Rat Cellar", "--encounter", "Rat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    tk(dir.path())
        .args(["new-adventure", "Kobold Den", "--encounter", "Kobold x4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown monster: Kobold"));
}

#[test]
fn new_adventure_rejects_too_many_encounters() {
    let dir = test_data();
    let mut cmd = tk(dir.path());
    cmd.args(["new-adventure", "Endless Rats"]);
    for _ in 0..5 {
        cmd.args(["--encounter", "Rat"]);
    }
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid encounter count"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_completes_and_saves_progress() {
    let dir = test_data();
    tk(dir.path())
        .args([
            "play", "Rat Cellar", "-p", "Jordi", "-p", "Mira", "-p", "Tobias", "--seed", "3",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Starting encounter 1:")
                .and(predicate::str::contains("*** Preparation stage ***"))
                .and(predicate::str::contains("*** Combat stage ***"))
                .and(predicate::str::contains("*** Short rest stage ***"))
                .and(predicate::str::contains("gains 10 xp"))
                .and(predicate::str::contains(
                    "Congratulations, your party completed \"Rat Cellar\"",
                )),
        );

    assert!(stored_characters(dir.path()).contains("\"xp\": 10"));
}

#[test]
fn play_without_saving_keeps_catalog() {
    let dir = test_data();
    tk(dir.path())
        .args([
            "play", "Rat Cellar", "-p", "Jordi", "-p", "Mira", "-p", "Tobias", "--seed", "3",
            "--no-save",
        ])
        .assert()
        .success();

    assert!(!stored_characters(dir.path()).contains("\"xp\": 10"));
}

#[test]
fn play_reports_defeat() {
    let dir = test_data();
    tk(dir.path())
        .args([
            "play", "Dragon Lair", "-p", "Jordi", "-p", "Mira", "-p", "Tobias", "--seed", "1",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Lad, wake up")
                .and(predicate::str::contains("Short rest stage").not()),
        );

    assert!(!stored_characters(dir.path()).contains("\"xp\": 400"));
}

#[test]
fn play_is_reproducible_with_seed() {
    let dir = test_data();
    let args = [
        "play", "Rat Cellar", "-p", "Jordi", "-p", "Mira", "-p", "Tobias", "--seed", "11",
        "--no-save",
    ];
    let first = tk(dir.path()).args(args).output().unwrap();
    let second = tk(dir.path()).args(args).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn play_rejects_small_party() {
    let dir = test_data();
    tk(dir.path())
        .args(["play", "Rat Cellar", "-p", "Jordi", "-p", "Mira"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid party size 2"));
}

#[test]
fn play_rejects_duplicate_member() {
    let dir = test_data();
    tk(dir.path())
        .args(["play", "Rat Cellar", "-p", "Jordi", "-p", "Mira", "-p", "jordi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already in the party"));
}

#[test]
fn play_unknown_adventure() {
    let dir = test_data();
    tk(dir.path())
        .args(["play", "Nowhere", "-p", "Jordi", "-p", "Mira", "-p", "Tobias"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("adventure not found"));
}
