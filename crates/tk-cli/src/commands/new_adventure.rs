use std::path::Path;

use colored::Colorize;
use tk_engine::{Adventure, Encounter, EngineError, Monster};
use tk_store::{AdventureCatalog, MonsterCatalog, StoreError};

pub fn run(dir: &Path, name: &str, encounters: &[String]) -> Result<(), String> {
    let store = super::open_store(dir)?;
    let name = name.trim();
    if name.is_empty() {
        return Err("adventure name cannot be empty".into());
    }
    if !store
        .adventures
        .adventure_name_is_unique(name)
        .map_err(|e| e.to_string())?
    {
        return Err(format!("an adventure named \"{name}\" already exists"));
    }

    let catalog = store.monsters.read_all().map_err(|e| e.to_string())?;
    let built = encounters
        .iter()
        .enumerate()
        .map(|(i, groups)| {
            build_encounter(groups, &catalog).map_err(|e| format!("encounter {}: {e}", i + 1))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let adventure = Adventure::new(name, built).map_err(|e| e.to_string())?;
    let count = adventure.num_encounters();
    store.adventures.add(adventure).map_err(|e| match e {
        StoreError::DuplicateName(_) => format!("an adventure named \"{name}\" already exists"),
        other => other.to_string(),
    })?;

    println!(
        "  {} {} {}",
        "created".green(),
        name.bold(),
        format!("({count} encounters)").dimmed()
    );
    Ok(())
}

/// Build one encounter from comma-separated `Name xN` groups.
fn build_encounter(groups: &str, catalog: &[Monster]) -> Result<Encounter, EngineError> {
    let mut encounter = Encounter::new();
    for group in groups.split(',').map(str::trim).filter(|g| !g.is_empty()) {
        let (monster, amount) = parse_group(group);
        let template = catalog
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(monster))
            .ok_or_else(|| EngineError::UnknownMonster(monster.to_string()))?;
        encounter.add_monster(template, amount)?;
    }
    if encounter.monsters().is_empty() {
        return Err(EngineError::InvalidAmount(0));
    }
    Ok(encounter)
}

/// Split `"Goblin x3"` into name and amount. A group without a count
/// means a single monster.
fn parse_group(group: &str) -> (&str, u32) {
    group
        .rsplit_once(" x")
        .and_then(|(name, count)| Some((name.trim(), count.trim().parse().ok()?)))
        .unwrap_or((group, 1))
}
