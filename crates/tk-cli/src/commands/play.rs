use std::path::Path;

use colored::Colorize;
use tracing::info;

use tk_engine::{
    AdventureOutcome, AdventureReport, Character, EncounterReport, EngineConfig, Playthrough,
    normalize_name,
};
use tk_store::{AdventureCatalog, CharacterCatalog, MonsterCatalog, StoreError};

pub fn run(
    dir: &Path,
    adventure: &str,
    members: &[String],
    seed: Option<u64>,
    save: bool,
) -> Result<(), String> {
    let store = super::open_store(dir)?;

    let adventure = store
        .adventures
        .find(adventure.trim())
        .map_err(|e| not_found("adventure", adventure, e))?;
    let party = members
        .iter()
        .map(|raw| {
            let name = normalize_name(raw).map_err(|e| e.to_string())?;
            store
                .characters
                .find(&name)
                .map_err(|e| not_found("character", &name, e))
        })
        .collect::<Result<Vec<Character>, String>>()?;
    let monsters = store.monsters.read_all().map_err(|e| e.to_string())?;

    let seed = super::seed_or_random(seed);
    let config = EngineConfig::default().with_seed(seed);
    let playthrough =
        Playthrough::new(party, adventure, monsters, config).map_err(|e| e.to_string())?;

    println!(
        "  {} {}",
        playthrough.adventure().name().bold(),
        format!("(seed {seed})").dimmed()
    );
    let report = playthrough.run_seeded();
    for encounter in &report.encounters {
        print_encounter(encounter);
    }

    match report.outcome {
        AdventureOutcome::Completed => {
            println!();
            println!(
                "Congratulations, your party completed \"{}\"",
                report.adventure
            );
            println!();
            if save {
                save_party(&store.characters, &report)?;
            }
        }
        AdventureOutcome::Defeated { .. } => {
            println!();
            println!("Tavern keeper: \"Lad, wake up. Yes, your party fell unconscious.\"");
            println!("\"Don't worry, you are safe back at the Tavern.\"");
            println!();
        }
    }

    Ok(())
}

fn print_encounter(report: &EncounterReport) {
    println!();
    println!("---------------------");
    print!("{}", report.banner);
    println!("---------------------");
    println!();
    stage_header("Preparation stage");
    print!("{}", report.preparation);
    println!();
    print!("{}", report.initiative);
    println!();
    stage_header("Combat stage");
    print!("{}", report.combat.narration);
    if let Some(rest) = &report.rest {
        stage_header("Short rest stage");
        print!("{rest}");
    }
}

fn stage_header(title: &str) {
    let rule = "-".repeat(title.len() + 8);
    println!("{rule}");
    println!("*** {} ***", title.bold());
    println!("{rule}");
}

/// Write back the experience and class each member earned.
fn save_party(characters: &impl CharacterCatalog, report: &AdventureReport) -> Result<(), String> {
    for member in &report.party {
        characters.update(member).map_err(|e| e.to_string())?;
    }
    info!(members = report.party.len(), "party progress saved");
    println!("  {}", "party progress saved".dimmed());
    Ok(())
}

fn not_found(kind: &str, name: &str, err: StoreError) -> String {
    match err {
        StoreError::NotFound(_) => format!("{kind} not found: \"{}\"", name.trim()),
        other => other.to_string(),
    }
}
