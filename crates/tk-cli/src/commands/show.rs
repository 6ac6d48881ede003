use std::path::Path;

use colored::Colorize;
use tk_engine::{Stat, normalize_name};
use tk_store::CharacterCatalog;

pub fn run(dir: &Path, name: &str) -> Result<(), String> {
    let store = super::open_store(dir)?;
    let name = normalize_name(name).map_err(|e| e.to_string())?;
    let mut character = store
        .characters
        .find(&name)
        .map_err(|_| format!("character not found: \"{name}\""))?;
    character.reset_hit_points();

    let profile = character.class().profile();
    println!(
        "  {} [{}]",
        character.name().bold(),
        character.class().to_string().dimmed()
    );
    println!();
    println!("  player:     {}", character.player());
    println!("  level:      {}", character.level());
    println!("  xp:         {}", character.xp());
    println!("  hit points: {}", character.max_hit_points());
    for stat in [Stat::Body, Stat::Mind, Stat::Spirit] {
        println!("  {:<11} {:+}", format!("{stat}:").to_lowercase(), character.stat(stat));
    }
    println!();
    println!(
        "  attack:     {} ({} + {}, {})",
        profile.attack_action,
        profile.attack_die,
        profile.attack_stat.to_string().to_lowercase(),
        profile.attack_type
    );
    if let Some(special) = profile.special_action {
        println!("  special:    {special}");
    }
    if let Some(evolution) = profile.evolution {
        println!(
            "  {}",
            format!("evolves into {} at {} xp", evolution.into, evolution.min_xp).dimmed()
        );
    }

    Ok(())
}
