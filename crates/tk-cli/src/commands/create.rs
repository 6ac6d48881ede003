use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tk_engine::{
    CharacterClass, Stat, create_character, name_is_unique, normalize_name, roll_stats,
};
use tk_store::CharacterCatalog;

pub fn run(
    dir: &Path,
    name: &str,
    player: &str,
    level: u32,
    class: &str,
    seed: Option<u64>,
) -> Result<(), String> {
    let store = super::open_store(dir)?;
    let name = normalize_name(name).map_err(|e| e.to_string())?;
    let class = CharacterClass::parse(class).map_err(|e| e.to_string())?;

    let existing = store.characters.read_all().map_err(|e| e.to_string())?;
    if !name_is_unique(&name, &existing) {
        return Err(format!("a character named \"{name}\" already exists"));
    }

    let mut rng = StdRng::seed_from_u64(super::seed_or_random(seed));
    let roll = roll_stats(&mut rng);
    let character = create_character(&name, player, level, roll.stats, class)
        .map_err(|e| e.to_string())?;

    println!("  Rolling dice...");
    for (i, stat) in [Stat::Body, Stat::Mind, Stat::Spirit].into_iter().enumerate() {
        let (a, b) = (roll.dice[i * 2], roll.dice[i * 2 + 1]);
        println!(
            "  {:<7} You rolled {} ({a} + {b}) -> {:+}",
            format!("{stat}:"),
            a + b,
            roll.stats.get(stat)
        );
    }

    store.characters.add(character).map_err(|e| e.to_string())?;

    println!();
    println!(
        "  {} {} the {} (level {level}, player {})",
        "created".green(),
        name.bold(),
        class,
        player.trim()
    );
    Ok(())
}
