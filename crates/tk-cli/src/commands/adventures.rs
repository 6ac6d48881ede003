use std::path::Path;

use colored::Colorize;
use tk_store::AdventureCatalog;

pub fn run(dir: &Path) -> Result<(), String> {
    let store = super::open_store(dir)?;
    let adventures = store.adventures.read_all().map_err(|e| e.to_string())?;

    if adventures.is_empty() {
        println!("  No adventures found.");
        return Ok(());
    }

    for adventure in &adventures {
        println!(
            "  {} {}",
            adventure.name().bold(),
            format!("({} encounters)", adventure.num_encounters()).dimmed()
        );
        for (i, encounter) in adventure.encounters().iter().enumerate() {
            let groups: Vec<String> = encounter
                .groups()
                .map(|(name, amount)| format!("{amount}x {name}"))
                .collect();
            println!("    {}. {}", i + 1, groups.join(", "));
        }
    }
    println!();
    println!("  {} adventures", adventures.len());

    Ok(())
}
