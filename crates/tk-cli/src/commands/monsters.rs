use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use tk_store::MonsterCatalog;

pub fn run(dir: &Path) -> Result<(), String> {
    let store = super::open_store(dir)?;
    let monsters = store.monsters.read_all().map_err(|e| e.to_string())?;

    if monsters.is_empty() {
        println!("  No monsters found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Name",
        "Challenge",
        "XP",
        "HP",
        "Initiative",
        "Damage",
    ]);

    for monster in &monsters {
        table.add_row(vec![
            monster.name().to_string(),
            monster.challenge().to_string(),
            monster.experience().to_string(),
            monster.hit_points().to_string(),
            monster.initiative().to_string(),
            format!("{} {}", monster.damage_die(), monster.damage_type()),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} monsters", monsters.len());

    Ok(())
}
