use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use tk_engine::filter_by_player;
use tk_store::CharacterCatalog;

pub fn run(dir: &Path, player: Option<&str>) -> Result<(), String> {
    let store = super::open_store(dir)?;
    let all = store.characters.read_all().map_err(|e| e.to_string())?;
    let results = filter_by_player(&all, player.unwrap_or(""));

    if results.is_empty() {
        println!("  No characters found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Player", "Class", "Level", "XP"]);

    for character in &results {
        table.add_row(vec![
            character.name().to_string(),
            character.player().to_string(),
            character.class().to_string(),
            character.level().to_string(),
            character.xp().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} characters", results.len());

    Ok(())
}
