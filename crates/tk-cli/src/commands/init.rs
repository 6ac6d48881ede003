use std::path::Path;

use colored::Colorize;
use tk_store::{JsonStore, StoreConfig};

pub fn run(dir: &Path) -> Result<(), String> {
    let store = JsonStore::open(StoreConfig::default().with_data_dir(dir));
    let created = store.init_missing().map_err(|e| e.to_string())?;

    if created.is_empty() {
        println!("  All catalogs already exist in {}", dir.display());
        return Ok(());
    }

    for path in &created {
        println!("  {} {}", "created".green(), path.display());
    }
    Ok(())
}
