use std::path::Path;

use tk_engine::normalize_name;
use tk_store::{CharacterCatalog, StoreError};

pub fn run(dir: &Path, name: &str) -> Result<(), String> {
    let store = super::open_store(dir)?;
    let name = normalize_name(name).map_err(|e| e.to_string())?;

    store.characters.delete(&name).map_err(|e| match e {
        StoreError::NotFound(_) => format!("character not found: \"{name}\""),
        other => other.to_string(),
    })?;

    println!("  {name} left the Guild.");
    Ok(())
}
