pub mod adventures;
pub mod characters;
pub mod create;
pub mod delete;
pub mod init;
pub mod monsters;
pub mod new_adventure;
pub mod play;
pub mod show;

use std::path::Path;

use tk_store::{JsonStore, StoreConfig, StoreError};

/// Open the store in `dir`, failing if any catalog file is missing.
fn open_store(dir: &Path) -> Result<JsonStore, String> {
    let store = JsonStore::open(StoreConfig::default().with_data_dir(dir));
    store.check_files().map_err(|e| match e {
        StoreError::MissingFile(_) => format!("{e} (run `tk init` to create it)"),
        other => other.to_string(),
    })?;
    Ok(store)
}

/// A seed from the command line, or a random one.
fn seed_or_random(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}
