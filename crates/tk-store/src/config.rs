//! Where the catalogs live.

use std::path::{Path, PathBuf};

/// File holding the character catalog.
pub const CHARACTERS_FILE: &str = "characters.json";
/// File holding the monster catalog.
pub const MONSTERS_FILE: &str = "monsters.json";
/// File holding the adventure catalog.
pub const ADVENTURES_FILE: &str = "adventures.json";

/// Configuration for a JSON catalog store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory containing the three catalog files.
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl StoreConfig {
    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Path of the character catalog.
    pub fn characters_path(&self) -> PathBuf {
        self.data_dir.join(CHARACTERS_FILE)
    }

    /// Path of the monster catalog.
    pub fn monsters_path(&self) -> PathBuf {
        self.data_dir.join(MONSTERS_FILE)
    }

    /// Path of the adventure catalog.
    pub fn adventures_path(&self) -> PathBuf {
        self.data_dir.join(ADVENTURES_FILE)
    }

    /// The data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
