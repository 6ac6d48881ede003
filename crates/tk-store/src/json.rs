//! JSON file backend.
//!
//! Each catalog is a single pretty-printed JSON array. Files are read in
//! full on every call and rewritten in full on every write.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use tk_engine::{Adventure, Character, Monster};

use crate::catalog::{AdventureCatalog, CharacterCatalog, MonsterCatalog};
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    if !path.exists() {
        return Err(StoreError::MissingFile(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items: Vec<T> = serde_json::from_str(&content).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = items.len(), "catalog loaded");
    Ok(items)
}

fn write_json<T: Serialize>(path: &Path, items: &[T]) -> StoreResult<()> {
    let content = serde_json::to_string_pretty(items).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, content).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = items.len(), "catalog written");
    Ok(())
}

/// Characters stored in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonCharacters {
    path: PathBuf,
}

impl JsonCharacters {
    /// Use the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CharacterCatalog for JsonCharacters {
    fn read_all(&self) -> StoreResult<Vec<Character>> {
        read_json(&self.path)
    }

    fn write_all(&self, characters: &[Character]) -> StoreResult<()> {
        write_json(&self.path, characters)
    }
}

/// Monster templates stored in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonMonsters {
    path: PathBuf,
}

impl JsonMonsters {
    /// Use the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MonsterCatalog for JsonMonsters {
    fn read_all(&self) -> StoreResult<Vec<Monster>> {
        read_json(&self.path)
    }
}

/// Adventures stored in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonAdventures {
    path: PathBuf,
}

impl JsonAdventures {
    /// Use the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AdventureCatalog for JsonAdventures {
    fn read_all(&self) -> StoreResult<Vec<Adventure>> {
        let adventures: Vec<Adventure> = read_json(&self.path)?;
        for adventure in &adventures {
            if adventure.validate().is_err() {
                warn!(adventure = adventure.name(), "stored adventure has an inconsistent encounter count");
            }
        }
        Ok(adventures)
    }

    fn write_all(&self, adventures: &[Adventure]) -> StoreResult<()> {
        write_json(&self.path, adventures)
    }
}

/// The three catalogs of one data directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    config: StoreConfig,
    /// Character catalog.
    pub characters: JsonCharacters,
    /// Monster catalog.
    pub monsters: JsonMonsters,
    /// Adventure catalog.
    pub adventures: JsonAdventures,
}

impl JsonStore {
    /// Open the catalogs described by `config`.
    pub fn open(config: StoreConfig) -> Self {
        Self {
            characters: JsonCharacters::new(config.characters_path()),
            monsters: JsonMonsters::new(config.monsters_path()),
            adventures: JsonAdventures::new(config.adventures_path()),
            config,
        }
    }

    /// The configuration this store was opened with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Fail with [`StoreError::MissingFile`] unless all three catalog files
    /// exist.
    pub fn check_files(&self) -> StoreResult<()> {
        for path in [
            self.config.characters_path(),
            self.config.monsters_path(),
            self.config.adventures_path(),
        ] {
            if !path.exists() {
                return Err(StoreError::MissingFile(path));
            }
        }
        Ok(())
    }

    /// Create an empty catalog file for every one that is missing.
    ///
    /// Returns the paths that were created.
    pub fn init_missing(&self) -> StoreResult<Vec<PathBuf>> {
        fs::create_dir_all(&self.config.data_dir).map_err(|source| StoreError::Io {
            path: self.config.data_dir.clone(),
            source,
        })?;
        let mut created = Vec::new();
        for path in [
            self.config.characters_path(),
            self.config.monsters_path(),
            self.config.adventures_path(),
        ] {
            if !path.exists() {
                write_json::<Character>(&path, &[])?;
                created.push(path);
            }
        }
        Ok(created)
    }
}
