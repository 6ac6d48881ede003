//! Catalog storage for Tavernkeep.
//!
//! Defines the catalog traits the rest of the system talks to and a JSON
//! file backend keeping one array per catalog in a data directory.

pub mod catalog;
pub mod config;
pub mod error;
pub mod json;

pub use catalog::{AdventureCatalog, CharacterCatalog, MonsterCatalog};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use json::{JsonAdventures, JsonCharacters, JsonMonsters, JsonStore};
