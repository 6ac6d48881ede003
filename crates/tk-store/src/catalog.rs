//! Catalog traits.
//!
//! The engine never touches storage; callers load what a playthrough needs
//! through these traits and write the results back afterwards.

use tk_engine::{Adventure, Character, Monster};

use crate::error::{StoreError, StoreResult};

/// Persistent collection of player characters, keyed by name.
pub trait CharacterCatalog {
    /// Every stored character.
    fn read_all(&self) -> StoreResult<Vec<Character>>;

    /// Replace the whole collection.
    fn write_all(&self, characters: &[Character]) -> StoreResult<()>;

    /// Look up one character by exact name.
    fn find(&self, name: &str) -> StoreResult<Character> {
        self.read_all()?
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Store a new character. Names must be unique.
    fn add(&self, character: Character) -> StoreResult<()> {
        let mut all = self.read_all()?;
        if all.iter().any(|c| c.name() == character.name()) {
            return Err(StoreError::DuplicateName(character.name().to_string()));
        }
        all.push(character);
        self.write_all(&all)
    }

    /// Remove a character by name.
    fn delete(&self, name: &str) -> StoreResult<()> {
        let mut all = self.read_all()?;
        let before = all.len();
        all.retain(|c| c.name() != name);
        if all.len() == before {
            return Err(StoreError::NotFound(name.to_string()));
        }
        self.write_all(&all)
    }

    /// Overwrite the stored record with the same name.
    fn update(&self, character: &Character) -> StoreResult<()> {
        let mut all = self.read_all()?;
        let slot = all
            .iter_mut()
            .find(|c| c.name() == character.name())
            .ok_or_else(|| StoreError::NotFound(character.name().to_string()))?;
        *slot = character.clone();
        self.write_all(&all)
    }
}

/// Read-only collection of monster templates.
pub trait MonsterCatalog {
    /// Every monster template.
    fn read_all(&self) -> StoreResult<Vec<Monster>>;

    /// Look up one monster by exact name.
    fn find(&self, name: &str) -> StoreResult<Monster> {
        self.read_all()?
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}

/// Persistent collection of adventures, keyed by name.
pub trait AdventureCatalog {
    /// Every stored adventure.
    fn read_all(&self) -> StoreResult<Vec<Adventure>>;

    /// Replace the whole collection.
    fn write_all(&self, adventures: &[Adventure]) -> StoreResult<()>;

    /// Whether no stored adventure uses `name`.
    fn adventure_name_is_unique(&self, name: &str) -> StoreResult<bool> {
        Ok(self.read_all()?.iter().all(|a| a.name() != name))
    }

    /// Look up one adventure by exact name.
    fn find(&self, name: &str) -> StoreResult<Adventure> {
        self.read_all()?
            .into_iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Store a new adventure. Names must be unique.
    fn add(&self, adventure: Adventure) -> StoreResult<()> {
        if !self.adventure_name_is_unique(adventure.name())? {
            return Err(StoreError::DuplicateName(adventure.name().to_string()));
        }
        let mut all = self.read_all()?;
        all.push(adventure);
        self.write_all(&all)
    }
}
