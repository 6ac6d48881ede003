//! Encounters: groups of monsters fought together.

use serde::{Deserialize, Serialize};

use super::monster::Monster;
use crate::error::{EngineError, EngineResult};

/// One fight of an adventure.
///
/// `monster_types` and `amounts` are parallel lists describing the encounter
/// for display and experience. `monsters` holds one instance per copy; during
/// combat dead instances are removed from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    #[serde(rename = "monsterTypes")]
    monster_types: Vec<String>,
    #[serde(rename = "amount")]
    amounts: Vec<u32>,
    monsters: Vec<Monster>,
}

impl Encounter {
    /// Create an empty encounter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Monster type names, in the order they were added.
    pub fn monster_types(&self) -> &[String] {
        &self.monster_types
    }

    /// Copies per monster type, parallel to [`Self::monster_types`].
    pub fn amounts(&self) -> &[u32] {
        &self.amounts
    }

    /// `(type, amount)` pairs.
    pub fn groups(&self) -> impl Iterator<Item = (&str, u32)> {
        self.monster_types
            .iter()
            .map(String::as_str)
            .zip(self.amounts.iter().copied())
    }

    /// Live monster instances.
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// Mutable access to the live monster instances.
    pub fn monsters_mut(&mut self) -> &mut Vec<Monster> {
        &mut self.monsters
    }

    /// Whether no monsters are left standing.
    pub fn is_cleared(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Whether any instance is a Boss.
    pub fn has_boss(&self) -> bool {
        self.monsters.iter().any(Monster::is_boss)
    }

    /// Position of a live instance by id.
    pub fn position_of(&self, instance: usize) -> Option<usize> {
        self.monsters.iter().position(|m| m.instance() == instance)
    }

    /// Reject a Boss that would break the one-boss rule.
    pub fn check_boss_limit(&self, template: &Monster, amount: u32) -> EngineResult<()> {
        if template.is_boss() && (amount > 1 || self.has_boss()) {
            return Err(EngineError::BossLimit);
        }
        Ok(())
    }

    /// Add `amount` copies of a catalog monster.
    ///
    /// Copies of a type already present are merged into its group.
    pub fn add_monster(&mut self, template: &Monster, amount: u32) -> EngineResult<()> {
        if amount == 0 {
            return Err(EngineError::InvalidAmount(amount));
        }
        self.check_boss_limit(template, amount)?;

        match self
            .monster_types
            .iter()
            .position(|t| t == template.name())
        {
            Some(i) => self.amounts[i] += amount,
            None => {
                self.monster_types.push(template.name().to_string());
                self.amounts.push(amount);
            }
        }
        for _ in 0..amount {
            self.monsters.push(template.clone());
        }
        Ok(())
    }

    /// Remove a whole monster group by its position in [`Self::monster_types`].
    ///
    /// Returns the removed type name and amount.
    pub fn remove_monster_type(&mut self, index: usize) -> EngineResult<(String, u32)> {
        if index >= self.monster_types.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.monster_types.len(),
            });
        }
        let name = self.monster_types.remove(index);
        let amount = self.amounts.remove(index);
        self.monsters.retain(|m| m.name() != name);
        Ok((name, amount))
    }

    /// Experience for clearing the encounter: the sum of amount times the
    /// catalog experience of each type. Types missing from the catalog
    /// award nothing.
    pub fn total_experience(&self, catalog: &[Monster]) -> u32 {
        self.groups()
            .map(|(name, amount)| {
                catalog
                    .iter()
                    .find(|m| m.name() == name)
                    .map_or(0, |m| m.experience() * amount)
            })
            .sum()
    }

    /// A fresh copy for a playthrough, with every instance given a unique id.
    pub fn spawn(&self) -> Encounter {
        let mut fresh = self.clone();
        for (i, monster) in fresh.monsters.iter_mut().enumerate() {
            monster.set_instance(i);
        }
        fresh
    }

    /// Remove every dead instance, returning their names in order.
    pub fn remove_dead(&mut self) -> Vec<String> {
        let dead = self
            .monsters
            .iter()
            .filter(|m| !m.is_alive())
            .map(|m| m.name().to_string())
            .collect();
        self.monsters.retain(Monster::is_alive);
        dead
    }
}
