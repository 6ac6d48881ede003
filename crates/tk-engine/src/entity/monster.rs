//! Monsters from the catalog and their encounter instances.

use serde::{Deserialize, Serialize};

use crate::dice::{Die, RollSource};

/// Challenge tier of a monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Challenge {
    /// Ordinary foe.
    Minion,
    /// Tougher ordinary foe.
    Lieutenant,
    /// Attacks the whole party at once and resists its own damage type.
    Boss,
}

impl std::fmt::Display for Challenge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minion => write!(f, "Minion"),
            Self::Lieutenant => write!(f, "Lieutenant"),
            Self::Boss => write!(f, "Boss"),
        }
    }
}

/// A monster, either a catalog template or a live encounter instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    name: String,
    challenge: Challenge,
    experience: u32,
    hit_points: i32,
    initiative: i32,
    #[serde(rename = "damageDice")]
    damage_die: Die,
    damage_type: String,
    #[serde(skip)]
    instance: usize,
}

impl Monster {
    /// Create a monster template.
    pub fn new(
        name: impl Into<String>,
        challenge: Challenge,
        experience: u32,
        hit_points: i32,
        initiative: i32,
        damage_die: Die,
        damage_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            challenge,
            experience,
            hit_points,
            initiative,
            damage_die,
            damage_type: damage_type.into(),
            instance: 0,
        }
    }

    /// Monster name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Challenge tier.
    pub fn challenge(&self) -> Challenge {
        self.challenge
    }

    /// Whether this is a Boss.
    pub fn is_boss(&self) -> bool {
        self.challenge == Challenge::Boss
    }

    /// Experience awarded per defeated copy.
    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Current hit points. May be negative once dead.
    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    /// Whether the monster is still fighting.
    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Current initiative.
    pub fn initiative(&self) -> i32 {
        self.initiative
    }

    /// Add a d12 to the stored initiative.
    ///
    /// The roll accumulates onto whatever value the instance already holds.
    pub fn roll_initiative(&mut self, source: &mut dyn RollSource) -> i32 {
        self.initiative += Die::D12.roll(source);
        self.initiative
    }

    /// Die rolled for damage.
    pub fn damage_die(&self) -> Die {
        self.damage_die
    }

    /// Damage type tag.
    pub fn damage_type(&self) -> &str {
        &self.damage_type
    }

    /// Identifier of this instance within its encounter.
    pub fn instance(&self) -> usize {
        self.instance
    }

    pub(crate) fn set_instance(&mut self, instance: usize) {
        self.instance = instance;
    }

    /// Roll damage for one attack with the given hit multiplier.
    pub fn roll_damage(&self, multiplier: i32, source: &mut dyn RollSource) -> i32 {
        multiplier * self.damage_die.roll(source)
    }

    /// Apply incoming damage. Bosses halve damage of their own type.
    ///
    /// Returns the damage actually removed. Hit points are not clamped.
    pub fn take_damage(&mut self, damage: i32, damage_type: &str) -> i32 {
        let damage = if self.is_boss() && damage_type == self.damage_type {
            damage / 2
        } else {
            damage
        };
        self.hit_points -= damage;
        damage
    }
}
