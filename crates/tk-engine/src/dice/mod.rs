//! Dice types and the roll source.
//!
//! Every random decision in the engine (damage, initiative, targeting, stat
//! generation) draws from a [`RollSource`]. Production code passes a seeded
//! `StdRng`; tests pass [`ScriptedRolls`] to replay exact values.

pub mod source;

pub use source::{RollSource, ScriptedRolls};

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Die {
    /// Three-sided die (used for the Paladin blessing).
    D3,
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::Custom(n) => n,
        }
    }

    /// Roll the die once, returning a value in `1..=sides`.
    pub fn roll(self, source: &mut dyn RollSource) -> i32 {
        source.uniform_int(1, self.sides() as i32)
    }

    /// Parse a die from catalog notation like "d12" or "D6".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "d3" => Some(Self::D3),
            "d4" => Some(Self::D4),
            "d6" => Some(Self::D6),
            "d8" => Some(Self::D8),
            "d10" => Some(Self::D10),
            "d12" => Some(Self::D12),
            "d20" => Some(Self::D20),
            other => {
                let num = other.strip_prefix('d')?.parse::<u32>().ok()?;
                if num >= 2 {
                    Some(Self::Custom(num))
                } else {
                    None
                }
            }
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

impl TryFrom<String> for Die {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_tag(&value).ok_or(EngineError::InvalidDie(value))
    }
}

impl From<Die> for String {
    fn from(die: Die) -> Self {
        die.to_string()
    }
}
