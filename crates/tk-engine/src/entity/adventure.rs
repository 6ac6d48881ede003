//! Adventures: named sequences of encounters.

use serde::{Deserialize, Serialize};

use super::encounter::Encounter;
use crate::error::{EngineError, EngineResult};

/// Most encounters an adventure may hold.
pub const MAX_ENCOUNTERS: usize = 4;

/// A named, ordered list of encounters. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adventure {
    name: String,
    num_encounters: usize,
    encounters: Vec<Encounter>,
}

impl Adventure {
    /// Create an adventure from its encounters.
    pub fn new(name: impl Into<String>, encounters: Vec<Encounter>) -> EngineResult<Self> {
        let count = encounters.len();
        if !(1..=MAX_ENCOUNTERS).contains(&count) {
            return Err(EngineError::InvalidEncounterCount {
                declared: count,
                actual: count,
            });
        }
        Ok(Self {
            name: name.into(),
            num_encounters: count,
            encounters,
        })
    }

    /// Adventure name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared number of encounters.
    pub fn num_encounters(&self) -> usize {
        self.num_encounters
    }

    /// The encounters, in play order.
    pub fn encounters(&self) -> &[Encounter] {
        &self.encounters
    }

    /// Check that a deserialized adventure is internally consistent.
    pub fn validate(&self) -> EngineResult<()> {
        let actual = self.encounters.len();
        if !(1..=MAX_ENCOUNTERS).contains(&self.num_encounters) || actual != self.num_encounters {
            return Err(EngineError::InvalidEncounterCount {
                declared: self.num_encounters,
                actual,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encounter_count_bounds() {
        assert!(Adventure::new("Empty", vec![]).is_err());
        assert!(Adventure::new("Long", vec![Encounter::new(); 5]).is_err());
        let a = Adventure::new("Crypt", vec![Encounter::new(); 2]).unwrap();
        assert_eq!(a.num_encounters(), 2);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn validate_catches_mismatch() {
        let json = r#"{"name":"Broken","numEncounters":3,"encounters":[{"monsterTypes":[],"amount":[],"monsters":[]}]}"#;
        let a: Adventure = serde_json::from_str(json).unwrap();
        assert!(matches!(
            a.validate(),
            Err(EngineError::InvalidEncounterCount {
                declared: 3,
                actual: 1
            })
        ));
    }
}
