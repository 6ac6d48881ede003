//! Character classes and their behavior table.
//!
//! Each class is described by a static [`ClassProfile`]. The behavior
//! functions in the combat, preparation and progression modules match on
//! [`CharacterClass`] and read the numbers from here.

use serde::{Deserialize, Serialize};

use crate::dice::Die;
use crate::error::EngineError;

/// Damage type dealt by the sword-wielding classes.
pub const PHYSICAL: &str = "Physical";
/// Damage type dealt by wizards.
pub const MAGICAL: &str = "Magical";
/// Damage type dealt by clerics and paladins.
pub const PSYCHICAL: &str = "Psychical";

/// One of the three character stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    /// Physical strength; drives sword damage and hit points.
    Body,
    /// Intellect; drives spells, heals and the wizard's initiative.
    Mind,
    /// Willpower; drives most initiative rolls and holy damage.
    Spirit,
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Body => write!(f, "Body"),
            Self::Mind => write!(f, "Mind"),
            Self::Spirit => write!(f, "Spirit"),
        }
    }
}

/// A character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    /// Starting melee class; evolves into a Warrior.
    Adventurer,
    /// Evolved Adventurer; evolves into a Champion.
    Warrior,
    /// Final melee class, resistant to physical damage.
    Champion,
    /// Starting holy class; evolves into a Paladin.
    Cleric,
    /// Evolved Cleric with party-wide heals.
    Paladin,
    /// Spellcaster with a mage shield and area attacks. Never evolves.
    Wizard,
}

/// How a class computes its maximum hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPointFormula {
    /// `(body + 10) * level`
    Standard,
    /// `(body + 10) * level + body * level`
    Hardened,
}

/// A one-way class transition unlocked by experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evolution {
    /// The class the character becomes.
    pub into: CharacterClass,
    /// Minimum xp required.
    pub min_xp: u32,
}

/// Static numbers describing a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassProfile {
    /// Die rolled for initiative.
    pub initiative_die: Die,
    /// Stat added to the initiative roll.
    pub initiative_stat: Stat,
    /// Die rolled for single-target damage.
    pub attack_die: Die,
    /// Stat added to attack damage.
    pub attack_stat: Stat,
    /// Damage type tag of the class's attacks.
    pub attack_type: &'static str,
    /// Name of the single-target attack.
    pub attack_action: &'static str,
    /// Name of the heal or area action, if the class has one.
    pub special_action: Option<&'static str>,
    /// Die and stat of the area attack, if the class has one.
    pub area_attack: Option<(Die, Stat)>,
    /// Maximum hit point formula.
    pub hit_points: HitPointFormula,
    /// Evolution unlocked at level-up, if any.
    pub evolution: Option<Evolution>,
}

const ADVENTURER: ClassProfile = ClassProfile {
    initiative_die: Die::D12,
    initiative_stat: Stat::Spirit,
    attack_die: Die::D6,
    attack_stat: Stat::Body,
    attack_type: PHYSICAL,
    attack_action: "Sword slash",
    special_action: None,
    area_attack: None,
    hit_points: HitPointFormula::Standard,
    evolution: Some(Evolution {
        into: CharacterClass::Warrior,
        min_xp: 300,
    }),
};

const WARRIOR: ClassProfile = ClassProfile {
    attack_action: "Improved sword slash",
    evolution: Some(Evolution {
        into: CharacterClass::Champion,
        min_xp: 700,
    }),
    ..ADVENTURER
};

const CHAMPION: ClassProfile = ClassProfile {
    attack_die: Die::D10,
    attack_action: "Improved sword slash",
    hit_points: HitPointFormula::Hardened,
    evolution: None,
    ..ADVENTURER
};

const CLERIC: ClassProfile = ClassProfile {
    initiative_die: Die::D12,
    initiative_stat: Stat::Spirit,
    attack_die: Die::D4,
    attack_stat: Stat::Spirit,
    attack_type: PSYCHICAL,
    attack_action: "Not on my watch",
    special_action: None,
    area_attack: None,
    hit_points: HitPointFormula::Standard,
    evolution: Some(Evolution {
        into: CharacterClass::Paladin,
        min_xp: 400,
    }),
};

const PALADIN: ClassProfile = ClassProfile {
    initiative_die: Die::D10,
    attack_die: Die::D8,
    attack_action: "Never on my watch",
    special_action: Some("Prayer of mass healing"),
    evolution: None,
    ..CLERIC
};

const WIZARD: ClassProfile = ClassProfile {
    initiative_die: Die::D20,
    initiative_stat: Stat::Mind,
    attack_die: Die::D6,
    attack_stat: Stat::Mind,
    attack_type: MAGICAL,
    attack_action: "Arcane missile",
    special_action: Some("Fireball"),
    area_attack: Some((Die::D4, Stat::Mind)),
    hit_points: HitPointFormula::Standard,
    evolution: None,
};

impl CharacterClass {
    /// All classes, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Adventurer,
        Self::Warrior,
        Self::Champion,
        Self::Cleric,
        Self::Paladin,
        Self::Wizard,
    ];

    /// Classes a new character may start as.
    pub const STARTING: [Self; 3] = [Self::Adventurer, Self::Cleric, Self::Wizard];

    /// The static behavior table for this class.
    pub fn profile(self) -> &'static ClassProfile {
        match self {
            Self::Adventurer => &ADVENTURER,
            Self::Warrior => &WARRIOR,
            Self::Champion => &CHAMPION,
            Self::Cleric => &CLERIC,
            Self::Paladin => &PALADIN,
            Self::Wizard => &WIZARD,
        }
    }

    /// Whether a new character may be created with this class.
    pub fn is_starting(self) -> bool {
        Self::STARTING.contains(&self)
    }

    /// The class this one evolves into at `xp`, if the threshold is met.
    pub fn evolution_at(self, xp: u32) -> Option<Self> {
        self.profile()
            .evolution
            .filter(|evo| xp >= evo.min_xp)
            .map(|evo| evo.into)
    }

    /// Parse a class name (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, EngineError> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|class| class.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::UnknownClass(trimmed.to_string()))
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Adventurer => write!(f, "Adventurer"),
            Self::Warrior => write!(f, "Warrior"),
            Self::Champion => write!(f, "Champion"),
            Self::Cleric => write!(f, "Cleric"),
            Self::Paladin => write!(f, "Paladin"),
            Self::Wizard => write!(f, "Wizard"),
        }
    }
}
