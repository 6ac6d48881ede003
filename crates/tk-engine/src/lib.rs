//! Combat and progression engine for Tavernkeep.
//!
//! Takes a party of characters and an adventure of monster encounters and
//! plays them out: preparation buffs, initiative, round-by-round combat and
//! the rest stage with experience, level-ups and class evolution. All
//! randomness flows through a [`RollSource`]; nothing here performs I/O.

pub mod combat;
pub mod config;
pub mod creation;
pub mod dice;
pub mod entity;
pub mod error;
pub mod initiative;
pub mod playthrough;
pub mod preparation;
pub mod progression;

pub use combat::{CombatOutcome, CombatReport, resolve_combat};
pub use config::EngineConfig;
pub use creation::{
    create_character, filter_by_player, name_is_unique, normalize_name, roll_stats,
    validate_party,
};
pub use dice::{Die, RollSource, ScriptedRolls};
pub use entity::{
    Adventure, Challenge, Character, CharacterClass, Encounter, Monster, Stat, Stats,
    level_for_xp, xp_for_level,
};
pub use error::{EngineError, EngineResult};
pub use initiative::{Turn, roll_initiative};
pub use playthrough::{AdventureOutcome, AdventureReport, EncounterReport, Playthrough};
pub use preparation::{preparation_stage, unbuff};
pub use progression::rest_stage;
