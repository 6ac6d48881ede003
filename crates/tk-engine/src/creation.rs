//! Character creation and party assembly.

use std::collections::HashSet;

use crate::dice::{Die, RollSource};
use crate::entity::{Character, CharacterClass, Stats, xp_for_level};
use crate::error::{EngineError, EngineResult};

/// Smallest allowed party.
pub const MIN_PARTY: usize = 3;
/// Largest allowed party.
pub const MAX_PARTY: usize = 5;

/// Validate and normalize a character name.
///
/// Words are separated by whitespace and must consist of letters only. Each
/// word gets an upper-case first letter; the rest is kept as typed.
pub fn normalize_name(raw: &str) -> EngineResult<String> {
    let words: Vec<&str> = raw.split_whitespace().collect();
    if words.is_empty() || words.iter().any(|w| !w.chars().all(char::is_alphabetic)) {
        return Err(EngineError::InvalidName(raw.to_string()));
    }

    let capitalized: Vec<String> = words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    Ok(capitalized.join(" "))
}

/// Whether no character in `existing` already uses `name`.
pub fn name_is_unique(name: &str, existing: &[Character]) -> bool {
    existing.iter().all(|c| c.name() != name)
}

/// Map the sum of two d6 to a stat score.
pub fn stat_from_sum(sum: i32) -> i32 {
    match sum {
        i32::MIN..=2 => -1,
        3..=5 => 0,
        6..=9 => 1,
        10..=11 => 2,
        _ => 3,
    }
}

/// Rolled dice and the stats they produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRoll {
    /// The six d6 results, two per stat in body, mind, spirit order.
    pub dice: [i32; 6],
    /// The resulting stat block.
    pub stats: Stats,
}

/// Roll 2d6 for each of body, mind and spirit.
pub fn roll_stats(source: &mut dyn RollSource) -> StatRoll {
    let mut dice = [0; 6];
    for d in &mut dice {
        *d = Die::D6.roll(source);
    }
    let stats = Stats::new(
        stat_from_sum(dice[0] + dice[1]),
        stat_from_sum(dice[2] + dice[3]),
        stat_from_sum(dice[4] + dice[5]),
    );
    StatRoll { dice, stats }
}

/// Build a new character at the given starting level.
///
/// Only Adventurer, Cleric and Wizard can be chosen; the others are reached
/// by evolving.
pub fn create_character(
    name: &str,
    player: &str,
    level: u32,
    stats: Stats,
    class: CharacterClass,
) -> EngineResult<Character> {
    if !class.is_starting() {
        return Err(EngineError::NotAStartingClass(class.to_string()));
    }
    let name = normalize_name(name)?;
    let xp = xp_for_level(level)?;
    Ok(Character::new(name, player.trim(), class, xp, stats))
}

/// Characters whose player matches `query`.
///
/// An empty query matches everyone; otherwise the match is a
/// case-insensitive substring test on the player name.
pub fn filter_by_player<'a>(characters: &'a [Character], query: &str) -> Vec<&'a Character> {
    let query = query.trim().to_lowercase();
    characters
        .iter()
        .filter(|c| query.is_empty() || c.player().to_lowercase().contains(&query))
        .collect()
}

/// Check that a party has 3 to 5 members with distinct names.
pub fn validate_party(party: &[Character]) -> EngineResult<()> {
    if !(MIN_PARTY..=MAX_PARTY).contains(&party.len()) {
        return Err(EngineError::InvalidPartySize(party.len()));
    }
    let mut seen = HashSet::new();
    for member in party {
        if !seen.insert(member.name()) {
            return Err(EngineError::DuplicateMember(member.name().to_string()));
        }
    }
    Ok(())
}
