//! Target selection for both sides.

use tracing::warn;

use crate::dice::RollSource;
use crate::entity::{Character, CharacterClass, Monster};

/// What a character decides to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Attack the monster at this position in the live list.
    Monster(usize),
    /// Heal the whole party.
    HealParty,
    /// Hit every live monster.
    AllMonsters,
}

/// Live monsters at which an area attack becomes worthwhile.
pub const AREA_THRESHOLD: usize = 3;

/// Choose the action of the character at `actor`.
///
/// `monsters` must not be empty.
pub fn choose_target(
    party: &[Character],
    actor: usize,
    monsters: &[Monster],
    source: &mut dyn RollSource,
) -> Target {
    match party[actor].class() {
        CharacterClass::Paladin => {
            let someone_hurt = party
                .iter()
                .enumerate()
                .any(|(i, c)| i != actor && c.hit_points() < c.max_hit_points() / 2);
            if someone_hurt {
                Target::HealParty
            } else {
                let last = monsters.len().saturating_sub(1) as i32;
                Target::Monster(source.uniform_int(0, last) as usize)
            }
        }
        CharacterClass::Wizard => {
            if monsters.len() >= AREA_THRESHOLD {
                Target::AllMonsters
            } else {
                Target::Monster(highest_hit_points(monsters))
            }
        }
        CharacterClass::Adventurer
        | CharacterClass::Warrior
        | CharacterClass::Champion
        | CharacterClass::Cleric => Target::Monster(lowest_hit_points(monsters)),
    }
}

/// Position of the weakest monster; the first one wins ties.
pub fn lowest_hit_points(monsters: &[Monster]) -> usize {
    let mut best = 0;
    for (i, m) in monsters.iter().enumerate().skip(1) {
        if m.hit_points() < monsters[best].hit_points() {
            best = i;
        }
    }
    best
}

/// Position of the toughest monster; the first one wins ties.
pub fn highest_hit_points(monsters: &[Monster]) -> usize {
    let mut best = 0;
    for (i, m) in monsters.iter().enumerate().skip(1) {
        if m.hit_points() > monsters[best].hit_points() {
            best = i;
        }
    }
    best
}

/// Pick a random conscious party member for an ordinary monster.
///
/// Draws uniformly until a conscious member comes up, giving up after
/// `max_draws` attempts and falling back to the first conscious member.
/// Returns `None` only when nobody is conscious.
pub fn monster_target(
    party: &[Character],
    max_draws: usize,
    source: &mut dyn RollSource,
) -> Option<usize> {
    if party.is_empty() {
        return None;
    }
    let last = party.len() as i32 - 1;
    for _ in 0..max_draws {
        let index = source.uniform_int(0, last) as usize;
        if party.get(index).is_some_and(Character::is_alive) {
            return Some(index);
        }
    }
    let fallback = party.iter().position(Character::is_alive);
    if fallback.is_some() {
        warn!(max_draws, "monster target retries exhausted, using first conscious member");
    }
    fallback
}
