//! Initiative: who acts when.
//!
//! Both sides are rolled and sorted independently, then merged into a single
//! turn order. On an exact tie the character goes first.

use crate::dice::RollSource;
use crate::entity::{Character, Encounter};

/// One slot in the merged turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// A party member, by position in the party.
    Character(usize),
    /// A monster, by instance id.
    Monster(usize),
}

/// Roll initiative for a single character: class die plus class stat.
pub fn roll_character_initiative(character: &mut Character, source: &mut dyn RollSource) -> i32 {
    let profile = character.class().profile();
    let value = profile.initiative_die.roll(source) + character.stat(profile.initiative_stat);
    character.set_initiative(value);
    value
}

/// Roll initiative for both sides, sort them in place, and return the
/// initiative log in merged order.
pub fn roll_initiative(
    party: &mut [Character],
    encounter: &mut Encounter,
    source: &mut dyn RollSource,
) -> String {
    for monster in encounter.monsters_mut().iter_mut() {
        monster.roll_initiative(source);
    }
    encounter
        .monsters_mut()
        .sort_by(|a, b| b.initiative().cmp(&a.initiative()));

    for character in party.iter_mut() {
        roll_character_initiative(character, source);
    }
    party.sort_by(|a, b| b.initiative().cmp(&a.initiative()));

    initiative_log(party, encounter)
}

/// Merge the two sorted sides into one turn order.
///
/// A monster is taken next only when its initiative is strictly greater
/// than the next character's.
pub fn merged_order(party: &[Character], encounter: &Encounter) -> Vec<Turn> {
    let monsters = encounter.monsters();
    let mut order = Vec::with_capacity(party.len() + monsters.len());
    let (mut i, mut j) = (0, 0);

    while i < monsters.len() && j < party.len() {
        if monsters[i].initiative() > party[j].initiative() {
            order.push(Turn::Monster(monsters[i].instance()));
            i += 1;
        } else {
            order.push(Turn::Character(j));
            j += 1;
        }
    }
    order.extend(monsters[i..].iter().map(|m| Turn::Monster(m.instance())));
    order.extend((j..party.len()).map(Turn::Character));
    order
}

/// Render the merged turn order.
pub fn initiative_log(party: &[Character], encounter: &Encounter) -> String {
    let mut log = String::from("\nRolling initiative...\n");
    for turn in merged_order(party, encounter) {
        let (initiative, name) = match turn {
            Turn::Character(j) => (party[j].initiative(), party[j].name()),
            Turn::Monster(id) => match encounter.position_of(id) {
                Some(i) => {
                    let m = &encounter.monsters()[i];
                    (m.initiative(), m.name())
                }
                None => continue,
            },
        };
        log.push_str(&format!("  - {initiative}\t{name}\n"));
    }
    log
}
