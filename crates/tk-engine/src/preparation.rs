//! Preparation stage: one class buff per party member before initiative.
//!
//! Every buff is recorded so that [`unbuff`] can revert it exactly at the
//! following rest stage.

use tracing::debug;

use crate::dice::{Die, RollSource};
use crate::entity::{Character, CharacterClass, Stat};

/// Apply the buff of the member at `caster` and return its narration line.
pub fn buff(party: &mut [Character], caster: usize, source: &mut dyn RollSource) -> String {
    let name = party[caster].name().to_string();
    match party[caster].class() {
        CharacterClass::Champion => {
            for member in party.iter_mut() {
                member.add_to_stat(Stat::Spirit, 1);
            }
            format!("{name} uses Motivational speech. Everyone's Spirit increases by +1.\n")
        }
        CharacterClass::Paladin => {
            let amount = Die::D3.roll(source);
            party[caster].set_buff(amount);
            for member in party.iter_mut() {
                member.add_to_stat(Stat::Mind, amount);
            }
            format!("{name} uses Blessing of good luck. Everyone's Mind increases by +{amount}.\n")
        }
        CharacterClass::Wizard => {
            let wizard = &mut party[caster];
            let shield =
                wizard.level() as i32 * (Die::D6.roll(source) + wizard.stat(Stat::Mind));
            wizard.set_shield(shield);
            format!("{name} uses Mage shield. Shield recharges to {shield}.\n")
        }
        CharacterClass::Adventurer | CharacterClass::Warrior | CharacterClass::Cleric => {
            party[caster].add_to_stat(Stat::Spirit, 1);
            format!("{name} uses Self-Motivated. Their Spirit is increased by +1.\n")
        }
    }
}

/// Revert the buff applied by the member at `caster`.
pub fn unbuff(party: &mut [Character], caster: usize) {
    match party[caster].class() {
        CharacterClass::Champion => {
            for member in party.iter_mut() {
                member.add_to_stat(Stat::Spirit, -1);
            }
        }
        CharacterClass::Paladin => {
            let amount = party[caster].buff();
            for member in party.iter_mut() {
                member.add_to_stat(Stat::Mind, -amount);
            }
            party[caster].set_buff(0);
        }
        CharacterClass::Wizard => party[caster].set_shield(0),
        CharacterClass::Adventurer | CharacterClass::Warrior | CharacterClass::Cleric => {
            party[caster].add_to_stat(Stat::Spirit, -1);
        }
    }
}

/// Run the preparation stage for the whole party, in party order.
pub fn preparation_stage(party: &mut [Character], source: &mut dyn RollSource) -> String {
    debug!(members = party.len(), "preparation stage");
    (0..party.len()).map(|i| buff(party, i, source)).collect()
}
