//! Resolution of a single turn, for either side.
//!
//! Each resolver returns the narration for its turn and mutates the party
//! and encounter in place.

use tracing::debug;

use super::hit::HitOutcome;
use super::target::{self, Target};
use crate::dice::{Die, RollSource};
use crate::entity::{Character, Encounter, Stat, join_names};

/// Resolve the turn of the monster at position `pos` in the live list.
///
/// `max_draws` bounds the random target search of ordinary monsters.
pub fn monster_action(
    pos: usize,
    party: &mut [Character],
    encounter: &Encounter,
    max_draws: usize,
    source: &mut dyn RollSource,
) -> String {
    let Some(monster) = encounter.monsters().get(pos) else {
        return String::new();
    };

    let targets: Vec<usize> = if monster.is_boss() {
        (0..party.len()).filter(|&i| party[i].is_alive()).collect()
    } else {
        target::monster_target(party, max_draws, source)
            .into_iter()
            .collect()
    };
    if targets.is_empty() {
        return String::new();
    }

    let names = join_names(targets.iter().map(|&i| party[i].name()));
    let mut line = format!("\n{} attacks {names}.\n", monster.name());

    let hit = HitOutcome::roll(source);
    if hit == HitOutcome::Miss {
        line.push_str(&hit.describe(0, monster.damage_type()));
        return line;
    }
    let damage = monster.roll_damage(hit.multiplier(), source);
    line.push_str(&hit.describe(damage, monster.damage_type()));

    for &i in &targets {
        party[i].take_damage(damage, monster.damage_type());
        if !party[i].is_alive() {
            debug!(character = party[i].name(), monster = monster.name(), "character down");
            line.push_str(&format!("{} falls unconscious.\n", party[i].name()));
        }
    }
    line
}

/// Resolve the turn of the party member at `actor`.
pub fn character_action(
    party: &mut [Character],
    actor: usize,
    encounter: &mut Encounter,
    source: &mut dyn RollSource,
) -> String {
    if encounter.is_cleared() {
        return String::new();
    }
    match target::choose_target(party, actor, encounter.monsters(), source) {
        Target::HealParty => heal_party(party, actor, source),
        Target::AllMonsters => area_attack(&party[actor], encounter, source),
        Target::Monster(pos) => single_attack(&party[actor], pos, encounter, source),
    }
}

fn single_attack(
    attacker: &Character,
    pos: usize,
    encounter: &mut Encounter,
    source: &mut dyn RollSource,
) -> String {
    let profile = attacker.class().profile();
    let Some(monster) = encounter.monsters_mut().get_mut(pos) else {
        return String::new();
    };
    let mut line = format!(
        "\n{} attacks {} with {}.\n",
        attacker.name(),
        monster.name(),
        profile.attack_action
    );

    let hit = HitOutcome::roll(source);
    if hit == HitOutcome::Miss {
        line.push_str(&hit.describe(0, profile.attack_type));
        return line;
    }
    let damage = hit.multiplier()
        * (profile.attack_die.roll(source) + attacker.stat(profile.attack_stat));
    line.push_str(&hit.describe(damage, profile.attack_type));
    monster.take_damage(damage, profile.attack_type);

    for name in encounter.remove_dead() {
        line.push_str(&format!("{name} dies.\n"));
    }
    line
}

fn area_attack(
    attacker: &Character,
    encounter: &mut Encounter,
    source: &mut dyn RollSource,
) -> String {
    let profile = attacker.class().profile();
    let action = profile.special_action.unwrap_or(profile.attack_action);
    let names = join_names(encounter.monsters().iter().map(|m| m.name()));
    let mut line = format!("\n{} attacks {names} with {action}.\n", attacker.name());

    let hit = HitOutcome::roll(source);
    if hit == HitOutcome::Miss {
        line.push_str(&hit.describe(0, profile.attack_type));
        return line;
    }
    let (die, stat) = profile
        .area_attack
        .unwrap_or((profile.attack_die, profile.attack_stat));
    let damage = hit.multiplier() * (die.roll(source) + attacker.stat(stat));
    line.push_str(&hit.describe(damage, profile.attack_type));
    for monster in encounter.monsters_mut().iter_mut() {
        monster.take_damage(damage, profile.attack_type);
    }

    for name in encounter.remove_dead() {
        line.push_str(&format!("{name} dies.\n"));
    }
    line
}

fn heal_party(party: &mut [Character], actor: usize, source: &mut dyn RollSource) -> String {
    let healer = &party[actor];
    let profile = healer.class().profile();
    let action = profile.special_action.unwrap_or(profile.attack_action);
    let amount = Die::D10.roll(source) + healer.stat(Stat::Mind);
    let line = format!(
        "\n{} uses {action}. Heals {amount} hit points to {}.\n",
        healer.name(),
        join_names(party.iter().map(Character::name))
    );
    for member in party.iter_mut() {
        member.add_hit_points(amount);
    }
    line
}
