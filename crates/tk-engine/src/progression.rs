//! Rest stage: experience, level-ups, evolutions and recovery.

use tracing::info;

use crate::dice::{Die, RollSource};
use crate::entity::{Character, CharacterClass, Stat, join_names};
use crate::preparation::unbuff;

/// Award `xp` to the member at `index`, revert its buff and handle any
/// level-up or evolution. Returns the member's progression line.
///
/// An evolved member is replaced in its party slot.
pub fn advance_member(party: &mut [Character], index: usize, xp: u32) -> String {
    let name = party[index].name().to_string();
    let level = party[index].level();
    let mut line = format!("{name} gains {xp} xp. ");
    party[index].add_xp(xp);
    unbuff(party, index);

    let member = &mut party[index];
    if member.level() != level {
        info!(character = %name, level = member.level(), "level up");
        line.push_str(&format!("{name} levels up. They are now lvl {}!", member.level()));
        member.reset_hit_points();

        if let Some(into) = member.evolution() {
            info!(character = %name, class = %into, "evolution");
            *member = member.evolve(into);
            line.push_str(&format!("\n{name} evolves to {into}!"));
        }
    }
    line.push('\n');
    line
}

/// The out-of-combat recovery of the member at `index`.
pub fn rest_action(party: &mut [Character], index: usize, source: &mut dyn RollSource) -> String {
    let member = &party[index];
    let name = member.name().to_string();
    if !member.is_alive() {
        return format!("{name} is unconscious\n");
    }
    match member.class() {
        CharacterClass::Adventurer | CharacterClass::Warrior => {
            let heal = Die::D8.roll(source) + member.stat(Stat::Mind);
            party[index].add_hit_points(heal);
            format!("{name} uses Bandage time. Heals {heal} hit points.\n")
        }
        CharacterClass::Champion => {
            let heal = party[index].heal_fully();
            format!("{name} uses Improved bandage time. Heals {heal} hit points.\n")
        }
        CharacterClass::Cleric => {
            let heal = Die::D10.roll(source) + member.stat(Stat::Mind);
            party[index].add_hit_points(heal);
            format!("{name} uses Prayer of self-healing. Heals {heal} hit points.\n")
        }
        CharacterClass::Paladin => {
            let heal = Die::D10.roll(source) + member.stat(Stat::Mind);
            let names = join_names(party.iter().map(Character::name));
            for m in party.iter_mut() {
                m.add_hit_points(heal);
            }
            format!("{name} uses Prayer of mass healing. Heals {heal} hit points to {names}.\n")
        }
        CharacterClass::Wizard => format!("{name} is reading a book.\n"),
    }
}

/// Run the rest stage after a won encounter worth `xp` per member.
///
/// Every member progresses first (conscious or not), then every conscious
/// member performs its rest action.
pub fn rest_stage(party: &mut [Character], xp: u32, source: &mut dyn RollSource) -> String {
    let mut log = String::new();
    for i in 0..party.len() {
        log.push_str(&advance_member(party, i, xp));
    }
    log.push('\n');
    for i in 0..party.len() {
        log.push_str(&rest_action(party, i, source));
    }
    log
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;
    use crate::entity::Stats;
    use crate::preparation::preparation_stage;

    fn hero(name: &str, class: CharacterClass, xp: u32, stats: Stats) -> Character {
        let mut c = Character::new(name, "P", class, xp, stats);
        c.reset_hit_points();
        c
    }

    #[test]
    fn gains_xp_without_level_up() {
        let mut party = vec![hero("Wiz", CharacterClass::Wizard, 0, Stats::default())];
        let mut rolls = ScriptedRolls::default();
        let text = rest_stage(&mut party, 40, &mut rolls);
        assert_eq!(text, "Wiz gains 40 xp. \n\nWiz is reading a book.\n");
        assert_eq!(party[0].xp(), 40);
    }

    #[test]
    fn level_up_heals_fully() {
        let mut party = vec![hero("Wiz", CharacterClass::Wizard, 90, Stats::new(1, 0, 0))];
        party[0].add_hit_points(-100);
        let text = advance_member(&mut party, 0, 20);
        assert_eq!(text, "Wiz gains 20 xp. Wiz levels up. They are now lvl 2!\n");
        assert_eq!(party[0].max_hit_points(), 22);
        assert_eq!(party[0].hit_points(), 22);
    }

    #[test]
    fn adventurer_evolves_to_warrior() {
        let mut party = vec![hero("Ana", CharacterClass::Adventurer, 250, Stats::new(1, 1, 0))];
        let mut rolls = ScriptedRolls::new([3]);
        let text = rest_stage(&mut party, 60, &mut rolls);
        assert_eq!(
            text,
            "Ana gains 60 xp. Ana levels up. They are now lvl 4!\nAna evolves to Warrior!\n\n\
             Ana uses Bandage time. Heals 4 hit points.\n"
        );
        assert_eq!(party[0].class(), CharacterClass::Warrior);
        assert_eq!(party[0].xp(), 310);
        assert_eq!(party[0].hit_points(), 44);
    }

    #[test]
    fn cleric_evolves_to_paladin() {
        let mut party = vec![hero("Cle", CharacterClass::Cleric, 390, Stats::default())];
        let text = advance_member(&mut party, 0, 10);
        assert!(text.ends_with("\nCle evolves to Paladin!\n"));
        assert_eq!(party[0].class(), CharacterClass::Paladin);
    }

    #[test]
    fn warrior_evolves_to_champion() {
        let mut party = vec![hero("War", CharacterClass::Warrior, 690, Stats::new(2, 0, 0))];
        advance_member(&mut party, 0, 15);
        assert_eq!(party[0].class(), CharacterClass::Champion);
        assert_eq!(party[0].max_hit_points(), 12 * 8 + 2 * 8);
    }

    #[test]
    fn no_evolution_without_level_change() {
        // already past the threshold but the level does not change
        let mut party = vec![hero("Ana", CharacterClass::Adventurer, 310, Stats::default())];
        advance_member(&mut party, 0, 10);
        assert_eq!(party[0].class(), CharacterClass::Adventurer);
    }

    #[test]
    fn unconscious_members_progress_but_do_not_rest() {
        let mut party = vec![
            hero("Ana", CharacterClass::Adventurer, 0, Stats::default()),
            hero("Cham", CharacterClass::Champion, 750, Stats::default()),
        ];
        party[0].add_hit_points(-100);
        party[1].add_hit_points(-30);
        let mut rolls = ScriptedRolls::default();
        let text = rest_stage(&mut party, 10, &mut rolls);
        assert_eq!(
            text,
            "Ana gains 10 xp. \nCham gains 10 xp. \n\n\
             Ana is unconscious\nCham uses Improved bandage time. Heals 30 hit points.\n"
        );
        assert_eq!(party[0].xp(), 10);
        assert_eq!(rolls.drawn(), 0);
    }

    #[test]
    fn paladin_rest_can_revive() {
        let mut party = vec![
            hero("Pal", CharacterClass::Paladin, 400, Stats::new(0, 1, 0)),
            hero("Ana", CharacterClass::Adventurer, 0, Stats::default()),
        ];
        party[1].add_hit_points(-100);
        let mut rolls = ScriptedRolls::new([5]);
        let text = rest_action(&mut party, 0, &mut rolls);
        assert_eq!(
            text,
            "Pal uses Prayer of mass healing. Heals 6 hit points to Pal and Ana.\n"
        );
        assert_eq!(party[1].hit_points(), 6);
    }

    #[test]
    fn cleric_self_heal() {
        let mut party = vec![hero("Cle", CharacterClass::Cleric, 0, Stats::new(0, 2, 0))];
        party[0].add_hit_points(-8);
        let mut rolls = ScriptedRolls::new([4]);
        let text = rest_action(&mut party, 0, &mut rolls);
        assert_eq!(text, "Cle uses Prayer of self-healing. Heals 6 hit points.\n");
        assert_eq!(party[0].hit_points(), 8);
    }

    #[test]
    fn rest_reverts_preparation() {
        let mut party = vec![
            hero("Ana", CharacterClass::Adventurer, 0, Stats::new(1, 1, 1)),
            hero("Pal", CharacterClass::Paladin, 400, Stats::new(0, 0, 2)),
            hero("Wiz", CharacterClass::Wizard, 0, Stats::new(0, 3, 0)),
        ];
        let before: Vec<Stats> = party.iter().map(Character::stats).collect();
        let mut rolls = ScriptedRolls::new([3, 6, 1, 1]);
        preparation_stage(&mut party, &mut rolls);
        rest_stage(&mut party, 0, &mut rolls);
        let after: Vec<Stats> = party.iter().map(Character::stats).collect();
        assert_eq!(before, after);
        assert_eq!(party[2].shield(), 0);
    }
}
