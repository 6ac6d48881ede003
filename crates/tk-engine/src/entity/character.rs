//! Party members.

use serde::{Deserialize, Serialize};

use super::class::{CharacterClass, HitPointFormula, MAGICAL, PHYSICAL, Stat};
use crate::error::{EngineError, EngineResult};

/// Highest reachable level.
pub const MAX_LEVEL: u32 = 10;

/// Experience points per level band.
pub const XP_PER_LEVEL: u32 = 100;

/// Level for an experience total: bands of 100 xp, capped at 10.
pub fn level_for_xp(xp: u32) -> u32 {
    (xp / XP_PER_LEVEL + 1).min(MAX_LEVEL)
}

/// Minimum experience for a level in `1..=10`.
pub fn xp_for_level(level: u32) -> EngineResult<u32> {
    if !(1..=MAX_LEVEL).contains(&level) {
        return Err(EngineError::InvalidLevel(level));
    }
    Ok((level - 1) * XP_PER_LEVEL)
}

/// The three stat scores of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Body score.
    pub body: i32,
    /// Mind score.
    pub mind: i32,
    /// Spirit score.
    pub spirit: i32,
}

impl Stats {
    /// Create a stat block.
    pub fn new(body: i32, mind: i32, spirit: i32) -> Self {
        Self { body, mind, spirit }
    }

    /// Read one stat.
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Body => self.body,
            Stat::Mind => self.mind,
            Stat::Spirit => self.spirit,
        }
    }

    /// Add `delta` to one stat.
    pub fn add(&mut self, stat: Stat, delta: i32) {
        match stat {
            Stat::Body => self.body += delta,
            Stat::Mind => self.mind += delta,
            Stat::Spirit => self.spirit += delta,
        }
    }
}

/// A player character.
///
/// Only the identity, class, experience and stats are persisted. Hit points,
/// initiative, buff and shield are playthrough state and start at zero when
/// a character is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    name: String,
    player: String,
    xp: u32,
    #[serde(flatten)]
    stats: Stats,
    #[serde(rename = "class")]
    class: CharacterClass,
    #[serde(skip)]
    hit_points: i32,
    #[serde(skip)]
    max_hit_points: i32,
    #[serde(skip)]
    initiative: i32,
    #[serde(skip)]
    buff: i32,
    #[serde(skip)]
    shield: i32,
}

impl Character {
    /// Create a character with zeroed playthrough state.
    pub fn new(
        name: impl Into<String>,
        player: impl Into<String>,
        class: CharacterClass,
        xp: u32,
        stats: Stats,
    ) -> Self {
        Self {
            name: name.into(),
            player: player.into(),
            xp,
            stats,
            class,
            hit_points: 0,
            max_hit_points: 0,
            initiative: 0,
            buff: 0,
            shield: 0,
        }
    }

    /// Character name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning player.
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Current class.
    pub fn class(&self) -> CharacterClass {
        self.class
    }

    /// Experience points.
    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// Add experience points.
    pub fn add_xp(&mut self, xp: u32) {
        self.xp = self.xp.saturating_add(xp);
    }

    /// Level derived from experience.
    pub fn level(&self) -> u32 {
        level_for_xp(self.xp)
    }

    /// Current stat block, including any active buff.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Read one stat.
    pub fn stat(&self, stat: Stat) -> i32 {
        self.stats.get(stat)
    }

    /// Add `delta` to one stat (preparation buffs and their reversal).
    pub fn add_to_stat(&mut self, stat: Stat, delta: i32) {
        self.stats.add(stat, delta);
    }

    /// Current hit points.
    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    /// Maximum hit points.
    pub fn max_hit_points(&self) -> i32 {
        self.max_hit_points
    }

    /// Whether the character is conscious.
    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Add (or with a negative value, remove) hit points, clamped to
    /// `0..=max_hit_points`.
    pub fn add_hit_points(&mut self, amount: i32) {
        self.hit_points = (self.hit_points + amount).clamp(0, self.max_hit_points.max(0));
    }

    /// Restore hit points to the maximum. Returns the amount healed.
    pub fn heal_fully(&mut self) -> i32 {
        let healed = self.max_hit_points - self.hit_points;
        self.hit_points = self.max_hit_points;
        healed
    }

    /// Recompute maximum hit points for the current level.
    pub fn recalculate_max_hit_points(&mut self) {
        let level = self.level() as i32;
        let body = self.stats.body;
        self.max_hit_points = match self.class.profile().hit_points {
            HitPointFormula::Standard => (body + 10) * level,
            HitPointFormula::Hardened => (body + 10) * level + body * level,
        };
        self.hit_points = self.hit_points.min(self.max_hit_points);
    }

    /// Recompute maximum hit points and heal fully. Used at the start of a
    /// playthrough, on level-up and after evolving.
    pub fn reset_hit_points(&mut self) {
        self.recalculate_max_hit_points();
        self.hit_points = self.max_hit_points;
    }

    /// Initiative for the current encounter.
    pub fn initiative(&self) -> i32 {
        self.initiative
    }

    /// Set initiative for the current encounter.
    pub fn set_initiative(&mut self, initiative: i32) {
        self.initiative = initiative;
    }

    /// Amount recorded by the last preparation buff (Paladin blessing).
    pub fn buff(&self) -> i32 {
        self.buff
    }

    /// Record the amount of a preparation buff for later reversal.
    pub fn set_buff(&mut self, buff: i32) {
        self.buff = buff;
    }

    /// Current mage shield.
    pub fn shield(&self) -> i32 {
        self.shield
    }

    /// Set the mage shield.
    pub fn set_shield(&mut self, shield: i32) {
        self.shield = shield;
    }

    /// Apply incoming damage after class-specific mitigation.
    ///
    /// Returns the damage left after mitigation (before any shield
    /// absorption). Hit points never leave `0..=max_hit_points`.
    pub fn take_damage(&mut self, damage: i32, damage_type: &str) -> i32 {
        let mut damage = damage.max(0);
        match self.class {
            CharacterClass::Champion if damage_type == PHYSICAL => damage /= 2,
            CharacterClass::Paladin if damage_type == self.class.profile().attack_type => {
                damage /= 2
            }
            CharacterClass::Wizard => {
                if damage_type == MAGICAL {
                    damage = (damage - self.level() as i32).max(0);
                }
                if self.shield > 0 {
                    self.shield -= damage;
                    if self.shield < 0 {
                        let spill = self.shield;
                        self.shield = 0;
                        self.add_hit_points(spill);
                    }
                    return damage;
                }
            }
            _ => {}
        }
        self.add_hit_points(-damage);
        damage
    }

    /// The class this character would evolve into right now, if any.
    pub fn evolution(&self) -> Option<CharacterClass> {
        self.class.evolution_at(self.xp)
    }

    /// Produce the evolved form of this character.
    ///
    /// Name, player, experience and current stats carry over; the new
    /// variant starts with recomputed, full hit points and no buff or
    /// shield.
    pub fn evolve(&self, into: CharacterClass) -> Character {
        let mut evolved = Character::new(
            self.name.clone(),
            self.player.clone(),
            into,
            self.xp,
            self.stats,
        );
        evolved.initiative = self.initiative;
        evolved.reset_hit_points();
        evolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::class::PSYCHICAL;
    use proptest::prelude::*;

    fn make(class: CharacterClass, xp: u32, body: i32) -> Character {
        let mut c = Character::new("Aria", "Sam", class, xp, Stats::new(body, 1, 1));
        c.reset_hit_points();
        c
    }

    #[test]
    fn level_bands() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(99), 1);
        assert_eq!(level_for_xp(100), 2);
        assert_eq!(level_for_xp(450), 5);
        assert_eq!(level_for_xp(899), 9);
        assert_eq!(level_for_xp(900), 10);
        assert_eq!(level_for_xp(50_000), 10);
    }

    #[test]
    fn xp_for_levels() {
        assert_eq!(xp_for_level(1).unwrap(), 0);
        assert_eq!(xp_for_level(4).unwrap(), 300);
        assert_eq!(xp_for_level(10).unwrap(), 900);
        assert!(xp_for_level(0).is_err());
        assert!(xp_for_level(11).is_err());
    }

    #[test]
    fn max_hit_points_standard() {
        let c = make(CharacterClass::Adventurer, 200, 2);
        assert_eq!(c.level(), 3);
        assert_eq!(c.max_hit_points(), 36);
        assert_eq!(c.hit_points(), 36);
    }

    #[test]
    fn max_hit_points_champion() {
        let c = make(CharacterClass::Champion, 200, 2);
        assert_eq!(c.max_hit_points(), 36 + 6);
    }

    #[test]
    fn add_hit_points_clamps() {
        let mut c = make(CharacterClass::Adventurer, 0, 0);
        c.add_hit_points(50);
        assert_eq!(c.hit_points(), 10);
        c.add_hit_points(-50);
        assert_eq!(c.hit_points(), 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn champion_halves_physical() {
        let mut c = make(CharacterClass::Champion, 900, 3);
        let start = c.hit_points();
        assert_eq!(c.take_damage(10, PHYSICAL), 5);
        assert_eq!(c.hit_points(), start - 5);
        assert_eq!(c.take_damage(10, MAGICAL), 10);
        assert_eq!(c.hit_points(), start - 15);
    }

    #[test]
    fn champion_rounds_down() {
        let mut c = make(CharacterClass::Champion, 900, 3);
        assert_eq!(c.take_damage(7, PHYSICAL), 3);
    }

    #[test]
    fn paladin_halves_own_type() {
        let mut c = make(CharacterClass::Paladin, 500, 1);
        let start = c.hit_points();
        assert_eq!(c.take_damage(9, PSYCHICAL), 4);
        assert_eq!(c.take_damage(9, PHYSICAL), 9);
        assert_eq!(c.hit_points(), start - 13);
    }

    #[test]
    fn wizard_shield_absorbs_magic() {
        let mut c = make(CharacterClass::Wizard, 100, 0);
        assert_eq!(c.level(), 2);
        c.set_shield(10);
        let start = c.hit_points();
        assert_eq!(c.take_damage(7, MAGICAL), 5);
        assert_eq!(c.shield(), 5);
        assert_eq!(c.hit_points(), start);
    }

    #[test]
    fn wizard_shield_spills_into_hit_points() {
        let mut c = make(CharacterClass::Wizard, 0, 0);
        c.set_shield(3);
        let start = c.hit_points();
        c.take_damage(8, PHYSICAL);
        assert_eq!(c.shield(), 0);
        assert_eq!(c.hit_points(), start - 5);
    }

    #[test]
    fn wizard_magic_floor_at_zero() {
        let mut c = make(CharacterClass::Wizard, 900, 0);
        let start = c.hit_points();
        assert_eq!(c.take_damage(4, MAGICAL), 0);
        assert_eq!(c.hit_points(), start);
    }

    #[test]
    fn wizard_without_shield_takes_full() {
        let mut c = make(CharacterClass::Wizard, 0, 0);
        c.take_damage(4, PHYSICAL);
        assert_eq!(c.hit_points(), 6);
    }

    #[test]
    fn default_damage_clamps_at_zero() {
        let mut c = make(CharacterClass::Cleric, 0, 0);
        c.take_damage(500, PHYSICAL);
        assert_eq!(c.hit_points(), 0);
    }

    #[test]
    fn evolve_carries_identity() {
        let mut c = make(CharacterClass::Adventurer, 300, 1);
        c.add_to_stat(Stat::Spirit, 2);
        c.add_hit_points(-5);
        let w = c.evolve(CharacterClass::Warrior);
        assert_eq!(w.name(), "Aria");
        assert_eq!(w.player(), "Sam");
        assert_eq!(w.xp(), 300);
        assert_eq!(w.stats(), c.stats());
        assert_eq!(w.class(), CharacterClass::Warrior);
        assert_eq!(w.hit_points(), w.max_hit_points());
    }

    #[test]
    fn serde_round_trip_skips_playthrough_state() {
        let mut c = make(CharacterClass::Wizard, 120, 1);
        c.set_shield(9);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["class"], "Wizard");
        assert_eq!(json["body"], 1);
        assert!(json.get("shield").is_none());

        let back: Character = serde_json::from_value(json).unwrap();
        assert_eq!(back.name(), "Aria");
        assert_eq!(back.shield(), 0);
        assert_eq!(back.hit_points(), 0);
    }

    #[test]
    fn reads_catalog_record() {
        let json = r#"{"name":"Jordi","player":"Anna","xp":250,"body":2,"mind":-1,"spirit":0,"class":"Cleric"}"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.class(), CharacterClass::Cleric);
        assert_eq!(c.stats(), Stats::new(2, -1, 0));
        assert_eq!(c.level(), 3);
    }

    proptest! {
        #[test]
        fn hit_points_stay_in_bounds(
            class in prop::sample::select(CharacterClass::ALL.to_vec()),
            xp in 0u32..1200,
            body in -1i32..=3,
            shield in 0i32..30,
            blows in prop::collection::vec(
                (
                    -20i32..80,
                    prop::sample::select(vec![PHYSICAL, MAGICAL, PSYCHICAL, "Fire"]),
                    -40i32..40,
                ),
                1..20,
            ),
        ) {
            let mut c = make(class, xp, body);
            c.set_shield(shield);
            for (damage, kind, heal) in blows {
                c.take_damage(damage, kind);
                prop_assert!((0..=c.max_hit_points()).contains(&c.hit_points()));
                prop_assert!(c.shield() >= 0);
                c.add_hit_points(heal);
                prop_assert!((0..=c.max_hit_points()).contains(&c.hit_points()));
            }
        }
    }
}
