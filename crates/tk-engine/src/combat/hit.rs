//! Hit resolution shared by every attack.

use crate::dice::{Die, RollSource};

/// Result of the d10 hit roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// A natural 1: no damage.
    Miss,
    /// 2 through 9: normal damage.
    Hit,
    /// A natural 10: double damage.
    Critical,
}

impl HitOutcome {
    /// Classify a d10 result.
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            i32::MIN..=1 => Self::Miss,
            10.. => Self::Critical,
            _ => Self::Hit,
        }
    }

    /// Roll a d10 and classify it.
    pub fn roll(source: &mut dyn RollSource) -> Self {
        Self::from_roll(Die::D10.roll(source))
    }

    /// Damage multiplier for this outcome.
    pub fn multiplier(self) -> i32 {
        match self {
            Self::Miss => 0,
            Self::Hit => 1,
            Self::Critical => 2,
        }
    }

    /// Narration line reporting the damage dealt.
    pub fn describe(self, damage: i32, damage_type: &str) -> String {
        match self {
            Self::Miss => format!("Fails and deals 0 {damage_type} damage.\n"),
            Self::Hit => format!("Hits and deals {damage} {damage_type} damage.\n"),
            Self::Critical => format!("Critical hit and deals {damage} {damage_type} damage.\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;

    #[test]
    fn classify_rolls() {
        assert_eq!(HitOutcome::from_roll(1), HitOutcome::Miss);
        for roll in 2..=9 {
            assert_eq!(HitOutcome::from_roll(roll), HitOutcome::Hit);
        }
        assert_eq!(HitOutcome::from_roll(10), HitOutcome::Critical);
    }

    #[test]
    fn multipliers() {
        assert_eq!(HitOutcome::Miss.multiplier(), 0);
        assert_eq!(HitOutcome::Hit.multiplier(), 1);
        assert_eq!(HitOutcome::Critical.multiplier(), 2);
    }

    #[test]
    fn rolls_d10() {
        let mut rolls = ScriptedRolls::new([10, 1, 6]);
        assert_eq!(HitOutcome::roll(&mut rolls), HitOutcome::Critical);
        assert_eq!(HitOutcome::roll(&mut rolls), HitOutcome::Miss);
        assert_eq!(HitOutcome::roll(&mut rolls), HitOutcome::Hit);
    }

    #[test]
    fn narration_lines() {
        assert_eq!(
            HitOutcome::Miss.describe(12, "Fire"),
            "Fails and deals 0 Fire damage.\n"
        );
        assert_eq!(
            HitOutcome::Hit.describe(5, "Physical"),
            "Hits and deals 5 Physical damage.\n"
        );
        assert_eq!(
            HitOutcome::Critical.describe(14, "Magical"),
            "Critical hit and deals 14 Magical damage.\n"
        );
    }
}
