//! Combat resolution for one encounter.
//!
//! Rounds walk the merged initiative order until either every monster is
//! dead or no party member is conscious. Monsters act on every turn they
//! are alive for; unconscious characters are skipped but keep their slot.

pub mod action;
pub mod hit;
pub mod target;

pub use action::{character_action, monster_action};
pub use hit::HitOutcome;
pub use target::Target;

use tracing::debug;

use crate::config::EngineConfig;
use crate::dice::RollSource;
use crate::entity::{Character, Encounter};
use crate::initiative::{Turn, merged_order};

/// How a combat ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// Every monster is dead.
    EncounterWon,
    /// No party member is conscious.
    PartyWiped,
}

/// One resolved turn.
#[derive(Debug, Clone)]
pub struct CombatEvent {
    /// Which round this happened in.
    pub round: u32,
    /// Who acted.
    pub actor: Turn,
    /// The narration for the turn.
    pub description: String,
}

/// Everything that happened in one combat.
#[derive(Debug, Clone)]
pub struct CombatReport {
    /// How the combat ended.
    pub outcome: CombatOutcome,
    /// Number of rounds fought.
    pub rounds: u32,
    /// Every resolved turn, in order.
    pub events: Vec<CombatEvent>,
    /// Full narration including round headers and footers.
    pub narration: String,
}

/// Whether at least one party member is conscious.
pub fn party_alive(party: &[Character]) -> bool {
    party.iter().any(Character::is_alive)
}

/// The "Party:" block printed at the top of each round.
pub fn party_status(party: &[Character]) -> String {
    let mut status = String::from("Party:\n");
    for c in party {
        status.push_str(&format!(
            "  - {}\tHP: {} / {} hit points",
            c.name(),
            c.hit_points(),
            c.max_hit_points()
        ));
        if c.shield() > 0 {
            status.push_str(&format!(" (Shield: {})", c.shield()));
        }
        status.push('\n');
    }
    status
}

/// Fight `encounter` to the end.
///
/// Initiative must already have been rolled; the order is recomputed from
/// the sorted sides at the start of every round.
pub fn resolve_combat(
    party: &mut [Character],
    encounter: &mut Encounter,
    source: &mut dyn RollSource,
    config: &EngineConfig,
) -> CombatReport {
    let max_draws = config.target_retry_limit(party.len());
    let mut narration = String::new();
    let mut events = Vec::new();
    let mut round = 0;

    while !encounter.is_cleared() && party_alive(party) {
        round += 1;
        debug!(round, monsters = encounter.monsters().len(), "combat round");
        narration.push_str(&format!("\nRound {round}:\n"));
        narration.push_str(&party_status(party));

        for turn in merged_order(party, encounter) {
            if encounter.is_cleared() || !party_alive(party) {
                break;
            }
            let description = match turn {
                Turn::Monster(id) => match encounter.position_of(id) {
                    Some(pos) => monster_action(pos, party, encounter, max_draws, source),
                    None => continue,
                },
                Turn::Character(j) if party[j].is_alive() => {
                    character_action(party, j, encounter, source)
                }
                Turn::Character(_) => continue,
            };
            narration.push_str(&description);
            events.push(CombatEvent {
                round,
                actor: turn,
                description,
            });
        }

        narration.push_str(&format!("\nEnd of round {round}.\n"));
    }

    let outcome = if party_alive(party) {
        narration.push_str("All enemies are defeated\n\n");
        CombatOutcome::EncounterWon
    } else {
        CombatOutcome::PartyWiped
    };
    debug!(?outcome, rounds = round, "combat finished");

    CombatReport {
        outcome,
        rounds: round,
        events,
        narration,
    }
}
