//! Running a party through an adventure.
//!
//! A [`Playthrough`] owns the party and a fresh copy of every encounter. Each
//! encounter goes through preparation, initiative, combat and, if the party
//! is still standing, the rest stage. The run stops at the first wipe.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::combat::{CombatOutcome, CombatReport, resolve_combat};
use crate::config::EngineConfig;
use crate::creation::validate_party;
use crate::dice::RollSource;
use crate::entity::{Adventure, Character, Encounter, Monster};
use crate::error::EngineResult;
use crate::initiative::roll_initiative;
use crate::preparation::preparation_stage;
use crate::progression::rest_stage;

/// How an adventure ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdventureOutcome {
    /// Every encounter was cleared.
    Completed,
    /// The party was wiped in the given encounter (1-based).
    Defeated {
        /// Number of the encounter that ended the run.
        encounter: usize,
    },
}

/// Narration and results for one encounter.
#[derive(Debug, Clone)]
pub struct EncounterReport {
    /// 1-based encounter number.
    pub number: usize,
    /// `Starting encounter ...` banner listing the monster groups.
    pub banner: String,
    /// Preparation stage narration.
    pub preparation: String,
    /// Initiative log.
    pub initiative: String,
    /// Combat result and narration.
    pub combat: CombatReport,
    /// Experience awarded to each member for clearing the encounter.
    pub xp: u32,
    /// Rest stage narration; absent when the party was wiped.
    pub rest: Option<String>,
}

impl EncounterReport {
    /// All stages concatenated in the order they happened.
    pub fn narration(&self) -> String {
        let mut text = String::new();
        text.push_str(&self.banner);
        text.push_str(&self.preparation);
        text.push_str(&self.initiative);
        text.push_str(&self.combat.narration);
        if let Some(rest) = &self.rest {
            text.push_str(rest);
        }
        text
    }
}

/// The result of a whole playthrough.
#[derive(Debug, Clone)]
pub struct AdventureReport {
    /// Name of the adventure played.
    pub adventure: String,
    /// How it ended.
    pub outcome: AdventureOutcome,
    /// One report per encounter reached.
    pub encounters: Vec<EncounterReport>,
    /// The party as it left the adventure, including evolutions.
    pub party: Vec<Character>,
}

impl AdventureReport {
    /// Whether every encounter was cleared.
    pub fn is_completed(&self) -> bool {
        self.outcome == AdventureOutcome::Completed
    }

    /// Narration of every encounter reached.
    pub fn narration(&self) -> String {
        self.encounters.iter().map(EncounterReport::narration).collect()
    }
}

/// Banner shown before an encounter starts.
pub fn encounter_banner(number: usize, encounter: &Encounter) -> String {
    let mut banner = format!("Starting encounter {number}:\n");
    for (name, amount) in encounter.groups() {
        banner.push_str(&format!("  - {amount}x {name}\n"));
    }
    banner
}

/// A party about to play an adventure.
#[derive(Debug, Clone)]
pub struct Playthrough {
    party: Vec<Character>,
    adventure: Adventure,
    monster_catalog: Vec<Monster>,
    config: EngineConfig,
}

impl Playthrough {
    /// Validate the party and adventure and bring every member to full
    /// hit points for their level.
    pub fn new(
        mut party: Vec<Character>,
        adventure: Adventure,
        monster_catalog: Vec<Monster>,
        config: EngineConfig,
    ) -> EngineResult<Self> {
        validate_party(&party)?;
        adventure.validate()?;
        for member in &mut party {
            member.reset_hit_points();
        }
        Ok(Self {
            party,
            adventure,
            monster_catalog,
            config,
        })
    }

    /// The party in its current state.
    pub fn party(&self) -> &[Character] {
        &self.party
    }

    /// The adventure being played.
    pub fn adventure(&self) -> &Adventure {
        &self.adventure
    }

    /// Play with a generator seeded from the configuration.
    pub fn run_seeded(self) -> AdventureReport {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.run(&mut rng)
    }

    /// Play every encounter in order until the adventure is completed or
    /// the party is wiped.
    pub fn run(mut self, source: &mut dyn RollSource) -> AdventureReport {
        info!(adventure = self.adventure.name(), members = self.party.len(), "adventure started");
        let mut reports = Vec::with_capacity(self.adventure.encounters().len());
        let mut outcome = AdventureOutcome::Completed;

        for (i, template) in self.adventure.encounters().iter().enumerate() {
            let number = i + 1;
            let mut encounter = template.spawn();
            let xp = encounter.total_experience(&self.monster_catalog);

            let banner = encounter_banner(number, &encounter);
            let preparation = preparation_stage(&mut self.party, source);
            let initiative = roll_initiative(&mut self.party, &mut encounter, source);
            let combat = resolve_combat(&mut self.party, &mut encounter, source, &self.config);

            let rest = match combat.outcome {
                CombatOutcome::EncounterWon => Some(rest_stage(&mut self.party, xp, source)),
                CombatOutcome::PartyWiped => None,
            };
            let wiped = rest.is_none();
            info!(encounter = number, rounds = combat.rounds, wiped, "encounter finished");

            reports.push(EncounterReport {
                number,
                banner,
                preparation,
                initiative,
                combat,
                xp,
                rest,
            });
            if wiped {
                outcome = AdventureOutcome::Defeated { encounter: number };
                break;
            }
        }

        info!(adventure = self.adventure.name(), ?outcome, "adventure finished");
        AdventureReport {
            adventure: self.adventure.name().to_string(),
            outcome,
            encounters: reports,
            party: self.party,
        }
    }
}
