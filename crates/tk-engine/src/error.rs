//! Error types for the engine.
//!
//! The combat core itself never fails; these errors cover the validation
//! done while building characters, encounters, adventures and parties.

/// Errors that can occur while preparing engine inputs.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A character name contained something other than letters.
    #[error("invalid character name: '{0}'")]
    InvalidName(String),

    /// A starting level outside 1..=10.
    #[error("invalid level {0}: must be between 1 and 10")]
    InvalidLevel(u32),

    /// A class that can only be reached through evolution.
    #[error("{0} is not a starting class (choose Adventurer, Cleric or Wizard)")]
    NotAStartingClass(String),

    /// A class name that does not exist.
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// A die notation that could not be parsed.
    #[error("invalid die notation: '{0}'")]
    InvalidDie(String),

    /// A monster amount of zero.
    #[error("invalid amount {0}: at least one monster must be added")]
    InvalidAmount(u32),

    /// A second Boss, or more than one copy of a Boss.
    #[error("an encounter cannot hold more than one boss")]
    BossLimit,

    /// A monster type that is not in the catalog.
    #[error("unknown monster: {0}")]
    UnknownMonster(String),

    /// A list index outside the available range.
    #[error("index {index} out of range (0..{len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the list.
        len: usize,
    },

    /// An adventure with a bad encounter count.
    #[error("invalid encounter count {declared} (have {actual}): must be between 1 and 4")]
    InvalidEncounterCount {
        /// Declared number of encounters.
        declared: usize,
        /// Number of encounters actually supplied.
        actual: usize,
    },

    /// A party outside the 3..=5 member range.
    #[error("invalid party size {0}: a party needs 3 to 5 members")]
    InvalidPartySize(usize),

    /// The same character was selected twice.
    #[error("{0} is already in the party")]
    DuplicateMember(String),
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
