//! Configuration for an adventure playthrough.

/// Configuration for the engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for reproducible playthroughs.
    pub seed: u64,
    /// A monster retries its random target at most `party size * factor`
    /// times before falling back to the first conscious member.
    pub target_retry_factor: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            target_retry_factor: 4,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the target retry factor (at least 1).
    pub fn with_target_retry_factor(mut self, factor: usize) -> Self {
        self.target_retry_factor = factor.max(1);
        self
    }

    /// Maximum target draws for a party of `party_size`.
    pub fn target_retry_limit(&self, party_size: usize) -> usize {
        party_size.max(1) * self.target_retry_factor.max(1)
    }
}
