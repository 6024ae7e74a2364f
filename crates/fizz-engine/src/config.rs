//! Configuration for the game engine.

/// Configuration for a [`GameEngine`](crate::GameEngine).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Lower bound of the draw range (inclusive). Must be ≥ 1.
    pub number_min: i64,
    /// Upper bound of the draw range (inclusive).
    pub number_max: i64,
    /// RNG seed for reproducible draws. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            number_min: 1,
            number_max: 1000,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Set the draw range.
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.number_min = min;
        self.number_max = max;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
