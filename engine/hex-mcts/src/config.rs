//! Move-selector configuration parameters.

/// Configuration for the Monte Carlo move selector.
#[derive(Debug, Clone)]
pub struct MonteCarloConfig {
    /// Number of random board completions per candidate move.
    pub n_trials: u32,

    /// Fixed RNG seed. `None` seeds from OS entropy at engine
    /// construction; tests and reproducible games pass `Some`.
    pub seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_trials: 1000,
            seed: None,
        }
    }
}

impl MonteCarloConfig {
    /// Create a fast deterministic config for testing.
    pub fn for_testing() -> Self {
        Self {
            n_trials: 50,
            seed: Some(42),
        }
    }

    /// Builder pattern: set the trial count.
    pub fn with_trials(mut self, n: u32) -> Self {
        self.n_trials = n;
        self
    }

    /// Builder pattern: set a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MonteCarloConfig::default();
        assert_eq!(config.n_trials, 1000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MonteCarloConfig::default().with_trials(200).with_seed(7);
        assert_eq!(config.n_trials, 200);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_testing_config_is_seeded() {
        let config = MonteCarloConfig::for_testing();
        assert!(config.seed.is_some());
        assert!(config.n_trials < MonteCarloConfig::default().n_trials);
    }
}
