//! Solver configuration.
//!
//! [`SolverConfig`] holds everything the engine needs for one run. Values
//! are normalized at this boundary (builder clamps); the engine itself
//! assumes a validated configuration and never re-checks.

/// Smallest accepted population.
pub const MIN_POPULATION: usize = 10;

/// Largest accepted population.
pub const MAX_POPULATION: usize = 500;

/// Configuration for the evolutionary N-Queens solver.
///
/// # Defaults
///
/// ```
/// use queens_ga::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.board_size, 8);
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use queens_ga::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_board_size(12)
///     .with_population_size(200)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Board side length N (number of queens). At least 1.
    pub board_size: usize,

    /// Number of individuals per generation.
    ///
    /// Clamped into [`MIN_POPULATION`]..=[`MAX_POPULATION`] by the builder.
    pub population_size: usize,

    /// Generation cap before the run gives up.
    ///
    /// Zero is accepted: a run finishes immediately with no solution, and
    /// the efficiency accessor reports its sentinel.
    pub max_generations: usize,

    /// Probability of applying swap mutation to each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Inter-generation pacing delay in milliseconds.
    ///
    /// Used by continuous runs so a host can render intermediate state;
    /// 0 disables pacing, and single-step mode ignores it entirely.
    pub step_delay_ms: u64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            population_size: 100,
            max_generations: 500,
            mutation_rate: 0.1,
            step_delay_ms: 0,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Sets the board size (clamped to at least 1).
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n.max(1);
        self
    }

    /// Sets the population size (clamped into the accepted range).
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n.clamp(MIN_POPULATION, MAX_POPULATION);
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate, clamped into `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = if rate.is_finite() {
            rate.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    /// Sets the inter-generation pacing delay in milliseconds.
    pub fn with_step_delay_ms(mut self, ms: u64) -> Self {
        self.step_delay_ms = ms;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    /// Configurations built through the `with_*` methods always pass.
    pub fn validate(&self) -> Result<(), String> {
        if self.board_size == 0 {
            return Err("board_size must be at least 1".into());
        }
        if self.population_size < MIN_POPULATION || self.population_size > MAX_POPULATION {
            return Err(format!(
                "population_size must be within {MIN_POPULATION}..={MAX_POPULATION}"
            ));
        }
        if !self.mutation_rate.is_finite()
            || self.mutation_rate < 0.0
            || self.mutation_rate > 1.0
        {
            return Err("mutation_rate must be within [0, 1]".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 500);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.step_delay_ms, 0);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SolverConfig::default()
            .with_board_size(12)
            .with_population_size(250)
            .with_max_generations(1000)
            .with_mutation_rate(0.05)
            .with_step_delay_ms(16)
            .with_seed(42);

        assert_eq!(config.board_size, 12);
        assert_eq!(config.population_size, 250);
        assert_eq!(config.max_generations, 1000);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.step_delay_ms, 16);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_board_size() {
        let config = SolverConfig::default().with_board_size(0);
        assert_eq!(config.board_size, 1);
    }

    #[test]
    fn test_clamp_population_size() {
        assert_eq!(
            SolverConfig::default().with_population_size(1).population_size,
            MIN_POPULATION
        );
        assert_eq!(
            SolverConfig::default()
                .with_population_size(10_000)
                .population_size,
            MAX_POPULATION
        );
    }

    #[test]
    fn test_clamp_mutation_rate() {
        assert!((SolverConfig::default().with_mutation_rate(2.0).mutation_rate - 1.0).abs() < 1e-10);
        assert!((SolverConfig::default().with_mutation_rate(-0.5).mutation_rate).abs() < 1e-10);
        assert!((SolverConfig::default().with_mutation_rate(f64::NAN).mutation_rate).abs() < 1e-10);
    }

    #[test]
    fn test_zero_generation_cap_is_valid() {
        let config = SolverConfig::default().with_max_generations(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_raw_bad_values() {
        let config = SolverConfig {
            board_size: 0,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SolverConfig {
            population_size: 2,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SolverConfig {
            mutation_rate: 1.5,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
