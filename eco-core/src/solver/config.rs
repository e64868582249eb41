#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use crate::utils::{SearchError, SearchResult};

/// Specifies how offspring genes are taken from two parents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrossoverStrategy {
    /// Each gene comes from either parent by a coin flip.
    #[default]
    Uniform,
    /// Genes before a random cut point come from one parent, the rest from the other.
    SinglePoint,
}

/// A configuration which controls search execution.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    /// Amount of individuals kept between generations. Parents are paired for crossover, so an
    /// even size is preferable: with an odd size the trailing parent is copied and mutated alone.
    pub population_size: usize,
    /// Amount of generations to run.
    pub generations: usize,
    /// Probability to apply crossover to a pair of parents.
    pub crossover_rate: f64,
    /// Probability to mutate each gene of an offspring.
    pub mutation_rate: f64,
    /// A crossover strategy.
    pub crossover: CrossoverStrategy,
    /// Wall-clock budget in seconds. The search stops after the generation during which it expires.
    pub max_time: Option<f64>,
    /// Specifies how often progress is logged, no logging when not set.
    pub log_every: Option<usize>,
    /// Allows to evaluate fitness of offspring in parallel.
    pub is_parallel: bool,
}

impl SearchConfig {
    /// Checks that parameters are in their valid ranges.
    pub fn validate(&self) -> SearchResult<()> {
        if self.population_size == 0 {
            return Err(SearchError::Configuration("population size must be positive".to_string()));
        }

        validate_probability("crossover rate", self.crossover_rate)?;
        validate_probability("mutation rate", self.mutation_rate)?;

        if let Some(max_time) = self.max_time {
            if !(max_time.is_finite() && max_time > 0.) {
                return Err(SearchError::Configuration(format!("max time must be positive, got: {max_time}")));
            }
        }

        if self.log_every == Some(0) {
            return Err(SearchError::Configuration("log frequency must be positive".to_string()));
        }

        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 50,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            crossover: CrossoverStrategy::default(),
            max_time: None,
            log_every: None,
            is_parallel: false,
        }
    }
}

/// Checks that trade-off weight between cost and emissions is in `[0, 1]`.
pub fn validate_alpha(alpha: f64) -> SearchResult<()> {
    validate_probability("alpha", alpha)
}

fn validate_probability(name: &str, value: f64) -> SearchResult<()> {
    if (0. ..=1.).contains(&value) {
        Ok(())
    } else {
        Err(SearchError::Configuration(format!("{name} must be in [0, 1], got: {value}")))
    }
}

/// Provides configurable way to build search configuration using fluent interface style.
#[derive(Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Sets population size. Default is 100.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.config.population_size = population_size;
        self
    }

    /// Sets amount of generations. Default is 50.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.config.generations = generations;
        self
    }

    /// Sets crossover rate. Default is 0.8.
    pub fn with_crossover_rate(mut self, crossover_rate: f64) -> Self {
        self.config.crossover_rate = crossover_rate;
        self
    }

    /// Sets per gene mutation rate. Default is 0.1.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.config.mutation_rate = mutation_rate;
        self
    }

    /// Sets crossover strategy. Default is uniform.
    pub fn with_crossover(mut self, crossover: CrossoverStrategy) -> Self {
        self.config.crossover = crossover;
        self
    }

    /// Sets wall-clock budget in seconds. Default is no budget.
    pub fn with_max_time(mut self, max_time: Option<f64>) -> Self {
        self.config.max_time = max_time;
        self
    }

    /// Sets logging frequency in generations. Default is no logging.
    pub fn with_log_every(mut self, log_every: Option<usize>) -> Self {
        self.config.log_every = log_every;
        self
    }

    /// Allows parallel fitness evaluation. Default is false.
    pub fn with_parallel(mut self, is_parallel: bool) -> Self {
        self.config.is_parallel = is_parallel;
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> SearchResult<SearchConfig> {
        self.config.validate()?;

        Ok(self.config)
    }
}
