//! Specifies logic to read search configuration from json input.

#[cfg(test)]
#[path = "../../tests/unit/format/config_test.rs"]
mod config_test;

use crate::format::{FormatError, MultiFormatError};
use eco_core::solver::{CrossoverStrategy, SearchConfig, SearchConfigBuilder, SearchParams};
use eco_core::utils::{SearchError, SearchResult};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

/// A default trade-off weight.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// A default random seed.
pub const DEFAULT_SEED: i64 = 42;

/// A default logging cadence in generations.
pub const DEFAULT_LOG_EVERY: i64 = 10;

/// A search configuration. Integers are signed so that negative values are reported as
/// configuration errors instead of parse errors.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Trade-off weight in `[0, 1]`: 1 prefers cost, 0 prefers emissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    /// Population size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population_size: Option<i64>,
    /// Amount of generations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generations: Option<i64>,
    /// Probability to cross a selected pair over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crossover_rate: Option<f64>,
    /// Per gene mutation probability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutation_rate: Option<f64>,
    /// A random seed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Crossover strategy: `uniform` or `single-point`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crossover: Option<String>,
    /// A wall-clock budget in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time_secs: Option<f64>,
    /// Evaluates offspring in parallel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,
    /// Telemetry settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryConfig>,
}

/// Telemetry settings.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Progress logging settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
}

/// Progress logging settings.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Enables logging.
    pub enabled: bool,
    /// Logs every n-th generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_every: Option<i64>,
}

/// Reads configuration from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new(
            "E0002".to_string(),
            "cannot deserialize config".to_string(),
            format!("check config json: '{err}'"),
        )
        .into()
    })
}

/// Converts configuration into search parameters validating their ranges.
pub fn create_search_params(config: &Config) -> SearchResult<SearchParams> {
    let defaults = SearchConfig::default();

    let log_every = match config.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()) {
        Some(logging) if logging.enabled => {
            Some(to_count("logEvery", logging.log_every.unwrap_or(DEFAULT_LOG_EVERY))?)
        }
        _ => None,
    };

    let search_config = SearchConfigBuilder::default()
        .with_population_size(to_count(
            "populationSize",
            config.population_size.unwrap_or(defaults.population_size as i64),
        )?)
        .with_generations(to_count("generations", config.generations.unwrap_or(defaults.generations as i64))?)
        .with_crossover_rate(config.crossover_rate.unwrap_or(defaults.crossover_rate))
        .with_mutation_rate(config.mutation_rate.unwrap_or(defaults.mutation_rate))
        .with_crossover(parse_crossover(config.crossover.as_deref())?)
        .with_max_time(config.max_time_secs)
        .with_log_every(log_every)
        .with_parallel(config.parallel.unwrap_or(defaults.is_parallel))
        .build()?;

    let seed = config.seed.unwrap_or(DEFAULT_SEED);
    let seed =
        u64::try_from(seed).map_err(|_| SearchError::Configuration(format!("seed must be non-negative, got {seed}")))?;

    Ok(SearchParams { alpha: config.alpha.unwrap_or(DEFAULT_ALPHA), seed, config: search_config })
}

fn to_count(name: &str, value: i64) -> SearchResult<usize> {
    usize::try_from(value).map_err(|_| SearchError::Configuration(format!("{name} must be non-negative, got {value}")))
}

fn parse_crossover(value: Option<&str>) -> SearchResult<CrossoverStrategy> {
    match value {
        None | Some("uniform") => Ok(CrossoverStrategy::Uniform),
        Some("single-point") | Some("singlePoint") => Ok(CrossoverStrategy::SinglePoint),
        Some(other) => Err(SearchError::Configuration(format!(
            "unknown crossover strategy: '{other}', use 'uniform' or 'single-point'"
        ))),
    }
}
