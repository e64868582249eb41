//! Keeps the per generation logbook and writes search progress into the log.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use super::Individual;
use crate::utils::{InfoLogger, Timer};

/// Best objective values observed in the population after one generation.
#[derive(Clone, Debug, PartialEq)]
pub struct LogbookEntry {
    /// Generation number, zero based.
    pub generation: usize,
    /// Minimum total cost in the population.
    pub min_cost: f64,
    /// Minimum total emissions in the population.
    pub min_co2: f64,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No logging, logbook is still kept.
    None,
    /// Logbook and logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often progress is logged.
        log_every: usize,
    },
}

/// Provides way to collect the logbook and write information into log.
pub struct Telemetry {
    mode: TelemetryMode,
    time: Timer,
    logbook: Vec<LogbookEntry>,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, time: Timer::start(), logbook: vec![] }
    }

    /// Reports initial population statistics.
    pub fn on_initial(&mut self, population: &[Individual], item_time: Timer) {
        if let TelemetryMode::OnlyLogging { .. } = &self.mode {
            let (min_cost, min_co2) = get_population_minimums(population);
            self.log(
                format!(
                    "[{}s] created initial population of {} in {}ms, min cost: {:.0}, min co2: {:.2}",
                    self.time.elapsed_secs(),
                    population.len(),
                    item_time.elapsed_millis(),
                    min_cost,
                    min_co2
                )
                .as_str(),
            );
        }
    }

    /// Records generation statistics and logs them with configured frequency.
    pub fn on_generation(&mut self, generation: usize, population: &[Individual], termination_estimate: f64, generation_time: Timer) {
        let (min_cost, min_co2) = get_population_minimums(population);

        self.logbook.push(LogbookEntry { generation, min_cost, min_co2 });

        if let TelemetryMode::OnlyLogging { log_every, .. } = &self.mode {
            if generation % *log_every == 0 {
                self.log(
                    format!(
                        "[{}s] generation {} took {}ms, min cost: {:.0}, min co2: {:.2}, progress: {:.0}%",
                        self.time.elapsed_secs(),
                        generation,
                        generation_time.elapsed_millis(),
                        min_cost,
                        min_co2,
                        termination_estimate * 100.
                    )
                    .as_str(),
                );
            }
        }
    }

    /// Reports final statistics.
    pub fn on_result(&mut self, generations: usize, front_size: usize, evaluations: usize) {
        if let TelemetryMode::None = &self.mode {
            return;
        }

        let elapsed = self.time.elapsed_secs_as_float();
        let speed = if elapsed > 0. { generations as f64 / elapsed } else { 0. };

        self.log(
            format!(
                "[{}s] total generations: {generations}, speed: {speed:.2} gen/sec, evaluations: {evaluations}",
                self.time.elapsed_secs()
            )
            .as_str(),
        );
        self.log(format!("\tpareto front size: {front_size}").as_str());
    }

    /// Returns recorded logbook.
    pub fn logbook(&self) -> &[LogbookEntry] {
        self.logbook.as_slice()
    }

    /// Takes recorded logbook.
    pub fn take_logbook(self) -> Vec<LogbookEntry> {
        self.logbook
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message)
        }
    }
}

/// Returns minimum total cost and minimum total emissions of evaluated individuals.
pub fn get_population_minimums(population: &[Individual]) -> (f64, f64) {
    population.iter().filter_map(|individual| individual.fitness()).fold(
        (f64::INFINITY, f64::INFINITY),
        |(min_cost, min_co2), fitness| (min_cost.min(fitness.cost), min_co2.min(fitness.co2)),
    )
}
