use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information messages.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies how many workers can be used to evaluate fitness within one generation.
#[derive(Clone, Debug)]
pub struct Parallelism {
    available_cpus: usize,
}

impl Parallelism {
    /// Creates a new instance of `Parallelism`.
    pub fn new(available_cpus: usize) -> Self {
        Self { available_cpus: available_cpus.max(1) }
    }

    /// Returns amount of available cpus.
    pub fn available_cpus(&self) -> usize {
        self.available_cpus
    }

    /// Returns true if more than one worker is available.
    pub fn is_parallel(&self) -> bool {
        self.available_cpus > 1
    }
}

impl Default for Parallelism {
    fn default() -> Self {
        Self::new(get_cpus())
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
pub struct Environment {
    /// A random generator owned by a single search run.
    pub random: Box<dyn Random + Send>,

    /// Parallelism settings.
    pub parallelism: Parallelism,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Box<dyn Random + Send>, parallelism: Parallelism, logger: InfoLogger) -> Self {
        Self { random, parallelism, logger }
    }

    /// Creates an instance of `Environment` with seeded random and default settings.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Box::new(DefaultRandom::new_with_seed(seed)), ..Self::default() }
    }

    /// Replaces logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = logger;
        self
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(
            Box::new(DefaultRandom::default()),
            Parallelism::default(),
            Arc::new(|msg: &str| println!("{msg}")),
        )
    }
}

/// Returns amount of CPUs.
#[cfg(not(target_arch = "wasm32"))]
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Returns amount of CPUs.
#[cfg(target_arch = "wasm32")]
pub fn get_cpus() -> usize {
    1
}
