//! Specifies conditions which stop the search. They are checked only between generations.

#[cfg(test)]
#[path = "../../tests/unit/solver/termination_test.rs"]
mod termination_test;

use crate::utils::Timer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A trait which specifies criteria when the search should stop.
pub trait Termination {
    /// Returns true if the search should stop after `generation` completed generations.
    fn is_termination(&self, generation: usize) -> bool;

    /// Returns a relative progress estimation in `[0, 1]`.
    fn estimate(&self, generation: usize) -> f64;
}

/// A termination criteria which is in terminated state when maximum amount of generations is exceeded.
pub struct MaxGeneration {
    limit: usize,
}

impl MaxGeneration {
    /// Creates a new instance of `MaxGeneration`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxGeneration {
    fn is_termination(&self, generation: usize) -> bool {
        generation >= self.limit
    }

    fn estimate(&self, generation: usize) -> f64 {
        if self.limit == 0 {
            1.
        } else {
            (generation as f64 / self.limit as f64).min(1.)
        }
    }
}

/// A termination criteria which is in terminated state when wall-clock budget is spent.
pub struct MaxTime {
    start: Timer,
    limit_in_secs: f64,
}

impl MaxTime {
    /// Creates a new instance of `MaxTime` which starts counting immediately.
    pub fn new(limit_in_secs: f64) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Termination for MaxTime {
    fn is_termination(&self, _: usize) -> bool {
        self.start.elapsed_secs_as_float() > self.limit_in_secs
    }

    fn estimate(&self, _: usize) -> f64 {
        (self.start.elapsed_secs_as_float() / self.limit_in_secs).min(1.)
    }
}

/// A termination criteria which is in terminated state when cancellation is requested from outside.
pub struct Interruption {
    flag: Arc<AtomicBool>,
}

impl Interruption {
    /// Creates a new instance of `Interruption`.
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }
}

impl Termination for Interruption {
    fn is_termination(&self, _: usize) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    fn estimate(&self, _: usize) -> f64 {
        0.
    }
}

/// A termination which combines multiple terminations: stops when any of them stops.
#[derive(Default)]
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination + Send>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination + Send>>) -> Self {
        Self { terminations }
    }

    /// Adds one more termination.
    pub fn add(&mut self, termination: Box<dyn Termination + Send>) {
        self.terminations.push(termination);
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&self, generation: usize) -> bool {
        self.terminations.iter().any(|t| t.is_termination(generation))
    }

    fn estimate(&self, generation: usize) -> f64 {
        self.terminations.iter().map(|t| t.estimate(generation)).fold(0., f64::max)
    }
}
