#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use rand::rngs::StdRng;
use std::cell::RefCell;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the half-open interval [min, max)
    fn uniform_real(&self, min: f64, max: f64) -> f64;

    /// Flips a coin and returns true if it is "heads", false otherwise.
    fn is_head_not_tails(&self) -> bool {
        self.uniform_int(1, 2) == 1
    }

    /// Tests probability value in [0., 1.] range.
    fn is_hit(&self, probability: f64) -> bool {
        self.uniform_real(0., 1.) < probability
    }

    /// Returns an index uniformly distributed on the interval [0, len).
    fn uniform_index(&self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.uniform_int(0, len as i32 - 1) as usize
    }
}

/// A default random implementation which owns its generator. Two instances never share state,
/// so searches which run with different instances are independent.
pub struct DefaultRandom {
    rng: RefCell<StdRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with given seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: RefCell::new(StdRng::seed_from_u64(seed)) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RefCell::new(StdRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..=max)
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        if (min - max).abs() < f64::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..max)
    }

    fn is_head_not_tails(&self) -> bool {
        self.rng.borrow_mut().gen_bool(0.5)
    }

    fn is_hit(&self, probability: f64) -> bool {
        self.rng.borrow_mut().gen_bool(probability.clamp(0., 1.))
    }
}
