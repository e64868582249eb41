use crate::utils::Random;
use std::cell::RefCell;

struct FakeDistribution<T> {
    values: Vec<T>,
}

impl<T> FakeDistribution<T> {
    pub fn new(values: Vec<T>) -> Self {
        let mut values = values;
        values.reverse();
        Self { values }
    }

    pub fn next(&mut self) -> T {
        self.values.pop().expect("no more fake values")
    }
}

/// Returns predefined values in the given order.
pub struct FakeRandom {
    ints: RefCell<FakeDistribution<i32>>,
    reals: RefCell<FakeDistribution<f64>>,
}

impl FakeRandom {
    pub fn new(ints: Vec<i32>, reals: Vec<f64>) -> Self {
        Self { ints: RefCell::new(FakeDistribution::new(ints)), reals: RefCell::new(FakeDistribution::new(reals)) }
    }
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max);
        let value = self.ints.borrow_mut().next();
        assert!(min <= value && value <= max, "fake value {value} is out of [{min}, {max}]");

        value
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        assert!(min < max);
        self.reals.borrow_mut().next()
    }
}
