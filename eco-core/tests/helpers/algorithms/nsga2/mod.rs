use crate::algorithms::nsga2::MultiObjective;

/// Minimizes each dimension of a vector of values.
#[derive(Default)]
pub struct SliceMultiObjective {
    dimensions: usize,
}

impl SliceMultiObjective {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

impl MultiObjective for SliceMultiObjective {
    type Solution = Vec<f64>;

    fn size(&self) -> usize {
        self.dimensions
    }

    fn fitness(&self, solution: &Self::Solution, idx: usize) -> f64 {
        solution[idx]
    }
}

pub fn create_two_objective() -> SliceMultiObjective {
    SliceMultiObjective::new(2)
}
