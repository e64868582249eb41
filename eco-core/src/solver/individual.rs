#[cfg(test)]
#[path = "../../tests/unit/solver/individual_test.rs"]
mod individual_test;

use crate::algorithms::nsga2::MultiObjective;
use crate::models::{Problem, TransportMode};
use crate::utils::{SearchError, SearchResult};

/// Total cost and emissions of all decisions of an individual.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Fitness {
    /// Total cost in DZD.
    pub cost: f64,
    /// Total emissions in kg of CO2.
    pub co2: f64,
}

/// A candidate solution: one transport mode per request, in request order.
#[derive(Clone, Debug, PartialEq)]
pub struct Individual {
    genes: Vec<TransportMode>,
    fitness: Option<Fitness>,
}

impl Individual {
    /// Creates a new individual without fitness.
    pub fn new(genes: Vec<TransportMode>) -> Self {
        Self { genes, fitness: None }
    }

    /// Creates an individual from explicit decisions checking them against the problem.
    pub fn from_decisions(problem: &Problem, genes: Vec<TransportMode>) -> SearchResult<Self> {
        if genes.len() != problem.size() {
            return Err(SearchError::InvalidInput(format!(
                "expected {} decisions, got {}",
                problem.size(),
                genes.len()
            )));
        }

        if let Some((idx, mode)) =
            genes.iter().enumerate().find(|(idx, mode)| !problem.feasible_modes(*idx).contains(mode))
        {
            return Err(SearchError::InvalidInput(format!("mode '{mode}' is not feasible for request {idx}")));
        }

        Ok(Self::new(genes))
    }

    /// Returns genes.
    pub fn genes(&self) -> &[TransportMode] {
        self.genes.as_slice()
    }

    /// Returns amount of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns true if individual has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Replaces a gene. Cached fitness is discarded when the gene actually changes.
    pub fn set_gene(&mut self, idx: usize, mode: TransportMode) {
        if self.genes[idx] != mode {
            self.genes[idx] = mode;
            self.fitness = None;
        }
    }

    /// Returns cached fitness if it is known.
    pub fn fitness(&self) -> Option<Fitness> {
        self.fitness
    }

    /// Sets fitness calculated for current genes.
    pub fn set_fitness(&mut self, fitness: Fitness) {
        self.fitness = Some(fitness);
    }

    /// Calculates fitness if it is not cached. Returns true if calculation happened.
    pub fn evaluate(&mut self, problem: &Problem) -> bool {
        if self.fitness.is_some() {
            return false;
        }

        self.fitness = Some(calculate_fitness(problem, self.genes.as_slice()));

        true
    }
}

/// Sums cost and emissions of all decisions in request order.
pub fn calculate_fitness(problem: &Problem, genes: &[TransportMode]) -> Fitness {
    debug_assert_eq!(problem.size(), genes.len());

    genes.iter().enumerate().fold(Fitness::default(), |acc, (idx, mode)| {
        let decision = problem.evaluate_decision(idx, *mode);

        Fitness { cost: acc.cost + decision.cost, co2: acc.co2 + decision.co2 }
    })
}

/// Minimizes total cost (first objective) and total emissions (second objective).
/// Individuals without fitness are treated as worst possible.
#[derive(Clone, Copy, Debug, Default)]
pub struct CostEmissionObjective;

impl MultiObjective for CostEmissionObjective {
    type Solution = Individual;

    fn size(&self) -> usize {
        2
    }

    fn fitness(&self, solution: &Self::Solution, idx: usize) -> f64 {
        match (solution.fitness, idx) {
            (Some(fitness), 0) => fitness.cost,
            (Some(fitness), 1) => fitness.co2,
            (None, _) => f64::INFINITY,
            _ => unreachable!("objective index out of range: {idx}"),
        }
    }
}
