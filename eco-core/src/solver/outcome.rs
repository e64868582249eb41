use super::LogbookEntry;
use crate::models::TransportMode;

/// A transport mode assigned to a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    /// Index of the request in the input order.
    pub request_index: usize,
    /// Assigned mode.
    pub mode: TransportMode,
}

/// A non-dominated solution of the final population.
#[derive(Clone, Debug, PartialEq)]
pub struct ParetoSolution {
    /// Index of the individual in the final population.
    pub index: usize,
    /// Total cost in DZD.
    pub cost: f64,
    /// Total emissions in kg of CO2.
    pub co2: f64,
    /// Decisions in request order.
    pub decisions: Vec<Decision>,
}

/// Summary of a search run.
#[derive(Clone, Debug, PartialEq)]
pub struct Statistics {
    /// Amount of completed generations.
    pub generations: usize,
    /// Population size.
    pub population_size: usize,
    /// Minimum total cost in the final population.
    pub final_min_cost: f64,
    /// Minimum total emissions in the final population.
    pub final_min_co2: f64,
    /// Amount of fitness evaluations including the initial population.
    pub evaluations: usize,
}

/// A result of the generational loop.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// First front of the final population sorted by cost, emissions and index.
    pub pareto_front: Vec<ParetoSolution>,
    /// One entry per completed generation.
    pub logbook: Vec<LogbookEntry>,
    /// Run statistics.
    pub statistics: Statistics,
}
