//! Summaries of a selected solution.

#[cfg(test)]
#[path = "../../tests/unit/solver/analysis_test.rs"]
mod analysis_test;

use super::ParetoSolution;
use crate::costs::efficiency_score;
use crate::models::{Problem, TransportMode};

/// Usage of one transport mode within a solution.
#[derive(Clone, Debug, PartialEq)]
pub struct ModeUsage {
    /// A transport mode.
    pub mode: TransportMode,
    /// Amount of requests assigned to the mode.
    pub requests: usize,
    /// Total cargo moved with the mode in tonnes.
    pub tonnes: f64,
    /// Total cost of the assigned requests.
    pub cost: f64,
    /// Total emissions of the assigned requests.
    pub co2: f64,
}

/// Groups solution decisions by mode. Only used modes are returned, in `TransportMode::ALL` order.
pub fn get_mode_usage(problem: &Problem, solution: &ParetoSolution) -> Vec<ModeUsage> {
    TransportMode::ALL
        .iter()
        .filter_map(|&mode| {
            let usage = solution.decisions.iter().filter(|decision| decision.mode == mode).fold(
                ModeUsage { mode, requests: 0, tonnes: 0., cost: 0., co2: 0. },
                |mut usage, decision| {
                    let cost = problem.evaluate_decision(decision.request_index, mode);

                    usage.requests += 1;
                    usage.tonnes += problem.request(decision.request_index).cargo_tonnes;
                    usage.cost += cost.cost;
                    usage.co2 += cost.co2;

                    usage
                },
            );

            if usage.requests > 0 {
                Some(usage)
            } else {
                None
            }
        })
        .collect()
}

/// Returns mean efficiency score of solution decisions in `[0, 100]`.
pub fn get_mean_efficiency(problem: &Problem, solution: &ParetoSolution) -> f64 {
    if solution.decisions.is_empty() {
        return 0.;
    }

    let total = solution
        .decisions
        .iter()
        .map(|decision| {
            let idx = decision.request_index;
            let co2 = problem.evaluate_decision(idx, decision.mode).co2;

            efficiency_score(co2, problem.request(idx), problem.context(idx))
        })
        .sum::<f64>();

    total / solution.decisions.len() as f64
}
