#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use crate::format::solution::*;
use eco_core::models::Problem;
use eco_core::solver::{get_mean_efficiency, get_mode_usage, ParetoSolution, Solution};
use std::io::{BufWriter, Write};

type ApiSolution = crate::format::solution::model::Solution;
type ApiDecision = crate::format::solution::model::Decision;
type ApiRecommendedSolution = crate::format::solution::model::RecommendedSolution;

/// A trait to serialize solution in pragmatic format.
pub trait PragmaticSolution<W: Write> {
    /// Serializes solution in pragmatic json format.
    fn write_pragmatic_json(&self, problem: &Problem, writer: BufWriter<W>) -> Result<(), String>;
}

impl<W: Write> PragmaticSolution<W> for Solution {
    fn write_pragmatic_json(&self, problem: &Problem, writer: BufWriter<W>) -> Result<(), String> {
        let solution = create_solution(problem, self);
        serialize_solution(writer, &solution).map_err(|err| err.to_string())
    }
}

/// Creates solution in pragmatic format. Costs are rounded to units, emissions to two decimals.
///
/// Rounding is applied for reporting only, after the front is selected on raw values. Two close
/// members can therefore look dominated after rounding; all of them are kept in their raw order.
pub fn create_solution(problem: &Problem, solution: &Solution) -> ApiSolution {
    let recommended = &solution.recommended;

    ApiSolution {
        pareto_front: solution.pareto_front.iter().map(create_pareto_point).collect(),
        recommended_solution: ApiRecommendedSolution {
            total_cost_dzd: round_cost(recommended.solution.cost),
            total_co2_kg: round_co2(recommended.solution.co2),
            score: recommended.score,
            efficiency: round_co2(get_mean_efficiency(problem, &recommended.solution)),
            decisions: create_decisions(&recommended.solution),
            mode_usage: get_mode_usage(problem, &recommended.solution)
                .into_iter()
                .map(|usage| ModeSummary {
                    mode: usage.mode.to_string(),
                    requests: usage.requests,
                    tonnes: usage.tonnes,
                    total_cost_dzd: round_cost(usage.cost),
                    total_co2_kg: round_co2(usage.co2),
                })
                .collect(),
        },
        logbook: solution
            .logbook
            .iter()
            .map(|entry| LogbookRecord {
                generation: entry.generation,
                min_cost: round_cost(entry.min_cost),
                min_co2: round_co2(entry.min_co2),
            })
            .collect(),
        statistics: Statistic {
            generations: solution.statistics.generations,
            population_size: solution.statistics.population_size,
            front_size: solution.pareto_front.len(),
            final_min_cost: round_cost(solution.statistics.final_min_cost),
            final_min_co2: round_co2(solution.statistics.final_min_co2),
            evaluations: solution.statistics.evaluations,
        },
    }
}

fn create_pareto_point(solution: &ParetoSolution) -> ParetoPoint {
    ParetoPoint {
        total_cost_dzd: round_cost(solution.cost),
        total_co2_kg: round_co2(solution.co2),
        decisions: create_decisions(solution),
    }
}

fn create_decisions(solution: &ParetoSolution) -> Vec<ApiDecision> {
    solution
        .decisions
        .iter()
        .map(|decision| ApiDecision { request_index: decision.request_index, mode: decision.mode.to_string() })
        .collect()
}

fn round_cost(value: f64) -> f64 {
    value.round()
}

fn round_co2(value: f64) -> f64 {
    (value * 100.).round() / 100.
}
