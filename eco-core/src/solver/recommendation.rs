#[cfg(test)]
#[path = "../../tests/unit/solver/recommendation_test.rs"]
mod recommendation_test;

use super::{validate_alpha, ParetoSolution};
use crate::utils::{compare_floats, SearchError, SearchResult};

/// A pareto solution selected with a trade-off weight.
#[derive(Clone, Debug, PartialEq)]
pub struct RecommendedSolution {
    /// Selected solution with raw objective values.
    pub solution: ParetoSolution,
    /// Weighted score of normalized objectives, lower is better.
    pub score: f64,
    /// Cost normalized over the front into `[0, 1]`.
    pub normalized_cost: f64,
    /// Emissions normalized over the front into `[0, 1]`.
    pub normalized_co2: f64,
}

/// Selects one solution from the front by minimizing `alpha * cost + (1 - alpha) * co2` over
/// min-max normalized objectives. Ties go to lower cost, then to lower population index.
pub fn recommend(front: &[ParetoSolution], alpha: f64) -> SearchResult<RecommendedSolution> {
    validate_alpha(alpha)?;

    let cost_range = get_range(front.iter().map(|solution| solution.cost));
    let co2_range = get_range(front.iter().map(|solution| solution.co2));

    front
        .iter()
        .map(|solution| {
            let normalized_cost = normalize(solution.cost, cost_range);
            let normalized_co2 = normalize(solution.co2, co2_range);

            RecommendedSolution {
                solution: solution.clone(),
                score: alpha * normalized_cost + (1. - alpha) * normalized_co2,
                normalized_cost,
                normalized_co2,
            }
        })
        .min_by(|a, b| {
            compare_floats(a.score, b.score)
                .then_with(|| compare_floats(a.solution.cost, b.solution.cost))
                .then_with(|| a.solution.index.cmp(&b.solution.index))
        })
        .ok_or_else(|| SearchError::InvalidInput("cannot recommend from an empty pareto front".to_string()))
}

fn get_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| (min.min(value), max.max(value)))
}

fn normalize(value: f64, (min, max): (f64, f64)) -> f64 {
    if max > min {
        (value - min) / (max - min)
    } else {
        0.
    }
}
