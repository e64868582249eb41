//! Generates synthetic delivery requests for experiments and benchmarks.

#[cfg(test)]
#[path = "../tests/unit/generator_test.rs"]
mod generator_test;

use crate::format::problem::{Location, Problem, Request};
use eco_core::models::CargoType;
use eco_core::utils::GenericError;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand::rngs::StdRng;

/// A range of generated cargo weight in tonnes.
const CARGO_RANGE: (f64, f64) = (2., 50.);

/// Priorities with their weights: mostly normal, some urgent, few very urgent.
const PRIORITY_WEIGHTS: [(u8, f64); 3] = [(1, 0.7), (2, 0.2), (3, 0.1)];

/// Generates `size` requests between given locations. Origins are picked proportionally to location
/// demand (1 when not set), destinations uniformly among other locations. Same seed produces
/// the same requests.
pub fn generate_requests(locations: &[Location], size: usize, seed: u64) -> Result<Vec<Request>, GenericError> {
    if locations.len() < 2 {
        return Err("at least two locations are needed to generate requests".into());
    }

    let mut rng = StdRng::seed_from_u64(seed);

    let origins = WeightedIndex::new(locations.iter().map(|location| location.demand.unwrap_or(1.)))
        .map_err(|err| format!("invalid location demand: '{err}'"))?;
    let priorities = WeightedIndex::new(PRIORITY_WEIGHTS.iter().map(|(_, weight)| *weight))
        .map_err(|err| format!("invalid priority weights: '{err}'"))?;

    (0..size)
        .map(|_| {
            let origin_idx = origins.sample(&mut rng);
            let destination_idx = {
                let idx = rng.gen_range(0..locations.len() - 1);
                if idx >= origin_idx {
                    idx + 1
                } else {
                    idx
                }
            };

            let cargo_tonnes = (rng.gen_range(CARGO_RANGE.0..CARGO_RANGE.1) * 10.).round() / 10.;
            let priority = PRIORITY_WEIGHTS[priorities.sample(&mut rng)].0;
            let cargo_type = CargoType::ALL.choose(&mut rng).copied().unwrap_or(CargoType::General);

            Ok(Request {
                origin: locations[origin_idx].id.clone(),
                destination: locations[destination_idx].id.clone(),
                cargo_tonnes,
                cargo_type: cargo_type.to_string(),
                priority: Some(priority),
                return_trip: None,
            })
        })
        .collect()
}

/// Replaces requests of the problem with generated ones.
pub fn generate_problem(problem: Problem, size: usize, seed: u64) -> Result<Problem, GenericError> {
    let requests = generate_requests(problem.locations.as_slice(), size, seed)?;

    Ok(Problem { requests, ..problem })
}
