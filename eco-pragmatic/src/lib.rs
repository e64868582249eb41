//! Pragmatic crate allows to describe transport planning problems via simple **pragmatic** json
//! format: delivery requests, locations with zones and rail access, optional explicit distances
//! and search configuration in, pareto front with a recommended solution out.
//!
//! # Examples
//!
//! ```
//! use eco_pragmatic::format::config::Config;
//! use eco_pragmatic::format::problem::deserialize_problem;
//! use eco_pragmatic::solve_pragmatic;
//! use std::io::BufReader;
//!
//! let problem = r#"{
//!   "requests": [
//!     { "origin": "Alger", "destination": "Oran", "cargoTonnes": 20, "cargoType": "general" }
//!   ],
//!   "locations": [
//!     { "id": "Alger", "zone": "north", "railAccess": true },
//!     { "id": "Oran", "zone": "north", "railAccess": true }
//!   ],
//!   "distances": [ { "from": "Alger", "to": "Oran", "km": 432 } ]
//! }"#;
//! let problem = deserialize_problem(BufReader::new(problem.as_bytes())).expect("cannot read problem");
//! let config = Config { population_size: Some(8), generations: Some(5), ..Config::default() };
//!
//! let solution = solve_pragmatic(&problem, &config).expect("cannot solve problem");
//!
//! assert!(!solution.pareto_front.is_empty());
//! assert_eq!(solution.recommended_solution.decisions.len(), 1);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
pub mod features;

mod validation;

pub mod format;
pub mod generator;

use crate::format::config::{create_search_params, read_config, Config};
use crate::format::problem::{deserialize_problem, map_to_problem, Problem};
use crate::format::solution::{create_solution, Solution};
use crate::format::MultiFormatError;
use eco_core::solver::{solve_problem, validate_alpha};
use eco_core::utils::Environment;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// Solves problem with given configuration. Configuration is checked before the problem.
pub fn solve_pragmatic(problem: &Problem, config: &Config) -> Result<Solution, MultiFormatError> {
    let params = create_search_params(config)?;
    validate_alpha(params.alpha)?;

    let problem = Arc::new(map_to_problem(problem)?);
    let environment = Environment::new_with_seed(params.seed);

    let solution = solve_problem(problem.clone(), params.config, params.alpha, environment)?;

    Ok(create_solution(problem.as_ref(), &solution))
}

/// Reads problem and configuration from json, solves it and returns serialized into json solution.
/// On failure, returns serialized into json list of errors.
pub fn get_solution_serialized<R1: Read, R2: Read>(
    problem: BufReader<R1>,
    config: BufReader<R2>,
) -> Result<String, String> {
    let solve = || -> Result<Solution, MultiFormatError> {
        let problem = deserialize_problem(problem)?;
        let config = read_config(config)?;

        solve_pragmatic(&problem, &config)
    };

    let solution = solve().map_err(|errors| errors.to_json())?;

    serde_json::to_string_pretty(&solution).map_err(|err| err.to_string())
}
