//! The solver module contains the multi-objective search which assigns transport modes to
//! delivery requests.
//!
//! # Search
//!
//! The search is the NSGA-II genetic algorithm. An individual keeps one transport mode per
//! request and has two minimized objectives: total cost and total CO2 emissions. Each generation
//! selects parents by binary tournament on rank and crowding distance, creates offspring with
//! crossover and mutation, evaluates them and keeps the best individuals of the merged
//! population. The search stops after configured amount of generations, when wall-clock budget is
//! spent, or when cancellation is requested. Termination is checked only between generations, so
//! the result always describes a completely evaluated population.
//!
//! The first front of the final population is returned together with one recommended solution
//! selected by trade-off weight `alpha` between normalized cost (`alpha = 1`) and normalized
//! emissions (`alpha = 0`).
//!
//! # Determinism
//!
//! All random decisions are taken from a single generator owned by the run [`Environment`]. Fitness
//! evaluation can run in parallel, but results are collected in population order, so the same
//! seed, problem and configuration always produce the same front.
//!
//! # Examples
//!
//! ```
//! # use eco_core::prelude::*;
//! # use std::sync::Arc;
//! struct Network;
//!
//! impl RailAccessLookup for Network {
//!     fn has_rail_access(&self, location: &str) -> Result<bool, GenericError> {
//!         Ok(location != "Ghardaia")
//!     }
//! }
//!
//! impl ZoneLookup for Network {
//!     fn zone(&self, location: &str) -> Result<Zone, GenericError> {
//!         Ok(if location == "Ghardaia" { Zone::South } else { Zone::North })
//!     }
//! }
//!
//! impl DistanceLookup for Network {
//!     fn distance_km(&self, _: &str, _: &str) -> Result<f64, GenericError> {
//!         Ok(420.)
//!     }
//! }
//!
//! let requests = vec![
//!     DeliveryRequest::new("Alger", "Oran", 20., CargoType::General),
//!     DeliveryRequest::new("Alger", "Ghardaia", 5., CargoType::Refrigerated),
//! ];
//! let config = SearchConfigBuilder::default().with_population_size(20).with_generations(10).build()?;
//!
//! let solution = solve(requests, &Network, SearchParams { alpha: 0.5, seed: 42, config })?;
//!
//! assert!(!solution.pareto_front.is_empty());
//! assert_eq!(solution.recommended.solution.decisions.len(), 2);
//! # Ok::<(), SearchError>(())
//! ```

mod analysis;
pub use self::analysis::*;

mod config;
pub use self::config::*;

mod engine;
pub use self::engine::*;

mod individual;
pub use self::individual::*;

mod operators;
pub use self::operators::*;

mod outcome;
pub use self::outcome::*;

mod recommendation;
pub use self::recommendation::*;

mod selection;
pub use self::selection::*;

mod telemetry;
pub use self::telemetry::*;

mod termination;
pub use self::termination::*;

use crate::models::{ContextLookup, DeliveryRequest, Problem};
use crate::utils::{Environment, SearchResult};
use std::sync::Arc;

/// Parameters of a single search run.
#[derive(Clone, Debug)]
pub struct SearchParams {
    /// Trade-off weight in `[0, 1]`: 1 selects by cost only, 0 by emissions only.
    pub alpha: f64,
    /// A seed of the random generator.
    pub seed: u64,
    /// Search configuration.
    pub config: SearchConfig,
}

/// A result of the search.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Non-dominated solutions of the final population sorted by cost, emissions and index.
    pub pareto_front: Vec<ParetoSolution>,
    /// A solution selected from the front with the trade-off weight.
    pub recommended: RecommendedSolution,
    /// One entry per completed generation.
    pub logbook: Vec<LogbookEntry>,
    /// Run statistics.
    pub statistics: Statistics,
}

/// Resolves request contexts with `lookup` and runs the search with seeded random generator.
pub fn solve<L>(requests: Vec<DeliveryRequest>, lookup: &L, params: SearchParams) -> SearchResult<Solution>
where
    L: ContextLookup + ?Sized,
{
    params.config.validate()?;
    validate_alpha(params.alpha)?;

    let problem = Problem::new(requests, lookup)?;

    solve_problem(Arc::new(problem), params.config, params.alpha, Environment::new_with_seed(params.seed))
}

/// Runs the search on already resolved problem within given environment.
pub fn solve_problem(
    problem: Arc<Problem>,
    config: SearchConfig,
    alpha: f64,
    environment: Environment,
) -> SearchResult<Solution> {
    validate_alpha(alpha)?;

    let outcome = Nsga2Engine::new(problem, config, environment)?.run();

    Ok(Solution {
        recommended: recommend(outcome.pareto_front.as_slice(), alpha)?,
        pareto_front: outcome.pareto_front,
        logbook: outcome.logbook,
        statistics: outcome.statistics,
    })
}
