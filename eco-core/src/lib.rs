//! This crate contains the core of a cost and emission aware transport planner: domain models,
//! a rule based decision cost model and a multi-objective NSGA-II search which assigns transport
//! modes to delivery requests.
//!
//! A typical flow:
//!
//! - implement [`models::ContextLookup`] traits to provide distances, zones and rail access
//! - call [`solver::solve`] with requests and [`solver::SearchParams`]
//! - use [`solver::Solution`]: pareto front, recommended solution, logbook and statistics

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod algorithms;
pub mod costs;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
