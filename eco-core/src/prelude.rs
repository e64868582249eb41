//! This module reimports a common used types.

pub use crate::models::CargoType;
pub use crate::models::Context;
pub use crate::models::DeliveryRequest;
pub use crate::models::Problem;
pub use crate::models::TransportMode;
pub use crate::models::VehicleCapacities;
pub use crate::models::Zone;
pub use crate::models::{ContextLookup, DistanceLookup, HubAssignment, RailAccessLookup, ZoneLookup};

pub use crate::costs::evaluate;
pub use crate::costs::DecisionCost;

pub use crate::solver::solve;
pub use crate::solver::solve_problem;
pub use crate::solver::Nsga2Engine;
pub use crate::solver::ParetoSolution;
pub use crate::solver::RecommendedSolution;
pub use crate::solver::SearchConfig;
pub use crate::solver::SearchConfigBuilder;
pub use crate::solver::SearchParams;
pub use crate::solver::Solution;
pub use crate::solver::Termination;

pub use crate::algorithms::nsga2::MultiObjective;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
pub use crate::utils::{GenericError, SearchError, SearchResult};
