//! A collection of reusable algorithms without dependencies on domain models.

pub mod nsga2;
