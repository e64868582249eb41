//! This module provides functionality to validate problem definition for logical correctness.

#[cfg(test)]
#[path = "../../tests/unit/validation/validation_test.rs"]
mod validation_test;

use crate::format::problem::*;
use crate::format::{FormatError, MultiFormatError};

mod common;
use self::common::*;

mod locations;
use self::locations::validate_locations;

mod requests;
use self::requests::validate_requests;

/// Keeps problem definition and lookups built from it.
pub struct ValidationContext<'a> {
    /// A problem definition.
    pub problem: &'a Problem,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// Validates problem on set of rules and returns all found errors.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let errors = validate_requests(self)
            .err()
            .into_iter()
            .chain(validate_locations(self).err())
            .flatten()
            .collect::<Vec<_>>();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }

    /// Get list of requests from the problem.
    fn requests(&self) -> impl Iterator<Item = &Request> {
        self.problem.requests.iter()
    }

    /// Get list of locations from the problem.
    fn locations(&self) -> impl Iterator<Item = &Location> {
        self.problem.locations.iter()
    }

    /// Get list of explicit distances from the problem.
    fn distances(&self) -> impl Iterator<Item = &Distance> {
        self.problem.distances.iter().flat_map(|distances| distances.iter())
    }
}
