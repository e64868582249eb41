//! Specifies logic to read problem from json input.

#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

use crate::format::MultiFormatError;
use eco_core::models::Problem as CoreProblem;
use std::io::{BufReader, Read};

mod model;
pub use self::model::*;

mod reader;
pub use self::reader::*;

/// Reads specific problem definition from various sources.
pub trait PragmaticProblem {
    /// Reads problem defined in pragmatic format.
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError>;
}

impl<R: Read> PragmaticProblem for BufReader<R> {
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        let problem = deserialize_problem(self)?;

        map_to_problem(&problem)
    }
}

impl PragmaticProblem for String {
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        BufReader::new(self.as_bytes()).read_pragmatic()
    }
}

impl PragmaticProblem for Problem {
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        map_to_problem(&self)
    }
}
