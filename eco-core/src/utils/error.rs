#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt;

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericError(String);

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

/// Specifies why a search cannot be run. Any of these aborts the whole run: no partial pareto
/// front is produced.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchError {
    /// Search parameters are missing or out of their range.
    Configuration(String),
    /// Requests are malformed: empty list, non-positive cargo, unknown cargo type or a request
    /// without any feasible transport mode.
    InvalidInput(String),
    /// A collaborator cannot resolve distance, zone or rail access for the request.
    ExternalLookup {
        /// An index of the offending request.
        request: usize,
        /// A collaborator error.
        cause: GenericError,
    },
}

/// A type alias for result type with `SearchError`.
pub type SearchResult<T> = Result<T, SearchError>;

impl SearchError {
    /// Returns a short name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Configuration(_) => "configuration",
            SearchError::InvalidInput(_) => "invalid-input",
            SearchError::ExternalLookup { .. } => "external-lookup",
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            SearchError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            SearchError::ExternalLookup { request, cause } => {
                write!(f, "cannot resolve context for request {request}: {cause}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
