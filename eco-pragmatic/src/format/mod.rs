//! This module defines logic to deserialize problem and search configuration in pragmatic format
//! from json input and to create and write pragmatic solution.
//!

extern crate serde_json;

use eco_core::utils::SearchError;
use serde::Serialize;
use std::fmt;

mod location;
pub use self::location::*;

pub mod config;
pub mod problem;
pub mod solution;

/// A format error.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|err| format!("cannot serialize error: '{err}'"))
    }

    /// Formats multiple format errors into json string.
    pub fn format_many_to_json(errors: &[Self]) -> String {
        serde_json::to_string_pretty(errors).unwrap_or_else(|err| format!("cannot serialize errors: '{err}'"))
    }

    /// Formats multiple format errors into string.
    pub fn format_many(errors: &[Self], separator: &str) -> String {
        errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join(separator)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
    }
}

impl std::error::Error for FormatError {}

impl From<SearchError> for FormatError {
    fn from(error: SearchError) -> Self {
        match error {
            SearchError::Configuration(msg) => FormatError::new(
                "E2000".to_string(),
                "invalid search configuration".to_string(),
                format!("check search parameters: '{msg}'"),
            ),
            SearchError::InvalidInput(msg) => FormatError::new(
                "E2001".to_string(),
                "invalid delivery requests".to_string(),
                format!("check requests: '{msg}'"),
            ),
            SearchError::ExternalLookup { request, cause } => FormatError::new_with_details(
                "E2002".to_string(),
                "cannot resolve request context".to_string(),
                format!("check locations and distances used by request with index '{request}'"),
                cause.to_string(),
            ),
        }
    }
}

/// Keeps track of multiple format errors.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiFormatError {
    /// Inner errors.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Formats errors into json string.
    pub fn to_json(&self) -> String {
        FormatError::format_many_to_json(self.errors.as_slice())
    }

    /// Returns error codes in their order.
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|err| err.code.as_str()).collect()
    }
}

impl fmt::Display for MultiFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", FormatError::format_many(self.errors.as_slice(), "\n"))
    }
}

impl std::error::Error for MultiFormatError {}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        MultiFormatError { errors }
    }
}

impl From<FormatError> for MultiFormatError {
    fn from(error: FormatError) -> Self {
        MultiFormatError { errors: vec![error] }
    }
}

impl From<SearchError> for MultiFormatError {
    fn from(error: SearchError) -> Self {
        FormatError::from(error).into()
    }
}
