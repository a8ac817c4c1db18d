//! Expectation vocabulary shared by the contract suites.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Expected status code value or set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum StatusExpectation {
    /// Exact status code.
    Exact(u16),
    /// One of multiple status codes.
    OneOf(Vec<u16>),
}

impl StatusExpectation {
    /// Check if a status code matches this expectation.
    #[must_use]
    pub fn matches(&self, status: u16) -> bool {
        match self {
            Self::Exact(expected) => status == *expected,
            Self::OneOf(codes) => codes.contains(&status),
        }
    }

    /// Get description of the expectation.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Exact(code) => format!("= {code}"),
            Self::OneOf(codes) => {
                let codes_str: Vec<_> = codes.iter().map(ToString::to_string).collect();
                format!("in [{}]", codes_str.join(", "))
            }
        }
    }

    /// Create an exact status expectation.
    #[must_use]
    pub const fn exact(code: u16) -> Self {
        Self::Exact(code)
    }

    /// Create an expectation accepting any of the given codes.
    #[must_use]
    pub fn one_of(codes: &[u16]) -> Self {
        Self::OneOf(codes.to_vec())
    }

    /// Statuses a delete is allowed to answer with.
    #[must_use]
    pub fn deleted() -> Self {
        Self::one_of(&[200, 204])
    }
}

/// An expectation that did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    /// What was expected and what went wrong.
    pub message: String,
    /// The observed value, when one exists.
    pub actual: Option<String>,
}

impl AssertionFailure {
    /// Creates a failure with a message only.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            actual: None,
        }
    }

    /// Creates a failure carrying the observed value.
    pub fn with_actual(actual: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            actual: Some(actual.into()),
        }
    }
}
