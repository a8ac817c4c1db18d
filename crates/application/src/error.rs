//! Application error types

use contrail_domain::{AssertionFailure, DomainError};
use thiserror::Error;

use crate::ports::TransportError;

/// Configuration could not be resolved.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No property source holds the key, or it is blank.
    #[error("required configuration value {key} is not set (checked: {checked})")]
    Missing {
        /// The key that was looked up.
        key: String,
        /// Names of the sources consulted, in order.
        checked: String,
    },

    /// The value exists but cannot be used.
    #[error("configuration value {key} from {origin} is invalid: {reason}")]
    Invalid {
        /// The key that was looked up.
        key: String,
        /// Name of the source the value came from.
        origin: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A property source exists but could not be read.
    #[error("failed to read configuration source {origin}: {reason}")]
    Unreadable {
        /// Name of the source.
        origin: String,
        /// Underlying error.
        reason: String,
    },
}

/// Every way a test case can fail.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Configuration needed by the case is missing or invalid.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// An expectation on the response did not hold.
    #[error("{0}")]
    Assertion(#[from] AssertionFailure),

    /// The call never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A request could not be built.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A call was made on a session with no request spec installed.
    #[error("no request spec installed on this session")]
    Unconfigured,

    /// The case task was cancelled before finishing.
    #[error("test case aborted: {0}")]
    Aborted(String),
}

/// Result type alias for test case bodies.
pub type CaseResult = Result<(), HarnessError>;
