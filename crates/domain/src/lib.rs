//! Contrail Domain - Core contract types
//!
//! This crate defines the domain model for the Contrail contract harness:
//! configuration values, request and response specifications, captured
//! responses, outcome records and the resource catalogue of the target API.
//! All types here are pure Rust with no I/O dependencies.

pub mod config;
pub mod error;
pub mod outcome;
pub mod request;
pub mod resource;
pub mod response;
pub mod testing;

pub use config::{BASE_URL_KEY, Configuration, PropertySource};
pub use error::{DomainError, DomainResult};
pub use outcome::{NO_MESSAGE_PROVIDED, OutcomeKind, OutcomeRecord, Severity, UNKNOWN_ERROR};
pub use request::{ApiRequest, Header, Headers, HttpMethod, PreparedRequest, QueryParams, RequestSpec};
pub use resource::Resource;
pub use response::{HttpResponse, ResponseSpec};
pub use testing::{AssertionFailure, StatusExpectation};
