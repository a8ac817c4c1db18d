//! Contrail Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer: a reqwest HTTP client, the system
//! clock, a `tracing` outcome sink and an environment/dotenv property
//! loader.

pub mod adapters;
pub mod logging;
pub mod properties;

pub use adapters::{ReqwestHttpClient, SystemClock};
pub use logging::{TracingSink, init_tracing};
pub use properties::{EnvPropertyLoader, global_resolver};
