//! Contrail Application - Harness core and ports
//!
//! This crate resolves configuration, builds the per-case request and
//! response specs, runs test cases and reports their outcomes. External
//! systems (HTTP, clock, log output, property stores) sit behind the
//! traits in [`ports`].

pub mod config_resolver;
pub mod error;
pub mod harness;
pub mod lifecycle;
pub mod ports;
pub mod session;
pub mod spec_builder;

pub use config_resolver::ConfigResolver;
pub use error::{CaseResult, ConfigError, HarnessError};
pub use harness::{CaseContext, Harness, TestCase};
pub use lifecycle::{LifecycleObserver, OutcomeLogger};
pub use session::ApiSession;
pub use spec_builder::SpecBuilder;
