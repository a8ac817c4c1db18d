//! Contrail - contract suites for a JSONPlaceholder-style API
//!
//! Wires the harness to its production adapters. The suites under
//! `tests/` are marked ignored because they need a live API:
//!
//! ```text
//! BASE_URL=https://jsonplaceholder.typicode.com cargo test -p contrail -- --ignored
//! ```
//!
//! `BASE_URL` may also be set in a `.env` file in the working directory.

pub mod test_data;

use std::sync::Arc;

use contrail_application::{Harness, HarnessError, OutcomeLogger};
use contrail_infrastructure::{ReqwestHttpClient, SystemClock, TracingSink, global_resolver, init_tracing};

pub use contrail_application::{CaseContext, CaseResult, ConfigResolver, TestCase};
pub use contrail_domain::resource::{Album, Comment, Photo, Post, Todo, User};
pub use contrail_domain::{AssertionFailure, Resource, StatusExpectation};

/// The harness as wired for live runs.
pub type LiveHarness = Harness<ReqwestHttpClient, OutcomeLogger<SystemClock, TracingSink>>;

/// Builds a harness for the current test.
///
/// Installs the tracing subscriber on first use. Configuration is shared
/// process-wide and resolved on the first case that runs; the HTTP client
/// is new per call, so each test runtime gets its own.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn harness() -> Result<LiveHarness, HarnessError> {
    init_tracing();
    let client = ReqwestHttpClient::new()?;
    Ok(Harness::new(
        global_resolver(),
        Arc::new(client),
        Arc::new(OutcomeLogger::new(SystemClock::new(), TracingSink)),
    ))
}
