//! Request and response spec construction

use contrail_domain::{Configuration, Headers, RequestSpec, ResponseSpec};

/// Builds the per-case request and response specs from configuration.
///
/// Every call returns a fresh value. Specs built from the same
/// configuration compare equal, but no instance is reused across cases.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecBuilder;

impl SpecBuilder {
    /// Builds the request defaults: base URI, JSON content type and an
    /// `Accept: application/json` header.
    #[must_use]
    pub fn build_request_spec(configuration: &Configuration) -> RequestSpec {
        RequestSpec::new(
            configuration.base_uri().clone(),
            configuration.content_type(),
            Headers::new().with("Accept", configuration.accept_header()),
        )
    }

    /// Builds the response expectation: a JSON content type.
    #[must_use]
    pub fn build_response_spec(configuration: &Configuration) -> ResponseSpec {
        ResponseSpec::new(configuration.content_type())
    }
}
