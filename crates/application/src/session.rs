//! Per-case API session
//!
//! An [`ApiSession`] is the only place request defaults live. Each test
//! case owns exactly one, so installing, replacing or resetting defaults
//! in one case can never be observed by another.

use std::sync::Arc;

use contrail_domain::{ApiRequest, HttpResponse, RequestSpec};

use crate::error::HarnessError;
use crate::ports::HttpClient;

/// Sends calls for one test case using the defaults installed on it.
pub struct ApiSession<C: HttpClient> {
    client: Arc<C>,
    defaults: Option<RequestSpec>,
}

impl<C: HttpClient> ApiSession<C> {
    /// Creates a session with no defaults installed.
    #[must_use]
    pub const fn new(client: Arc<C>) -> Self {
        Self {
            client,
            defaults: None,
        }
    }

    /// Creates a session with `spec` already installed.
    #[must_use]
    pub const fn with_defaults(client: Arc<C>, spec: RequestSpec) -> Self {
        Self {
            client,
            defaults: Some(spec),
        }
    }

    /// Installs `spec` as this session's request defaults, replacing any
    /// previous ones.
    pub fn install(&mut self, spec: RequestSpec) {
        self.defaults = Some(spec);
    }

    /// Removes the installed defaults.
    pub fn reset(&mut self) {
        self.defaults = None;
    }

    /// Returns true if request defaults are installed.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.defaults.is_some()
    }

    /// Returns the installed request defaults.
    #[must_use]
    pub const fn defaults(&self) -> Option<&RequestSpec> {
        self.defaults.as_ref()
    }

    /// Sends a call with the installed defaults applied.
    ///
    /// No response expectation is applied; the caller checks the status,
    /// body and headers it cares about.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Unconfigured`] if nothing is installed, or a
    /// domain or transport error if the call cannot be built or sent.
    pub async fn send(&self, request: &ApiRequest) -> Result<HttpResponse, HarnessError> {
        let spec = self.defaults.as_ref().ok_or(HarnessError::Unconfigured)?;
        self.send_with(spec, request).await
    }

    /// Sends a call with an explicit spec, ignoring the installed one.
    ///
    /// # Errors
    ///
    /// Returns a domain or transport error if the call cannot be built or
    /// sent.
    pub async fn send_with(
        &self,
        spec: &RequestSpec,
        request: &ApiRequest,
    ) -> Result<HttpResponse, HarnessError> {
        let prepared = spec.prepare(request)?;
        tracing::debug!(
            method = %prepared.method,
            url = %prepared.url,
            "sending request"
        );

        let response = self.client.execute(&prepared).await?;
        tracing::debug!(
            status = response.status,
            duration_ms = u64::try_from(response.duration.as_millis()).unwrap_or(u64::MAX),
            "received response"
        );
        Ok(response)
    }
}

impl<C: HttpClient> std::fmt::Debug for ApiSession<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSession")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}
