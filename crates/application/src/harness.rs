//! Test case runner
//!
//! [`Harness::run`] drives one case through its whole lifecycle:
//!
//! 1. A disabled case is reported as skipped and its body never runs.
//! 2. Configuration is resolved; failure is reported and returned.
//! 3. Fresh request/response specs are built and the request spec is
//!    installed on a new [`ApiSession`] owned by the case.
//! 4. The body runs on its own task. Its result, or its panic, is
//!    reported to the observer exactly once.
//! 5. The context, and with it the session, is dropped. Nothing the body
//!    did to its session is visible to the next case.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use contrail_domain::{ApiRequest, Configuration, HttpResponse, RequestSpec, ResponseSpec};
use tracing::Instrument;
use uuid::Uuid;

use crate::config_resolver::ConfigResolver;
use crate::error::{CaseResult, HarnessError};
use crate::lifecycle::LifecycleObserver;
use crate::ports::HttpClient;
use crate::session::ApiSession;
use crate::spec_builder::SpecBuilder;

/// A named test case, optionally disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    name: String,
    disabled: bool,
    reason: Option<String>,
}

impl TestCase {
    /// Creates an enabled case with a display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            disabled: false,
            reason: None,
        }
    }

    /// Marks the case disabled without a reason.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self.reason = None;
        self
    }

    /// Marks the case disabled with a reason.
    #[must_use]
    pub fn disabled_because(mut self, reason: impl Into<String>) -> Self {
        self.disabled = true;
        self.reason = Some(reason.into());
        self
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the case will be skipped.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Everything a case body gets to work with.
///
/// Owned by exactly one case and dropped when it ends.
pub struct CaseContext<C: HttpClient> {
    configuration: Configuration,
    request_spec: RequestSpec,
    response_spec: ResponseSpec,
    session: ApiSession<C>,
}

impl<C: HttpClient> CaseContext<C> {
    /// Returns the configuration the specs were built from.
    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Returns this case's request spec (also installed on the session).
    #[must_use]
    pub const fn request_spec(&self) -> &RequestSpec {
        &self.request_spec
    }

    /// Returns this case's response spec. It is never applied implicitly.
    #[must_use]
    pub const fn response_spec(&self) -> &ResponseSpec {
        &self.response_spec
    }

    /// Returns the session calls go through.
    #[must_use]
    pub const fn session(&self) -> &ApiSession<C> {
        &self.session
    }

    /// Returns the session for changing its defaults within this case.
    pub fn session_mut(&mut self) -> &mut ApiSession<C> {
        &mut self.session
    }

    /// Sends a call through the session.
    ///
    /// # Errors
    ///
    /// See [`ApiSession::send`].
    pub async fn send(&self, request: &ApiRequest) -> Result<HttpResponse, HarnessError> {
        self.session.send(request).await
    }
}

impl<C: HttpClient> std::fmt::Debug for CaseContext<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseContext")
            .field("configuration", &self.configuration)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

/// Runs test cases and reports their outcomes.
pub struct Harness<C: HttpClient, O: LifecycleObserver> {
    resolver: Arc<ConfigResolver>,
    client: Arc<C>,
    observer: Arc<O>,
}

impl<C: HttpClient, O: LifecycleObserver> Clone for Harness<C, O> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            client: Arc::clone(&self.client),
            observer: Arc::clone(&self.observer),
        }
    }
}

impl<C, O> Harness<C, O>
where
    C: HttpClient + 'static,
    O: LifecycleObserver,
{
    /// Creates a harness.
    #[must_use]
    pub const fn new(resolver: Arc<ConfigResolver>, client: Arc<C>, observer: Arc<O>) -> Self {
        Self {
            resolver,
            client,
            observer,
        }
    }

    /// Returns the observer outcomes are reported to.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Runs one case.
    ///
    /// A disabled case returns `Ok(())` after being reported as skipped.
    ///
    /// # Errors
    ///
    /// Returns the configuration error, or whatever error the body
    /// returned. Either way the failure has already been reported.
    ///
    /// # Panics
    ///
    /// Re-raises a panic from the body after reporting it as a failure.
    pub async fn run<F, Fut>(&self, case: TestCase, body: F) -> CaseResult
    where
        F: FnOnce(CaseContext<C>) -> Fut,
        Fut: Future<Output = CaseResult> + Send + 'static,
    {
        let name = case.name();

        if case.is_disabled() {
            self.observer.on_skipped(name, case.reason.as_deref());
            return Ok(());
        }

        let context = match self.prepare() {
            Ok(context) => context,
            Err(e) => {
                self.observer.on_failed(name, Some(&e.to_string()));
                return Err(e);
            }
        };

        let span = tracing::info_span!("case", name, run_id = %Uuid::now_v7());
        let handle = tokio::spawn(body(context).instrument(span));

        match handle.await {
            Ok(Ok(())) => {
                self.observer.on_passed(name);
                Ok(())
            }
            Ok(Err(e)) => {
                self.observer.on_failed(name, Some(&e.to_string()));
                Err(e)
            }
            Err(join_error) if join_error.is_panic() => {
                let payload = join_error.into_panic();
                self.observer
                    .on_failed(name, panic_message(payload.as_ref()).as_deref());
                std::panic::resume_unwind(payload)
            }
            Err(join_error) => {
                let e = HarnessError::Aborted(join_error.to_string());
                self.observer.on_failed(name, Some(&e.to_string()));
                Err(e)
            }
        }
    }

    fn prepare(&self) -> Result<CaseContext<C>, HarnessError> {
        let configuration = self.resolver.configuration()?.clone();
        let request_spec = SpecBuilder::build_request_spec(&configuration);
        let response_spec = SpecBuilder::build_response_spec(&configuration);
        let session = ApiSession::with_defaults(Arc::clone(&self.client), request_spec.clone());

        Ok(CaseContext {
            configuration,
            request_spec,
            response_spec,
            session,
        })
    }
}

impl<C: HttpClient, O: LifecycleObserver> std::fmt::Debug for Harness<C, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        Some((*text).to_string())
    } else {
        payload.downcast_ref::<String>().cloned()
    }
}
