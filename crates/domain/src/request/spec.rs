//! Request specification type

use serde::{Deserialize, Serialize};
use url::Url;

use super::{ApiRequest, Header, Headers, PreparedRequest, QueryParams};
use crate::error::{DomainError, DomainResult};

/// Immutable defaults applied to every outgoing call of a test case.
///
/// Holds the target base URI, the request content type and the default
/// headers. Two specs built from the same configuration compare equal but
/// are independent values; nothing about a spec is shared between cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    base_uri: Url,
    content_type: String,
    headers: Headers,
}

impl RequestSpec {
    /// Creates a request specification.
    #[must_use]
    pub fn new(base_uri: Url, content_type: impl Into<String>, headers: Headers) -> Self {
        Self {
            base_uri,
            content_type: content_type.into(),
            headers,
        }
    }

    /// Returns the base URI every call path is appended to.
    #[must_use]
    pub const fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    /// Returns the request content type.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the default headers (excluding `Content-Type`).
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Resolves a call path and query against the base URI.
    ///
    /// The path is appended to the base URI's own path, so a base of
    /// `http://host/api` and a path of `/posts` target `http://host/api/posts`.
    /// A query already on the base URI is kept ahead of the call's query.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the base URI cannot carry a path.
    pub fn resolve_url(&self, path: &str, query: &QueryParams) -> DomainResult<Url> {
        if self.base_uri.cannot_be_a_base() {
            return Err(DomainError::InvalidUrl(format!(
                "cannot append a path to {}",
                self.base_uri
            )));
        }

        let mut url = self.base_uri.clone();
        let base_path = url.path().trim_end_matches('/').to_string();
        let relative = path.trim_start_matches('/');
        if relative.is_empty() {
            url.set_path(&format!("{base_path}/"));
        } else {
            url.set_path(&format!("{base_path}/{relative}"));
        }
        url.set_fragment(None);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for param in query.iter() {
                pairs.append_pair(&param.key, &param.value);
            }
        }
        Ok(url)
    }

    /// Applies this spec to a call, producing the request to put on the wire.
    ///
    /// Spec headers and the content type come first; headers set on the
    /// call replace them by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be resolved or the body cannot
    /// be encoded.
    pub fn prepare(&self, request: &ApiRequest) -> DomainResult<PreparedRequest> {
        let url = self.resolve_url(request.path(), request.query_params())?;

        let mut headers = self.headers.clone();
        headers.set(Header::new("Content-Type", self.content_type.clone()));
        headers.merge(request.headers());

        let body = request
            .body()
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| DomainError::InvalidBody(e.to_string()))?;

        Ok(PreparedRequest {
            method: request.method(),
            url,
            headers,
            body,
        })
    }
}
