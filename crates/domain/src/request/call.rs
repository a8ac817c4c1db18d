//! Per-call request types.

use serde::Serialize;
use url::Url;

use super::{Header, Headers, HttpMethod, QueryParam, QueryParams};
use crate::error::{DomainError, DomainResult};

/// One call a test case wants to make, relative to its request spec.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: HttpMethod,
    path: String,
    query: QueryParams,
    headers: Headers,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Creates a call with the given method and path.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Creates a GET call.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST call.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Creates a PUT call.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// Creates a DELETE call.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Adds an equality query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.add(QueryParam::new(key, value.to_string()));
        self
    }

    /// Overrides a header for this call only.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(Header::new(name, value));
        self
    }

    /// Attaches a JSON body encoded from a typed payload.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBody`] if the payload cannot be encoded.
    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> DomainResult<Self> {
        let value =
            serde_json::to_value(payload).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the path relative to the base URI.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameters.
    #[must_use]
    pub const fn query_params(&self) -> &QueryParams {
        &self.query
    }

    /// Returns the per-call header overrides.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the JSON body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

/// A fully resolved request ready for an HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL including the query string
    pub url: Url,
    /// Every header to send
    pub headers: Headers,
    /// Encoded body bytes
    pub body: Option<Vec<u8>>,
}
