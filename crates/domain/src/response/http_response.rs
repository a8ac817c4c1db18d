//! Captured HTTP response
//!
//! Holds what came back from one call: status, headers, body and timing,
//! plus the small set of checks the contract suites make against it.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::testing::{AssertionFailure, StatusExpectation};

const PREVIEW_LEN: usize = 100;

/// An HTTP response as received by the harness.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers as a map.
    pub headers: HashMap<String, String>,
    /// Response body decoded lossily as UTF-8.
    pub body: String,
    /// Time from sending the request to receiving the full body.
    pub duration: Duration,
    /// Content-Type header value (extracted for convenience).
    pub content_type: Option<String>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` from raw response data.
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, String>,
        body: &[u8],
        duration: Duration,
    ) -> Self {
        let content_type = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .map(|(_, v)| v.clone());

        Self {
            status,
            headers,
            body: String::from_utf8_lossy(body).into_owned(),
            duration,
            content_type,
        }
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the body is blank or an empty JSON object.
    #[must_use]
    pub fn is_blank_or_empty_object(&self) -> bool {
        let trimmed = self.body.trim();
        trimmed.is_empty()
            || serde_json::from_str::<Value>(trimmed)
                .is_ok_and(|v| v.as_object().is_some_and(serde_json::Map::is_empty))
    }

    /// Returns true if this response says "no such resource".
    ///
    /// The sandbox API answers a missing id either with `404`, or with `200`
    /// and an empty object or body. Both are accepted here so a stricter
    /// backend only needs this one check changed.
    #[must_use]
    pub fn is_missing_resource(&self) -> bool {
        self.status == 404 || (self.status == 200 && self.is_blank_or_empty_object())
    }

    /// Decodes the body into a typed payload.
    ///
    /// # Errors
    ///
    /// Returns an [`AssertionFailure`] if the body does not decode.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AssertionFailure> {
        serde_json::from_str(&self.body).map_err(|e| {
            AssertionFailure::with_actual(
                self.body_preview(),
                format!("Body does not decode as expected JSON: {e}"),
            )
        })
    }

    /// Checks the status code equals `code`.
    ///
    /// # Errors
    ///
    /// Returns an [`AssertionFailure`] if the status differs.
    pub fn expect_status(&self, code: u16) -> Result<&Self, AssertionFailure> {
        self.expect_status_in(&StatusExpectation::exact(code))
    }

    /// Checks the status code against an expectation.
    ///
    /// # Errors
    ///
    /// Returns an [`AssertionFailure`] if the status does not match.
    pub fn expect_status_in(
        &self,
        expected: &StatusExpectation,
    ) -> Result<&Self, AssertionFailure> {
        if expected.matches(self.status) {
            Ok(self)
        } else {
            Err(AssertionFailure::with_actual(
                self.status.to_string(),
                format!(
                    "Expected status {}, got {}",
                    expected.description(),
                    self.status
                ),
            ))
        }
    }

    /// Checks the response arrived strictly under `limit`.
    ///
    /// # Errors
    ///
    /// Returns an [`AssertionFailure`] if the response took `limit` or longer.
    pub fn expect_faster_than(&self, limit: Duration) -> Result<&Self, AssertionFailure> {
        if self.duration < limit {
            Ok(self)
        } else {
            let actual_ms = self.duration.as_millis();
            Err(AssertionFailure::with_actual(
                format!("{actual_ms}ms"),
                format!(
                    "Response took {actual_ms}ms, expected < {}ms",
                    limit.as_millis()
                ),
            ))
        }
    }

    /// Checks the response reports a missing resource.
    ///
    /// # Errors
    ///
    /// Returns an [`AssertionFailure`] for any other status/body combination.
    pub fn expect_missing_resource(&self) -> Result<&Self, AssertionFailure> {
        if self.is_missing_resource() {
            return Ok(self);
        }
        if self.status == 200 {
            Err(AssertionFailure::with_actual(
                self.body_preview(),
                format!(
                    "Expected empty object or empty body for non-existent resource, got: {}",
                    self.body_preview()
                ),
            ))
        } else {
            Err(AssertionFailure::with_actual(
                self.status.to_string(),
                format!("Expected status 200 or 404, got: {}", self.status),
            ))
        }
    }

    /// Decodes the body as a JSON array and checks it has at least one item.
    ///
    /// # Errors
    ///
    /// Returns an [`AssertionFailure`] if the body is not a non-empty array.
    pub fn expect_non_empty_collection(&self) -> Result<Vec<Value>, AssertionFailure> {
        let items: Vec<Value> = self.json()?;
        if items.is_empty() {
            Err(AssertionFailure::with_actual(
                "0",
                "Expected a non-empty collection",
            ))
        } else {
            Ok(items)
        }
    }

    /// Checks every item of a collection body has `field == expected`.
    ///
    /// # Errors
    ///
    /// Returns an [`AssertionFailure`] naming the first item that differs.
    pub fn expect_every_item(
        &self,
        field: &str,
        expected: impl Into<Value>,
    ) -> Result<&Self, AssertionFailure> {
        let expected = expected.into();
        let items = self.expect_non_empty_collection()?;
        for (index, item) in items.iter().enumerate() {
            let actual = item.get(field).unwrap_or(&Value::Null);
            if *actual != expected {
                return Err(AssertionFailure::with_actual(
                    actual.to_string(),
                    format!("Item {index}: expected {field} = {expected}, got {actual}"),
                ));
            }
        }
        Ok(self)
    }

    fn body_preview(&self) -> String {
        if self.body.chars().count() > PREVIEW_LEN {
            let head: String = self.body.chars().take(PREVIEW_LEN).collect();
            format!("{head}...")
        } else {
            self.body.clone()
        }
    }
}
