//! Response specification type

use serde::{Deserialize, Serialize};

use super::HttpResponse;
use crate::testing::AssertionFailure;

/// Immutable expectations a test case may attach to a response.
///
/// Unlike [`crate::RequestSpec`] this is never applied implicitly: write
/// endpoints answer with headers that differ from reads, so every case opts
/// in by calling [`ResponseSpec::verify`] itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSpec {
    expected_content_type: String,
}

impl ResponseSpec {
    /// Creates a response specification expecting the given content type.
    pub fn new(expected_content_type: impl Into<String>) -> Self {
        Self {
            expected_content_type: expected_content_type.into(),
        }
    }

    /// Returns the expected content type.
    #[must_use]
    pub fn expected_content_type(&self) -> &str {
        &self.expected_content_type
    }

    /// Checks the response `Content-Type` contains the expected type,
    /// ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns an [`AssertionFailure`] if the header is absent or differs.
    pub fn verify(&self, response: &HttpResponse) -> Result<(), AssertionFailure> {
        let actual = response
            .content_type
            .as_deref()
            .ok_or_else(|| AssertionFailure::new("Content-Type header should be present"))?;

        if actual
            .to_ascii_lowercase()
            .contains(&self.expected_content_type.to_ascii_lowercase())
        {
            Ok(())
        } else {
            Err(AssertionFailure::with_actual(
                actual,
                format!(
                    "Expected Content-Type to contain '{}' but was: {actual}",
                    self.expected_content_type
                ),
            ))
        }
    }

    /// Runs [`Self::verify`], then checks that a charset parameter, if the
    /// response declares one, names `charset`. A missing charset passes.
    ///
    /// # Errors
    ///
    /// Returns an [`AssertionFailure`] if the content type is wrong, cannot
    /// be parsed, or declares another charset.
    pub fn verify_with_charset(
        &self,
        response: &HttpResponse,
        charset: &str,
    ) -> Result<(), AssertionFailure> {
        self.verify(response)?;

        let raw = response.content_type.as_deref().unwrap_or_default();
        let parsed: mime::Mime = raw.parse().map_err(|e| {
            AssertionFailure::with_actual(raw, format!("Content-Type is not a valid media type: {e}"))
        })?;

        match parsed.get_param(mime::CHARSET) {
            Some(declared) if !declared.as_str().eq_ignore_ascii_case(charset) => {
                Err(AssertionFailure::with_actual(
                    raw,
                    format!("Expected charset to be {charset} when present, but was: {raw}"),
                ))
            }
            _ => Ok(()),
        }
    }
}
