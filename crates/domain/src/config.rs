//! Harness configuration values.
//!
//! [`Configuration`] is the resolved value object every spec is built from.
//! [`PropertySource`] is one named layer of raw key-value settings; the
//! resolver consults an ordered list of them and the first one holding a
//! key wins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Key holding the target API base URI.
pub const BASE_URL_KEY: &str = "BASE_URL";

/// Content type sent with every request.
pub const CONTENT_TYPE: &str = "application/json";

/// Value of the `Accept` header sent with every request.
pub const ACCEPT: &str = "application/json";

/// Charset expected on text responses.
pub const CHARSET: &str = "UTF-8";

/// Resolved harness configuration.
///
/// Only the base URI varies between runs; the header defaults are
/// process-wide constants exposed through accessors so call sites never
/// depend on where they come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    base_uri: Url,
}

impl Configuration {
    /// Creates a configuration targeting the given base URI.
    #[must_use]
    pub const fn new(base_uri: Url) -> Self {
        Self { base_uri }
    }

    /// Parses a raw base URI value.
    ///
    /// Surrounding whitespace is ignored. The value must be an absolute
    /// `http` or `https` URL with no query or fragment; call paths are
    /// appended to its path.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the value is blank, malformed,
    /// uses another scheme, or has a query or fragment.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidUrl("base URI is empty".to_string()));
        }

        let url = Url::parse(trimmed).map_err(|e| DomainError::InvalidUrl(format!("{e}: {trimmed}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "unsupported scheme '{}': {trimmed}",
                url.scheme()
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(DomainError::InvalidUrl(format!(
                "base URI must not carry a query or fragment: {trimmed}"
            )));
        }
        Ok(Self::new(url))
    }

    /// Returns the target API base URI.
    #[must_use]
    pub const fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    /// Returns the request content type.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    /// Returns the `Accept` header value.
    #[must_use]
    pub const fn accept_header(&self) -> &'static str {
        ACCEPT
    }

    /// Returns the expected charset.
    #[must_use]
    pub const fn charset(&self) -> &'static str {
        CHARSET
    }

    /// Returns the content type with its charset parameter,
    /// e.g. `application/json; charset=UTF-8`.
    #[must_use]
    pub fn content_type_with_charset(&self) -> String {
        format!("{CONTENT_TYPE}; charset={CHARSET}")
    }
}

/// A named set of raw configuration properties.
///
/// Typically one per backing store: the process environment, a `.env`
/// file, or a literal map in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySource {
    name: String,
    properties: HashMap<String, String>,
}

impl PropertySource {
    /// Creates a new property source with the given name and properties.
    pub fn new(name: impl Into<String>, properties: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Returns the name of this property source.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets a property value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Looks a key up across ordered sources; the first source holding it wins.
    ///
    /// Returns the value together with the name of the source it came from.
    #[must_use]
    pub fn lookup<'a>(sources: &'a [Self], key: &str) -> Option<(&'a str, &'a str)> {
        sources
            .iter()
            .find_map(|source| source.get(key).map(|value| (value, source.name())))
    }
}
