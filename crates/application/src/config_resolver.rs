//! Configuration resolution
//!
//! [`ConfigResolver`] turns raw property sources into a [`Configuration`].
//! The loader runs at most once per resolver, on first access, and the
//! outcome (value or error) is kept for the resolver's lifetime.

use std::sync::OnceLock;

use contrail_domain::config::{ACCEPT, CHARSET, CONTENT_TYPE};
use contrail_domain::{BASE_URL_KEY, Configuration, PropertySource};
use url::Url;

use crate::error::ConfigError;
use crate::ports::PropertyLoader;

/// Lazily resolves and caches the harness configuration.
pub struct ConfigResolver {
    loader: Box<dyn PropertyLoader>,
    resolved: OnceLock<Result<Configuration, ConfigError>>,
}

impl ConfigResolver {
    /// Creates a resolver reading from the given loader.
    #[must_use]
    pub fn new(loader: impl PropertyLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            resolved: OnceLock::new(),
        }
    }

    /// Creates a resolver over fixed, already loaded sources.
    #[must_use]
    pub fn from_sources(sources: Vec<PropertySource>) -> Self {
        Self::new(sources)
    }

    /// Returns the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] met on first resolution; the same error
    /// is returned on every later call.
    pub fn configuration(&self) -> Result<&Configuration, ConfigError> {
        self.resolved
            .get_or_init(|| self.resolve())
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Returns the target API base URI.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `BASE_URL` is missing or invalid.
    pub fn base_uri(&self) -> Result<&Url, ConfigError> {
        self.configuration().map(Configuration::base_uri)
    }

    /// Returns the request content type.
    #[must_use]
    pub const fn content_type() -> &'static str {
        CONTENT_TYPE
    }

    /// Returns the `Accept` header value.
    #[must_use]
    pub const fn accept_header() -> &'static str {
        ACCEPT
    }

    /// Returns the expected charset.
    #[must_use]
    pub const fn charset() -> &'static str {
        CHARSET
    }

    /// Returns `application/json; charset=UTF-8`.
    #[must_use]
    pub fn content_type_with_charset() -> String {
        format!("{CONTENT_TYPE}; charset={CHARSET}")
    }

    fn resolve(&self) -> Result<Configuration, ConfigError> {
        let sources = self.loader.load()?;

        let Some((raw, origin)) = PropertySource::lookup(&sources, BASE_URL_KEY)
            .filter(|(value, _)| !value.trim().is_empty())
        else {
            let checked: Vec<_> = sources.iter().map(PropertySource::name).collect();
            let error = ConfigError::Missing {
                key: BASE_URL_KEY.to_string(),
                checked: if checked.is_empty() {
                    "no sources".to_string()
                } else {
                    checked.join(", ")
                },
            };
            tracing::warn!(%error, "base URI unresolved");
            return Err(error);
        };

        let configuration = Configuration::parse(raw).map_err(|e| ConfigError::Invalid {
            key: BASE_URL_KEY.to_string(),
            origin: origin.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(origin, base_uri = %configuration.base_uri(), "base URI resolved");
        Ok(configuration)
    }
}

impl std::fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("resolved", &self.resolved.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn source(name: &str, pairs: &[(&str, &str)]) -> PropertySource {
        PropertySource::new(
            name,
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    struct CountingLoader {
        loads: Arc<AtomicUsize>,
        sources: Vec<PropertySource>,
    }

    impl PropertyLoader for CountingLoader {
        fn load(&self) -> Result<Vec<PropertySource>, ConfigError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(self.sources.clone())
        }
    }

    struct FailingLoader;

    impl PropertyLoader for FailingLoader {
        fn load(&self) -> Result<Vec<PropertySource>, ConfigError> {
            Err(ConfigError::Unreadable {
                origin: ".env".to_string(),
                reason: "permission denied".to_string(),
            })
        }
    }

    #[test]
    fn test_resolves_base_uri_from_first_source() {
        let resolver = ConfigResolver::from_sources(vec![
            source("environment", &[("BASE_URL", "https://jsonplaceholder.typicode.com")]),
            source(".env", &[("BASE_URL", "http://localhost:3000")]),
        ]);

        assert_eq!(
            resolver.base_uri().unwrap().as_str(),
            "https://jsonplaceholder.typicode.com/"
        );
    }

    #[test]
    fn test_falls_back_to_later_source() {
        let resolver = ConfigResolver::from_sources(vec![
            source("environment", &[("PATH", "/usr/bin")]),
            source(".env", &[("BASE_URL", "http://localhost:3000")]),
        ]);
        assert_eq!(resolver.base_uri().unwrap().port(), Some(3000));
    }

    #[test]
    fn test_missing_value_is_error() {
        let resolver = ConfigResolver::from_sources(vec![source("environment", &[])]);
        let err = resolver.configuration().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing {
                key: "BASE_URL".to_string(),
                checked: "environment".to_string(),
            }
        );
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let resolver = ConfigResolver::from_sources(vec![source("environment", &[("BASE_URL", "  ")])]);
        assert!(matches!(
            resolver.base_uri(),
            Err(ConfigError::Missing { .. })
        ));
    }

    #[test]
    fn test_no_sources_is_missing() {
        let resolver = ConfigResolver::from_sources(Vec::new());
        let err = resolver.base_uri().unwrap_err();
        assert!(err.to_string().contains("no sources"));
    }

    #[test]
    fn test_invalid_value_names_origin() {
        let resolver = ConfigResolver::from_sources(vec![source(".env", &[("BASE_URL", "not a url")])]);
        match resolver.base_uri().unwrap_err() {
            ConfigError::Invalid { origin, key, .. } => {
                assert_eq!(origin, ".env");
                assert_eq!(key, "BASE_URL");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_base_uri_with_query_is_invalid() {
        let resolver = ConfigResolver::from_sources(vec![source(
            "environment",
            &[("BASE_URL", "http://localhost:3000/api?key=1")],
        )]);
        assert!(matches!(
            resolver.base_uri(),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_unreadable_source_propagates() {
        let resolver = ConfigResolver::new(FailingLoader);
        assert!(matches!(
            resolver.configuration(),
            Err(ConfigError::Unreadable { .. })
        ));
    }

    #[test]
    fn test_loads_at_most_once() {
        let loads = Arc::new(AtomicUsize::new(0));
        let resolver = ConfigResolver::new(CountingLoader {
            loads: Arc::clone(&loads),
            sources: vec![source("environment", &[("BASE_URL", "http://localhost:3000")])],
        });

        assert_eq!(loads.load(Ordering::SeqCst), 0);
        let first = resolver.base_uri().unwrap().clone();
        let second = resolver.base_uri().unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_errors_are_cached_too() {
        let loads = Arc::new(AtomicUsize::new(0));
        let resolver = ConfigResolver::new(CountingLoader {
            loads: Arc::clone(&loads),
            sources: Vec::new(),
        });

        assert!(resolver.configuration().is_err());
        assert!(resolver.configuration().is_err());
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_constant_getters() {
        assert_eq!(ConfigResolver::content_type(), "application/json");
        assert_eq!(ConfigResolver::accept_header(), "application/json");
        assert_eq!(ConfigResolver::charset(), "UTF-8");
        assert_eq!(
            ConfigResolver::content_type_with_charset(),
            "application/json; charset=UTF-8"
        );
    }
}
