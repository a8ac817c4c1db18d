//! Property loader port

use contrail_domain::PropertySource;

use crate::error::ConfigError;

/// Reads raw configuration from its backing stores.
pub trait PropertyLoader: Send + Sync {
    /// Loads every property source, highest precedence first.
    ///
    /// A store that does not exist yields an empty source or none at all;
    /// only a store that exists but cannot be read is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Unreadable`] if a present store fails to load.
    fn load(&self) -> Result<Vec<PropertySource>, ConfigError>;
}

impl PropertyLoader for Vec<PropertySource> {
    fn load(&self) -> Result<Vec<PropertySource>, ConfigError> {
        Ok(self.clone())
    }
}
