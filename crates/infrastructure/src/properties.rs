//! Property loading from the process environment and a `.env` file
//!
//! Lookup order is the process environment first, then the `.env` file.
//! A missing `.env` file is not an error. Keys are compared in upper case.
//! Shell-style `export KEY=value` lines in `.env` are read as `KEY=value`.
//! Environment variables whose name or value is not UTF-8 are skipped.

use std::collections::HashMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use config::{Environment, File, FileFormat, Map, Source, Value};
use contrail_application::{ConfigError, ConfigResolver, ports::PropertyLoader};
use contrail_domain::PropertySource;

/// Name of the property source backed by the process environment.
pub const ENVIRONMENT_SOURCE: &str = "environment";

/// Default location of the optional dotenv file, relative to the working
/// directory.
pub const DEFAULT_DOTENV_PATH: &str = ".env";

/// Loads properties with the `config` crate.
#[derive(Debug, Clone)]
pub struct EnvPropertyLoader {
    dotenv_path: PathBuf,
    include_environment: bool,
}

impl EnvPropertyLoader {
    /// Creates a loader reading the environment and `./.env`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dotenv_path(DEFAULT_DOTENV_PATH)
    }

    /// Creates a loader reading the environment and the given dotenv file.
    #[must_use]
    pub fn with_dotenv_path(path: impl Into<PathBuf>) -> Self {
        Self {
            dotenv_path: path.into(),
            include_environment: true,
        }
    }

    /// Stops the loader from reading the process environment.
    #[must_use]
    pub const fn without_environment(mut self) -> Self {
        self.include_environment = false;
        self
    }

    /// Returns the dotenv file location.
    #[must_use]
    pub fn dotenv_path(&self) -> &Path {
        &self.dotenv_path
    }

    fn dotenv_source_name(&self) -> String {
        self.dotenv_path.display().to_string()
    }

    fn load_environment() -> Result<PropertySource, ConfigError> {
        let collected = Environment::default()
            .source(Some(utf8_variables(std::env::vars_os())))
            .collect()
            .map_err(|e| ConfigError::Unreadable {
                origin: ENVIRONMENT_SOURCE.to_string(),
                reason: e.to_string(),
            })?;
        Ok(to_property_source(ENVIRONMENT_SOURCE, collected))
    }

    fn load_dotenv(&self) -> Result<PropertySource, ConfigError> {
        let name = self.dotenv_source_name();
        let contents = match std::fs::read_to_string(&self.dotenv_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(PropertySource::new(name, HashMap::new()));
            }
            Err(e) => {
                return Err(ConfigError::Unreadable {
                    origin: name,
                    reason: e.to_string(),
                });
            }
        };

        let collected = File::from_str(&strip_export_prefixes(&contents), FileFormat::Ini)
            .collect()
            .map_err(|e| ConfigError::Unreadable {
                origin: name.clone(),
                reason: e.to_string(),
            })?;
        Ok(to_property_source(name, collected))
    }
}

impl Default for EnvPropertyLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyLoader for EnvPropertyLoader {
    fn load(&self) -> Result<Vec<PropertySource>, ConfigError> {
        let mut sources = Vec::with_capacity(2);
        if self.include_environment {
            sources.push(Self::load_environment()?);
        }
        sources.push(self.load_dotenv()?);

        tracing::debug!(
            sources = ?sources.iter().map(PropertySource::name).collect::<Vec<_>>(),
            "loaded property sources"
        );
        Ok(sources)
    }
}

/// Keeps the variables whose name and value are both valid UTF-8.
fn utf8_variables(vars: impl Iterator<Item = (OsString, OsString)>) -> Map<String, String> {
    vars.filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Rewrites `export KEY=value` lines to `KEY=value`.
fn strip_export_prefixes(contents: &str) -> String {
    contents
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            trimmed
                .strip_prefix("export")
                .filter(|rest| rest.starts_with([' ', '\t']))
                .map_or(line, str::trim_start)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Flattens a collected `config` map into upper-cased string properties.
/// Values that are not scalars are dropped.
fn to_property_source(name: impl Into<String>, collected: Map<String, Value>) -> PropertySource {
    let properties: HashMap<String, String> = collected
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .into_string()
                .ok()
                .map(|v| (key.to_uppercase(), v.trim().to_string()))
        })
        .collect();
    PropertySource::new(name, properties)
}

/// Returns the process-wide resolver over the environment and `./.env`.
///
/// The first call creates it; configuration is read on first use.
#[must_use]
pub fn global_resolver() -> Arc<ConfigResolver> {
    static RESOLVER: OnceLock<Arc<ConfigResolver>> = OnceLock::new();
    Arc::clone(RESOLVER.get_or_init(|| Arc::new(ConfigResolver::new(EnvPropertyLoader::new()))))
}
