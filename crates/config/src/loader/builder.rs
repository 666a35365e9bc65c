//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` combining a file and an
//!   environment snapshot into a `Config`.
//! - Offer a lenient `build()` (config plus optional error) and a strict
//!   `try_build()`.
//!
//! Does NOT handle:
//! - Line parsing (delegated to parse.rs).
//! - Lookup precedence (see `resolver`).
//!
//! Invariants / Assumptions:
//! - The file is read exactly once, inside `build()`.
//! - Without `from_env()` or `with_env()`, no environment variables are consulted.
//! - Without a config path, the result holds only an empty `DEFAULT` section.

use std::path::{Path, PathBuf};

use super::env::EnvSnapshot;
use super::error::ConfigError;
use super::parse::load;
use crate::resolver::Config;
use crate::types::Sections;

/// Configuration loader that builds a `Config` from a file and the environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env: Option<EnvSnapshot>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file to load.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Capture the process environment as the override layer.
    pub fn from_env(mut self) -> Self {
        self.env = Some(EnvSnapshot::capture());
        self
    }

    /// Use an explicit environment snapshot as the override layer.
    pub fn with_env(mut self, env: EnvSnapshot) -> Self {
        self.env = Some(env);
        self
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Build the configuration, reporting any file error alongside it.
    ///
    /// The returned `Config` is always usable; on error it falls back to
    /// whatever was read (possibly only an empty `DEFAULT` section).
    pub fn build(self) -> (Config, Option<ConfigError>) {
        let (sections, error) = match &self.config_path {
            Some(path) => load(path),
            None => (Sections::new(), None),
        };
        let env = self.env.unwrap_or_default();
        (Config::new(sections, env), error)
    }

    /// Build the configuration, failing if the file could not be read in full.
    pub fn try_build(self) -> Result<Config, ConfigError> {
        match self.build() {
            (_, Some(error)) => Err(error),
            (config, None) => Ok(config),
        }
    }
}
