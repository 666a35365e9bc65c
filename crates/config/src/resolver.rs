//! Typed lookups over a loaded configuration.
//!
//! Responsibilities:
//! - Answer sectioned queries (`get_sections`, `get_section`, `get_string`,
//!   `get_number`) against the file contents.
//! - Answer flat queries (`get`, `resolve`) with environment overrides.
//!
//! Does NOT handle:
//! - Reading files or the environment (see `loader`).
//!
//! Invariants:
//! - Sectioned lookups read the file only; the environment never applies.
//! - Flat lookups read the `DEFAULT` section, with precedence
//!   environment > file > caller default.
//! - All matching on section names and keys is case-insensitive.
//! - A `Config` is never mutated after construction.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::constants::DEFAULT_SECTION;
use crate::loader::{ConfigError, ConfigLoader, EnvSnapshot};
use crate::types::{Entry, Sections};

/// Layer a flat lookup was answered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Environment,
    File,
}

/// A value found by a flat lookup, with the layer that supplied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub value: &'a str,
    pub source: Source,
}

/// Read-only configuration: file sections plus an environment snapshot.
#[derive(Debug, Clone, Default)]
pub struct Config {
    sections: Sections,
    env: EnvSnapshot,
}

/// Load `path` and capture the process environment.
///
/// The returned `Config` is usable even when an error is reported; it then
/// holds whatever could be read, at minimum an empty `DEFAULT` section.
pub fn create_config(path: impl AsRef<Path>) -> (Config, Option<ConfigError>) {
    ConfigLoader::new()
        .with_config_path(path.as_ref())
        .from_env()
        .build()
}

impl Config {
    pub fn new(sections: Sections, env: EnvSnapshot) -> Self {
        Self { sections, env }
    }

    /// A config over `sections` with no environment layer.
    pub fn from_sections(sections: Sections) -> Self {
        Self::new(sections, EnvSnapshot::empty())
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn env(&self) -> &EnvSnapshot {
        &self.env
    }

    /// Names of every section, `DEFAULT` included.
    pub fn get_sections(&self) -> BTreeSet<&str> {
        self.sections.names().collect()
    }

    /// Entries of `section` keyed by sequence number; empty if absent.
    pub fn get_section(&self, section: &str) -> BTreeMap<usize, &Entry> {
        self.sections
            .get(section)
            .map(|s| s.by_sequence())
            .unwrap_or_default()
    }

    /// Value of `key` in `section`, or `default_value`.
    ///
    /// When a key repeats within a section, the lowest sequence wins.
    pub fn get_string(&self, section: &str, key: &str, default_value: &str) -> String {
        self.file_value(section, key)
            .unwrap_or(default_value)
            .to_string()
    }

    /// Value of `key` in `section` parsed as a base-10 integer.
    ///
    /// Missing keys and values that do not parse both yield `default_value`.
    pub fn get_number(&self, section: &str, key: &str, default_value: i64) -> i64 {
        self.get_string(section, key, &default_value.to_string())
            .parse()
            .unwrap_or(default_value)
    }

    /// Flat lookup: environment, then the `DEFAULT` section, then `default_value`.
    pub fn get(&self, key: &str, default_value: &str) -> String {
        self.resolve(key)
            .map(|resolved| resolved.value)
            .unwrap_or(default_value)
            .to_string()
    }

    /// Flat lookup reporting which layer answered.
    pub fn resolve(&self, key: &str) -> Option<Resolved<'_>> {
        if let Some(value) = self.env.lookup(key) {
            return Some(Resolved {
                value,
                source: Source::Environment,
            });
        }
        self.file_value(DEFAULT_SECTION, key).map(|value| Resolved {
            value,
            source: Source::File,
        })
    }

    /// First entry in `section` whose key matches `key`, ignoring case.
    pub fn get_entry(&self, section: &str, key: &str) -> Option<&Entry> {
        self.sections.get(section).and_then(|s| s.get(key))
    }

    fn file_value(&self, section: &str, key: &str) -> Option<&str> {
        self.get_entry(section, key).map(|entry| entry.value.as_str())
    }
}
