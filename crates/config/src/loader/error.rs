//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define the failures surfaced when a configuration file cannot be read.
//!
//! Does NOT handle:
//! - Malformed lines (skipped by the parser, never an error).
//! - Non-numeric values (resolved to the caller's default by `get_number`).
//!
//! Invariants:
//! - Every variant carries the offending path.
//! - A `ConfigError` never means the accompanying `Config` is unusable.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be opened (missing, permission denied, ...).
    #[error("Failed to open config file at {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading stopped part-way through the file. Lines before `line` were loaded.
    #[error("Failed to read config file at {path} (line {line})")]
    FileRead {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Path of the file that failed.
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::FileOpen { path, .. } | ConfigError::FileRead { path, .. } => path,
        }
    }

    /// Whether the failure is simply a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::FileOpen { source, .. } if source.kind() == ErrorKind::NotFound
        )
    }
}
