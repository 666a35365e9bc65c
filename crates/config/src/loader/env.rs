//! Environment variable snapshot for flat lookups.
//!
//! Responsibilities:
//! - Capture the process environment once, keyed by upper-cased name.
//! - Answer case-insensitive lookups without rescanning the environment.
//! - Provide a helper for reading single variables with blank filtering.
//!
//! Does NOT handle:
//! - Precedence between environment and file values (see `resolver`).
//! - `.env` file loading (done by the CLI before the snapshot is taken).
//!
//! Invariants:
//! - A snapshot never changes after construction.
//! - When two names differ only by case, the first one seen wins.
//! - Variables whose name or value is not valid Unicode are skipped.

use std::collections::HashMap;

use crate::types::fold_case;

/// Immutable, case-insensitive view of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// A snapshot with no variables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self::from_vars(std::env::vars_os().filter_map(|(name, value)| {
            Some((name.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    /// Build a snapshot from explicit name/value pairs.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = HashMap::new();
        for (name, value) in vars {
            map.entry(fold_case(name.as_ref()))
                .or_insert_with(|| value.into());
        }
        Self { vars: map }
    }

    /// Value of the variable whose name matches `key` ignoring case.
    ///
    /// A lowercase variable such as `max_length` therefore answers `MAX_LENGTH`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.vars.get(&fold_case(key)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}
