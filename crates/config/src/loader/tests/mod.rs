//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test file loading through `ConfigLoader` and `create_config`.
//! - Test error reporting alongside fallback results.
//! - Test environment capture and precedence through the builder.
//!
//! Does NOT handle:
//! - Line classification (tested in line.rs).
//! - Lookup semantics on in-memory input (tested in resolver.rs).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `contents` to `settings.ini` inside `dir` and return its path.
pub fn write_config(dir: &Path, contents: &[u8]) -> PathBuf {
    let path = dir.join("settings.ini");
    std::fs::write(&path, contents).unwrap();
    path
}
