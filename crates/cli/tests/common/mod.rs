//! Shared test utilities for simples CLI integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using `simples_cmd()` are hermetic by default:
//!   no `.env` loading and no inherited `SIMPLES_CONFIG`.

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Returns a hermetic `simples` command for integration testing.
pub fn simples_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("simples");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("SIMPLES_CONFIG");
    cmd.env_remove("RUST_LOG");

    cmd
}

/// Write a config file named `settings.ini` into `dir`.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("settings.ini");
    std::fs::write(&path, contents).unwrap();
    path
}

pub const SAMPLE: &str = "\
PAGE_SIZE = 10
[Server]
host = localhost
port = 8080
[Database]
url = postgres://db?sslmode=disable
[server]
threads = four
";
