//! Configuration loader for files and environment variables.
//!
//! Responsibilities:
//! - Parse sectioned `key=value` files into `Sections`.
//! - Capture environment variables into an immutable snapshot.
//! - Provide a builder-pattern `ConfigLoader` producing a `Config`.
//!
//! Does NOT handle:
//! - Answering lookups (see `resolver`).
//! - Writing configuration back to disk.
//!
//! Invariants / Assumptions:
//! - Malformed lines are skipped, never reported as errors.
//! - File errors are returned next to a usable result, never instead of one.

mod builder;
mod env;
mod error;
mod line;
mod parse;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::{EnvSnapshot, env_var_or_none};
pub use error::ConfigError;
pub use line::{Line, classify};
pub use parse::{load, parse_reader, parse_str};
