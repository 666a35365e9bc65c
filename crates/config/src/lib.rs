//! Layered configuration for small programs.
//!
//! This crate reads sectioned `key=value` files, groups their entries by
//! case-insensitive section name, and answers typed lookups with
//! caller-supplied defaults. Flat lookups against the `DEFAULT` section can
//! be overridden by environment variables.

pub mod constants;
mod loader;
mod resolver;
pub mod types;

pub use constants::DEFAULT_SECTION;
pub use loader::{
    ConfigError, ConfigLoader, EnvSnapshot, Line, classify, env_var_or_none, load, parse_reader,
    parse_str,
};
pub use resolver::{Config, Resolved, Source, create_config};
pub use types::{Entry, Section, Sections};
