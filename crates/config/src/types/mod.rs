//! Data model for loaded configuration files.
//!
//! Responsibilities:
//! - Define `Entry`, one key/value pair tagged with its section and sequence.
//! - Define `Section`, the ordered entries sharing an upper-cased name.
//! - Define `Sections`, the name-keyed collection produced by the loader.
//!
//! Does NOT handle:
//! - Reading or parsing files (see `loader` module).
//! - Default values or environment overrides (see `resolver` module).
//!
//! Invariants:
//! - Section names are stored upper-cased; lookups upper-case their argument.
//! - Within a section, entry `i` carries `sequence == i + 1`.
//! - `Sections` always contains `DEFAULT`.

mod entry;
mod sections;

pub use entry::Entry;
pub use sections::{Section, Sections};

/// Upper-case a section name or key for case-insensitive matching.
pub(crate) fn fold_case(text: &str) -> String {
    text.to_uppercase()
}
