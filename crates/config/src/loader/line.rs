//! Classification of a single configuration line.
//!
//! Invariants:
//! - Classification is pure; section state lives in the parser.
//! - A line containing `=` is always a pair, even if it looks like a header.
//! - Only the first `=` splits; the value keeps any further `=` signs.

use crate::constants::{COMMENT_PREFIX, KEY_VALUE_SEPARATOR, SECTION_CLOSE, SECTION_OPEN};

/// What a line means to the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty after trimming.
    Blank,
    /// Starts with `#`.
    Comment,
    /// `[name]`, brackets stripped, inner text untouched.
    Header(&'a str),
    /// `key=value`, both trimmed.
    Pair { key: &'a str, value: &'a str },
    /// Anything else. Skipped without error.
    Ignored,
}

/// Classify one raw line of input.
pub fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();

    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with(COMMENT_PREFIX) {
        return Line::Comment;
    }
    if let Some((key, value)) = line.split_once(KEY_VALUE_SEPARATOR) {
        return Line::Pair {
            key: key.trim(),
            value: value.trim(),
        };
    }

    match line
        .strip_prefix(SECTION_OPEN)
        .and_then(|rest| rest.strip_suffix(SECTION_CLOSE))
    {
        Some(name) => Line::Header(name),
        None => Line::Ignored,
    }
}
