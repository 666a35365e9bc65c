//! A single key/value line of a configuration file.

use serde::Serialize;

/// One key/value pair within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// 1-based position within the (possibly merged) section, in file order.
    pub sequence: usize,
    /// Upper-cased name of the owning section.
    pub section: String,
    /// Key as written in the file, trimmed.
    pub key: String,
    /// Upper-cased copy of `key` used for matching.
    pub key_upper: String,
    /// Value as written in the file, trimmed.
    pub value: String,
}

impl Entry {
    /// Build an entry, deriving `key_upper` from `key`.
    pub fn new(
        sequence: usize,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let key = key.into();
        Self {
            sequence,
            section: section.into(),
            key_upper: super::fold_case(&key),
            key,
            value: value.into(),
        }
    }

    /// Whether this entry's key matches `key_upper`, which must already be folded.
    pub fn matches(&self, key_upper: &str) -> bool {
        self.key_upper == key_upper
    }
}
