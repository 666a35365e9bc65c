//! Sections and their entries.

use std::collections::{BTreeMap, HashMap};

use super::{Entry, fold_case};
use crate::constants::DEFAULT_SECTION;

/// Entries sharing one upper-cased section name, in file order.
///
/// Repeated headers for the same name append here, so a section may span
/// several physical blocks of the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<Entry>,
}

impl Section {
    /// Create an empty section. `name` is upper-cased.
    pub fn new(name: &str) -> Self {
        Self {
            name: fold_case(name),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in ascending sequence order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry, by sequence, whose key matches `key` case-insensitively.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        let key_upper = fold_case(key);
        self.entries.iter().find(|entry| entry.matches(&key_upper))
    }

    /// Entries keyed by sequence number.
    pub fn by_sequence(&self) -> BTreeMap<usize, &Entry> {
        self.entries
            .iter()
            .map(|entry| (entry.sequence, entry))
            .collect()
    }

    /// Append a key/value pair under the given sequence number.
    ///
    /// The loader owns sequence allocation; it must hand out `len() + 1`.
    pub(crate) fn push(&mut self, sequence: usize, key: &str, value: &str) {
        debug_assert_eq!(sequence, self.entries.len() + 1);
        self.entries
            .push(Entry::new(sequence, self.name.as_str(), key, value));
    }
}

/// Every section of a loaded file, keyed by upper-cased name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    sections: HashMap<String, Section>,
}

impl Default for Sections {
    fn default() -> Self {
        Self::new()
    }
}

impl Sections {
    /// A collection holding only the empty `DEFAULT` section.
    pub fn new() -> Self {
        let mut sections = HashMap::with_capacity(8);
        sections.insert(DEFAULT_SECTION.to_string(), Section::new(DEFAULT_SECTION));
        Self { sections }
    }

    /// Case-insensitive section lookup.
    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.get(&fold_case(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Section names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Number of sections, `DEFAULT` included.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false: `DEFAULT` is never removed.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.values().map(Section::len).sum()
    }

    /// Section for an already upper-cased name, created empty on first use.
    pub(crate) fn section_mut(&mut self, name_upper: &str) -> &mut Section {
        self.sections
            .entry(name_upper.to_string())
            .or_insert_with(|| Section::new(name_upper))
    }
}
