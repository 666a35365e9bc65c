//! Line-by-line construction of `Sections`.
//!
//! Responsibilities:
//! - Fold classified lines into sections, tracking the current section.
//! - Allocate contiguous sequence numbers, including across repeated headers.
//! - Open files and report open/read failures alongside partial results.
//!
//! Does NOT handle:
//! - Line grammar (see `line.rs`).
//! - Lookups or defaults (see `resolver` module).
//!
//! Invariants:
//! - `DEFAULT` exists before the first line is read.
//! - Each section keeps a running "next sequence" counter; a repeated header
//!   resumes that counter instead of resetting it.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::error::ConfigError;
use super::line::{Line, classify};
use crate::constants::DEFAULT_SECTION;
use crate::types::{Sections, fold_case};

const UTF8_BOM: char = '\u{feff}';

/// Mutable state threaded through a single pass over the input.
struct SectionsBuilder {
    sections: Sections,
    current: String,
    next_sequence: HashMap<String, usize>,
}

impl SectionsBuilder {
    fn new() -> Self {
        let mut next_sequence = HashMap::new();
        next_sequence.insert(DEFAULT_SECTION.to_string(), 1);
        Self {
            sections: Sections::new(),
            current: DEFAULT_SECTION.to_string(),
            next_sequence,
        }
    }

    fn feed(&mut self, line_number: usize, raw: &str) {
        let raw = if line_number == 1 {
            raw.trim_start_matches(UTF8_BOM)
        } else {
            raw
        };

        match classify(raw) {
            Line::Blank | Line::Comment => {}
            Line::Header(name) => self.open_section(name),
            Line::Pair { key, value } => self.push(key, value),
            Line::Ignored => {
                tracing::debug!(line = line_number, "Skipping unrecognized config line");
            }
        }
    }

    fn open_section(&mut self, name: &str) {
        let name = fold_case(name);
        self.sections.section_mut(&name);
        self.next_sequence.entry(name.clone()).or_insert(1);
        self.current = name;
    }

    fn push(&mut self, key: &str, value: &str) {
        let next = self.next_sequence.entry(self.current.clone()).or_insert(1);
        self.sections
            .section_mut(&self.current)
            .push(*next, key, value);
        *next += 1;
    }

    fn finish(self) -> Sections {
        self.sections
    }
}

/// Feed every line of `reader` into `builder`.
///
/// Lines are decoded lossily, so bytes that are not UTF-8 never stop the
/// pass. On an I/O failure returns the 1-based number of the line that could
/// not be read.
fn read_into<R: BufRead>(
    mut reader: R,
    builder: &mut SectionsBuilder,
) -> Result<(), (usize, io::Error)> {
    let mut buf = Vec::with_capacity(256);
    let mut line_number = 0;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| (line_number + 1, e))?;
        if read == 0 {
            return Ok(());
        }
        line_number += 1;

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        builder.feed(line_number, &String::from_utf8_lossy(raw));
    }
}

/// Parse configuration text already held in memory.
pub fn parse_str(text: &str) -> Sections {
    let mut builder = SectionsBuilder::new();
    for (index, line) in text.lines().enumerate() {
        builder.feed(index + 1, line);
    }
    builder.finish()
}

/// Parse configuration from any buffered reader.
///
/// # Errors
///
/// Returns the underlying I/O error if the reader fails. Bytes that are not
/// valid UTF-8 are replaced, not reported.
pub fn parse_reader<R: BufRead>(reader: R) -> io::Result<Sections> {
    let mut builder = SectionsBuilder::new();
    read_into(reader, &mut builder).map_err(|(_, e)| e)?;
    Ok(builder.finish())
}

/// Load a configuration file.
///
/// Always returns a usable `Sections`. If the file cannot be opened it holds
/// only `DEFAULT`; if an I/O error interrupts reading it holds everything
/// read before the failing line. Invalid UTF-8 is decoded lossily. The error, if any, is returned alongside.
pub fn load(path: impl AsRef<Path>) -> (Sections, Option<ConfigError>) {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            tracing::debug!(path = %path.display(), error = %source, "Config file not opened");
            return (
                Sections::new(),
                Some(ConfigError::FileOpen {
                    path: path.to_path_buf(),
                    source,
                }),
            );
        }
    };

    let mut builder = SectionsBuilder::new();
    let result = read_into(BufReader::new(file), &mut builder);
    let sections = builder.finish();

    match result {
        Ok(()) => {
            tracing::debug!(
                path = %path.display(),
                sections = sections.len(),
                entries = sections.entry_count(),
                "Loaded config file"
            );
            (sections, None)
        }
        Err((line, source)) => {
            tracing::warn!(
                path = %path.display(),
                line,
                error = %source,
                "Config file read stopped early, keeping entries read so far"
            );
            (
                sections,
                Some(ConfigError::FileRead {
                    path: path.to_path_buf(),
                    line,
                    source,
                }),
            )
        }
    }
}
