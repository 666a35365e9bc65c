//! Centralized constants for the configuration file format.
//!
//! These values define the line grammar understood by the loader and the
//! names the resolver treats specially.

// =============================================================================
// Sections
// =============================================================================

/// Section that holds every key/value line appearing before the first header.
///
/// Always present in a loaded [`Sections`](crate::Sections), even for an empty
/// or unreadable file.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Opening delimiter of a section header line.
pub const SECTION_OPEN: char = '[';

/// Closing delimiter of a section header line.
pub const SECTION_CLOSE: char = ']';

// =============================================================================
// Lines
// =============================================================================

/// Prefix marking a full-line comment.
pub const COMMENT_PREFIX: char = '#';

/// Separator between key and value. Only the first occurrence splits.
pub const KEY_VALUE_SEPARATOR: char = '=';
