//! `section` command.

use anyhow::Result;
use simples_config::Config;

use crate::formatters::{Formatter, SectionOutput};

/// Print the entries of `name`. An unknown section prints nothing.
pub fn run(config: &Config, name: &str, formatter: &dyn Formatter) -> Result<String> {
    let entries = config.get_section(name);
    if entries.is_empty() {
        tracing::debug!(section = name, "Section is empty or absent");
    }
    let output = SectionOutput {
        name: name.to_uppercase(),
        entries: entries.into_values().collect(),
    };
    formatter.format_section(&output)
}
