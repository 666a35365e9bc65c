//! `get` and `number` commands.

use anyhow::Result;
use simples_config::Config;

use crate::formatters::{Formatter, Scalar, ValueOutput, ValueSource};

pub fn run_string(
    config: &Config,
    section: &str,
    key: &str,
    default: &str,
    formatter: &dyn Formatter,
) -> Result<String> {
    let (value, source) = match config.get_entry(section, key) {
        Some(entry) => (entry.value.clone(), ValueSource::File),
        None => (default.to_string(), ValueSource::Default),
    };
    formatter.format_value(&ValueOutput {
        section: Some(section.to_uppercase()),
        key: key.to_string(),
        value: Scalar::Text(value),
        source,
    })
}

/// Print an integer. A present but non-numeric value reports the default's source.
pub fn run_number(
    config: &Config,
    section: &str,
    key: &str,
    default: i64,
    formatter: &dyn Formatter,
) -> Result<String> {
    let parsed = config
        .get_entry(section, key)
        .and_then(|entry| entry.value.parse::<i64>().ok());
    let (value, source) = match parsed {
        Some(number) => (number, ValueSource::File),
        None => (default, ValueSource::Default),
    };
    formatter.format_value(&ValueOutput {
        section: Some(section.to_uppercase()),
        key: key.to_string(),
        value: Scalar::Number(value),
        source,
    })
}
