//! `lookup` command: environment over the DEFAULT section.

use anyhow::Result;
use simples_config::{Config, Source};

use crate::formatters::{Formatter, Scalar, ValueOutput, ValueSource};

pub fn run(config: &Config, key: &str, default: &str, formatter: &dyn Formatter) -> Result<String> {
    let (value, source) = match config.resolve(key) {
        Some(resolved) => (
            resolved.value.to_string(),
            match resolved.source {
                Source::Environment => ValueSource::Environment,
                Source::File => ValueSource::File,
            },
        ),
        None => (default.to_string(), ValueSource::Default),
    };
    formatter.format_value(&ValueOutput {
        section: None,
        key: key.to_string(),
        value: Scalar::Text(value),
        source,
    })
}
