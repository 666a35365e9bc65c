//! Output formatters for CLI commands.
//!
//! Provides two output formats: plain text and JSON.

use anyhow::Result;
use serde::Serialize;
use simples_config::Entry;
use std::fmt;

use crate::args::OutputFormat;

/// A looked-up value, either string or integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(i64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => write!(f, "{}", text),
            Scalar::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Where a printed value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Environment,
    File,
    Default,
}

/// Result of a single-value command.
#[derive(Debug, Clone, Serialize)]
pub struct ValueOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub key: String,
    pub value: Scalar,
    pub source: ValueSource,
}

/// Entries of one section, in sequence order.
#[derive(Debug, Clone, Serialize)]
pub struct SectionOutput<'a> {
    pub name: String,
    pub entries: Vec<&'a Entry>,
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format a list of section names.
    fn format_sections(&self, names: &[&str]) -> Result<String>;

    /// Format the entries of a section.
    fn format_section(&self, section: &SectionOutput<'_>) -> Result<String>;

    /// Format a single looked-up value.
    fn format_value(&self, value: &ValueOutput) -> Result<String>;
}

pub fn formatter_for(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Plain text formatter.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_sections(&self, names: &[&str]) -> Result<String> {
        Ok(names.join("\n"))
    }

    fn format_section(&self, section: &SectionOutput<'_>) -> Result<String> {
        Ok(section
            .entries
            .iter()
            .map(|entry| format!("{}\t{} = {}", entry.sequence, entry.key, entry.value))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn format_value(&self, value: &ValueOutput) -> Result<String> {
        Ok(value.value.to_string())
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_sections(&self, names: &[&str]) -> Result<String> {
        Ok(serde_json::to_string_pretty(names)?)
    }

    fn format_section(&self, section: &SectionOutput<'_>) -> Result<String> {
        Ok(serde_json::to_string_pretty(section)?)
    }

    fn format_value(&self, value: &ValueOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_value(value: Scalar) -> ValueOutput {
        ValueOutput {
            section: Some("SERVER".to_string()),
            key: "port".to_string(),
            value,
            source: ValueSource::File,
        }
    }

    #[test]
    fn test_text_value_is_bare() {
        let out = TextFormatter
            .format_value(&sample_value(Scalar::Number(8080)))
            .unwrap();
        assert_eq!(out, "8080");
    }

    #[test]
    fn test_json_number_stays_numeric() {
        let out = JsonFormatter
            .format_value(&sample_value(Scalar::Number(8080)))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["value"], 8080);
        assert_eq!(json["source"], "file");
        assert_eq!(json["section"], "SERVER");
    }

    #[test]
    fn test_json_omits_missing_section() {
        let mut value = sample_value(Scalar::Text("x".to_string()));
        value.section = None;
        value.source = ValueSource::Environment;
        let out = JsonFormatter.format_value(&value).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(json.get("section").is_none());
        assert_eq!(json["source"], "environment");
    }

    #[test]
    fn test_text_section_lines() {
        let a = Entry::new(1, "S", "a", "1");
        let b = Entry::new(2, "S", "b", "x = y");
        let section = SectionOutput {
            name: "S".to_string(),
            entries: vec![&a, &b],
        };
        assert_eq!(
            TextFormatter.format_section(&section).unwrap(),
            "1\ta = 1\n2\tb = x = y"
        );
    }
}
