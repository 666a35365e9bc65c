//! `sections` command.

use anyhow::Result;
use simples_config::Config;

use crate::formatters::Formatter;

pub fn run(config: &Config, formatter: &dyn Formatter) -> Result<String> {
    let names: Vec<&str> = config.get_sections().into_iter().collect();
    formatter.format_sections(&names)
}
