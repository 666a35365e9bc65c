//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use simples_config::Config;

use crate::args::{Commands, OutputFormat};
use crate::commands;
use crate::formatters::formatter_for;

/// Run `command` against `config`, returning the rendered output.
pub(crate) fn run_command(
    command: &Commands,
    config: &Config,
    format: OutputFormat,
) -> Result<String> {
    let formatter = formatter_for(format);
    match command {
        Commands::Sections => commands::sections::run(config, formatter.as_ref()),
        Commands::Section { name } => commands::section::run(config, name, formatter.as_ref()),
        Commands::Get {
            section,
            key,
            default,
        } => commands::get::run_string(config, section, key, default, formatter.as_ref()),
        Commands::Number {
            section,
            key,
            default,
        } => commands::get::run_number(config, section, key, *default, formatter.as_ref()),
        Commands::Lookup { key, default } => {
            commands::lookup::run(config, key, default, formatter.as_ref())
        }
    }
}
