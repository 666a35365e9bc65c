//! simples - inspect layered configuration files from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the configuration file and environment snapshot via `simples-config`.
//! - Print lookup results in text or JSON.
//!
//! Does NOT handle:
//! - Parsing or lookup semantics (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults
//!   and take part in the environment snapshot.
//! - A missing config file is a warning unless `--strict` is given.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use simples_config::{ConfigLoader, env_var_or_none};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: Cli) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config_file() {
        loader = loader.with_config_path(path);
    }
    if !cli.no_env {
        loader = loader.from_env();
    }

    let (config, error) = loader.build();
    if let Some(error) = error {
        if cli.strict {
            return Err(error.into());
        }
        tracing::warn!(path = %error.path().display(), error = %error, "Continuing with defaults");
        eprintln!("Warning: {}; continuing with defaults", error);
    }

    let output = run_command(&cli.command, &config, cli.format)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        env_var_or_none("DOTENV_DISABLED").as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from `.env` if present.
///
/// Missing `.env` files are silently ignored.
fn load_dotenv() -> Result<(), dotenvy::Error> {
    if dotenv_disabled() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
