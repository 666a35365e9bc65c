//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve the config file path from flags or environment.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simples")]
#[command(about = "Inspect sectioned key=value configuration files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  simples --file app.ini sections\n  simples --file app.ini section database\n  simples --file app.ini get database port --default 5432\n  simples --file app.ini number server threads --default 4\n  PAGE_SIZE=20 simples --file app.ini lookup page_size\n"
)]
pub struct Cli {
    /// Configuration file to read.
    ///
    /// Can also be set via SIMPLES_CONFIG environment variable.
    #[arg(short, long, global = true, env = "SIMPLES_CONFIG", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not consult environment variables for `lookup`
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Fail if the configuration file cannot be read
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config file path, ignoring blank values so an empty env var means "none".
    pub fn config_file(&self) -> Option<PathBuf> {
        self.file
            .as_ref()
            .filter(|path| !path.to_string_lossy().trim().is_empty())
            .cloned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List section names
    Sections,

    /// List the entries of a section in file order
    Section {
        /// Section name (case-insensitive)
        name: String,
    },

    /// Read a string value from a section
    Get {
        /// Section name (case-insensitive)
        section: String,
        /// Key name (case-insensitive)
        key: String,
        /// Value printed when the key is absent
        #[arg(long, default_value = "")]
        default: String,
    },

    /// Read an integer value from a section
    Number {
        /// Section name (case-insensitive)
        section: String,
        /// Key name (case-insensitive)
        key: String,
        /// Value printed when the key is absent or not an integer
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        default: i64,
    },

    /// Read a value from the environment or the DEFAULT section
    Lookup {
        /// Key name; matched case-insensitively against environment variables
        key: String,
        /// Value printed when neither layer has the key
        #[arg(long, default_value = "")]
        default: String,
    },
}
