//! CLI argument parsing for notes
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand, ValueEnum};

pub use args::{ListArgs, NewArgs};
pub use notes_core::format::OutputFormat;
use parse::parse_output_format;

/// notes - plain-text notes organized by category directories
#[derive(Parser, Debug)]
#[command(name = "notes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note and open it in the editor
    #[command(visible_alias = "create")]
    New(NewArgs),

    /// List notes
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// List categories that contain notes
    Categories,

    /// List tags
    Tags {
        /// Only collect tags of notes in this category
        category: Option<String>,
    },

    /// Show resolved configuration
    Config {
        /// Print only this value
        #[arg(value_enum)]
        name: Option<ConfigKey>,
    },
}

/// Configuration values printable by `notes config`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Store root directory
    Home,
    /// Editor command
    Editor,
}
