//! `notes categories` command - list categories that contain notes

use crate::cli::{Cli, OutputFormat};
use notes_core::catalog::collect_categories;
use notes_core::config::Config;
use notes_core::error::Result;

/// Execute the categories command
pub fn execute(cli: &Cli, config: &Config) -> Result<()> {
    let categories = collect_categories(config)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&categories)?),
        OutputFormat::Human => {
            for category in &categories {
                println!("{}", category);
            }
        }
    }

    Ok(())
}
