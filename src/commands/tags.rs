//! `notes tags` command - list tags across the store or within one category

use crate::cli::{Cli, OutputFormat};
use notes_core::catalog::collect_tags;
use notes_core::config::Config;
use notes_core::error::Result;

/// Execute the tags command
pub fn execute(cli: &Cli, config: &Config, category: Option<&str>) -> Result<()> {
    let tags = collect_tags(config, category)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tags)?),
        OutputFormat::Human => {
            for tag in &tags {
                println!("{}", tag);
            }
        }
    }

    Ok(())
}
