//! `notes config` command - show resolved configuration

use crate::cli::{Cli, ConfigKey, OutputFormat};
use notes_core::config::Config;
use notes_core::error::Result;

/// Execute the config command
pub fn execute(cli: &Cli, config: &Config, name: Option<ConfigKey>) -> Result<()> {
    let home = config.home_path.display().to_string();
    let editor = config.editor_path.clone().unwrap_or_default();

    match (cli.format, name) {
        (OutputFormat::Json, None) => println!("{}", serde_json::to_string_pretty(config)?),
        (OutputFormat::Json, Some(ConfigKey::Home)) => {
            println!("{}", serde_json::json!({ "home": home }))
        }
        (OutputFormat::Json, Some(ConfigKey::Editor)) => {
            println!("{}", serde_json::json!({ "editor": config.editor_path }))
        }
        (OutputFormat::Human, None) => {
            println!("Home: {}", home);
            println!("Editor: {}", editor);
        }
        (OutputFormat::Human, Some(ConfigKey::Home)) => println!("{}", home),
        (OutputFormat::Human, Some(ConfigKey::Editor)) => println!("{}", editor),
    }

    Ok(())
}
