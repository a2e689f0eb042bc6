//! Command dispatch logic for notes
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use notes_core::config::Config;
use notes_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::load()?;
    debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        Commands::New(args) => commands::new::execute(cli, &config, args),
        Commands::List(args) => commands::list::execute(cli, &config, args),
        Commands::Categories => commands::categories::execute(cli, &config),
        Commands::Tags { category } => commands::tags::execute(cli, &config, category.as_deref()),
        Commands::Config { name } => commands::config::execute(cli, &config, *name),
    }
}
