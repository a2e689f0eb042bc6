//! `notes new` command - create a new note
//!
//! - `notes new <category> <filename> [tags]` - create the note, print its path
//! - `--title` flag (defaults to the file name)
//! - `--no-edit` flag (skip launching the editor)

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, NewArgs, OutputFormat};
use notes_core::config::Config;
use notes_core::editor::ProcessLauncher;
use notes_core::error::Result;
use notes_core::format::note_to_json;
use notes_core::note::Note;

/// Execute the new command
pub fn execute(cli: &Cli, config: &Config, args: &NewArgs) -> Result<()> {
    let start = Instant::now();

    let note = Note::new(
        &args.category,
        &args.tags,
        &args.filename,
        args.title.as_deref().unwrap_or_default(),
        config,
    )?;
    note.create()?;
    debug!(path = %note.rel_file_path().display(), elapsed = ?start.elapsed(), "create_note");

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&note_to_json(&note))?);
        }
        OutputFormat::Human => {
            println!("{}", note.file_path().display());
        }
    }

    if args.no_edit {
        return Ok(());
    }

    note.open(&ProcessLauncher)
}
