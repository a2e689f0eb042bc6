//! `notes list` command - list notes in the store
//!
//! - default: one absolute path per line (`--relative` for paths under home)
//! - `--oneline`: path, category, title and tags on one line
//! - `--full`: header block followed by the start of the body

use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, ListArgs, OutputFormat};
use notes_core::catalog::{list_notes, ListFilter};
use notes_core::config::Config;
use notes_core::error::Result;
use notes_core::format::note_to_json;
use notes_core::note::Note;

/// Body bytes shown per note with `--full`
pub const FULL_BODY_BYTES: usize = 200;

/// Execute the list command
pub fn execute(cli: &Cli, config: &Config, args: &ListArgs) -> Result<()> {
    let start = Instant::now();

    let filter = ListFilter::new(args.category.as_deref(), args.tag.as_deref())?;
    let notes = list_notes(config, &filter, args.sort)?;
    debug!(count = notes.len(), sort = %args.sort, elapsed = ?start.elapsed(), "list_notes");

    match cli.format {
        OutputFormat::Json => output_json(&notes, args.full),
        OutputFormat::Human => output_human(&notes, args),
    }
}

fn output_json(notes: &[Note], full: bool) -> Result<()> {
    let mut output = Vec::with_capacity(notes.len());
    for note in notes {
        let mut json = note_to_json(note);
        if full {
            json["body"] = serde_json::Value::String(note.read_body_n(FULL_BODY_BYTES)?);
        }
        output.push(json);
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(notes: &[Note], args: &ListArgs) -> Result<()> {
    for (i, note) in notes.iter().enumerate() {
        let path = display_path(note, args.relative);

        if args.oneline {
            println!(
                "{} {} {} {}",
                path.display(),
                note.category,
                note.display_title(),
                note.tags.join(",")
            );
        } else if args.full {
            if i > 0 {
                println!();
            }
            println!("{}", path.display());
            println!("Title:    {}", note.display_title());
            println!("Category: {}", note.category);
            println!("Tags:     {}", note.tags.join(", "));
            println!("Created:  {}", note.created_rfc3339());

            let body = note.read_body_n(FULL_BODY_BYTES)?;
            if !body.is_empty() {
                println!();
                println!("{}", body);
            }
        } else {
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn display_path(note: &Note, relative: bool) -> PathBuf {
    if relative {
        note.rel_file_path()
    } else {
        note.file_path()
    }
}
