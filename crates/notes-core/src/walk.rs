//! Store traversal
//!
//! Visits every note file below a directory in depth-first order, in whatever
//! order the filesystem yields entries. `.git` directories are pruned and only
//! `.md` files are parsed. The first error, from traversal, parsing or the
//! visitor, stops the walk.

use std::path::Path;
use std::time::Instant;

use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{NoteError, Result};
use crate::note::{is_note_file, Note};
use crate::trace_time;

/// Directory never descended into
pub const GIT_DIR: &str = ".git";

const WALK_HINT: &str = "error while traversing notes. If you're finding notes of specific category, directory for it may not exist";

fn is_git_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == GIT_DIR
}

/// Walk `root`, calling `visitor` with each note's path and parsed note
#[tracing::instrument(skip(root, config, visitor), fields(root = %root.display()))]
pub fn walk_notes<F>(root: &Path, config: &Config, mut visitor: F) -> Result<()>
where
    F: FnMut(&Path, Note) -> Result<()>,
{
    let start = Instant::now();
    let mut visited = 0usize;
    let result = walk_entries(root, config, &mut visitor, &mut visited);
    trace_time!(start, "walk_notes", visited = visited);
    result.map_err(|e| e.context(WALK_HINT))
}

fn walk_entries<F>(
    root: &Path,
    config: &Config,
    visitor: &mut F,
    visited: &mut usize,
) -> Result<()>
where
    F: FnMut(&Path, Note) -> Result<()>,
{
    for entry in WalkDir::new(root).into_iter().filter_entry(|e| !is_git_dir(e)) {
        let entry = entry.map_err(|e| {
            let at = e.path().unwrap_or(root).display().to_string();
            NoteError::io_operation("walk", at, e)
        })?;

        if entry.file_type().is_dir() || !is_note_file(entry.file_name()) {
            continue;
        }

        let note = Note::load(entry.path(), config)?;
        visitor(entry.path(), note)?;
        *visited += 1;
    }
    Ok(())
}
