//! Note data structures for notes
//!
//! A note is a plain-text file stored at `<home>/<category>/<file>.md`. It
//! starts with a title underlined by `=` characters, followed by three
//! metadata lines and the free-form body:
//!
//! ```text
//! Hello
//! =====
//! - Category: blog
//! - Tags: rust, cli
//! - Created: 2018-10-30T11:37:45+09:00
//!
//! body...
//! ```

mod body;
mod parse;

use std::ffi::OsStr;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Local, SecondsFormat, SubsecRound};

use crate::bail_validation;
use crate::config::{Config, EDITOR_ENV_VAR};
use crate::editor::EditorLauncher;
use crate::error::{NoteError, Result};

/// Extension of every note file
pub const NOTE_EXTENSION: &str = ".md";

/// Title used when the line before the title bar is empty
pub const NO_TITLE: &str = "(no title)";

pub(crate) const CATEGORY_PREFIX: &str = "- Category: ";
pub(crate) const TAGS_PREFIX: &str = "- Tags:";
pub(crate) const CREATED_PREFIX: &str = "- Created: ";

/// A single note: header metadata plus the configuration it lives in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Category, also the name of the directory holding the file
    pub category: String,
    /// Tags in authored order
    pub tags: Vec<String>,
    /// Creation time with the author's UTC offset
    pub created: DateTime<FixedOffset>,
    /// Base file name, always ending with [`NOTE_EXTENSION`]
    pub file: String,
    /// Title; empty for fresh notes means "use the file stem"
    pub title: String,
    /// Directory holding the file: `<home>/<category>` for fresh notes, the
    /// actual parent directory for loaded ones
    dir: PathBuf,
    config: Config,
}

impl Note {
    /// Construct a fresh, unsaved note stamped with the current time.
    ///
    /// `tags` is a raw comma separated list. Spaces in `file` become hyphens and
    /// the `.md` extension is appended when missing.
    pub fn new(
        category: &str,
        tags: &str,
        file: &str,
        title: &str,
        config: &Config,
    ) -> Result<Self> {
        if category.is_empty() {
            bail_validation!("category cannot be empty");
        }
        if matches!(category, "." | "..") || category.contains(['/', '\\']) {
            bail_validation!(
                "category '{}' must be a single directory name without path separators",
                category
            );
        }
        if file.is_empty() {
            bail_validation!("file name cannot be empty");
        }

        Ok(Note {
            category: category.to_string(),
            tags: parse_tags(tags),
            created: Local::now().fixed_offset().trunc_subsecs(0),
            file: normalize_file_name(file),
            title: title.to_string(),
            dir: config.category_dir(category),
            config: config.clone(),
        })
    }

    /// Configuration this note was created or loaded with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory containing the note file
    pub fn dir_path(&self) -> PathBuf {
        self.dir.clone()
    }

    /// Path of the note file, where it was loaded from or will be created
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(&self.file)
    }

    /// Path of the note file relative to the store root, or the full path
    /// when the note lives outside of it
    pub fn rel_file_path(&self) -> PathBuf {
        let path = self.file_path();
        match path.strip_prefix(&self.config.home_path) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => path,
        }
    }

    /// Title as written to disk: the explicit title, or the file stem
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            file_stem(&self.file)
        } else {
            &self.title
        }
    }

    /// Creation time in the on-disk format
    pub fn created_rfc3339(&self) -> String {
        self.created.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Render the header block written when the note is created
    pub fn render_header(&self) -> String {
        let title = self.display_title();
        format!(
            "{title}\n{bar}\n{CATEGORY_PREFIX}{category}\n{TAGS_PREFIX} {tags}\n{CREATED_PREFIX}{created}\n\n",
            bar = "=".repeat(title.len()),
            category = self.category,
            tags = self.tags.join(", "),
            created = self.created_rfc3339(),
        )
    }

    /// Write the note to disk as a new file.
    ///
    /// The category directory is created when missing. An existing file at the
    /// target path is never overwritten.
    #[tracing::instrument(skip(self), fields(path = %self.rel_file_path().display()))]
    pub fn create(&self) -> Result<()> {
        let header = self.render_header();

        let dir = self.dir_path();
        fs::create_dir_all(&dir).map_err(|e| {
            NoteError::io_operation("create category directory", dir.display(), e)
        })?;

        let path = dir.join(&self.file);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => NoteError::AlreadyExists {
                    path: self.rel_file_path(),
                },
                _ => NoteError::io_operation("write note to", path.display(), e),
            })?;

        file.write_all(header.as_bytes())
            .map_err(|e| NoteError::io_operation("write note to", path.display(), e))?;

        tracing::debug!(bytes = header.len(), "note_created");
        Ok(())
    }

    /// Open the note in the configured editor.
    ///
    /// The editor runs in the category directory and receives the absolute
    /// file path as its only argument.
    pub fn open(&self, launcher: &dyn EditorLauncher) -> Result<()> {
        let editor = self.config.editor_path.as_deref().ok_or_else(|| {
            NoteError::config(format!(
                "editor is not set. To open note in editor, please set ${}",
                EDITOR_ENV_VAR
            ))
        })?;

        let path = self.file_path();
        let dir = self.dir_path();
        tracing::debug!(editor, path = %path.display(), "open_editor");

        let status = launcher
            .launch(editor, &[path.as_os_str()], &dir)
            .map_err(|e| NoteError::io_operation("run editor", editor, e))?;

        if !status.success() {
            return Err(NoteError::io_operation(
                "run editor",
                editor,
                match status.code {
                    Some(code) => format!("exited with status {}", code),
                    None => "terminated by signal".to_string(),
                },
            ));
        }

        Ok(())
    }
}

/// Split a comma separated tag list, trimming pieces and dropping empty ones
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Replace spaces with hyphens and ensure the note extension
pub fn normalize_file_name(file: &str) -> String {
    let mut file = file.replace(' ', "-");
    if !file.ends_with(NOTE_EXTENSION) {
        file.push_str(NOTE_EXTENSION);
    }
    file
}

/// File name without its last extension
fn file_stem(file: &str) -> &str {
    match file.rfind('.') {
        Some(dot) => &file[..dot],
        None => file,
    }
}

/// Whether a file name has the note extension
pub fn is_note_file(name: &OsStr) -> bool {
    name.to_string_lossy().ends_with(NOTE_EXTENSION)
}
