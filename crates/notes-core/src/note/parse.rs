//! Loading notes from disk
//!
//! The header is read line by line through a small state machine:
//!
//! ```text
//! SeekingTitle --non-bar--> SeekingBar --bar--> ScanningMetadata --all set--> Done
//!      |                                              ^
//!      +--------------------bar-----------------------+
//! ```
//!
//! Reading stops as soon as every field is known, so lines after the metadata
//! block are never read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, FixedOffset};

use super::{parse_tags, Note, CATEGORY_PREFIX, CREATED_PREFIX, NO_TITLE, TAGS_PREFIX};
use crate::bail_parse;
use crate::config::Config;
use crate::error::{NoteError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingTitle,
    SeekingBar,
    ScanningMetadata,
    Done,
}

/// Header fields collected so far
#[derive(Debug, Default)]
struct Header {
    title: String,
    category: Option<String>,
    tags: Option<Vec<String>>,
    created: Option<DateTime<FixedOffset>>,
}

impl Header {
    fn is_complete(&self) -> bool {
        self.category.is_some()
            && self.tags.is_some()
            && self.created.is_some()
            && !self.title.is_empty()
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.category.is_none() {
            missing.push("Category");
        }
        if self.tags.is_none() {
            missing.push("Tags");
        }
        if self.created.is_none() {
            missing.push("Created");
        }
        missing
    }
}

struct HeaderScanner<'a> {
    path: &'a Path,
    dir_name: String,
    state: ScanState,
    header: Header,
}

impl<'a> HeaderScanner<'a> {
    fn new(path: &'a Path) -> Self {
        let dir_name = path
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string());

        HeaderScanner {
            path,
            dir_name,
            state: ScanState::SeekingTitle,
            header: Header::default(),
        }
    }

    fn feed(&mut self, line: &str) -> Result<()> {
        match self.state {
            ScanState::SeekingTitle | ScanState::SeekingBar => {
                if is_title_bar(line) {
                    if self.header.title.is_empty() {
                        self.header.title = NO_TITLE.to_string();
                    }
                    self.state = ScanState::ScanningMetadata;
                } else {
                    // Every line before the bar replaces the candidate, so only
                    // the line right above the bar ends up as the title.
                    self.header.title = line.to_string();
                    self.state = ScanState::SeekingBar;
                }
            }
            ScanState::ScanningMetadata => self.feed_metadata(line)?,
            ScanState::Done => {}
        }

        if self.state == ScanState::ScanningMetadata && self.header.is_complete() {
            self.state = ScanState::Done;
        }
        Ok(())
    }

    fn feed_metadata(&mut self, line: &str) -> Result<()> {
        if let Some(rest) = line.strip_prefix(CATEGORY_PREFIX) {
            let category = rest.trim();
            if category != self.dir_name {
                return Err(NoteError::Consistency {
                    path: self.path.to_path_buf(),
                    in_path: self.dir_name.clone(),
                    in_file: category.to_string(),
                });
            }
            self.header.category = Some(category.to_string());
        } else if let Some(rest) = line.strip_prefix(TAGS_PREFIX) {
            self.header.tags = Some(parse_tags(rest));
        } else if let Some(rest) = line.strip_prefix(CREATED_PREFIX) {
            let created = DateTime::parse_from_rfc3339(rest.trim()).map_err(|e| {
                NoteError::parse(
                    self.path,
                    format!("cannot parse created date time as RFC3339 format ({}): {}", e, line),
                )
            })?;
            self.header.created = Some(created);
        }
        Ok(())
    }

    fn finish(self, config: &Config) -> Result<Note> {
        if matches!(self.state, ScanState::SeekingTitle | ScanState::SeekingBar) {
            bail_parse!(
                self.path,
                "no title found. Didn't you use '====' bar for h1 title?"
            );
        }

        let missing = self.header.missing_fields();
        let Header {
            title,
            category: Some(category),
            tags: Some(tags),
            created: Some(created),
        } = self.header
        else {
            return Err(NoteError::validation(format!(
                "missing metadata {} in file '{}'. 'Category', 'Tags', 'Created' are mandatory",
                missing.join(", "),
                self.path.display()
            )));
        };

        let file = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(Note {
            category,
            tags,
            created,
            file,
            title,
            dir,
            config: config.clone(),
        })
    }
}

/// Whether a line is a title bar: one or more `=` and nothing else
fn is_title_bar(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b == b'=')
}

impl Note {
    /// Load a note from a file.
    ///
    /// The category in the header must equal the name of the directory that
    /// contains the file.
    #[tracing::instrument(skip(path, config), fields(path = %path.display()))]
    pub fn load(path: &Path, config: &Config) -> Result<Note> {
        let file = File::open(path)
            .map_err(|e| NoteError::io_operation("open note file", path.display(), e))?;
        Self::from_reader(BufReader::new(file), path, config)
    }

    /// Parse a note header from any buffered reader; `path` is where the
    /// content lives and decides the expected category.
    pub fn from_reader<R: BufRead>(reader: R, path: &Path, config: &Config) -> Result<Note> {
        let mut scanner = HeaderScanner::new(path);

        for line in reader.split(b'\n') {
            let line = match line {
                Ok(line) => line,
                Err(e) if scanner.state == ScanState::ScanningMetadata => {
                    return Err(NoteError::io_operation("read note file", path.display(), e));
                }
                Err(e) => bail_parse!(path, "cannot read note file before title bar: {}", e),
            };
            let line = String::from_utf8_lossy(&line);
            scanner.feed(line.strip_suffix('\r').unwrap_or(&line))?;
            if scanner.state == ScanState::Done {
                break;
            }
        }

        scanner.finish(config)
    }
}
