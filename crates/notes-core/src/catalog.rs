//! Store-wide queries built on the walker: listing, categories and tags

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::config::Config;
use crate::error::{NoteError, Result};
use crate::note::Note;
use crate::walk::walk_notes;

/// Sort order for listed notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Newest first
    #[default]
    Created,
    /// File name, ascending
    Filename,
    /// Category, then file name
    Category,
}

impl SortBy {
    /// All valid sort keys
    pub const VALID: &'static [&'static str] = &["created", "filename", "category"];
}

impl FromStr for SortBy {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "created" => Ok(SortBy::Created),
            "filename" | "file" => Ok(SortBy::Filename),
            "category" => Ok(SortBy::Category),
            other => Err(NoteError::UsageError(format!(
                "unknown sort key: {} (expected: {})",
                other,
                Self::VALID.join(", ")
            ))),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Created => write!(f, "created"),
            SortBy::Filename => write!(f, "filename"),
            SortBy::Category => write!(f, "category"),
        }
    }
}

/// Filters applied while listing notes
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Keep notes whose category matches
    pub category: Option<Regex>,
    /// Keep notes with at least one matching tag
    pub tag: Option<Regex>,
}

impl ListFilter {
    /// Build a filter from optional regex sources
    pub fn new(category: Option<&str>, tag: Option<&str>) -> Result<Self> {
        let compile = |what: &str, pattern: &str| {
            Regex::new(pattern).map_err(|e| {
                NoteError::UsageError(format!("invalid {} pattern '{}': {}", what, pattern, e))
            })
        };

        Ok(ListFilter {
            category: category.map(|p| compile("category", p)).transpose()?,
            tag: tag.map(|p| compile("tag", p)).transpose()?,
        })
    }

    /// Whether a note passes the filter
    pub fn matches(&self, note: &Note) -> bool {
        if let Some(re) = &self.category {
            if !re.is_match(&note.category) {
                return false;
            }
        }
        if let Some(re) = &self.tag {
            if !note.tags.iter().any(|t| re.is_match(t)) {
                return false;
            }
        }
        true
    }
}

/// Collect every note in the store that passes `filter`, sorted by `sort`.
///
/// A store root that does not exist yet holds no notes.
pub fn list_notes(config: &Config, filter: &ListFilter, sort: SortBy) -> Result<Vec<Note>> {
    let mut notes = Vec::new();
    if !config.home_path.exists() {
        return Ok(notes);
    }

    walk_notes(&config.home_path, config, |_, note| {
        if filter.matches(&note) {
            notes.push(note);
        }
        Ok(())
    })?;

    sort_notes(&mut notes, sort);
    Ok(notes)
}

/// Sort notes in place
pub fn sort_notes(notes: &mut [Note], sort: SortBy) {
    match sort {
        SortBy::Created => notes.sort_by(|a, b| b.created.cmp(&a.created)),
        SortBy::Filename => notes.sort_by(|a, b| a.file.cmp(&b.file)),
        SortBy::Category => notes.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.file.cmp(&b.file))
        }),
    }
}

/// Names of all categories that contain at least one note
pub fn collect_categories(config: &Config) -> Result<Vec<String>> {
    let mut categories = BTreeSet::new();
    if !config.home_path.exists() {
        return Ok(Vec::new());
    }

    walk_notes(&config.home_path, config, |_, note| {
        categories.insert(note.category);
        Ok(())
    })?;

    Ok(categories.into_iter().collect())
}

/// All distinct tags, optionally restricted to one category.
///
/// Asking for a category whose directory does not exist is an error.
pub fn collect_tags(config: &Config, category: Option<&str>) -> Result<Vec<String>> {
    let root = match category {
        Some(category) => config.category_dir(category),
        None if !config.home_path.exists() => return Ok(Vec::new()),
        None => config.home_path.clone(),
    };

    let mut tags = BTreeSet::new();
    walk_notes(&root, config, |_, note| {
        tags.extend(note.tags);
        Ok(())
    })?;

    Ok(tags.into_iter().collect())
}
