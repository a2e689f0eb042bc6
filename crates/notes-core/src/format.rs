//! Output format handling for notes
//!
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoteError;
use crate::note::Note;

/// Output format for notes commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(NoteError::UsageError(format!(
                "unknown format: {} (expected: human or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// JSON object describing a note, with its on-disk location
pub fn note_to_json(note: &Note) -> serde_json::Value {
    serde_json::json!({
        "title": note.display_title(),
        "category": note.category,
        "tags": note.tags,
        "created": note.created_rfc3339(),
        "file": note.file,
        "path": note.file_path().display().to_string(),
    })
}
