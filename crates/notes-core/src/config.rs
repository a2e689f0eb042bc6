//! Configuration for notes
//!
//! The store root and editor come from environment variables first, then from
//! an optional `config.toml`, then from platform defaults. The resolved
//! [`Config`] is passed explicitly to every operation that needs it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NoteError, Result};

const APP_DIR: &str = "notes-cli";
const CONFIG_FILE: &str = "config.toml";

/// Store root override
pub const HOME_ENV_VAR: &str = "NOTES_CLI_HOME";
/// Editor command override
pub const EDITOR_ENV_VAR: &str = "NOTES_CLI_EDITOR";
/// Config directory override
pub const CONFIG_DIR_ENV_VAR: &str = "NOTES_CLI_CONFIG_DIR";
/// Fallback editor variable shared with other tools
pub const FALLBACK_EDITOR_ENV_VAR: &str = "EDITOR";

/// Optional on-disk settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Store root directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<PathBuf>,
    /// Editor command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

impl ConfigFile {
    fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| NoteError::config("unable to determine config directory"))?
                .join(APP_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load settings from a file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            NoteError::config(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            NoteError::config(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Resolved configuration shared by all note operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Store root; categories are its direct subdirectories
    pub home_path: PathBuf,
    /// Editor command, `None` when no editor is configured
    pub editor_path: Option<String>,
}

impl Config {
    /// Create a configuration from explicit values
    pub fn new(home_path: impl Into<PathBuf>, editor_path: Option<String>) -> Self {
        Config {
            home_path: home_path.into(),
            editor_path: editor_path.filter(|e| !e.is_empty()),
        }
    }

    /// Load configuration from the process environment and `config.toml`
    pub fn load() -> Result<Self> {
        let path = ConfigFile::config_path()?;
        let file = ConfigFile::load(&path)?;
        let config = Self::resolve(|key| std::env::var(key).ok(), file)?;
        tracing::debug!(
            home = %config.home_path.display(),
            editor = ?config.editor_path,
            config_file = %path.display(),
            "config_loaded"
        );
        Ok(config)
    }

    /// Resolve configuration from an environment lookup and file settings
    pub fn resolve<F>(lookup: F, file: ConfigFile) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let home_path = match non_empty(HOME_ENV_VAR) {
            Some(home) => PathBuf::from(home),
            None => match file.home {
                Some(home) => home,
                None => dirs::data_dir()
                    .ok_or_else(|| {
                        NoteError::config(format!(
                            "unable to determine data directory. Please set ${}",
                            HOME_ENV_VAR
                        ))
                    })?
                    .join(APP_DIR),
            },
        };

        let editor_path = non_empty(EDITOR_ENV_VAR)
            .or(file.editor.filter(|e| !e.is_empty()))
            .or_else(|| non_empty(FALLBACK_EDITOR_ENV_VAR));

        Ok(Config {
            home_path,
            editor_path,
        })
    }

    /// Directory holding the notes of one category
    pub fn category_dir(&self, category: &str) -> PathBuf {
        self.home_path.join(category)
    }
}
