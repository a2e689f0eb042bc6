//! Error types and exit codes for notes
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (filesystem, editor process)
//! - 2: Usage error (bad flags/args, missing configuration)
//! - 3: Data/store error (invalid note input, malformed header, category mismatch)

mod macros;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Exit codes used by the notes binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or configuration (2)
    Usage = 2,
    /// Data/store error - malformed or inconsistent notes (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Classification of a [`NoteError`], independent of any context wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad caller input or required metadata missing after a parse
    Validation,
    /// Malformed header: bad timestamp, no title bar, incomplete metadata stream
    Parse,
    /// Category in the header differs from the parent directory name
    Consistency,
    /// Creating the note would overwrite an existing file
    AlreadyExists,
    /// Required external configuration is missing or unreadable
    Config,
    /// Filesystem, subprocess or output serialization failure
    Io,
    /// Bad command line usage
    Usage,
}

impl ErrorKind {
    /// Stable identifier used in structured output
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation_error",
            ErrorKind::Parse => "parse_error",
            ErrorKind::Consistency => "consistency_error",
            ErrorKind::AlreadyExists => "already_exists",
            ErrorKind::Config => "config_error",
            ErrorKind::Io => "io_error",
            ErrorKind::Usage => "usage_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during note operations
#[derive(Error, Debug)]
pub enum NoteError {
    #[error("{0}")]
    Validation(String),

    #[error("{reason} in note {path:?}")]
    Parse { path: PathBuf, reason: String },

    #[error(
        "category does not match between file path and file content, in path '{in_path}' v.s. in file '{in_file}' ({path:?})"
    )]
    Consistency {
        path: PathBuf,
        in_path: String,
        in_file: String,
    },

    #[error("cannot create new note since file {path:?} already exists. Please edit it")]
    AlreadyExists { path: PathBuf },

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    UsageError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{message}: {source}")]
    Context {
        /// Description of the operation that failed
        message: String,
        /// Underlying cause
        source: Box<NoteError>,
    },
}

impl NoteError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        NoteError::Validation(message.into())
    }

    /// Create a header parse error for the given file
    pub fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        NoteError::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        NoteError::Config(message.into())
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl fmt::Display,
        error: impl fmt::Display,
    ) -> Self {
        NoteError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Wrap this error with a description of the operation that failed
    pub fn context(self, message: impl Into<String>) -> Self {
        NoteError::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// Kind of the innermost error, looking through context wrappers
    pub fn kind(&self) -> ErrorKind {
        match self {
            NoteError::Validation(_) => ErrorKind::Validation,
            NoteError::Parse { .. } => ErrorKind::Parse,
            NoteError::Consistency { .. } => ErrorKind::Consistency,
            NoteError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            NoteError::Config(_) => ErrorKind::Config,
            NoteError::UsageError(_) => ErrorKind::Usage,
            NoteError::Json(_) | NoteError::FailedOperationWithTarget { .. } => ErrorKind::Io,
            NoteError::Context { source, .. } => source.kind(),
        }
    }

    /// Innermost error beneath any context wrappers
    pub fn root_cause(&self) -> &NoteError {
        match self {
            NoteError::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self.kind() {
            ErrorKind::Usage | ErrorKind::Config => ExitCode::Usage,
            ErrorKind::Validation
            | ErrorKind::Parse
            | ErrorKind::Consistency
            | ErrorKind::AlreadyExists => ExitCode::Data,
            ErrorKind::Io => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.kind().as_str(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for note operations
pub type Result<T> = std::result::Result<T, NoteError>;
