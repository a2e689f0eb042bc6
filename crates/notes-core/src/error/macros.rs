//! Error macros for notes

/// Macro for returning validation errors
#[macro_export]
macro_rules! bail_validation {
    ($($arg:tt)*) => {
        return Err($crate::error::NoteError::validation(format!($($arg)*)))
    };
}

/// Macro for returning header parse errors for a file
#[macro_export]
macro_rules! bail_parse {
    ($path:expr, $($arg:tt)*) => {
        return Err($crate::error::NoteError::parse($path, format!($($arg)*)))
    };
}
