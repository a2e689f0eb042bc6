//! Notes Core Library
//!
//! Note file format, parser, serializer and store walker for the notes CLI.

pub mod catalog;
pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod logging;
pub mod note;
pub mod walk;
