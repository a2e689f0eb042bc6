//! CLI commands for notes

pub mod categories;
pub mod config;
pub mod dispatch;
pub mod list;
pub mod new;
pub mod tags;
