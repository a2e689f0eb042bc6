//! Editor launching
//!
//! Opening a note runs an interactive subprocess. The note code only talks to
//! the [`EditorLauncher`] trait so it can be exercised without spawning
//! anything.

use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::Command;

/// Outcome of an editor run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchStatus {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl LaunchStatus {
    /// Whether the editor exited successfully
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Capability to run an editor command
pub trait EditorLauncher {
    /// Run `command` with `args` in `cwd` and wait for it to finish
    fn launch(&self, command: &str, args: &[&OsStr], cwd: &Path) -> io::Result<LaunchStatus>;
}

/// Runs the editor as a child process sharing this process's terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl EditorLauncher for ProcessLauncher {
    fn launch(&self, command: &str, args: &[&OsStr], cwd: &Path) -> io::Result<LaunchStatus> {
        // `status()` inherits stdin/stdout/stderr
        let status = Command::new(command).args(args).current_dir(cwd).status()?;
        Ok(LaunchStatus {
            code: status.code(),
        })
    }
}
